// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interactive collection of the seeding plan.
//!
//! Generic over reader/writer so tests can drive the prompts from a buffer.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{AppError, Result};
use crate::models::{MetricRange, SampleRanges, SeedPlan};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prompt the operator for the full seeding plan, in fixed order:
/// user id, start date, end date, then the step, water, sleep, and weight
/// ranges. Any malformed answer is fatal.
pub fn collect_plan<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<SeedPlan> {
    let user_id = read_line(input, output, "Enter user ID (e.g., 1000): ")?;
    if user_id.is_empty() {
        return Err(AppError::InvalidInput("user ID must not be empty".into()));
    }

    let start = parse_date(&read_line(input, output, "Enter start date (YYYY-MM-DD): ")?)?;
    let end = parse_date(&read_line(input, output, "Enter end date (YYYY-MM-DD): ")?)?;

    let steps = MetricRange::parse(&read_line(input, output, "Enter step range (min max): ")?, "step")?;
    let water = MetricRange::parse(&read_line(input, output, "Enter water range (min max): ")?, "water")?;
    let sleep = MetricRange::parse(&read_line(input, output, "Enter sleep range (min max): ")?, "sleep")?;
    let weight = MetricRange::parse(
        &read_line(input, output, "Enter weight range (min max): ")?,
        "weight",
    )?;

    SeedPlan::new(
        user_id,
        start,
        end,
        SampleRanges {
            steps,
            water,
            sleep,
            weight,
        },
    )
}

/// Strict `YYYY-MM-DD` parse.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| AppError::InvalidInput(format!("invalid date {:?}: {}", text, e)))
}

/// Write a prompt, flush, and read one trimmed line.
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        return Err(AppError::InvalidInput(
            "unexpected end of input while prompting".into(),
        ));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str) -> Result<SeedPlan> {
        let mut output = Vec::new();
        collect_plan(&mut Cursor::new(input), &mut output)
    }

    #[test]
    fn collects_a_full_plan() {
        let plan = collect("1000\n2024-01-01\n2024-01-02\n5000 6000\n1.5 2.5\n6 8\n70 75\n")
            .expect("plan should parse");

        assert_eq!(plan.user_id, "1000");
        assert_eq!(plan.day_count(), 2);
        assert_eq!(plan.ranges.steps.min(), 5000);
        assert_eq!(plan.ranges.steps.max(), 6000);
        assert_eq!(plan.ranges.weight.max(), 75.0);
    }

    #[test]
    fn prompts_in_fixed_order() {
        let mut output = Vec::new();
        let input = "u\n2024-01-01\n2024-01-01\n1 2\n1 2\n1 2\n1 2\n";
        collect_plan(&mut Cursor::new(input), &mut output).unwrap();

        let prompts = String::from_utf8(output).unwrap();
        let order = ["user ID", "start date", "end date", "step", "water", "sleep", "weight"];
        let mut last = 0;
        for needle in order {
            let at = prompts[last..].find(needle).expect("prompt present in order");
            last += at;
        }
    }

    #[test]
    fn rejects_malformed_date() {
        let err = collect("1000\n01/02/2024\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn rejects_out_of_range_calendar_date() {
        assert!(collect("1000\n2024-02-30\n").is_err());
    }

    #[test]
    fn rejects_reversed_date_bounds() {
        let err =
            collect("1000\n2024-01-02\n2024-01-01\n5000 6000\n1.5 2.5\n6 8\n70 75\n").unwrap_err();
        assert!(err.to_string().contains("after end date"));
    }

    #[test]
    fn rejects_inverted_step_range() {
        let err =
            collect("1000\n2024-01-01\n2024-01-02\n6000 5000\n").unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn rejects_truncated_input() {
        let err = collect("1000\n2024-01-01\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn rejects_empty_user_id() {
        assert!(collect("\n").is_err());
    }
}
