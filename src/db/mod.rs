//! Database layer (Firestore REST API).

pub mod firestore;

pub use firestore::FirestoreRestClient;

/// Collection names as constants.
pub mod collections {
    /// Per-user metric data, with one sub-collection per metric
    pub const USER_DATA: &str = "userData";
}
