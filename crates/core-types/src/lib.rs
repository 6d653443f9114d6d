pub mod record;

// Re-export the core types to provide a clean public API.
pub use record::{PaymentRecord, RawAmount};
