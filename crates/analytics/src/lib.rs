//! # Payment Analytics
//!
//! This crate computes descriptive statistics over batches of payment
//! records. It is the whole of the system's logic: sanitize the raw amounts,
//! aggregate them, round the results for presentation.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every function here is a pure function of
//!   its input. Nothing is retained between calls, so repeated and
//!   concurrent use from independent call sites is trivially safe.
//!
//! ## Public API
//!
//! - `sanitize_amounts`: filters raw records down to usable amounts.
//! - `analyse_payments`: the end-to-end pipeline producing a `PaymentSummary`.
//! - `AnalyticsEngine`: the stateless calculator behind `analyse_payments`.
//! - `standard_deviation` / `round_to_two_dp`: the exposed utilities.
//! - `AnalyticsError`: the specific error types that can be returned.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;
pub mod rounding;
pub mod sanitize;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, analyse_payments, standard_deviation};
pub use error::AnalyticsError;
pub use report::PaymentSummary;
pub use rounding::round_to_two_dp;
pub use sanitize::sanitize_amounts;
