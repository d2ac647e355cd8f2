//! Health probing subsystem.
//!
//! # Data Flow
//! ```text
//! HealthProber::run (prober.rs):
//!     For each endpoint, in configured order
//!     → one GET, transport default timeout, no retry
//!     → classify into ProbeOutcome (endpoint.rs)
//!     → log the outcome line
//!     → on failure: Notifier::notify
//! ```
//!
//! # Design Decisions
//! - Probes run one at a time; the next starts after the previous completes
//! - Only 200 counts as healthy; any other response is a failure
//! - Probe errors are values, never abort the run
//! - No state survives between runs

pub mod endpoint;
pub mod prober;

pub use endpoint::{Endpoint, ProbeOutcome, ProbeResult};
pub use prober::HealthProber;
