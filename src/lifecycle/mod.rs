//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! External scheduler (cron, timer service)
//!     → health-check binary starts
//!     → load config → build publisher → build prober
//!     → trigger.rs: handle(event, context)
//!     → process exits
//! ```
//!
//! # Design Decisions
//! - One invocation per process; nothing persists between runs
//! - Fail fast: config and client errors abort before any probe
//! - Publish errors abort the invocation and surface as a non-zero exit

pub mod trigger;

pub use trigger::{handle, InvocationContext};
