//! Background Tasks Module
//!
//! Contains background tasks that run alongside the shell.
//!
//! # Tasks
//! - Cache Sweep: Evicts stale cache entries once per cache lifetime

mod sweep;

pub use sweep::{spawn_sweep_task, sweep_expired, MIN_SWEEP_PERIOD};
