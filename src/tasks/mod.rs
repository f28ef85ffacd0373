//! Background Tasks Module
//!
//! Contains background tasks that run periodically while a cache is alive.
//!
//! # Tasks
//! - Expiry sweep: removes expired items from one cache at its configured interval

mod sweep;

pub use sweep::spawn_sweep_task;
