//! Polling subsystem.
//!
//! A background worker owns the fetch cadence and forwards results to the
//! coordinator over a channel; the protocol module defines the message types
//! exchanged between the two.

pub mod protocol;
pub mod worker;

pub use protocol::{PollCommand, PollResponse};
pub use worker::{poll_worker_loop, DEFAULT_POLL_INTERVAL};
