#![deny(missing_docs)]
//! An AWS Lambda function that prints the current local time as
//! `YYYY/MM/DD HH:MM` followed by how many times each digit `0`–`9`
//! appears in it.
//!
//! ```text
//! Current time: 2024/01/05 13:47
//! Digit	Instances
//! 0	3
//! 1	2
//! ...
//! 9	0
//! ```
//!
//! The binary registers [`handler`] with [`lamedh_runtime`]. The pieces it is
//! made of take an explicit [`Clock`] and output sink so they can be driven
//! with a fixed time.

pub mod clock;
mod handler;
pub mod report;
pub mod tally;
pub mod timestamp;

pub use crate::{
    clock::{Clock, FixedClock, SystemClock},
    handler::{handle, handler},
    report::{report_current_time_digits, Report},
    tally::DigitTally,
    timestamp::Timestamp,
};
