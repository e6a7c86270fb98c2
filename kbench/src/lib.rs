use std::sync::LazyLock;

use crate::time::TimeStamp;

pub mod batch;
pub mod config;
pub mod error;
pub mod eval;
pub mod io;
pub mod optimal;
pub mod report;
pub mod time;

pub static EPOCH: LazyLock<TimeStamp> = LazyLock::new(TimeStamp::now);
