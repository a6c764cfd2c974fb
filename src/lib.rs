#![no_std]

//! Fixed-capacity buffers for summarising a stream of sensor samples.
//!
//! * [`MinMaxTracker`] keeps the running minimum and maximum.
//! * [`HistoryRing`] keeps the last `N` samples for lookback.
//! * [`MovingAverage`] keeps the last `N` samples and their running sum, yielding a boxcar average
//!   on every add.
//!
//! All three are [`Sink`]s: the first sample after construction or a reset seeds them, and for
//! the ring-backed ones that seed is copied into every slot. Nothing allocates and every add is
//! O(1). None of the types synchronise internally; share them behind your own mutex.

pub mod accumulator;
pub mod error;
pub mod history;
pub mod min_max;
pub mod moving_avg;
mod ring;
pub mod sink;

pub use accumulator::Accumulator;
pub use error::LookbackError;
pub use history::HistoryRing;
pub use min_max::MinMaxTracker;
pub use moving_avg::MovingAverage;
pub use sink::Sink;
