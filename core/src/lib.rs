//! Bolivian informal USD exchange-rate estimation.
//!
//! Two independent pipelines:
//!   - `simulator`: a seeded multi-factor random walk over twelve months.
//!   - `projector`: a least-squares trend over historical rates, projected
//!     forward, with USD → BOB conversion at a chosen month.

pub mod calendar;
pub mod chart;
pub mod config;
pub mod error;
pub mod factors;
pub mod input;
pub mod projector;
pub mod rng;
pub mod series;
pub mod simulator;
pub mod types;
