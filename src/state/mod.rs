// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bookkeeping carried alongside a minimization run.

pub mod statistics;

pub use statistics::{Counters, Statistics};
