#[macro_use] extern crate log;
extern crate rand;
extern crate rand_chacha;
extern crate rayon;

mod data;
mod disjoint_set;
mod error;
mod grid;
mod stats;

pub use data::{from_one_indexed, Direction, Site, SiteState};
pub use disjoint_set::DisjointSet;
pub use error::{PercolationError, Result};
pub use grid::{GMap, Percolation};
pub use stats::{run_trial, PercolationStats, SampleStatistics, Statistics, CONFIDENCE_95};
