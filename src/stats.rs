use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::error::{positive, Result};
use crate::grid::Percolation;

/// z-score of the two-sided 95% interval under the normal approximation.
pub const CONFIDENCE_95: f64 = 1.96;

pub trait Statistics {
    fn mean(&self, xs: &[f64]) -> f64;
    /// Sample standard deviation (divides by `len - 1`).
    fn stddev(&self, xs: &[f64]) -> f64;
}

/// Textbook mean and sample standard deviation. A single sample has no
/// spread to measure, so `stddev` of one value is `NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleStatistics;

impl Statistics for SampleStatistics {
    fn mean(&self, xs: &[f64]) -> f64 {
        if xs.is_empty() {
            return f64::NAN;
        }
        xs.iter().sum::<f64>() / xs.len() as f64
    }

    fn stddev(&self, xs: &[f64]) -> f64 {
        if xs.len() < 2 {
            return f64::NAN;
        }
        let mu = self.mean(xs);
        let ss: f64 = xs.iter().map(|x| (x - mu) * (x - mu)).sum();
        (ss / (xs.len() - 1) as f64).sqrt()
    }
}

/// Opens uniformly random sites (with replacement) on a fresh `n`-by-`n` grid
/// until it percolates. Returns the fraction of open sites at that moment.
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<f64> {
    let mut p = Percolation::new(n)?;
    while !p.percolates() {
        let row = rng.gen_range(0..n) as i64;
        let col = rng.gen_range(0..n) as i64;
        p.open(row, col)?;
    }
    Ok(p.number_of_open_sites() as f64 / (n * n) as f64)
}

/// Percolation threshold estimate over independent trials.
#[derive(Debug, Clone)]
pub struct PercolationStats<S = SampleStatistics> {
    n: usize,
    thresholds: Vec<f64>,
    stats: S,
}

impl PercolationStats<SampleStatistics> {
    pub fn new<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        PercolationStats::with_statistics(n, trials, rng, SampleStatistics)
    }

    /// Runs trials on the rayon pool. Trial `i` draws from its own
    /// `ChaCha8Rng` seeded with `seed + i`, so results don't depend on scheduling.
    pub fn new_parallel(n: usize, trials: usize, seed: u64) -> Result<Self> {
        let n = positive("grid size", n)?;
        let trials = positive("trial count", trials)?;
        info!("running {} parallel trials on a {}x{} grid (seed {})", trials, n, n, seed);

        let thresholds = (0..trials)
            .into_par_iter()
            .map(|i| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(i as u64));
                run_trial(n, &mut rng)
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(PercolationStats { n, thresholds, stats: SampleStatistics })
    }
}

impl <S: Statistics> PercolationStats<S> {
    pub fn with_statistics<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R, stats: S) -> Result<Self> {
        let n = positive("grid size", n)?;
        let trials = positive("trial count", trials)?;
        info!("running {} trials on a {}x{} grid", trials, n, n);

        let mut thresholds = Vec::with_capacity(trials);
        for i in 0..trials {
            let t = run_trial(n, rng)?;
            debug!("trial {}: threshold {}", i, t);
            thresholds.push(t);
        }

        Ok(PercolationStats { n, thresholds, stats })
    }

    pub fn grid_size(&self) -> usize {
        self.n
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.stats.mean(&self.thresholds)
    }

    pub fn stddev(&self) -> f64 {
        self.stats.stddev(&self.thresholds)
    }

    pub fn confidence_low(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_high(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}
