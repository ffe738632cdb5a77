extern crate percolation;
extern crate rand;
extern crate rand_chacha;

use percolation::{run_trial, PercolationStats, CONFIDENCE_95};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_thirty_trials_summary_is_sane() {
    for n in [2, 5, 20] {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let ps = PercolationStats::new(n, 30, &mut rng).unwrap();
        assert_eq!(ps.trials(), 30);
        assert_eq!(ps.grid_size(), n);

        let mean = ps.mean();
        assert!(mean > 0.0 && mean < 1.0, "n={} mean={}", n, mean);
        assert!(ps.stddev() >= 0.0);
        assert!(ps.confidence_low() <= mean);
        assert!(mean <= ps.confidence_high());

        let hw = CONFIDENCE_95 * ps.stddev() / 30f64.sqrt();
        assert!((ps.confidence_high() - ps.confidence_low() - 2.0 * hw).abs() < 1e-12);
    }
}

#[test]
fn test_thresholds_are_fractions_of_opened_sites() {
    let n = 7;
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let ps = PercolationStats::new(n, 20, &mut rng).unwrap();
    for &t in ps.thresholds() {
        // at least one full column is needed, and the count is an integer over n^2
        assert!(t >= n as f64 / (n * n) as f64 && t <= 1.0);
        let opened = t * (n * n) as f64;
        assert!((opened - opened.round()).abs() < 1e-9);
    }
}

#[test]
fn test_seeded_runs_repeat() {
    let a = PercolationStats::new(10, 15, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    let b = PercolationStats::new(10, 15, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    assert_eq!(a.thresholds(), b.thresholds());

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let t1 = run_trial(8, &mut rng).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    assert_eq!(run_trial(8, &mut rng).unwrap(), t1);
}

#[test]
fn test_parallel_matches_per_trial_seeds() {
    let seed = 100;
    let ps = PercolationStats::new_parallel(12, 16, seed).unwrap();
    assert_eq!(ps.trials(), 16);
    for (i, &t) in ps.thresholds().iter().enumerate() {
        let mut rng = ChaCha8Rng::seed_from_u64(seed + i as u64);
        assert_eq!(run_trial(12, &mut rng).unwrap(), t, "trial {}", i);
    }

    let again = PercolationStats::new_parallel(12, 16, seed).unwrap();
    assert_eq!(ps.thresholds(), again.thresholds());
}

#[test]
fn test_large_grid_mean_near_known_threshold() {
    // site percolation on the square lattice sits near 0.5927
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let ps = PercolationStats::new(64, 40, &mut rng).unwrap();
    assert!((ps.mean() - 0.5927).abs() < 0.05, "mean={}", ps.mean());
}
