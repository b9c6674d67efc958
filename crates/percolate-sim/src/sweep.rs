//! Probability sweeps: the largest-cluster fraction as a function of `p`.
//!
//! Trials are independent, so they fan out to worker threads. Each worker
//! owns one [`LatticeGraph`] and pulls `(point, trial)` jobs from a shared
//! channel; results come back over a second channel and are folded per
//! probability. Trial seeds are derived from `(seed, point, trial)`, which
//! makes the output identical for any worker count.

use crate::config::{validate_probability, validate_size};
use crate::error::SimError;
use crossbeam_channel::{Receiver, Sender};
use percolate_lattice::LatticeGraph;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::thread;
use tracing::{debug, info};

/// Settings for [`run`].
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    /// Lattice side length used by every trial.
    pub size: u32,
    /// Bond probabilities to sample, reported in this order.
    pub probabilities: Vec<f64>,
    /// Independent lattices generated per probability. Must be at least 1.
    pub trials: u32,
    /// Base seed from which every trial seed is derived.
    pub seed: u64,
    /// Worker threads. Must be at least 1.
    pub workers: usize,
}

impl SweepConfig {
    /// `steps` evenly spaced probabilities covering `[0, 1]` inclusive,
    /// one worker per available core.
    ///
    /// ```
    /// use percolate_sim::SweepConfig;
    ///
    /// let cfg = SweepConfig::linspace(32, 5, 10);
    /// assert_eq!(cfg.probabilities, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn linspace(size: u32, steps: usize, trials: u32) -> Self {
        let probabilities = match steps {
            0 => Vec::new(),
            1 => vec![0.5],
            _ => (0..steps)
                .map(|i| i as f64 / (steps - 1) as f64)
                .collect(),
        };
        Self {
            size,
            probabilities,
            trials,
            seed: 0,
            workers: thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }

    /// Check every field without running anything.
    pub fn validate(&self) -> Result<(), SimError> {
        validate_size(self.size)?;
        for &p in &self.probabilities {
            validate_probability(p)?;
        }
        if self.trials == 0 {
            return Err(SimError::InvalidConfig {
                reason: "trials must be at least 1".into(),
            });
        }
        if self.workers == 0 {
            return Err(SimError::InvalidConfig {
                reason: "workers must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Aggregated statistics for one probability.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepPoint {
    /// Bond probability of this point.
    pub probability: f64,
    /// Number of lattices generated.
    pub trials: u32,
    /// Mean over trials of `largest cluster / size²`.
    pub mean_largest_fraction: f64,
    /// Maximum over trials of `largest cluster / size²`.
    pub max_largest_fraction: f64,
    /// Mean number of clusters per lattice.
    pub mean_component_count: f64,
}

#[derive(Clone, Copy, Debug)]
struct Job {
    point: usize,
    trial: u32,
}

#[derive(Clone, Copy, Debug)]
struct TrialResult {
    point: usize,
    largest: usize,
    components: usize,
}

/// Seed for one trial. SplitMix64 finaliser over the mixed coordinates.
pub(crate) fn trial_seed(seed: u64, point: usize, trial: u32) -> u64 {
    let mut z = seed
        ^ (point as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ u64::from(trial).wrapping_mul(0xD1B5_4A32_D192_ED03);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Run every trial of `config` and aggregate per probability.
///
/// Points are returned in the order of `config.probabilities`.
pub fn run(config: &SweepConfig) -> Result<Vec<SweepPoint>, SimError> {
    config.validate()?;
    let jobs: Vec<Job> = (0..config.probabilities.len())
        .flat_map(|point| (0..config.trials).map(move |trial| Job { point, trial }))
        .collect();
    let workers = config.workers.min(jobs.len()).max(1);
    info!(
        size = config.size,
        points = config.probabilities.len(),
        trials = config.trials,
        workers,
        "sweep started"
    );

    let (job_tx, job_rx) = crossbeam_channel::unbounded::<Job>();
    for job in &jobs {
        job_tx
            .send(*job)
            .map_err(|_| SimError::InvalidConfig {
                reason: "job queue closed".into(),
            })?;
    }
    drop(job_tx);

    let lattices = (0..workers)
        .map(|_| LatticeGraph::new(config.size))
        .collect::<Result<Vec<_>, _>>()?;

    let (result_tx, result_rx) = crossbeam_channel::unbounded::<Result<TrialResult, SimError>>();
    let outcomes: Vec<thread::Result<()>> = thread::scope(|scope| {
        let handles: Vec<_> = lattices
            .into_iter()
            .map(|lattice| {
                let jobs = job_rx.clone();
                let results = result_tx.clone();
                scope.spawn(move || worker(config, lattice, &jobs, &results))
            })
            .collect();
        handles.into_iter().map(|h| h.join()).collect()
    });
    drop(result_tx);
    if outcomes.iter().any(Result::is_err) {
        return Err(SimError::WorkerPanicked);
    }

    // Integer accumulators keep the totals independent of arrival order.
    let mut largest_sum = vec![0usize; config.probabilities.len()];
    let mut largest_max = vec![0usize; config.probabilities.len()];
    let mut component_sum = vec![0usize; config.probabilities.len()];
    for result in result_rx.iter() {
        let r = result?;
        largest_sum[r.point] += r.largest;
        largest_max[r.point] = largest_max[r.point].max(r.largest);
        component_sum[r.point] += r.components;
    }

    let cells = (config.size as f64) * (config.size as f64);
    let trials = f64::from(config.trials);
    let points = config
        .probabilities
        .iter()
        .enumerate()
        .map(|(i, &probability)| {
            let point = SweepPoint {
                probability,
                trials: config.trials,
                mean_largest_fraction: largest_sum[i] as f64 / (trials * cells),
                max_largest_fraction: largest_max[i] as f64 / cells,
                mean_component_count: component_sum[i] as f64 / trials,
            };
            debug!(
                probability,
                mean = point.mean_largest_fraction,
                max = point.max_largest_fraction,
                "sweep point"
            );
            point
        })
        .collect();
    Ok(points)
}

/// Drain `jobs`, reusing `lattice` for every trial.
fn worker(
    config: &SweepConfig,
    mut lattice: LatticeGraph,
    jobs: &Receiver<Job>,
    results: &Sender<Result<TrialResult, SimError>>,
) {
    for job in jobs.iter() {
        lattice.clear_edges();
        let mut rng = ChaCha8Rng::seed_from_u64(trial_seed(config.seed, job.point, job.trial));
        let outcome = lattice
            .generate_edges(config.probabilities[job.point], &mut rng)
            .map(|_| {
                let sizes = lattice.component_sizes();
                TrialResult {
                    point: job.point,
                    largest: sizes.iter().copied().max().unwrap_or(0),
                    components: sizes.len(),
                }
            })
            .map_err(SimError::from);
        if results.send(outcome).is_err() {
            return;
        }
    }
}
