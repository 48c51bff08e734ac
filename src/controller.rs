//! Run controller: one logical sorting run at a time.
//!
//! A run generates a fresh random input, drives the selected algorithm
//! through a [`PacedSink`], and reports the mutation count. Starting a run
//! first cancels whichever run is still in flight and waits one full step
//! interval, so the old run has observed the cancellation at its next step
//! boundary before the new one begins mutating anything.
//!
//! The cancellation signal is a [`CancellationToken`] per run, owned by the
//! controller. "Clearing" the signal means handing the next run a fresh
//! token; the old run keeps its cancelled one.

use std::ops::Range;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::algorithm::Algorithm;
use crate::error::{Result, SortError};
use crate::sink::{FrameRenderer, PacedSink};

/// Default pause between steps
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(20);
/// Default number of elements per run
pub const DEFAULT_SIZE: usize = 50;

/// Extra slack on top of one step delay before a new run may start.
const RESTART_SLACK: Duration = Duration::from_millis(1);

/// Knobs exposed to whoever starts runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Pause inside every step. Affects pacing only.
    pub step_delay: Duration,
    /// Number of elements generated per run.
    pub size: usize,
    /// Half-open range generated values are drawn from.
    pub value_range: Range<f64>,
    /// Fixed RNG seed, for reproducible inputs.
    pub seed: Option<u64>,
}

/// Value range used when only the element count is chosen: `0..2 * size`.
///
/// An empty run still gets the non-empty range `0..2`.
pub fn default_value_range(size: usize) -> Range<f64> {
    0.0..(size.max(1) * 2) as f64
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            step_delay: DEFAULT_STEP_DELAY,
            size: DEFAULT_SIZE,
            value_range: default_value_range(DEFAULT_SIZE),
            seed: None,
        }
    }
}

impl RunConfig {
    /// Reject ranges that cannot produce non-negative finite values.
    pub fn validate(&self) -> Result<()> {
        let Range { start, end } = self.value_range;
        if !start.is_finite() || !end.is_finite() {
            return Err(SortError::InvalidConfig {
                reason: format!("value range {}..{} must be finite", start, end),
            });
        }
        if start < 0.0 {
            return Err(SortError::InvalidConfig {
                reason: format!("value range start {} must not be negative", start),
            });
        }
        if start >= end {
            return Err(SortError::InvalidConfig {
                reason: format!("value range {}..{} is empty", start, end),
            });
        }
        Ok(())
    }
}

/// Summary of a run that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub algorithm: Algorithm,
    /// Number of elements sorted.
    pub len: usize,
    /// Largest generated value, passed to the renderer for scaling.
    pub max_value: f64,
    /// Swaps and writes performed on the sequence.
    pub mutations: usize,
    /// Steps handed to the sink.
    pub steps: usize,
    /// Final state of the sequence.
    pub values: Vec<f64>,
}

/// How a run ended, other than with an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(RunReport),
    /// A newer run (or [`RunController::cancel`]) stopped this one.
    Cancelled,
}

/// Starts runs and owns the cancellation signal shared with their sinks.
#[derive(Debug)]
pub struct RunController {
    config: RunConfig,
    signal: Mutex<CancellationToken>,
}

impl RunController {
    /// Create a controller, validating `config` up front.
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(RunController {
            config,
            signal: Mutex::new(CancellationToken::new()),
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Raise the cancellation signal for the run in flight, if any.
    pub fn cancel(&self) {
        self.signal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancel();
    }

    /// Run the algorithm named `name` on a fresh input.
    ///
    /// An unknown name fails immediately with [`SortError::UnknownAlgorithm`]
    /// without touching the run in flight.
    pub async fn run<R: FrameRenderer>(
        &self,
        name: &str,
        renderer: &mut R,
    ) -> Result<RunOutcome> {
        let algorithm: Algorithm = name.parse()?;
        self.run_algorithm(algorithm, renderer).await
    }

    /// Run `algorithm` on a fresh input, rendering each step through `renderer`.
    ///
    /// Cancellation is reported as [`RunOutcome::Cancelled`]; every other
    /// failure is returned unchanged.
    pub async fn run_algorithm<R: FrameRenderer>(
        &self,
        algorithm: Algorithm,
        renderer: &mut R,
    ) -> Result<RunOutcome> {
        let token = self.restart().await;
        if token.is_cancelled() {
            debug!(%algorithm, "run superseded before it started");
            return Ok(RunOutcome::Cancelled);
        }

        let mut values = self.generate_input();
        let max_value = max_value(&values);
        debug!(%algorithm, len = values.len(), max_value, "starting run");

        let mut sink = PacedSink::new(renderer, self.config.step_delay, token, max_value);
        match algorithm.sort(&mut values, &mut sink).await {
            Ok(stats) => {
                info!(%algorithm, mutations = stats.mutations, steps = stats.steps, "run complete");
                Ok(RunOutcome::Completed(RunReport {
                    algorithm,
                    len: values.len(),
                    max_value,
                    mutations: stats.mutations,
                    steps: stats.steps,
                    values,
                }))
            }
            Err(SortError::Cancelled) => {
                debug!(%algorithm, "run cancelled");
                Ok(RunOutcome::Cancelled)
            }
            Err(err) => Err(err),
        }
    }

    /// Generate an input sequence according to the configuration.
    pub fn generate_input(&self) -> Vec<f64> {
        match self.config.seed {
            Some(seed) => fill(&mut StdRng::seed_from_u64(seed), &self.config),
            None => fill(&mut rand::thread_rng(), &self.config),
        }
    }

    /// Cancel the previous run, install a fresh token for this one, then
    /// wait one step interval for the previous run to stop.
    ///
    /// If another restart lands during the wait, the returned token is
    /// already cancelled and the caller must not start.
    async fn restart(&self) -> CancellationToken {
        let token = CancellationToken::new();
        {
            let mut current = self.signal.lock().unwrap_or_else(PoisonError::into_inner);
            current.cancel();
            *current = token.clone();
        }

        tokio::time::sleep(self.config.step_delay + RESTART_SLACK).await;
        token
    }
}

fn fill<G: Rng>(rng: &mut G, config: &RunConfig) -> Vec<f64> {
    (0..config.size)
        .map(|_| rng.gen_range(config.value_range.clone()))
        .collect()
}

fn max_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}
