//! Step sink implementations.
//!
//! - [`PacedSink`]: renders each step through a [`FrameRenderer`], waits for
//!   the configured step delay, then honours the run's cancellation token.
//!   This is the sink the run controller builds for every run.
//! - [`RecordingSink`]: keeps every step in memory and can cancel at a fixed
//!   step. Used to observe algorithms directly.
//! - [`NullSink`]: resolves immediately. Used for headless comparisons and
//!   benchmarks.
//!
//! Rendering itself (bars on a screen, tones on a speaker) lives behind
//! [`FrameRenderer`] so the engine stays agnostic to it.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::error::{Result, SortError};
use crate::step::{StepEvent, StepSink};

/// Lowest tone emitted for a swapped element, in Hz.
pub const MIN_TONE_HZ: f64 = 300.0;
/// Highest tone emitted for a swapped element, in Hz.
pub const MAX_TONE_HZ: f64 = 1500.0;

/// Map an element value to a tone frequency, linear in `value / max_value`.
pub fn tone_frequency(value: f64, max_value: f64) -> f64 {
    if max_value <= 0.0 {
        return MIN_TONE_HZ;
    }
    MIN_TONE_HZ + (value / max_value) * (MAX_TONE_HZ - MIN_TONE_HZ)
}

/// Side-effect half of a step sink: draws or sounds a frame.
pub trait FrameRenderer: Send {
    /// Present one step. `max_value` is the largest element of the run's
    /// input and is meant for scaling bar heights and tone pitch.
    fn render(&mut self, step: &StepEvent, max_value: f64);
}

/// Sink that renders, sleeps for the step delay, then checks for cancellation.
pub struct PacedSink<'r, R> {
    renderer: &'r mut R,
    delay: Duration,
    token: CancellationToken,
    max_value: f64,
}

impl<'r, R: FrameRenderer> PacedSink<'r, R> {
    pub fn new(
        renderer: &'r mut R,
        delay: Duration,
        token: CancellationToken,
        max_value: f64,
    ) -> Self {
        Self {
            renderer,
            delay,
            token,
            max_value,
        }
    }
}

impl<R: FrameRenderer> StepSink for PacedSink<'_, R> {
    async fn emit(&mut self, step: StepEvent) -> Result<()> {
        self.renderer.render(&step, self.max_value);

        if self.delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.delay).await;
        }

        if self.token.is_cancelled() {
            return Err(SortError::Cancelled);
        }
        Ok(())
    }
}

/// Sink that records every step it receives.
#[derive(Debug)]
pub struct RecordingSink<T = f64> {
    steps: Vec<StepEvent<T>>,
    cancel_at: Option<usize>,
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            cancel_at: None,
        }
    }
}

impl<T> RecordingSink<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record steps normally, then fail the `n`th one (1-based) and every
    /// step after it with [`SortError::Cancelled`].
    pub fn cancel_at(n: usize) -> Self {
        Self {
            steps: Vec::new(),
            cancel_at: Some(n),
        }
    }

    pub fn steps(&self) -> &[StepEvent<T>] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<StepEvent<T>> {
        self.steps
    }
}

impl<T: Send> StepSink<T> for RecordingSink<T> {
    async fn emit(&mut self, step: StepEvent<T>) -> Result<()> {
        self.steps.push(step);
        match self.cancel_at {
            Some(n) if self.steps.len() >= n => Err(SortError::Cancelled),
            _ => Ok(()),
        }
    }
}

/// Sink that never suspends and never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl<T: Send> StepSink<T> for NullSink {
    async fn emit(&mut self, _step: StepEvent<T>) -> Result<()> {
        Ok(())
    }
}

/// Renderer that logs every frame at trace level, with the tones a speaker
/// would play for the swapped elements.
#[derive(Debug, Default)]
pub struct TracingRenderer {
    frames: usize,
}

impl TracingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl FrameRenderer for TracingRenderer {
    fn render(&mut self, step: &StepEvent, max_value: f64) {
        self.frames += 1;
        let tones: Vec<f64> = step
            .swapped
            .iter()
            .map(|&idx| tone_frequency(step.values[idx], max_value))
            .collect();
        trace!(
            frame = self.frames,
            saved = ?step.saved,
            compared = ?step.compared,
            swapped = ?step.swapped,
            tones_hz = ?tones,
            "step"
        );
    }
}

/// Renderer that keeps every frame it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<StepEvent>,
    max_value: Option<f64>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[StepEvent] {
        &self.frames
    }

    /// Scaling value passed with the most recent frame.
    pub fn max_value(&self) -> Option<f64> {
        self.max_value
    }
}

impl FrameRenderer for RecordingRenderer {
    fn render(&mut self, step: &StepEvent, max_value: f64) {
        self.frames.push(step.clone());
        self.max_value = Some(max_value);
    }
}
