//! Instrumented sorting engine
//!
//! Selection, heap, quick and merge sort, rewritten so that every comparison,
//! swap and write is reported to a [`StepSink`] as a discrete step. The sink
//! decides how to present a step and how long to pause after it, and is the
//! only place a run can be cancelled.
//!
//! - [`step`]: step events, the sink contract and mutation accounting
//! - [`sink`]: paced, recording and null sinks, plus frame renderers
//! - [`selection_sort`], [`heap_sort`], [`quick_sort`], [`merge_sort`]
//! - [`algorithm`]: the closed algorithm set and dispatch by name
//! - [`controller`]: run orchestration with cancel-and-restart
//! - [`report`]: summaries of headless comparison runs

pub mod algorithm;
pub mod controller;
pub mod error;
pub mod heap_sort;
pub mod logging;
pub mod merge_sort;
pub mod quick_sort;
pub mod report;
pub mod selection_sort;
pub mod sink;
pub mod step;

pub use algorithm::Algorithm;
pub use controller::{RunConfig, RunController, RunOutcome, RunReport};
pub use error::{Result, SortError};
pub use sink::{FrameRenderer, NullSink, PacedSink, RecordingSink};
pub use step::{SortStats, StepEvent, StepSink};
