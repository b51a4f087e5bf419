//! Staged worker-pool pipeline engine.
//!
//! A pipeline is an ordered chain of components connected by bounded
//! channels: one [`Source`] feeding zero or more [`Stage`]s feeding one
//! [`Sink`]. Each stage runs a fixed number of worker threads that race on
//! the stage's shared input channel, so a slow item never stalls its
//! siblings (and no cross-item ordering is guaranteed above one worker).
//!
//! # Architecture
//!
//! ```text
//! ┌────────┐    ┌─────────────┐    ┌─────────────┐    ┌──────┐
//! │ Source │───>│   Stage 0   │───>│   Stage 1   │───>│ Sink │
//! │        │    │ (N workers) │    │ (M workers) │    │      │
//! └────────┘    └─────────────┘    └─────────────┘    └──────┘
//! ```
//!
//! # Wiring
//!
//! Component inputs and outputs are associated types, so the compiler
//! checks every `then` call: a stage can only be attached to a predecessor
//! producing its input type. There is no runtime attachment failure mode.
//!
//! # Shutdown
//!
//! Every worker of every component starts as soon as it is wired, before
//! any waiting happens, so a downstream stage can never deadlock against a
//! not-yet-started upstream. End-of-stream is signalled by channel
//! disconnection: each worker owns a clone of its stage's `Sender`, and
//! when the last worker returns, all clones drop and downstream `recv`
//! calls drain the buffer and then observe the disconnect. [`Pipeline::drain`]
//! joins workers in pipeline order (source first), which is exactly the
//! order in which the channels disconnect.
//!
//! # Failure
//!
//! A worker that fails returns its error through `drain`; the run does not
//! degrade silently. A worker whose `send` fails has lost its consumer,
//! which only happens when the run is already failing downstream, so the
//! worker stops cleanly and lets the real error surface.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{Result, anyhow};
use crossbeam_channel::{Receiver, Sender, bounded};

/// Extra slots a stage's output channel holds beyond one per worker:
/// enough to keep workers unblocked in steady state while still applying
/// backpressure to a producer outrunning its consumer.
const CHANNEL_SLACK: usize = 2;

/// Head of a pipeline: produces items until its input is exhausted.
///
/// A source runs exactly one worker and is consumed by the run.
pub trait Source: Send + 'static {
    /// Item type fed to the first stage.
    type Out: Send + 'static;

    /// Produces every item, then returns. A `send` error means the
    /// consumer stopped; return `Ok(())` and let the downstream error
    /// surface through [`Pipeline::drain`].
    fn run(self, out: &Sender<Self::Out>) -> Result<()>;
}

/// An intermediate pipeline component with a fixed parallelism degree.
pub trait Stage: Send + Sync + 'static {
    /// Item type consumed from the predecessor.
    type In: Send + 'static;
    /// Item type produced for the successor.
    type Out: Send + 'static;

    /// Number of parallel workers for this stage, fixed ahead of a run.
    fn worker_count(&self) -> usize {
        1
    }

    /// Executes one worker: consume `input` until it disconnects,
    /// producing any number of outputs along the way.
    fn run(&self, input: &Receiver<Self::In>, out: &Sender<Self::Out>) -> Result<()>;
}

/// Tail of a pipeline: consumes items until end-of-stream, then flushes.
///
/// A sink runs exactly one worker, making it the natural aggregation
/// point: state it owns needs no locking.
pub trait Sink: Send + 'static {
    /// Item type consumed from the last stage.
    type In: Send + 'static;

    /// Consumes every item and performs any end-of-run output.
    fn run(self, input: &Receiver<Self::In>) -> Result<()>;
}

/// A partially wired pipeline whose last component produces `T`.
///
/// Built with [`Pipeline::from_source`], extended with [`Pipeline::then`],
/// and executed with [`Pipeline::drain`]. Workers are already running
/// while the pipeline is being wired; `drain` only attaches the sink and
/// waits.
pub struct Pipeline<T: Send + 'static> {
    /// Worker handles grouped per component, in pipeline order.
    components: Vec<Vec<JoinHandle<Result<()>>>>,
    output: Receiver<T>,
}

impl<T: Send + 'static> Pipeline<T> {
    /// Starts `source` and returns a pipeline producing its items.
    #[must_use]
    pub fn from_source<S: Source<Out = T>>(source: S) -> Self {
        let (tx, rx) = bounded(1 + CHANNEL_SLACK);
        let handle = thread::spawn(move || source.run(&tx));
        Self { components: vec![vec![handle]], output: rx }
    }

    /// Attaches `stage` to the pipeline's current output and starts all of
    /// its workers.
    #[must_use]
    pub fn then<S: Stage<In = T>>(self, stage: S) -> Pipeline<S::Out> {
        let workers = stage.worker_count().max(1);
        let (tx, rx) = bounded(workers + CHANNEL_SLACK);
        let stage = Arc::new(stage);

        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let stage = Arc::clone(&stage);
            let input = self.output.clone();
            let tx = tx.clone();
            handles.push(thread::spawn(move || stage.run(&input, &tx)));
        }
        // The workers now hold the only senders; the channel disconnects
        // when the last of them returns.
        drop(tx);

        let mut components = self.components;
        components.push(handles);
        Pipeline { components, output: rx }
    }

    /// Attaches `sink`, waits for the whole pipeline to finish, and
    /// returns the first component error in pipeline order.
    pub fn drain<K: Sink<In = T>>(self, sink: K) -> Result<()> {
        let input = self.output;
        let sink_handle = thread::spawn(move || sink.run(&input));

        let mut first_error = None;
        for handles in self.components {
            for handle in handles {
                collect(handle, &mut first_error);
            }
        }
        collect(sink_handle, &mut first_error);

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Joins one worker, recording its error (or panic) if it is the first.
fn collect(handle: JoinHandle<Result<()>>, first_error: &mut Option<anyhow::Error>) {
    match handle.join() {
        Ok(Ok(())) => {}
        Ok(Err(error)) => {
            if first_error.is_none() {
                *first_error = Some(error);
            }
        }
        Err(_) => {
            if first_error.is_none() {
                *first_error = Some(anyhow!("pipeline worker panicked"));
            }
        }
    }
}
