//! [`CommandStream`] — rendezvous hand-off from a producer thread running
//! the linear expander to a single consumer.
//!
//! The channel has capacity zero: every `send` waits for the matching
//! `recv`, so at most one command is in flight no matter how large the
//! expansion is (hundreds of millions of commands at high levels).
//!
//! ## Lifecycle
//!
//! 1. [`CommandStream::spawn`] starts the producer thread, or fails with
//!    [`LSystemError::Spawn`].
//! 2. The consumer iterates; each `next()` receives exactly one command.
//! 3. When the outermost expansion returns, the producer drops its sender:
//!    the stream is closed and `next()` yields `None`, then keeps yielding
//!    `None` without blocking.
//! 4. [`CommandStream::finish`] joins the producer and reports a panic as
//!    [`LSystemError::ProducerPanicked`], so a truncated stream is never
//!    mistaken for a complete one.
//! 5. Dropping the stream early disconnects the channel; the producer sees
//!    its next `send` fail and stops. The thread is joined on drop.

use std::any::Any;
use std::iter::FusedIterator;
use std::ops::ControlFlow;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use crate::command::Command;
use crate::error::LSystemError;
use crate::expand::expand;
use crate::grammar::Grammar;

/// Lazy, single-pass, non-restartable sequence of [`Command`]s.
pub struct CommandStream {
    rx:       Option<Receiver<Command>>,
    producer: Option<JoinHandle<()>>,
    received: u64,
}

impl CommandStream {
    /// Start expanding `grammar` to `level` on a dedicated thread.
    pub fn spawn(grammar: Grammar, level: u32) -> Result<Self, LSystemError> {
        Self::with_producer(move |tx| {
            let _ = expand(&grammar, level, |cmd| match tx.send(cmd) {
                Ok(())  => ControlFlow::Continue(()),
                Err(_)  => ControlFlow::Break(()),
            });
            // `tx` dropped here: closes the stream.
        })
    }

    fn with_producer<P>(produce: P) -> Result<Self, LSystemError>
    where
        P: FnOnce(SyncSender<Command>) + Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel::<Command>(0);

        let producer = thread::Builder::new()
            .name("lsystem-expander".into())
            .spawn(move || produce(tx))
            .map_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("failed to spawn expander thread: {e}");
                LSystemError::Spawn(e.to_string())
            })?;

        Ok(Self { rx: Some(rx), producer: Some(producer), received: 0 })
    }

    /// Commands received so far.
    pub fn received(&self) -> u64 {
        self.received
    }

    /// Stop the stream and join the producer.
    ///
    /// Returns `Ok` when the producer ended normally, whether it ran to
    /// completion or stopped because the stream was closed early.
    pub fn finish(mut self) -> Result<(), LSystemError> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<(), LSystemError> {
        self.rx = None;
        match self.producer.take() {
            Some(handle) => handle
                .join()
                .map_err(|payload| LSystemError::ProducerPanicked(panic_message(payload.as_ref()))),
            None => Ok(()),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

impl Iterator for CommandStream {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        let rx = self.rx.as_ref()?;
        match rx.recv() {
            Ok(cmd) => {
                self.received += 1;
                Some(cmd)
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(received = self.received, "command stream closed");
                self.rx = None;
                None
            }
        }
    }
}

impl FusedIterator for CommandStream {}

impl Drop for CommandStream {
    fn drop(&mut self) {
        if let Err(_e) = self.shutdown() {
            #[cfg(feature = "tracing")]
            tracing::error!("{_e}");
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
