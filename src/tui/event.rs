//! # Input Multiplexer
//!
//! Three producers, one consumer:
//!
//! ```text
//!   tokio interval (100ms) ───────────────┐
//!   key-reader thread ── mpsc(1) ─────────┼──▶ InputMultiplexer::next() ──▶ render loop
//!   SIGINT / SIGTERM ── signal stream ────┘
//! ```
//!
//! Sources are polled with a biased `select!`: a pending signal wins over a
//! pending key, which wins over a tick. Within one source, events arrive in
//! emission order. A closed key channel or signal stream is dropped from the
//! select and the loop carries on with what is left.

use std::io::{self, ErrorKind, Read};
use std::time::Duration;

use futures::StreamExt;
use futures::stream::{self, BoxStream};
use log::{debug, info, trace, warn};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::time::{Interval, MissedTickBehavior};

use crate::core::action::InputEvent;

/// Room for one unread key. The reader never blocks on a full channel.
pub const KEY_CHANNEL_CAPACITY: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Interrupt,
    Terminate,
}

pub struct InputMultiplexer {
    ticker: Interval,
    keys: Option<mpsc::Receiver<u8>>,
    signals: Option<BoxStream<'static, Signal>>,
}

impl InputMultiplexer {
    /// Must be called inside a tokio runtime (the ticker needs its timer).
    pub fn new(
        tick_period: Duration,
        keys: mpsc::Receiver<u8>,
        signals: BoxStream<'static, Signal>,
    ) -> Self {
        Self {
            ticker: ticker(tick_period),
            keys: Some(keys),
            signals: Some(signals),
        }
    }

    pub fn tick_period(&self) -> Duration {
        self.ticker.period()
    }

    /// Swap the tick cadence. The first tick at the new period fires immediately.
    pub fn set_tick_period(&mut self, period: Duration) {
        debug!("Tick period set to {}", humantime::format_duration(period));
        self.ticker = ticker(period);
    }

    /// Wait for the next event from any source.
    pub async fn next(&mut self) -> InputEvent {
        loop {
            tokio::select! {
                biased;

                signal = next_signal(&mut self.signals) => match signal {
                    Some(signal) => {
                        info!("Received {signal:?} signal");
                        return InputEvent::TerminationSignal;
                    }
                    None => {
                        debug!("Signal stream ended");
                        self.signals = None;
                    }
                },
                key = next_key(&mut self.keys) => match key {
                    Some(key) => {
                        trace!("Key byte {key}");
                        return InputEvent::KeyPress(key);
                    }
                    None => {
                        debug!("Key reader closed, continuing on ticks and signals");
                        self.keys = None;
                    }
                },
                _ = self.ticker.tick() => return InputEvent::Tick,
            }
        }
    }
}

fn ticker(period: Duration) -> Interval {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

async fn next_signal(signals: &mut Option<BoxStream<'static, Signal>>) -> Option<Signal> {
    match signals {
        Some(stream) => stream.next().await,
        None => std::future::pending().await,
    }
}

async fn next_key(keys: &mut Option<mpsc::Receiver<u8>>) -> Option<u8> {
    match keys {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

// ============================================================================
// Producers
// ============================================================================

/// Forward raw stdin bytes. See [`spawn_key_reader_from`].
pub fn spawn_key_reader() -> mpsc::Receiver<u8> {
    spawn_key_reader_from(io::stdin())
}

/// Read one byte at a time on a dedicated thread and forward each byte.
///
/// The thread ends quietly on EOF, a read error, or when the receiver is
/// dropped; the channel then closes. A plain thread is used so a blocked
/// read never holds up runtime shutdown.
pub fn spawn_key_reader_from<R>(mut reader: R) -> mpsc::Receiver<u8>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel(KEY_CHANNEL_CAPACITY);

    let spawned = std::thread::Builder::new()
        .name("key-reader".to_string())
        .spawn(move || {
            let mut buf = [0u8; 1];
            loop {
                match reader.read(&mut buf) {
                    Ok(0) => {
                        debug!("Key reader reached end of input");
                        return;
                    }
                    Ok(_) => match tx.try_send(buf[0]) {
                        Ok(()) => {}
                        Err(TrySendError::Full(key)) => {
                            debug!("Dropped key {key}: previous key not consumed yet");
                        }
                        Err(TrySendError::Closed(_)) => return,
                    },
                    Err(e) if e.kind() == ErrorKind::Interrupted => {}
                    Err(e) => {
                        debug!("Key reader stopped: {e}");
                        return;
                    }
                }
            }
        });

    if let Err(e) = spawned {
        warn!("Failed to spawn key reader, keyboard input disabled: {e}");
    }
    rx
}

/// SIGINT and SIGTERM as a stream, one item per delivered signal.
#[cfg(unix)]
pub fn termination_signals() -> io::Result<BoxStream<'static, Signal>> {
    use tokio::signal::unix::{SignalKind, signal};

    let interrupt = signal(SignalKind::interrupt())?;
    let terminate = signal(SignalKind::terminate())?;

    let signals = stream::unfold(
        (interrupt, terminate),
        |(mut interrupt, mut terminate)| async move {
            let received = tokio::select! {
                Some(()) = interrupt.recv() => Signal::Interrupt,
                Some(()) = terminate.recv() => Signal::Terminate,
                else => return None,
            };
            Some((received, (interrupt, terminate)))
        },
    );
    Ok(signals.boxed())
}

/// Console Ctrl-C as a stream, one item per event.
#[cfg(not(unix))]
pub fn termination_signals() -> io::Result<BoxStream<'static, Signal>> {
    let signals = stream::unfold((), |()| async {
        tokio::signal::ctrl_c()
            .await
            .ok()
            .map(|()| (Signal::Interrupt, ()))
    });
    Ok(signals.boxed())
}
