//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, merges ticks, keys and
//! signals into one event stream, feeds them to `core::action::update()`
//! and paints whatever the resulting `Effect` asks for.
//!
//! This is the only module that knows about ratatui, crossterm, stdin and
//! OS signals.
//!
//! ## Redraw Strategy
//!
//! - **Counting**: one redraw per 100ms tick.
//! - **Flourish**: the tick period switches to the flourish frame period
//!   (200ms or 300ms) and each tick paints one frame; it switches back
//!   afterwards.
//!
//! ## Terminal Ownership
//!
//! `TerminalGuard` enters raw mode and the alternate screen on acquire and
//! restores both on drop. Signals are caught and routed through the loop,
//! so every exit path (expiry, cancel key, SIGINT/SIGTERM, paint error)
//! unwinds through the guard.

mod component;
mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::fmt;
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::tty::IsTty;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, ExitReason, update};
use crate::core::config::Mode;
use crate::core::countdown::{Countdown, CountdownView};
use crate::core::flourish::{Flourish, FlourishKind, FlourishOutcome, FlourishStep};
use crate::tui::event::InputMultiplexer;

/// Redraw cadence while counting down.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

// ============================================================================
// Painting
// ============================================================================

/// One full-screen picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Countdown(CountdownView),
    Flourish { kind: FlourishKind, visible: bool },
}

/// Where the render loop sends its scenes.
pub trait Painter {
    fn paint(&mut self, scene: &Scene) -> io::Result<()>;
}

impl Painter for DefaultTerminal {
    fn paint(&mut self, scene: &Scene) -> io::Result<()> {
        self.draw(|frame| ui::draw_scene(frame, scene))?;
        Ok(())
    }
}

// ============================================================================
// Terminal
// ============================================================================

#[derive(Debug)]
pub enum TerminalError {
    /// Stdin is not an interactive terminal.
    NotATerminal,
    /// Raw mode or the alternate screen could not be entered.
    RawMode(io::Error),
    /// Signal handlers could not be installed.
    Signals(io::Error),
    /// Writing to the terminal failed mid-run.
    Io(io::Error),
}

impl fmt::Display for TerminalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalError::NotATerminal => write!(f, "stdin is not a terminal"),
            TerminalError::RawMode(e) => write!(f, "failed to set terminal to raw mode: {e}"),
            TerminalError::Signals(e) => write!(f, "failed to install signal handlers: {e}"),
            TerminalError::Io(e) => write!(f, "terminal I/O error: {e}"),
        }
    }
}

impl std::error::Error for TerminalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerminalError::NotATerminal => None,
            TerminalError::RawMode(e) | TerminalError::Signals(e) | TerminalError::Io(e) => {
                Some(e)
            }
        }
    }
}

/// Raw mode + alternate screen + hidden cursor for as long as it lives.
pub struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self, TerminalError> {
        if !io::stdin().is_tty() {
            return Err(TerminalError::NotATerminal);
        }

        let terminal = ratatui::try_init().map_err(|e| {
            // Raw mode may already be on if the alternate screen failed
            ratatui::restore();
            TerminalError::RawMode(e)
        })?;
        let guard = Self { terminal };

        execute!(stdout(), Hide).map_err(TerminalError::Io)?;
        info!("Terminal acquired (raw mode, alternate screen, cursor hidden)");
        Ok(guard)
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
        let _ = execute!(stdout(), Show);
        debug!("Terminal restored");
    }
}

// ============================================================================
// Render Loop
// ============================================================================

/// Take over the terminal and count down `mode` until it ends.
///
/// The terminal is restored before this returns, so the caller can print
/// the farewell line to the normal screen.
pub async fn run(mode: Mode) -> Result<ExitReason, TerminalError> {
    let signals = event::termination_signals().map_err(TerminalError::Signals)?;
    let mut guard = TerminalGuard::acquire()?;

    let keys = event::spawn_key_reader();
    let mut input = InputMultiplexer::new(TICK_PERIOD, keys, signals);
    let mut countdown = Countdown::start(mode);
    info!("Countdown started: {mode:?}");

    let result = drive(guard.terminal(), &mut countdown, &mut input).await;
    drop(guard);
    result.map_err(TerminalError::Io)
}

/// The control loop. Sole owner of `countdown` while it runs.
pub async fn drive<P: Painter>(
    painter: &mut P,
    countdown: &mut Countdown,
    input: &mut InputMultiplexer,
) -> io::Result<ExitReason> {
    let mut action = Action::Input(input.next().await);
    loop {
        action = match update(countdown, action) {
            Effect::None => Action::Input(input.next().await),
            Effect::Redraw => {
                painter.paint(&Scene::Countdown(countdown.view()))?;
                Action::Input(input.next().await)
            }
            Effect::StartFlourish(kind) => {
                painter.paint(&Scene::Countdown(countdown.view()))?;
                Action::FlourishEnded(run_flourish(painter, input, kind).await?)
            }
            Effect::Exit(reason) => {
                info!("Render loop finished: {reason:?}");
                return Ok(reason);
            }
        };
    }
}

async fn run_flourish<P: Painter>(
    painter: &mut P,
    input: &mut InputMultiplexer,
    kind: FlourishKind,
) -> io::Result<FlourishOutcome> {
    let counting_period = input.tick_period();
    input.set_tick_period(kind.frame_period());

    let mut flourish = Flourish::new(kind);
    let outcome = loop {
        match flourish.handle(input.next().await) {
            FlourishStep::Draw { visible } => {
                painter.paint(&Scene::Flourish { kind, visible })?;
            }
            FlourishStep::Ignore => {}
            FlourishStep::Done(outcome) => break outcome,
        }
    };

    debug!("{kind:?} flourish ended after {} frames: {outcome:?}", flourish.frames());
    input.set_tick_period(counting_period);
    Ok(outcome)
}
