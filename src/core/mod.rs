//! # Core Countdown Logic
//!
//! Timers, the pomodoro cycle and the decisions the render loop takes.
//! It knows nothing about terminals, stdin or signals.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Timer / Pomodoro     │
//!                    │  • Countdown (variant)  │
//!                    │  • Action → update()    │
//!                    │  • Flourish frames      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  (ratatui) │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`timer`]: a duration counting down from a start instant
//! - [`pomodoro`]: focus + break timers behind a phase flag
//! - [`countdown`]: the `Countdown` enum over both modes
//! - [`action`]: events, actions, effects and `update()`
//! - [`flourish`]: the expiry animation as a frame counter
//! - [`config`]: CLI mode parsing and log settings

pub mod action;
pub mod config;
pub mod countdown;
pub mod flourish;
pub mod pomodoro;
pub mod timer;
