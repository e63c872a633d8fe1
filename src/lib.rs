//! Terminal countdown timer with a pomodoro mode.

pub mod core;
pub mod tui;
