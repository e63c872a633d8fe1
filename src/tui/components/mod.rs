//! # TUI Components
//!
//! Stateless, props-based components. Each receives everything it draws as
//! struct fields and renders into the `Rect` it is given.
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── big_text.rs         (5-row block font)
//! ├── clock_face.rs       (countdown screen)
//! ├── flourish_screen.rs  (expiry animation frames)
//! └── footer.rs           (bottom-row key hints)
//! ```

pub mod big_text;
pub mod clock_face;
pub mod flourish_screen;
pub mod footer;

pub use clock_face::ClockFace;
pub use flourish_screen::FlourishScreen;
