//! Input subsystem.
//!
//! `keys` turns the host terminal into a blocking stream of key presses; `navigation`
//! turns those presses into menu selections.

pub mod keys;
pub mod navigation;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::input` rather than reaching into submodules.
pub use keys::{key_char, KeyClass, KeySource, TerminalKeys};
pub use navigation::{Navigation, Step};
