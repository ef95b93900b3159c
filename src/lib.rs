//! # screenprinter - Text Screens and Arrow-Key Menus for Terminal Games
//!
//! Presentation layer for simple text-based games: prints screens of text with optional
//! centering, frames and typewriter pacing, and runs menus the player navigates with the
//! arrow keys.
//!
//! ## Features
//!
//! - **Alignment**: center content horizontally, vertically, or both
//! - **Frames**: box borders around the whole screen, the menu options, or both
//! - **Typewriter pacing**: instant, per-line or per-character writes
//! - **Menus**: circular Up/Down selection confirmed with Enter, no arrow jitter
//! - **Stale input protection**: keys pressed while text is still animating are dropped
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`layout`] - Pure line transforms: centering, padding, arrows, borders
//! - [`input`] - Key sources and the menu navigation state machine
//! - [`render`] - Settings, output surfaces and the [`ScreenRenderer`]
//! - [`terminal`] - Raw-mode session for the host terminal

// Core modules
pub mod error;
pub mod layout;

// Subsystems
pub mod input;
pub mod render;
pub mod terminal;

#[cfg(feature = "config")]
pub mod config;

// Re-export commonly used types for convenience
pub use error::{Result, ScreenError};

// Public API surface for external usage
pub use input::{KeySource, TerminalKeys};
pub use layout::{ArrowPosition, BorderGlyphs};
pub use render::{
    Alignment, BorderStyle, OutputSurface, RenderSettings, ScreenRenderer, SettingsUpdate,
    TerminalOutput, WriteStyle,
};
pub use terminal::TerminalSession;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
