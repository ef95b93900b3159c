//! Rendering subsystem.
//!
//! Settings, the output surfaces screens are written to, and the renderer that ties
//! layout, pacing and the menu loop together.

pub mod screen;
pub mod settings;
pub mod surface;

pub use screen::ScreenRenderer;
pub use settings::{Alignment, BorderStyle, RenderSettings, SettingsUpdate, WriteStyle};
pub use surface::{OutputSurface, TerminalOutput};
