//! Render settings and their partial updates.

use crate::error::{Result, ScreenError};
use crate::layout::{ArrowPosition, BorderGlyphs};
use std::fmt;
use std::str::FromStr;

/// Screen width used when the terminal size is unknown.
pub const DEFAULT_SCREEN_WIDTH: u16 = 80;

/// How each line is paced as it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum WriteStyle {
    /// Whole line at once
    #[default]
    Instant,
    /// Sleep, then write the whole line
    PerLineDelay,
    /// Sleep before every visible character (typewriter effect)
    PerCharDelay,
}

/// Where rendered content sits on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Alignment {
    Normal,
    CenteredHorizontally,
    CenteredVertically,
    #[default]
    CenteredBoth,
}

impl Alignment {
    pub fn centers_horizontally(self) -> bool {
        matches!(
            self,
            Alignment::CenteredHorizontally | Alignment::CenteredBoth
        )
    }

    pub fn centers_vertically(self) -> bool {
        matches!(self, Alignment::CenteredVertically | Alignment::CenteredBoth)
    }
}

/// Which surfaces get a frame, and whether framed menu options are centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum BorderStyle {
    #[default]
    None,
    MenuOnly,
    MenuOnlyCentered,
    ScreenOnly,
    MenuAndScreen,
    MenuCenteredAndScreen,
}

impl BorderStyle {
    pub fn frames_menu(self) -> bool {
        matches!(
            self,
            BorderStyle::MenuOnly
                | BorderStyle::MenuOnlyCentered
                | BorderStyle::MenuAndScreen
                | BorderStyle::MenuCenteredAndScreen
        )
    }

    pub fn centers_menu(self) -> bool {
        matches!(
            self,
            BorderStyle::MenuOnlyCentered | BorderStyle::MenuCenteredAndScreen
        )
    }

    pub fn frames_screen(self) -> bool {
        matches!(
            self,
            BorderStyle::ScreenOnly
                | BorderStyle::MenuAndScreen
                | BorderStyle::MenuCenteredAndScreen
        )
    }
}

/// Closed name tables shared by `Display` and `FromStr`.
macro_rules! named_variants {
    ($ty:ident, $what:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const NAMES: &'static [&'static str] = &[$($name),+];
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let name = match self {
                    $($ty::$variant => $name,)+
                };
                f.write_str(name)
            }
        }

        impl FromStr for $ty {
            type Err = ScreenError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    other => Err(ScreenError::unsupported(format!(
                        concat!("unknown ", $what, " '{}' (expected one of: {})"),
                        other,
                        Self::NAMES.join(", ")
                    ))),
                }
            }
        }
    };
}

named_variants!(WriteStyle, "write style", {
    Instant => "instant",
    PerLineDelay => "per-line-delay",
    PerCharDelay => "per-char-delay",
});

named_variants!(Alignment, "alignment", {
    Normal => "normal",
    CenteredHorizontally => "centered-horizontally",
    CenteredVertically => "centered-vertically",
    CenteredBoth => "centered-both",
});

named_variants!(BorderStyle, "border style", {
    None => "none",
    MenuOnly => "menu-only",
    MenuOnlyCentered => "menu-only-centered",
    ScreenOnly => "screen-only",
    MenuAndScreen => "menu-and-screen",
    MenuCenteredAndScreen => "menu-centered-and-screen",
});

/// Everything that controls how a screen is laid out and paced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// Pause used by the delayed write styles, in milliseconds
    pub sleep_interval_ms: u64,
    /// Width that horizontal centering centers within; always greater than 0
    pub screen_width: u16,
    pub write_style: WriteStyle,
    pub alignment: Alignment,
    pub arrow_position: ArrowPosition,
    pub border_style: BorderStyle,
    pub border_glyphs: BorderGlyphs,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            sleep_interval_ms: 0,
            screen_width: DEFAULT_SCREEN_WIDTH,
            write_style: WriteStyle::Instant,
            alignment: Alignment::CenteredBoth,
            arrow_position: ArrowPosition::BeforeAndAfter,
            border_style: BorderStyle::None,
            border_glyphs: BorderGlyphs::Plain,
        }
    }
}

impl RenderSettings {
    /// Defaults sized to the current terminal, falling back to [`DEFAULT_SCREEN_WIDTH`].
    pub fn for_terminal() -> Self {
        let screen_width = match ratatui::crossterm::terminal::size() {
            Ok((width, _)) if width > 0 => width,
            Ok(_) => DEFAULT_SCREEN_WIDTH,
            Err(err) => {
                log::debug!("terminal size unavailable, using width {DEFAULT_SCREEN_WIDTH}: {err}");
                DEFAULT_SCREEN_WIDTH
            }
        };
        Self {
            screen_width,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.screen_width == 0 {
            return Err(ScreenError::configuration(
                "screen width must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Merge `update` into these settings. Fields the update leaves unset keep their
    /// current value. An update that would produce invalid settings changes nothing.
    pub fn apply(&mut self, update: &SettingsUpdate) -> Result<()> {
        let mut merged = self.clone();
        if let Some(ms) = update.sleep_interval_ms {
            merged.sleep_interval_ms = ms;
        }
        if let Some(width) = update.screen_width {
            merged.screen_width = width;
        }
        if let Some(style) = update.write_style {
            merged.write_style = style;
        }
        if let Some(alignment) = update.alignment {
            merged.alignment = alignment;
        }
        if let Some(position) = update.arrow_position {
            merged.arrow_position = position;
        }
        if let Some(style) = update.border_style {
            merged.border_style = style;
        }
        if let Some(glyphs) = update.border_glyphs {
            merged.border_glyphs = glyphs;
        }
        merged.validate()?;
        *self = merged;
        Ok(())
    }
}

/// A partial [`RenderSettings`]: only the fields that are `Some` get changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case", deny_unknown_fields)
)]
pub struct SettingsUpdate {
    pub sleep_interval_ms: Option<u64>,
    pub screen_width: Option<u16>,
    pub write_style: Option<WriteStyle>,
    pub alignment: Option<Alignment>,
    pub arrow_position: Option<ArrowPosition>,
    pub border_style: Option<BorderStyle>,
    pub border_glyphs: Option<BorderGlyphs>,
}

impl SettingsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn sleep_interval_ms(mut self, ms: u64) -> Self {
        self.sleep_interval_ms = Some(ms);
        self
    }

    pub fn screen_width(mut self, width: u16) -> Self {
        self.screen_width = Some(width);
        self
    }

    pub fn write_style(mut self, style: WriteStyle) -> Self {
        self.write_style = Some(style);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn arrow_position(mut self, position: ArrowPosition) -> Self {
        self.arrow_position = Some(position);
        self
    }

    pub fn border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = Some(style);
        self
    }

    pub fn border_glyphs(mut self, glyphs: BorderGlyphs) -> Self {
        self.border_glyphs = Some(glyphs);
        self
    }

    /// Layer `other` on top of this update: its set fields win.
    pub fn merged_with(mut self, other: SettingsUpdate) -> Self {
        self.sleep_interval_ms = other.sleep_interval_ms.or(self.sleep_interval_ms);
        self.screen_width = other.screen_width.or(self.screen_width);
        self.write_style = other.write_style.or(self.write_style);
        self.alignment = other.alignment.or(self.alignment);
        self.arrow_position = other.arrow_position.or(self.arrow_position);
        self.border_style = other.border_style.or(self.border_style);
        self.border_glyphs = other.border_glyphs.or(self.border_glyphs);
        self
    }
}
