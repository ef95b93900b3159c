//! Box frames around a block of lines.

use crate::error::{Result, ScreenError};
use crate::layout::{center_to_width, display_len, pad_right};
use ratatui::symbols::line;
use std::fmt;
use std::str::FromStr;

/// Glyph family used to draw frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum BorderGlyphs {
    /// `+`, `-` and `|`, for terminals without box-drawing support
    Ascii,
    #[default]
    Plain,
    Rounded,
    Double,
    Thick,
}

/// The six glyphs a frame is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGlyphs {
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
}

impl From<line::Set> for FrameGlyphs {
    fn from(set: line::Set) -> Self {
        Self {
            horizontal: set.horizontal,
            vertical: set.vertical,
            top_left: set.top_left,
            top_right: set.top_right,
            bottom_left: set.bottom_left,
            bottom_right: set.bottom_right,
        }
    }
}

const ASCII_FRAME: FrameGlyphs = FrameGlyphs {
    horizontal: "-",
    vertical: "|",
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
};

impl BorderGlyphs {
    pub const NAMES: [&'static str; 5] = ["ascii", "plain", "rounded", "double", "thick"];

    pub fn frame(self) -> FrameGlyphs {
        match self {
            BorderGlyphs::Ascii => ASCII_FRAME,
            BorderGlyphs::Plain => line::NORMAL.into(),
            BorderGlyphs::Rounded => line::ROUNDED.into(),
            BorderGlyphs::Double => line::DOUBLE.into(),
            BorderGlyphs::Thick => line::THICK.into(),
        }
    }

    /// True when `c` is one of the glyphs this family draws frames with.
    ///
    /// Membership is by character, not by position: with [`BorderGlyphs::Ascii`] every
    /// `+`, `-` and `|` matches, including hyphens in text and in menu arrows.
    pub fn is_frame_char(self, c: char) -> bool {
        let frame = self.frame();
        [
            frame.horizontal,
            frame.vertical,
            frame.top_left,
            frame.top_right,
            frame.bottom_left,
            frame.bottom_right,
        ]
        .iter()
        .any(|glyph| glyph.chars().eq(std::iter::once(c)))
    }
}

impl fmt::Display for BorderGlyphs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BorderGlyphs::Ascii => "ascii",
            BorderGlyphs::Plain => "plain",
            BorderGlyphs::Rounded => "rounded",
            BorderGlyphs::Double => "double",
            BorderGlyphs::Thick => "thick",
        };
        f.write_str(name)
    }
}

impl FromStr for BorderGlyphs {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(BorderGlyphs::Ascii),
            "plain" => Ok(BorderGlyphs::Plain),
            "rounded" => Ok(BorderGlyphs::Rounded),
            "double" => Ok(BorderGlyphs::Double),
            "thick" => Ok(BorderGlyphs::Thick),
            other => Err(ScreenError::unsupported(format!(
                "unknown border glyphs '{other}' (expected one of: {})",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// Frame `lines` in a box whose content area is `inner_width` columns wide.
///
/// Each content row is `vertical + ' ' + content + ' ' + vertical`, and the top and
/// bottom rules span `inner_width + 2` columns between the corners. With
/// `center_content` each line is centered in the content area, otherwise it is
/// left-aligned. Lines are never truncated: one longer than `inner_width` is an error,
/// as is an `inner_width` whose rule length cannot be represented.
pub fn wrap_in_border<S: AsRef<str>>(
    lines: &[S],
    inner_width: usize,
    center_content: bool,
    glyphs: BorderGlyphs,
) -> Result<Vec<String>> {
    let rule_width = inner_width
        .checked_add(2)
        .ok_or_else(|| ScreenError::frame_too_wide(inner_width, usize::MAX - 2))?;
    let frame = glyphs.frame();

    let mut rows = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.as_ref();
        if display_len(line) > inner_width {
            return Err(ScreenError::layout(line, inner_width));
        }
        let content = if center_content {
            center_to_width(line, inner_width)?
        } else {
            pad_right(line, inner_width)
        };
        rows.push(format!("{} {} {}", frame.vertical, content, frame.vertical));
    }

    let rule = frame.horizontal.repeat(rule_width);
    let mut framed = Vec::with_capacity(rows.len() + 2);
    framed.push(format!("{}{}{}", frame.top_left, rule, frame.top_right));
    framed.extend(rows);
    framed.push(format!("{}{}{}", frame.bottom_left, rule, frame.bottom_right));
    Ok(framed)
}
