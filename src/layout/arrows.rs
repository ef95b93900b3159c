//! Selection markers for menu options.
//!
//! Every option is decorated, selected or not, so a menu frame keeps the same width
//! as the selection moves and the arrow never makes the options jitter.

use crate::error::{Result, ScreenError};
use crate::layout::right_pad_to_equal_lengths;
use std::fmt;
use std::str::FromStr;

/// Marker placed before the selected option.
pub const ARROW_BEFORE: &str = "--> ";
/// Marker placed after the selected option.
pub const ARROW_AFTER: &str = " <--";
/// Filler used in place of a marker on unselected options.
const NO_ARROW: &str = "    ";

/// Where the selection marker goes relative to the selected option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ArrowPosition {
    Before,
    After,
    #[default]
    BeforeAndAfter,
}

impl ArrowPosition {
    pub const NAMES: [&'static str; 3] = ["before", "after", "before-and-after"];

    fn marks_before(self) -> bool {
        matches!(self, ArrowPosition::Before | ArrowPosition::BeforeAndAfter)
    }

    fn marks_after(self) -> bool {
        matches!(self, ArrowPosition::After | ArrowPosition::BeforeAndAfter)
    }
}

impl fmt::Display for ArrowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArrowPosition::Before => "before",
            ArrowPosition::After => "after",
            ArrowPosition::BeforeAndAfter => "before-and-after",
        };
        f.write_str(name)
    }
}

impl FromStr for ArrowPosition {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "before" => Ok(ArrowPosition::Before),
            "after" => Ok(ArrowPosition::After),
            "before-and-after" | "both" => Ok(ArrowPosition::BeforeAndAfter),
            other => Err(ScreenError::unsupported(format!(
                "unknown arrow position '{other}' (expected one of: {})",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// Decorate `options`, marking the one at `selected` according to `position`.
///
/// `After` and `BeforeAndAfter` right-pad all options to equal length first so the
/// trailing marker lines up. `Before` needs no padding since its prefixes are fixed-width.
/// An out-of-range `selected` leaves every option unmarked.
pub fn decorate_options<S: AsRef<str>>(
    options: &[S],
    selected: usize,
    position: ArrowPosition,
) -> Vec<String> {
    let base: Vec<String> = if position.marks_after() {
        right_pad_to_equal_lengths(options)
    } else {
        options.iter().map(|o| o.as_ref().to_string()).collect()
    };

    base.into_iter()
        .enumerate()
        .map(|(index, option)| {
            let is_selected = index == selected;
            let mut decorated = String::with_capacity(option.len() + 2 * NO_ARROW.len());
            if position.marks_before() {
                decorated.push_str(if is_selected { ARROW_BEFORE } else { NO_ARROW });
            }
            decorated.push_str(&option);
            if position.marks_after() {
                decorated.push_str(if is_selected { ARROW_AFTER } else { NO_ARROW });
            }
            decorated
        })
        .collect()
}
