//! Pure line transforms used to compose a screen.
//!
//! Widths are measured in `char`s: output is a fixed-width grid where every character
//! occupies one column.
//!
//! - [`arrows`] - selection markers for menu options
//! - [`border`] - box frames around a block of lines

pub mod arrows;
pub mod border;

pub use arrows::{decorate_options, ArrowPosition};
pub use border::{wrap_in_border, BorderGlyphs};

use crate::error::{Result, ScreenError};

/// Number of columns `line` occupies.
pub fn display_len(line: &str) -> usize {
    line.chars().count()
}

/// Longest line in `lines`, or 0 for an empty set.
pub fn max_len<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| display_len(line.as_ref()))
        .max()
        .unwrap_or(0)
}

/// Pad `line` with spaces on both sides so it is exactly `target_width` columns wide.
///
/// The line is right-aligned to column `target_width / 2 + len / 2`, then right-padded
/// to the full width, so odd leftovers land on the right.
pub fn center_to_width(line: &str, target_width: usize) -> Result<String> {
    let len = display_len(line);
    if len > target_width {
        return Err(ScreenError::layout(line, target_width));
    }

    let left = (target_width / 2 + len / 2).saturating_sub(len);
    let right = target_width - len - left;

    let mut centered = String::with_capacity(line.len() + left + right);
    centered.extend(std::iter::repeat(' ').take(left));
    centered.push_str(line);
    centered.extend(std::iter::repeat(' ').take(right));
    Ok(centered)
}

/// Right-pad `line` with spaces up to `width` columns. Longer lines are returned as-is.
pub fn pad_right(line: &str, width: usize) -> String {
    let len = display_len(line);
    let mut padded = String::with_capacity(line.len() + width.saturating_sub(len));
    padded.push_str(line);
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}

/// Right-pad every line to the length of the longest one.
pub fn right_pad_to_equal_lengths<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let width = max_len(lines);
    lines
        .iter()
        .map(|line| pad_right(line.as_ref(), width))
        .collect()
}

/// Center each line on its own within `target_width`.
pub fn center_sequence<S: AsRef<str>>(lines: &[S], target_width: usize) -> Result<Vec<String>> {
    lines
        .iter()
        .map(|line| center_to_width(line.as_ref(), target_width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn centers_even_line_in_even_width() {
        assert_eq!(center_to_width("hi", 6).unwrap(), "  hi  ");
    }

    #[test]
    fn odd_leftover_goes_right() {
        assert_eq!(center_to_width("abc", 6).unwrap(), " abc  ");
        assert_eq!(center_to_width("ab", 5).unwrap(), " ab  ");
    }

    #[test]
    fn exact_fit_is_unchanged() {
        assert_eq!(center_to_width("hello", 5).unwrap(), "hello");
        assert_eq!(center_to_width("", 0).unwrap(), "");
    }

    #[test]
    fn too_long_line_is_a_layout_error() {
        let err = center_to_width("hello", 4).unwrap_err();
        match err {
            ScreenError::Layout { line, width } => {
                assert_eq!(line, "hello");
                assert_eq!(width, 4);
            }
            other => panic!("expected layout error, got {other:?}"),
        }
    }

    #[test]
    fn pads_to_longest_line() {
        let padded = right_pad_to_equal_lengths(&["a", "abc", ""]);
        assert_eq!(padded, vec!["a  ", "abc", "   "]);
    }

    #[test]
    fn empty_input_pads_to_empty_output() {
        let empty: [&str; 0] = [];
        assert!(right_pad_to_equal_lengths(&empty).is_empty());
    }

    #[test]
    fn sequence_centers_lines_independently() {
        let centered = center_sequence(&["ab", "abcd"], 8).unwrap();
        assert_eq!(centered, vec!["   ab   ", "  abcd  "]);
    }

    #[test]
    fn sequence_fails_if_any_line_is_too_wide() {
        assert!(center_sequence(&["ok", "far too long"], 4).is_err());
    }

    #[test]
    fn widths_count_chars() {
        assert_eq!(center_to_width("éé", 4).unwrap(), " éé ");
        assert_eq!(pad_right("ü", 3), "ü  ");
    }

    proptest! {
        #[test]
        fn centered_line_has_target_width(s in "[a-zA-Z0-9 ]{0,40}", extra in 0usize..40) {
            let target = s.chars().count() + extra;
            let centered = center_to_width(&s, target).unwrap();
            prop_assert_eq!(centered.chars().count(), target);
        }

        #[test]
        fn centering_keeps_the_content(
            s in "[a-zA-Z0-9]([a-zA-Z0-9 ]{0,38}[a-zA-Z0-9])?",
            extra in 0usize..40,
        ) {
            let target = s.chars().count() + extra;
            let centered = center_to_width(&s, target).unwrap();
            prop_assert_eq!(centered.trim(), s.as_str());
        }

        #[test]
        fn narrower_target_always_fails(s in "[a-z]{1,40}", shortfall in 1usize..40) {
            let target = s.chars().count().saturating_sub(shortfall);
            prop_assume!(target < s.chars().count());
            let is_layout_error = matches!(
                center_to_width(&s, target),
                Err(ScreenError::Layout { .. })
            );
            prop_assert!(is_layout_error);
        }

        #[test]
        fn padded_lines_share_one_length(lines in prop::collection::vec("[a-z ]{0,20}", 0..10)) {
            let padded = right_pad_to_equal_lengths(&lines);
            prop_assert_eq!(padded.len(), lines.len());
            let width = max_len(&lines);
            prop_assert!(padded.iter().all(|line| line.chars().count() == width));
        }
    }
}
