//! Menu selection state machine.
//!
//! One key in, one state out: the controller remembers nothing but the current index,
//! so a menu can be restarted at any point by building a new one.

use crate::error::{Result, ScreenError};
use crate::input::keys::KeyClass;

/// Outcome of feeding one key to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub selected: usize,
    pub confirmed: bool,
}

/// Circular selection over a fixed number of options.
///
/// Invariant: `selected < option_count`, and `option_count >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    selected: usize,
    option_count: usize,
}

impl Navigation {
    /// Start at the first option.
    pub fn new(option_count: usize) -> Result<Self> {
        Self::starting_at(option_count, 0)
    }

    /// Start at `selected`. Fails if there are no options or `selected` is out of range.
    pub fn starting_at(option_count: usize, selected: usize) -> Result<Self> {
        if option_count == 0 {
            return Err(ScreenError::configuration(
                "a menu needs at least one option",
            ));
        }
        if selected >= option_count {
            return Err(ScreenError::configuration(format!(
                "selected index {selected} is out of range for {option_count} option(s)"
            )));
        }
        Ok(Self {
            selected,
            option_count,
        })
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn option_count(&self) -> usize {
        self.option_count
    }

    /// Apply one classified key. Up from the first option wraps to the last and down
    /// from the last wraps to the first; nothing is ever clamped.
    pub fn step(&mut self, key: KeyClass) -> Step {
        let confirmed = match key {
            KeyClass::Confirm => true,
            KeyClass::MoveUp => {
                self.selected = if self.selected == 0 {
                    self.option_count - 1
                } else {
                    self.selected - 1
                };
                false
            }
            KeyClass::MoveDown => {
                self.selected = if self.selected == self.option_count - 1 {
                    0
                } else {
                    self.selected + 1
                };
                false
            }
            KeyClass::Other => false,
        };

        Step {
            selected: self.selected,
            confirmed,
        }
    }
}
