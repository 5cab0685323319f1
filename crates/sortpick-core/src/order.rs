//! Reordering of the active entry.

use crate::bounds::Bounds;
use crate::state::PromptState;

/// Direction in which the active entry is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    fn offset(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }
}

impl<T> PromptState<T> {
    /// Move the active entry one slot up or down, carrying the cursor with it.
    ///
    /// Works by position, so disabled neighbors are swapped like any other
    /// entry. Past either end the list rotates when `loop_allowed`, and
    /// nothing happens otherwise.
    pub fn move_active(mut self, direction: MoveDirection, loop_allowed: bool) -> Self {
        let len = self.items.len();
        if len < 2 {
            return self;
        }

        let target = self.active as isize + direction.offset();
        let last = len as isize - 1;
        if !(0..=last).contains(&target) && !loop_allowed {
            return self;
        }

        if target < 0 {
            self.items.rotate_left(1);
            self.active = len - 1;
        } else if target > last {
            self.items.rotate_right(1);
            self.active = 0;
        } else {
            let target = target as usize;
            self.items.swap(self.active, target);
            self.active = target;
        }

        self.bounds = Bounds::resolve(&self.items).unwrap_or(self.bounds);
        self.clear_error()
    }
}
