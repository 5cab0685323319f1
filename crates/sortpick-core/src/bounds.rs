//! First and last selectable positions of a choice list.

use itertools::{Itertools, MinMaxResult};

use crate::choice::Choice;

/// Indices of the first and last selectable entries.
///
/// Navigation is clamped to this range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub first: usize,
    pub last: usize,
}

impl Bounds {
    /// Resolve bounds over `items`, or `None` if nothing is selectable.
    pub fn resolve<T>(items: &[Choice<T>]) -> Option<Self> {
        match items.iter().positions(Choice::is_selectable).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(index) => Some(Self {
                first: index,
                last: index,
            }),
            MinMaxResult::MinMax(first, last) => Some(Self { first, last }),
        }
    }

    /// Check if `index` lies within the bounds.
    pub fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&index)
    }
}
