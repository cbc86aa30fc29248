//! Page lists and the slots they are made of

use serde::{Deserialize, Serialize};
use std::fmt;

use super::InvariantViolation;

/// One slot of a pagination control.
///
/// Serialized as a bare integer where `0` stands for a gap, which is what the
/// popup scripts expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum PageSlot {
    /// A real, selectable page (1-based).
    Page(i64),
    /// Pages omitted for brevity, rendered as an ellipsis.
    Gap,
}

impl PageSlot {
    /// Raw value used on the JavaScript side.
    pub const GAP_RAW: i64 = 0;

    pub fn page(&self) -> Option<i64> {
        match self {
            PageSlot::Page(page) => Some(*page),
            PageSlot::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, PageSlot::Gap)
    }

    pub fn to_raw(self) -> i64 {
        match self {
            PageSlot::Page(page) => page,
            PageSlot::Gap => Self::GAP_RAW,
        }
    }
}

impl From<i64> for PageSlot {
    fn from(raw: i64) -> Self {
        if raw == Self::GAP_RAW {
            PageSlot::Gap
        } else {
            PageSlot::Page(raw)
        }
    }
}

impl From<PageSlot> for i64 {
    fn from(slot: PageSlot) -> Self {
        slot.to_raw()
    }
}

impl fmt::Display for PageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSlot::Page(page) => write!(f, "{}", page),
            PageSlot::Gap => write!(f, "..."),
        }
    }
}

/// Ordered slots of a pagination control, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageList {
    slots: Vec<PageSlot>,
}

impl PageList {
    pub fn new(slots: Vec<PageSlot>) -> Self {
        Self { slots }
    }

    /// Build a list from raw integers, `0` meaning a gap.
    pub fn from_raw(raw: &[i64]) -> Self {
        Self::new(raw.iter().copied().map(PageSlot::from).collect())
    }

    pub fn to_raw(&self) -> Vec<i64> {
        self.slots.iter().map(|slot| slot.to_raw()).collect()
    }

    pub fn slots(&self) -> &[PageSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageSlot> {
        self.slots.iter()
    }

    /// Real pages in display order, gaps skipped.
    pub fn pages(&self) -> impl Iterator<Item = i64> + '_ {
        self.slots.iter().filter_map(PageSlot::page)
    }

    pub fn contains_page(&self, page: i64) -> bool {
        self.pages().any(|p| p == page)
    }

    pub fn gap_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_gap()).count()
    }

    /// Check the display invariants for a list generated from
    /// `(total_pages, current_page, max_length)`.
    ///
    /// Only meaningful for well-formed inputs: `max_length >= 5` and
    /// `current_page` within `1..=total_pages`.
    pub fn check_invariants(
        &self,
        total_pages: i64,
        current_page: i64,
        max_length: i64,
    ) -> Result<(), InvariantViolation> {
        let truncated = total_pages > max_length;

        if truncated {
            if self.len() as i64 > max_length {
                return Err(InvariantViolation::TooLong {
                    len: self.len(),
                    max_length,
                });
            }
            for required in [1, total_pages] {
                if !self.contains_page(required) {
                    return Err(InvariantViolation::MissingEndpoint(required));
                }
            }
        } else {
            let expected: Vec<i64> = (1..=total_pages).collect();
            if self.to_raw() != expected {
                return Err(InvariantViolation::NotContiguous);
            }
        }

        let mut previous: Option<i64> = None;
        for page in self.pages() {
            if let Some(prev) = previous {
                if page <= prev {
                    return Err(InvariantViolation::NotAscending { previous: prev, page });
                }
            }
            previous = Some(page);
        }

        for (index, slot) in self.slots.iter().enumerate() {
            if !slot.is_gap() {
                continue;
            }
            let before = index.checked_sub(1).and_then(|i| self.slots.get(i));
            let after = self.slots.get(index + 1);
            match (before, after) {
                (Some(PageSlot::Page(left)), Some(PageSlot::Page(right))) => {
                    if i128::from(*right) - i128::from(*left) < 2 {
                        return Err(InvariantViolation::EmptyGap { index });
                    }
                }
                (Some(PageSlot::Gap), _) | (_, Some(PageSlot::Gap)) => {
                    return Err(InvariantViolation::AdjacentGaps { index });
                }
                _ => return Err(InvariantViolation::DanglingGap { index }),
            }
        }

        if (1..=total_pages).contains(&current_page) && !self.contains_page(current_page) {
            return Err(InvariantViolation::MissingCurrent(current_page));
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a PageList {
    type Item = &'a PageSlot;
    type IntoIter = std::slice::Iter<'a, PageSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl fmt::Display for PageList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.slots.iter().map(|slot| slot.to_string()).collect();
        write!(f, "{}", labels.join(" "))
    }
}
