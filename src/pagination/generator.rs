//! Page list generation for truncated pagination controls
//!
//! Given the number of pages, the current page and the number of slots the
//! control can show, produce the slots to render, e.g. `1 … 4 5 6 … 20`.
//!
//! The widths are computed as:
//!
//! - `side = 1` below 9 slots, `2` otherwise: pages pinned at each end.
//! - `left = (max - 2*side - 3) >> 1`: pages shown before the current one.
//! - `right = (max - 2*side - 2) >> 1`: pages shown after the current one.
//!
//! On an odd budget the extra slot goes to the right of the current page.
//! Inputs are not validated; out-of-range values follow the same arithmetic.

use crate::models::{PageList, PageSlot};

/// Generate the page list for `total_pages` pages with `current_page`
/// highlighted, using at most `max_length` slots.
pub fn generate(total_pages: i64, current_page: i64, max_length: i64) -> PageList {
    let mut slots = Vec::new();

    // Widened so extreme inputs neither overflow nor depend on the build profile
    let (total, current, max) = (
        i128::from(total_pages),
        i128::from(current_page),
        i128::from(max_length),
    );

    if total <= max {
        push_range(&mut slots, 1, total);
        return PageList::new(slots);
    }

    let side_width: i128 = if max < 9 { 1 } else { 2 };
    let left_width = (max - side_width * 2 - 3) >> 1;
    let right_width = (max - side_width * 2 - 2) >> 1;

    if current <= max - side_width - 1 - right_width {
        // Only the right side is truncated
        push_range(&mut slots, 1, max - side_width - 1);
        slots.push(PageSlot::Gap);
        push_range(&mut slots, total - side_width + 1, total);
    } else if current >= total - side_width - 1 - right_width {
        // Only the left side is truncated
        push_range(&mut slots, 1, side_width);
        slots.push(PageSlot::Gap);
        push_range(
            &mut slots,
            total - side_width - 1 - right_width - left_width,
            total,
        );
    } else {
        push_range(&mut slots, 1, side_width);
        slots.push(PageSlot::Gap);
        push_range(&mut slots, current - left_width, current + right_width);
        slots.push(PageSlot::Gap);
        push_range(&mut slots, total - side_width + 1, total);
    }

    tracing::debug!(
        total_pages,
        current_page,
        max_length,
        slots = slots.len(),
        "generated truncated page list"
    );

    PageList::new(slots)
}

/// Same as [`generate`], with gaps encoded as `0`.
pub fn generate_raw(total_pages: i64, current_page: i64, max_length: i64) -> Vec<i64> {
    generate(total_pages, current_page, max_length).to_raw()
}

// Inclusive; nothing is pushed when `end < start`.
fn push_range(slots: &mut Vec<PageSlot>, start: i128, end: i128) {
    slots.extend(
        (start..=end)
            .filter_map(|page| i64::try_from(page).ok())
            .map(PageSlot::Page),
    );
}
