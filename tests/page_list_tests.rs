//! Page list generation tests
//!
//! Fixed scenarios for every region of the layout, plus a sweep over a range
//! of table sizes checking the display invariants.

use fplpager::{generate, generate_raw, PageSlot};
use test_case::test_case;

#[test_case(5, 3, 5 => vec![1, 2, 3, 4, 5] ; "exactly fits")]
#[test_case(3, 2, 5 => vec![1, 2, 3] ; "fewer pages than slots")]
#[test_case(20, 1, 5 => vec![1, 2, 3, 0, 20] ; "first page")]
#[test_case(20, 3, 5 => vec![1, 2, 3, 0, 20] ; "end of left region")]
#[test_case(20, 4, 5 => vec![1, 0, 4, 0, 20] ; "start of middle region")]
#[test_case(20, 10, 5 => vec![1, 0, 10, 0, 20] ; "middle with zero widths")]
#[test_case(20, 18, 5 => vec![1, 0, 18, 19, 20] ; "start of right region")]
#[test_case(20, 20, 5 => vec![1, 0, 18, 19, 20] ; "last page")]
#[test_case(100, 50, 9 => vec![1, 2, 0, 49, 50, 51, 0, 99, 100] ; "two pinned pages per side")]
#[test_case(100, 5, 9 => vec![1, 2, 3, 4, 5, 6, 0, 99, 100] ; "wide left region")]
#[test_case(100, 96, 9 => vec![1, 2, 0, 95, 96, 97, 98, 99, 100] ; "wide right region")]
#[test_case(10, 5, 7 => vec![1, 0, 4, 5, 6, 0, 10] ; "seven slots")]
fn test_scenarios(total: i64, current: i64, max_length: i64) -> Vec<i64> {
    generate_raw(total, current, max_length)
}

#[test]
fn test_typed_slots_match_raw() {
    let list = generate(20, 10, 5);
    pretty_assertions::assert_eq!(
        list.slots(),
        &[
            PageSlot::Page(1),
            PageSlot::Gap,
            PageSlot::Page(10),
            PageSlot::Gap,
            PageSlot::Page(20),
        ]
    );
}

#[test_case(0, 0, i64::MIN => vec![1, 0, 0, 0] ; "minimum budget")]
#[test_case(0, i64::MAX, i64::MIN => vec![1, 0] ; "maximum current page")]
#[test_case(i64::MAX, i64::MAX, 5 => vec![1, 0, i64::MAX - 2, i64::MAX - 1, i64::MAX] ; "maximum page count")]
fn test_extreme_inputs(total: i64, current: i64, max_length: i64) -> Vec<i64> {
    generate_raw(total, current, max_length)
}

#[test]
fn test_zero_pages_is_empty() {
    assert!(generate(0, 1, 5).is_empty());
}

#[test]
fn test_invariants_hold_for_well_formed_inputs() {
    for max_length in 5..=15 {
        for total in 0..=60 {
            for current in 1..=total.max(1) {
                let list = generate(total, current, max_length);
                if let Err(violation) = list.check_invariants(total, current, max_length) {
                    panic!(
                        "generate({}, {}, {}) = {:?}: {}",
                        total, current, max_length, list.to_raw(), violation
                    );
                }
            }
        }
    }
}

#[test]
fn test_truncated_lists_fill_the_budget() {
    for max_length in 5..=15 {
        for current in 1..=40 {
            pretty_assertions::assert_eq!(generate(40, current, max_length).len() as i64, max_length);
        }
    }
}

#[test]
fn test_repeated_calls_agree() {
    pretty_assertions::assert_eq!(generate(57, 23, 11), generate(57, 23, 11));
}
