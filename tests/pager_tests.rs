//! Pager behaviour over league and statistics tables

use fplpager::models::{PageSlot, PagerOptions, PaginationError, Preset};
use fplpager::{paginate, Pager};
use pretty_assertions::assert_eq;

#[test]
fn test_league_table_walkthrough() {
    // 50 managers, 7 per page
    let mut pager = Pager::new(50, PagerOptions::preset(Preset::League)).unwrap();
    assert_eq!(pager.total_pages(), 8);

    let view = pager.view();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.page_list.to_raw(), vec![1, 2, 3, 0, 8]);
    assert!(!view.has_previous);
    assert!(view.has_next);
    assert_eq!(view.rows, 0..7);

    let view = pager.next().unwrap();
    assert_eq!(view.current_page, 2);
    assert_eq!(view.rows, 7..14);

    let view = pager.go_to(5).unwrap();
    assert_eq!(view.page_list.to_raw(), vec![1, 0, 5, 0, 8]);

    let view = pager.go_to(8).unwrap();
    assert_eq!(view.page_list.to_raw(), vec![1, 0, 6, 7, 8]);
    assert!(view.has_previous);
    assert!(!view.has_next);
    assert_eq!(view.rows, 49..50);
}

#[test]
fn test_out_of_range_pages_are_rejected() {
    let mut pager = Pager::new(50, PagerOptions::preset(Preset::Statistics)).unwrap();
    assert_eq!(pager.total_pages(), 7);

    assert_eq!(
        pager.go_to(0).unwrap_err(),
        PaginationError::PageOutOfRange { page: 0, total_pages: 7 }
    );
    assert_eq!(
        pager.previous().unwrap_err(),
        PaginationError::PageOutOfRange { page: 0, total_pages: 7 }
    );
    assert!(pager.go_to(8).is_err());
    assert_eq!(pager.current_page(), 1);
}

#[test]
fn test_single_page_disables_both_arrows() {
    let pager = Pager::new(3, PagerOptions::default()).unwrap();
    let view = pager.view();
    assert_eq!(view.total_pages, 1);
    assert!(!view.has_previous);
    assert!(!view.has_next);
    assert_eq!(view.page_list.to_raw(), vec![1]);
}

#[test]
fn test_gap_clicks_are_ignored() {
    let mut pager = Pager::new(100, PagerOptions::default().with_per_page(1)).unwrap();
    pager.go_to(50).unwrap();

    assert_eq!(pager.select(PageSlot::Gap), Ok(None));
    assert_eq!(pager.current_page(), 50);

    let view = pager.select(PageSlot::Page(100)).unwrap().unwrap();
    assert_eq!(view.current_page, 100);
}

#[test]
fn test_empty_table() {
    let mut pager = Pager::new(0, PagerOptions::default()).unwrap();
    let view = pager.view();
    assert_eq!(view.total_pages, 0);
    assert!(view.page_list.is_empty());
    assert_eq!(view.rows, 0..0);
    assert!(!view.has_previous);
    assert!(!view.has_next);
    assert!(pager.next().is_err());
}

#[test]
fn test_invalid_options() {
    assert_eq!(
        Pager::new(10, PagerOptions::default().with_per_page(0)).unwrap_err(),
        PaginationError::InvalidPerPage
    );
    assert_eq!(
        Pager::new(10, PagerOptions::default().with_pagination_size(3)).unwrap_err(),
        PaginationError::InvalidPaginationSize(3)
    );
}

#[test]
fn test_paginate_helper() {
    let view = paginate(160, 10, PagerOptions::default().with_per_page(8).with_pagination_size(9)).unwrap();
    assert_eq!(view.total_pages, 20);
    assert_eq!(view.page_list.to_raw(), vec![1, 2, 0, 9, 10, 11, 0, 19, 20]);
    assert_eq!(view.rows, 72..80);

    let err = paginate(160, 30, PagerOptions::default()).unwrap_err();
    assert!(err.to_string().contains("out of range"));

    let view = paginate(5, 1, PagerOptions::default()).unwrap();
    assert_eq!(view.page_list.to_raw(), vec![1]);
}

#[test]
fn test_paginate_empty_table_has_no_first_page() {
    let err = paginate(0, 1, PagerOptions::default()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<PaginationError>(),
        Some(&PaginationError::PageOutOfRange { page: 1, total_pages: 0 })
    );
}
