//! Plain-text pagination bars

use super::RenderStyle;
use crate::models::{PageList, PageSlot};
use crate::pagination::PageView;

/// Display label for a single slot.
pub fn label(slot: PageSlot, style: RenderStyle) -> String {
    match slot {
        PageSlot::Page(page) => page.to_string(),
        PageSlot::Gap => style.ellipsis().to_string(),
    }
}

pub fn labels(list: &PageList, style: RenderStyle) -> Vec<String> {
    list.iter().map(|slot| label(*slot, style)).collect()
}

/// One-line pagination bar, e.g. `‹ 1 … 9 [10] 11 … 20 ›`.
///
/// The current page is bracketed. A disabled arrow is replaced by a space so
/// the bar keeps its width while paging.
pub fn render_text(view: &PageView, style: RenderStyle) -> String {
    let mut bar = String::new();
    
    bar.push_str(if view.has_previous { style.previous_arrow() } else { " " });
    
    for slot in view.page_list.iter() {
        bar.push(' ');
        match slot {
            PageSlot::Page(page) if *page == view.current_page => {
                bar.push_str(&format!("[{}]", page));
            }
            _ => bar.push_str(&label(*slot, style)),
        }
    }
    
    bar.push(' ');
    bar.push_str(if view.has_next { style.next_arrow() } else { " " });
    
    bar
}

/// Short description of which rows are on screen.
pub fn render_summary(view: &PageView, item_count: usize) -> String {
    if view.total_pages == 0 {
        return "No rows".to_string();
    }
    
    format!(
        "Page {} of {} (rows {}-{} of {})",
        view.current_page,
        view.total_pages,
        view.rows.start + 1,
        view.rows.end,
        item_count
    )
}
