//! WebAssembly bindings for the popup scripts

use wasm_bindgen::prelude::*;

use crate::models::PagerOptions;
use crate::render::{labels, RenderStyle};

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&JsValue::from_str(&format!($($t)*))))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($t:tt)*) => (tracing::debug!($($t)*))
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Page list for the pagination buttons, `0` marking a gap.
#[wasm_bindgen(js_name = getPageList)]
pub fn get_page_list(total_pages: i32, current_page: i32, max_length: i32) -> Result<Vec<i32>, JsValue> {
    page_list_i32(total_pages, current_page, max_length)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Button labels for the pagination control, gaps rendered as `...`.
#[wasm_bindgen(js_name = getPageLabels)]
pub fn get_page_labels(total_pages: i32, current_page: i32, max_length: i32) -> js_sys::Array {
    let list = crate::generate(total_pages.into(), current_page.into(), max_length.into());
    labels(&list, RenderStyle::Ascii)
        .into_iter()
        .map(JsValue::from)
        .collect()
}

/// Page view for a table of `item_count` rows as JSON.
///
/// Fails for an out-of-range `page` so the caller can leave the table as is.
#[wasm_bindgen]
pub fn paginate(item_count: u32, per_page: u32, page: i32, pagination_size: i32) -> Result<String, JsValue> {
    paginate_json(item_count, per_page, page, pagination_size)
        .map_err(|e| JsValue::from_str(&format!("Pagination failed: {}", e)))
}

fn page_list_i32(total_pages: i32, current_page: i32, max_length: i32) -> anyhow::Result<Vec<i32>> {
    crate::generate_raw(total_pages.into(), current_page.into(), max_length.into())
        .into_iter()
        .map(|page| i32::try_from(page).map_err(anyhow::Error::from))
        .collect()
}

fn paginate_json(item_count: u32, per_page: u32, page: i32, pagination_size: i32) -> anyhow::Result<String> {
    let options = PagerOptions {
        per_page: per_page as usize,
        pagination_size: pagination_size.into(),
    };

    let view = crate::paginate(item_count as usize, page.into(), options)?;
    console_log!("Showing page {} of {}", view.current_page, view.total_pages);

    Ok(serde_json::to_string(&view)?)
}
