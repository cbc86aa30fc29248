//! Interactive table browser

use anyhow::Result;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::models::{PageSlot, PagerOptions, PaginationError};
use crate::pagination::{PageView, Pager};
use crate::render::{label, render_summary, render_text, RenderStyle};

/// One line of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Previous,
    Slot(PageSlot),
    Next,
    Jump,
    Exit,
}

impl MenuEntry {
    fn title(&self, current_page: i64) -> String {
        match self {
            MenuEntry::Previous => "◀  Previous page".to_string(),
            MenuEntry::Slot(PageSlot::Page(page)) if *page == current_page => {
                format!("📄 Page {} (current)", page)
            }
            MenuEntry::Slot(slot @ PageSlot::Page(_)) => {
                format!("📄 Page {}", label(*slot, RenderStyle::Unicode))
            }
            MenuEntry::Slot(PageSlot::Gap) => "   …".to_string(),
            MenuEntry::Next => "▶  Next page".to_string(),
            MenuEntry::Jump => "🔢 Jump to page".to_string(),
            MenuEntry::Exit => "❌ Exit".to_string(),
        }
    }
}

/// Menu entries for a view: arrows only when they lead somewhere.
pub fn menu_entries(view: &PageView) -> Vec<MenuEntry> {
    let mut entries = Vec::new();

    if view.has_previous {
        entries.push(MenuEntry::Previous);
    }
    entries.extend(view.page_list.iter().copied().map(MenuEntry::Slot));
    if view.has_next {
        entries.push(MenuEntry::Next);
    }
    if view.total_pages > 1 {
        entries.push(MenuEntry::Jump);
    }
    entries.push(MenuEntry::Exit);

    entries
}

/// Apply a navigation entry. `Jump` and `Exit` are handled by the caller.
pub fn apply_entry(pager: &mut Pager, entry: MenuEntry) -> Result<Option<PageView>, PaginationError> {
    match entry {
        MenuEntry::Previous => pager.previous().map(Some),
        MenuEntry::Next => pager.next().map(Some),
        MenuEntry::Slot(slot) => pager.select(slot),
        MenuEntry::Jump | MenuEntry::Exit => Ok(None),
    }
}

/// Browse a table of `item_count` rows page by page
pub fn run_browse(item_count: usize, options: PagerOptions) -> Result<()> {
    let mut pager = Pager::new(item_count, options)?;

    print_banner(item_count, &options);

    if pager.total_pages() == 0 {
        println!("{}", "Nothing to browse: the table is empty.".yellow());
        return Ok(());
    }

    loop {
        let view = pager.view();

        println!();
        println!("{}", render_text(&view, RenderStyle::Unicode).cyan().bold());
        println!("{}", render_summary(&view, item_count).dimmed());

        let entries = menu_entries(&view);
        let titles: Vec<String> = entries.iter()
            .map(|entry| entry.title(view.current_page))
            .collect();
        let default = entries.iter()
            .position(|entry| *entry == MenuEntry::Slot(PageSlot::Page(view.current_page)))
            .unwrap_or(0);

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Where to?")
            .items(&titles)
            .default(default)
            .interact()?;

        match entries[selection] {
            MenuEntry::Exit => break,
            MenuEntry::Jump => {
                let total = pager.total_pages();
                let page: i64 = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Page (1-{})", total))
                    .interact_text()?;
                if let Err(e) = pager.go_to(page) {
                    println!("{}", format!("⚠️  {}", e).yellow());
                }
            }
            MenuEntry::Slot(PageSlot::Gap) => {
                println!("{}", "Pick a page number, not the ellipsis.".dimmed());
            }
            entry => {
                if let Err(e) = apply_entry(&mut pager, entry) {
                    println!("{}", format!("⚠️  {}", e).yellow());
                }
            }
        }
    }

    Ok(())
}

fn print_banner(item_count: usize, options: &PagerOptions) {
    println!("{}", "═".repeat(50).blue());
    println!("{}", "📋 FPL table browser".blue().bold());
    println!("   {} rows, {} per page, {} pagination slots",
        item_count, options.per_page, options.pagination_size);
    println!("{}", "═".repeat(50).blue());
}
