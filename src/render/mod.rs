//! Rendering page lists for display

pub mod text;

pub use text::{label, labels, render_summary, render_text};

/// Glyph set used when rendering a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RenderStyle {
    /// `‹ 1 … 10 … 20 ›`
    #[default]
    Unicode,
    /// `< 1 ... 10 ... 20 >`, matching the popup buttons.
    Ascii,
}

impl RenderStyle {
    pub fn ellipsis(self) -> &'static str {
        match self {
            RenderStyle::Unicode => "…",
            RenderStyle::Ascii => "...",
        }
    }

    pub fn previous_arrow(self) -> &'static str {
        match self {
            RenderStyle::Unicode => "‹",
            RenderStyle::Ascii => "<",
        }
    }

    pub fn next_arrow(self) -> &'static str {
        match self {
            RenderStyle::Unicode => "›",
            RenderStyle::Ascii => ">",
        }
    }
}
