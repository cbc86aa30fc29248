//! FPL Enhanced pagination CLI

use clap::{Parser, Subcommand};
use colored::*;
use fplpager::cli::{init_logging, run_browse};
use fplpager::render::{labels, render_summary, render_text, RenderStyle};
use fplpager::{generate, load_options, paginate, PageView, Preset};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fplpager")]
#[command(about = "Truncated pagination lists for the FPL Enhanced popup tables", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the page list for a pagination control
    Generate {
        /// Total number of pages
        #[arg(short, long, allow_negative_numbers = true)]
        total: i64,

        /// Page to highlight
        #[arg(short, long, allow_negative_numbers = true)]
        current: i64,

        /// Slots the control can display
        #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
        max_length: i64,

        /// Print the raw list as JSON (0 marks a gap)
        #[arg(long)]
        json: bool,
    },

    /// Show one page of a table with the given number of rows
    Paginate {
        /// Number of rows in the table
        #[arg(short = 'n', long)]
        items: usize,

        /// Page to show
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// JSON5 file with perPage and paginationSize
        #[arg(long)]
        config: Option<PathBuf>,

        /// Table preset used when no config file is given
        #[arg(long, value_enum, default_value_t = Preset::League)]
        preset: Preset,

        /// Glyphs used for the text bar
        #[arg(long, value_enum, default_value_t = RenderStyle::Unicode)]
        style: RenderStyle,

        /// Print the page view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse a table interactively
    Browse {
        /// Number of rows in the table
        #[arg(short = 'n', long)]
        items: usize,

        /// JSON5 file with perPage and paginationSize
        #[arg(long)]
        config: Option<PathBuf>,

        /// Table preset used when no config file is given
        #[arg(long, value_enum, default_value_t = Preset::League)]
        preset: Preset,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Generate { total, current, max_length, json } => {
            let list = generate(total, current, max_length);
            if json {
                serde_json::to_string(&list).map(|out| println!("{}", out)).map_err(anyhow::Error::from)
            } else {
                println!("{}", labels(&list, RenderStyle::Unicode).join(" "));
                Ok(())
            }
        }

        Commands::Paginate { items, page, config, preset, style, json } => {
            load_options(config.as_deref(), preset)
                .and_then(|options| paginate(items, page, options))
                .and_then(|view| print_view(&view, items, style, json))
        }

        Commands::Browse { items, config, preset } => {
            load_options(config.as_deref(), preset)
                .and_then(|options| run_browse(items, options))
        }
    };

    if let Err(e) = outcome {
        eprintln!("{}", "❌ Pagination failed!".red().bold());
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn print_view(view: &PageView, items: usize, style: RenderStyle, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    println!("{}", render_text(view, style).bold());
    println!("{}", render_summary(view, items).dimmed());
    Ok(())
}
