//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand, Debug, Clone, Default)]
pub(crate) enum Commands {
    /// Show the grouped timeline (default)
    #[default]
    List,
    /// Show a single entry with its links
    Show {
        /// Entry id, e.g. 2024-jccm
        id: String,
    },
    /// Count matching entries per category
    Categories,
    /// Output a single line with ongoing entries
    Now,
    /// Render the portfolio as a static HTML page
    Html {
        /// Write to this file instead of stdout
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Page title
        #[arg(long, default_value = "Portfolio")]
        title: String,
    },
    /// Preview rail and spotlight geometry for a scroll position
    Layout {
        /// Scroll offset in pixels
        #[arg(long, default_value_t = 0.0)]
        scroll: f64,
        /// Viewport height in pixels
        #[arg(long, default_value_t = 900.0)]
        viewport: f64,
    },
}

impl Commands {
    /// Whether the command can emit JSON instead of a table
    pub(crate) fn supports_json(&self) -> bool {
        !matches!(self, Commands::Html { .. })
    }

    /// Whether the command has a CSV rendering
    pub(crate) fn supports_csv(&self) -> bool {
        matches!(self, Commands::List | Commands::Categories)
    }
}
