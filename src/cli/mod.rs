pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "siteharvest")]
#[command(about = "Harvest products, testimonials and reviews into JSON files", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/siteharvest/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the target site's base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Directory the JSON files are written to
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run products, testimonials and reviews in sequence
    All,
    /// Scrape the paginated product listing
    Products {
        /// Highest listing page to request
        #[arg(long)]
        max_pages: Option<u32>,
    },
    /// Scrape testimonials through the token-protected API
    Testimonials,
    /// Scrape reviews with a headless browser
    Reviews {
        /// Show the browser window
        #[arg(long)]
        headed: bool,
    },
    /// Print the config file path in use
    Config,
}
