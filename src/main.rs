use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use siteharvest::app::Harvester;
use siteharvest::cli::{commands, Cli, Commands};
use siteharvest::config::Config;
use siteharvest::harvest::Stage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Commands::Config = cli.command {
        commands::show_config_path(cli.config.as_deref())?;
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.site.base_url = base_url;
    }
    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }

    let stages: Vec<Stage> = match cli.command {
        Commands::All => Stage::ALL.to_vec(),
        Commands::Products { max_pages } => {
            if let Some(max_pages) = max_pages {
                config.catalog.max_pages = max_pages;
            }
            vec![Stage::Catalog]
        }
        Commands::Testimonials => vec![Stage::Testimonials],
        Commands::Reviews { headed } => {
            if headed {
                config.reviews.headless = false;
            }
            vec![Stage::Reviews]
        }
        Commands::Config => Vec::new(),
    };

    let harvester = Harvester::new(config)?;
    commands::harvest(&harvester, &stages).await?;

    Ok(())
}
