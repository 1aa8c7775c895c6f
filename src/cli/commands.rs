use std::path::Path;

use crate::app::{Harvester, Result};
use crate::config::Config;
use crate::harvest::{Stage, StageSummary};

/// Run `stages` and print one summary line per collection written.
pub async fn harvest(harvester: &Harvester, stages: &[Stage]) -> Result<()> {
    let summaries = harvester.run(stages).await?;
    print_summaries(&summaries);

    if stages.len() > 1 {
        let total: usize = summaries.iter().map(|s| s.count).sum();
        println!("All data scraped: {} records", total);
    }

    Ok(())
}

fn print_summaries(summaries: &[StageSummary]) {
    for summary in summaries {
        println!("{}", summary);
    }
}

pub fn show_config_path(explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => Config::default_config_path()?,
    };
    println!("{}", path.display());
    Ok(())
}
