//! Results persistence module

use anyhow::Result;
use crate::cluster::Partition;
use crate::cluster::metrics::{GroupAnalytics, PartitionSummary};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use serde_json::{json, to_string_pretty};

/// Save grouping results to the specified directory
pub fn save_results(
    partition: &Partition,
    analytics: &[GroupAnalytics],
    summary: &PartitionSummary,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving {} groups to {}", partition.groups.len(), output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    save_summary(partition, summary, output_dir)?;
    save_groups(analytics, output_dir)?;
    save_nodes(partition, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save summary information
fn save_summary(
    partition: &Partition,
    summary: &PartitionSummary,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let summary = json!({
        "config": partition.config,
        "stats": summary,
        "groups": partition.member_lists(),
        "largest_group_size": partition.groups.iter().map(|g| g.size()).max().unwrap_or(0),
        "smallest_group_size": partition.groups.iter().map(|g| g.size()).min().unwrap_or(0),
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save per-group analytics
fn save_groups(analytics: &[GroupAnalytics], output_dir: &str) -> Result<()> {
    log::info!("Saving group analytics");

    let path = Path::new(output_dir).join("groups.json");
    let mut file = File::create(path)?;

    let groups_json = json!({ "groups": analytics });
    file.write_all(to_string_pretty(&groups_json)?.as_bytes())?;

    Ok(())
}

/// Save the flattened node list
fn save_nodes(partition: &Partition, output_dir: &str) -> Result<()> {
    let path = Path::new(output_dir).join("nodes.json");
    let mut file = File::create(path)?;

    file.write_all(to_string_pretty(&partition.nodes)?.as_bytes())?;

    Ok(())
}
