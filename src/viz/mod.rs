//! Visualization generation module

use anyhow::Result;
use crate::cluster::{Group, Partition};
use crate::cluster::metrics::GroupAnalytics;
use crate::graph::Link;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Generate visualization files from grouping results
pub fn generate_visualizations(
    partition: &Partition,
    analytics: &[GroupAnalytics],
    links: &[Link],
    output_dir: &str,
) -> Result<()> {
    log::info!("Generating visualizations for {} groups", partition.groups.len());

    let viz_dir = Path::new(output_dir).join("visualizations");
    fs::create_dir_all(&viz_dir)?;

    generate_network_data(partition, links, &viz_dir)?;
    generate_stats_visualizations(analytics, &viz_dir)?;

    log::info!("Visualizations generated successfully");

    Ok(())
}

/// Build the undirected graph of one group's intra-group links
///
/// Nodes are labelled `name (G)`; every qualifying link becomes its own edge.
pub fn group_network(partition: &Partition, group: &Group, links: &[Link]) -> UnGraph<String, usize> {
    let mut graph = UnGraph::new_undirected();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

    let genders = partition.genders();

    for id in &group.members {
        let label = match genders.get(id.as_str()) {
            Some(gender) => format!("{} ({})", id, gender),
            None => id.clone(),
        };
        indices.insert(id.as_str(), graph.add_node(label));
    }

    for (i, link) in links.iter().enumerate() {
        let (src, dst) = link.endpoints();
        if let (Some(&a), Some(&b)) = (indices.get(src), indices.get(dst)) {
            graph.add_edge(a, b, i);
        }
    }

    graph
}

/// Write a Graphviz DOT file per group
fn generate_network_data(
    partition: &Partition,
    links: &[Link],
    viz_dir: &Path,
) -> Result<()> {
    log::info!("Generating network data files");

    let data_dir = viz_dir.join("data");
    fs::create_dir_all(&data_dir)?;

    for group in &partition.groups {
        let graph = group_network(partition, group, links);
        let file_path = data_dir.join(format!("group_{}.dot", group.index));
        let mut file = File::create(file_path)?;

        write!(file, "{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))?;
    }

    Ok(())
}

/// Write a CSV of group statistics for external plotting
fn generate_stats_visualizations(
    analytics: &[GroupAnalytics],
    viz_dir: &Path,
) -> Result<()> {
    log::info!("Generating statistical visualizations");

    let stats_path = viz_dir.join("group_stats.csv");
    let mut stats_file = File::create(stats_path)?;

    writeln!(stats_file, "group_index,size,edge_count,male,female,isolated,density")?;

    for group in analytics {
        writeln!(stats_file, "{},{},{},{},{},{},{:.6}",
                 group.group_index,
                 group.size,
                 group.edge_count,
                 group.gender_tally.male,
                 group.gender_tally.female,
                 group.isolated.len(),
                 group.density)?;
    }

    Ok(())
}
