use anyhow::Result;
use clap::Parser;
use group_partitioner::cluster::{self, metrics};
use group_partitioner::config::GroupingConfig;
use group_partitioner::{data, storage, viz};

#[derive(Parser, Debug)]
#[clap(
    name = "group-partitioner",
    about = "Partition linked people into size-bounded groups"
)]
struct Cli {
    /// Path to entity file (one `name,gender` per line)
    #[clap(long)]
    entities: String,

    /// Path to link file (one `source,target` per line)
    #[clap(long)]
    links: String,

    /// Output directory for results
    #[clap(long, default_value = "group_results")]
    output_dir: String,

    /// Minimum group size
    #[clap(long, default_value = "2")]
    min_size: usize,

    /// Maximum group size
    #[clap(long, default_value = "4")]
    max_size: usize,

    /// Target number of groups
    #[clap(long, default_value = "1")]
    groups: usize,

    /// Skip visualizations
    #[clap(long)]
    skip_viz: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    log::info!("Starting group partitioning");
    log::info!("Entities: {}", args.entities);
    log::info!("Links: {}", args.links);
    log::info!("Output: {}", args.output_dir);

    // 1. Load input
    let entities = data::load_entities(&args.entities)?;
    let links = data::load_links(&args.links)?;

    // 2. Partition
    let config = GroupingConfig::new(args.min_size, args.max_size, args.groups);
    let partition = cluster::build_groups(&entities, &links, &config)?;

    // 3. Analyse
    let analytics = metrics::compute_analytics(&partition, &links);
    let summary = metrics::summarize(&partition, &analytics, &links);

    for group in &analytics {
        log::info!(
            "Group {}: {} members ({}M/{}F), {} links, {} isolated",
            group.group_index,
            group.size,
            group.gender_tally.male,
            group.gender_tally.female,
            group.edge_count,
            group.isolated.len()
        );
    }

    // 4. Save results
    storage::save_results(&partition, &analytics, &summary, &args.output_dir)?;

    // 5. Generate visualizations if requested
    if !args.skip_viz {
        viz::generate_visualizations(&partition, &analytics, &links, &args.output_dir)?;
    }

    log::info!("Partitioning complete. Results saved to {}", args.output_dir);

    Ok(())
}
