use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

use velonet::config;
use velonet::registry::NetworkRegistry;

/// Build bike-sharing networks from a scenario file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the scenario YAML file
    #[arg(short, long)]
    scenario: PathBuf,

    /// Output directory for the registry snapshot
    #[arg(short, long, default_value = "velonet_output")]
    output: PathBuf,

    /// RNG seed, overriding the scenario file's seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting velonet scenario runner");
    info!("Scenario file: {:?}", args.scenario);
    info!("Output directory: {:?}", args.output);

    let scenario = config::load_scenario(&args.scenario)?;

    let mut rng = match args.seed.or(scenario.seed) {
        Some(seed) => {
            info!("Using RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut registry = NetworkRegistry::new();
    for setup in &scenario.networks {
        let network = registry
            .setup_network(&setup.to_plan(), &mut rng)
            .wrap_err_with(|| format!("Failed to set up network '{}'", setup.name))?;
        info!(
            "Network '{}' ready: {} stations, {} bicycles docked",
            network.name(),
            network.stations().len(),
            network.bicycle_count()
        );
    }

    fs::create_dir_all(&args.output)
        .wrap_err_with(|| format!("Failed to create output directory {:?}", args.output))?;
    let snapshot_path = args.output.join("network_registry.json");
    let snapshot = registry.snapshot();
    fs::write(&snapshot_path, serde_json::to_string_pretty(&snapshot)?)
        .wrap_err_with(|| format!("Failed to write registry snapshot to {:?}", snapshot_path))?;

    info!(
        "Wrote registry snapshot ({} networks) to {:?}",
        snapshot.networks.len(),
        snapshot_path
    );
    Ok(())
}
