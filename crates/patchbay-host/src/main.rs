//! patchbay-resolve - run one preset selection against a YAML host store
//!
//! Loads the host config (writing defaults on first run), optionally records a preset selection in the
//! store, resolves and publishes the routing table, then prints it.
//!
//! ## Command line flags
//!
//! - `--config PATH`: config file (default: `<config dir>/patchbay/patchbay.yaml`)
//! - `--preset NAME`: select this preset before resolving

use anyhow::{bail, Context, Result};
use patchbay_host::{
    default_config_path, load_or_init_host_config, PatchbayHandler, StoreAdapter, YamlStore,
};
use std::path::PathBuf;

#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    preset: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().context("--config requires a path")?;
                parsed.config_path = Some(PathBuf::from(value));
            }
            "--preset" => {
                parsed.preset = Some(args.next().context("--preset requires a name")?);
            }
            other => bail!("unknown argument: {}", other),
        }
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    // Set RUST_LOG=debug (or trace for every slot write) for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config_path = args.config_path.unwrap_or_else(default_config_path);
    let config = load_or_init_host_config(&config_path);

    let mut store = YamlStore::open(&config.state_path)
        .with_context(|| format!("Failed to open host store {:?}", config.state_path))?;
    if let Some(preset) = &args.preset {
        log::info!("Selecting preset '{}'", preset);
        store.set_value(&config.preset_key, preset.as_str());
    }

    let mut handler = PatchbayHandler::new(StoreAdapter::new(store, &config));
    let table = handler.on_preset_selected()?;

    let store = handler.into_inner().into_inner();
    store.flush()?;
    log::info!("Published routing table to {:?}", store.path());

    print!("{}", serde_yaml::to_string(&table)?);
    Ok(())
}
