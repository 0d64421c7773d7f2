use bevy::prelude::*;
use clap::Parser;
use constants::path::DATASET_PATH;

const DEFAULT_LOG_FILTER: &str = "wgpu=error,naga=warn,catalog_browser=info";

/// Runtime settings for one browsing session.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Dataset location relative to the asset root.
    pub dataset_path: String,
    /// Seed for the per-item float phase; random when unset.
    pub float_phase_seed: Option<u64>,
    pub log_filter: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            dataset_path: DATASET_PATH.to_string(),
            float_phase_seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Command line for native builds.
#[derive(Parser, Debug)]
#[command(name = "catalog-browser", about = "Browse a music catalog on a 3D spiral")]
pub struct BrowserArgs {
    /// Dataset CSV, relative to the asset directory
    #[arg(long, default_value = DATASET_PATH)]
    pub dataset: String,

    /// Fix the float phase of every item for reproducible motion
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter in `RUST_LOG` syntax
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log: String,
}

impl From<BrowserArgs> for BrowserConfig {
    fn from(args: BrowserArgs) -> Self {
        Self {
            dataset_path: args.dataset,
            float_phase_seed: args.seed,
            log_filter: args.log,
        }
    }
}

impl BrowserConfig {
    /// Native builds read the command line; the web build has none.
    pub fn from_environment() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            BrowserArgs::parse().into()
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }
}
