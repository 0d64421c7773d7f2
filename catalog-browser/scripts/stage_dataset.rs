use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use constants::path::{DATASET_SOURCE, STAGED_DATASET_PATH};
use thiserror::Error;

/// Copy the catalog dataset into the Trunk staging directory.
#[derive(Parser, Debug)]
#[command(name = "stage-dataset")]
struct StageArgs {
    /// Dataset to publish
    #[arg(long, default_value = DATASET_SOURCE)]
    source: PathBuf,

    /// Distribution directory being assembled
    #[arg(long, env = "TRUNK_STAGING_DIR")]
    out: PathBuf,
}

#[derive(Debug, Error)]
enum StageError {
    #[error("dataset not found at {0}")]
    MissingSource(PathBuf),
    #[error("could not create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn stage_dataset(source: &Path, staging_dir: &Path) -> Result<PathBuf, StageError> {
    if !source.is_file() {
        return Err(StageError::MissingSource(source.to_path_buf()));
    }

    let destination = staging_dir.join(STAGED_DATASET_PATH);
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|source| StageError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::copy(source, &destination).map_err(|err| StageError::Copy {
        from: source.to_path_buf(),
        to: destination.clone(),
        source: err,
    })?;
    Ok(destination)
}

fn main() {
    let args = StageArgs::parse();

    match stage_dataset(&args.source, &args.out) {
        Ok(destination) => println!("Staged dataset at {}", destination.display()),
        Err(err) => {
            eprintln!("stage-dataset: {err}");
            process::exit(1);
        }
    }
}
