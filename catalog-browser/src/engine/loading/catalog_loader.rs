use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy_common_assets::csv::LoadedCsv;
use thiserror::Error;

use crate::engine::assets::catalog::{Catalog, CatalogRow, records_from_rows};
use crate::engine::core::app_state::AppState;
use crate::engine::core::config::BrowserConfig;
use crate::engine::loading::progress::LoadingProgress;

/// Message shown in place of the loading text when the dataset is unusable.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load catalog data.";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not load dataset {path}: {reason}")]
    Load { path: String, reason: String },
    #[error("dataset {path} finished loading but its rows are missing")]
    MissingRows { path: String },
}

#[derive(Resource, Default)]
pub struct CatalogLoader {
    handle: Option<Handle<LoadedCsv<CatalogRow>>>,
    path: String,
}

// Start loading the dataset
pub fn start_loading(
    mut catalog_loader: ResMut<CatalogLoader>,
    asset_server: Res<AssetServer>,
    config: Res<BrowserConfig>,
) {
    info!("Loading catalog from {}", config.dataset_path);
    catalog_loader.path = config.dataset_path.clone();
    catalog_loader.handle = Some(asset_server.load(config.dataset_path.clone()));
}

/// Wait for the dataset, then publish its valid records as the `Catalog`.
/// Any load or parse failure is fatal: the app moves to `LoadFailed`.
pub fn load_catalog_system(
    mut loading_progress: ResMut<LoadingProgress>,
    catalog_loader: Res<CatalogLoader>,
    asset_server: Res<AssetServer>,
    tables: Res<Assets<LoadedCsv<CatalogRow>>>,
    rows: Res<Assets<CatalogRow>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.dataset_loaded || loading_progress.failure.is_some() {
        return;
    }
    let Some(handle) = catalog_loader.handle.as_ref() else {
        return;
    };

    let outcome = match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => collect_catalog(&catalog_loader.path, handle, &tables, &rows),
        Some(LoadState::Failed(err)) => Err(CatalogError::Load {
            path: catalog_loader.path.clone(),
            reason: err.to_string(),
        }),
        _ => return,
    };

    match outcome {
        Ok(catalog) => {
            info!("✓ Catalog loaded: {} valid records", catalog.len());
            commands.insert_resource(catalog);
            loading_progress.dataset_loaded = true;
        }
        Err(err) => {
            error!("{err}");
            loading_progress.failure = Some(LOAD_FAILURE_MESSAGE.to_string());
            next_state.set(AppState::LoadFailed);
        }
    }
}

fn collect_catalog(
    path: &str,
    handle: &Handle<LoadedCsv<CatalogRow>>,
    tables: &Assets<LoadedCsv<CatalogRow>>,
    rows: &Assets<CatalogRow>,
) -> Result<Catalog, CatalogError> {
    let missing = || CatalogError::MissingRows {
        path: path.to_owned(),
    };
    let table = tables.get(handle).ok_or_else(missing)?;

    let loaded_rows = table
        .rows
        .iter()
        .map(|row| rows.get(row).ok_or_else(missing))
        .collect::<Result<Vec<&CatalogRow>, _>>()?;

    Ok(Catalog {
        records: records_from_rows(loaded_rows),
    })
}
