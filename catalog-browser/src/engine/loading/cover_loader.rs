use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::tasks::{IoTaskPool, Task, block_on, futures_lite::future};
use thiserror::Error;

use crate::engine::assets::catalog::Record;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Error)]
pub enum CoverError {
    #[error("record has no cover url")]
    MissingUrl,
    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not decode cover image: {0}")]
    Decode(#[from] image::ImageError),
}

/// In-flight cover fetch for one cover panel.
#[derive(Component)]
pub struct CoverTask {
    task: Task<Result<Image, CoverError>>,
    record_name: String,
}

/// Start fetching the cover for `record` and attach the task to `panel`.
///
/// The panel is already visible; the texture is applied whenever the task
/// resolves, in no particular order relative to other covers. Fetches wait
/// on the network or disk, so they go to the IO pool.
pub fn request_cover(commands: &mut Commands, panel: Entity, record: &Record) {
    let url = record.image_url.clone();
    let task = IoTaskPool::get().spawn(async move { load_cover(&url).await });

    commands.entity(panel).insert(CoverTask {
        task,
        record_name: record.display_name(),
    });
}

/// Apply finished covers to their panel material, or log and leave the
/// panel untextured. Failed covers are not retried.
pub fn poll_cover_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut CoverTask, &MeshMaterial3d<StandardMaterial>)>,
    mut images: ResMut<Assets<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    for (entity, mut cover, material) in &mut tasks {
        let Some(result) = block_on(future::poll_once(&mut cover.task)) else {
            continue;
        };
        commands.entity(entity).remove::<CoverTask>();

        match result {
            Ok(image) => {
                if let Some(material) = materials.get_mut(&material.0) {
                    material.base_color_texture = Some(images.add(image));
                }
                loading_progress.covers_loaded += 1;
            }
            Err(err) => {
                warn!("Cover for {} unavailable: {}", cover.record_name, err);
                loading_progress.covers_failed += 1;
            }
        }
    }
}

async fn load_cover(url: &str) -> Result<Image, CoverError> {
    let bytes = fetch_cover_bytes(url).await?;
    decode_cover(&bytes)
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn is_remote(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_cover_bytes(url: &str) -> Result<Vec<u8>, CoverError> {
    if url.is_empty() {
        return Err(CoverError::MissingUrl);
    }

    if is_remote(url) {
        // Runs on an IO pool thread, so the blocking client is fine here.
        let http_error = |source| CoverError::Http {
            url: url.to_owned(),
            source,
        };
        let response = reqwest::blocking::get(url)
            .and_then(|response| response.error_for_status())
            .map_err(http_error)?;
        let bytes = response.bytes().map_err(http_error)?;
        return Ok(bytes.to_vec());
    }

    let path = url.strip_prefix("file://").unwrap_or(url);
    std::fs::read(path).map_err(|source| CoverError::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_cover_bytes(url: &str) -> Result<Vec<u8>, CoverError> {
    if url.is_empty() {
        return Err(CoverError::MissingUrl);
    }

    let http_error = |source| CoverError::Http {
        url: url.to_owned(),
        source,
    };
    let response = reqwest::get(url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(http_error)?;
    let bytes = response.bytes().await.map_err(http_error)?;
    Ok(bytes.to_vec())
}

/// Decode PNG or JPEG bytes into an sRGB texture.
pub fn decode_cover(bytes: &[u8]) -> Result<Image, CoverError> {
    let rgba = image::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        rgba.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    ))
}
