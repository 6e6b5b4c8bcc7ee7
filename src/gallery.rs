use crate::art::{Artwork, Model3D};
use crate::error::PortfolioError;
use crate::records::RecordStore;
use crate::storage::KeyValueStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An artwork upload that passed validation and is waiting for its decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingArtwork {
    pub path: PathBuf,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingModel {
    pub path: PathBuf,
    pub name: String,
}

/// What a delete control removes. Indices go stale after any deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Artwork(usize),
    Model(usize),
}

/// One card of the gallery list: artworks first, then models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryItem {
    Artwork {
        index: usize,
        img: String,
        title: String,
        desc: String,
    },
    Model {
        index: usize,
        name: String,
    },
}

impl GalleryItem {
    pub fn delete_target(&self) -> DeleteTarget {
        match self {
            GalleryItem::Artwork { index, .. } => DeleteTarget::Artwork(*index),
            GalleryItem::Model { index, .. } => DeleteTarget::Model(*index),
        }
    }
}

pub fn validate_artwork(path: &str, title: &str, desc: &str) -> Result<PendingArtwork, PortfolioError> {
    let path = path.trim();
    if path.is_empty() {
        return Err(PortfolioError::MissingFile);
    }
    let title = title.trim();
    if title.is_empty() {
        return Err(PortfolioError::MissingTitle);
    }

    Ok(PendingArtwork {
        path: PathBuf::from(path),
        title: title.to_string(),
        desc: desc.trim().to_string(),
    })
}

/// A blank model name falls back to the file stem.
pub fn validate_model(path: &str, name: &str) -> Result<PendingModel, PortfolioError> {
    let path = path.trim();
    if path.is_empty() {
        return Err(PortfolioError::MissingFile);
    }
    let path = PathBuf::from(path);

    let name = match name.trim() {
        "" => path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .unwrap_or_default(),
        given => given.to_string(),
    };
    if name.is_empty() {
        return Err(PortfolioError::MissingModelName);
    }

    Ok(PendingModel { path, name })
}

pub fn append_artwork<S: KeyValueStore>(
    store: &mut RecordStore<S>,
    pending: PendingArtwork,
    data_url: String,
) -> Result<(), PortfolioError> {
    let title = pending.title.clone();
    let saved = store.with_current_artist(|artist| {
        artist.artworks.get_or_insert_with(Vec::new).push(Artwork {
            img: data_url,
            title: pending.title,
            desc: pending.desc,
            ..Artwork::default()
        });
    })?;
    if !saved {
        return Err(PortfolioError::NoArtist);
    }
    info!(%title, "artwork added");
    Ok(())
}

pub fn append_model<S: KeyValueStore>(
    store: &mut RecordStore<S>,
    pending: PendingModel,
    data_url: String,
) -> Result<(), PortfolioError> {
    let name = pending.name.clone();
    let saved = store.with_current_artist(|artist| {
        artist.models.get_or_insert_with(Vec::new).push(Model3D {
            name: pending.name,
            data: data_url,
            ..Model3D::default()
        });
    })?;
    if !saved {
        return Err(PortfolioError::NoArtist);
    }
    info!(%name, "model added");
    Ok(())
}

pub fn delete_artwork<S: KeyValueStore>(
    store: &mut RecordStore<S>,
    index: usize,
) -> Result<(), PortfolioError> {
    delete(store, DeleteTarget::Artwork(index))
}

pub fn delete_model<S: KeyValueStore>(
    store: &mut RecordStore<S>,
    index: usize,
) -> Result<(), PortfolioError> {
    delete(store, DeleteTarget::Model(index))
}

/// Out-of-range indices are ignored.
pub fn delete<S: KeyValueStore>(
    store: &mut RecordStore<S>,
    target: DeleteTarget,
) -> Result<(), PortfolioError> {
    let mut removed = false;
    let saved = store.with_current_artist(|artist| match target {
        DeleteTarget::Artwork(index) => {
            removed = remove_at(artist.artworks.as_mut(), index);
        }
        DeleteTarget::Model(index) => {
            removed = remove_at(artist.models.as_mut(), index);
        }
    })?;
    if !saved {
        return Err(PortfolioError::NoArtist);
    }

    if removed {
        info!(?target, "gallery entry deleted");
    } else {
        debug!(?target, "delete ignored, index out of range");
    }
    Ok(())
}

fn remove_at<T>(items: Option<&mut Vec<T>>, index: usize) -> bool {
    match items {
        Some(items) if index < items.len() => {
            items.remove(index);
            true
        }
        _ => false,
    }
}

/// Gallery cards for the signed-in artist, or `None` when nobody is signed in.
pub fn display_artworks<S: KeyValueStore>(
    store: &RecordStore<S>,
) -> Result<Option<Vec<GalleryItem>>, PortfolioError> {
    let Some(artist) = store.current_artist()? else {
        return Ok(None);
    };

    let artworks = artist
        .artworks()
        .iter()
        .enumerate()
        .map(|(index, art)| GalleryItem::Artwork {
            index,
            img: art.img.clone(),
            title: art.title.clone(),
            desc: art.desc.clone(),
        });
    let models = artist
        .models()
        .iter()
        .enumerate()
        .map(|(index, model)| GalleryItem::Model {
            index,
            name: model.name.clone(),
        });

    Ok(Some(artworks.chain(models).collect()))
}

/// Short label for a data URI, e.g. `image/png, 12.3 KB`.
pub fn describe_data_url(url: &str) -> String {
    let Some(rest) = url.strip_prefix("data:") else {
        return url.to_string();
    };
    let (mime, payload) = rest.split_once(',').unwrap_or((rest, ""));
    let mime = mime.trim_end_matches(";base64");
    let bytes = payload.len() / 4 * 3;
    format!("{}, {:.1} KB", mime, bytes as f64 / 1024.0)
}

pub fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or_else(|| path.display().to_string(), str::to_string)
}

#[cfg(test)]
#[path = "gallery_test.rs"]
mod tests;
