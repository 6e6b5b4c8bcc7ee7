//! AR viewer cursor.
//!
//! One cursor drives both lists: artwork `i` is shown at cursor `i`, the
//! model shown is `cursor % models.len()`. Navigation wraps at
//! `max(artworks, models)`, so with unequal counts the model list wraps more
//! often than the artwork list (or vice versa). When the cursor is past the
//! last artwork the plane keeps its previous image.

use crate::art::{ArtistRecord, Artwork, Model3D};
use crate::error::PortfolioError;
use crate::records::RecordStore;
use crate::storage::KeyValueStore;
use std::collections::BTreeMap;
use tracing::debug;

pub const UNTITLED: &str = "(Untitled)";

/// Whatever renders the AR scene: an asset registry, a textured plane with a
/// text overlay, and one 3D model slot.
pub trait ArSurface {
    fn register_asset(&mut self, id: &str, src: &str);
    fn show_plane(&mut self, asset_id: &str);
    fn set_overlay(&mut self, title: &str, desc: &str);
    fn set_model(&mut self, src: &str);
}

pub fn asset_id(index: usize) -> String {
    format!("art-{}", index)
}

#[derive(Debug, Clone)]
pub struct ArCycler {
    artworks: Vec<Artwork>,
    models: Vec<Model3D>,
    cursor: usize,
}

impl ArCycler {
    /// Opens an AR session for the signed-in artist.
    pub fn init<S: KeyValueStore, A: ArSurface>(
        store: &RecordStore<S>,
        surface: &mut A,
    ) -> Result<Self, PortfolioError> {
        let artist = store.current_artist()?.ok_or(PortfolioError::NoArtist)?;
        Ok(Self::start(artist, surface))
    }

    pub fn start<A: ArSurface>(artist: ArtistRecord, surface: &mut A) -> Self {
        let cycler = Self {
            artworks: artist.artworks.unwrap_or_default(),
            models: artist.models.unwrap_or_default(),
            cursor: 0,
        };

        for (i, art) in cycler.artworks.iter().enumerate() {
            surface.register_asset(&asset_id(i), &art.img);
        }
        if let Some(first) = cycler.models.first() {
            surface.set_model(&first.data);
        }

        cycler.update(surface);
        cycler
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn artwork_count(&self) -> usize {
        self.artworks.len()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn current_artwork(&self) -> Option<&Artwork> {
        self.artworks.get(self.cursor)
    }

    pub fn current_model(&self) -> Option<&Model3D> {
        if self.models.is_empty() {
            return None;
        }
        self.models.get(self.cursor % self.models.len())
    }

    fn bound(&self) -> usize {
        self.artworks.len().max(self.models.len())
    }

    /// Moves forward, wrapping. Returns `false` when there is nothing to show.
    pub fn next<A: ArSurface>(&mut self, surface: &mut A) -> bool {
        let bound = self.bound();
        if bound == 0 {
            return false;
        }
        self.cursor = (self.cursor + 1) % bound;
        self.update(surface);
        true
    }

    pub fn prev<A: ArSurface>(&mut self, surface: &mut A) -> bool {
        let bound = self.bound();
        if bound == 0 {
            return false;
        }
        self.cursor = (self.cursor + bound - 1) % bound;
        self.update(surface);
        true
    }

    fn update<A: ArSurface>(&self, surface: &mut A) {
        if let Some(art) = self.current_artwork() {
            surface.show_plane(&asset_id(self.cursor));
            let title = if art.title.is_empty() {
                UNTITLED
            } else {
                art.title.as_str()
            };
            surface.set_overlay(title, &art.desc);
        }
        if let Some(model) = self.current_model() {
            surface.set_model(&model.data);
        }
        debug!(cursor = self.cursor, "ar view updated");
    }
}

/// In-process AR scene state; the terminal UI draws from it.
#[derive(Debug, Clone, Default)]
pub struct ArScene {
    pub assets: BTreeMap<String, String>,
    pub plane: Option<String>,
    pub title: String,
    pub desc: String,
    pub model: Option<String>,
}

impl ArScene {
    pub fn plane_src(&self) -> Option<&str> {
        self.plane
            .as_ref()
            .and_then(|id| self.assets.get(id))
            .map(String::as_str)
    }
}

impl ArSurface for ArScene {
    fn register_asset(&mut self, id: &str, src: &str) {
        self.assets.insert(id.to_string(), src.to_string());
    }

    fn show_plane(&mut self, asset_id: &str) {
        self.plane = Some(asset_id.to_string());
    }

    fn set_overlay(&mut self, title: &str, desc: &str) {
        self.title = title.to_string();
        self.desc = desc.to_string();
    }

    fn set_model(&mut self, src: &str) {
        self.model = Some(src.to_string());
    }
}

#[cfg(test)]
#[path = "ar_test.rs"]
mod tests;
