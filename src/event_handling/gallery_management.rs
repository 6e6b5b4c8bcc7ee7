use crate::app_state::{App, DecodeJob, InputMode};
use crate::gallery::{self, DeleteTarget, PendingArtwork, PendingModel};
use tracing::info;

impl App {
    /// Rebuild the gallery list. Leaves the previous list alone when nobody is signed in.
    pub fn display_artworks(&mut self) {
        match gallery::display_artworks(&self.store) {
            Ok(Some(items)) => {
                self.gallery_items = items;
                if self.gallery_selection_index >= self.gallery_items.len() {
                    self.gallery_selection_index = self.gallery_items.len().saturating_sub(1);
                }
            }
            Ok(None) => {}
            Err(e) => self.report_error("Could not load gallery", &e),
        }
    }

    pub fn open_gallery(&mut self) {
        self.input_mode = InputMode::Gallery;
        self.display_artworks();
        self.status_message = "Gallery: u upload art, m upload model, d delete, ? help".to_string();
    }

    pub fn select_previous_gallery_item(&mut self) {
        self.gallery_selection_index = self.gallery_selection_index.saturating_sub(1);
    }

    pub fn select_next_gallery_item(&mut self) {
        if self.gallery_selection_index + 1 < self.gallery_items.len() {
            self.gallery_selection_index += 1;
        }
    }

    // --- Artwork upload: path, then title, then description ---

    pub fn begin_artwork_upload(&mut self) {
        self.artwork_path_draft.clear();
        self.artwork_title_draft.clear();
        self.input_buffer.clear();
        self.input_mode = InputMode::ArtworkPath;
    }

    pub fn submit_artwork_path(&mut self) {
        self.artwork_path_draft = std::mem::take(&mut self.input_buffer);
        if self.artwork_path_draft.trim().is_empty() {
            self.input_mode = InputMode::Gallery;
            self.add_status_message("Select an artwork first!".to_string());
            return;
        }
        self.input_mode = InputMode::ArtworkTitle;
    }

    pub fn submit_artwork_title(&mut self) {
        self.artwork_title_draft = std::mem::take(&mut self.input_buffer);
        if self.artwork_title_draft.trim().is_empty() {
            self.input_mode = InputMode::Gallery;
            self.add_status_message("Enter artwork title!".to_string());
            return;
        }
        self.input_mode = InputMode::ArtworkDesc;
    }

    pub fn submit_artwork_desc(&mut self) {
        let desc = std::mem::take(&mut self.input_buffer);
        self.input_mode = InputMode::Gallery;

        match gallery::validate_artwork(&self.artwork_path_draft, &self.artwork_title_draft, &desc) {
            Ok(pending) => self.start_artwork_decode(pending),
            Err(e) => self.report_error("Upload rejected", &e),
        }
    }

    fn start_artwork_decode(&mut self, pending: PendingArtwork) {
        info!(path = %pending.path.display(), title = %pending.title, "decoding artwork");
        self.status_message = format!("Reading {}...", gallery::file_label(&pending.path));
        let path = pending.path.clone();
        self.spawn_decode(DecodeJob::Artwork(pending), path);
    }

    pub fn apply_artwork(&mut self, pending: PendingArtwork, data_url: String) {
        let title = pending.title.clone();
        match gallery::append_artwork(&mut self.store, pending, data_url) {
            Ok(()) => self.add_status_message(format!("Artwork '{}' added.", title)),
            Err(e) => self.report_error("Could not add artwork", &e),
        }
        self.display_artworks();
    }

    // --- Model upload: path, then name ---

    pub fn begin_model_upload(&mut self) {
        self.model_path_draft.clear();
        self.input_buffer.clear();
        self.input_mode = InputMode::ModelPath;
    }

    pub fn submit_model_path(&mut self) {
        self.model_path_draft = std::mem::take(&mut self.input_buffer);
        if self.model_path_draft.trim().is_empty() {
            self.input_mode = InputMode::Gallery;
            self.add_status_message("Select a model first!".to_string());
            return;
        }
        self.input_mode = InputMode::ModelName;
    }

    pub fn submit_model_name(&mut self) {
        let name = std::mem::take(&mut self.input_buffer);
        self.input_mode = InputMode::Gallery;

        match gallery::validate_model(&self.model_path_draft, &name) {
            Ok(pending) => {
                info!(path = %pending.path.display(), name = %pending.name, "decoding model");
                self.status_message = format!("Reading {}...", gallery::file_label(&pending.path));
                let path = pending.path.clone();
                self.spawn_decode(DecodeJob::Model(pending), path);
            }
            Err(e) => self.report_error("Upload rejected", &e),
        }
    }

    pub fn apply_model(&mut self, pending: PendingModel, data_url: String) {
        let name = pending.name.clone();
        match gallery::append_model(&mut self.store, pending, data_url) {
            Ok(()) => self.add_status_message(format!("Model '{}' added.", name)),
            Err(e) => self.report_error("Could not add model", &e),
        }
        self.display_artworks();
    }

    // --- Delete ---

    pub fn selected_delete_target(&self) -> Option<DeleteTarget> {
        self.gallery_items
            .get(self.gallery_selection_index)
            .map(|item| item.delete_target())
    }

    pub fn request_delete_selected(&mut self) {
        if self.selected_delete_target().is_some() {
            self.input_mode = InputMode::ConfirmDelete;
        }
    }

    /// Deletes whatever the selection points at now; indices are re-read from
    /// the freshly rendered list, never cached across deletions.
    pub fn confirm_delete_selected(&mut self) {
        self.input_mode = InputMode::Gallery;
        let Some(target) = self.selected_delete_target() else {
            return;
        };

        match gallery::delete(&mut self.store, target) {
            Ok(()) => self.add_status_message(match target {
                DeleteTarget::Artwork(_) => "Artwork deleted.".to_string(),
                DeleteTarget::Model(_) => "Model deleted.".to_string(),
            }),
            Err(e) => self.report_error("Could not delete", &e),
        }
        self.display_artworks();
    }
}
