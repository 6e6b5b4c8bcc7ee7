use crate::app_state::{App, DecodeJob, InputMode};
use crate::profile;
use tracing::info;

impl App {
    /// Open the profile screen, refusing when nobody is signed in.
    pub fn open_profile(&mut self) {
        match profile::load_profile(&self.store) {
            Ok(view) => {
                self.profile_view = Some(view);
                self.input_mode = InputMode::Profile;
                self.status_message = "Profile: n edit name/bio, i set picture, Esc back".to_string();
            }
            Err(e) => {
                self.profile_view = None;
                self.report_error("Could not load profile", &e);
            }
        }
    }

    /// Start editing: name first, then bio, then save both together.
    pub fn begin_profile_edit(&mut self) {
        let Some(view) = &self.profile_view else {
            return;
        };
        self.input_buffer = view.name.clone();
        self.input_mode = InputMode::EditName;
    }

    pub fn submit_profile_name(&mut self) {
        self.profile_name_draft = std::mem::take(&mut self.input_buffer);
        self.input_buffer = self
            .profile_view
            .as_ref()
            .map(|view| view.bio.clone())
            .unwrap_or_default();
        self.input_mode = InputMode::EditBio;
    }

    pub fn submit_profile_bio(&mut self) {
        let bio = std::mem::take(&mut self.input_buffer);
        let name = std::mem::take(&mut self.profile_name_draft);

        match profile::save_profile(&mut self.store, &name, &bio) {
            Ok(()) => {
                self.add_status_message("Profile saved!".to_string());
                self.open_profile();
            }
            Err(e) => {
                self.report_error("Could not save profile", &e);
                self.input_mode = InputMode::Profile;
            }
        }
    }

    /// Kick off the picture decode; the record is only written once it completes.
    pub fn submit_profile_pic_path(&mut self) {
        let path = std::mem::take(&mut self.input_buffer);
        self.input_mode = InputMode::Profile;

        let path = path.trim();
        if path.is_empty() {
            self.add_status_message("Please choose an image first!".to_string());
            return;
        }

        info!(path, "decoding profile picture");
        self.spawn_decode(DecodeJob::ProfilePic, path.into());
        self.status_message = "Reading profile picture...".to_string();
    }

    pub fn apply_profile_pic(&mut self, data_url: String) {
        match profile::store_profile_pic(&mut self.store, data_url) {
            Ok(()) => {
                self.add_status_message("Profile picture updated!".to_string());
                if let Ok(view) = profile::load_profile(&self.store) {
                    self.profile_view = Some(view);
                }
            }
            Err(e) => self.report_error("Could not save profile picture", &e),
        }
    }
}
