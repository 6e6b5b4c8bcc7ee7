use crate::ar::{ArCycler, ArScene};
use crate::error::PortfolioError;
use crate::gallery::{GalleryItem, PendingArtwork, PendingModel};
use crate::portfolio::PortfolioPage;
use crate::profile::ProfileView;
use crate::records::RecordStore;
use crate::storage::KeyValueStore;
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum InputMode {
    SignIn, // Username prompt shown while logged out
    #[default]
    Gallery,
    Profile,
    EditName,
    EditBio,
    EnterPicturePath,
    Portfolio,
    ArViewer,
    ArtworkPath,
    ArtworkTitle,
    ArtworkDesc,
    ModelPath,
    ModelName,
    ConfirmDelete,
    ShowHelp,
}

impl InputMode {
    pub fn is_text_prompt(self) -> bool {
        matches!(
            self,
            InputMode::SignIn
                | InputMode::EditName
                | InputMode::EditBio
                | InputMode::EnterPicturePath
                | InputMode::ArtworkPath
                | InputMode::ArtworkTitle
                | InputMode::ArtworkDesc
                | InputMode::ModelPath
                | InputMode::ModelName
        )
    }
}

/// What a background decode was started for.
#[derive(Debug, Clone)]
pub enum DecodeJob {
    ProfilePic,
    Artwork(PendingArtwork),
    Model(PendingModel),
}

/// Sent back from a decode task once the file has been read.
#[derive(Debug)]
pub struct DecodeResult {
    pub job: DecodeJob,
    // Username that was signed in when the decode started
    pub user: Option<String>,
    pub outcome: Result<String, PortfolioError>,
}

pub struct App {
    pub exit: bool,
    pub store: RecordStore<Box<dyn KeyValueStore>>,
    pub persistent: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub status_message: String,
    pub status_messages: VecDeque<(String, Instant, DateTime<Local>)>,
    pub current_user: Option<String>,

    // Gallery
    pub gallery_items: Vec<GalleryItem>,
    pub gallery_selection_index: usize,
    pub artwork_path_draft: String,
    pub artwork_title_draft: String,
    pub model_path_draft: String,

    // Profile
    pub profile_view: Option<ProfileView>,
    pub profile_name_draft: String,

    // Portfolio
    pub portfolio_page: Option<PortfolioPage>,

    // AR viewer; dropped when the screen closes so the cursor restarts at 0
    pub ar_cycler: Option<ArCycler>,
    pub ar_scene: ArScene,

    // Background decodes
    pub decode_sender: mpsc::UnboundedSender<DecodeResult>,
    pub decode_receiver: mpsc::UnboundedReceiver<DecodeResult>,
    pub decodes_in_flight: usize,
}
