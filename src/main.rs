use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::{self, stdout};
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod ar;
mod art;
mod config;
mod decode;
mod error;
mod event_handling;
mod gallery;
mod portfolio;
mod profile;
mod records;
mod storage;
mod ui;
use app_state::{App, InputMode};
use ar::ArScene;
use config::Config;
use records::RecordStore;
use storage::{FileStore, KeyValueStore, MemoryStore};

impl App {
    pub fn new(config: &Config) -> Self {
        match config.storage_path() {
            Ok(path) => {
                let storage = FileStore::new(path);
                info!(path = %storage.get_file_path().display(), "using file storage");
                Self::with_storage(Box::new(storage), true)
            }
            Err(e) => {
                warn!("Could not initialize storage: {}. Changes will not persist.", e);
                Self::with_storage(Box::new(MemoryStore::default()), false)
            }
        }
    }

    pub fn with_storage(storage: Box<dyn KeyValueStore>, persistent: bool) -> Self {
        let (decode_sender, decode_receiver) = mpsc::unbounded_channel();

        let mut app = Self {
            exit: false,
            store: RecordStore::new(storage),
            persistent,
            input_mode: InputMode::SignIn,
            input_buffer: String::new(),
            status_message: String::new(),
            status_messages: VecDeque::new(),
            current_user: None,
            gallery_items: Vec::new(),
            gallery_selection_index: 0,
            artwork_path_draft: String::new(),
            artwork_title_draft: String::new(),
            model_path_draft: String::new(),
            profile_view: None,
            profile_name_draft: String::new(),
            portfolio_page: None,
            ar_cycler: None,
            ar_scene: ArScene::default(),
            decode_sender,
            decode_receiver,
            decodes_in_flight: 0,
        };

        // Restore a saved session if its record still exists
        match app.store.current_artist() {
            Ok(Some(_)) => {
                app.current_user = app.store.current_user().ok().flatten();
                app.input_mode = InputMode::Gallery;
                app.add_status_message(format!(
                    "Restored session: {}. Press ? for help.",
                    app.current_user.as_deref().unwrap_or("unknown")
                ));
                app.display_artworks();
            }
            Ok(None) => {
                app.status_message = "Enter your artist username:".to_string();
            }
            Err(e) => {
                app.report_error("Could not read saved artists", &e.into());
            }
        }

        if !app.persistent {
            app.add_status_message("Warning: storage is in-memory only.".to_string());
        }

        app
    }

    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.exit {
            terminal.draw(|frame| ui::render_ui(self, frame))?;
            self.handle_events().await?;
        }
        Ok(())
    }
}

fn init_tracing(config: &Config) {
    let Some(path) = config.log_path() else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    execute!(stdout(), EnterAlternateScreen)?;

    let mut app = App::new(&config);
    let res = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    res
}
