use crate::app_state::App;
use crate::error::PortfolioError;
use chrono::Local;
use std::time::{Duration, Instant};
use tracing::{error, warn};

impl App {
    /// Add a new status message to the history and update the main status
    pub fn add_status_message(&mut self, message: String) {
        // Wall-clock time for the status log, Instant for expiry
        self.status_messages
            .push_back((message.clone(), Instant::now(), Local::now()));

        // Keep only last 5 messages
        while self.status_messages.len() > 5 {
            self.status_messages.pop_front();
        }

        self.status_message = message;
    }

    /// Show an error to the user and log it at a level matching its kind.
    pub fn report_error(&mut self, context: &str, err: &PortfolioError) {
        match err {
            PortfolioError::NoArtist
            | PortfolioError::MissingFile
            | PortfolioError::MissingTitle
            | PortfolioError::MissingModelName => {
                warn!(%context, "{}", err);
                self.add_status_message(err.to_string());
            }
            PortfolioError::Decode { .. } | PortfolioError::Store(_) => {
                error!(%context, "{}", err);
                self.add_status_message(format!("{}: {}", context, err));
            }
        }
    }

    /// Clean up old status messages (older than 30 seconds)
    pub fn cleanup_old_status_messages(&mut self) {
        let cutoff = Instant::now() - Duration::from_secs(30);
        while let Some((_, timestamp, _)) = self.status_messages.front() {
            if *timestamp < cutoff {
                self.status_messages.pop_front();
            } else {
                break;
            }
        }
    }
}
