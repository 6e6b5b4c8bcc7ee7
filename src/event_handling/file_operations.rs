use crate::app_state::{App, DecodeJob, DecodeResult};
use crate::decode::read_as_data_url;
use std::path::PathBuf;
use tracing::warn;

impl App {
    /// Read `path` on a background task; the result arrives through `decode_receiver`.
    /// There is no cancellation: every started decode reports back.
    pub fn spawn_decode(&mut self, job: DecodeJob, path: PathBuf) {
        let tx = self.decode_sender.clone();
        let user = self.current_user.clone();
        self.decodes_in_flight += 1;

        tokio::spawn(async move {
            let outcome = read_as_data_url(&path).await;
            // If this fails, the app has been dropped
            let _ = tx.send(DecodeResult { job, user, outcome });
        });
    }

    /// Apply every finished decode, in completion order.
    pub fn drain_decode_results(&mut self) {
        while let Ok(result) = self.decode_receiver.try_recv() {
            self.handle_decode_result(result);
        }
    }

    pub fn handle_decode_result(&mut self, result: DecodeResult) {
        self.decodes_in_flight = self.decodes_in_flight.saturating_sub(1);

        let data_url = match result.outcome {
            Ok(data_url) => data_url,
            Err(e) => {
                self.report_error("Could not read file", &e);
                return;
            }
        };

        // The session may have changed while the file was being read
        let session = self.store.current_user().ok().flatten();
        if result.user != session {
            warn!(
                started_for = ?result.user,
                current = ?session,
                "discarding upload started under a different session"
            );
            self.add_status_message("Upload discarded: the signed-in artist changed.".to_string());
            return;
        }

        match result.job {
            DecodeJob::ProfilePic => self.apply_profile_pic(data_url),
            DecodeJob::Artwork(pending) => self.apply_artwork(pending, data_url),
            DecodeJob::Model(pending) => self.apply_model(pending, data_url),
        }
    }
}
