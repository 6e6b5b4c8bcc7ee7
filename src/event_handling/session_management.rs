use crate::app_state::{App, InputMode};

impl App {
    pub fn submit_sign_in(&mut self) {
        let username = self.input_buffer.trim().to_string();
        match self.store.sign_in(&username) {
            Ok(()) => {
                self.input_buffer.clear();
                self.current_user = Some(username.clone());
                self.gallery_items.clear();
                self.gallery_selection_index = 0;
                self.add_status_message(format!("Signed in as {}.", username));
                self.open_gallery();
            }
            Err(e) => {
                self.report_error("Could not sign in", &e.into());
                self.input_buffer.clear();
            }
        }
    }

    pub fn sign_out(&mut self) {
        if let Err(e) = self.store.sign_out() {
            self.report_error("Could not sign out", &e.into());
            return;
        }
        self.current_user = None;
        self.gallery_items.clear();
        self.gallery_selection_index = 0;
        self.profile_view = None;
        self.portfolio_page = None;
        self.close_ar();
        self.input_buffer.clear();
        self.input_mode = InputMode::SignIn;
        self.add_status_message("Signed out. Enter your artist username:".to_string());
    }
}
