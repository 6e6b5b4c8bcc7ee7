use crate::app_state::{App, InputMode};
use crate::ar::{ArCycler, ArScene};
use crate::portfolio;

impl App {
    pub fn open_portfolio(&mut self) {
        match portfolio::load_portfolio(&self.store) {
            Ok(page) => {
                self.portfolio_page = Some(page);
                self.input_mode = InputMode::Portfolio;
                self.status_message = "Portfolio (read-only). Esc to go back.".to_string();
            }
            Err(e) => {
                self.portfolio_page = None;
                self.report_error("Could not load portfolio", &e);
            }
        }
    }

    /// Each AR session starts from a fresh scene with the cursor at 0.
    pub fn open_ar(&mut self) {
        let mut scene = ArScene::default();
        match ArCycler::init(&self.store, &mut scene) {
            Ok(cycler) => {
                self.ar_scene = scene;
                self.ar_cycler = Some(cycler);
                self.input_mode = InputMode::ArViewer;
                self.status_message = "AR viewer: ←/→ to browse, Esc to close.".to_string();
            }
            Err(e) => self.report_error("Could not start AR viewer", &e),
        }
    }

    pub fn ar_next(&mut self) {
        if let Some(cycler) = self.ar_cycler.as_mut() {
            if !cycler.next(&mut self.ar_scene) {
                self.status_message = "Nothing to show in AR yet.".to_string();
            }
        }
    }

    pub fn ar_prev(&mut self) {
        if let Some(cycler) = self.ar_cycler.as_mut() {
            if !cycler.prev(&mut self.ar_scene) {
                self.status_message = "Nothing to show in AR yet.".to_string();
            }
        }
    }

    pub fn close_ar(&mut self) {
        self.ar_cycler = None;
        self.ar_scene = ArScene::default();
    }
}
