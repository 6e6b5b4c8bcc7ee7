use crate::app_state::{App, InputMode};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

impl App {
    pub async fn handle_events(&mut self) -> io::Result<()> {
        // Finished file reads are applied before any new input
        self.drain_decode_results();

        self.cleanup_old_status_messages();

        // Batch character input for better performance during paste operations
        let mut char_batch = String::new();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                match key_event.code {
                    KeyCode::Char(c) if self.input_mode.is_text_prompt() => char_batch.push(c),
                    code => {
                        self.input_buffer.push_str(&char_batch);
                        char_batch.clear();
                        self.handle_key_input(code);
                        return Ok(()); // Exit early to render UI
                    }
                }
            }
        }
        if !char_batch.is_empty() {
            self.input_buffer.push_str(&char_batch);
            return Ok(());
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    self.handle_key_input(key_event.code);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key_input(&mut self, key_code: KeyCode) {
        if self.input_mode.is_text_prompt() {
            self.handle_text_prompt_input(key_code);
            return;
        }

        match self.input_mode {
            InputMode::Gallery => self.handle_gallery_input(key_code),
            InputMode::Profile => self.handle_profile_input(key_code),
            InputMode::Portfolio => self.handle_portfolio_input(key_code),
            InputMode::ArViewer => self.handle_ar_input(key_code),
            InputMode::ConfirmDelete => self.handle_confirm_delete_input(key_code),
            InputMode::ShowHelp => self.handle_help_input(key_code),
            _ => {}
        }
    }

    /// Keys that work from every non-prompt screen.
    fn handle_global_input(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char('q') => self.exit = true,
            KeyCode::Char('?') => self.input_mode = InputMode::ShowHelp,
            KeyCode::Char('g') => self.open_gallery(),
            KeyCode::Char('p') => self.open_profile(),
            KeyCode::Char('v') => self.open_portfolio(),
            KeyCode::Char('a') => self.open_ar(),
            KeyCode::Char('o') => self.sign_out(),
            _ => return false,
        }
        true
    }

    fn handle_text_prompt_input(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Enter => match self.input_mode {
                InputMode::SignIn => self.submit_sign_in(),
                InputMode::EditName => self.submit_profile_name(),
                InputMode::EditBio => self.submit_profile_bio(),
                InputMode::EnterPicturePath => self.submit_profile_pic_path(),
                InputMode::ArtworkPath => self.submit_artwork_path(),
                InputMode::ArtworkTitle => self.submit_artwork_title(),
                InputMode::ArtworkDesc => self.submit_artwork_desc(),
                InputMode::ModelPath => self.submit_model_path(),
                InputMode::ModelName => self.submit_model_name(),
                _ => {}
            },
            KeyCode::Esc => {
                self.input_buffer.clear();
                self.input_mode = match self.input_mode {
                    InputMode::SignIn => {
                        self.exit = true;
                        InputMode::SignIn
                    }
                    InputMode::EditName | InputMode::EditBio | InputMode::EnterPicturePath => {
                        InputMode::Profile
                    }
                    _ => InputMode::Gallery,
                };
                self.status_message = "Input cancelled.".to_string();
            }
            KeyCode::Char(to_insert) => self.input_buffer.push(to_insert),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            _ => {}
        }
    }

    fn handle_gallery_input(&mut self, key_code: KeyCode) {
        if self.handle_global_input(key_code) {
            return;
        }
        match key_code {
            KeyCode::Up => self.select_previous_gallery_item(),
            KeyCode::Down => self.select_next_gallery_item(),
            KeyCode::Char('u') => self.begin_artwork_upload(),
            KeyCode::Char('m') => self.begin_model_upload(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete_selected(),
            KeyCode::Char('r') => self.display_artworks(),
            _ => {}
        }
    }

    fn handle_profile_input(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Esc => self.open_gallery(),
            KeyCode::Char('n') => self.begin_profile_edit(),
            KeyCode::Char('i') => {
                self.input_buffer.clear();
                self.input_mode = InputMode::EnterPicturePath;
            }
            code => {
                self.handle_global_input(code);
            }
        }
    }

    fn handle_portfolio_input(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Esc => self.open_gallery(),
            code => {
                self.handle_global_input(code);
            }
        }
    }

    fn handle_ar_input(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Left | KeyCode::Char('h') => self.ar_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.ar_next(),
            KeyCode::Esc => {
                self.close_ar();
                self.open_gallery();
            }
            code => {
                if !matches!(code, KeyCode::Char('a')) {
                    let leaving = self.handle_global_input(code);
                    if leaving && self.input_mode != InputMode::ArViewer {
                        self.close_ar();
                    }
                }
            }
        }
    }

    fn handle_confirm_delete_input(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Char('y') | KeyCode::Enter => self.confirm_delete_selected(),
            KeyCode::Char('n') | KeyCode::Esc => {
                self.input_mode = InputMode::Gallery;
                self.status_message = "Delete cancelled.".to_string();
            }
            _ => {}
        }
    }

    fn handle_help_input(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.input_mode = if self.current_user.is_some() {
                    InputMode::Gallery
                } else {
                    InputMode::SignIn
                };
                self.status_message = "Help closed.".to_string();
            }
            _ => {}
        }
    }
}
