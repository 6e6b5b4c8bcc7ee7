use crate::app_state::{App, DecodeJob, DecodeResult, InputMode};
use crate::error::PortfolioError;
use crate::gallery::{validate_artwork, GalleryItem};
use crate::storage::MemoryStore;
use crossterm::event::KeyCode;
use tempfile::tempdir;

const PNG: &str = "data:image/png;base64,iVBORw==";

fn signed_in_app(user: &str) -> App {
    let mut app = App::with_storage(Box::new(MemoryStore::default()), false);
    app.input_buffer = user.to_string();
    app.submit_sign_in();
    app
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_input(KeyCode::Char(c));
    }
    app.handle_key_input(KeyCode::Enter);
}

fn artwork_result(app: &App, title: &str) -> DecodeResult {
    DecodeResult {
        job: DecodeJob::Artwork(validate_artwork("a.png", title, "").unwrap()),
        user: app.current_user.clone(),
        outcome: Ok(PNG.to_string()),
    }
}

fn gallery_titles(app: &App) -> Vec<String> {
    app.gallery_items
        .iter()
        .filter_map(|item| match item {
            GalleryItem::Artwork { title, .. } => Some(title.clone()),
            GalleryItem::Model { .. } => None,
        })
        .collect()
}

#[test]
fn fresh_app_starts_at_sign_in() {
    let app = App::with_storage(Box::new(MemoryStore::default()), false);
    assert_eq!(app.input_mode, InputMode::SignIn);
    assert!(app.current_user.is_none());
}

#[test]
fn sign_in_opens_empty_gallery() {
    let app = signed_in_app("alice");
    assert_eq!(app.input_mode, InputMode::Gallery);
    assert_eq!(app.current_user.as_deref(), Some("alice"));
    assert!(app.gallery_items.is_empty());
}

#[test]
fn decode_results_append_in_completion_order() {
    let mut app = signed_in_app("alice");
    let second = artwork_result(&app, "finished-first");
    let first = artwork_result(&app, "finished-second");

    app.handle_decode_result(second);
    app.handle_decode_result(first);

    assert_eq!(gallery_titles(&app), vec!["finished-first", "finished-second"]);
}

#[test]
fn decode_result_for_previous_session_is_discarded() {
    let mut app = signed_in_app("alice");
    let stale = artwork_result(&app, "late");

    app.sign_out();
    app.input_buffer = "bob".to_string();
    app.submit_sign_in();
    app.handle_decode_result(stale);

    assert!(gallery_titles(&app).is_empty());
    assert!(app.status_message.contains("discarded"));
}

#[test]
fn failed_decode_changes_nothing() {
    let mut app = signed_in_app("alice");
    let result = DecodeResult {
        job: DecodeJob::ProfilePic,
        user: app.current_user.clone(),
        outcome: Err(PortfolioError::MissingFile),
    };

    app.handle_decode_result(result);

    assert!(app.store.current_artist().unwrap().unwrap().profile.profile_pic.is_none());
}

#[test]
fn upload_prompt_rejects_missing_title_before_decoding() {
    let mut app = signed_in_app("alice");

    app.handle_key_input(KeyCode::Char('u'));
    type_text(&mut app, "a.png");
    type_text(&mut app, "   ");

    assert_eq!(app.input_mode, InputMode::Gallery);
    assert_eq!(app.decodes_in_flight, 0);
    assert_eq!(app.status_message, "Enter artwork title!");
}

#[tokio::test]
async fn upload_prompt_decodes_and_appends() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("sunset.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();
    let mut app = signed_in_app("alice");

    app.handle_key_input(KeyCode::Char('u'));
    type_text(&mut app, path.to_str().unwrap());
    type_text(&mut app, "Sunset");
    type_text(&mut app, "");
    assert_eq!(app.decodes_in_flight, 1);

    let result = app.decode_receiver.recv().await.unwrap();
    app.handle_decode_result(result);

    let alice = app.store.current_artist().unwrap().unwrap();
    assert_eq!(alice.artworks().len(), 1);
    assert_eq!(alice.artworks()[0].img, PNG);
    assert_eq!(alice.artworks()[0].title, "Sunset");
    assert_eq!(alice.artworks()[0].desc, "");
    assert_eq!(app.decodes_in_flight, 0);
}

#[test]
fn delete_flow_removes_selected_item() {
    let mut app = signed_in_app("alice");
    for title in ["a", "b"] {
        let result = artwork_result(&app, title);
        app.handle_decode_result(result);
    }

    app.handle_key_input(KeyCode::Down);
    app.handle_key_input(KeyCode::Char('d'));
    assert_eq!(app.input_mode, InputMode::ConfirmDelete);
    app.handle_key_input(KeyCode::Char('y'));

    assert_eq!(gallery_titles(&app), vec!["a"]);
    assert_eq!(app.gallery_selection_index, 0);
}

#[test]
fn profile_edit_saves_name_and_bio() {
    let mut app = signed_in_app("alice");

    app.handle_key_input(KeyCode::Char('p'));
    assert_eq!(app.input_mode, InputMode::Profile);
    app.handle_key_input(KeyCode::Char('n'));
    type_text(&mut app, "Alice");
    type_text(&mut app, "Paints");

    let view = app.profile_view.as_ref().unwrap();
    assert_eq!(view.name, "Alice");
    assert_eq!(view.bio, "Paints");
    assert_eq!(app.input_mode, InputMode::Profile);
}

#[test]
fn views_report_missing_artist_after_record_vanishes() {
    let mut app = signed_in_app("alice");
    app.store.save_mapping(&Default::default()).unwrap();

    app.handle_key_input(KeyCode::Char('v'));

    assert_eq!(app.input_mode, InputMode::Gallery);
    assert_eq!(app.status_message, "No artist logged in!");
}

#[test]
fn ar_session_restarts_at_zero() {
    let mut app = signed_in_app("alice");
    for title in ["a", "b", "c"] {
        let result = artwork_result(&app, title);
        app.handle_decode_result(result);
    }

    app.handle_key_input(KeyCode::Char('a'));
    app.handle_key_input(KeyCode::Right);
    app.handle_key_input(KeyCode::Right);
    assert_eq!(app.ar_cycler.as_ref().unwrap().cursor(), 2);
    assert_eq!(app.ar_scene.title, "c");

    app.handle_key_input(KeyCode::Esc);
    app.handle_key_input(KeyCode::Char('a'));

    assert_eq!(app.ar_cycler.as_ref().unwrap().cursor(), 0);
    assert_eq!(app.ar_scene.title, "a");
}
