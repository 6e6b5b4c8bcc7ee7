use super::test_helpers::{raw_mapping, seeded_store};
use super::*;
use crate::art::{Artwork, Profile};
use crate::storage::{FileStore, MemoryStore};
use tempfile::tempdir;

const ALICE: &str = r#"{"alice":{"profile":{"name":"A","bio":"b"},"artworks":[]}}"#;

// =============================================================================
// load_mapping / save_mapping
// =============================================================================

#[test]
fn load_mapping_absent_is_empty() {
    let store = RecordStore::new(MemoryStore::default());
    assert!(store.load_mapping().unwrap().is_empty());
}

#[test]
fn load_mapping_malformed_propagates_parse_error() {
    let store = seeded_store("{not json", Some("alice"));
    assert!(matches!(store.load_mapping(), Err(StoreError::Parse(_))));
}

#[test]
fn load_mapping_reads_optional_collections() {
    let store = seeded_store(r#"{"bob":{"profile":{"name":"B","bio":""}}}"#, None);
    let mapping = store.load_mapping().unwrap();
    let bob = &mapping["bob"];

    assert!(bob.artworks.is_none());
    assert!(bob.models.is_none());
    assert!(bob.artworks().is_empty());
}

#[test]
fn save_of_unmodified_load_is_byte_identical() {
    let mut store = seeded_store(ALICE, Some("alice"));
    let mapping = store.load_mapping().unwrap();
    store.save_mapping(&mapping).unwrap();
    let first = raw_mapping(&store).unwrap();

    let reloaded = store.load_mapping().unwrap();
    store.save_mapping(&reloaded).unwrap();

    assert_eq!(raw_mapping(&store).unwrap(), first);
    assert_eq!(first, ALICE);
}

#[test]
fn save_keeps_stored_key_order() {
    let stored = r#"{"bob":{"profile":{"bio":"x","name":"B"}},"alice":{"artworks":[],"profile":{"bio":"b","name":"A"}}}"#;
    let mut store = seeded_store(stored, Some("alice"));

    let mapping = store.load_mapping().unwrap();
    store.save_mapping(&mapping).unwrap();

    assert_eq!(raw_mapping(&store).unwrap(), stored);
}

#[test]
fn edit_keeps_unknown_fields_and_order() {
    let stored = r#"{"alice":{"password":"pw","profile":{"name":"A","avatarColor":"red","bio":"b"},"artworks":[{"title":"T","img":"data:x","desc":"","likes":3}]}}"#;
    let mut store = seeded_store(stored, Some("alice"));

    store
        .with_current_artist(|record| record.profile.bio = "new".to_string())
        .unwrap();

    assert_eq!(
        raw_mapping(&store).unwrap(),
        r#"{"alice":{"password":"pw","profile":{"name":"A","avatarColor":"red","bio":"new"},"artworks":[{"title":"T","img":"data:x","desc":"","likes":3}]}}"#
    );
    let alice = store.current_artist().unwrap().unwrap();
    assert_eq!(alice.extra["password"], "pw");
    assert_eq!(alice.profile.extra["avatarColor"], "red");
}

#[test]
fn new_artist_is_appended_after_existing_ones() {
    let mut store = seeded_store(r#"{"zed":{"profile":{"name":"Z","bio":""}}}"#, None);

    store.sign_in("amy").unwrap();

    let raw = raw_mapping(&store).unwrap();
    assert!(raw.starts_with(r#"{"zed":{"profile":{"name":"Z","bio":""}},"amy":"#));
}

#[test]
fn deleting_first_artwork_keeps_the_rest() {
    let stored = r#"{"alice":{"profile":{"name":"A","bio":""},"artworks":[{"img":"data:1","title":"One","desc":"","tag":"a"},{"img":"data:2","title":"Two","desc":"","tag":"b"}]}}"#;
    let mut store = seeded_store(stored, Some("alice"));

    store
        .with_current_artist(|record| {
            record.artworks.get_or_insert_with(Vec::new).remove(0);
        })
        .unwrap();

    assert_eq!(
        raw_mapping(&store).unwrap(),
        r#"{"alice":{"profile":{"name":"A","bio":""},"artworks":[{"img":"data:2","title":"Two","desc":"","tag":"b"}]}}"#
    );
}

#[test]
fn load_tolerates_artwork_and_model_missing_fields() {
    let store = seeded_store(
        r#"{"alice":{"profile":{"name":"A","bio":""},"artworks":[{"img":"data:x"}],"models":[{"data":"data:m"}]}}"#,
        Some("alice"),
    );

    let alice = store.current_artist().unwrap().unwrap();
    assert_eq!(alice.artworks()[0].img, "data:x");
    assert_eq!(alice.artworks()[0].title, "");
    assert_eq!(alice.models()[0].name, "");
    assert_eq!(alice.models()[0].data, "data:m");
}

#[test]
fn profile_pic_uses_camel_case_key() {
    let mut store = RecordStore::new(MemoryStore::default());
    let mut mapping = ArtistMapping::new();
    mapping.insert(
        "alice".to_string(),
        ArtistRecord {
            profile: Profile {
                name: "A".to_string(),
                bio: String::new(),
                profile_pic: Some("data:image/png;base64,AA==".to_string()),
                ..Profile::default()
            },
            ..ArtistRecord::default()
        },
    );

    store.save_mapping(&mapping).unwrap();

    let raw = raw_mapping(&store).unwrap();
    assert!(raw.contains(r#""profilePic":"data:image/png;base64,AA==""#));
}

// =============================================================================
// with_current_artist
// =============================================================================

#[test]
fn with_current_artist_without_session_never_writes() {
    let mut store = seeded_store(ALICE, None);
    let before = raw_mapping(&store);

    let mut called = false;
    let applied = store.with_current_artist(|_| called = true).unwrap();

    assert!(!applied);
    assert!(!called);
    assert_eq!(raw_mapping(&store), before);
}

#[test]
fn with_current_artist_unknown_user_never_writes() {
    let mut store = seeded_store(ALICE, Some("mallory"));
    let before = raw_mapping(&store);

    let applied = store
        .with_current_artist(|record| record.profile.name = "x".to_string())
        .unwrap();

    assert!(!applied);
    assert_eq!(raw_mapping(&store), before);
}

#[test]
fn with_current_artist_persists_mutation() {
    let mut store = seeded_store(ALICE, Some("alice"));

    let applied = store
        .with_current_artist(|record| {
            record.artworks.get_or_insert_with(Vec::new).push(Artwork {
                img: "data:image/png;base64,AA==".to_string(),
                title: "Sunset".to_string(),
                ..Artwork::default()
            });
        })
        .unwrap();

    assert!(applied);
    let alice = store.current_artist().unwrap().unwrap();
    assert_eq!(alice.artworks().len(), 1);
    assert_eq!(alice.artworks()[0].title, "Sunset");
}

#[test]
fn with_current_artist_leaves_other_artists_untouched() {
    let mut store = seeded_store(
        r#"{"alice":{"profile":{"name":"A","bio":""}},"bob":{"profile":{"name":"B","bio":"x"}}}"#,
        Some("alice"),
    );

    store
        .with_current_artist(|record| record.profile.bio = "new".to_string())
        .unwrap();

    let mapping = store.load_mapping().unwrap();
    assert_eq!(mapping["alice"].profile.bio, "new");
    assert_eq!(mapping["bob"].profile.bio, "x");
}

// =============================================================================
// session
// =============================================================================

#[test]
fn sign_in_registers_new_artist_once() {
    let mut store = RecordStore::new(MemoryStore::default());

    store.sign_in("  carol ").unwrap();
    store
        .with_current_artist(|record| record.profile.name = "Carol".to_string())
        .unwrap();
    store.sign_in("carol").unwrap();

    assert_eq!(store.current_user().unwrap().as_deref(), Some("carol"));
    assert_eq!(store.current_artist().unwrap().unwrap().profile.name, "Carol");
}

#[test]
fn sign_in_rejects_blank_username() {
    let mut store = RecordStore::new(MemoryStore::default());
    assert!(matches!(store.sign_in("   "), Err(StoreError::InvalidUsername)));
    assert_eq!(store.current_user().unwrap(), None);
}

#[test]
fn sign_out_clears_session_but_keeps_records() {
    let mut store = seeded_store(ALICE, Some("alice"));

    store.sign_out().unwrap();

    assert_eq!(store.current_user().unwrap(), None);
    assert!(store.current_artist().unwrap().is_none());
    assert!(store.load_mapping().unwrap().contains_key("alice"));
}

#[test]
fn file_backed_store_survives_reopen() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("store.json");

    let mut store = RecordStore::new(FileStore::new(path.clone()));
    store.sign_in("alice").unwrap();
    store
        .with_current_artist(|record| record.profile.name = "A".to_string())
        .unwrap();

    let reopened = RecordStore::new(FileStore::new(path));
    assert_eq!(reopened.current_artist().unwrap().unwrap().profile.name, "A");
}
