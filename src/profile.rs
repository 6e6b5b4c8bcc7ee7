use crate::error::PortfolioError;
use crate::records::RecordStore;
use crate::storage::KeyValueStore;
use tracing::info;

pub const PROFILE_PIC_PLACEHOLDER: &str = "https://via.placeholder.com/200x200?text=Profile+Pic";

/// Editable profile fields of the signed-in artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub bio: String,
    pub picture: String,
    pub has_picture: bool,
}

pub fn load_profile<S: KeyValueStore>(
    store: &RecordStore<S>,
) -> Result<ProfileView, PortfolioError> {
    let artist = store.current_artist()?.ok_or(PortfolioError::NoArtist)?;
    let profile = artist.profile;
    // An empty stored picture counts as none
    let picture = profile.profile_pic.filter(|pic| !pic.is_empty());

    Ok(ProfileView {
        has_picture: picture.is_some(),
        picture: picture.unwrap_or_else(|| PROFILE_PIC_PLACEHOLDER.to_string()),
        name: profile.name,
        bio: profile.bio,
    })
}

pub fn save_profile<S: KeyValueStore>(
    store: &mut RecordStore<S>,
    name: &str,
    bio: &str,
) -> Result<(), PortfolioError> {
    let saved = store.with_current_artist(|artist| {
        artist.profile.name = name.to_string();
        artist.profile.bio = bio.to_string();
    })?;
    if !saved {
        return Err(PortfolioError::NoArtist);
    }
    info!("profile saved");
    Ok(())
}

/// Stores an already decoded picture. Decoding happens before this call.
pub fn store_profile_pic<S: KeyValueStore>(
    store: &mut RecordStore<S>,
    data_url: String,
) -> Result<(), PortfolioError> {
    let bytes = data_url.len();
    let saved = store.with_current_artist(|artist| {
        artist.profile.profile_pic = Some(data_url);
    })?;
    if !saved {
        return Err(PortfolioError::NoArtist);
    }
    info!(bytes, "profile picture updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::test_helpers::{raw_mapping, seeded_store};

    const ALICE: &str = r#"{"alice":{"profile":{"name":"A","bio":"b"}}}"#;

    #[test]
    fn load_profile_without_session_reports_no_artist() {
        let store = seeded_store(ALICE, None);
        assert!(matches!(load_profile(&store), Err(PortfolioError::NoArtist)));
    }

    #[test]
    fn load_profile_substitutes_placeholder() {
        let store = seeded_store(ALICE, Some("alice"));
        let view = load_profile(&store).unwrap();

        assert_eq!(view.name, "A");
        assert_eq!(view.bio, "b");
        assert_eq!(view.picture, PROFILE_PIC_PLACEHOLDER);
        assert!(!view.has_picture);
    }

    #[test]
    fn load_profile_treats_empty_picture_as_missing() {
        let store = seeded_store(
            r#"{"alice":{"profile":{"name":"A","bio":"b","profilePic":""}}}"#,
            Some("alice"),
        );
        let view = load_profile(&store).unwrap();

        assert_eq!(view.picture, PROFILE_PIC_PLACEHOLDER);
        assert!(!view.has_picture);
    }

    #[test]
    fn save_profile_writes_name_and_bio() {
        let mut store = seeded_store(ALICE, Some("alice"));
        save_profile(&mut store, "Alice", "Paints skies").unwrap();

        let view = load_profile(&store).unwrap();
        assert_eq!(view.name, "Alice");
        assert_eq!(view.bio, "Paints skies");
    }

    #[test]
    fn save_profile_unknown_user_is_surfaced_and_writes_nothing() {
        let mut store = seeded_store(ALICE, Some("bob"));
        let before = raw_mapping(&store);

        let err = save_profile(&mut store, "x", "y").unwrap_err();

        assert!(matches!(err, PortfolioError::NoArtist));
        assert_eq!(raw_mapping(&store), before);
    }

    #[test]
    fn store_profile_pic_replaces_placeholder() {
        let mut store = seeded_store(ALICE, Some("alice"));
        store_profile_pic(&mut store, "data:image/png;base64,AA==".to_string()).unwrap();

        let view = load_profile(&store).unwrap();
        assert_eq!(view.picture, "data:image/png;base64,AA==");
        assert!(view.has_picture);
    }
}
