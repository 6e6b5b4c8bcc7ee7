use crate::error::PortfolioError;
use crate::records::RecordStore;
use crate::storage::KeyValueStore;

pub const UNNAMED_ARTIST: &str = "Unnamed Artist";
pub const NO_BIOGRAPHY: &str = "No biography available.";
pub const ARTIST_PIC_PLACEHOLDER: &str = "https://via.placeholder.com/200x200?text=Artist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioEntry {
    Image { src: String },
    Text { text: String },
}

/// Read-only public page of the signed-in artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioPage {
    pub display_name: String,
    pub bio: String,
    pub picture: String,
    pub gallery: Vec<PortfolioEntry>,
}

pub fn load_portfolio<S: KeyValueStore>(
    store: &RecordStore<S>,
) -> Result<PortfolioPage, PortfolioError> {
    let artist = store.current_artist()?.ok_or(PortfolioError::NoArtist)?;

    let images = artist.artworks().iter().map(|art| PortfolioEntry::Image {
        src: art.img.clone(),
    });
    let models = artist.models().iter().map(|model| PortfolioEntry::Text {
        text: format!("3D Model: {}", model.name),
    });
    let gallery = images.chain(models).collect();

    let profile = artist.profile;
    Ok(PortfolioPage {
        display_name: non_empty_or(profile.name, UNNAMED_ARTIST),
        bio: non_empty_or(profile.bio, NO_BIOGRAPHY),
        picture: profile
            .profile_pic
            .filter(|pic| !pic.is_empty())
            .unwrap_or_else(|| ARTIST_PIC_PLACEHOLDER.to_string()),
        gallery,
    })
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
