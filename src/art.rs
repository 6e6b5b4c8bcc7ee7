use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Every artist keyed by username. Key order on disk is kept by
/// `RecordStore::save_mapping`, not by this map.
pub type ArtistMapping = BTreeMap<String, ArtistRecord>;

/// Fields written by other pages (login, older versions) that this app
/// does not model but must carry through every rewrite.
pub type ExtraFields = Map<String, Value>;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    // data URI of the uploaded picture
    #[serde(rename = "profilePic", default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A 2D piece. Identified only by its position in `ArtistRecord::artworks`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Artwork {
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A 3D model; `data` is whatever the AR surface accepts as a model source.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Model3D {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistRecord {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artworks: Option<Vec<Artwork>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<Model3D>>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ArtistRecord {
    pub fn artworks(&self) -> &[Artwork] {
        self.artworks.as_deref().unwrap_or_default()
    }

    pub fn models(&self) -> &[Model3D] {
        self.models.as_deref().unwrap_or_default()
    }
}

/// Lays `new` over `old` so that keys already present in `old` keep their
/// position. Keys missing from `new` are dropped, new keys are appended and
/// arrays are merged element by element.
pub fn merge_preserving_order(old: Value, new: Value) -> Value {
    match (old, new) {
        (Value::Object(mut old), Value::Object(new)) => {
            old.retain(|key, _| new.contains_key(key));
            for (key, value) in new {
                match old.get_mut(&key) {
                    Some(slot) => {
                        let previous = slot.take();
                        *slot = merge_preserving_order(previous, value);
                    }
                    None => {
                        old.insert(key, value);
                    }
                }
            }
            Value::Object(old)
        }
        (Value::Array(old), Value::Array(new)) => {
            let mut old = old.into_iter();
            Value::Array(
                new.into_iter()
                    .map(|value| match old.next() {
                        Some(previous) => merge_preserving_order(previous, value),
                        None => value,
                    })
                    .collect(),
            )
        }
        (_, new) => new,
    }
}
