//! Artist record persistence.
//!
//! The whole [`ArtistMapping`] is stored as one JSON value under
//! [`ARTISTS_KEY`]; the signed-in username is a plain string under
//! [`CURRENT_USER_KEY`]. Every mutation rewrites the full mapping.
//! A malformed stored mapping is reported as [`StoreError::Parse`] and is
//! never replaced behind the user's back.

use crate::art::{merge_preserving_order, ArtistMapping, ArtistRecord};
use crate::error::StoreError;
use crate::storage::KeyValueStore;
use serde_json::Value;
use tracing::{debug, info};

pub const ARTISTS_KEY: &str = "artists";
pub const CURRENT_USER_KEY: &str = "currentUser";

#[derive(Debug)]
pub struct RecordStore<S> {
    storage: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load_mapping(&self) -> Result<ArtistMapping, StoreError> {
        match self.storage.get(ARTISTS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(ArtistMapping::new()),
        }
    }

    /// Writes `mapping`, keeping the key order of the value already stored
    /// so that a rewrite only changes what was edited.
    pub fn save_mapping(&mut self, mapping: &ArtistMapping) -> Result<(), StoreError> {
        let mut value = serde_json::to_value(mapping)?;
        let previous = self
            .storage
            .get(ARTISTS_KEY)?
            .and_then(|raw| serde_json::from_str::<Value>(&raw).ok());
        if let Some(previous) = previous {
            value = merge_preserving_order(previous, value);
        }
        let json = serde_json::to_string(&value)?;
        self.storage.set(ARTISTS_KEY, &json)?;
        debug!(artists = mapping.len(), bytes = json.len(), "artist mapping saved");
        Ok(())
    }

    pub fn current_user(&self) -> Result<Option<String>, StoreError> {
        self.storage.get(CURRENT_USER_KEY)
    }

    /// Record of the signed-in artist, if both the session and the record exist.
    pub fn current_artist(&self) -> Result<Option<ArtistRecord>, StoreError> {
        let Some(user) = self.current_user()? else {
            return Ok(None);
        };
        Ok(self.load_mapping()?.remove(&user))
    }

    /// Runs `mutate` against the signed-in artist's record and persists the
    /// whole mapping. Returns `Ok(false)`, without calling `mutate` or writing
    /// anything, when nobody is signed in or the user has no record.
    pub fn with_current_artist<F>(&mut self, mutate: F) -> Result<bool, StoreError>
    where
        F: FnOnce(&mut ArtistRecord),
    {
        let Some(user) = self.current_user()? else {
            return Ok(false);
        };
        let mut mapping = self.load_mapping()?;
        let Some(record) = mapping.get_mut(&user) else {
            return Ok(false);
        };

        mutate(record);
        self.save_mapping(&mapping)?;
        Ok(true)
    }

    /// Starts a session for `username`, registering an empty record for a
    /// first-time artist.
    pub fn sign_in(&mut self, username: &str) -> Result<(), StoreError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(StoreError::InvalidUsername);
        }

        let mut mapping = self.load_mapping()?;
        if !mapping.contains_key(username) {
            mapping.insert(username.to_string(), ArtistRecord::default());
            self.save_mapping(&mapping)?;
            info!(username, "registered new artist");
        }

        self.storage.set(CURRENT_USER_KEY, username)?;
        info!(username, "signed in");
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<(), StoreError> {
        self.storage.remove(CURRENT_USER_KEY)?;
        info!("signed out");
        Ok(())
    }
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::storage::MemoryStore;

    /// A store seeded with the given raw mapping JSON and optional session.
    pub fn seeded_store(mapping_json: &str, user: Option<&str>) -> RecordStore<MemoryStore> {
        let mut storage = MemoryStore::default();
        storage.set(ARTISTS_KEY, mapping_json).unwrap();
        if let Some(user) = user {
            storage.set(CURRENT_USER_KEY, user).unwrap();
        }
        RecordStore::new(storage)
    }

    pub fn raw_mapping(store: &RecordStore<MemoryStore>) -> Option<String> {
        store.storage().get(ARTISTS_KEY).unwrap()
    }
}
