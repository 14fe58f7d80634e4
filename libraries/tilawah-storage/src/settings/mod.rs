//! Typed settings on top of a key-value store
//!
//! Every persisted value is a JSON document under a fixed key.
//!
//! # Example
//!
//! ```rust
//! use tilawah_storage::{settings, MemoryStore};
//! use tilawah_core::AudioSettings;
//!
//! let mut store = MemoryStore::new();
//! let audio = AudioSettings { with_translation: true, ..AudioSettings::default() };
//! settings::save(&mut store, settings::KEY_AUDIO_SETTINGS, &audio).unwrap();
//!
//! let loaded: Option<AudioSettings> = settings::load(&store, settings::KEY_AUDIO_SETTINGS).unwrap();
//! assert_eq!(loaded, Some(audio));
//! ```

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tilawah_core::KeyValueStore;

// Setting key constants
/// Last-read verse per chapter
pub const KEY_LAST_READ: &str = "tilawah.last-read";

/// Bookmarked verses, in creation order
pub const KEY_BOOKMARKS: &str = "tilawah.bookmarks";

/// Translation toggle and languages
pub const KEY_AUDIO_SETTINGS: &str = "tilawah.audio-settings";

/// Reciter and display preferences
pub const KEY_PREFERENCES: &str = "tilawah.preferences";

/// Read and deserialize a value, `None` if the key was never written
///
/// # Errors
///
/// Returns an error if the store fails or the stored JSON does not match `T`
pub fn load<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

/// Serialize and write a value
pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let bytes = serde_json::to_vec(value)?;
    store.set(key, &bytes)?;
    Ok(())
}
