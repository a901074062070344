use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Fixed local storage key a type is saved under.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalSlot: StorageKey + Serialize + DeserializeOwned + Sized {
    /// Saved value, `None` when missing or unreadable.
    fn local_load() -> Option<Self> {
        match LocalStorage::get(Self::KEY) {
            Ok(value) => Some(value),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                log::warn!("ignoring unreadable {}: {}", Self::KEY, err);
                None
            }
        }
    }

    fn local_save(&self) -> Result<(), StorageError> {
        LocalStorage::set(Self::KEY, self)
    }

    fn local_delete() {
        LocalStorage::delete(Self::KEY);
    }
}

impl<T: StorageKey + Serialize + DeserializeOwned> LocalSlot for T {}

/// Whether `window.localStorage` can be opened. The gloo helpers above throw when it can't.
pub(crate) fn local_storage_available() -> bool {
    match gloo::utils::window().local_storage() {
        Ok(Some(_)) => true,
        Ok(None) => {
            log::warn!("no local storage, progress will not be saved");
            false
        }
        Err(err) => {
            log::warn!("local storage blocked, progress will not be saved: {:?}", err);
            false
        }
    }
}

/// Seed from JavaScript's Math.random, drives the catalog shuffle and every scramble
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}
