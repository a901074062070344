use crate::utils::*;
use scramble_core as game;

impl StorageKey for game::Snapshot {
    const KEY: &'static str = game::Snapshot::KEY;
}

/// Saves the running game in the browser's local storage.
///
/// When the browser refuses local storage the game still runs, it just forgets progress on reload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct LocalSnapshotStore {
    available: bool,
}

impl LocalSnapshotStore {
    pub(crate) fn open() -> Self {
        Self {
            available: local_storage_available(),
        }
    }

    /// Store that never touches the browser, as if local storage were blocked.
    pub(crate) const fn unavailable() -> Self {
        Self { available: false }
    }

    pub(crate) const fn is_available(&self) -> bool {
        self.available
    }
}

impl game::SnapshotStore for LocalSnapshotStore {
    fn load(&self) -> Option<game::Snapshot> {
        if !self.available {
            return None;
        }
        game::Snapshot::local_load()
    }

    fn save(&mut self, snapshot: &game::Snapshot) -> game::Result<()> {
        if !self.available {
            return Err(game::GameError::StorageUnavailable);
        }
        snapshot.local_save().map_err(|err| {
            log::error!("Could not save game to local storage: {:?}", err);
            game::GameError::StorageUnavailable
        })
    }

    fn clear(&mut self) {
        if self.available {
            game::Snapshot::local_delete();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::SnapshotStore;

    #[test]
    fn storage_key_matches_saved_game_slot() {
        assert_eq!(<game::Snapshot as StorageKey>::KEY, "scrambleGame");
    }

    #[test]
    fn blocked_storage_is_not_fatal() {
        let mut store = LocalSnapshotStore::unavailable();
        assert!(!store.is_available());

        assert_eq!(store.load(), None);
        store.clear();

        let snapshot = game::Snapshot::from_json(
            r#"{"words":["network"],"points":1,"strikes":0,"passes":3,"currentWord":"software"}"#,
        )
        .unwrap();
        assert_eq!(store.save(&snapshot), Err(game::GameError::StorageUnavailable));
    }

    #[test]
    fn game_runs_without_storage() {
        let mut session =
            game::Session::open(game::GameConfig::default(), LocalSnapshotStore::unavailable(), 7);
        let answer = session.engine().current_word().to_string();

        assert!(session.submit_guess(&answer));
        assert_eq!(session.engine().points(), 1);
        assert!(session.pass());
        assert_eq!(session.engine().passes(), 2);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use game::SnapshotStore;
    use gloo::storage::{LocalStorage, Storage};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample() -> game::Snapshot {
        game::Snapshot {
            words: ["database", "network"].into_iter().collect(),
            points: 2,
            strikes: 1,
            passes: 2,
            current_word: "software".into(),
        }
    }

    #[wasm_bindgen_test]
    fn local_store_round_trip() {
        let mut store = LocalSnapshotStore::open();
        assert!(store.is_available());
        store.clear();
        assert_eq!(store.load(), None);

        store.save(&sample()).unwrap();
        assert_eq!(store.load(), Some(sample()));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[wasm_bindgen_test]
    fn corrupt_slot_reads_as_empty() {
        LocalStorage::raw()
            .set_item(game::Snapshot::KEY, "{\"words\":")
            .unwrap();

        let mut store = LocalSnapshotStore::open();
        assert_eq!(store.load(), None);

        store.clear();
    }
}
