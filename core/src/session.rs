use crate::*;

/// One player's game together with the slot it is saved to.
///
/// Every action that changes the game is followed by a save while the game is active, or by clearing the slot once it
/// is over. Rejected actions leave both the game and the slot untouched.
#[derive(Debug)]
pub struct Session<S> {
    engine: PlayEngine,
    store: S,
}

impl<S: SnapshotStore> Session<S> {
    /// Resumes the saved game if the store holds a usable one, otherwise starts over.
    pub fn open(config: GameConfig, mut store: S, seed: u64) -> Self {
        let engine = match store.load() {
            Some(snapshot) => match PlayEngine::resume(config.clone(), snapshot, seed) {
                Ok(engine) => engine,
                Err(err) => {
                    log::warn!("discarding saved game: {}", err);
                    store.clear();
                    PlayEngine::new(config, seed)
                }
            },
            None => PlayEngine::new(config, seed),
        };

        let mut session = Self { engine, store };
        session.persist();
        session
    }

    pub fn start_new_game(&mut self) {
        self.engine.restart();
        self.store.clear();
        self.persist();
    }

    /// Returns whether the guess was accepted, guesses after the game ended are ignored.
    pub fn submit_guess(&mut self, guess: &str) -> bool {
        match self.engine.submit_guess(guess) {
            Ok(outcome) => {
                log::debug!("guess {:?}: {:?}", guess, outcome);
                self.persist();
                true
            }
            Err(err) => {
                log::debug!("guess ignored: {}", err);
                false
            }
        }
    }

    pub fn pass(&mut self) -> bool {
        match self.engine.pass() {
            Ok(outcome) => {
                log::debug!("pass: {:?}", outcome);
                self.persist();
                true
            }
            Err(err) => {
                log::debug!("pass ignored: {}", err);
                false
            }
        }
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        match self.engine.snapshot() {
            Some(snapshot) => {
                if let Err(err) = self.store.save(&snapshot) {
                    log::warn!("could not save game, continuing without it: {}", err);
                }
            }
            None => self.store.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn cat_dog() -> GameConfig {
        GameConfig::with_catalog(["cat", "dog"]).unwrap()
    }

    fn saved(session: &Session<MemoryStore>) -> Option<Snapshot> {
        session.store().load()
    }

    #[test]
    fn open_without_save_starts_and_saves_new_game() {
        let session = Session::open(GameConfig::default(), MemoryStore::new(), 1);

        assert_eq!(session.engine().points(), 0);
        assert_eq!(saved(&session), session.engine().snapshot());
        assert_eq!(saved(&session).unwrap().words.len(), 9);
    }

    #[test]
    fn open_resumes_saved_game() {
        let store = MemoryStore::with_raw(
            r#"{"words":["database","network"],"points":2,"strikes":1,"passes":2,"currentWord":"software"}"#,
        );

        let session = Session::open(GameConfig::default(), store, 1);

        let engine = session.engine();
        assert_eq!(
            (engine.points(), engine.strikes(), engine.passes()),
            (2, 1, 2)
        );
        assert_eq!(engine.current_word(), "software");
        assert_eq!(
            engine.remaining_words().iter().collect::<alloc::vec::Vec<_>>(),
            ["database", "network"]
        );
    }

    #[test]
    fn open_replaces_corrupt_save() {
        let store = MemoryStore::with_raw(r#"{"words":["cat"],"points":"lots"}"#);

        let session = Session::open(GameConfig::default(), store, 1);

        assert_eq!(session.engine().points(), 0);
        assert_eq!(session.engine().remaining_words().len(), 9);
        assert_eq!(saved(&session), session.engine().snapshot());
    }

    #[test]
    fn open_replaces_save_of_finished_game() {
        let store = MemoryStore::with_raw(
            r#"{"words":["dog"],"points":0,"strikes":3,"passes":3,"currentWord":"cat"}"#,
        );

        let session = Session::open(cat_dog(), store, 1);

        assert_eq!(session.engine().strikes(), 0);
        assert_eq!(session.engine().remaining_words().len(), 1);
        assert_eq!(saved(&session).unwrap().strikes, 0);
    }

    #[test]
    fn every_action_is_saved_while_active() {
        let mut session = Session::open(cat_dog(), MemoryStore::new(), 2);

        assert!(session.submit_guess("wrong"));
        assert_eq!(saved(&session).unwrap().strikes, 1);

        assert!(session.pass());
        let snapshot = saved(&session).unwrap();
        assert_eq!(snapshot.passes, 2);
        assert!(snapshot.words.is_empty());
        assert_eq!(snapshot.current_word, session.engine().current_word());
    }

    #[test]
    fn finished_game_clears_slot() {
        let mut session = Session::open(cat_dog(), MemoryStore::new(), 3);

        for _ in 0..3 {
            assert!(session.submit_guess("wrong"));
        }

        assert!(session.engine().is_finished());
        assert_eq!(session.store().raw(), None);
        assert_eq!(
            session.engine().message(),
            Some(GameMessage::Lost { points: 0 })
        );
    }

    #[test]
    fn rejected_actions_change_nothing() {
        let config = cat_dog().with_initial_passes(0);
        let mut session = Session::open(config, MemoryStore::new(), 3);
        let before = session.store().raw().map(String::from);

        assert!(!session.pass());
        assert_eq!(session.store().raw().map(String::from), before);

        for _ in 0..3 {
            session.submit_guess("wrong");
        }
        assert!(!session.submit_guess("cat"));
        assert!(!session.pass());
        assert_eq!(session.store().raw(), None);
    }

    #[test]
    fn new_game_after_win_saves_fresh_snapshot() {
        let mut session = Session::open(cat_dog(), MemoryStore::new(), 4);
        while !session.engine().is_finished() {
            let word = String::from(session.engine().current_word());
            session.submit_guess(&word);
        }
        assert_eq!(session.engine().points(), 2);
        assert_eq!(session.store().raw(), None);

        session.start_new_game();

        let snapshot = saved(&session).unwrap();
        assert_eq!(snapshot.points, 0);
        assert_eq!(snapshot.passes, 3);
        assert_eq!(snapshot.words.len(), 1);
    }

    #[derive(Debug, Default)]
    struct BrokenStore;

    impl SnapshotStore for BrokenStore {
        fn load(&self) -> Option<Snapshot> {
            None
        }

        fn save(&mut self, _snapshot: &Snapshot) -> Result<()> {
            Err(GameError::StorageUnavailable)
        }

        fn clear(&mut self) {}
    }

    #[test]
    fn failing_store_does_not_stop_game() {
        let mut session = Session::open(cat_dog(), BrokenStore, 5);

        let word = String::from(session.engine().current_word());
        assert!(session.submit_guess(&word));
        assert_eq!(session.engine().points(), 1);
    }
}
