use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Words left to play, head first. Serialized as a plain array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordPool {
    words: VecDeque<String>,
}

/// Result of taking the next word from a pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Next { word: String, remaining: WordPool },
    Exhausted,
}

impl WordPool {
    /// New pool holding the whole catalog in uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(catalog: &[String], rng: &mut R) -> Result<Self> {
        if catalog.is_empty() {
            return Err(GameError::EmptyCatalog);
        }

        let mut words = catalog.to_vec();
        permute(&mut words, rng);
        Ok(Self::from(words))
    }

    pub fn dispatch_next(mut self) -> Dispatch {
        match self.words.pop_front() {
            Some(word) => Dispatch::Next {
                word,
                remaining: self,
            },
            None => Dispatch::Exhausted,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for WordPool {
    fn from(words: Vec<String>) -> Self {
        Self {
            words: words.into(),
        }
    }
}

impl<'a> FromIterator<&'a str> for WordPool {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(String::from).collect(),
        }
    }
}

impl FromIterator<String> for WordPool {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
