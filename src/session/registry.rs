//! Sessions keyed by an external conversation id.

use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{BotConfig, MatchConfig, DEFAULT_STARTING_DICE};
use crate::error::{ConstructionError, IllegalAction};

use super::command::Command;
use super::game::{GameSession, SessionEvent};

/// Why a registry call failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no game is running, start one first")]
    NoSession,

    #[error(transparent)]
    Setup(#[from] ConstructionError),

    #[error(transparent)]
    Illegal(#[from] IllegalAction),
}

/// Running sessions, one per conversation.
///
/// Every call holds the lock for one human action plus the bot replies.
pub struct SessionRegistry<K> {
    sessions: Mutex<FxHashMap<K, GameSession>>,
    bots: usize,
    starting_dice: usize,
    seed: Option<u64>,
    bot_config: BotConfig,
}

impl<K: Eq + Hash> Default for SessionRegistry<K> {
    fn default() -> Self {
        Self {
            sessions: Mutex::new(FxHashMap::default()),
            bots: 1,
            starting_dice: DEFAULT_STARTING_DICE,
            seed: None,
            bot_config: BotConfig::default(),
        }
    }
}

impl<K: Eq + Hash> SessionRegistry<K> {
    /// Registry whose sessions pit the human against one bot, 5 dice each.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bots and dice per player for new sessions.
    #[must_use]
    pub fn with_table(mut self, bots: usize, starting_dice: usize) -> Self {
        self.bots = bots;
        self.starting_dice = starting_dice;
        self
    }

    /// Seed every new session with the same value.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_bot_config(mut self, config: BotConfig) -> Self {
        self.bot_config = config;
        self
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<K, GameSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a new match for `key`, replacing any running one.
    pub fn start(&self, key: K, name: impl Into<String>) -> Result<(), SessionError> {
        let mut config = MatchConfig::against_bots(name, self.bots, self.starting_dice)
            .with_bot_config(self.bot_config.clone());
        config.seed = self.seed;

        let session = GameSession::new(config)?;
        if self.lock().insert(key, session).is_some() {
            log::debug!("replaced a running session");
        }
        Ok(())
    }

    /// Drop the session for `key`. Returns whether one was running.
    pub fn end(&self, key: &K) -> bool {
        self.lock().remove(key).is_some()
    }

    /// Apply a human command for `key`. The session is removed once its
    /// match is over.
    pub fn play(&self, key: &K, command: Command) -> Result<Vec<SessionEvent>, SessionError> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(key).ok_or(SessionError::NoSession)?;
        let events = session.play(command)?;
        if session.is_over() {
            sessions.remove(key);
        }
        Ok(events)
    }

    /// Inspect the session for `key`.
    pub fn view<R>(&self, key: &K, f: impl FnOnce(&GameSession) -> R) -> Option<R> {
        self.lock().get(key).map(f)
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.lock().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
