//! Conversational play: one human against bots.
//!
//! - `Command`: the text grammar a human types
//! - `GameSession`: a match plus the bot replies after each human move
//! - `SessionRegistry`: sessions keyed by an external conversation id
//!
//! Transports (a chat bot, the terminal binary) sit on top of this and only
//! render `SessionEvent`s.

mod command;
mod game;
mod registry;

pub use command::{Command, ParseCommandError};
pub use game::{GameSession, SessionEvent};
pub use registry::{SessionError, SessionRegistry};
