//! Turn-based Fanorona sessions persisted in a one-line save file.
//!
//! Each invocation loads the session, applies at most one move through an
//! [`Engine`], and writes the session back.

mod board;
pub mod codec;
pub mod command;
mod common;
mod config;
mod direction;
mod engine;
mod fanorona;
mod logging;
mod session;
mod store;
pub mod ui;

pub use board::*;
pub use codec::{decode, encode, SaveError};
pub use command::{
    parse_coordinate, parse_direction, parse_same_direction, CommandError, MoveCommand, Token,
};
pub use common::*;
pub use config::*;
pub use direction::Direction;
pub use engine::*;
pub use fanorona::Fanorona;
pub use logging::init_logging;
pub use session::*;
pub use store::SaveFile;
