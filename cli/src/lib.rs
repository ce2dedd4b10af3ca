//! Text front end for the board engine.
//!
//! Reads one command per line, forwards it to the engine and redraws the
//! board after every command.

pub mod input;
pub mod render;
pub mod session;
pub mod viewport;

pub use input::{Button, Command, ParseError};
pub use render::Format;
pub use session::{Flow, Session};
pub use viewport::Viewport;
