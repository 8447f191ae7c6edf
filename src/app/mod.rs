//! Application layer.
//!
//! - `document` - reading and writing plain-text files
//! - `font` - font family, size and bold/italic style
//! - `editor` - the operations behind each menu command
//! - `state` - dispatch of menu messages, dialogs and error reporting
//! - `settings`, `logging`, `error` - startup configuration and diagnostics

pub mod document;
pub mod editor;
pub mod error;
pub mod font;
pub mod logging;
pub mod messages;
pub mod settings;
pub mod state;

