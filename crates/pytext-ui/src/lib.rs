//! # PyText UI
//!
//! The window, menu bar, text area and status line, built with iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`], which owns the editor shell
//! - **Message**: user input and picker results
//! - **Update**: `App::update`, one message at a time on the UI thread
//! - **View**: `App::view`, derived entirely from the model

pub mod app;
pub mod theme;

pub use app::{run, App, Flags};
