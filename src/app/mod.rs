//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (style ranges, fonts, settings, messages)
//! - `services/` - Operations on them (DOCX export, text operations)
//! - `session.rs` - Editing state shared by the event handlers
//! - `state.rs` - Main application coordinator, owns the FLTK widgets

pub mod buffer_utils;
pub mod domain;
pub mod error;
pub mod services;
pub mod session;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, FontFamily, Message, StyleTag, ThemeMode};
pub use error::{AppError, EditError, ExportError};
pub use session::EditorSession;
