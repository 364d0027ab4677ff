//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Style tags, style sets and the style range store
//! - Font families
//! - Application settings
//! - Message types for the event system

pub mod font;
pub mod messages;
pub mod settings;
pub mod style;

pub use font::FontFamily;
pub use messages::Message;
pub use settings::{AppSettings, ThemeMode};
pub use style::{LineStyleRule, StyleChange, StyleRanges, StyleSet, StyleTag};
