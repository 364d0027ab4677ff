//! Services layer - operations on the domain types.
//!
//! - `export` - Line-by-line projection to paragraphs and the DOCX writer
//! - `text_ops` - Case toggling, word extraction and path helpers

pub mod export;
pub mod text_ops;
