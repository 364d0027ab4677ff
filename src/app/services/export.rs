//! Word (.docx) export.
//!
//! The buffer is projected into one `ParagraphRecord` per line, then handed
//! to a `DocumentSink` which persists it. `DocxSink` is the real sink,
//! backed by `docx-rs`.

use std::fs::File;
use std::path::{Path, PathBuf};

use docx_rs::{Docx, Paragraph, Run, RunFonts};
use log::{debug, info};

use super::text_ops::with_default_extension;
use crate::app::domain::style::{LineStyleRule, StyleRanges};
use crate::app::error::ExportError;

/// Every exported run is set in this size.
pub const EXPORT_FONT_SIZE_PT: u32 = 12;

pub const DOCX_EXTENSION: &str = "docx";

/// One exported line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphRecord {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub font_name: String,
    pub size_pt: u32,
}

/// Document-writing collaborator: accepts paragraphs in order, then persists.
pub trait DocumentSink {
    fn add_paragraph(&mut self, paragraph: &ParagraphRecord) -> Result<(), ExportError>;

    fn save(&mut self, path: &Path) -> Result<(), ExportError>;
}

#[derive(Default)]
pub struct DocxSink {
    paragraphs: Vec<Paragraph>,
}

impl DocxSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentSink for DocxSink {
    fn add_paragraph(&mut self, record: &ParagraphRecord) -> Result<(), ExportError> {
        let fonts = RunFonts::new()
            .ascii(&record.font_name)
            .hi_ansi(&record.font_name)
            .east_asia(&record.font_name)
            .cs(&record.font_name);

        // docx sizes are in half-points
        let mut run = Run::new()
            .add_text(&record.text)
            .fonts(fonts)
            .size(record.size_pt as usize * 2);
        if record.bold {
            run = run.bold();
        }
        if record.italic {
            run = run.italic();
        }
        if record.underline {
            run = run.underline("single");
        }

        self.paragraphs.push(Paragraph::new().add_run(run));
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), ExportError> {
        let docx = self
            .paragraphs
            .drain(..)
            .fold(Docx::new(), |docx, paragraph| docx.add_paragraph(paragraph));

        let file = File::create(path)?;
        docx.build()
            .pack(file)
            .map_err(|e| ExportError::Docx(e.to_string()))
    }
}

/// Byte offset and content of each line. A trailing newline does not open
/// an extra line and `\r\n` endings are accepted.
pub fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n').scan(0, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Some((start, line))
    })
}

/// Project the buffer into paragraph records, one per line, in line order.
pub fn project_paragraphs(
    text: &str,
    styles: &StyleRanges,
    font_name: &str,
    rule: LineStyleRule,
) -> Vec<ParagraphRecord> {
    lines_with_offsets(text)
        .map(|(start, line)| {
            let style = rule.resolve(styles, start..start + line.len());
            ParagraphRecord {
                text: line.to_string(),
                bold: style.bold(),
                italic: style.italic(),
                underline: style.underline(),
                font_name: font_name.to_string(),
                size_pt: EXPORT_FONT_SIZE_PT,
            }
        })
        .collect()
}

/// A destination base name must contain something other than whitespace.
pub fn validate_base_name(name: &str) -> Result<&str, ExportError> {
    let name = name.trim();
    if name.is_empty() {
        Err(ExportError::MissingName)
    } else {
        Ok(name)
    }
}

pub struct ExportRequest<'a> {
    pub base_name: &'a str,
    pub text: &'a str,
    pub styles: &'a StyleRanges,
    pub font_name: &'a str,
    pub rule: LineStyleRule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved { path: PathBuf, paragraphs: usize },
    Cancelled,
}

/// Run an export against `sink`.
///
/// `choose_path` receives the suggested file name (`<base>.docx`) and
/// returns the destination, or `None` when the user cancels. It is not
/// called when the base name is missing.
pub fn export_with<S, F>(
    request: &ExportRequest<'_>,
    choose_path: F,
    mut sink: S,
) -> Result<ExportOutcome, ExportError>
where
    S: DocumentSink,
    F: FnOnce(&str) -> Option<PathBuf>,
{
    let base_name = validate_base_name(request.base_name)?;
    let suggested = format!("{}.{}", base_name, DOCX_EXTENSION);

    let Some(path) = choose_path(&suggested) else {
        debug!("Export cancelled at path selection");
        return Ok(ExportOutcome::Cancelled);
    };
    let path = with_default_extension(path, DOCX_EXTENSION);

    let paragraphs = project_paragraphs(request.text, request.styles, request.font_name, request.rule);
    for paragraph in &paragraphs {
        sink.add_paragraph(paragraph)?;
    }
    sink.save(&path)?;

    info!("Exported {} paragraphs to {}", paragraphs.len(), path.display());
    Ok(ExportOutcome::Saved {
        path,
        paragraphs: paragraphs.len(),
    })
}

pub fn export_docx<F>(request: &ExportRequest<'_>, choose_path: F) -> Result<ExportOutcome, ExportError>
where
    F: FnOnce(&str) -> Option<PathBuf>,
{
    export_with(request, choose_path, DocxSink::new())
}
