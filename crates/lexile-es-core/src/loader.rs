//! Document loading: plain text and PDF.
//!
//! Plain text is read as UTF-8, falling back to Latin-1 for legacy files.
//! PDFs are extracted page by page first; if that fails or yields nothing,
//! the whole document is extracted in one pass. A PDF that still yields no
//! text is reported as [`LoadError::NoExtractableText`] rather than loading
//! as an empty string.

use std::path::Path;

use crate::error::{LoadError, LoadResult};

/// Load the text of `path`.
///
/// `max_bytes` limits the file size; `None` disables the check.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file is missing, too large, unreadable, or
/// a PDF without extractable text.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_document(path: &Path, max_bytes: Option<usize>) -> LoadResult<String> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(limit) = max_bytes {
        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > limit as u64 {
            return Err(LoadError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    let text = if is_pdf(path) {
        extract_pdf_text(path, &bytes)?
    } else {
        decode_text(bytes)
    };

    tracing::debug!(chars = text.chars().count(), "document loaded");
    Ok(text)
}

/// Load several documents, keeping each failure alongside its name.
///
/// Names are file names (falling back to the full path). Order follows
/// `paths`. Documents load one at a time as the iterator advances.
pub fn load_documents<P: AsRef<Path>>(
    paths: &[P],
    max_bytes: Option<usize>,
) -> impl Iterator<Item = (String, LoadResult<String>)> + '_ {
    paths.iter().map(move |p| {
        let path = p.as_ref();
        (document_name(path), load_document(path, max_bytes))
    })
}

/// Display name for a document path.
pub fn document_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Whether `path` has a `.pdf` extension (any case).
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// UTF-8, or Latin-1 when the bytes are not valid UTF-8.
fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("input is not UTF-8, decoding as Latin-1");
            e.into_bytes().iter().map(|&b| char::from(b)).collect()
        }
    }
}

fn extract_pdf_text(path: &Path, bytes: &[u8]) -> LoadResult<String> {
    let primary = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map(|pages| pages.join("\n"))
        .map_err(|e| e.to_string());

    let primary_err = match primary {
        Ok(text) if !text.trim().is_empty() => return Ok(text),
        Ok(_) => None,
        Err(message) => Some(message),
    };

    tracing::warn!(
        error = primary_err.as_deref().unwrap_or("no text"),
        "page extraction failed, retrying whole document"
    );

    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) if !text.trim().is_empty() => Ok(text),
        Ok(_) => Err(LoadError::NoExtractableText(path.to_path_buf())),
        Err(e) => match primary_err {
            // Page extraction parsed the file; it simply has no text.
            None => Err(LoadError::NoExtractableText(path.to_path_buf())),
            Some(_) => Err(LoadError::Pdf {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        },
    }
}
