//! Document loading from PDF or plain-text files.

use std::path::Path;

use tracing::{debug, info};

use crate::error::InputError;

/// Best-effort sniff for PDF bytes (magic header).
pub fn bytes_look_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
}

/// Read `path` and return its text.
///
/// PDFs (by magic header or `.pdf` extension) go through `pdf-extract`;
/// anything else must be UTF-8 text.
pub async fn read_document(path: &Path) -> Result<String, InputError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            InputError::MissingDocument {
                path: path.to_path_buf(),
            }
        } else {
            InputError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read document");

    let text = if bytes_look_like_pdf(&bytes) || has_pdf_extension(path) {
        pdf_to_text(path, &bytes)?
    } else {
        String::from_utf8(bytes).map_err(|source| InputError::Encoding {
            path: path.to_path_buf(),
            source,
        })?
    };
    info!(path = %path.display(), chars = text.chars().count(), "loaded document text");
    Ok(text)
}

/// Record key for a document: its file name.
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn pdf_to_text(path: &Path, bytes: &[u8]) -> Result<String, InputError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| InputError::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn sniffs_pdf_header() {
        assert!(bytes_look_like_pdf(b"%PDF-1.7\n..."));
        assert!(!bytes_look_like_pdf(b"plain text"));
    }

    #[test]
    fn pdf_extension_is_case_insensitive() {
        assert!(has_pdf_extension(Path::new("book.PDF")));
        assert!(!has_pdf_extension(Path::new("notes.txt")));
        assert!(!has_pdf_extension(Path::new("pdf")));
    }

    #[test]
    fn document_name_is_file_name() {
        assert_eq!(document_name(Path::new("/tmp/docs/Frankenstein.pdf")), "Frankenstein.pdf");
        assert_eq!(document_name(&PathBuf::from("notes.txt")), "notes.txt");
    }

    #[tokio::test]
    async fn reads_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "Hello there. General Kenobi.").unwrap();
        let text = read_document(&path).await.unwrap();
        assert_eq!(text, "Hello there. General Kenobi.");
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("absent.pdf")).await.unwrap_err();
        assert!(matches!(err, InputError::MissingDocument { .. }));
    }

    #[tokio::test]
    async fn invalid_utf8_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();
        let err = read_document(&path).await.unwrap_err();
        assert!(matches!(err, InputError::Encoding { .. }));
    }
}
