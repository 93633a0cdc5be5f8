//! Reading Markdown files from disk

use crate::domain::MarkdownDocument;
use crate::error::DocumentError;
use std::fs;
use std::path::Path;

/// Read the whole file at `path` as UTF-8
///
/// A zero-length file is a valid, empty document. The extension is not
/// checked; the file picker filters on that.
pub fn load_document(path: &Path) -> Result<MarkdownDocument, DocumentError> {
    let bytes = fs::read(path).map_err(|e| DocumentError::from_io(path, e))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| DocumentError::decode(path, e.utf8_error().valid_up_to()))?;
    Ok(MarkdownDocument::new(path, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# Notes\n").unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.text(), "# Notes\n");
        assert_eq!(doc.path(), path.as_path());
    }

    #[test]
    fn test_load_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.md");
        fs::write(&path, "").unwrap();

        let doc = load_document(&path).unwrap();
        assert!(doc.text().is_empty());
    }

    #[test]
    fn test_load_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("missing.md")).unwrap_err();
        assert!(matches!(err, DocumentError::NotFound { .. }));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.md");
        fs::write(&path, b"caf\xe9\n").unwrap();

        let err = load_document(&path).unwrap_err();
        match err {
            DocumentError::Decode { valid_up_to, .. } => assert_eq!(valid_up_to, 3),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_load_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("private.md");
        fs::write(&path, "# Secret\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores file modes
        if fs::File::open(&path).is_ok() {
            return;
        }
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, DocumentError::PermissionDenied { .. }));
        assert!(err.to_string().contains("private.md"));
    }

    #[test]
    fn test_load_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(dir.path()).unwrap_err();
        assert!(matches!(err, DocumentError::Unreadable { .. }));
    }

    #[test]
    fn test_load_does_not_check_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.txt");
        fs::write(&path, "plain").unwrap();

        assert!(load_document(&path).is_ok());
    }
}
