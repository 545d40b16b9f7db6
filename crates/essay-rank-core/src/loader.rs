//! Essay text loading.
//!
//! One read-only file-system access per call. The size preflight checks
//! metadata before reading so an oversized file is rejected without
//! pulling it into memory.

use camino::Utf8Path;

use crate::error::{LoadError, LoadResult};

/// Read the full content of an essay file as UTF-8 text.
///
/// `max_bytes` bounds the input size; pass `None` for no limit.
#[tracing::instrument(skip_all, fields(path = %path))]
pub fn load_essay(path: &Utf8Path, max_bytes: Option<u64>) -> LoadResult<String> {
    let metadata = std::fs::metadata(path.as_std_path()).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if let Some(limit) = max_bytes {
        let size = metadata.len();
        if size > limit {
            return Err(LoadError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }

    let bytes = std::fs::read(path.as_std_path()).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(bytes = bytes.len(), "essay read");

    String::from_utf8(bytes).map_err(|_| LoadError::Decode {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::io::Write;

    fn temp_essay(content: &[u8]) -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("essay.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_text_file() {
        let (_dir, path) = temp_essay(b"the cat sat on the mat");
        let text = load_essay(&path, None).unwrap();
        assert_eq!(text, "the cat sat on the mat");
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = Utf8PathBuf::from("/definitely/not/here.txt");
        let err = load_essay(&path, None).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn binary_content_is_decode_error() {
        let (_dir, path) = temp_essay(&[0xff, 0xfe, 0x00, 0x80]);
        let err = load_essay(&path, None).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let (_dir, path) = temp_essay(b"far too many words for this limit");
        let err = load_essay(&path, Some(8)).unwrap_err();
        assert!(matches!(err, LoadError::TooLarge { limit: 8, .. }));
    }

    #[test]
    fn limit_equal_to_size_passes() {
        let content = b"exactly this";
        let (_dir, path) = temp_essay(content);
        assert!(load_essay(&path, Some(content.len() as u64)).is_ok());
    }

    #[test]
    fn empty_file_reads_as_empty_string() {
        let (_dir, path) = temp_essay(b"");
        assert_eq!(load_essay(&path, None).unwrap(), "");
    }
}
