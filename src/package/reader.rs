/// Scoped, read-only handle over an OPC package.
///
/// Only the ZIP central directory is read. Parts are never decompressed and
/// no XML is parsed; the handle exists to prove the file is a package and to
/// hold it open for the lifetime of the command.
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use zip::ZipArchive;

use super::errors::PackageError;

/// Part name that every OPC package must contain.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// An opened package. The underlying file is closed when this is dropped.
pub struct Package {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl Package {
    /// Open `path` read-only as a package.
    ///
    /// # Errors
    ///
    /// Returns `PackageError` if the file is missing or unreadable, is not a
    /// ZIP archive, or has no `[Content_Types].xml` part.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PackageError> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => PackageError::NotFound {
                path: path.to_owned(),
            },
            _ => PackageError::Io {
                path: path.to_owned(),
                source,
            },
        })?;

        // On failure `ZipArchive::new` drops the file it was given.
        let archive = ZipArchive::new(file).map_err(|source| PackageError::Archive {
            path: path.to_owned(),
            source,
        })?;

        let package = Self {
            path: path.to_owned(),
            archive,
        };

        if !package.has_part(CONTENT_TYPES_PART) {
            return Err(PackageError::NotAPackage {
                path: path.to_owned(),
                part: CONTENT_TYPES_PART,
            });
        }

        debug!(
            "opened package {} ({} parts)",
            package.path.display(),
            package.part_count()
        );
        Ok(package)
    }

    /// Path the package was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries in the ZIP central directory.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.archive.len()
    }

    /// Whether an entry with exactly this name exists.
    #[must_use]
    pub fn has_part(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }
}

impl Drop for Package {
    fn drop(&mut self) {
        debug!("closed package {}", self.path.display());
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    use super::*;

    fn write_zip(dir: &TempDir, name: &str, parts: &[(&str, &str)]) -> PathBuf {
        let path = dir.path().join(name);
        let file = File::create(&path).unwrap();
        let mut zip = ZipWriter::new(file);
        let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for (part, body) in parts {
            zip.start_file(*part, opts).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        path
    }

    fn minimal_docx(dir: &TempDir) -> PathBuf {
        write_zip(
            dir,
            "valid.docx",
            &[
                (CONTENT_TYPES_PART, "<Types/>"),
                ("_rels/.rels", "<Relationships/>"),
                ("word/document.xml", "<w:document/>"),
            ],
        )
    }

    #[test]
    fn test_open_valid_package() {
        let dir = TempDir::new().unwrap();
        let path = minimal_docx(&dir);
        let pkg = Package::open(&path).unwrap();
        assert_eq!(pkg.path(), path.as_path());
        assert_eq!(pkg.part_count(), 3);
        assert!(pkg.has_part("word/document.xml"));
        assert!(!pkg.has_part("word/styles.xml"));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Package::open(dir.path().join("missing.docx")).err().unwrap();
        assert!(matches!(err, PackageError::NotFound { .. }));
        assert_eq!(err.code(), "not_found");
        assert!(err.to_string().contains("missing.docx"));
    }

    #[test]
    fn test_open_plain_text_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.docx");
        std::fs::write(&path, "just some text, not a zip").unwrap();
        let err = Package::open(&path).err().unwrap();
        assert!(matches!(err, PackageError::Archive { .. }));
        assert_eq!(err.code(), "invalid_archive");
    }

    #[test]
    fn test_open_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.docx");
        std::fs::write(&path, b"").unwrap();
        assert!(matches!(
            Package::open(&path),
            Err(PackageError::Archive { .. })
        ));
    }

    #[test]
    fn test_open_zip_without_content_types() {
        let dir = TempDir::new().unwrap();
        let path = write_zip(&dir, "plain.zip", &[("readme.txt", "hello")]);
        let err = Package::open(&path).err().unwrap();
        assert!(matches!(
            err,
            PackageError::NotAPackage {
                part: CONTENT_TYPES_PART,
                ..
            }
        ));
        assert!(err.to_string().contains("[Content_Types].xml"));
    }

    #[test]
    fn test_part_name_match_is_exact() {
        let dir = TempDir::new().unwrap();
        let path = write_zip(&dir, "nested.zip", &[("docs/[Content_Types].xml", "<Types/>")]);
        assert!(matches!(
            Package::open(&path),
            Err(PackageError::NotAPackage { .. })
        ));
    }

    #[test]
    fn test_reopen_after_drop() {
        let dir = TempDir::new().unwrap();
        let path = minimal_docx(&dir);
        for _ in 0..3 {
            let pkg = Package::open(&path).unwrap();
            drop(pkg);
        }
        std::fs::remove_file(&path).unwrap();
        assert!(!path.exists());
    }
}
