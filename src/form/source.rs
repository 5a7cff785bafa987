//! Concrete form sources: in-memory maps and on-disk manifests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::FormError;

use super::collector::FormSource;
use super::model::Attachment;

/// A form held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MapFormSource {
    fields: HashMap<String, String>,
    files: HashMap<String, Attachment>,
}

impl MapFormSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_file(mut self, name: impl Into<String>, file: Attachment) -> Self {
        self.files.insert(name.into(), file);
        self
    }
}

impl FormSource for MapFormSource {
    fn field(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn file(&self, name: &str) -> Option<Attachment> {
        self.files.get(name).cloned()
    }
}

/// JSON description of a filled-in form.
///
/// ```json
/// { "fields": { "email": "a@b.kz", "password": "..." },
///   "files":  { "selfie_with_id": "docs/selfie.jpg" } }
/// ```
///
/// Relative file paths resolve against the manifest's directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormManifest {
    #[serde(default)]
    pub fields: HashMap<String, String>,
    #[serde(default)]
    pub files: HashMap<String, PathBuf>,
}

impl FormManifest {
    /// Read a manifest and every file it references.
    pub async fn load(path: &Path) -> Result<MapFormSource, FormError> {
        let raw = tokio::fs::read(path).await.map_err(|source| FormError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let manifest: FormManifest =
            serde_json::from_slice(&raw).map_err(|source| FormError::Manifest {
                path: path.display().to_string(),
                source,
            })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        manifest.into_source(base_dir).await
    }

    async fn into_source(self, base_dir: &Path) -> Result<MapFormSource, FormError> {
        let mut source = MapFormSource {
            fields: self.fields,
            files: HashMap::new(),
        };

        for (name, file_path) in self.files {
            let resolved = if file_path.is_absolute() {
                file_path
            } else {
                base_dir.join(file_path)
            };
            let bytes = tokio::fs::read(&resolved)
                .await
                .map_err(|source| FormError::Read {
                    path: resolved.display().to_string(),
                    source,
                })?;
            let file_name = resolved
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("file")
                .to_string();
            tracing::debug!(field = %name, file = %file_name, bytes = bytes.len(), "Loaded attachment");
            source.files.insert(name, Attachment::new(file_name, bytes));
        }

        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manifest_loads_fields_and_relative_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/front.png"), b"PNGDATA").unwrap();
        let manifest_path = dir.path().join("form.json");
        std::fs::write(
            &manifest_path,
            r#"{
                "fields": {"email": "a@b.kz", "password": "Secret123", "first_name": "Aigerim"},
                "files": {"id_document_front": "docs/front.png"}
            }"#,
        )
        .unwrap();

        let source = FormManifest::load(&manifest_path).await.unwrap();
        assert_eq!(source.field("first_name").as_deref(), Some("Aigerim"));
        assert_eq!(source.field("last_name"), None);

        let front = source.file("id_document_front").unwrap();
        assert_eq!(front.file_name, "front.png");
        assert_eq!(front.content_type, "image/png");
        assert_eq!(front.bytes, b"PNGDATA");
        assert!(source.file("id_document_back").is_none());
    }

    #[tokio::test]
    async fn missing_attachment_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("form.json");
        std::fs::write(&manifest_path, r#"{"files": {"selfie_with_id": "nope.jpg"}}"#).unwrap();

        let err = FormManifest::load(&manifest_path).await.unwrap_err();
        assert!(matches!(err, FormError::Read { ref path, .. } if path.ends_with("nope.jpg")));
    }

    #[tokio::test]
    async fn malformed_manifest_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("form.json");
        std::fs::write(&manifest_path, "{ not json").unwrap();

        let err = FormManifest::load(&manifest_path).await.unwrap_err();
        assert!(matches!(err, FormError::Manifest { .. }));
    }
}
