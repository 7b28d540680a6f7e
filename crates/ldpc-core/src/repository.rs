//! Resource cache keyed by location.
//!
//! The in-memory map backs a single invocation; the file-backed variant
//! persists the cache as JSON under the XDG state dir so retrieved
//! resources survive across runs.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::resource::Resource;

/// Source of truth for cached resources. Commands resolve, create, and
/// update entries; they never enumerate the cache.
pub trait ResourceRepository {
    fn resolve_resource(&self, location: &str) -> Option<Resource>;
    fn create_resource(&mut self, location: &str) -> Resource;
    fn update_resource(&mut self, resource: Resource);
}

/// Plain in-memory cache.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    resources: BTreeMap<String, Resource>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceRepository for MemoryRepository {
    fn resolve_resource(&self, location: &str) -> Option<Resource> {
        self.resources.get(location).cloned()
    }

    fn create_resource(&mut self, location: &str) -> Resource {
        let resource = Resource::new(location);
        self.resources
            .insert(location.to_string(), resource.clone());
        resource
    }

    fn update_resource(&mut self, resource: Resource) {
        self.resources.insert(resource.location.clone(), resource);
    }
}

/// Cache persisted to a JSON file.
#[derive(Debug)]
pub struct FileRepository {
    inner: MemoryRepository,
    path: PathBuf,
}

impl FileRepository {
    /// Default cache file: `~/.local/state/ldpc/resources.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("ldpc")?;
        Ok(xdg_dirs.get_state_home().join("ldpc").join("resources.json"))
    }

    /// Load the cache from `path`; a missing file yields an empty cache.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let resources = match std::fs::read(path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("parse resource cache: {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read resource cache: {}", path.display()))
            }
        };
        Ok(Self {
            inner: MemoryRepository { resources },
            path: path.to_path_buf(),
        })
    }

    /// Save the cache back to its file (creates parent dirs if needed).
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.inner.resources)
            .context("serialize resource cache")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write resource cache: {}", self.path.display()))?;
        Ok(())
    }
}

impl ResourceRepository for FileRepository {
    fn resolve_resource(&self, location: &str) -> Option<Resource> {
        self.inner.resolve_resource(location)
    }

    fn create_resource(&mut self, location: &str) -> Resource {
        self.inner.create_resource(location)
    }

    fn update_resource(&mut self, resource: Resource) {
        self.inner.update_resource(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_resolve_miss_then_create() {
        let mut repo = MemoryRepository::new();
        assert!(repo.resolve_resource("http://x/r1").is_none());

        let created = repo.create_resource("http://x/r1");
        assert_eq!(created.location, "http://x/r1");
        assert!(created.entity.is_none());
        assert_eq!(repo.resolve_resource("http://x/r1"), Some(created));
    }

    #[test]
    fn memory_update_replaces_entry() {
        let mut repo = MemoryRepository::new();
        let mut r = repo.create_resource("http://x/r1");
        r.entity = Some("abc".to_string());
        r.entity_tag = Some("v1".to_string());
        repo.update_resource(r.clone());

        assert_eq!(repo.resolve_resource("http://x/r1"), Some(r));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn file_repository_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.json");

        let mut repo = FileRepository::load_or_default(&path).unwrap();
        let mut r = repo.create_resource("http://x/r1");
        r.entity = Some("abc".to_string());
        repo.update_resource(r.clone());
        repo.save().unwrap();

        let reloaded = FileRepository::load_or_default(&path).unwrap();
        assert_eq!(reloaded.resolve_resource("http://x/r1"), Some(r));
    }

    #[test]
    fn file_repository_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let repo = FileRepository::load_or_default(&path).unwrap();
        assert!(repo.inner.is_empty());
    }

    #[test]
    fn file_repository_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("resources.json");
        let repo = FileRepository::load_or_default(&path).unwrap();
        repo.save().unwrap();
        assert!(path.exists());
    }
}
