// src/media/directory.rs  —  Image library backed by a local directory
use super::{ImageLibrary, Permission};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "heic"];

pub struct DirectoryLibrary {
    dir:   PathBuf,
    allow: bool,
}

impl DirectoryLibrary {
    pub fn new(dir: PathBuf, allow: bool) -> Self { Self { dir, allow } }
}

impl ImageLibrary for DirectoryLibrary {
    fn name(&self) -> &str { "Directory" }

    fn request_permission(&mut self) -> Permission {
        if !self.allow {
            log::warn!("[media] library access disabled by configuration");
            return Permission::Denied;
        }
        match std::fs::read_dir(&self.dir) {
            Ok(_) => Permission::Granted,
            Err(e) => {
                log::warn!("[media] cannot read {}: {e}", self.dir.display());
                Permission::Denied
            }
        }
    }

    fn list_images(&mut self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir)
            .with_context(|| format!("Listing images in {:?}", self.dir))?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && is_image(p))
            .collect();
        paths.sort();
        Ok(paths.iter().map(|p| file_uri(p)).collect())
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn file_uri(path: &Path) -> String {
    let abs = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let s = abs.to_string_lossy().replace('\\', "/");
    if s.starts_with('/') { format!("file://{s}") } else { format!("file:///{s}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_images_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.JPG", "a.png", "notes.txt", "c.webp"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("sub.png")).unwrap();

        let mut lib = DirectoryLibrary::new(dir.path().to_path_buf(), true);
        assert_eq!(lib.request_permission(), Permission::Granted);
        let uris = lib.list_images().unwrap();
        assert_eq!(uris.len(), 3);
        assert!(uris[0].starts_with("file://") && uris[0].ends_with("a.png"));
        assert!(uris[1].ends_with("b.JPG"));
        assert!(uris[2].ends_with("c.webp"));
    }

    #[test]
    fn disabled_library_denies() {
        let dir = tempfile::tempdir().unwrap();
        let mut lib = DirectoryLibrary::new(dir.path().to_path_buf(), false);
        assert_eq!(lib.request_permission(), Permission::Denied);
    }

    #[test]
    fn missing_directory_denies_and_fails_listing() {
        let dir = tempfile::tempdir().unwrap();
        let mut lib = DirectoryLibrary::new(dir.path().join("gone"), true);
        assert_eq!(lib.request_permission(), Permission::Denied);
        assert!(lib.list_images().is_err());
    }
}
