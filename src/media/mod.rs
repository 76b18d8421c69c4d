// src/media/mod.rs  —  ImageLibrary trait + library factory
pub mod directory;

use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission { Granted, Denied }

/// How a gallery round trip ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Cancelled,
    Selected(String),
}

/// Platform image-library interface
pub trait ImageLibrary {
    /// Ask for read access; may be asked again after a denial
    fn request_permission(&mut self) -> Permission;
    /// Selectable image references (URIs), in display order
    fn list_images(&mut self) -> Result<Vec<String>>;
    /// Human-readable library name
    fn name(&self) -> &str;
}

/// Factory — a directory-backed library; `allow = false` denies every request
pub fn create_library(dir: PathBuf, allow: bool) -> Box<dyn ImageLibrary> {
    log::info!("[media] image library: {} (access {})", dir.display(), if allow { "enabled" } else { "disabled" });
    Box::new(directory::DirectoryLibrary::new(dir, allow))
}
