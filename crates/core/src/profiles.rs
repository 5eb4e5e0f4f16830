//! Site-profile loading.
//!
//! Built-in profiles ship compiled in (see [`crate::sites`]); hosts can drop
//! JSON profile files into a config directory to add sites or override a
//! built-in without rebuilding. A file that fails to decode is skipped with a
//! warning; one broken profile must not take down the rest of the catalog.

use std::fs;
use std::path::{Path, PathBuf};

use crate::profile::SiteProfile;
use crate::{LegendaError, Result};

/// Loads site profiles from the standard config directory plus an optional
/// custom directory. Custom profiles override standard ones, and both
/// override built-ins of the same name.
#[derive(Debug, Clone, Default)]
pub struct ProfileLoader {
    custom_dir: Option<PathBuf>,
    standard_dir: Option<PathBuf>,
}

impl ProfileLoader {
    /// Loader rooted at the platform config directory
    /// (`<config>/legenda/sites`).
    pub fn new() -> Self {
        Self {
            custom_dir: None,
            standard_dir: dirs::config_dir().map(|dir| dir.join("legenda").join("sites")),
        }
    }

    /// Adds a directory whose profiles take precedence over everything else.
    pub fn with_custom_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.custom_dir = Some(dir.into());
        self
    }

    /// Built-in profiles merged with any profiles found on disk.
    ///
    /// Later sources win by name: standard directory over built-ins, custom
    /// directory over both. Order is preserved: an override stays at its
    /// original position, new sites append in discovery order.
    pub fn load(&self) -> Vec<SiteProfile> {
        let mut profiles = crate::sites::builtin();

        for dir in [&self.standard_dir, &self.custom_dir].into_iter().flatten() {
            for profile in read_profile_dir(dir) {
                match profiles.iter_mut().find(|existing| existing.name == profile.name) {
                    Some(existing) => *existing = profile,
                    None => profiles.push(profile),
                }
            }
        }

        profiles
    }

    /// Loads profiles and returns the one registered under `name`.
    pub fn find(&self, name: &str) -> Result<SiteProfile> {
        self.load()
            .into_iter()
            .find(|profile| profile.name == name)
            .ok_or_else(|| LegendaError::UnknownSite(name.to_string()))
    }
}

/// Decodes a single profile file.
pub fn load_profile_file(path: &Path) -> Result<SiteProfile> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| LegendaError::InvalidProfile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn read_profile_dir(dir: &Path) -> Vec<SiteProfile> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut profiles = Vec::new();
    for path in paths {
        match load_profile_file(&path) {
            Ok(profile) => profiles.push(profile),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping site profile"),
        }
    }
    profiles
}
