// Shrthnd Profile Store
// Named shorthand dictionaries with TOML persistence

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the reserved profile that always exists.
pub const DEFAULT_PROFILE: &str = "Default";

/// Errors from profile management and persistence
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile already exists: {0}")]
    DuplicateProfile(String),

    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile store parse error: {0}")]
    Parse(String),
}

/// A named set of shorthand -> expansion pairs.
///
/// Keys are stored lowercased and matched case-insensitively. Insertion
/// order is preserved so persisted files stay stable across round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    entries: IndexMap<String, String>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a shorthand. The key is lowercased; the expansion
    /// is kept verbatim, casing included.
    pub fn insert(&mut self, shorthand: &str, expansion: impl Into<String>) {
        self.entries.insert(shorthand.to_lowercase(), expansion.into());
    }

    /// Case-insensitive lookup of a typed word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    /// Remove a shorthand. Returns the expansion if it existed.
    pub fn remove(&mut self, shorthand: &str) -> Option<String> {
        self.entries.shift_remove(&shorthand.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Serialized shape of the store file.
#[derive(Debug, Serialize, Deserialize)]
struct StoreToml {
    active: String,
    profiles: IndexMap<String, IndexMap<String, String>>,
}

/// All profiles plus the active-profile selection.
///
/// Every mutating operation persists the store when a path is configured;
/// persistence failures are logged and absorbed so a disk problem never
/// takes the typing loop down.
#[derive(Debug)]
pub struct ProfileStore {
    profiles: IndexMap<String, Profile>,
    active: String,
    path: Option<PathBuf>,
}

impl ProfileStore {
    /// Built-in seed: a Default profile with a handful of entries.
    pub fn with_defaults() -> Self {
        let mut default = Profile::new();
        default.insert("btw", "by the way");
        default.insert("idk", "I don't know");
        default.insert("omw", "on my way");

        let mut profiles = IndexMap::new();
        profiles.insert(DEFAULT_PROFILE.to_string(), default);

        Self {
            profiles,
            active: DEFAULT_PROFILE.to_string(),
            path: None,
        }
    }

    /// Attach a persistence path. Subsequent mutations write through.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// Default store location (~/.config/shrthnd/profiles.toml).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("shrthnd").join("profiles.toml"))
    }

    /// Load the store from `path`, seeding built-in defaults when the file
    /// is missing or corrupt. The seeded defaults are persisted so the next
    /// start finds a valid file.
    pub fn load_or_default(path: PathBuf) -> Self {
        let mut store = match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(store) => store,
                Err(err) => {
                    log::warn!(
                        "profile store at {} is corrupt ({err}), seeding defaults",
                        path.display()
                    );
                    Self::with_defaults()
                }
            },
            Err(err) => {
                log::info!(
                    "no profile store at {} ({err}), seeding defaults",
                    path.display()
                );
                Self::with_defaults()
            }
        };
        store.path = Some(path);
        store.persist();
        store
    }

    /// Parse a store from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ProfileError> {
        let raw: StoreToml =
            toml::from_str(content).map_err(|e| ProfileError::Parse(e.to_string()))?;

        let mut profiles: IndexMap<String, Profile> = IndexMap::new();
        for (name, entries) in raw.profiles {
            let mut profile = Profile::new();
            for (shorthand, expansion) in entries {
                profile.insert(&shorthand, expansion);
            }
            profiles.insert(name, profile);
        }

        let mut store = Self {
            profiles,
            active: raw.active,
            path: None,
        };
        store.ensure_default();
        // Normalize the persisted active name to the stored spelling so
        // exact-key lookups in active_profile() cannot miss.
        store.active = store
            .resolve_name(&store.active.clone())
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
        Ok(store)
    }

    /// Serialize the store to TOML text.
    pub fn to_toml(&self) -> Result<String, ProfileError> {
        let raw = StoreToml {
            active: self.active.clone(),
            profiles: self
                .profiles
                .iter()
                .map(|(name, profile)| {
                    (
                        name.clone(),
                        profile
                            .iter()
                            .map(|(k, v)| (k.to_string(), v.to_string()))
                            .collect(),
                    )
                })
                .collect(),
        };
        toml::to_string_pretty(&raw).map_err(|e| ProfileError::Parse(e.to_string()))
    }

    /// Write the store to `path`.
    pub fn save(&self, path: &Path) -> Result<(), ProfileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Write-through after a mutation. Failures are logged, never raised:
    /// the store keeps operating in memory.
    fn persist(&self) {
        let Some(path) = &self.path else { return };
        if let Err(err) = self.save(path) {
            log::warn!("failed to persist profiles to {}: {err}", path.display());
        }
    }

    /// Resolve a profile name case-insensitively to its stored spelling.
    fn resolve_name(&self, name: &str) -> Option<String> {
        let wanted = name.to_lowercase();
        self.profiles
            .keys()
            .find(|k| k.to_lowercase() == wanted)
            .cloned()
    }

    /// The Default profile is reserved: recreate it (empty) if absent.
    fn ensure_default(&mut self) {
        if self.resolve_name(DEFAULT_PROFILE).is_none() {
            self.profiles
                .insert(DEFAULT_PROFILE.to_string(), Profile::new());
        }
    }

    /// Create an empty profile and make it active.
    pub fn create_profile(&mut self, name: &str) -> Result<(), ProfileError> {
        if let Some(existing) = self.resolve_name(name) {
            return Err(ProfileError::DuplicateProfile(existing));
        }
        self.profiles.insert(name.to_string(), Profile::new());
        self.active = name.to_string();
        self.persist();
        Ok(())
    }

    /// Switch the active profile. An unknown name falls back to Default
    /// with a warning rather than an error: a background typing tool keeps
    /// running degraded instead of dying.
    pub fn switch_profile(&mut self, name: &str) {
        match self.resolve_name(name) {
            Some(resolved) => self.active = resolved,
            None => {
                log::warn!("unknown profile {name:?}, falling back to {DEFAULT_PROFILE}");
                self.ensure_default();
                self.active = DEFAULT_PROFILE.to_string();
            }
        }
        self.persist();
    }

    /// Delete a profile. Deleting the active one reactivates Default;
    /// deleting Default reseeds it empty.
    pub fn delete_profile(&mut self, name: &str) -> Result<(), ProfileError> {
        let resolved = self
            .resolve_name(name)
            .ok_or_else(|| ProfileError::UnknownProfile(name.to_string()))?;
        self.profiles.shift_remove(&resolved);
        self.ensure_default();
        if self.active == resolved {
            self.active = DEFAULT_PROFILE.to_string();
        }
        self.persist();
        Ok(())
    }

    /// Name of the active profile.
    pub fn active_name(&self) -> &str {
        &self.active
    }

    /// The active dictionary. Always resolves: Default is recreated on
    /// deletion, and loads normalize a dangling active name.
    pub fn active_profile(&self) -> &Profile {
        self.profiles
            .get(&self.active)
            .or_else(|| self.profiles.get(DEFAULT_PROFILE))
            .expect("active profile must resolve")
    }

    /// Profile names in insertion order.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Add or replace a shorthand in the active profile.
    pub fn add_shorthand(&mut self, shorthand: &str, expansion: &str) {
        if let Some(profile) = self.profiles.get_mut(&self.active) {
            profile.insert(shorthand, expansion);
        }
        self.persist();
    }

    /// Remove a shorthand from the active profile.
    pub fn remove_shorthand(&mut self, shorthand: &str) -> Option<String> {
        let removed = self
            .profiles
            .get_mut(&self.active)
            .and_then(|profile| profile.remove(shorthand));
        if removed.is_some() {
            self.persist();
        }
        removed
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}
