use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::repository::{
    RepositoryError, RespondentProfile, ResultId, ResultRepository, StoredResult,
};

/// Flat JSON files: `results/<id>.json` and `profiles/<user>.json` under a
/// data directory.
pub struct JsonFileResultStore {
    root: PathBuf,
    history_limit: usize,
    // Serializes profile read-modify-write cycles.
    profile_lock: Mutex<()>,
}

impl JsonFileResultStore {
    pub fn new(root: impl Into<PathBuf>, history_limit: usize) -> Result<Self, RepositoryError> {
        let root = root.into();
        fs::create_dir_all(root.join("results"))?;
        fs::create_dir_all(root.join("profiles"))?;
        Ok(Self {
            root,
            history_limit: history_limit.max(1),
            profile_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn result_path(&self, id: &ResultId) -> Result<PathBuf, RepositoryError> {
        let key = storage_key(&id.0)?;
        Ok(self.root.join("results").join(format!("{key}.json")))
    }

    fn profile_path(&self, user_id: &str) -> Result<PathBuf, RepositoryError> {
        let key = storage_key(user_id)?;
        Ok(self.root.join("profiles").join(format!("{key}.json")))
    }
}

/// Longest file stem a key may expand to.
const MAX_KEY_LEN: usize = 200;

/// Escape an identifier into a file stem. Lowercase ASCII letters, digits, `-`
/// and `_` pass through; every other byte becomes `~xx`. The mapping is
/// injective and case-insensitive filesystems cannot fold two keys together.
fn storage_key(raw: &str) -> Result<String, RepositoryError> {
    let mut key = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-' || byte == b'_' {
            key.push(char::from(byte));
        } else {
            key.push_str(&format!("~{byte:02x}"));
        }
    }
    if key.is_empty() || key.len() > MAX_KEY_LEN {
        return Err(RepositoryError::InvalidKey(raw.to_string()));
    }
    Ok(key)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, RepositoryError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Write through a sibling temp file so readers never observe a partial document.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), RepositoryError> {
    let bytes = serde_json::to_vec_pretty(value)?;
    let staging = path.with_extension("json.tmp");
    fs::write(&staging, bytes)?;
    fs::rename(&staging, path)?;
    Ok(())
}

/// A profile file only counts when it belongs to `user_id`.
fn read_profile(path: &Path, user_id: &str) -> Result<Option<RespondentProfile>, RepositoryError> {
    Ok(read_json::<RespondentProfile>(path)?.filter(|profile| profile.user_id == user_id))
}

impl ResultRepository for JsonFileResultStore {
    fn save_result(&self, result: StoredResult) -> Result<StoredResult, RepositoryError> {
        let path = self.result_path(&result.id)?;
        write_json(&path, &result)?;
        debug!(result_id = %result.id.0, path = %path.display(), "result written");
        Ok(result)
    }

    fn fetch_result(&self, id: &ResultId) -> Result<Option<StoredResult>, RepositoryError> {
        match self.result_path(id) {
            Ok(path) => read_json(&path),
            Err(RepositoryError::InvalidKey(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn record_profile(&self, result: &StoredResult) -> Result<RespondentProfile, RepositoryError> {
        let user_id = result
            .user_id
            .as_deref()
            .ok_or_else(|| RepositoryError::InvalidKey(String::new()))?;
        let path = self.profile_path(user_id)?;

        let _guard = self
            .profile_lock
            .lock()
            .map_err(|_| RepositoryError::Unavailable("profile lock poisoned".to_string()))?;

        let mut profile =
            read_profile(&path, user_id)?.unwrap_or_else(|| RespondentProfile::new(user_id));
        profile.record(result, self.history_limit);
        write_json(&path, &profile)?;
        Ok(profile)
    }

    fn fetch_profile(&self, user_id: &str) -> Result<Option<RespondentProfile>, RepositoryError> {
        match self.profile_path(user_id) {
            Ok(path) => read_profile(&path, user_id),
            Err(RepositoryError::InvalidKey(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn check_user_id(&self, user_id: &str) -> Result<(), RepositoryError> {
        storage_key(user_id).map(|_| ())
    }
}
