//! File-backed session record.
//!
//! The browser app kept one JSON `user` record in local storage; here
//! it is a JSON file on disk. Loaded once per run and passed down
//! explicitly, never read from a global. There is no refresh or expiry
//! handling: the record exists between login and logout, nothing else.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::SessionUser;
use crate::utils::error::AppError;

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads the stored session record, `None` when absent.
    pub fn load(&self) -> Result<Option<SessionUser>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let user = serde_json::from_str(&raw)?;
        Ok(Some(user))
    }

    /// Like [`load`](Self::load), but a missing record is an error.
    /// Pages that need an authenticated user start here.
    pub fn require(&self) -> Result<SessionUser, AppError> {
        self.load()?.ok_or(AppError::SessionMissing)
    }

    /// Persists the record returned by a successful login.
    pub fn save(&self, user: &SessionUser) -> Result<(), AppError> {
        let raw = serde_json::to_string(user)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Logout: drop the record. Absence is not an error.
    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use uuid::Uuid;

    fn sample_user() -> SessionUser {
        SessionUser {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Attendee,
            token: "token-123".to_string(),
        }
    }

    #[test]
    fn save_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        assert!(store.load().unwrap().is_none());

        let user = sample_user();
        store.save(&user).unwrap();
        let loaded = store.require().unwrap();
        assert_eq!(loaded.id, user.id);
        assert_eq!(loaded.token, user.token);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn require_without_record_is_session_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        let err = store.require().unwrap_err();
        assert!(matches!(err, AppError::SessionMissing));
    }

    #[test]
    fn stored_record_uses_backend_field_names() {
        let user = sample_user();
        let raw = serde_json::to_string(&user).unwrap();
        assert!(raw.contains("\"_id\""));
        assert!(raw.contains("\"firstName\""));
        assert!(raw.contains("\"attendee\""));
    }
}
