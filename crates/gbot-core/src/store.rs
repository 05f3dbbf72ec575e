use std::{fs, path::PathBuf, sync::Mutex};

use crate::{domain::UserId, Result};

/// Persistent set of every user who has ever opened the bot, used as the
/// broadcast audience.
///
/// Insertion-ordered, duplicate-free, append-only. The backing JSON file is
/// read once at construction and rewritten in full on every new insertion;
/// two users racing to insert can lose one id (last writer wins on the full
/// snapshot). Accepted: expected insert rates are tiny.
pub struct UserStore {
    path: PathBuf,
    ids: Mutex<Vec<i64>>,
}

impl UserStore {
    /// Load the store from `path`. A missing file is an empty store; a
    /// malformed file is an error (better to fail at startup than to
    /// silently drop the broadcast audience).
    pub fn load(path: PathBuf) -> Result<Self> {
        let ids = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str::<Vec<i64>>(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            ids: Mutex::new(ids),
        })
    }

    /// Idempotent insert. Returns `true` (after rewriting the file) only
    /// when the id was not present before.
    pub fn insert(&self, user: UserId) -> Result<bool> {
        let mut ids = self.ids.lock().expect("user store lock poisoned");
        if ids.contains(&user.0) {
            return Ok(false);
        }
        ids.push(user.0);
        let snapshot = serde_json::to_string(&*ids)?;
        fs::write(&self.path, snapshot)?;
        Ok(true)
    }

    /// All stored ids, in insertion order.
    pub fn all(&self) -> Vec<UserId> {
        self.ids
            .lock()
            .expect("user store lock poisoned")
            .iter()
            .map(|&id| UserId(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ids.lock().expect("user store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn tmp(prefix: &str) -> PathBuf {
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(Duration::from_secs(0))
            .as_nanos();
        let pid = std::process::id();
        PathBuf::from(format!("/tmp/{prefix}-{pid}-{ts}.json"))
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let store = UserStore::load(tmp("gbot-store")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn insert_is_idempotent() {
        let store = UserStore::load(tmp("gbot-store")).unwrap();
        assert!(store.insert(UserId(111)).unwrap());
        assert!(!store.insert(UserId(111)).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn inserts_survive_a_reload_in_order() {
        let path = tmp("gbot-store");
        {
            let store = UserStore::load(path.clone()).unwrap();
            store.insert(UserId(111)).unwrap();
            store.insert(UserId(222)).unwrap();
        }
        let store = UserStore::load(path).unwrap();
        assert_eq!(store.all(), vec![UserId(111), UserId(222)]);
    }

    #[test]
    fn malformed_file_is_a_startup_error() {
        let path = tmp("gbot-store");
        fs::write(&path, "not json").unwrap();
        assert!(UserStore::load(path).is_err());
    }
}
