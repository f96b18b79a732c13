//! Token persistence: a single string under a fixed key.
//! Native builds keep it in a SQLite `config` table; the browser build uses `localStorage`.

use std::sync::{Arc, Mutex};

use crate::client_log;
use crate::error::StorageError;

/// Key the token is stored under, on every backend.
pub const TOKEN_KEY: &str = "token";

/// Backend for the persisted session token.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Result<Option<String>, StorageError>;
    fn set(&self, token: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}

/// Process-local store. Used by tests and as the fallback when no persistent backend opens.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_string())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>, StorageError> {
        Ok(self.token.lock().map_err(|_| StorageError::Poisoned)?.clone())
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        *self.token.lock().map_err(|_| StorageError::Poisoned)? = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        *self.token.lock().map_err(|_| StorageError::Poisoned)? = None;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{default_data_dir, SqliteTokenStore};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use rusqlite::{params, Connection};
    use std::path::{Path, PathBuf};

    pub const DB_FILE: &str = "safepay.db";

    /// `SAFEPAY_DATA_DIR`, or the platform data dir + `safepay`.
    pub fn default_data_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("SAFEPAY_DATA_DIR") {
            if !dir.trim().is_empty() {
                return PathBuf::from(dir);
            }
        }
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("safepay")
    }

    /// Token kept in the `config(key, value)` table of `<dir>/safepay.db`.
    pub struct SqliteTokenStore {
        conn: Mutex<Connection>,
    }

    impl SqliteTokenStore {
        pub fn open(dir: &Path) -> Result<Self, StorageError> {
            std::fs::create_dir_all(dir)?;
            let db_path = dir.join(DB_FILE);
            client_log!("[safepay] storage::open db={:?}", db_path);
            let conn = Connection::open(&db_path)?;
            conn.execute_batch("CREATE TABLE IF NOT EXISTS config (key TEXT PRIMARY KEY, value TEXT);")?;
            Ok(Self { conn: Mutex::new(conn) })
        }

        fn with_db<F, T>(&self, f: F) -> Result<T, StorageError>
        where
            F: FnOnce(&Connection) -> Result<T, rusqlite::Error>,
        {
            let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
            Ok(f(&conn)?)
        }

        fn config_get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.with_db(|conn| {
                let mut stmt = conn.prepare("SELECT value FROM config WHERE key = ?1")?;
                let mut rows = stmt.query(params![key])?;
                if let Some(row) = rows.next()? {
                    return row.get(0);
                }
                Ok(None)
            })
        }

        fn config_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.with_db(|conn| {
                conn.execute(
                    "INSERT INTO config (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = ?2",
                    params![key, value],
                )?;
                Ok(())
            })
        }

        fn config_remove(&self, key: &str) -> Result<(), StorageError> {
            self.with_db(|conn| {
                conn.execute("DELETE FROM config WHERE key = ?1", params![key])?;
                Ok(())
            })
        }
    }

    impl TokenStore for SqliteTokenStore {
        fn get(&self) -> Result<Option<String>, StorageError> {
            self.config_get(TOKEN_KEY)
        }

        fn set(&self, token: &str) -> Result<(), StorageError> {
            self.config_set(TOKEN_KEY, token)
        }

        fn remove(&self) -> Result<(), StorageError> {
            self.config_remove(TOKEN_KEY)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;

    /// Browser `localStorage`; looked up per call so the store holds no JS handles.
    #[derive(Default)]
    pub struct LocalStorageTokenStore;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }

    impl TokenStore for LocalStorageTokenStore {
        fn get(&self) -> Result<Option<String>, StorageError> {
            local_storage()?
                .get_item(TOKEN_KEY)
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
        }

        fn set(&self, token: &str) -> Result<(), StorageError> {
            local_storage()?
                .set_item(TOKEN_KEY, token)
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
        }

        fn remove(&self) -> Result<(), StorageError> {
            local_storage()?
                .remove_item(TOKEN_KEY)
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
        }
    }
}

/// Persistent store for the current platform, falling back to memory when it cannot open.
pub fn default_token_store() -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(LocalStorageTokenStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match SqliteTokenStore::open(&default_data_dir()) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                client_log!("[safepay] storage open failed, token will not persist: {}", e);
                Arc::new(MemoryTokenStore::new())
            }
        }
    }
}
