//! # File I/O Module
//!
//! Persists saved design sessions with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **File locking**: Prevent concurrent edits on shared drives
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Session snapshots are saved as `.cwy` (Causeway) files containing JSON:
//! a versioned header plus the flat list of [`DesignSession`] records.
//! Lock files use the `.cwy.lock` extension with metadata about who holds
//! the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use causeway_core::file_io::{save_sessions, load_sessions, FileLock};
//! use causeway_core::session::SessionStore;
//! use std::path::Path;
//!
//! let store = SessionStore::new();
//! let path = Path::new("crossing.cwy");
//!
//! // Acquire lock before saving
//! let lock = FileLock::acquire(path, "engineer@company.com").unwrap();
//!
//! // Save with atomic write
//! save_sessions(&store, path).unwrap();
//!
//! // Lock is released when dropped
//! drop(lock);
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::session::{DesignSession, SessionStore, SCHEMA_VERSION};

/// On-disk session snapshot: versioned header plus the session records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// When the snapshot was written
    pub saved: DateTime<Utc>,

    /// All sessions, oldest first
    pub sessions: Vec<DesignSession>,
}

/// Lock file metadata stored in .cwy.lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

/// Get the hostname of the current machine
fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Uses both:
/// 1. OS-level file locking (via fs2) for process safety
/// 2. .lock file with metadata for user visibility
pub struct FileLock {
    /// Path to the session file
    session_path: PathBuf,
    /// Path to the lock file
    lock_path: PathBuf,
    /// The underlying file handle (keeps OS lock)
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a session file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the .cwy session file
    /// * `user_id` - Identifier for the user acquiring the lock
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - Lock acquired successfully
    /// * `Err(CalcError::FileLocked)` - Another process holds the lock
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        // Check if lock file exists and contains valid lock info
        if lock_path.exists() {
            if let Ok(existing) = read_lock_info(&lock_path) {
                if !is_lock_stale(&existing) {
                    return Err(CalcError::file_locked(
                        path.display().to_string(),
                        format!("{} ({})", existing.user_id, existing.machine),
                        existing.locked_at.to_rfc3339(),
                    ));
                }
                // Lock is stale, we can take it over
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                CalcError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        // Exclusive OS-level lock, non-blocking
        lock_file.try_lock_exclusive().map_err(|_| {
            CalcError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json = serde_json::to_string_pretty(&info).map_err(|e| {
            CalcError::SerializationError {
                reason: e.to_string(),
            }
        })?;

        lock_file.write_all(lock_json.as_bytes()).map_err(|e| {
            CalcError::file_error("write lock", lock_path.display().to_string(), e.to_string())
        })?;

        lock_file.sync_all().map_err(|e| {
            CalcError::file_error("sync lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(FileLock {
            session_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check if a file is locked without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if locked, `None` if available.
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = lock_path_for(path);
        if lock_path.exists() {
            if let Ok(info) = read_lock_info(&lock_path) {
                if !is_lock_stale(&info) {
                    return Some(info);
                }
            }
        }
        None
    }

    /// Get the path to the session file
    pub fn session_path(&self) -> &Path {
        &self.session_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Remove the lock file; the OS lock releases with _lock_file
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// Get the lock file path for a session file
fn lock_path_for(session_path: &Path) -> PathBuf {
    let mut lock_path = session_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

/// Read lock info from a lock file
fn read_lock_info(lock_path: &Path) -> CalcResult<LockInfo> {
    let mut file = File::open(lock_path).map_err(|e| {
        CalcError::file_error("read lock", lock_path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read lock", lock_path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })
}

/// Check if a lock is stale (the process that created it is no longer
/// running, or the lock is ancient)
fn is_lock_stale(info: &LockInfo) -> bool {
    if let Some(our_machine) = hostname() {
        if info.machine == our_machine {
            #[cfg(unix)]
            {
                if fs::metadata(format!("/proc/{}", info.pid)).is_err() {
                    return true;
                }
            }
            #[cfg(windows)]
            {
                use std::process::Command;
                let output = Command::new("tasklist")
                    .args(["/FI", &format!("PID eq {}", info.pid), "/NH"])
                    .output();
                if let Ok(output) = output {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    if stdout.contains("No tasks") || !stdout.contains(&info.pid.to_string()) {
                        return true;
                    }
                }
            }
        }
    }

    // Locks older than 24 hours are considered abandoned
    let age = Utc::now() - info.locked_at;
    age.num_hours() > 24
}

/// Save a session store snapshot to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize the snapshot to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp to .cwy (atomic on most filesystems)
///
/// This prevents corruption if the process is interrupted during write.
pub fn save_sessions(store: &SessionStore, path: &Path) -> CalcResult<()> {
    let snapshot = SessionFile {
        version: SCHEMA_VERSION.to_string(),
        saved: Utc::now(),
        sessions: store.snapshot(),
    };

    let json = serde_json::to_string_pretty(&snapshot).map_err(|e| {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    })?;

    let tmp_path = path.with_extension("cwy.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a session store from a file.
///
/// # Returns
///
/// * `Ok(SessionStore)` - Rebuilt store
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_sessions(path: &Path) -> CalcResult<SessionStore> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let snapshot: SessionFile =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&snapshot.version)?;

    Ok(SessionStore::from_sessions(snapshot.sessions))
}

/// Load a session store, returning whether it's read-only due to a lock.
///
/// # Returns
///
/// * `Ok((SessionStore, None))` - Loaded successfully, no lock
/// * `Ok((SessionStore, Some(LockInfo)))` - Loaded, but another user has the lock
/// * `Err(_)` - Failed to load
pub fn load_sessions_with_lock_check(
    path: &Path,
) -> CalcResult<(SessionStore, Option<LockInfo>)> {
    let store = load_sessions(path)?;
    let lock_info = FileLock::check(path);
    Ok((store, lock_info))
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(CalcError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(CalcError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // For 0.x versions, a newer minor than we support is also rejected
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(CalcError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    use crate::calculations::structural::{calculate, DesignInput};

    fn temp_session_path(name: &str) -> PathBuf {
        temp_dir().join(format!("causeway_test_{}.cwy", name))
    }

    fn populated_store() -> SessionStore {
        let store = SessionStore::new();
        let input = DesignInput {
            length_m: 100.0,
            width_m: 8.0,
            height_m: 2.0,
            water_depth_m: 1.5,
            soil_type: "medium".to_string(),
            load_class: "vehicular".to_string(),
            safety_factor: 2.5,
        };
        let result = calculate(&input).unwrap();
        store.save("Option A", input, result);
        store
    }

    #[test]
    fn test_lock_path_generation() {
        let session_path = Path::new("/path/to/crossing.cwy");
        let lock_path = lock_path_for(session_path);
        assert_eq!(lock_path, Path::new("/path/to/crossing.cwy.lock"));
    }

    #[test]
    fn test_lock_info_creation() {
        let info = LockInfo::new("test@example.com");
        assert_eq!(info.user_id, "test@example.com");
        assert!(info.pid > 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_session_path("roundtrip");

        let store = populated_store();
        let saved_sessions = store.snapshot();
        save_sessions(&store, &path).unwrap();

        let loaded = load_sessions(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        // Field-for-field equal to what was saved
        assert_eq!(loaded.snapshot(), saved_sessions);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_session_path("atomic");
        let tmp_path = path.with_extension("cwy.tmp");

        save_sessions(&populated_store(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let path = temp_session_path("lock_test");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "test@example.com").unwrap();
        assert_eq!(lock.info.user_id, "test@example.com");

        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());

        drop(lock);
        assert!(!lock_path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());

        // Different major fails
        assert!(validate_version("1.0.0").is_err());

        // Newer minor (in 0.x) fails
        assert!(validate_version("0.2.0").is_err());
    }

    #[test]
    fn test_load_with_lock_check() {
        let path = temp_session_path("lock_check");

        save_sessions(&populated_store(), &path).unwrap();

        let (loaded, lock_info) = load_sessions_with_lock_check(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(lock_info.is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_sessions(Path::new("/nonexistent/sessions.cwy")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
