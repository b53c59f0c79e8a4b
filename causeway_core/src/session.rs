//! # Design Sessions
//!
//! A session is a named, timestamped, immutable snapshot of one design's
//! input and computed result, kept for later comparison and history.
//!
//! The [`SessionStore`] is an explicit object constructed by the host and
//! passed to whatever needs it - deliberately not ambient global state, so
//! tests get a fresh store and embedders control its lifecycle. Sessions
//! are never mutated in place: `load` hands out a clone, so a comparison
//! always sees a consistent snapshot regardless of concurrent saves.
//!
//! ## Example
//!
//! ```rust
//! use causeway_core::calculations::structural::{DesignInput, calculate};
//! use causeway_core::session::SessionStore;
//!
//! let store = SessionStore::new();
//!
//! let input = DesignInput {
//!     length_m: 100.0,
//!     width_m: 8.0,
//!     height_m: 2.0,
//!     water_depth_m: 1.5,
//!     soil_type: "medium".to_string(),
//!     load_class: "vehicular".to_string(),
//!     safety_factor: 2.5,
//! };
//! let result = calculate(&input).unwrap();
//!
//! let id = store.save("Option A", input, result);
//! let session = store.load(&id).unwrap();
//! assert_eq!(session.name, "Option A");
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::comparison::{compare, ComparisonResult};
use crate::calculations::structural::{DesignInput, StructuralResult};
use crate::errors::{CalcError, CalcResult};

/// Current schema version for persisted session files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A named, immutable snapshot of one design.
///
/// Created on explicit save, read on load/compare/list, deleted
/// explicitly - never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSession {
    /// Store-assigned identifier
    pub id: Uuid,

    /// User-supplied name (e.g., "Option A", "North alignment")
    pub name: String,

    /// When the session was saved
    pub created: DateTime<Utc>,

    /// The design parameters as supplied
    pub input: DesignInput,

    /// The computed result (including the recommendation)
    pub result: StructuralResult,
}

/// Lightweight listing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub name: String,
    pub created: DateTime<Utc>,
}

/// Name -> result store for saved designs.
///
/// Using a UUID-keyed map provides O(1) lookup and no duplicate-ID issues;
/// all access is serialized by an interior mutex, which is all the
/// concurrency control the workload needs since sessions are independent
/// and immutable after save.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, DesignSession>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        SessionStore {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Rebuild a store from previously persisted sessions.
    pub fn from_sessions(sessions: Vec<DesignSession>) -> Self {
        SessionStore {
            sessions: Mutex::new(sessions.into_iter().map(|s| (s.id, s)).collect()),
        }
    }

    // Sessions are immutable after insert, so a poisoned mutex still
    // guards consistent data; recover instead of propagating.
    fn guard(&self) -> MutexGuard<'_, HashMap<Uuid, DesignSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Save a design under a name, returning the assigned session ID.
    pub fn save(
        &self,
        name: impl Into<String>,
        input: DesignInput,
        result: StructuralResult,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let session = DesignSession {
            id,
            name: name.into(),
            created: Utc::now(),
            input,
            result,
        };
        self.guard().insert(id, session);
        id
    }

    /// Load a session by ID.
    ///
    /// Returns a clone: the store retains exclusive ownership of the
    /// stored session and callers get a stable snapshot.
    pub fn load(&self, id: &Uuid) -> CalcResult<DesignSession> {
        self.guard()
            .get(id)
            .cloned()
            .ok_or_else(|| CalcError::session_not_found(id.to_string()))
    }

    /// List all sessions, oldest first.
    pub fn list(&self) -> Vec<SessionSummary> {
        let mut summaries: Vec<SessionSummary> = self
            .guard()
            .values()
            .map(|s| SessionSummary {
                id: s.id,
                name: s.name.clone(),
                created: s.created,
            })
            .collect();
        summaries.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.name.cmp(&b.name)));
        summaries
    }

    /// Delete a session by ID, returning it.
    pub fn delete(&self, id: &Uuid) -> CalcResult<DesignSession> {
        self.guard()
            .remove(id)
            .ok_or_else(|| CalcError::session_not_found(id.to_string()))
    }

    /// Remove all sessions (test teardown, embedder shutdown).
    pub fn clear(&self) {
        self.guard().clear();
    }

    /// Number of stored sessions.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// True when no sessions are stored.
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Compare two saved designs, baseline first.
    ///
    /// Loads snapshot clones of both sessions and delegates to the
    /// comparator, so a concurrent save cannot be observed mid-comparison.
    pub fn compare(&self, baseline_id: &Uuid, candidate_id: &Uuid) -> CalcResult<ComparisonResult> {
        let baseline = self.load(baseline_id)?;
        let candidate = self.load(candidate_id)?;
        compare(&baseline.result, &candidate.result)
    }

    /// Snapshot every session for persistence, oldest first.
    pub fn snapshot(&self) -> Vec<DesignSession> {
        let mut sessions: Vec<DesignSession> = self.guard().values().cloned().collect();
        sessions.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.name.cmp(&b.name)));
        sessions
    }
}
