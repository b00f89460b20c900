//! Append-only conversation transcript
//!
//! The transcript is the ordered record of everything spoken (or announced)
//! during the current session. Entries are created exactly once, never
//! edited, and only removed by an explicit bulk clear.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Speaker label reserved for controller-generated notices.
pub const SYSTEM_SPEAKER: &str = "System";

/// A single transcript entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Unique identifier, generated at creation
    pub id: Uuid,

    /// Spoken or announced content (may be empty, never dropped)
    pub text: String,

    /// Display label of whoever authored the entry
    pub speaker: String,

    /// When the entry was appended; non-decreasing within a session
    pub timestamp: DateTime<Utc>,

    /// True if the entry was authored by the local participant
    pub is_local_user: bool,
}

/// Ordered, append-only transcript log
///
/// Insertion order is display order. Timestamps are clamped so they never
/// go backward even if the wall clock does.
#[derive(Debug, Default)]
pub struct TranscriptLog {
    entries: Vec<TranscriptEntry>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry and return it
    pub fn append(
        &mut self,
        text: impl Into<String>,
        speaker: impl Into<String>,
        is_local_user: bool,
    ) -> TranscriptEntry {
        let mut timestamp = Utc::now();
        if let Some(last) = self.entries.last() {
            // Clock adjustments must not break timestamp ordering
            if timestamp < last.timestamp {
                timestamp = last.timestamp;
            }
        }

        let entry = TranscriptEntry {
            id: Uuid::new_v4(),
            text: text.into(),
            speaker: speaker.into(),
            timestamp,
            is_local_user,
        };

        self.entries.push(entry.clone());
        entry
    }

    /// Atomically empty the log
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only view of all fully-appended entries, in insertion order
    pub fn snapshot(&self) -> Vec<TranscriptEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
