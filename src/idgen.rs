//! Unique short-id generation backed by the durable id set.

use uuid::Uuid;

use crate::{
    errors::{BackupError, Result},
    store::IdStore,
};

/// Default number of characters in a generated id.
pub const DEFAULT_MAX_CHARS: usize = 8;

/// Candidate attempts before giving up on a crowded (but not provably full)
/// id space.
const MAX_ATTEMPTS: usize = 4096;

/// Produces identifiers guaranteed absent from the persisted in-use set.
///
/// Generation reserves the id in the same call: the set is loaded, the new
/// id inserted, and the set saved before the id is returned, so two
/// sequential calls can never hand out the same value.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    store: IdStore,
}

impl IdGenerator {
    pub fn new(store: IdStore) -> Self {
        Self { store }
    }

    /// Generates and reserves an id of [`DEFAULT_MAX_CHARS`] characters.
    pub fn generate(&self) -> Result<String> {
        self.generate_with(DEFAULT_MAX_CHARS)
    }

    /// Generates and reserves an id of at most `max_chars` characters.
    ///
    /// Candidates are random v4 UUIDs rendered as hyphen-free lowercase hex
    /// and truncated. Fails with [`BackupError::IdSpaceExhausted`] when the
    /// space for the requested width is fully allocated, and with
    /// [`BackupError::InvalidState`] for a zero-width request.
    pub fn generate_with(&self, max_chars: usize) -> Result<String> {
        if max_chars == 0 {
            return Err(BackupError::InvalidState(
                "id length must be at least one character".into(),
            ));
        }

        let mut ids = self.store.load()?;

        // A rendered UUID has 32 hex chars, so wider requests still produce
        // 32-char candidates.
        let width = max_chars.min(32);

        // 16^width candidates exist; None means the space exceeds usize and
        // can be treated as inexhaustible. Only ids of the requested width
        // occupy that space; reservations of other widths never collide.
        if let Some(space) = 16usize.checked_pow(width as u32) {
            let occupied = ids.ids_in_use.iter().filter(|id| id.len() == width).count();
            if occupied >= space {
                return Err(BackupError::IdSpaceExhausted { max_chars });
            }
        }

        for _ in 0..MAX_ATTEMPTS {
            let hex = Uuid::new_v4().simple().to_string();
            let candidate: String = hex.chars().take(width).collect();
            if ids.insert(candidate.clone()) {
                self.store.save(&ids)?;
                tracing::debug!(id = %candidate, "reserved backup id");
                return Ok(candidate);
            }
        }

        Err(BackupError::IdSpaceExhausted { max_chars })
    }
}
