//! Automatic wildcard ids.

use taskgen_foundation::{Error, Result};

/// Hands out ids for wildcards written without one.
///
/// One counter lives as long as the generator that owns it and is never
/// reset, so ids keep increasing across tasks. Before a sentence's auto ids
/// are assigned the counter is raised above every id the author wrote in it.
#[derive(Clone, Debug)]
pub struct IdCounter {
    next: u32,
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl IdCounter {
    /// Creates a counter whose first id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Largest id an author may write. Anything above it could not be
    /// raised past.
    pub const MAX_EXPLICIT: u32 = u32::MAX - 1;

    /// Makes sure the next id is greater than `id`.
    ///
    /// Returns false, leaving the counter alone, when no id follows `id`.
    pub fn raise_above(&mut self, id: u32) -> bool {
        match id.checked_add(1) {
            Some(floor) => {
                self.next = self.next.max(floor);
                true
            }
            None => false,
        }
    }

    /// Returns the next id and advances.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IdsExhausted`](taskgen_foundation::ErrorKind::IdsExhausted)
    /// once the last id has been handed out.
    pub fn next_id(&mut self) -> Result<u32> {
        let id = self.next;
        self.next = id.checked_add(1).ok_or_else(Error::ids_exhausted)?;
        Ok(id)
    }

    /// Returns the id the next call to [`next_id`](Self::next_id) will hand out.
    #[must_use]
    pub fn peek(&self) -> u32 {
        self.next
    }
}
