//! Obfuscated companions.
//!
//! An obfuscated wildcard renders a vaguer stand-in for its entity; the
//! concrete name is kept as disclosure metadata on the token.

use taskgen_foundation::Result;
use taskgen_storage::{EntityKey, EntityStore};

/// Returns the stand-in text for an entity.
///
/// | entity            | stand-in            |
/// |-------------------|---------------------|
/// | placement, beacon | its room            |
/// | room              | `room`              |
/// | object            | its category        |
/// | category          | `objects`           |
/// | person            | `a person`          |
/// | gesture           | `gesture`           |
/// | question          | `question`          |
///
/// # Errors
/// Returns an error if `key` or an entity it refers to is not in `store`.
pub fn stand_in(store: &EntityStore, key: EntityKey) -> Result<String> {
    let text = match key {
        EntityKey::Location(id) => {
            let location = store.location(id)?;
            store.room(location.room)?.name.clone()
        }
        EntityKey::Room(_) => "room".to_string(),
        EntityKey::Object(id) => {
            let object = store.object(id)?;
            store.category(object.category)?.name.clone()
        }
        EntityKey::Category(_) => "objects".to_string(),
        EntityKey::Person(_) => "a person".to_string(),
        EntityKey::Gesture(_) => "gesture".to_string(),
        EntityKey::Question(_) => "question".to_string(),
    };
    Ok(text)
}

/// Formats the disclosure attached to an obfuscated token.
#[must_use]
pub fn disclosure(stand_in: &str, name: &str) -> String {
    format!("{stand_in}: {name}")
}
