//! Typed entity identifiers.
//!
//! Each id is an index into one arena of the [`EntityStore`](crate::EntityStore).

use std::fmt;

use taskgen_foundation::Domain;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) u32);

        impl $name {
            /// Returns the arena index.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

arena_id!(
    /// Identifies a room.
    RoomId,
    "room"
);
arena_id!(
    /// Identifies a placement or beacon inside a room.
    LocationId,
    "location"
);
arena_id!(
    /// Identifies an object category.
    CategoryId,
    "category"
);
arena_id!(
    /// Identifies an object.
    ObjectId,
    "object"
);
arena_id!(
    /// Identifies a person.
    PersonId,
    "person"
);
arena_id!(
    /// Identifies a gesture.
    GestureId,
    "gesture"
);
arena_id!(
    /// Identifies a predefined question.
    QuestionId,
    "question"
);

/// A reference to any entity in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKey {
    /// A room.
    Room(RoomId),
    /// A placement or beacon.
    Location(LocationId),
    /// An object category.
    Category(CategoryId),
    /// An object.
    Object(ObjectId),
    /// A person.
    Person(PersonId),
    /// A gesture.
    Gesture(GestureId),
    /// A predefined question.
    Question(QuestionId),
}

impl EntityKey {
    /// Returns the wildcard domain this entity is drawn from.
    ///
    /// Rooms and locations share the `location` domain.
    #[must_use]
    pub const fn domain(self) -> Domain {
        match self {
            Self::Room(_) | Self::Location(_) => Domain::Location,
            Self::Category(_) => Domain::Category,
            Self::Object(_) => Domain::Object,
            Self::Person(_) => Domain::Name,
            Self::Gesture(_) => Domain::Gesture,
            Self::Question(_) => Domain::Question,
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room(id) => write!(f, "{id}"),
            Self::Location(id) => write!(f, "{id}"),
            Self::Category(id) => write!(f, "{id}"),
            Self::Object(id) => write!(f, "{id}"),
            Self::Person(id) => write!(f, "{id}"),
            Self::Gesture(id) => write!(f, "{id}"),
            Self::Question(id) => write!(f, "{id}"),
        }
    }
}
