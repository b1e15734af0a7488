//! Entity records held by the store.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use taskgen_foundation::{Gender, Value};

use crate::entity::{CategoryId, LocationId, RoomId};

/// Free-form properties reachable from where-clauses when no declared field
/// matches.
pub type Attributes = BTreeMap<String, Value>;

/// A room of the arena.
#[derive(Clone, Debug)]
pub struct Room {
    /// Display name.
    pub name: String,
    /// Extra properties.
    pub attributes: Attributes,
}

/// A named spot inside a room.
#[derive(Clone, Debug)]
pub struct Location {
    /// Display name.
    pub name: String,
    /// The room containing this location.
    pub room: RoomId,
    /// Objects can be placed here.
    pub is_placement: bool,
    /// The robot can navigate here.
    pub is_beacon: bool,
    /// Extra properties.
    pub attributes: Attributes,
}

/// A category grouping similar objects.
#[derive(Clone, Debug)]
pub struct Category {
    /// Display name (plural, e.g. "drinks").
    pub name: String,
    /// Where objects of this category are usually stored.
    pub default_location: LocationId,
    /// Extra properties.
    pub attributes: Attributes,
}

/// How well the robot is expected to know an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// Known in advance.
    Known,
    /// Looks like other objects of its category.
    Alike,
    /// Unusual shape or handling.
    Special,
}

impl ObjectType {
    /// Returns the lowercase name used as keyword and property value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Known => "known",
            Self::Alike => "alike",
            Self::Special => "special",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "known" => Ok(Self::Known),
            "alike" => Ok(Self::Alike),
            "special" => Ok(Self::Special),
            other => Err(format!("unknown object type: {other}")),
        }
    }
}

/// A graspable object.
#[derive(Clone, Debug)]
pub struct Object {
    /// Display name.
    pub name: String,
    /// The category this object belongs to.
    pub category: CategoryId,
    /// Object type.
    pub object_type: ObjectType,
    /// Extra properties.
    pub attributes: Attributes,
}

/// A person the robot may interact with.
#[derive(Clone, Debug)]
pub struct Person {
    /// First name.
    pub name: String,
    /// Gender for pronoun agreement.
    pub gender: Gender,
    /// Extra properties.
    pub attributes: Attributes,
}

/// A gesture a person may perform.
#[derive(Clone, Debug)]
pub struct Gesture {
    /// Display name (e.g. "waving").
    pub name: String,
    /// Extra properties.
    pub attributes: Attributes,
}

/// A predefined question with its expected answer.
#[derive(Clone, Debug)]
pub struct Question {
    /// The question text.
    pub text: String,
    /// The expected answer.
    pub answer: String,
    /// Extra properties.
    pub attributes: Attributes,
}

impl Question {
    /// Display name used in sentences; the text itself travels as metadata.
    pub const DISPLAY_NAME: &'static str = "question";
}
