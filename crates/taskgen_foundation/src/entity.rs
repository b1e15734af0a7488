//! The capability surface shared by every resolvable entity.

use std::fmt;

use crate::value::Value;

/// The domain a wildcard draws from, named by the wildcard keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    /// `{object}`
    Object,
    /// `{location}`: rooms, placements and beacons.
    Location,
    /// `{name}`: people.
    Name,
    /// `{category}`: object categories.
    Category,
    /// `{gesture}`
    Gesture,
    /// `{question}`: predefined questions.
    Question,
    /// `{pron}`: a pronoun referring back to an earlier wildcard.
    Pronoun,
    /// `{void}`: renders nothing, carries metadata only.
    Void,
}

impl Domain {
    /// Domains that own a candidate pool.
    pub const POOLED: [Domain; 6] = [
        Self::Object,
        Self::Location,
        Self::Name,
        Self::Category,
        Self::Gesture,
        Self::Question,
    ];

    /// Looks up a domain by its wildcard keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "object" => Some(Self::Object),
            "location" => Some(Self::Location),
            "name" => Some(Self::Name),
            "category" => Some(Self::Category),
            "gesture" => Some(Self::Gesture),
            "question" => Some(Self::Question),
            "pron" => Some(Self::Pronoun),
            "void" => Some(Self::Void),
            _ => None,
        }
    }

    /// Returns the wildcard keyword for this domain.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Location => "location",
            Self::Name => "name",
            Self::Category => "category",
            Self::Gesture => "gesture",
            Self::Question => "question",
            Self::Pronoun => "pron",
            Self::Void => "void",
        }
    }

    /// Returns true if wildcards of this domain draw from a pool.
    #[must_use]
    pub const fn is_pooled(self) -> bool {
        !matches!(self, Self::Pronoun | Self::Void)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Grammatical gender used for pronoun agreement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    /// he / him / his
    Male,
    /// she / her / her
    Female,
    /// it / it / its
    Neutral,
}

impl Gender {
    /// Returns the lowercase name used as a selection keyword.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capabilities the resolver needs from an entity.
///
/// Implementors are usually lightweight views into an owning store, so that
/// properties like "the room this placement belongs to" can follow ids
/// instead of back-pointers.
pub trait Entity {
    /// The display name substituted into the sentence.
    fn name(&self) -> &str;

    /// Returns true if this entity satisfies a selection keyword such as
    /// `room`, `beacon`, `known` or `female`.
    fn matches_keyword(&self, keyword: &str) -> bool;

    /// Looks up a named property for where-clause evaluation.
    fn property(&self, name: &str) -> Option<Value>;

    /// Intrinsic metadata attached to every token rendering this entity.
    fn metadata(&self) -> Vec<String> {
        Vec::new()
    }

    /// Grammatical gender, if the entity is a person.
    fn gender(&self) -> Option<Gender> {
        None
    }
}
