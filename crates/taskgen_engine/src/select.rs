//! Selection keywords and pronoun forms.

use rand::Rng;
use rand::seq::SliceRandom;

use taskgen_foundation::{Domain, Error, Gender, Result};

const LOCATION_KEYWORDS: [&str; 3] = ["room", "placement", "beacon"];
const NAME_KEYWORDS: [&str; 2] = ["male", "female"];
const OBJECT_KEYWORDS: [&str; 3] = ["known", "alike", "special"];

/// Derives the keyword an entity must match to be drawn for a group.
///
/// Locations and names without a subtype pick one of their keywords at
/// random; objects without one are unrestricted. Categories, gestures and
/// questions take no subtype.
///
/// # Errors
/// Returns an `UnknownSubtype` error if `subtype` is not valid for `domain`.
pub fn selection_keyword<R: Rng + ?Sized>(
    domain: Domain,
    subtype: Option<&str>,
    rng: &mut R,
) -> Result<Option<&'static str>> {
    let choices: &[&'static str] = match domain {
        Domain::Location => &LOCATION_KEYWORDS,
        Domain::Name => &NAME_KEYWORDS,
        Domain::Object => &OBJECT_KEYWORDS,
        Domain::Category | Domain::Gesture | Domain::Question | Domain::Pronoun | Domain::Void => {
            &[]
        }
    };

    match subtype {
        Some(subtype) => choices
            .iter()
            .find(|k| **k == subtype)
            .map(|k| Some(*k))
            .ok_or_else(|| Error::unknown_subtype(domain.keyword(), subtype)),
        None if domain == Domain::Object => Ok(None),
        None => Ok(choices.choose(rng).copied()),
    }
}

/// Grammatical case of a `{pron}` marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PronounCase {
    /// he / she / it
    Subjective,
    /// him / her / it
    Objective,
    /// his / her / its
    Possessive,
}

impl PronounCase {
    /// Reads the case from a `{pron}` subtype.
    ///
    /// # Errors
    /// Returns an `UnknownSubtype` error for anything but `sub`, `subj`, `obj`
    /// or `pos`.
    pub fn from_subtype(subtype: Option<&str>) -> Result<Self> {
        match subtype {
            None | Some("sub" | "subj") => Ok(Self::Subjective),
            Some("obj") => Ok(Self::Objective),
            Some("pos") => Ok(Self::Possessive),
            Some(other) => Err(Error::unknown_subtype(Domain::Pronoun.keyword(), other)),
        }
    }

    /// Returns the third-person singular form for `gender`.
    #[must_use]
    pub const fn form(self, gender: Gender) -> &'static str {
        match (self, gender) {
            (Self::Subjective, Gender::Male) => "he",
            (Self::Subjective, Gender::Female) => "she",
            (Self::Subjective | Self::Objective, Gender::Neutral) => "it",
            (Self::Objective, Gender::Male) => "him",
            (Self::Objective | Self::Possessive, Gender::Female) => "her",
            (Self::Possessive, Gender::Male) => "his",
            (Self::Possessive, Gender::Neutral) => "its",
        }
    }
}
