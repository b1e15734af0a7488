//! The built-in household arena.

use taskgen_foundation::{Error, Gender, Result};
use taskgen_storage::{EntityStore, ObjectType};

/// `(room, [(location, placement, beacon)])`
const ROOMS: &[(&str, &[(&str, bool, bool)])] = &[
    (
        "kitchen",
        &[
            ("kitchen table", true, true),
            ("kitchen counter", true, false),
            ("fridge", true, false),
            ("sink", false, true),
        ],
    ),
    (
        "living room",
        &[
            ("couch", true, true),
            ("tv stand", true, false),
            ("bookshelf", true, false),
        ],
    ),
    (
        "bedroom",
        &[
            ("bed", true, true),
            ("dresser", true, false),
            ("nightstand", true, false),
        ],
    ),
    (
        "dining room",
        &[("dining table", true, true), ("cabinet", true, false)],
    ),
    (
        "entrance",
        &[("front door", false, true), ("coat rack", true, false)],
    ),
    (
        "office",
        &[("office desk", true, true), ("filing cabinet", true, false)],
    ),
];

/// `(category, default location, [(object, type)])`
const CATEGORIES: &[(&str, &str, &[(&str, ObjectType)])] = &[
    (
        "drinks",
        "fridge",
        &[
            ("coke", ObjectType::Known),
            ("orange juice", ObjectType::Known),
            ("water bottle", ObjectType::Alike),
        ],
    ),
    (
        "fruits",
        "kitchen counter",
        &[
            ("apple", ObjectType::Known),
            ("banana", ObjectType::Known),
            ("orange", ObjectType::Alike),
        ],
    ),
    (
        "snacks",
        "tv stand",
        &[
            ("chips", ObjectType::Known),
            ("cookies", ObjectType::Known),
            ("crackers", ObjectType::Alike),
        ],
    ),
    (
        "books",
        "bookshelf",
        &[
            ("novel", ObjectType::Known),
            ("dictionary", ObjectType::Known),
            ("photo album", ObjectType::Special),
        ],
    ),
    (
        "toys",
        "bed",
        &[
            ("teddy bear", ObjectType::Known),
            ("toy car", ObjectType::Known),
            ("puzzle", ObjectType::Alike),
        ],
    ),
    (
        "tableware",
        "dining table",
        &[
            ("plate", ObjectType::Alike),
            ("cup", ObjectType::Alike),
            ("bowl", ObjectType::Known),
        ],
    ),
    (
        "accessories",
        "coat rack",
        &[
            ("umbrella", ObjectType::Known),
            ("hat", ObjectType::Known),
            ("keys", ObjectType::Special),
        ],
    ),
    (
        "stationery",
        "office desk",
        &[
            ("notebook", ObjectType::Known),
            ("stapler", ObjectType::Known),
            ("pen", ObjectType::Alike),
        ],
    ),
];

const PEOPLE: &[(&str, Gender)] = &[
    ("Alex", Gender::Female),
    ("Charlie", Gender::Male),
    ("Elizabeth", Gender::Female),
    ("Francis", Gender::Male),
    ("Jennifer", Gender::Female),
    ("Linda", Gender::Female),
    ("Mary", Gender::Female),
    ("Michael", Gender::Male),
    ("Patricia", Gender::Female),
    ("Robert", Gender::Male),
    ("James", Gender::Male),
    ("John", Gender::Male),
];

const GESTURES: &[&str] = &[
    "waving",
    "raising their left arm",
    "raising their right arm",
    "pointing to the left",
    "pointing to the right",
];

const QUESTIONS: &[(&str, &str)] = &[
    ("How many legs does a spider have?", "Eight"),
    ("What is the capital of Japan?", "Tokyo"),
    ("Which planet is closest to the sun?", "Mercury"),
    ("How many days are there in a leap year?", "366"),
    ("What color do you get by mixing blue and yellow?", "Green"),
    ("Who painted the Mona Lisa?", "Leonardo da Vinci"),
];

/// Builds the household arena.
///
/// Every room holds at least one category's default location, so a clause
/// like `room = "kitchen"` always has candidates.
///
/// # Errors
/// Returns an error only if the built-in tables refer to a location they do
/// not define.
pub fn household() -> Result<EntityStore> {
    let mut store = EntityStore::new();
    let mut locations = Vec::new();

    for (room, spots) in ROOMS {
        let room = store.add_room(*room);
        for (name, placement, beacon) in *spots {
            let id = store.add_location(*name, room, *placement, *beacon)?;
            locations.push((*name, id));
        }
    }

    for (category, at, objects) in CATEGORIES {
        let location = locations
            .iter()
            .find(|(name, _)| name == at)
            .map(|(_, id)| *id)
            .ok_or_else(|| Error::entity_not_found(*at))?;
        let category = store.add_category(*category, location)?;
        for (name, kind) in *objects {
            store.add_object(*name, category, *kind)?;
        }
    }

    for (name, gender) in PEOPLE {
        store.add_person(*name, *gender);
    }
    for gesture in GESTURES {
        store.add_gesture(*gesture);
    }
    for (question, answer) in QUESTIONS {
        store.add_question(*question, *answer);
    }
    Ok(store)
}
