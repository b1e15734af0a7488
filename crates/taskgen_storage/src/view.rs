//! Borrowed entity views implementing the [`Entity`] capability.

use taskgen_foundation::{Entity, Gender, Result, Value};

use crate::entity::EntityKey;
use crate::model::{
    Attributes, Category, Gesture, Location, Object, Person, Question, Room,
};
use crate::store::EntityStore;

#[derive(Clone, Copy, Debug)]
enum Record<'a> {
    Room(&'a Room),
    Location(&'a Location),
    Category(&'a Category),
    Object(&'a Object),
    Person(&'a Person),
    Gesture(&'a Gesture),
    Question(&'a Question),
}

/// A view of one entity together with the store it lives in.
///
/// Declared properties that name another entity (`room`, `category`,
/// `location`) are answered by following ids through the store.
#[derive(Clone, Copy, Debug)]
pub struct EntityView<'a> {
    store: &'a EntityStore,
    key: EntityKey,
    record: Record<'a>,
}

impl<'a> EntityView<'a> {
    pub(crate) fn new(store: &'a EntityStore, key: EntityKey) -> Result<Self> {
        let record = match key {
            EntityKey::Room(id) => Record::Room(store.room(id)?),
            EntityKey::Location(id) => Record::Location(store.location(id)?),
            EntityKey::Category(id) => Record::Category(store.category(id)?),
            EntityKey::Object(id) => Record::Object(store.object(id)?),
            EntityKey::Person(id) => Record::Person(store.person(id)?),
            EntityKey::Gesture(id) => Record::Gesture(store.gesture(id)?),
            EntityKey::Question(id) => Record::Question(store.question(id)?),
        };
        Ok(Self { store, key, record })
    }

    /// Returns the key this view was created from.
    #[must_use]
    pub fn key(&self) -> EntityKey {
        self.key
    }

    fn attributes(&self) -> &'a Attributes {
        match self.record {
            Record::Room(r) => &r.attributes,
            Record::Location(l) => &l.attributes,
            Record::Category(c) => &c.attributes,
            Record::Object(o) => &o.attributes,
            Record::Person(p) => &p.attributes,
            Record::Gesture(g) => &g.attributes,
            Record::Question(q) => &q.attributes,
        }
    }

    fn room_name(&self) -> Option<Value> {
        let room = self.store.room_of(self.key)?;
        self.store.room(room).ok().map(|r| Value::from(r.name.as_str()))
    }

    fn declared(&self, name: &str) -> Option<Value> {
        match (self.record, name) {
            (Record::Room(_), "type") => Some(Value::from("room")),
            (Record::Room(_) | Record::Location(_) | Record::Category(_) | Record::Object(_), "room") => {
                self.room_name()
            }
            (Record::Location(_), "type") => Some(Value::from("location")),
            (Record::Location(l), "placement") => Some(Value::Bool(l.is_placement)),
            (Record::Location(l), "beacon") => Some(Value::Bool(l.is_beacon)),
            (Record::Category(_), "type") => Some(Value::from("category")),
            (Record::Category(c), "location") => self
                .store
                .location(c.default_location)
                .ok()
                .map(|l| Value::from(l.name.as_str())),
            (Record::Object(o), "type") => Some(Value::from(o.object_type.name())),
            (Record::Object(o), "category") => self
                .store
                .category(o.category)
                .ok()
                .map(|c| Value::from(c.name.as_str())),
            (Record::Object(o), "location") => {
                let category = self.store.category(o.category).ok()?;
                self.store
                    .location(category.default_location)
                    .ok()
                    .map(|l| Value::from(l.name.as_str()))
            }
            (Record::Person(_), "type") => Some(Value::from("person")),
            (Record::Person(p), "gender") => Some(Value::from(p.gender.name())),
            (Record::Gesture(_), "type") => Some(Value::from("gesture")),
            (Record::Question(_), "type") => Some(Value::from("question")),
            (Record::Question(q), "question") => Some(Value::from(q.text.as_str())),
            (Record::Question(q), "answer") => Some(Value::from(q.answer.as_str())),
            (_, "name") => Some(Value::from(self.name())),
            _ => None,
        }
    }
}

impl Entity for EntityView<'_> {
    fn name(&self) -> &str {
        match self.record {
            Record::Room(r) => &r.name,
            Record::Location(l) => &l.name,
            Record::Category(c) => &c.name,
            Record::Object(o) => &o.name,
            Record::Person(p) => &p.name,
            Record::Gesture(g) => &g.name,
            Record::Question(_) => Question::DISPLAY_NAME,
        }
    }

    fn matches_keyword(&self, keyword: &str) -> bool {
        match self.record {
            Record::Room(_) => keyword == "room",
            Record::Location(l) => {
                (keyword == "placement" && l.is_placement) || (keyword == "beacon" && l.is_beacon)
            }
            Record::Category(_) => keyword == "category",
            Record::Object(o) => keyword == o.object_type.name(),
            Record::Person(p) => keyword == p.gender.name(),
            Record::Gesture(_) => keyword == "gesture",
            Record::Question(_) => keyword == "question",
        }
    }

    fn property(&self, name: &str) -> Option<Value> {
        self.declared(name)
            .or_else(|| self.attributes().get(name).cloned())
    }

    fn metadata(&self) -> Vec<String> {
        match self.record {
            Record::Question(q) => vec![format!("Q: {}", q.text), format!("A: {}", q.answer)],
            _ => Vec::new(),
        }
    }

    fn gender(&self) -> Option<Gender> {
        match self.record {
            Record::Person(p) => Some(p.gender),
            _ => None,
        }
    }
}
