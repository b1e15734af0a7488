//! The owning arena for every entity of a data set.

// Arenas are far smaller than u32::MAX entries.
#![allow(clippy::cast_possible_truncation)]

use taskgen_foundation::{Domain, Error, Gender, Result, Value};

use crate::entity::{
    CategoryId, EntityKey, GestureId, LocationId, ObjectId, PersonId, QuestionId, RoomId,
};
use crate::model::{
    Attributes, Category, Gesture, Location, Object, ObjectType, Person, Question, Room,
};
use crate::view::EntityView;

/// Owns all entities and hands out typed ids.
///
/// The store is append-only: ids stay valid for the store's lifetime.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    rooms: Vec<Room>,
    locations: Vec<Location>,
    categories: Vec<Category>,
    objects: Vec<Object>,
    people: Vec<Person>,
    gestures: Vec<Gesture>,
    questions: Vec<Question>,
}

impl EntityStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room.
    pub fn add_room(&mut self, name: impl Into<String>) -> RoomId {
        self.rooms.push(Room {
            name: name.into(),
            attributes: Attributes::new(),
        });
        RoomId(self.rooms.len() as u32 - 1)
    }

    /// Adds a location inside `room`.
    ///
    /// # Errors
    /// Returns an error if `room` does not belong to this store.
    pub fn add_location(
        &mut self,
        name: impl Into<String>,
        room: RoomId,
        is_placement: bool,
        is_beacon: bool,
    ) -> Result<LocationId> {
        self.room(room)?;
        self.locations.push(Location {
            name: name.into(),
            room,
            is_placement,
            is_beacon,
            attributes: Attributes::new(),
        });
        Ok(LocationId(self.locations.len() as u32 - 1))
    }

    /// Adds a category whose objects are stored at `default_location`.
    ///
    /// # Errors
    /// Returns an error if `default_location` does not belong to this store.
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        default_location: LocationId,
    ) -> Result<CategoryId> {
        self.location(default_location)?;
        self.categories.push(Category {
            name: name.into(),
            default_location,
            attributes: Attributes::new(),
        });
        Ok(CategoryId(self.categories.len() as u32 - 1))
    }

    /// Adds an object to `category`.
    ///
    /// # Errors
    /// Returns an error if `category` does not belong to this store.
    pub fn add_object(
        &mut self,
        name: impl Into<String>,
        category: CategoryId,
        object_type: ObjectType,
    ) -> Result<ObjectId> {
        self.category(category)?;
        self.objects.push(Object {
            name: name.into(),
            category,
            object_type,
            attributes: Attributes::new(),
        });
        Ok(ObjectId(self.objects.len() as u32 - 1))
    }

    /// Adds a person.
    pub fn add_person(&mut self, name: impl Into<String>, gender: Gender) -> PersonId {
        self.people.push(Person {
            name: name.into(),
            gender,
            attributes: Attributes::new(),
        });
        PersonId(self.people.len() as u32 - 1)
    }

    /// Adds a gesture.
    pub fn add_gesture(&mut self, name: impl Into<String>) -> GestureId {
        self.gestures.push(Gesture {
            name: name.into(),
            attributes: Attributes::new(),
        });
        GestureId(self.gestures.len() as u32 - 1)
    }

    /// Adds a predefined question.
    pub fn add_question(
        &mut self,
        text: impl Into<String>,
        answer: impl Into<String>,
    ) -> QuestionId {
        self.questions.push(Question {
            text: text.into(),
            answer: answer.into(),
            attributes: Attributes::new(),
        });
        QuestionId(self.questions.len() as u32 - 1)
    }

    /// Sets a free-form attribute on any entity.
    ///
    /// # Errors
    /// Returns an error if `key` does not belong to this store.
    pub fn set_attribute(
        &mut self,
        key: EntityKey,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<()> {
        let attributes = match key {
            EntityKey::Room(id) => self.rooms.get_mut(id.index()).map(|e| &mut e.attributes),
            EntityKey::Location(id) => self
                .locations
                .get_mut(id.index())
                .map(|e| &mut e.attributes),
            EntityKey::Category(id) => self
                .categories
                .get_mut(id.index())
                .map(|e| &mut e.attributes),
            EntityKey::Object(id) => self.objects.get_mut(id.index()).map(|e| &mut e.attributes),
            EntityKey::Person(id) => self.people.get_mut(id.index()).map(|e| &mut e.attributes),
            EntityKey::Gesture(id) => self
                .gestures
                .get_mut(id.index())
                .map(|e| &mut e.attributes),
            EntityKey::Question(id) => self
                .questions
                .get_mut(id.index())
                .map(|e| &mut e.attributes),
        };
        let attributes = attributes.ok_or_else(|| Error::entity_not_found(key.to_string()))?;
        attributes.insert(name.into(), value.into());
        Ok(())
    }

    /// Returns a room.
    ///
    /// # Errors
    /// Returns an error if `id` does not belong to this store.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.rooms
            .get(id.index())
            .ok_or_else(|| Error::entity_not_found(id.to_string()))
    }

    /// Returns a location.
    ///
    /// # Errors
    /// Returns an error if `id` does not belong to this store.
    pub fn location(&self, id: LocationId) -> Result<&Location> {
        self.locations
            .get(id.index())
            .ok_or_else(|| Error::entity_not_found(id.to_string()))
    }

    /// Returns a category.
    ///
    /// # Errors
    /// Returns an error if `id` does not belong to this store.
    pub fn category(&self, id: CategoryId) -> Result<&Category> {
        self.categories
            .get(id.index())
            .ok_or_else(|| Error::entity_not_found(id.to_string()))
    }

    /// Returns an object.
    ///
    /// # Errors
    /// Returns an error if `id` does not belong to this store.
    pub fn object(&self, id: ObjectId) -> Result<&Object> {
        self.objects
            .get(id.index())
            .ok_or_else(|| Error::entity_not_found(id.to_string()))
    }

    /// Returns a person.
    ///
    /// # Errors
    /// Returns an error if `id` does not belong to this store.
    pub fn person(&self, id: PersonId) -> Result<&Person> {
        self.people
            .get(id.index())
            .ok_or_else(|| Error::entity_not_found(id.to_string()))
    }

    /// Returns a gesture.
    ///
    /// # Errors
    /// Returns an error if `id` does not belong to this store.
    pub fn gesture(&self, id: GestureId) -> Result<&Gesture> {
        self.gestures
            .get(id.index())
            .ok_or_else(|| Error::entity_not_found(id.to_string()))
    }

    /// Returns a question.
    ///
    /// # Errors
    /// Returns an error if `id` does not belong to this store.
    pub fn question(&self, id: QuestionId) -> Result<&Question> {
        self.questions
            .get(id.index())
            .ok_or_else(|| Error::entity_not_found(id.to_string()))
    }

    /// Returns a view of any entity.
    ///
    /// # Errors
    /// Returns an error if `key` does not belong to this store.
    pub fn entity(&self, key: EntityKey) -> Result<EntityView<'_>> {
        EntityView::new(self, key)
    }

    /// Returns the room containing an entity, following ids.
    ///
    /// Objects resolve through their category's default location. People,
    /// gestures and questions have no room.
    #[must_use]
    pub fn room_of(&self, key: EntityKey) -> Option<RoomId> {
        match key {
            EntityKey::Room(id) => Some(id),
            EntityKey::Location(id) => self.location(id).ok().map(|l| l.room),
            EntityKey::Category(id) => {
                let category = self.category(id).ok()?;
                self.room_of(EntityKey::Location(category.default_location))
            }
            EntityKey::Object(id) => {
                let object = self.object(id).ok()?;
                self.room_of(EntityKey::Category(object.category))
            }
            EntityKey::Person(_) | EntityKey::Gesture(_) | EntityKey::Question(_) => None,
        }
    }

    /// Returns every entity key belonging to a pooled domain, in insertion order.
    ///
    /// The `location` domain yields rooms first, then locations. Pronoun and
    /// void domains have no entities.
    #[must_use]
    pub fn keys(&self, domain: Domain) -> Vec<EntityKey> {
        fn ids<T>(items: &[T], wrap: impl Fn(u32) -> EntityKey) -> Vec<EntityKey> {
            (0..items.len() as u32).map(wrap).collect()
        }

        match domain {
            Domain::Location => {
                let mut keys = ids(&self.rooms, |i| EntityKey::Room(RoomId(i)));
                keys.extend(ids(&self.locations, |i| EntityKey::Location(LocationId(i))));
                keys
            }
            Domain::Category => ids(&self.categories, |i| EntityKey::Category(CategoryId(i))),
            Domain::Object => ids(&self.objects, |i| EntityKey::Object(ObjectId(i))),
            Domain::Name => ids(&self.people, |i| EntityKey::Person(PersonId(i))),
            Domain::Gesture => ids(&self.gestures, |i| EntityKey::Gesture(GestureId(i))),
            Domain::Question => ids(&self.questions, |i| EntityKey::Question(QuestionId(i))),
            Domain::Pronoun | Domain::Void => Vec::new(),
        }
    }

    /// Returns the total number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
            + self.locations.len()
            + self.categories.len()
            + self.objects.len()
            + self.people.len()
            + self.gestures.len()
            + self.questions.len()
    }

    /// Returns true if the store holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
