//! Arena storage for the entities wildcards resolve to.
//!
//! This crate provides:
//! - [`EntityStore`] - Owns every room, location, category, object, person,
//!   gesture and question of a data set
//! - [`EntityKey`] - A typed index into the store
//! - [`EntityView`] - A borrowed view implementing [`taskgen_foundation::Entity`]
//!
//! Entities refer to each other by id (a location names its room, an object its
//! category), never by pointer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod model;
pub mod store;
pub mod view;

pub use entity::{
    CategoryId, EntityKey, GestureId, LocationId, ObjectId, PersonId, QuestionId, RoomId,
};
pub use model::{Attributes, Category, Gesture, Location, Object, ObjectType, Person, Question, Room};
pub use store::EntityStore;
pub use view::EntityView;
