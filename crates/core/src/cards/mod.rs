//! Cards module - payment card models.

mod cards_model;

pub use cards_model::{Card, CardClass, CardNetwork, CardUpdate, NewCard};
