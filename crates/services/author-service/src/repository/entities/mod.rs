//! SeaORM entities.

pub mod author;
