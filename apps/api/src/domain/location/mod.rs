pub mod entity;
pub mod errors;
pub mod ranges;
pub mod repository;
pub mod value_objects;
