//! Domain primitives shared by the storage and HTTP layers.

pub mod entity;
pub mod error;
pub mod payload;
pub mod types;
