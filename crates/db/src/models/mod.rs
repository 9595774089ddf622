//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where the entity
//!   supports partial updates
//!
//! All wire-facing structs serialize with camelCase field names.

pub mod booking;
pub mod material;
pub mod request;
