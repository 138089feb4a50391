//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full-record updates

pub mod course;
pub mod dashboard;
pub mod enrollment;
pub mod student;
pub mod user;
