//! Pure domain logic for the registrar service.
//!
//! No I/O lives here: status vocabularies, field bounds, draft validation,
//! and pagination arithmetic, all testable without a database.

pub mod course;
pub mod draft;
pub mod enrollment;
pub mod error;
pub mod pagination;
pub mod student;
pub mod types;
