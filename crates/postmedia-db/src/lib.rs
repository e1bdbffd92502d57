//! Postmedia DB Library
//!
//! Relational persistence of resource metadata records: the
//! `ResourceRepository` trait and its Postgres implementation.

pub mod repository;

pub use repository::{PgResourceRepository, ResourceRepository};
