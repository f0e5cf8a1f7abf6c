//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and migrations
//! - SQLite pragma configuration
//! - Repository layer for catalog CRUD, analytical queries and demo data

pub mod error;
pub mod migrations;
pub mod repo;

pub use error::RepoError;
pub use migrations::init_db;
pub use repo::{ExhibitScheduleRow, MuseumExhibitCount, MuseumGalleryRow, Repository, Timed};
