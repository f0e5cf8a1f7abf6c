//! Domain types for the museum catalog.
//!
//! This module provides:
//! - Row identifiers: MuseumId, GalleryId, ExhibitId, ScheduleId
//! - Stored entity records and their writable field sets
//! - Field validation applied before writes

pub mod exhibit;
pub mod gallery;
pub mod museum;
pub mod primitives;
pub mod schedule;
pub mod validate;

pub use exhibit::{Exhibit, NewExhibit};
pub use gallery::{Gallery, NewGallery};
pub use museum::{Museum, NewMuseum};
pub use primitives::{ExhibitId, GalleryId, MuseumId, ScheduleId};
pub use schedule::{ExhibitSchedule, NewExhibitSchedule};
pub use validate::FieldError;
