pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use config::Config;
pub use db::{init_db, RepoError, Repository, Timed};
pub use domain::{
    Exhibit, ExhibitId, ExhibitSchedule, Gallery, GalleryId, Museum, MuseumId, NewExhibit,
    NewExhibitSchedule, NewGallery, NewMuseum, ScheduleId,
};
pub use error::AppError;
