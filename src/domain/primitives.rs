//! Domain primitives: row identifiers for each catalog table.

use serde::{Deserialize, Serialize};

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wrap a raw primary key.
            pub fn new(id: i64) -> Self {
                $name(id)
            }

            /// Get the underlying primary key.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

row_id!(
    /// Primary key of a `museum` row.
    MuseumId
);
row_id!(
    /// Primary key of a `gallery` row.
    GalleryId
);
row_id!(
    /// Primary key of an `exhibit` row.
    ExhibitId
);
row_id!(
    /// Primary key of an `exhibit_schedule` row.
    ScheduleId
);
