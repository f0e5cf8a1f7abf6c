//! Exhibit: an object on display in a gallery.

use crate::domain::validate::{self, FieldError, NAME_MAX_CHARS};
use crate::domain::{ExhibitId, GalleryId};
use serde::{Deserialize, Serialize};

/// A stored exhibit row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibit {
    pub id: ExhibitId,
    pub name: String,
    pub description: Option<String>,
    pub year_created: Option<i32>,
    pub gallery_id: GalleryId,
}

impl Exhibit {
    pub fn fields(&self) -> NewExhibit {
        NewExhibit {
            name: self.name.clone(),
            description: self.description.clone(),
            year_created: self.year_created,
            gallery_id: self.gallery_id,
        }
    }
}

/// Field values for creating or fully replacing an exhibit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExhibit {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub year_created: Option<i32>,
    pub gallery_id: GalleryId,
}

impl NewExhibit {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        year_created: Option<i32>,
        gallery_id: GalleryId,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            year_created,
            gallery_id,
        }
    }

    /// Description is unbounded text; only the name is checked.
    pub fn validate(&self) -> Result<(), FieldError> {
        validate::required_text("name", &self.name, NAME_MAX_CHARS)
    }
}
