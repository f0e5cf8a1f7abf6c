//! Gallery: a room or wing belonging to one museum.

use crate::domain::validate::{self, FieldError, NAME_MAX_CHARS, THEME_MAX_CHARS};
use crate::domain::{GalleryId, MuseumId};
use serde::{Deserialize, Serialize};

/// A stored gallery row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    pub id: GalleryId,
    pub name: String,
    pub floor: Option<i32>,
    pub theme: Option<String>,
    pub museum_id: MuseumId,
}

impl Gallery {
    pub fn fields(&self) -> NewGallery {
        NewGallery {
            name: self.name.clone(),
            floor: self.floor,
            theme: self.theme.clone(),
            museum_id: self.museum_id,
        }
    }
}

/// Field values for creating or fully replacing a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGallery {
    pub name: String,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub theme: Option<String>,
    pub museum_id: MuseumId,
}

impl NewGallery {
    pub fn new(
        name: impl Into<String>,
        floor: Option<i32>,
        theme: Option<String>,
        museum_id: MuseumId,
    ) -> Self {
        Self {
            name: name.into(),
            floor,
            theme,
            museum_id,
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        validate::required_text("name", &self.name, NAME_MAX_CHARS)?;
        validate::optional_text("theme", self.theme.as_deref(), THEME_MAX_CHARS)
    }
}
