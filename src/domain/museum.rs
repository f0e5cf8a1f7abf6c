//! Museum: the root of the catalog hierarchy.

use crate::domain::validate::{self, FieldError, LOCATION_MAX_CHARS, NAME_MAX_CHARS};
use crate::domain::MuseumId;
use serde::{Deserialize, Serialize};

/// A stored museum row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Museum {
    pub id: MuseumId,
    pub name: String,
    pub location: String,
    pub established_year: Option<i32>,
}

impl Museum {
    /// The writable fields of this row.
    pub fn fields(&self) -> NewMuseum {
        NewMuseum {
            name: self.name.clone(),
            location: self.location.clone(),
            established_year: self.established_year,
        }
    }
}

/// Field values for creating or fully replacing a museum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMuseum {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub established_year: Option<i32>,
}

impl NewMuseum {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        established_year: Option<i32>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            established_year,
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        validate::required_text("name", &self.name, NAME_MAX_CHARS)?;
        validate::required_text("location", &self.location, LOCATION_MAX_CHARS)
    }
}
