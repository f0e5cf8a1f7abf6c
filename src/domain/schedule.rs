//! Exhibit schedule: a display window for an exhibit in a gallery.

use crate::domain::{ExhibitId, GalleryId, ScheduleId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage format for schedule dates. ISO-8601 keeps lexical and
/// chronological order identical, which the range query relies on.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A stored exhibit schedule row.
///
/// `gallery_id` is recorded independently of the exhibit's own gallery and
/// the two are not required to agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitSchedule {
    pub id: ScheduleId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub exhibit_id: ExhibitId,
    pub gallery_id: GalleryId,
}

impl ExhibitSchedule {
    pub fn fields(&self) -> NewExhibitSchedule {
        NewExhibitSchedule {
            start_date: self.start_date,
            end_date: self.end_date,
            exhibit_id: self.exhibit_id,
            gallery_id: self.gallery_id,
        }
    }
}

/// Field values for creating or fully replacing a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExhibitSchedule {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub exhibit_id: ExhibitId,
    pub gallery_id: GalleryId,
}

impl NewExhibitSchedule {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        exhibit_id: ExhibitId,
        gallery_id: GalleryId,
    ) -> Self {
        Self {
            start_date,
            end_date,
            exhibit_id,
            gallery_id,
        }
    }
}

/// Render a date in storage format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date from storage format.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}
