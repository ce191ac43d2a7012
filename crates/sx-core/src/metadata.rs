//! Dataset metadata records read from the per-dataset JSON files.

use crate::error::{CoreError, CoreResult};
use crate::serde_helpers::syntool_datetime;
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Suffix appended to the name of the eastern half of a dataset that
/// crosses the antimeridian.
pub const XIDL_SUFFIX: &str = "_XIDLfix";

/// One dataset's metadata document.
///
/// Only the fields the exporter reads are declared; anything else in the
/// document is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Dataset name, primary key of its row
    pub dataset: String,

    #[serde(with = "syntool_datetime")]
    pub begin_datetime: NaiveDateTime,

    #[serde(with = "syntool_datetime")]
    pub end_datetime: NaiveDateTime,

    pub min_zoom_level: i64,

    pub max_zoom_level: i64,

    /// Kept as JSON numbers so integers stay integral; floats use
    /// serde_json's shortest round-trip form (`1e3` renders as `1000.0`)
    pub resolutions: Vec<serde_json::Number>,

    pub bbox_str: String,

    pub shape_str: String,

    /// WKT of the part west of the antimeridian
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w_bbox: Option<String>,

    /// WKT of the part east of the antimeridian
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_bbox: Option<String>,

    /// Product identifier, read from the first record of a run only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntool_id: Option<String>,

    /// Product type, read from the first record of a run only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
}

impl MetadataRecord {
    /// Load a record from a JSON file.
    ///
    /// Existence is checked before anything is read so that a missing input
    /// surfaces as [`CoreError::MissingInputFile`].
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::MissingInputFile {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| CoreError::MetadataParse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Western and eastern WKT when the dataset crosses the antimeridian.
    ///
    /// Detection relies only on both fields being present.
    pub fn antimeridian_split(&self) -> Option<(&str, &str)> {
        match (&self.w_bbox, &self.e_bbox) {
            (Some(west), Some(east)) => Some((west.as_str(), east.as_str())),
            _ => None,
        }
    }

    /// Name of the eastern companion row of a split dataset.
    pub fn xidl_dataset_name(&self) -> String {
        format!("{}{XIDL_SUFFIX}", self.dataset)
    }

    /// Whether begin and end are the same instant.
    pub fn has_degenerate_time_range(&self) -> bool {
        self.begin_datetime == self.end_datetime
    }

    /// Push `end_datetime` one second past `begin_datetime` when both are
    /// equal. Returns `true` when the record was modified.
    pub fn fix_time_range(&mut self) -> CoreResult<bool> {
        if !self.has_degenerate_time_range() {
            return Ok(false);
        }
        self.end_datetime = self
            .end_datetime
            .checked_add_signed(TimeDelta::seconds(1))
            .ok_or_else(|| CoreError::DatetimeOverflow {
                dataset: self.dataset.clone(),
            })?;
        Ok(true)
    }

    /// Resolutions joined with commas, in input order.
    pub fn resolutions_text(&self) -> String {
        self.resolutions
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod tests;
