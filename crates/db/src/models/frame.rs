//! Frame entity model and DTOs for the `frames` table.

use filmgrain_core::types::{DbId, Timestamp};
use filmgrain_core::visibility::ExplicitFlagged;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `frames` table.
///
/// `film_name` is a copy taken at creation; a later film rename does not
/// touch it. `display_order` is the owning film's frame_count at insert time
/// and is never renumbered when frames are deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Frame {
    pub id: DbId,
    pub film_id: DbId,
    pub film_name: String,
    pub image_url: String,
    pub is_explicit: bool,
    pub display_order: i32,
    pub uploaded_at: Timestamp,
}

impl ExplicitFlagged for Frame {
    fn is_explicit(&self) -> bool {
        self.is_explicit
    }
}

/// DTO for creating a new frame.
///
/// `film_name` and `display_order` are not part of the input -- the
/// repository derives both from the owning film inside the same transaction
/// that increments its frame count.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFrame {
    pub film_id: DbId,
    pub image_url: String,
    #[serde(default)]
    pub is_explicit: bool,
}
