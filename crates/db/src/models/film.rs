//! Film entity model and DTOs for the `films` table.

use filmgrain_core::types::{DbId, Timestamp};
use filmgrain_core::visibility::ExplicitFlagged;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `films` table.
///
/// `frame_count` duplicates the number of frame rows referencing this film;
/// the frame repository keeps it in sync transactionally.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Film {
    pub id: DbId,
    pub name: String,
    pub letterboxd_link: String,
    pub letterboxd_rating: f64,
    pub poster_url: String,
    pub frame_count: i32,
    pub is_explicit: bool,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    pub genre: Option<Vec<String>>,
    pub cast_members: Option<Vec<String>>,
    pub plot: Option<String>,
    pub admin_name: Option<String>,
    pub admin_review: Option<String>,
    pub uploaded_at: Timestamp,
}

impl ExplicitFlagged for Film {
    fn is_explicit(&self) -> bool {
        self.is_explicit
    }
}

/// DTO for creating a new film.
///
/// Carries no `frame_count` or `uploaded_at` on purpose: both are assigned
/// server-side (0 and NOW respectively) regardless of what a caller sends.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilm {
    pub name: String,
    pub letterboxd_link: String,
    pub letterboxd_rating: f64,
    pub poster_url: String,
    #[serde(default)]
    pub is_explicit: bool,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    pub genre: Option<Vec<String>>,
    pub cast_members: Option<Vec<String>>,
    pub plot: Option<String>,
    pub admin_name: Option<String>,
    pub admin_review: Option<String>,
}

/// DTO for updating an existing film.
///
/// `None` means "not provided, keep the stored value". Any `Some` is written
/// through, including `Some("")`, `Some(vec![])`, and `Some(false)` -- an
/// explicitly empty value clears the field rather than being ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFilm {
    pub name: Option<String>,
    pub letterboxd_link: Option<String>,
    pub letterboxd_rating: Option<f64>,
    pub poster_url: Option<String>,
    pub is_explicit: Option<bool>,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    pub genre: Option<Vec<String>>,
    pub cast_members: Option<Vec<String>>,
    pub plot: Option<String>,
    pub admin_name: Option<String>,
    pub admin_review: Option<String>,
}
