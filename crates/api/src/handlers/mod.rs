//! HTTP handlers, grouped by resource.

pub mod admin;
pub mod auth;
pub mod films;
pub mod frames;
pub mod settings;
pub mod uploads;

use serde::Deserialize;

use filmgrain_core::visibility::Visibility;

use crate::state::AppState;

/// Query parameters shared by listing endpoints.
///
/// `include_explicit` is deliberately a raw string: only the exact value
/// `"true"` opts into explicit content, anything else (including garbage)
/// hides it, mirroring the persisted-flag parsing rules.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    pub include_explicit: Option<String>,
}

/// Resolve the effective visibility for a listing request.
///
/// A request that carries `include_explicit` decides for itself; one that
/// does not falls back to the process-wide persisted toggle.
pub(crate) fn resolve_visibility(params: &ListingParams, state: &AppState) -> Visibility {
    match params.include_explicit.as_deref() {
        Some(raw) => Visibility::parse_stored(Some(raw)),
        None => state.visibility.read(),
    }
}
