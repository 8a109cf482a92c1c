//! Domain layer for the filmgrain gallery.
//!
//! Pure types and logic shared by the database, image-host, and API crates:
//! the error taxonomy, the explicit-content visibility filter, the delivery
//! URL rewrite, and input validation. Nothing in here talks to the network
//! or the database.

pub mod delivery;
pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
pub mod visibility;
