//! Client for the external image-hosting endpoint.
//!
//! Converts a local file into a durable, publicly fetchable URL before any
//! record referencing it is created. Uploads are multipart POSTs carrying
//! the file, a fixed unsigned upload preset, and a target folder; the host
//! answers with JSON containing a secure URL, which is rewritten for
//! automatic quality/format delivery before being stored.

pub mod client;

pub use client::{ImageHostClient, ImageHostConfig, ImageHostError, UploadedImage};
