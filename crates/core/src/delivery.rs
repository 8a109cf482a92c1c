//! Delivery URL optimisation for image-host assets.
//!
//! The image host returns a canonical URL for every upload. Before a record
//! stores it, the URL is rewritten to request the host's automatic quality
//! and format negotiation, so browsers receive WebP/AVIF at a sensible
//! compression level instead of the original bytes.

/// Transformation segment injected into every delivery URL.
pub const TRANSFORMATION: &str = "q_auto,f_auto";

/// Path marker after which the transformation segment is inserted.
const UPLOAD_MARKER: &str = "/upload/";

/// Rewrite an image-host delivery URL to request automatic quality/format.
///
/// Inserts [`TRANSFORMATION`] as a path segment immediately after the
/// `/upload/` marker. A URL without the marker is returned unchanged --
/// it is still fetchable, just unoptimised.
///
/// # Examples
///
/// ```
/// use filmgrain_core::delivery::optimize_delivery_url;
///
/// assert_eq!(
///     optimize_delivery_url("https://host/image/upload/v1/posters/abc.jpg"),
///     "https://host/image/upload/q_auto,f_auto/v1/posters/abc.jpg",
/// );
/// assert_eq!(
///     optimize_delivery_url("https://elsewhere/abc.jpg"),
///     "https://elsewhere/abc.jpg",
/// );
/// ```
pub fn optimize_delivery_url(url: &str) -> String {
    match url.find(UPLOAD_MARKER) {
        Some(pos) => {
            let insert_at = pos + UPLOAD_MARKER.len();
            let mut rewritten = String::with_capacity(url.len() + TRANSFORMATION.len() + 1);
            rewritten.push_str(&url[..insert_at]);
            rewritten.push_str(TRANSFORMATION);
            rewritten.push('/');
            rewritten.push_str(&url[insert_at..]);
            rewritten
        }
        None => url.to_string(),
    }
}
