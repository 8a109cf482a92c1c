//! Input validation for admin write flows.
//!
//! All checks run before any store or network call, so a malformed form
//! submission never produces a partial record.

use crate::error::CoreError;

/// Review-site ratings are entered on a 0-10 scale (the UI renders 0-5).
pub const RATING_MAX: f64 = 10.0;

/// Validate the fields required to create a film.
///
/// The poster URL is the delivery URL produced by the uploader; a film is
/// never created without one.
pub fn validate_new_film(
    name: &str,
    letterboxd_link: &str,
    letterboxd_rating: f64,
    poster_url: &str,
) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Film name is required".into()));
    }
    if letterboxd_link.trim().is_empty() {
        return Err(CoreError::Validation("Letterboxd link is required".into()));
    }
    validate_rating(letterboxd_rating)?;
    if poster_url.trim().is_empty() {
        return Err(CoreError::Validation("Poster image is required".into()));
    }
    Ok(())
}

/// Validate a rating value is within the allowed range [0, 10].
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if !rating.is_finite() || !(0.0..=RATING_MAX).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between 0 and {RATING_MAX}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn valid_film_passes() {
        let result = validate_new_film(
            "In the Mood for Love",
            "https://letterboxd.com/film/in-the-mood-for-love/",
            9.2,
            "https://host/upload/q_auto,f_auto/posters/itmfl.jpg",
        );
        assert!(result.is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = validate_new_film("   ", "https://letterboxd.com/x", 5.0, "https://p");
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn missing_poster_is_rejected() {
        let result = validate_new_film("Name", "https://letterboxd.com/x", 5.0, "");
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(10.0).is_ok());
        assert!(validate_rating(10.1).is_err());
        assert!(validate_rating(-0.5).is_err());
        assert!(validate_rating(f64::NAN).is_err());
    }

}
