//! Field validators.
//!
//! Each validator checks a single candidate value and either hands it back
//! unchanged or rejects it. `None` stands for an absent value; whether absence
//! is acceptable depends on the field. Length, shape and marker rules are
//! declared with `garde` on single-field wrappers below.

use garde::Validate;

use crate::domain::Category;
use crate::error::ValidationError;

/// Substrings one of which must appear in every post title (case-insensitive).
pub const CLICKBAIT_MARKERS: [&str; 4] = ["won't believe", "secret", "top", "guess"];

/// Minimum post content length, in characters.
pub const CONTENT_MIN_CHARS: usize = 250;

/// Maximum post summary length, in characters.
pub const SUMMARY_MAX_CHARS: usize = 250;

/// Exact number of digits in a phone number.
pub const PHONE_NUMBER_DIGITS: usize = 10;

#[derive(Validate)]
#[garde(transparent)]
struct PhoneNumber<'a>(#[garde(pattern(r"^[0-9]{10}$"))] &'a str);

#[derive(Validate)]
#[garde(transparent)]
struct Title<'a>(#[garde(custom(has_clickbait_marker))] &'a str);

#[derive(Validate)]
#[garde(transparent)]
struct Content<'a>(#[garde(length(chars, min = 250))] &'a str);

#[derive(Validate)]
#[garde(transparent)]
struct Summary<'a>(#[garde(length(chars, max = 250))] &'a str);

fn has_clickbait_marker(value: &str, _ctx: &()) -> garde::Result {
    let lower = value.to_lowercase();
    if CLICKBAIT_MARKERS.iter().any(|marker| lower.contains(marker)) {
        Ok(())
    } else {
        Err(garde::Error::new("title has no clickbait marker"))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Author name: required and not blank. Uniqueness is checked against storage
/// by [`crate::AuthorService`].
pub fn author_name(value: Option<&str>) -> Result<&str, ValidationError> {
    match value {
        Some(name) if !is_blank(name) => Ok(name),
        _ => Err(ValidationError::MissingName),
    }
}

/// Phone number: optional, otherwise exactly ten ASCII digits.
pub fn phone_number(value: Option<&str>) -> Result<Option<&str>, ValidationError> {
    let Some(phone) = value else {
        return Ok(None);
    };

    PhoneNumber(phone)
        .validate()
        .map_err(|_| ValidationError::InvalidPhoneNumber)?;
    Ok(Some(phone))
}

/// Post title: required, not blank, and must contain a clickbait marker.
pub fn post_title(value: Option<&str>) -> Result<&str, ValidationError> {
    let title = match value {
        Some(title) if !is_blank(title) => title,
        _ => return Err(ValidationError::MissingTitle),
    };

    Title(title)
        .validate()
        .map_err(|_| ValidationError::NotClickbait)?;
    Ok(title)
}

/// Post content: required, at least [`CONTENT_MIN_CHARS`] characters.
pub fn post_content(value: Option<&str>) -> Result<&str, ValidationError> {
    let content = value.ok_or(ValidationError::ContentTooShort)?;

    Content(content)
        .validate()
        .map_err(|_| ValidationError::ContentTooShort)?;
    Ok(content)
}

/// Post summary: optional, at most [`SUMMARY_MAX_CHARS`] characters.
pub fn post_summary(value: Option<&str>) -> Result<Option<&str>, ValidationError> {
    if let Some(summary) = value {
        Summary(summary)
            .validate()
            .map_err(|_| ValidationError::SummaryTooLong)?;
    }
    Ok(value)
}

/// Post category: exactly `Fiction` or `Non-Fiction`.
pub fn post_category(value: Option<&str>) -> Result<Category, ValidationError> {
    value
        .ok_or(ValidationError::InvalidCategory)?
        .parse()
}
