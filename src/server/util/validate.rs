//! Field validators shared by the payload-to-parameter conversions.
//!
//! Each helper records its failures in a `ValidationErrors` under the field name and
//! returns the cleaned value when the field is acceptable, so a conversion can check
//! every field before deciding whether the payload is valid.

use url::Url;

use crate::server::error::validation::ValidationErrors;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const INVALID_URL: &str = "Enter a valid URL.";

fn too_long(max_len: usize) -> String {
    format!("Ensure this field has no more than {} characters.", max_len)
}

/// A required, non-blank string of at most `max_len` characters.
pub fn required_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    let Some(value) = value else {
        errors.add(field, REQUIRED);
        return None;
    };

    if value.trim().is_empty() {
        errors.add(field, BLANK);
        return None;
    }

    if value.chars().count() > max_len {
        errors.add(field, too_long(max_len));
        return None;
    }

    Some(value)
}

/// An optional string of at most `max_len` characters; blank is treated as absent.
pub fn optional_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    let value = value.filter(|v| !v.trim().is_empty())?;

    if value.chars().count() > max_len {
        errors.add(field, too_long(max_len));
        return None;
    }

    Some(value)
}

/// An optional absolute http(s) URL; blank is treated as absent.
pub fn optional_url(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    let value = value.filter(|v| !v.trim().is_empty())?;

    match Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Some(value),
        _ => {
            errors.add(field, INVALID_URL);
            None
        }
    }
}

/// A required integer that must be non-negative and fit in an `i32`.
pub fn non_negative_int(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<i64>,
) -> Option<i32> {
    let Some(value) = value else {
        errors.add(field, REQUIRED);
        return None;
    };

    if value < 0 {
        errors.add(field, "Ensure this value is greater than or equal to 0.");
        return None;
    }

    match i32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            errors.add(
                field,
                format!("Ensure this value is less than or equal to {}.", i32::MAX),
            );
            None
        }
    }
}

/// Removes repeated ids while keeping first-seen order.
pub fn dedup_ids(ids: Vec<i32>) -> Vec<i32> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
