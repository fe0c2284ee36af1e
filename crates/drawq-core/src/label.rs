//! Human-readable queue labels such as `Transparent-20` or `Geometry+50`.
//!
//! Keys are written relative to the nearest engine base queue below them, except that every
//! transparent span is written relative to `Transparent` so artist offsets read naturally.

use crate::error::KeyspaceError;
use crate::priority::base;
use crate::range;

const BASES: [(&str, i32); 5] = [
    ("Background", base::BACKGROUND),
    ("Geometry", base::GEOMETRY),
    ("AlphaTest", base::ALPHA_TEST),
    ("Transparent", base::TRANSPARENT),
    ("Overlay", base::OVERLAY),
];

/// Label for `key`. A zero offset is written as the bare base name.
pub fn label(key: i32) -> String {
    let (name, anchor) = if range::ALL_TRANSPARENT.contains(key)
        || range::AFTER_POSTPROCESS_TRANSPARENT.contains(key)
        || range::LOW_TRANSPARENT.contains(key)
    {
        ("Transparent", base::TRANSPARENT)
    } else if key >= base::OVERLAY {
        ("Overlay", base::OVERLAY)
    } else if key >= base::ALPHA_TEST {
        ("AlphaTest", base::ALPHA_TEST)
    } else if key >= base::GEOMETRY {
        ("Geometry", base::GEOMETRY)
    } else {
        ("Background", base::BACKGROUND)
    };

    let offset = i64::from(key) - i64::from(anchor);
    if offset == 0 { name.to_owned() } else { format!("{name}{offset:+}") }
}

/// Reads a label back into a key.
///
/// Accepts `Base`, `Base+n`, `Base-n` for any engine base name, or a plain integer.
pub fn parse_label(text: &str) -> Result<i32, KeyspaceError> {
    let malformed = || KeyspaceError::MalformedLabel(text.to_owned());
    let text_trimmed = text.trim();

    if let Ok(key) = text_trimmed.parse::<i32>() {
        return Ok(key);
    }

    let split = text_trimmed.find(['+', '-']).unwrap_or(text_trimmed.len());
    let (name, rest) = text_trimmed.split_at(split);

    let anchor = BASES
        .iter()
        .find(|(base_name, _)| *base_name == name)
        .map(|&(_, anchor)| anchor)
        .ok_or_else(malformed)?;

    if rest.is_empty() {
        return Ok(anchor);
    }

    // `i32::from_str` accepts a leading sign, reject doubled signs like `+-5`.
    let digits = &rest[1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    // `label` writes the offset as `i64`; keys near `i32::MIN` sit below `Background` by more
    // than `i32` can hold.
    let offset: i64 = rest.parse().map_err(|_| malformed())?;
    offset
        .checked_add(i64::from(anchor))
        .and_then(|key| i32::try_from(key).ok())
        .ok_or_else(malformed)
}
