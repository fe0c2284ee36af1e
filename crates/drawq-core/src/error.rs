use std::fmt;

use crate::Category;

/// Conversion that rejected a category.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Conversion {
    /// Category -> key synthesis.
    Key,
    TransparentEquivalent,
    OpaqueEquivalent,
    OpaqueQueue,
    TransparentQueue,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Conversion::Key => "key synthesis",
            Conversion::TransparentEquivalent => "transparent equivalent",
            Conversion::OpaqueEquivalent => "opaque equivalent",
            Conversion::OpaqueQueue => "opaque queue view",
            Conversion::TransparentQueue => "transparent queue view",
        };
        f.write_str(s)
    }
}

/// Errors produced by the key space.
///
/// `UnsupportedCategory` is a caller bug: the category has no mapping for the requested
/// conversion. It is never coerced to a default, a wrong sort key is worse than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyspaceError {
    UnsupportedCategory {
        conversion: Conversion,
        category: Category,
    },
    /// `anchor + offset` does not fit in an `i32`.
    OffsetOutOfRange {
        category: Category,
        offset: i32,
    },
    /// A queue label that `parse_label` could not read.
    MalformedLabel(String),
}

impl KeyspaceError {
    pub(crate) fn unsupported(conversion: Conversion, category: Category) -> Self {
        log::debug!("rejected {category:?} for {conversion}");
        Self::UnsupportedCategory { conversion, category }
    }
}

impl fmt::Display for KeyspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyspaceError::UnsupportedCategory { conversion, category } => {
                write!(f, "category {category:?} has no {conversion}")
            }
            KeyspaceError::OffsetOutOfRange { category, offset } => {
                write!(f, "offset {offset} overflows the key of {category:?}")
            }
            KeyspaceError::MalformedLabel(label) => {
                write!(f, "malformed render queue label: {label:?}")
            }
        }
    }
}

impl std::error::Error for KeyspaceError {}
