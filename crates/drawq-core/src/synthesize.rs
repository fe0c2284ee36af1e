use crate::error::{Conversion, KeyspaceError};
use crate::priority as p;
use crate::Category;

/// Options for [`key_for`].
///
/// `offset` only applies to transparent categories and is not clamped here; pass it through
/// [`clamp_transparent_offset`](crate::clamp_transparent_offset) first.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct KeyParams {
    pub offset: i32,
    pub alpha_test: bool,
    pub ray_traced: bool,
}

impl KeyParams {
    #[inline]
    pub const fn new() -> Self {
        Self { offset: 0, alpha_test: false, ray_traced: false }
    }

    #[inline]
    pub const fn offset(self, offset: i32) -> Self {
        Self { offset, ..self }
    }

    #[inline]
    pub const fn alpha_test(self, alpha_test: bool) -> Self {
        Self { alpha_test, ..self }
    }

    #[inline]
    pub const fn ray_traced(self, ray_traced: bool) -> Self {
        Self { ray_traced, ..self }
    }
}

/// Canonical render queue key for `category`.
///
/// A ray-traced request wins over alpha test and offset. `Unknown` has no key and is
/// rejected, as is an offset that pushes the key past `i32`.
pub fn key_for(category: Category, params: KeyParams) -> Result<i32, KeyspaceError> {
    let KeyParams { offset, alpha_test, ray_traced } = params;
    let shifted = |anchor: i32| {
        anchor
            .checked_add(offset)
            .ok_or(KeyspaceError::OffsetOutOfRange { category, offset })
    };

    let key = match category {
        Category::Background => p::BACKGROUND,

        Category::Opaque | Category::OpaqueRayTracing => {
            if ray_traced {
                p::OPAQUE_RAY_TRACING
            } else if alpha_test {
                p::OPAQUE_ALPHA_TEST
            } else {
                p::OPAQUE
            }
        }

        Category::AfterPostProcessOpaque => {
            if alpha_test {
                p::AFTER_POSTPROCESS_OPAQUE_ALPHA_TEST
            } else {
                p::AFTER_POSTPROCESS_OPAQUE
            }
        }

        Category::PreRefraction | Category::PreRefractionRayTracing => {
            if ray_traced { p::PRE_REFRACTION_RAY_TRACING } else { shifted(p::PRE_REFRACTION)? }
        }

        Category::Transparent | Category::TransparentRayTracing => {
            if ray_traced { p::TRANSPARENT_RAY_TRACING } else { shifted(p::TRANSPARENT)? }
        }

        Category::LowTransparent | Category::LowTransparentRayTracing => {
            if ray_traced { p::LOW_TRANSPARENT_RAY_TRACING } else { shifted(p::LOW_TRANSPARENT)? }
        }

        Category::AfterPostprocessTransparent => shifted(p::AFTER_POSTPROCESS_TRANSPARENT)?,

        Category::Overlay => p::OVERLAY,

        Category::Unknown => return Err(KeyspaceError::unsupported(Conversion::Key, category)),
    };

    Ok(key)
}

impl Category {
    /// [`key_for`] with default params.
    pub fn default_key(self) -> Result<i32, KeyspaceError> {
        key_for(self, KeyParams::new())
    }
}
