use crate::error::{Conversion, KeyspaceError};
use crate::priority as p;
use crate::range::{self, KeyRange};

/// Render pass a queue key belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Category {
    Background,

    Opaque,
    AfterPostProcessOpaque,
    OpaqueRayTracing,

    PreRefraction,
    PreRefractionRayTracing,

    Transparent,
    TransparentRayTracing,

    LowTransparent,
    LowTransparentRayTracing,

    AfterPostprocessTransparent,

    Overlay,

    /// Key outside every known range.
    Unknown,
}

// Keys that `classify` resolves to each category. Opaque starts one past Background because
// the Background anchor is checked first and shadows the bottom of the opaque range.
static BACKGROUND_KEYS: [KeyRange; 1] = [KeyRange::point(p::BACKGROUND)];
static OPAQUE_KEYS: [KeyRange; 1] = [KeyRange::new(p::BACKGROUND + 1, p::OPAQUE_LAST)];
static OPAQUE_RAY_TRACING_KEYS: [KeyRange; 1] = [range::OPAQUE_RAY_TRACING];
static AFTER_POSTPROCESS_OPAQUE_KEYS: [KeyRange; 1] = [range::AFTER_POSTPROCESS_OPAQUE];
static PRE_REFRACTION_KEYS: [KeyRange; 1] = [range::PRE_REFRACTION_NO_RAY_TRACING];
static PRE_REFRACTION_RAY_TRACING_KEYS: [KeyRange; 1] = [range::PRE_REFRACTION_RAY_TRACING];
static TRANSPARENT_KEYS: [KeyRange; 1] = [range::TRANSPARENT_NO_RAY_TRACING];
static TRANSPARENT_RAY_TRACING_KEYS: [KeyRange; 2] = [
    range::TRANSPARENT_RAY_TRACING,
    KeyRange::point(p::LEGACY_RAY_TRACING_TRANSPARENT),
];
static LOW_TRANSPARENT_KEYS: [KeyRange; 1] = [range::LOW_TRANSPARENT_NO_RAY_TRACING];
static LOW_TRANSPARENT_RAY_TRACING_KEYS: [KeyRange; 1] = [range::LOW_TRANSPARENT_RAY_TRACING];
static AFTER_POSTPROCESS_TRANSPARENT_KEYS: [KeyRange; 1] = [range::AFTER_POSTPROCESS_TRANSPARENT];
static OVERLAY_KEYS: [KeyRange; 1] = [KeyRange::point(p::OVERLAY)];

impl Category {
    /// Every category, in key order.
    pub const ALL: [Category; 13] = [
        Category::Background,
        Category::Opaque,
        Category::OpaqueRayTracing,
        Category::AfterPostProcessOpaque,
        Category::PreRefraction,
        Category::PreRefractionRayTracing,
        Category::Transparent,
        Category::TransparentRayTracing,
        Category::LowTransparent,
        Category::LowTransparentRayTracing,
        Category::AfterPostprocessTransparent,
        Category::Overlay,
        Category::Unknown,
    ];

    /// Keys that classify to this category. Empty for `Unknown`.
    pub fn ranges(self) -> &'static [KeyRange] {
        match self {
            Category::Background => &BACKGROUND_KEYS,
            Category::Opaque => &OPAQUE_KEYS,
            Category::OpaqueRayTracing => &OPAQUE_RAY_TRACING_KEYS,
            Category::AfterPostProcessOpaque => &AFTER_POSTPROCESS_OPAQUE_KEYS,
            Category::PreRefraction => &PRE_REFRACTION_KEYS,
            Category::PreRefractionRayTracing => &PRE_REFRACTION_RAY_TRACING_KEYS,
            Category::Transparent => &TRANSPARENT_KEYS,
            Category::TransparentRayTracing => &TRANSPARENT_RAY_TRACING_KEYS,
            Category::LowTransparent => &LOW_TRANSPARENT_KEYS,
            Category::LowTransparentRayTracing => &LOW_TRANSPARENT_RAY_TRACING_KEYS,
            Category::AfterPostprocessTransparent => &AFTER_POSTPROCESS_TRANSPARENT_KEYS,
            Category::Overlay => &OVERLAY_KEYS,
            Category::Unknown => &[],
        }
    }

    pub fn is_ray_traced(self) -> bool {
        matches!(
            self,
            Category::OpaqueRayTracing
                | Category::PreRefractionRayTracing
                | Category::TransparentRayTracing
                | Category::LowTransparentRayTracing
        )
    }

    /// Same pass in the transparent domain.
    ///
    /// Transparent categories map to themselves. Background and Overlay have no transparent
    /// counterpart.
    pub fn transparent_equivalent(self) -> Result<Category, KeyspaceError> {
        match self {
            Category::Background | Category::Overlay => {
                Err(KeyspaceError::unsupported(Conversion::TransparentEquivalent, self))
            }

            Category::Opaque => Ok(Category::Transparent),
            Category::OpaqueRayTracing => Ok(Category::TransparentRayTracing),
            Category::AfterPostProcessOpaque => Ok(Category::AfterPostprocessTransparent),

            Category::PreRefraction
            | Category::PreRefractionRayTracing
            | Category::Transparent
            | Category::TransparentRayTracing
            | Category::LowTransparent
            | Category::LowTransparentRayTracing
            | Category::AfterPostprocessTransparent
            | Category::Unknown => Ok(self),
        }
    }

    /// Same pass in the opaque domain.
    ///
    /// Opaque categories map to themselves. Background and Overlay have no opaque counterpart.
    pub fn opaque_equivalent(self) -> Result<Category, KeyspaceError> {
        match self {
            Category::Background | Category::Overlay => {
                Err(KeyspaceError::unsupported(Conversion::OpaqueEquivalent, self))
            }

            Category::PreRefraction | Category::Transparent | Category::LowTransparent => {
                Ok(Category::Opaque)
            }
            Category::PreRefractionRayTracing
            | Category::TransparentRayTracing
            | Category::LowTransparentRayTracing => Ok(Category::OpaqueRayTracing),
            Category::AfterPostprocessTransparent => Ok(Category::AfterPostProcessOpaque),

            Category::Opaque
            | Category::OpaqueRayTracing
            | Category::AfterPostProcessOpaque
            | Category::Unknown => Ok(self),
        }
    }
}
