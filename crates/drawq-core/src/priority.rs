//! Priority anchors.
//!
//! Anchor values are a compatibility contract: stored keys are interpreted against them, so
//! moving an anchor changes the meaning of existing content.
//!
//! Transparent categories own `anchor ± TRANSPARENT_PRIORITY_RANGE`. Their ray-traced sibling
//! sits 10 past the end of that span so it sorts right after it.

/// Engine base queues. `label` reports keys relative to these.
pub mod base {
    pub const BACKGROUND: i32 = 1000;
    pub const GEOMETRY: i32 = 2000;
    pub const ALPHA_TEST: i32 = 2450;
    pub const GEOMETRY_LAST: i32 = 2500;
    pub const TRANSPARENT: i32 = 3000;
    pub const OVERLAY: i32 = 4000;
}

/// Half-width of every transparent span; also the bound for artist offsets.
pub const TRANSPARENT_PRIORITY_RANGE: i32 = 100;

const RAY_TRACING_GAP: i32 = 10;

pub const BACKGROUND: i32 = base::BACKGROUND;

pub const OPAQUE: i32 = base::GEOMETRY;
pub const OPAQUE_ALPHA_TEST: i32 = base::ALPHA_TEST;
/// Must stay equal to the engine's last geometry queue; occlusion culling depends on it.
pub const OPAQUE_LAST: i32 = base::GEOMETRY_LAST;
pub const OPAQUE_RAY_TRACING: i32 = base::GEOMETRY_LAST + 1;

pub const AFTER_POSTPROCESS_OPAQUE: i32 = base::GEOMETRY_LAST + 5;
pub const AFTER_POSTPROCESS_OPAQUE_ALPHA_TEST: i32 = base::GEOMETRY_LAST + 10;

pub const PRE_REFRACTION: i32 = 2750;
pub const PRE_REFRACTION_FIRST: i32 = PRE_REFRACTION - TRANSPARENT_PRIORITY_RANGE;
pub const PRE_REFRACTION_LAST: i32 = PRE_REFRACTION + TRANSPARENT_PRIORITY_RANGE;
pub const PRE_REFRACTION_RAY_TRACING: i32 = PRE_REFRACTION_LAST + RAY_TRACING_GAP;

pub const TRANSPARENT: i32 = base::TRANSPARENT;
pub const TRANSPARENT_FIRST: i32 = TRANSPARENT - TRANSPARENT_PRIORITY_RANGE;
pub const TRANSPARENT_LAST: i32 = TRANSPARENT + TRANSPARENT_PRIORITY_RANGE;
pub const TRANSPARENT_RAY_TRACING: i32 = TRANSPARENT_LAST + RAY_TRACING_GAP;

pub const LOW_TRANSPARENT: i32 = 3400;
pub const LOW_TRANSPARENT_FIRST: i32 = LOW_TRANSPARENT - TRANSPARENT_PRIORITY_RANGE;
pub const LOW_TRANSPARENT_LAST: i32 = LOW_TRANSPARENT + TRANSPARENT_PRIORITY_RANGE;
pub const LOW_TRANSPARENT_RAY_TRACING: i32 = LOW_TRANSPARENT_LAST + RAY_TRACING_GAP;

pub const AFTER_POSTPROCESS_TRANSPARENT: i32 = 3700;
pub const AFTER_POSTPROCESS_TRANSPARENT_FIRST: i32 =
    AFTER_POSTPROCESS_TRANSPARENT - TRANSPARENT_PRIORITY_RANGE;
pub const AFTER_POSTPROCESS_TRANSPARENT_LAST: i32 =
    AFTER_POSTPROCESS_TRANSPARENT + TRANSPARENT_PRIORITY_RANGE;

/// Where ray-traced transparents used to live. Still read as `TransparentRayTracing`.
pub const LEGACY_RAY_TRACING_TRANSPARENT: i32 = 3900;

pub const OVERLAY: i32 = base::OVERLAY;
