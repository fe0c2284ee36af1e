use crate::priority as p;
use crate::range;
use crate::Category;

/// Resolves a render queue key to its category. Never fails: keys outside every known range
/// come back as `Category::Unknown`.
///
/// Checks run from the bottom of the key space upwards and the order matters. Each opaque
/// sub-range is tested on its own instead of `ALL_OPAQUE`, whose enclosing bounds also cover
/// the ray-traced point.
pub fn classify(key: i32) -> Category {
    if key == p::BACKGROUND {
        return Category::Background;
    }

    // Opaque
    if range::OPAQUE_NO_ALPHA_TEST.contains(key) || range::OPAQUE_ALPHA_TEST.contains(key) {
        return Category::Opaque;
    }
    if key == p::OPAQUE_RAY_TRACING {
        return Category::OpaqueRayTracing;
    }

    if range::AFTER_POSTPROCESS_OPAQUE.contains(key) {
        return Category::AfterPostProcessOpaque;
    }

    // Pre-refraction
    if range::PRE_REFRACTION_NO_RAY_TRACING.contains(key) {
        return Category::PreRefraction;
    }
    if key == p::PRE_REFRACTION_RAY_TRACING {
        return Category::PreRefractionRayTracing;
    }

    // Transparent
    if range::TRANSPARENT_NO_RAY_TRACING.contains(key) {
        return Category::Transparent;
    }
    if key == p::TRANSPARENT_RAY_TRACING || key == p::LEGACY_RAY_TRACING_TRANSPARENT {
        return Category::TransparentRayTracing;
    }

    // Low resolution transparent
    if range::LOW_TRANSPARENT_NO_RAY_TRACING.contains(key) {
        return Category::LowTransparent;
    }
    if key == p::LOW_TRANSPARENT_RAY_TRACING {
        return Category::LowTransparentRayTracing;
    }

    if range::AFTER_POSTPROCESS_TRANSPARENT.contains(key) {
        return Category::AfterPostprocessTransparent;
    }

    if key == p::OVERLAY {
        return Category::Overlay;
    }

    log::trace!("render queue {key} matches no category");
    Category::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(classify(p::BACKGROUND), Category::Background);
        assert_eq!(classify(p::OPAQUE + 50), Category::Opaque);
        assert_eq!(classify(p::OPAQUE_ALPHA_TEST), Category::Opaque);
        assert_eq!(classify(p::OPAQUE_LAST), Category::Opaque);
        assert_eq!(classify(p::OPAQUE_LAST + 1), Category::OpaqueRayTracing);
        assert_eq!(classify(p::AFTER_POSTPROCESS_OPAQUE), Category::AfterPostProcessOpaque);
        assert_eq!(classify(p::PRE_REFRACTION), Category::PreRefraction);
        assert_eq!(classify(2860), Category::PreRefractionRayTracing);
        assert_eq!(classify(p::TRANSPARENT), Category::Transparent);
        assert_eq!(classify(3110), Category::TransparentRayTracing);
        assert_eq!(classify(p::LOW_TRANSPARENT), Category::LowTransparent);
        assert_eq!(classify(3510), Category::LowTransparentRayTracing);
        assert_eq!(
            classify(p::AFTER_POSTPROCESS_TRANSPARENT),
            Category::AfterPostprocessTransparent
        );
        assert_eq!(classify(p::OVERLAY), Category::Overlay);
    }

    #[test]
    fn legacy_ray_tracing_key() {
        assert_eq!(classify(3900), Category::TransparentRayTracing);
        assert_eq!(classify(3899), Category::Unknown);
        assert_eq!(classify(3901), Category::Unknown);
    }

    #[test]
    fn gaps_are_unknown() {
        for key in [999, 2502, 2504, 2511, 2649, 2851, 2859, 2861, 2899, 3101, 3109, 3111, 3299,
            3501, 3511, 3599, 3801, 3999, 4001]
        {
            assert_eq!(classify(key), Category::Unknown, "{key}");
        }
    }

    #[test]
    fn out_of_domain_is_unknown() {
        for key in [i32::MIN, -1, 0, 5000, 5001, i32::MAX] {
            assert_eq!(classify(key), Category::Unknown, "{key}");
        }
    }

    #[test]
    fn agrees_with_category_table() {
        for key in range::ALL.lower - 100..=range::ALL.upper + 100 {
            let owner = Category::ALL
                .into_iter()
                .find(|c| c.ranges().iter().any(|r| r.contains(key)))
                .unwrap_or(Category::Unknown);
            assert_eq!(classify(key), owner, "{key}");
        }
    }
}
