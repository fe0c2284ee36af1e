use crate::priority::{self as p, TRANSPARENT_PRIORITY_RANGE};

/// Closed interval `[lower, upper]` of render queue keys.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct KeyRange {
    pub lower: i32,
    pub upper: i32,
}

impl KeyRange {
    #[inline]
    pub const fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    /// Single-key range.
    #[inline]
    pub const fn point(key: i32) -> Self {
        Self { lower: key, upper: key }
    }

    /// Inclusive on both ends.
    #[inline]
    pub const fn contains(self, key: i32) -> bool {
        self.lower <= key && key <= self.upper
    }

    /// Forces `key` into `[lower, upper]`.
    #[inline]
    pub fn clamp(self, key: i32) -> i32 {
        key.max(self.lower).min(self.upper)
    }

    #[inline]
    pub const fn is_point(self) -> bool {
        self.lower == self.upper
    }

    #[inline]
    pub const fn overlaps(self, other: KeyRange) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    #[cfg(test)]
    pub(crate) fn keys(self) -> impl Iterator<Item = i32> {
        self.lower..=self.upper
    }
}

/// Forces an artist priority offset into `[-100, 100]`.
#[inline]
pub fn clamp_transparent_offset(offset: i32) -> i32 {
    offset.clamp(-TRANSPARENT_PRIORITY_RANGE, TRANSPARENT_PRIORITY_RANGE)
}

pub const OPAQUE_NO_ALPHA_TEST: KeyRange = KeyRange::new(p::BACKGROUND, p::OPAQUE_ALPHA_TEST - 1);
pub const OPAQUE_ALPHA_TEST: KeyRange = KeyRange::new(p::OPAQUE_ALPHA_TEST, p::OPAQUE_LAST);
pub const OPAQUE_RAY_TRACING: KeyRange = KeyRange::point(p::OPAQUE_RAY_TRACING);
/// Enclosing bounds only. Not every key inside belongs to `Opaque`, see `classify`.
pub const ALL_OPAQUE: KeyRange = KeyRange::new(p::BACKGROUND, p::OPAQUE_RAY_TRACING);

pub const AFTER_POSTPROCESS_OPAQUE: KeyRange =
    KeyRange::new(p::AFTER_POSTPROCESS_OPAQUE, p::AFTER_POSTPROCESS_OPAQUE_ALPHA_TEST);

pub const PRE_REFRACTION: KeyRange =
    KeyRange::new(p::PRE_REFRACTION_FIRST, p::PRE_REFRACTION_RAY_TRACING);
pub const PRE_REFRACTION_NO_RAY_TRACING: KeyRange =
    KeyRange::new(p::PRE_REFRACTION_FIRST, p::PRE_REFRACTION_LAST);
pub const PRE_REFRACTION_RAY_TRACING: KeyRange = KeyRange::point(p::PRE_REFRACTION_RAY_TRACING);

pub const TRANSPARENT: KeyRange = KeyRange::new(p::TRANSPARENT_FIRST, p::TRANSPARENT_RAY_TRACING);
pub const TRANSPARENT_NO_RAY_TRACING: KeyRange =
    KeyRange::new(p::TRANSPARENT_FIRST, p::TRANSPARENT_LAST);
pub const TRANSPARENT_RAY_TRACING: KeyRange = KeyRange::point(p::TRANSPARENT_RAY_TRACING);

pub const LOW_TRANSPARENT: KeyRange =
    KeyRange::new(p::LOW_TRANSPARENT_FIRST, p::LOW_TRANSPARENT_RAY_TRACING);
pub const LOW_TRANSPARENT_NO_RAY_TRACING: KeyRange =
    KeyRange::new(p::LOW_TRANSPARENT_FIRST, p::LOW_TRANSPARENT_LAST);
pub const LOW_TRANSPARENT_RAY_TRACING: KeyRange = KeyRange::point(p::LOW_TRANSPARENT_RAY_TRACING);

/// Enclosing bounds of pre-refraction through transparent, gaps included.
pub const ALL_TRANSPARENT: KeyRange =
    KeyRange::new(p::PRE_REFRACTION_FIRST, p::TRANSPARENT_RAY_TRACING);
/// `ALL_TRANSPARENT` extended through the low resolution queue, gaps included.
pub const ALL_TRANSPARENT_WITH_LOW_RES: KeyRange =
    KeyRange::new(p::PRE_REFRACTION_FIRST, p::LOW_TRANSPARENT_RAY_TRACING);

pub const AFTER_POSTPROCESS_TRANSPARENT: KeyRange = KeyRange::new(
    p::AFTER_POSTPROCESS_TRANSPARENT_FIRST,
    p::AFTER_POSTPROCESS_TRANSPARENT_LAST,
);

/// Every legal render queue key.
pub const ALL: KeyRange = KeyRange::new(0, 5000);

#[cfg(test)]
mod tests {
    use super::*;

    fn every_named_range() -> [KeyRange; 19] {
        [
            OPAQUE_NO_ALPHA_TEST,
            OPAQUE_ALPHA_TEST,
            OPAQUE_RAY_TRACING,
            ALL_OPAQUE,
            AFTER_POSTPROCESS_OPAQUE,
            PRE_REFRACTION,
            PRE_REFRACTION_NO_RAY_TRACING,
            PRE_REFRACTION_RAY_TRACING,
            TRANSPARENT,
            TRANSPARENT_NO_RAY_TRACING,
            TRANSPARENT_RAY_TRACING,
            LOW_TRANSPARENT,
            LOW_TRANSPARENT_NO_RAY_TRACING,
            LOW_TRANSPARENT_RAY_TRACING,
            ALL_TRANSPARENT,
            ALL_TRANSPARENT_WITH_LOW_RES,
            AFTER_POSTPROCESS_TRANSPARENT,
            ALL,
            KeyRange::point(-7),
        ]
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        for r in every_named_range() {
            assert!(r.contains(r.lower), "{r:?}");
            assert!(r.contains(r.upper), "{r:?}");
            assert!(!r.contains(r.lower - 1), "{r:?}");
            assert!(!r.contains(r.upper + 1), "{r:?}");
        }
    }

    #[test]
    fn contains_every_interior_key() {
        for r in every_named_range() {
            assert!(r.keys().all(|k| r.contains(k)), "{r:?}");
        }
    }

    #[test]
    fn transparent_spans_are_two_hundred_wide() {
        for r in [
            PRE_REFRACTION_NO_RAY_TRACING,
            TRANSPARENT_NO_RAY_TRACING,
            LOW_TRANSPARENT_NO_RAY_TRACING,
            AFTER_POSTPROCESS_TRANSPARENT,
        ] {
            assert_eq!(r.upper - r.lower, 2 * TRANSPARENT_PRIORITY_RANGE, "{r:?}");
        }
    }

    #[test]
    fn ray_tracing_points_follow_their_sibling() {
        assert_eq!(PRE_REFRACTION_RAY_TRACING.lower, PRE_REFRACTION_NO_RAY_TRACING.upper + 10);
        assert_eq!(TRANSPARENT_RAY_TRACING.lower, TRANSPARENT_NO_RAY_TRACING.upper + 10);
        assert_eq!(LOW_TRANSPARENT_RAY_TRACING.lower, LOW_TRANSPARENT_NO_RAY_TRACING.upper + 10);
        assert_eq!(OPAQUE_RAY_TRACING.lower, OPAQUE_ALPHA_TEST.upper + 1);
        assert!(OPAQUE_RAY_TRACING.is_point());
    }

    #[test]
    fn composite_ranges_enclose_their_parts() {
        for r in [OPAQUE_NO_ALPHA_TEST, OPAQUE_ALPHA_TEST, OPAQUE_RAY_TRACING] {
            assert!(ALL_OPAQUE.contains(r.lower) && ALL_OPAQUE.contains(r.upper), "{r:?}");
        }
        for r in [PRE_REFRACTION, TRANSPARENT] {
            assert!(ALL_TRANSPARENT.contains(r.lower) && ALL_TRANSPARENT.contains(r.upper));
        }
        assert!(ALL_TRANSPARENT_WITH_LOW_RES.contains(LOW_TRANSPARENT.upper));
        assert!(!ALL_TRANSPARENT.contains(LOW_TRANSPARENT.lower));
    }

    // ── clamp ─────────────────────────────────────────────────────────────

    #[test]
    fn clamp_lands_inside_and_is_idempotent() {
        for r in every_named_range() {
            for v in [i32::MIN, -1, 0, r.lower - 1, r.lower, r.upper, r.upper + 1, 9999, i32::MAX] {
                let c = r.clamp(v);
                assert!(r.contains(c), "{r:?} {v}");
                assert_eq!(r.clamp(c), c, "{r:?} {v}");
            }
        }
    }

    #[test]
    fn clamp_is_identity_inside() {
        assert_eq!(TRANSPARENT.clamp(3050), 3050);
        assert_eq!(TRANSPARENT.clamp(2000), TRANSPARENT.lower);
        assert_eq!(TRANSPARENT.clamp(4000), TRANSPARENT.upper);
    }

    #[test]
    fn clamp_transparent_offset_bounds() {
        for v in [i32::MIN, -101, 101, i32::MAX] {
            let c = clamp_transparent_offset(v);
            assert!((-100..=100).contains(&c));
            assert_eq!(clamp_transparent_offset(c), c);
        }
        assert_eq!(clamp_transparent_offset(-500), -100);
        assert_eq!(clamp_transparent_offset(500), 100);
        assert!((-100..=100).all(|v| clamp_transparent_offset(v) == v));
    }

    // ── overlaps ──────────────────────────────────────────────────────────

    #[test]
    fn overlaps_touching_and_disjoint() {
        let a = KeyRange::new(0, 10);
        assert!(a.overlaps(KeyRange::new(10, 20)));
        assert!(a.overlaps(KeyRange::point(5)));
        assert!(!a.overlaps(KeyRange::new(11, 20)));
        assert!(!KeyRange::new(11, 20).overlaps(a));
    }
}
