//! Artist-facing queue choices.
//!
//! These are views over [`Category`] for authoring fields. The ray-traced bit is not part of
//! the view; it is carried separately and folded back in by `category`.

use crate::error::{Conversion, KeyspaceError};
use crate::Category;

/// Opaque queue choice.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum OpaqueQueue {
    #[default]
    Default,
    AfterPostProcessing,
}

/// Transparent queue choice.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TransparentQueue {
    BeforeRefraction,
    #[default]
    Default,
    LowResolution,
    AfterPostProcessing,
}

impl OpaqueQueue {
    pub fn category(self, ray_traced: bool) -> Category {
        match self {
            OpaqueQueue::Default if ray_traced => Category::OpaqueRayTracing,
            OpaqueQueue::Default => Category::Opaque,
            OpaqueQueue::AfterPostProcessing => Category::AfterPostProcessOpaque,
        }
    }
}

impl TryFrom<Category> for OpaqueQueue {
    type Error = KeyspaceError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        match category {
            Category::Opaque | Category::OpaqueRayTracing => Ok(OpaqueQueue::Default),
            Category::AfterPostProcessOpaque => Ok(OpaqueQueue::AfterPostProcessing),
            _ => Err(KeyspaceError::unsupported(Conversion::OpaqueQueue, category)),
        }
    }
}

impl TransparentQueue {
    pub fn category(self, ray_traced: bool) -> Category {
        match (self, ray_traced) {
            (TransparentQueue::BeforeRefraction, true) => Category::PreRefractionRayTracing,
            (TransparentQueue::BeforeRefraction, false) => Category::PreRefraction,
            (TransparentQueue::Default, true) => Category::TransparentRayTracing,
            (TransparentQueue::Default, false) => Category::Transparent,
            (TransparentQueue::LowResolution, true) => Category::LowTransparentRayTracing,
            (TransparentQueue::LowResolution, false) => Category::LowTransparent,
            // No ray-traced variant after post-processing.
            (TransparentQueue::AfterPostProcessing, _) => Category::AfterPostprocessTransparent,
        }
    }
}

impl TryFrom<Category> for TransparentQueue {
    type Error = KeyspaceError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        match category {
            Category::PreRefraction | Category::PreRefractionRayTracing => {
                Ok(TransparentQueue::BeforeRefraction)
            }
            Category::Transparent | Category::TransparentRayTracing => Ok(TransparentQueue::Default),
            Category::LowTransparent | Category::LowTransparentRayTracing => {
                Ok(TransparentQueue::LowResolution)
            }
            Category::AfterPostprocessTransparent => Ok(TransparentQueue::AfterPostProcessing),
            _ => Err(KeyspaceError::unsupported(Conversion::TransparentQueue, category)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPAQUE_VIEWS: [OpaqueQueue; 2] = [OpaqueQueue::Default, OpaqueQueue::AfterPostProcessing];
    const TRANSPARENT_VIEWS: [TransparentQueue; 4] = [
        TransparentQueue::BeforeRefraction,
        TransparentQueue::Default,
        TransparentQueue::LowResolution,
        TransparentQueue::AfterPostProcessing,
    ];

    #[test]
    fn opaque_view_round_trips() {
        for view in OPAQUE_VIEWS {
            for rt in [false, true] {
                assert_eq!(OpaqueQueue::try_from(view.category(rt)), Ok(view));
            }
        }
    }

    #[test]
    fn transparent_view_round_trips() {
        for view in TRANSPARENT_VIEWS {
            for rt in [false, true] {
                assert_eq!(TransparentQueue::try_from(view.category(rt)), Ok(view));
            }
        }
    }

    #[test]
    fn ray_traced_flag_is_folded_in() {
        assert_eq!(OpaqueQueue::Default.category(true), Category::OpaqueRayTracing);
        assert_eq!(OpaqueQueue::AfterPostProcessing.category(true), Category::AfterPostProcessOpaque);
        assert_eq!(TransparentQueue::LowResolution.category(true), Category::LowTransparentRayTracing);
        assert_eq!(
            TransparentQueue::AfterPostProcessing.category(true),
            Category::AfterPostprocessTransparent
        );
    }

    #[test]
    fn opaque_view_rejects_other_categories() {
        for c in [Category::Background, Category::Overlay, Category::Transparent, Category::Unknown] {
            assert_eq!(
                OpaqueQueue::try_from(c),
                Err(KeyspaceError::UnsupportedCategory { conversion: Conversion::OpaqueQueue, category: c })
            );
        }
    }

    #[test]
    fn transparent_view_rejects_other_categories() {
        for c in [
            Category::Background,
            Category::Overlay,
            Category::Opaque,
            Category::OpaqueRayTracing,
            Category::AfterPostProcessOpaque,
            Category::Unknown,
        ] {
            assert!(TransparentQueue::try_from(c).is_err(), "{c:?}");
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(OpaqueQueue::default().category(false), Category::Opaque);
        assert_eq!(TransparentQueue::default().category(false), Category::Transparent);
    }
}
