use std::ops::BitOr;

use crate::sink::{DebugDisplaySink, FullScreenDebugMode, LightingDebugMode};

/// Shared material property to output.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum MaterialProperty {
    #[default]
    None,
    Albedo,
    Normal,
    Smoothness,
    AmbientOcclusion,
    Metal,
    Specular,
    Alpha,
}

/// Lighting component to output.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LightingProperty {
    #[default]
    None,
    DiffuseOnly,
    SpecularOnly,
}

impl LightingProperty {
    const DIFFUSE_BIT: u8 = 1 << 0;
    const SPECULAR_BIT: u8 = 1 << 1;

    /// Reads the 2-bit flag form. Diffuse and specular together is not a valid selection and
    /// reads as `None`, like any other value.
    pub fn from_bits(bits: u8) -> Self {
        match bits {
            Self::DIFFUSE_BIT => LightingProperty::DiffuseOnly,
            Self::SPECULAR_BIT => LightingProperty::SpecularOnly,
            _ => LightingProperty::None,
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            LightingProperty::None => 0,
            LightingProperty::DiffuseOnly => Self::DIFFUSE_BIT,
            LightingProperty::SpecularOnly => Self::SPECULAR_BIT,
        }
    }
}

/// Debug output that replaces the whole frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DebugFullScreen {
    #[default]
    None,
    Depth,
    ScreenSpaceAmbientOcclusion,
    MotionVectors,
}

/// Set of light types that contribute to the output. Empty means no filtering.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct LightFilter(u32);

impl LightFilter {
    pub const NONE: Self = Self(0);
    pub const DIRECTIONAL: Self = Self(1 << 0);
    pub const PUNCTUAL: Self = Self(1 << 1);
    pub const AREA: Self = Self(1 << 2);
    pub const REFLECTION_PROBE: Self = Self(1 << 3);
    pub const PLANAR_PROBE: Self = Self(1 << 4);

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LightFilter {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// What an AOV output pass captures.
///
/// Built by value; each setter returns an updated copy and the last call for a field wins.
///
/// ```
/// use drawq_aov::{AovRequest, LightingProperty};
///
/// let request = AovRequest::new().with_lighting_property(LightingProperty::DiffuseOnly);
/// assert_eq!(request.lighting_property(), LightingProperty::DiffuseOnly);
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct AovRequest {
    material_property: MaterialProperty,
    lighting_property: LightingProperty,
    light_filter: LightFilter,
    full_screen: DebugFullScreen,
}

impl AovRequest {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_material_property(self, material_property: MaterialProperty) -> Self {
        Self { material_property, ..self }
    }

    #[must_use]
    pub fn with_lighting_property(self, lighting_property: LightingProperty) -> Self {
        Self { lighting_property, ..self }
    }

    #[must_use]
    pub fn with_full_screen(self, full_screen: DebugFullScreen) -> Self {
        Self { full_screen, ..self }
    }

    #[must_use]
    pub fn with_light_filter(self, light_filter: LightFilter) -> Self {
        Self { light_filter, ..self }
    }

    pub fn material_property(&self) -> MaterialProperty {
        self.material_property
    }

    pub fn lighting_property(&self) -> LightingProperty {
        self.lighting_property
    }

    pub fn light_filter(&self) -> LightFilter {
        self.light_filter
    }

    pub fn full_screen(&self) -> DebugFullScreen {
        self.full_screen
    }

    /// Writes all four fields into `sink`.
    pub fn fill_debug_data(&self, sink: &mut impl DebugDisplaySink) {
        log::debug!("applying AOV request {self:?}");

        sink.set_material_property(self.material_property);

        sink.set_lighting_mode(match self.lighting_property {
            LightingProperty::None => LightingDebugMode::None,
            LightingProperty::DiffuseOnly => LightingDebugMode::DiffuseLighting,
            LightingProperty::SpecularOnly => LightingDebugMode::SpecularLighting,
        });

        sink.set_light_filter(self.light_filter);

        sink.set_full_screen_mode(match self.full_screen {
            DebugFullScreen::None => FullScreenDebugMode::None,
            DebugFullScreen::Depth => FullScreenDebugMode::DepthPyramid,
            DebugFullScreen::ScreenSpaceAmbientOcclusion => FullScreenDebugMode::Ssao,
            DebugFullScreen::MotionVectors => FullScreenDebugMode::MotionVectors,
        });
    }
}
