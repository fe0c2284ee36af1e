use crate::{LightFilter, MaterialProperty};

/// Lighting debug mode of the display configuration.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LightingDebugMode {
    #[default]
    None,
    DiffuseLighting,
    SpecularLighting,
}

/// Full-screen debug mode of the display configuration.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FullScreenDebugMode {
    #[default]
    None,
    DepthPyramid,
    Ssao,
    MotionVectors,
}

/// Receiver for an AOV selection. Implemented by the renderer's debug display settings.
pub trait DebugDisplaySink {
    fn set_material_property(&mut self, property: MaterialProperty);
    fn set_lighting_mode(&mut self, mode: LightingDebugMode);
    fn set_light_filter(&mut self, filter: LightFilter);
    fn set_full_screen_mode(&mut self, mode: FullScreenDebugMode);
}
