//! AOV (arbitrary output variable) requests.
//!
//! An [`AovRequest`] picks which engine channel an output pass captures. It does not render
//! anything itself; [`AovRequest::fill_debug_data`] copies the selection into whatever debug
//! display configuration the renderer exposes through [`DebugDisplaySink`].

mod request;
mod sink;

pub use request::{AovRequest, DebugFullScreen, LightFilter, LightingProperty, MaterialProperty};
pub use sink::{DebugDisplaySink, FullScreenDebugMode, LightingDebugMode};
