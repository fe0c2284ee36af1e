//! Draw-order key space.
//!
//! Render queue keys are plain integers sorted ascending by the renderer. This crate names the
//! anchors in that space, the ranges each render pass owns, and converts between keys and
//! [`Category`] values:
//!
//! - [`classify`]: key -> category, never fails
//! - [`key_for`]: category + [`KeyParams`] -> key
//! - [`Category::transparent_equivalent`] / [`Category::opaque_equivalent`]
//! - [`OpaqueQueue`] / [`TransparentQueue`]: simplified authoring views
//! - [`label`] / [`parse_label`]: debug labels like `Transparent+20`
//!
//! Everything is `const` data and pure functions; it is safe to call from any thread.

pub mod logging;
pub mod priority;
pub mod range;

mod category;
mod classify;
mod error;
mod label;
mod subset;
mod synthesize;

pub use category::Category;
pub use classify::classify;
pub use error::{Conversion, KeyspaceError};
pub use label::{label, parse_label};
pub use range::{clamp_transparent_offset, KeyRange};
pub use subset::{OpaqueQueue, TransparentQueue};
pub use synthesize::{key_for, KeyParams};
