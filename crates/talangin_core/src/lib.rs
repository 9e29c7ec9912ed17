//! Talangin Core Types
//!
//! Foundational types shared by every Talangin crate:
//!
//! - **Node handles**: [`NodeId`] keys that identify page elements across
//!   the platform, animation, and motion layers
//! - **Geometry**: [`Point`], [`Size`], and [`Rect`] in CSS pixels
//! - **Visual properties**: [`PropertySet`], the animatable subset of an
//!   element's style (opacity, translation, scale, rotation, blur, width)
//!
//! # Example
//!
//! ```rust
//! use talangin_core::{Property, PropertySet};
//!
//! let hidden = PropertySet::new().opacity(0.0).y(30.0);
//! let shown = PropertySet::new().opacity(1.0).y(0.0);
//!
//! let halfway = hidden.lerp(&shown, 0.5);
//! assert_eq!(halfway.get(Property::Opacity), Some(0.5));
//! assert_eq!(halfway.get(Property::OffsetY), Some(15.0));
//! ```

pub mod geometry;
pub mod node;
pub mod props;

pub use geometry::{Point, Rect, Size};
pub use node::NodeId;
pub use props::{Property, PropertySet};
