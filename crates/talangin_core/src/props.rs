//! Animatable visual properties
//!
//! A [`PropertySet`] is a sparse bag of the visual properties the page
//! animates. An absent field means "not touched": writing a set to an
//! element only changes the fields that are present, and interpolating
//! toward a set only moves the fields the target names.

use serde::{Deserialize, Serialize};

/// One animatable property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    /// Opacity (0.0 - 1.0)
    Opacity,
    /// Horizontal translation in pixels
    OffsetX,
    /// Vertical translation in pixels
    OffsetY,
    /// Uniform scale factor
    Scale,
    /// Rotation in degrees
    Rotation,
    /// Gaussian blur radius in pixels
    Blur,
    /// Width as a percentage of the containing block
    Width,
}

impl Property {
    /// All properties, in a stable order
    pub const ALL: [Property; 7] = [
        Property::Opacity,
        Property::OffsetX,
        Property::OffsetY,
        Property::Scale,
        Property::Rotation,
        Property::Blur,
        Property::Width,
    ];

    /// The value an element shows when the property has never been written
    pub fn identity(self) -> f32 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            Property::OffsetX
            | Property::OffsetY
            | Property::Rotation
            | Property::Blur
            | Property::Width => 0.0,
        }
    }

    /// Whether this property is part of the element's transform
    pub fn is_transform(self) -> bool {
        matches!(
            self,
            Property::OffsetX | Property::OffsetY | Property::Scale | Property::Rotation
        )
    }
}

/// A sparse set of visual property values
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

impl PropertySet {
    /// An empty set (touches nothing)
    pub const fn new() -> Self {
        Self {
            opacity: None,
            x: None,
            y: None,
            scale: None,
            rotation: None,
            blur: None,
            width: None,
        }
    }

    /// Fully visible at rest: opacity 1, identity transform, no blur
    pub const fn visible() -> Self {
        Self {
            opacity: Some(1.0),
            x: Some(0.0),
            y: Some(0.0),
            scale: Some(1.0),
            rotation: Some(0.0),
            blur: Some(0.0),
            width: None,
        }
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn x(mut self, value: f32) -> Self {
        self.x = Some(value);
        self
    }

    pub fn y(mut self, value: f32) -> Self {
        self.y = Some(value);
        self
    }

    pub fn scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn rotation(mut self, value: f32) -> Self {
        self.rotation = Some(value);
        self
    }

    pub fn blur(mut self, value: f32) -> Self {
        self.blur = Some(value);
        self
    }

    pub fn width(mut self, value: f32) -> Self {
        self.width = Some(value);
        self
    }

    /// Read one property
    pub fn get(&self, property: Property) -> Option<f32> {
        match property {
            Property::Opacity => self.opacity,
            Property::OffsetX => self.x,
            Property::OffsetY => self.y,
            Property::Scale => self.scale,
            Property::Rotation => self.rotation,
            Property::Blur => self.blur,
            Property::Width => self.width,
        }
    }

    /// Write one property
    pub fn set(&mut self, property: Property, value: Option<f32>) {
        let slot = match property {
            Property::Opacity => &mut self.opacity,
            Property::OffsetX => &mut self.x,
            Property::OffsetY => &mut self.y,
            Property::Scale => &mut self.scale,
            Property::Rotation => &mut self.rotation,
            Property::Blur => &mut self.blur,
            Property::Width => &mut self.width,
        };
        *slot = value;
    }

    /// Read a property, falling back to its identity value
    pub fn resolve(&self, property: Property) -> f32 {
        self.get(property).unwrap_or_else(|| property.identity())
    }

    /// Check if no property is set
    pub fn is_empty(&self) -> bool {
        Property::ALL.iter().all(|p| self.get(*p).is_none())
    }

    /// Iterate over the properties that are set
    pub fn iter(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        Property::ALL
            .iter()
            .filter_map(move |p| self.get(*p).map(|v| (*p, v)))
    }

    /// Overlay `other` on top of this set (fields in `other` win)
    pub fn merge(&self, other: &PropertySet) -> PropertySet {
        let mut merged = *self;
        merged.apply(other);
        merged
    }

    /// In-place version of [`merge`](Self::merge)
    pub fn apply(&mut self, other: &PropertySet) {
        for (property, value) in other.iter() {
            self.set(property, Some(value));
        }
    }

    /// Keep only the properties that are set in `mask`
    pub fn restricted_to(&self, mask: &PropertySet) -> PropertySet {
        let mut out = PropertySet::new();
        for (property, _) in mask.iter() {
            out.set(property, self.get(property));
        }
        out
    }

    /// Current values of the properties named by `mask`
    ///
    /// Properties absent from `self` resolve to their identity values, so
    /// the result has exactly the fields of `mask` set.
    pub fn snapshot(&self, mask: &PropertySet) -> PropertySet {
        let mut out = PropertySet::new();
        for (property, _) in mask.iter() {
            out.set(property, Some(self.resolve(property)));
        }
        out
    }

    /// Interpolate from `self` toward `to` by factor `t`
    ///
    /// Only the properties present in `to` appear in the result. Missing
    /// start values are taken as identity values. `t` is not clamped so
    /// overshooting easings carry through.
    pub fn lerp(&self, to: &PropertySet, t: f32) -> PropertySet {
        let mut out = PropertySet::new();
        for (property, end) in to.iter() {
            let start = self.resolve(property);
            out.set(property, Some(start + (end - start) * t));
        }
        out
    }

    /// Whether the transform and opacity are at rest and fully visible
    pub fn is_visible_at_rest(&self) -> bool {
        const EPSILON: f32 = 1e-4;
        Property::ALL
            .iter()
            .filter(|p| p.is_transform() || **p == Property::Opacity)
            .all(|p| (self.resolve(*p) - p.identity()).abs() < EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_touches_nothing() {
        let set = PropertySet::new();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = PropertySet::new().opacity(0.0).y(30.0);
        let merged = base.merge(&PropertySet::new().opacity(1.0));
        assert_eq!(merged.opacity, Some(1.0));
        assert_eq!(merged.y, Some(30.0));
    }

    #[test]
    fn test_lerp_uses_identity_for_missing_start() {
        let from = PropertySet::new();
        let to = PropertySet::new().scale(2.0).opacity(0.0);
        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.scale, Some(1.5));
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.x, None);
    }

    #[test]
    fn test_lerp_overshoots() {
        let from = PropertySet::new().scale(1.0);
        let to = PropertySet::new().scale(2.0);
        assert_eq!(from.lerp(&to, 1.5).scale, Some(2.5));
    }

    #[test]
    fn test_snapshot_resolves_identity() {
        let current = PropertySet::new().opacity(0.0);
        let snap = current.snapshot(&PropertySet::new().opacity(1.0).y(0.0));
        assert_eq!(snap.opacity, Some(0.0));
        assert_eq!(snap.y, Some(0.0));
        assert_eq!(snap.scale, None);
    }

    #[test]
    fn test_visible_is_at_rest() {
        assert!(PropertySet::visible().is_visible_at_rest());
        assert!(PropertySet::new().is_visible_at_rest());
        assert!(!PropertySet::new().opacity(0.0).is_visible_at_rest());
        assert!(!PropertySet::new().scale(0.9).is_visible_at_rest());
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let json = serde_json::to_string(&PropertySet::new().opacity(0.0)).unwrap();
        assert_eq!(json, r#"{"opacity":0.0}"#);
    }
}
