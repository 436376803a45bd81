//! Animatable style maps.
//!
//! A [`Style`] is a small map of numeric visual properties. Panels carry a
//! current style, and notifications are configured with target styles for
//! their resting, shown, and hidden appearances. The style animator
//! interpolates between two styles property by property.
//!
//! driftnote does not render anything itself; styles are plain data the host
//! reads back and applies to whatever visual layer it uses.

use std::collections::BTreeMap;

/// An animatable visual property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StyleProperty {
    /// Opacity from 0.0 (invisible) to 1.0 (opaque).
    Opacity,
    /// Horizontal offset from the resting position, in pixels.
    OffsetX,
    /// Vertical offset from the resting position, in pixels.
    OffsetY,
}

/// A map of style properties to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    values: BTreeMap<StyleProperty, f32>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, property: StyleProperty, value: f32) -> Self {
        self.values.insert(property, value);
        self
    }

    /// Sets a property value.
    pub fn set(&mut self, property: StyleProperty, value: f32) {
        self.values.insert(property, value);
    }

    /// Gets a property value, if present.
    pub fn get(&self, property: StyleProperty) -> Option<f32> {
        self.values.get(&property).copied()
    }

    /// Returns whether the style defines no properties.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Writes every property of `other` into this style, keeping properties
    /// `other` does not define.
    pub fn apply(&mut self, other: &Style) {
        for (&property, &value) in &other.values {
            self.values.insert(property, value);
        }
    }

    /// Iterates over the defined properties.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, f32)> + '_ {
        self.values.iter().map(|(&p, &v)| (p, v))
    }

    /// Interpolates from `from` toward `to` at progress `t` (0.0 to 1.0).
    ///
    /// Only properties defined in `to` participate; a property `from` does
    /// not define snaps to its target value immediately.
    pub fn lerp(from: &Style, to: &Style, t: f32) -> Style {
        let t = t.clamp(0.0, 1.0);
        let mut result = Style::new();

        for (property, target) in to.iter() {
            let start = from.get(property).unwrap_or(target);
            result.set(property, start + (target - start) * t);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_and_get() {
        let style = Style::new()
            .with(StyleProperty::Opacity, 0.5)
            .with(StyleProperty::OffsetX, 10.0);

        assert_eq!(style.get(StyleProperty::Opacity), Some(0.5));
        assert_eq!(style.get(StyleProperty::OffsetX), Some(10.0));
        assert_eq!(style.get(StyleProperty::OffsetY), None);
    }

    #[test]
    fn test_apply_keeps_unrelated_properties() {
        let mut style = Style::new()
            .with(StyleProperty::Opacity, 0.0)
            .with(StyleProperty::OffsetX, 25.0);

        style.apply(&Style::new().with(StyleProperty::Opacity, 1.0));

        assert_eq!(style.get(StyleProperty::Opacity), Some(1.0));
        assert_eq!(style.get(StyleProperty::OffsetX), Some(25.0));
    }

    #[test]
    fn test_lerp_midpoint() {
        let from = Style::new().with(StyleProperty::Opacity, 0.0);
        let to = Style::new().with(StyleProperty::Opacity, 1.0);

        let mid = Style::lerp(&from, &to, 0.5);
        assert_eq!(mid.get(StyleProperty::Opacity), Some(0.5));
    }

    #[test]
    fn test_lerp_missing_start_snaps_to_target() {
        let from = Style::new();
        let to = Style::new().with(StyleProperty::Opacity, 1.0);

        let result = Style::lerp(&from, &to, 0.0);
        assert_eq!(result.get(StyleProperty::Opacity), Some(1.0));
    }

    #[test]
    fn test_lerp_clamps_progress() {
        let from = Style::new().with(StyleProperty::OffsetX, 0.0);
        let to = Style::new().with(StyleProperty::OffsetX, 100.0);

        assert_eq!(
            Style::lerp(&from, &to, 2.0).get(StyleProperty::OffsetX),
            Some(100.0)
        );
        assert_eq!(
            Style::lerp(&from, &to, -1.0).get(StyleProperty::OffsetX),
            Some(0.0)
        );
    }
}
