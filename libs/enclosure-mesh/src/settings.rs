//! # Enclosure Settings
//!
//! The typed, immutable configuration of one generation run.

use config::constants::{
    DEFAULT_BUTTON, DEFAULT_CABLE, DEFAULT_CLEARANCE, DEFAULT_DEPTH, DEFAULT_LENGTH,
    DEFAULT_THICKNESS, DEFAULT_WIDTH,
};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Which parts of the enclosure to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parts {
    /// Bottom and four side walls.
    Case,
    /// Top panel with the button hole.
    Lid,
    /// Case and lid together.
    #[default]
    Assembly,
}

impl Parts {
    /// Returns true if the lid is generated.
    pub fn includes_lid(self) -> bool {
        matches!(self, Parts::Lid | Parts::Assembly)
    }

    /// Returns true if the case is generated.
    pub fn includes_case(self) -> bool {
        matches!(self, Parts::Case | Parts::Assembly)
    }
}

/// Enclosure dimensions in millimeters.
///
/// `width`, `length` and `depth` are outer dimensions. Hole sizes are
/// diameters; each hole is cut with `clearance` added to its radius.
///
/// # Example
///
/// ```rust
/// use enclosure_mesh::{Parts, Settings};
///
/// let settings = Settings { parts: Parts::Lid, ..Settings::default() };
/// assert!(settings.validate().is_ok());
/// assert_eq!(settings.button_radius(), 12.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub width: f64,
    pub length: f64,
    pub thickness: f64,
    pub depth: f64,
    pub button: f64,
    pub cable: f64,
    pub clearance: f64,
    /// Add the chamfered button surface on top of the lid
    pub with_surface: bool,
    pub parts: Parts,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            length: DEFAULT_LENGTH,
            thickness: DEFAULT_THICKNESS,
            depth: DEFAULT_DEPTH,
            button: DEFAULT_BUTTON,
            cable: DEFAULT_CABLE,
            clearance: DEFAULT_CLEARANCE,
            with_surface: false,
            parts: Parts::Assembly,
        }
    }
}

impl Settings {
    /// Radius of the lid's button hole.
    #[inline]
    pub fn button_radius(&self) -> f64 {
        self.button * 0.5 + self.clearance
    }

    /// Radius of the back wall's cable hole.
    #[inline]
    pub fn cable_radius(&self) -> f64 {
        self.cable * 0.5 + self.clearance
    }

    /// Checks that the settings describe buildable geometry.
    ///
    /// Generation itself trusts its input; out-of-range values would produce
    /// self-intersecting output, so callers validate first.
    pub fn validate(&self) -> Result<(), MeshError> {
        let positive = [
            ("width", self.width),
            ("length", self.length),
            ("thickness", self.thickness),
            ("depth", self.depth),
            ("button", self.button),
            ("cable", self.cable),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(MeshError::invalid_settings(
                    field,
                    format!("must be a positive number: {value}"),
                ));
            }
        }

        if !self.clearance.is_finite() || self.clearance < 0.0 {
            return Err(MeshError::invalid_settings(
                "clearance",
                format!("must be a non-negative number: {}", self.clearance),
            ));
        }

        let smallest = self.width.min(self.length).min(self.depth);
        if self.thickness * 2.0 >= smallest {
            return Err(MeshError::invalid_settings(
                "thickness",
                format!(
                    "shell of {} leaves no room inside a {smallest} wide panel",
                    self.thickness
                ),
            ));
        }

        if self.parts.includes_lid() {
            check_hole("button", self.button_radius(), self.width, self.length, self.thickness)?;
        }
        if self.parts.includes_case() {
            check_hole("cable", self.cable_radius(), self.width, self.depth, self.thickness)?;
        }

        Ok(())
    }
}

/// A hole must fit inside the panel's inset rectangle.
fn check_hole(
    field: &'static str,
    radius: f64,
    width: f64,
    length: f64,
    thickness: f64,
) -> Result<(), MeshError> {
    let inset = width.min(length) - thickness * 2.0;
    if radius * 2.0 >= inset {
        return Err(MeshError::invalid_settings(
            field,
            format!(
                "hole of diameter {} (with clearance) does not fit the {inset} inset panel",
                radius * 2.0
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_hole_radii_include_clearance() {
        let settings = Settings::default();
        assert_eq!(settings.button_radius(), 12.0);
        assert_eq!(settings.cable_radius(), 3.5);
    }

    #[test]
    fn test_parts_selection() {
        assert!(Parts::Lid.includes_lid());
        assert!(!Parts::Lid.includes_case());
        assert!(Parts::Case.includes_case());
        assert!(!Parts::Case.includes_lid());
        assert!(Parts::Assembly.includes_lid() && Parts::Assembly.includes_case());
    }

    #[test]
    fn test_rejects_non_positive_dimension() {
        let settings = Settings { width: 0.0, ..Settings::default() };
        match settings.validate() {
            Err(MeshError::InvalidSettings { field, .. }) => assert_eq!(field, "width"),
            other => panic!("expected invalid width, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_nan() {
        let settings = Settings { depth: f64::NAN, ..Settings::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_clearance() {
        let settings = Settings { clearance: -0.5, ..Settings::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_clearance_is_allowed() {
        let settings = Settings { clearance: 0.0, ..Settings::default() };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_thick_shell() {
        let settings = Settings { thickness: 30.0, ..Settings::default() };
        match settings.validate() {
            Err(MeshError::InvalidSettings { field, .. }) => assert_eq!(field, "thickness"),
            other => panic!("expected invalid thickness, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_oversized_button() {
        // 88 + 2 * 1 clearance = 90, exactly the inset of a 100 mm lid
        let settings = Settings { button: 88.0, ..Settings::default() };
        match settings.validate() {
            Err(MeshError::InvalidSettings { field, .. }) => assert_eq!(field, "button"),
            other => panic!("expected invalid button, got {other:?}"),
        }
    }

    #[test]
    fn test_button_only_checked_for_lid() {
        let settings = Settings {
            button: 95.0,
            parts: Parts::Case,
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_cable_checked_against_wall() {
        // Side wall is 100 x 60, inset 50
        let settings = Settings { cable: 48.0, ..Settings::default() };
        match settings.validate() {
            Err(MeshError::InvalidSettings { field, .. }) => assert_eq!(field, "cable"),
            other => panic!("expected invalid cable, got {other:?}"),
        }
    }

    #[test]
    fn test_parts_serialize_lowercase() {
        let json = serde_json::to_string(&Parts::Assembly).unwrap();
        assert_eq!(json, "\"assembly\"");
        let parts: Parts = serde_json::from_str("\"lid\"").unwrap();
        assert_eq!(parts, Parts::Lid);
    }
}
