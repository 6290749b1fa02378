//! Shape kinds, the property bag, and geometry validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// ShapeKind
// ---------------------------------------------------------------------------

/// The fixed set of drawable primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[serde(alias = "rect", alias = "RECT")]
    Rectangle,
    #[serde(alias = "ELLIPSE")]
    Ellipse,
    #[serde(alias = "LINE")]
    Line,
    #[serde(alias = "TEXT")]
    Text,
    #[serde(alias = "IMAGE")]
    Image,
    #[serde(alias = "FREEHAND")]
    Freehand,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        Self::Rectangle,
        Self::Ellipse,
        Self::Line,
        Self::Text,
        Self::Image,
        Self::Freehand,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Line => "line",
            Self::Text => "text",
            Self::Image => "image",
            Self::Freehand => "freehand",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        if lowered == "rect" {
            return Ok(Self::Rectangle);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| CoreError::Validation(format!("Unknown shape kind '{s}'")))
    }
}

impl TryFrom<String> for ShapeKind {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// ShapeProps
// ---------------------------------------------------------------------------

/// Kind-specific visual attributes of a shape.
///
/// The well-known keys are typed; anything else a client sends is kept in
/// `extra` and round-trips untouched. Serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Freehand/line point data; opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShapeProps {
    pub fn is_empty(&self) -> bool {
        self.fill.is_none()
            && self.stroke.is_none()
            && self.text.is_none()
            && self.path.is_none()
            && self.extra.is_empty()
    }

    /// Shallow-merge `patch` onto `self`.
    ///
    /// Keys present in the patch override; keys absent from the patch are
    /// preserved. A `null` value in the patch counts as absent.
    pub fn merge(&mut self, patch: ShapeProps) {
        if patch.fill.is_some() {
            self.fill = patch.fill;
        }
        if patch.stroke.is_some() {
            self.stroke = patch.stroke;
        }
        if patch.text.is_some() {
            self.text = patch.text;
        }
        if patch.path.is_some() {
            self.path = patch.path;
        }
        for (key, value) in patch.extra {
            if !value.is_null() {
                self.extra.insert(key, value);
            }
        }
    }

    /// Return `self` merged with `patch`, leaving `self` intact.
    pub fn merged(&self, patch: ShapeProps) -> ShapeProps {
        let mut out = self.clone();
        out.merge(patch);
        out
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject non-finite coordinates and negative extents.
pub fn validate_geometry(
    x: Option<f64>,
    y: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    rotation: Option<f64>,
) -> Result<(), CoreError> {
    for (name, value) in [("x", x), ("y", y), ("rotation", rotation)] {
        if let Some(v) = value {
            if !v.is_finite() {
                return Err(CoreError::Validation(format!("{name} must be a finite number")));
            }
        }
    }
    for (name, value) in [("width", width), ("height", height)] {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                return Err(CoreError::Validation(format!(
                    "{name} must be a finite, non-negative number"
                )));
            }
        }
    }
    Ok(())
}
