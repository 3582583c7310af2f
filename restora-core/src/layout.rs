//! OCR layout model: detected text lines and their bounding boxes

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Axis-aligned box in content pixel coordinates.
///
/// On the wire this is the array `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl From<[f32; 4]> for BoundingBox {
    fn from([x0, y0, x1, y1]: [f32; 4]) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

impl From<BoundingBox> for [f32; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.x0, bbox.y0, bbox.x1, bbox.y1]
    }
}

impl BoundingBox {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width, zero for inverted boxes
    pub fn width(&self) -> f32 {
        (self.x1 - self.x0).max(0.0)
    }

    /// Height, zero for inverted boxes
    pub fn height(&self) -> f32 {
        (self.y1 - self.y0).max(0.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// One detected line of text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    #[serde(default, alias = "text_content")]
    pub text: String,
    pub bbox: BoundingBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// Layout analysis result for one page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrLayout {
    #[serde(default)]
    pub text_lines: Vec<TextLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_bbox: Option<BoundingBox>,
}

impl OcrLayout {
    /// Parse the `layout` field of a processing response.
    ///
    /// The backend sends either an object, the same object serialized into a
    /// string, or nothing at all (an empty layout).
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::String(raw) if raw.trim().is_empty() => Ok(Self::default()),
            Value::String(raw) => {
                let inner: Value = serde_json::from_str(&raw)?;
                match inner {
                    Value::Null => Ok(Self::default()),
                    other => Ok(serde_json::from_value(other)?),
                }
            }
            other => Ok(serde_json::from_value(other)?),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text_lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text_lines.len()
    }

    /// Index of the line whose box contains the content point.
    ///
    /// Overlapping boxes resolve to the last one, matching draw order.
    pub fn line_at(&self, x: f32, y: f32) -> Option<usize> {
        self.text_lines
            .iter()
            .rposition(|line| line.bbox.contains(x, y))
    }
}
