//! Canvas snapshot model
//!
//! A snapshot is the read-only view of the drawing that exporters sample.
//! It stores what the user drew (strokes over a background colour) rather
//! than pixels so the same snapshot can be rasterized or written as vectors.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// `#rrggbb` hex form, alpha dropped.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0.0..=1.0 opacity.
    pub fn opacity(self) -> f32 {
        self.a as f32 / 255.0
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A freehand stroke: a polyline drawn with a round brush
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<(f32, f32)>,
    pub color: Rgba,
    /// Brush width in canvas pixels
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Rgba, width: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            width,
        }
    }

    pub fn with_points(mut self, points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        self.points.extend(points);
        self
    }

    /// Radius of the dot drawn for a single-tap stroke.
    pub fn dot_radius(&self) -> f32 {
        (self.width / 2.0).max(0.5)
    }
}

/// Immutable snapshot of the drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    width: u32,
    height: u32,
    background: Rgba,
    strokes: Vec<Stroke>,
}

impl CanvasSnapshot {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self {
            width,
            height,
            background,
            strokes: Vec::new(),
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.strokes.push(stroke);
        self
    }

    pub fn with_strokes(mut self, strokes: impl IntoIterator<Item = Stroke>) -> Self {
        self.strokes.extend(strokes);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }
}
