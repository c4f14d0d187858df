//! Raster export
//!
//! Renders a canvas snapshot into an RGBA buffer using tiny-skia, then
//! encodes it with the `image` crate. Strokes are anti-aliased polylines with
//! round caps and joins; single-point strokes become filled dots.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage};
use simpledraw_core::{CanvasSnapshot, ExportError, Rgba};
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke as SkiaStroke,
    Transform,
};

/// Compression quality used for lossy formats.
pub const JPEG_QUALITY: u8 = 70;

fn skia_color(c: Rgba) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, c.a)
}

/// Rasterize a snapshot at its native size.
pub fn render_snapshot(snapshot: &CanvasSnapshot) -> Result<RgbaImage, ExportError> {
    let width = snapshot.width();
    let height = snapshot.height();

    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return Err(ExportError::InvalidCanvas {
            reason: format!("cannot allocate a {}x{} surface", width, height),
        });
    };
    pixmap.fill(skia_color(snapshot.background()));

    for stroke in snapshot.strokes() {
        let mut paint = Paint::default();
        paint.set_color(skia_color(stroke.color));
        paint.anti_alias = true;

        match stroke.points.as_slice() {
            [] => continue,
            [(x, y)] => {
                if let Some(dot) = PathBuilder::from_circle(*x, *y, stroke.dot_radius()) {
                    pixmap.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
                }
            }
            [(x0, y0), rest @ ..] => {
                let mut pb = PathBuilder::new();
                pb.move_to(*x0, *y0);
                for (x, y) in rest {
                    pb.line_to(*x, *y);
                }
                let Some(path) = pb.finish() else {
                    continue;
                };
                let brush = SkiaStroke {
                    width: stroke.width,
                    line_cap: LineCap::Round,
                    line_join: LineJoin::Round,
                    ..Default::default()
                };
                pixmap.stroke_path(&path, &paint, &brush, Transform::identity(), None);
            }
        }
    }

    // tiny-skia stores premultiplied alpha; image buffers are straight alpha.
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    RgbaImage::from_raw(width, height, data).ok_or_else(|| ExportError::InvalidCanvas {
        reason: "pixel buffer does not match canvas size".to_string(),
    })
}

/// Encode an RGBA buffer as `format`.
///
/// PNG is written lossless; JPEG drops alpha and uses [`JPEG_QUALITY`].
pub fn encode_raster(image: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>, ExportError> {
    let (width, height) = image.dimensions();
    let mut bytes = Vec::new();

    let result = match format {
        ImageFormat::Png => PngEncoder::new(&mut bytes).write_image(
            image.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        ),
        ImageFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY).write_image(
                rgb.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
        other => {
            return Err(ExportError::UnsupportedFormat {
                extension: other
                    .extensions_str()
                    .first()
                    .copied()
                    .unwrap_or_default()
                    .to_string(),
            })
        }
    };

    result.map_err(|e| ExportError::Encode {
        reason: e.to_string(),
    })?;

    Ok(bytes)
}
