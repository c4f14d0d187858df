//! SVG export
//! Serializes a canvas snapshot as a standalone SVG document:
//! - Root sized to the canvas, with a background rect
//! - One `<path>` per stroke, round caps and joins
//! - Single-point strokes as filled `<circle>`s

use simpledraw_core::{CanvasSnapshot, Rgba, Stroke};

fn opacity_attr(name: &str, color: Rgba) -> String {
    if color.a == u8::MAX {
        String::new()
    } else {
        format!(" {}=\"{}\"", name, color.opacity())
    }
}

fn render_stroke(stroke: &Stroke, out: &mut String) {
    match stroke.points.as_slice() {
        [] => {}
        [(x, y)] => {
            out.push_str(&format!(
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"{}/>\n",
                x,
                y,
                stroke.dot_radius(),
                stroke.color.to_hex(),
                opacity_attr("fill-opacity", stroke.color),
            ));
        }
        [(x0, y0), rest @ ..] => {
            let mut d = format!("M {} {}", x0, y0);
            for (x, y) in rest {
                d.push_str(&format!(" L {} {}", x, y));
            }
            out.push_str(&format!(
                "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"{}/>\n",
                d,
                stroke.color.to_hex(),
                stroke.width,
                opacity_attr("stroke-opacity", stroke.color),
            ));
        }
    }
}

/// Render the snapshot as an SVG document.
pub fn render_svg(snapshot: &CanvasSnapshot) -> String {
    let (w, h) = (snapshot.width(), snapshot.height());
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    out.push_str(&format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    ));
    out.push_str(&format!(
        "  <rect width=\"{}\" height=\"{}\" fill=\"{}\"{}/>\n",
        w,
        h,
        snapshot.background().to_hex(),
        opacity_attr("fill-opacity", snapshot.background()),
    ));

    for stroke in snapshot.strokes() {
        render_stroke(stroke, &mut out);
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_canvas_has_background_only() {
        let svg = render_svg(&CanvasSnapshot::new(100, 50, Rgba::WHITE));
        assert!(svg.contains("<svg width=\"100\" height=\"50\" viewBox=\"0 0 100 50\""));
        assert!(svg.contains("<rect width=\"100\" height=\"50\" fill=\"#ffffff\"/>"));
        assert!(!svg.contains("<path"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_strokes_become_paths() {
        let canvas = CanvasSnapshot::new(10, 10, Rgba::WHITE).with_stroke(
            Stroke::new(Rgba::rgb(0, 0, 255), 3.0).with_points([(1.0, 2.0), (3.5, 4.0), (5.0, 6.0)]),
        );
        let svg = render_svg(&canvas);
        assert!(svg.contains("d=\"M 1 2 L 3.5 4 L 5 6\""));
        assert!(svg.contains("stroke=\"#0000ff\""));
        assert!(svg.contains("stroke-width=\"3\""));
        assert!(!svg.contains("stroke-opacity"));
    }

    #[test]
    fn test_dots_and_translucency() {
        let canvas = CanvasSnapshot::new(10, 10, Rgba::WHITE)
            .with_stroke(Stroke::new(Rgba::new(255, 0, 0, 0), 4.0).with_points([(5.0, 5.0)]));
        let svg = render_svg(&canvas);
        assert!(svg.contains("<circle cx=\"5\" cy=\"5\" r=\"2\" fill=\"#ff0000\" fill-opacity=\"0\"/>"));
    }
}
