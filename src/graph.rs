use anyhow::{anyhow, Context, Result};
use image::ImageEncoder;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use crate::scene::{DrawCommand, Scene, TextAnchor, TextBaseline};
use crate::OutputFormat;

/// Render a scene in the requested output format.
pub fn render(scene: &Scene, format: &OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Png => render_png(scene),
        OutputFormat::Svg => render_svg(scene).map(String::into_bytes),
    }
}

/// Render a scene to PNG bytes.
pub fn render_png(scene: &Scene) -> Result<Vec<u8>> {
    let (width, height) = (scene.width, scene.height);
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        execute(scene, &root)?;
    }

    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(&buffer, width, height, image::ColorType::Rgb8)
        .context("Failed to encode PNG")?;

    Ok(png_bytes)
}

/// Render a scene to an SVG document.
pub fn render_svg(scene: &Scene) -> Result<String> {
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (scene.width, scene.height)).into_drawing_area();
        execute(scene, &root)?;
    }
    Ok(svg)
}

/// Execute the scene's draw commands against a plotters drawing area.
fn execute<DB: DrawingBackend>(scene: &Scene, root: &DrawingArea<DB, Shift>) -> Result<()> {
    root.fill(&WHITE)
        .map_err(|e| anyhow!("Failed to fill background: {}", e))?;

    for command in &scene.commands {
        match command {
            DrawCommand::Rect { tl, br, fill } => {
                root.draw(&Rectangle::new([px(*tl), px(*br)], fill.filled()))
                    .map_err(|e| anyhow!("Failed to draw rectangle: {}", e))?;
            }
            DrawCommand::Circle { center, radius, fill } => {
                root.draw(&Circle::new(
                    px(*center),
                    radius.round() as i32,
                    fill.filled(),
                ))
                .map_err(|e| anyhow!("Failed to draw circle: {}", e))?;
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                root.draw(&PathElement::new(
                    vec![px(*from), px(*to)],
                    color.stroke_width((*width).round() as u32),
                ))
                .map_err(|e| anyhow!("Failed to draw line: {}", e))?;
            }
            DrawCommand::Text {
                content,
                pos,
                size,
                color,
                anchor,
                baseline,
                rotated,
            } => {
                let mut font = ("sans-serif", size.round() as i32).into_font();
                if *rotated {
                    font = font.transform(FontTransform::Rotate270);
                }
                let style = font
                    .color(color)
                    .pos(Pos::new(h_pos(*anchor), v_pos(*baseline)));
                root.draw(&Text::new(content.clone(), px(*pos), style))
                    .map_err(|e| anyhow!("Failed to draw text: {}", e))?;
            }
        }
    }

    root.present()
        .map_err(|e| anyhow!("Failed to present drawing: {}", e))?;
    Ok(())
}

fn px((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn h_pos(anchor: TextAnchor) -> HPos {
    match anchor {
        TextAnchor::Start => HPos::Left,
        TextAnchor::Middle => HPos::Center,
        TextAnchor::End => HPos::Right,
    }
}

fn v_pos(baseline: TextBaseline) -> VPos {
    match baseline {
        TextBaseline::Top => VPos::Top,
        TextBaseline::Middle => VPos::Center,
        TextBaseline::Bottom => VPos::Bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::RGBColor;

    fn make_scene() -> Scene {
        Scene {
            width: 120,
            height: 80,
            commands: vec![
                DrawCommand::Rect {
                    tl: (10.0, 10.0),
                    br: (50.0, 70.0),
                    fill: RGBColor(255, 165, 0),
                },
                DrawCommand::Circle {
                    center: (80.0, 40.0),
                    radius: 3.0,
                    fill: RGBColor(0, 128, 0),
                },
                DrawCommand::Line {
                    from: (0.0, 70.0),
                    to: (120.0, 70.0),
                    color: RGBColor(0, 0, 0),
                    width: 1.0,
                },
                DrawCommand::Text {
                    content: "7".to_string(),
                    pos: (30.0, 8.0),
                    size: 12.0,
                    color: RGBColor(169, 169, 169),
                    anchor: TextAnchor::Middle,
                    baseline: TextBaseline::Bottom,
                    rotated: false,
                },
            ],
        }
    }

    #[test]
    fn test_render_png_magic_bytes() {
        let png = render_png(&make_scene()).unwrap();
        assert!(png.len() > 8);
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_render_svg_document() {
        let svg = render_svg(&make_scene()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }
}
