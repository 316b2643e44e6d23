use anyhow::Result;

use crate::axis;
use crate::data::Dataset;
use crate::layout::Dimensions;
use crate::palette::CategoryColorMap;
use crate::scale::{LinearScale, DEFAULT_TICK_COUNT};
use crate::scene::{CompiledChart, DrawCommand, Scene, TextAnchor, TextBaseline};

use plotters::style::RGBColor;

const DOT_RADIUS: f64 = 3.0;
const AXIS_TITLE_SIZE: f64 = 17.0;
const AXIS_TITLE_COLOR: RGBColor = RGBColor(105, 105, 105); // dim gray
const Y_AXIS_TICK_COUNT: usize = 4;
const LEGEND_WIDTH: f64 = 95.0;

/// Which two measurements to plot against each other.
#[derive(Debug, Clone)]
pub struct ScatterSpec {
    pub x_field: String,
    pub y_field: String,
    /// Categorical column that picks the dot color.
    pub group_field: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub dims: Dimensions,
}

impl Default for ScatterSpec {
    fn default() -> Self {
        Self {
            x_field: "bill_depth_mm".to_string(),
            y_field: "bill_length_mm".to_string(),
            group_field: "species".to_string(),
            x_label: Some("Bill depth (in mm)".to_string()),
            y_label: Some("Bill length (in mm)".to_string()),
            dims: Dimensions::scatter_default(),
        }
    }
}

/// Compile a species-colored scatter plot into a scene.
///
/// Rows missing either measurement are skipped and counted in
/// [`CompiledChart::skipped`].
pub fn compile_scatter(
    data: &Dataset,
    spec: &ScatterSpec,
    colors: &CategoryColorMap,
) -> Result<CompiledChart> {
    let x_field = data.numeric_field(&spec.x_field)?;
    let y_field = data.numeric_field(&spec.y_field)?;
    let group_field = data.category_field(&spec.group_field)?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut category_of = Vec::new();
    let mut skipped = 0usize;
    for row in data.rows() {
        match (x_field.value(row), y_field.value(row)) {
            (Some(x), Some(y)) => {
                xs.push(x);
                ys.push(y);
                category_of.push(group_field.label(row).to_string());
            }
            _ => skipped += 1,
        }
    }

    let dims = &spec.dims;
    let bounded_w = dims.bounded_width();
    let bounded_h = dims.bounded_height();
    let (mx, my) = (dims.margins.left, dims.margins.top);

    let x_scale = LinearScale::fit(&xs, (0.0, bounded_w))?.nice(DEFAULT_TICK_COUNT);
    let y_scale = LinearScale::fit(&ys, (bounded_h, 0.0))?.nice(DEFAULT_TICK_COUNT);

    let mut commands = Vec::new();
    for ((&x, &y), label) in xs.iter().zip(ys.iter()).zip(category_of.iter()) {
        commands.push(DrawCommand::Circle {
            center: (mx + x_scale.map(x), my + y_scale.map(y)),
            radius: DOT_RADIUS,
            fill: colors.color_of(label),
        });
    }

    axis::x_axis(
        &mut commands,
        &x_scale,
        (mx, my + bounded_h),
        DEFAULT_TICK_COUNT,
    );
    axis::y_axis(&mut commands, &y_scale, (mx, my), Y_AXIS_TICK_COUNT);

    let x_label = spec
        .x_label
        .clone()
        .unwrap_or_else(|| x_field.name().to_string());
    commands.push(DrawCommand::Text {
        content: x_label,
        pos: (mx + bounded_w / 2.0, my + bounded_h + dims.margins.bottom - 10.0),
        size: AXIS_TITLE_SIZE,
        color: AXIS_TITLE_COLOR,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Bottom,
        rotated: false,
    });

    let y_label = spec
        .y_label
        .clone()
        .unwrap_or_else(|| y_field.name().to_string());
    commands.push(DrawCommand::Text {
        content: y_label,
        pos: (mx - dims.margins.left / 2.0, my + bounded_h / 2.0),
        size: AXIS_TITLE_SIZE,
        color: AXIS_TITLE_COLOR,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Middle,
        rotated: true,
    });

    axis::legend(
        &mut commands,
        colors,
        (mx + bounded_w - LEGEND_WIDTH, my + 20.0),
    );

    Ok(CompiledChart {
        scene: Scene {
            width: dims.width,
            height: dims.height,
            commands,
        },
        skipped,
    })
}
