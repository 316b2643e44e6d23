use plotters::style::RGBColor;

use crate::palette::CategoryColorMap;
use crate::scale::LinearScale;
use crate::scene::{DrawCommand, TextAnchor, TextBaseline};

const AXIS_COLOR: RGBColor = RGBColor(0, 0, 0);
const TICK_LENGTH: f64 = 6.0;
const TICK_LABEL_SIZE: f64 = 12.0;
const TICK_LABEL_GAP: f64 = 3.0;
const LEGEND_DOT_RADIUS: f64 = 5.0;
const LEGEND_ROW_HEIGHT: f64 = 30.0;
const LEGEND_LABEL_SIZE: f64 = 13.0;

/// Emit a horizontal axis along the bottom of the bounded area.
///
/// `origin` is the canvas position of the scale's zero pixel (bounds left
/// edge, at the axis baseline).
pub fn x_axis(
    commands: &mut Vec<DrawCommand>,
    scale: &LinearScale,
    origin: (f64, f64),
    tick_count: usize,
) {
    let (ox, oy) = origin;
    let (r0, r1) = scale.range();
    let (start, end) = (r0.min(r1), r0.max(r1));

    commands.push(DrawCommand::Line {
        from: (ox + start, oy),
        to: (ox + end, oy),
        color: AXIS_COLOR,
        width: 1.0,
    });

    let step = scale.tick_step(tick_count);
    for tick in scale.ticks(tick_count) {
        let x = ox + scale.map(tick);
        commands.push(DrawCommand::Line {
            from: (x, oy),
            to: (x, oy + TICK_LENGTH),
            color: AXIS_COLOR,
            width: 1.0,
        });
        commands.push(DrawCommand::Text {
            content: format_tick(tick, step),
            pos: (x, oy + TICK_LENGTH + TICK_LABEL_GAP),
            size: TICK_LABEL_SIZE,
            color: AXIS_COLOR,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Top,
            rotated: false,
        });
    }
}

/// Emit a vertical axis along the left of the bounded area.
///
/// `origin` is the canvas position of the bounds' top-left corner.
pub fn y_axis(
    commands: &mut Vec<DrawCommand>,
    scale: &LinearScale,
    origin: (f64, f64),
    tick_count: usize,
) {
    let (ox, oy) = origin;
    let (r0, r1) = scale.range();
    let (start, end) = (r0.min(r1), r0.max(r1));

    commands.push(DrawCommand::Line {
        from: (ox, oy + start),
        to: (ox, oy + end),
        color: AXIS_COLOR,
        width: 1.0,
    });

    let step = scale.tick_step(tick_count);
    for tick in scale.ticks(tick_count) {
        let y = oy + scale.map(tick);
        commands.push(DrawCommand::Line {
            from: (ox - TICK_LENGTH, y),
            to: (ox, y),
            color: AXIS_COLOR,
            width: 1.0,
        });
        commands.push(DrawCommand::Text {
            content: format_tick(tick, step),
            pos: (ox - TICK_LENGTH - TICK_LABEL_GAP, y),
            size: TICK_LABEL_SIZE,
            color: AXIS_COLOR,
            anchor: TextAnchor::End,
            baseline: TextBaseline::Middle,
            rotated: false,
        });
    }
}

/// Emit the legend: one colored dot and label per category, top to bottom in
/// palette order. `origin` is the top-left corner of the legend box.
pub fn legend(commands: &mut Vec<DrawCommand>, colors: &CategoryColorMap, origin: (f64, f64)) {
    let (ox, oy) = origin;
    let mut y = oy + LEGEND_DOT_RADIUS;
    for (label, color) in colors.entries() {
        commands.push(DrawCommand::Circle {
            center: (ox + 10.0, y),
            radius: LEGEND_DOT_RADIUS,
            fill: color,
        });
        commands.push(DrawCommand::Text {
            content: label.to_string(),
            pos: (ox + 20.0, y),
            size: LEGEND_LABEL_SIZE,
            color: AXIS_COLOR,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            rotated: false,
        });
        y += LEGEND_ROW_HEIGHT;
    }
}

/// Format a tick value with just enough decimals for the tick step.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{:.*}", decimals, value)
}
