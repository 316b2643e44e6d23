use plotters::style::RGBColor;

/// A compiled chart: primitive drawing commands in canvas pixel coordinates.
/// The backend just executes these blindly.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone)]
pub enum DrawCommand {
    Rect {
        // Top-left, bottom-right
        tl: (f64, f64),
        br: (f64, f64),
        fill: RGBColor,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        fill: RGBColor,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: RGBColor,
        width: f64,
    },
    Text {
        content: String,
        pos: (f64, f64),
        size: f64,
        color: RGBColor,
        anchor: TextAnchor,
        baseline: TextBaseline,
        /// Rotated 90 degrees counter-clockwise (vertical axis titles).
        rotated: bool,
    },
}

/// A compiled chart plus bookkeeping the caller may want to surface.
#[derive(Debug, Clone)]
pub struct CompiledChart {
    pub scene: Scene,
    /// Records dropped because a required measurement was missing.
    pub skipped: usize,
}
