/// Margin-convention layout: an outer canvas with margins reserved for axes
/// and labels, and an inner bounded area where marks are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
}

impl Dimensions {
    pub fn new(width: u32, height: u32, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    /// Default canvas for the grouped histogram (height = 0.6 * width).
    pub fn histogram_default() -> Self {
        Self::new(
            600,
            360,
            Margins {
                top: 30.0,
                right: 10.0,
                bottom: 50.0,
                left: 50.0,
            },
        )
    }

    /// Default square canvas for the scatter plot.
    pub fn scatter_default() -> Self {
        Self::new(
            600,
            600,
            Margins {
                top: 10.0,
                right: 10.0,
                bottom: 50.0,
                left: 50.0,
            },
        )
    }

    /// Apply optional width/height overrides, keeping the margins.
    pub fn resize(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        if let Some(w) = width {
            self.width = w;
        }
        if let Some(h) = height {
            self.height = h;
        }
        self
    }

    pub fn bounded_width(&self) -> f64 {
        self.width as f64 - self.margins.left - self.margins.right
    }

    pub fn bounded_height(&self) -> f64 {
        self.height as f64 - self.margins.top - self.margins.bottom
    }
}
