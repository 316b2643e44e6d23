use plotters::style::RGBColor;

/// Fixed mapping from category label to fill color.
///
/// The label set and its order are supplied explicitly (not derived from the
/// data), so legend order and sub-bar order are a documented contract.
/// Unknown labels fall back to a neutral gray.
#[derive(Debug, Clone)]
pub struct CategoryColorMap {
    entries: Vec<(String, RGBColor)>,
    fallback: RGBColor,
}

const FALLBACK_GRAY: RGBColor = RGBColor(128, 128, 128);

impl CategoryColorMap {
    pub fn new(entries: Vec<(String, RGBColor)>) -> Self {
        Self {
            entries,
            fallback: FALLBACK_GRAY,
        }
    }

    /// The three penguin species with their conventional colors.
    pub fn penguin_species() -> Self {
        Self::new(vec![
            ("Adelie".to_string(), RGBColor(255, 165, 0)),   // orange
            ("Chinstrap".to_string(), RGBColor(128, 0, 128)), // purple
            ("Gentoo".to_string(), RGBColor(0, 128, 0)),     // green
        ])
    }

    /// Labels in declaration order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(label, _)| label.as_str()).collect()
    }

    /// (label, color) pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, RGBColor)> {
        self.entries.iter().map(|(label, color)| (label.as_str(), *color))
    }

    pub fn color_of(&self, label: &str) -> RGBColor {
        self.entries
            .iter()
            .find(|(known, _)| known == label)
            .map(|(_, color)| *color)
            .unwrap_or(self.fallback)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
