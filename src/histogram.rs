use anyhow::Result;

use crate::axis;
use crate::binning::{compute_bins, count_by_category, group_slot_width, Bin, DEFAULT_BUCKET_COUNT};
use crate::data::Dataset;
use crate::layout::Dimensions;
use crate::palette::CategoryColorMap;
use crate::scale::{LinearScale, DEFAULT_TICK_COUNT};
use crate::scene::{CompiledChart, DrawCommand, Scene, TextAnchor, TextBaseline};

use plotters::style::RGBColor;

const BAR_PADDING: f64 = 1.0;
const COUNT_LABEL_SIZE: f64 = 12.0;
const COUNT_LABEL_COLOR: RGBColor = RGBColor(169, 169, 169); // dark gray
const AXIS_TITLE_SIZE: f64 = 17.0;
const LEGEND_WIDTH: f64 = 95.0;

/// What to bin and how to label it.
#[derive(Debug, Clone)]
pub struct HistogramSpec {
    /// Numeric column to bin.
    pub value_field: String,
    /// Categorical column for the side-by-side sub-bars.
    pub group_field: String,
    pub bucket_count: usize,
    pub x_label: Option<String>,
    pub dims: Dimensions,
}

impl Default for HistogramSpec {
    fn default() -> Self {
        Self {
            value_field: "body_mass_g".to_string(),
            group_field: "species".to_string(),
            bucket_count: DEFAULT_BUCKET_COUNT,
            x_label: Some("Body Mass (in gm)".to_string()),
            dims: Dimensions::histogram_default(),
        }
    }
}

/// Compile a grouped histogram into a scene.
///
/// Records missing the binned measurement are skipped (and reported via
/// [`CompiledChart::skipped`]); everything else flows through the scale and
/// binning core exactly once per render.
pub fn compile_histogram(
    data: &Dataset,
    spec: &HistogramSpec,
    colors: &CategoryColorMap,
) -> Result<CompiledChart> {
    let value_field = data.numeric_field(&spec.value_field)?;
    let group_field = data.category_field(&spec.group_field)?;

    let mut values = Vec::new();
    let mut category_of = Vec::new();
    let mut skipped = 0usize;
    for row in data.rows() {
        match value_field.value(row) {
            Some(v) => {
                values.push(v);
                category_of.push(group_field.label(row).to_string());
            }
            None => skipped += 1,
        }
    }

    let dims = &spec.dims;
    let bounded_w = dims.bounded_width();
    let bounded_h = dims.bounded_height();
    let (mx, my) = (dims.margins.left, dims.margins.top);

    let x_scale = LinearScale::fit(&values, (0.0, bounded_w))?;
    let bins = compute_bins(&values, x_scale.domain(), spec.bucket_count)?;

    // The y domain covers the largest total bin population; sub-bars are
    // counted per category and never exceed it.
    let max_count = bins.iter().map(Bin::count).max().unwrap_or(0) as f64;
    let y_scale = LinearScale::new((0.0, max_count), (bounded_h, 0.0))?.nice(DEFAULT_TICK_COUNT);

    let labels = colors.labels();
    let mut commands = Vec::new();

    for bin in &bins {
        let x0_px = x_scale.map(bin.x0);
        let x1_px = x_scale.map(bin.x1);
        let slot = group_slot_width(x1_px - x0_px, BAR_PADDING, labels.len());
        let counts = count_by_category(bin, &labels, &category_of);

        for (i, &count) in counts.iter().enumerate() {
            if count == 0 || slot <= 0.0 {
                // The slot stays reserved; there is just nothing to draw.
                continue;
            }
            let left = mx + x0_px + i as f64 * slot + BAR_PADDING / 2.0;
            let top = my + y_scale.map(count as f64);
            commands.push(DrawCommand::Rect {
                tl: (left, top),
                br: (left + slot, my + bounded_h),
                fill: colors.color_of(labels[i]),
            });
            commands.push(DrawCommand::Text {
                content: count.to_string(),
                pos: (mx + x0_px + i as f64 * slot + 5.0, top - 5.0),
                size: COUNT_LABEL_SIZE,
                color: COUNT_LABEL_COLOR,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Bottom,
                rotated: false,
            });
        }
    }

    axis::x_axis(
        &mut commands,
        &x_scale,
        (mx, my + bounded_h),
        DEFAULT_TICK_COUNT,
    );

    let x_label = spec
        .x_label
        .clone()
        .unwrap_or_else(|| value_field.name().to_string());
    commands.push(DrawCommand::Text {
        content: x_label,
        pos: (mx + bounded_w / 2.0, my + bounded_h + dims.margins.bottom - 10.0),
        size: AXIS_TITLE_SIZE,
        color: RGBColor(0, 0, 0),
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Bottom,
        rotated: false,
    });

    axis::legend(&mut commands, colors, (mx + bounded_w - LEGEND_WIDTH, my));

    Ok(CompiledChart {
        scene: Scene {
            width: dims.width,
            height: dims.height,
            commands,
        },
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    fn make_dataset() -> Dataset {
        Dataset::new(
            vec!["species".to_string(), "body_mass_g".to_string()],
            vec![
                vec!["Adelie".to_string(), "3000".to_string()],
                vec!["Gentoo".to_string(), "3500".to_string()],
                vec!["Adelie".to_string(), "4000".to_string()],
                vec!["Chinstrap".to_string(), "NA".to_string()],
            ],
        )
    }

    #[test]
    fn test_compile_histogram() {
        let spec = HistogramSpec {
            bucket_count: 2,
            ..HistogramSpec::default()
        };
        let colors = CategoryColorMap::penguin_species();
        let chart = compile_histogram(&make_dataset(), &spec, &colors).unwrap();

        assert_eq!(chart.skipped, 1);
        assert_eq!(chart.scene.width, 600);
        assert_eq!(chart.scene.height, 360);

        // Three populated (species, bin) pairs: one bar and one count label
        // each.
        let rects = chart
            .scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, 3);
    }

    #[test]
    fn test_bars_sit_on_the_axis_baseline() {
        let spec = HistogramSpec {
            bucket_count: 2,
            ..HistogramSpec::default()
        };
        let colors = CategoryColorMap::penguin_species();
        let chart = compile_histogram(&make_dataset(), &spec, &colors).unwrap();

        let baseline = spec.dims.margins.top + spec.dims.bounded_height();
        for command in &chart.scene.commands {
            if let DrawCommand::Rect { tl, br, .. } = command {
                assert_eq!(br.1, baseline);
                assert!(tl.1 < br.1);
            }
        }
    }

    #[test]
    fn test_unknown_value_column() {
        let spec = HistogramSpec {
            value_field: "flipper_length_mm".to_string(),
            ..HistogramSpec::default()
        };
        let colors = CategoryColorMap::penguin_species();
        assert!(compile_histogram(&make_dataset(), &spec, &colors).is_err());
    }
}
