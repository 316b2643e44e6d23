use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use pengplot::binning::DEFAULT_BUCKET_COUNT;
use pengplot::csv_reader;
use pengplot::data::Dataset;
use pengplot::graph;
use pengplot::histogram::{compile_histogram, HistogramSpec};
use pengplot::layout::Dimensions;
use pengplot::palette::CategoryColorMap;
use pengplot::scatter::{compile_scatter, ScatterSpec};
use pengplot::scene::CompiledChart;
use pengplot::{OutputFormat, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "pengplot")]
#[command(about = "Render penguin measurement charts from CSV data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grouped histogram of one measurement, split by species
    Histogram {
        /// Numeric column to bin
        #[arg(long, default_value = "body_mass_g")]
        value: String,

        /// Number of equal-width buckets
        #[arg(long, default_value_t = DEFAULT_BUCKET_COUNT)]
        bins: usize,

        /// X-axis title (defaults to the value column name)
        #[arg(long)]
        label: Option<String>,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Scatter plot of two measurements, colored by species
    Scatter {
        /// Numeric column for the x axis
        #[arg(short = 'x', long, default_value = "bill_depth_mm")]
        x_field: String,

        /// Numeric column for the y axis
        #[arg(short = 'y', long, default_value = "bill_length_mm")]
        y_field: String,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Input file ('-' reads CSV from stdin; '.json' files are parsed as a
    /// JSON array of objects)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Categorical column that picks colors
    #[arg(long, default_value = "species")]
    group: String,

    /// Canvas width in pixels (chart-type default when omitted)
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels (chart-type default when omitted)
    #[arg(long)]
    height: Option<u32>,

    /// Output format: png or svg
    #[arg(long, default_value = "png")]
    format: String,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CommonArgs {
    fn render_options(&self) -> Result<RenderOptions> {
        Ok(RenderOptions {
            width: self.width,
            height: self.height,
            format: parse_format(&self.format)?,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let colors = CategoryColorMap::penguin_species();

    match cli.command {
        Command::Histogram {
            value,
            bins,
            label,
            common,
        } => {
            let dataset = load_dataset(&common.input)?;
            let options = common.render_options()?;
            let spec = HistogramSpec {
                value_field: value,
                group_field: common.group.clone(),
                bucket_count: bins,
                x_label: label,
                dims: Dimensions::histogram_default().resize(options.width, options.height),
            };
            let chart = compile_histogram(&dataset, &spec, &colors)
                .context("Failed to build histogram")?;
            write_chart(chart, &options, common.output.as_deref())
        }
        Command::Scatter {
            x_field,
            y_field,
            common,
        } => {
            let dataset = load_dataset(&common.input)?;
            let options = common.render_options()?;
            let spec = ScatterSpec {
                x_field,
                y_field,
                group_field: common.group.clone(),
                x_label: None,
                y_label: None,
                dims: Dimensions::scatter_default().resize(options.width, options.height),
            };
            let chart = compile_scatter(&dataset, &spec, &colors)
                .context("Failed to build scatter plot")?;
            write_chart(chart, &options, common.output.as_deref())
        }
    }
}

/// Read the input source into a Dataset. Stdin is always CSV; files are CSV
/// unless they carry a .json extension.
fn load_dataset(input: &str) -> Result<Dataset> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        let table = csv_reader::read_csv_from_reader(text.as_bytes())
            .context("Failed to read CSV from stdin")?;
        return Ok(Dataset::from_csv(table));
    }

    let path = PathBuf::from(input);
    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("'{}' is not valid JSON", path.display()))?;
        Dataset::from_json(&value)
    } else {
        let table = csv_reader::read_csv_from_path(&path)?;
        Ok(Dataset::from_csv(table))
    }
}

fn write_chart(
    chart: CompiledChart,
    options: &RenderOptions,
    output: Option<&std::path::Path>,
) -> Result<()> {
    if chart.skipped > 0 {
        eprintln!(
            "Warning: skipped {} record(s) with missing measurements",
            chart.skipped
        );
    }

    let bytes = graph::render(&chart.scene, &options.format)?;

    match output {
        Some(path) => fs::write(path, &bytes)
            .with_context(|| format!("Failed to write '{}'", path.display()))?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(&bytes)
                .context("Failed to write output to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

fn parse_format(name: &str) -> Result<OutputFormat> {
    match name {
        "png" => Ok(OutputFormat::Png),
        "svg" => Ok(OutputFormat::Svg),
        other => bail!("Unknown output format '{}' (expected png or svg)", other),
    }
}
