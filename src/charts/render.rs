//! Chart rendering with plotters
//!
//! One rendering function per `ChartKind` variant, dispatched from
//! `render_chart`. Every function writes a single PNG artifact and returns
//! nothing; failures are reported to the caller, which decides whether to
//! continue with later jobs.

use anyhow::{bail, Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use polars::prelude::*;
use std::path::Path;

use crate::pipeline::error::AnalysisError;
use crate::pipeline::subset::string_column;
use crate::pipeline::{
    correlation_matrix, crosstab, filter_contains, linear_fit, reindex_counts, value_counts,
};

use super::jobs::ChartKind;
use super::theme::Theme;

/// Render one chart job to `path`.
pub fn render_chart(df: &DataFrame, kind: &ChartKind, path: &Path, theme: &Theme) -> Result<()> {
    match kind {
        ChartKind::CountBar {
            column,
            title,
            x_label,
            order,
            filter,
        } => render_count_bar(df, column, title, x_label, *order, *filter, path, theme),
        ChartKind::SharePie {
            column,
            label,
            title,
        } => render_share_pie(df, column, label, title, path, theme),
        ChartKind::StackedCrosstab {
            category,
            title,
            x_label,
            order,
        } => render_stacked_crosstab(df, category, title, x_label, *order, path, theme),
        ChartKind::Histogram {
            column,
            bins,
            title,
            x_label,
        } => render_histogram(df, column, *bins, title, x_label, path, theme),
        ChartKind::NumericBoxPlot { columns, title } => {
            render_numeric_box_plot(df, columns, title, path, theme)
        }
        ChartKind::GroupedBoxPlot {
            value,
            group,
            title,
            x_label,
            y_label,
        } => render_grouped_box_plot(df, value, group, title, x_label, y_label, path, theme),
        ChartKind::Scatter {
            x,
            y,
            hue,
            regression,
            title,
            x_label,
            y_label,
        } => render_scatter(df, x, y, *hue, *regression, title, x_label, y_label, path, theme),
        ChartKind::CorrelationHeatmap { title } => render_heatmap(df, title, path, theme),
    }
    .with_context(|| format!("failed to render chart '{}'", path.display()))
}

#[allow(clippy::too_many_arguments)]
fn render_count_bar(
    df: &DataFrame,
    column: &str,
    title: &str,
    x_label: &str,
    order: Option<&[&str]>,
    filter: Option<&[(&str, &str)]>,
    path: &Path,
    theme: &Theme,
) -> Result<()> {
    let filtered;
    let df = match filter {
        Some(predicates) => {
            filtered = filter_contains(df, predicates)?;
            &filtered
        }
        None => df,
    };

    let mut counts = value_counts(df, column)?;
    if let Some(order) = order {
        counts = reindex_counts(counts, order);
    }
    if counts.is_empty() {
        bail!("no non-missing values in column '{}'", column);
    }

    let labels: Vec<String> = counts.iter().map(|(v, _)| v.clone()).collect();
    let y_max = counts.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);

    let root = BitMapBackend::new(path, (theme.width, theme.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, theme.caption_font())
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(
            (0i32..counts.len() as i32).into_segmented(),
            0u32..y_max + y_max / 5 + 1,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_label)
        .y_desc("Individuals")
        .x_labels(labels.len())
        .x_label_formatter(&|seg| segment_label(seg, &labels))
        .label_style(theme.label_font())
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style_func(|x: &SegmentValue<i32>, _: &u32| {
                theme.color(segment_index(x) as usize).filled()
            })
            .margin(15)
            .data(counts.iter().enumerate().map(|(i, (_, n))| (i as i32, *n))),
    )?;

    root.present()?;
    Ok(())
}

fn render_share_pie(
    df: &DataFrame,
    column: &str,
    label: &str,
    title: &str,
    path: &Path,
    theme: &Theme,
) -> Result<()> {
    let counts = value_counts(df, column)?;
    let hit = counts
        .iter()
        .find(|(v, _)| v == label)
        .map(|(_, n)| *n)
        .unwrap_or(0);
    // Denominator is every row, missing class included
    let total = df.height() as u32;
    if total == 0 {
        bail!("dataset is empty");
    }

    let root = BitMapBackend::new(path, (theme.width, theme.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, theme.caption_font())?;

    let (w, h) = root.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = (w.min(h) as f64) * 0.35;
    let sizes = vec![hit as f64, (total - hit) as f64];
    let colors = vec![RGBColor(214, 95, 95), RGBColor(211, 211, 211)];
    let labels = vec![label.to_string(), format!("Not {}", label.to_lowercase())];

    let font = theme.label_font().into_font();
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(font.clone());
    pie.percentages(font);
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn render_stacked_crosstab(
    df: &DataFrame,
    category: &str,
    title: &str,
    x_label: &str,
    order: Option<&[&str]>,
    path: &Path,
    theme: &Theme,
) -> Result<()> {
    let mut ct = crosstab(df, category, crate::pipeline::schema::COL_VHB_INFECTION)?;
    if let Some(order) = order {
        ct = ct.reindex(order);
    }
    if ct.categories.is_empty() || ct.levels.is_empty() {
        bail!("no complete observations for '{}'", category);
    }

    let y_max = ct.max_row_total().max(1);

    let root = BitMapBackend::new(path, (theme.width, theme.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, theme.caption_font())
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(
            (0i32..ct.categories.len() as i32).into_segmented(),
            0u32..y_max + y_max / 5 + 1,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_label)
        .y_desc("Individuals")
        .x_labels(ct.categories.len())
        .x_label_formatter(&|seg| segment_label(seg, &ct.categories))
        .label_style(theme.label_font())
        .draw()?;

    // One series per infection-status level, stacked bottom-up
    for (li, level) in ct.levels.iter().enumerate() {
        let color = theme.color(li);
        chart
            .draw_series(ct.counts.iter().enumerate().map(|(ci, row)| {
                let base: u32 = row[..li].iter().sum();
                Rectangle::new(
                    [
                        (SegmentValue::Exact(ci as i32), base),
                        (SegmentValue::Exact(ci as i32 + 1), base + row[li]),
                    ],
                    color.filled(),
                )
            }))?
            .label(level.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .label_font(theme.label_font())
        .draw()?;

    root.present()?;
    Ok(())
}

fn render_histogram(
    df: &DataFrame,
    column: &str,
    bins: usize,
    title: &str,
    x_label: &str,
    path: &Path,
    theme: &Theme,
) -> Result<()> {
    let values = numeric_values(df, column)?;
    if values.is_empty() {
        bail!("no non-missing values in column '{}'", column);
    }
    let bins = bins.max(1);

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = if max > min { max - min } else { 1.0 };
    let bin_width = span / bins as f64;

    let mut bar_counts = vec![0u32; bins];
    for &v in &values {
        let idx = (((v - min) / bin_width) as usize).min(bins - 1);
        bar_counts[idx] += 1;
    }

    // Density curve scaled back to counts
    let scale = values.len() as f64 * bin_width;
    let density: Vec<(f64, f64)> = gaussian_density(&values, min, max, 200)
        .into_iter()
        .map(|(x, d)| (x, d * scale))
        .collect();

    let bar_max = bar_counts.iter().copied().max().unwrap_or(1) as f64;
    let density_max = density.iter().map(|(_, d)| *d).fold(0.0, f64::max);
    let y_max = bar_max.max(density_max) * 1.1;

    let root = BitMapBackend::new(path, (theme.width, theme.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, theme.caption_font())
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(min..min + span, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc("Frequency")
        .label_style(theme.label_font())
        .draw()?;

    let bar_color = theme.color(0);
    chart.draw_series(bar_counts.iter().enumerate().map(|(i, &n)| {
        let x0 = min + i as f64 * bin_width;
        Rectangle::new(
            [(x0, 0.0), (x0 + bin_width, n as f64)],
            bar_color.mix(0.6).filled(),
        )
    }))?;

    if !density.is_empty() {
        chart.draw_series(LineSeries::new(density, theme.color(3).stroke_width(3)))?;
    }

    root.present()?;
    Ok(())
}

fn render_numeric_box_plot(
    df: &DataFrame,
    columns: &[&str],
    title: &str,
    path: &Path,
    theme: &Theme,
) -> Result<()> {
    let mut labels: Vec<String> = Vec::new();
    let mut series: Vec<Vec<f64>> = Vec::new();
    for &column in columns {
        let values = numeric_values(df, column)?;
        if values.is_empty() {
            continue;
        }
        labels.push(column.to_string());
        series.push(values);
    }
    if labels.is_empty() {
        bail!("no non-missing values in any of {:?}", columns);
    }

    draw_box_plots(&labels, &series, title, "", "Value", path, theme)
}

#[allow(clippy::too_many_arguments)]
fn render_grouped_box_plot(
    df: &DataFrame,
    value: &str,
    group: &str,
    title: &str,
    x_label: &str,
    y_label: &str,
    path: &Path,
    theme: &Theme,
) -> Result<()> {
    let groups = string_column(df, group)?;
    let values = numeric_column(df, value)?;

    let mut labels: Vec<String> = Vec::new();
    let mut series: Vec<Vec<f64>> = Vec::new();
    for (g, v) in groups.iter().zip(values.iter()) {
        let (Some(g), Some(v)) = (g, v) else { continue };
        match labels.iter().position(|l| l == g) {
            Some(i) => series[i].push(v),
            None => {
                labels.push(g.to_string());
                series.push(vec![v]);
            }
        }
    }
    if labels.is_empty() {
        bail!("no complete observations for '{}' by '{}'", value, group);
    }

    draw_box_plots(&labels, &series, title, x_label, y_label, path, theme)
}

fn draw_box_plots(
    labels: &[String],
    series: &[Vec<f64>],
    title: &str,
    x_label: &str,
    y_label: &str,
    path: &Path,
    theme: &Theme,
) -> Result<()> {
    let quartiles: Vec<Quartiles> = series.iter().map(|v| Quartiles::new(v)).collect();

    let all_min = series
        .iter()
        .flat_map(|v| v.iter().cloned())
        .fold(f64::INFINITY, f64::min) as f32;
    let all_max = series
        .iter()
        .flat_map(|v| v.iter().cloned())
        .fold(f64::NEG_INFINITY, f64::max) as f32;
    let pad = ((all_max - all_min) * 0.1).max(1.0);

    let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();

    let root = BitMapBackend::new(path, (theme.width, theme.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, theme.caption_font())
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(
            label_refs[..].into_segmented(),
            (all_min - pad)..(all_max + pad),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(theme.label_font())
        .draw()?;

    for (i, quartile) in quartiles.iter().enumerate() {
        chart.draw_series(std::iter::once(
            Boxplot::new_vertical(SegmentValue::CenterOf(&label_refs[i]), quartile)
                .width(40)
                .whisker_width(0.5)
                .style(theme.color(i)),
        ))?;
    }

    root.present()?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn render_scatter(
    df: &DataFrame,
    x: &str,
    y: &str,
    hue: Option<&str>,
    regression: bool,
    title: &str,
    x_label: &str,
    y_label: &str,
    path: &Path,
    theme: &Theme,
) -> Result<()> {
    let xs = numeric_column(df, x)?;
    let ys = numeric_column(df, y)?;

    let points: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| Some((x?, y?)))
        .collect();
    if points.is_empty() {
        bail!("no complete observations for '{}' vs '{}'", x, y);
    }

    let x_min = points.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|(x, _)| *x).fold(f64::NEG_INFINITY, f64::max);
    let y_min = points.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);
    let x_pad = ((x_max - x_min) * 0.05).max(1.0);
    let y_pad = ((y_max - y_min) * 0.05).max(1.0);

    let root = BitMapBackend::new(path, (theme.width, theme.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, theme.caption_font())
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(
            (x_min - x_pad)..(x_max + x_pad),
            (y_min - y_pad)..(y_max + y_pad),
        )?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(theme.label_font())
        .draw()?;

    match hue {
        Some(hue_col) => {
            // One series per hue level, colored from the palette
            let hues = string_column(df, hue_col)?;
            let mut levels: Vec<String> = Vec::new();
            let mut grouped: Vec<Vec<(f64, f64)>> = Vec::new();
            for ((x, y), h) in xs.iter().zip(ys.iter()).zip(hues.iter()) {
                let (Some(x), Some(y), Some(h)) = (x, y, h) else {
                    continue;
                };
                match levels.iter().position(|l| l == h) {
                    Some(i) => grouped[i].push((x, y)),
                    None => {
                        levels.push(h.to_string());
                        grouped.push(vec![(x, y)]);
                    }
                }
            }

            for (i, (level, pts)) in levels.iter().zip(grouped.iter()).enumerate() {
                let color = theme.color(i);
                chart
                    .draw_series(
                        pts.iter()
                            .map(|&(x, y)| Circle::new((x, y), 5, color.filled())),
                    )?
                    .label(level.clone())
                    .legend(move |(x, y)| Circle::new((x + 6, y), 5, color.filled()));
            }

            chart
                .configure_series_labels()
                .border_style(BLACK)
                .background_style(WHITE.mix(0.8))
                .label_font(theme.label_font())
                .draw()?;
        }
        None => {
            let color = theme.color(0);
            chart.draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 5, color.mix(0.6).filled())),
            )?;
        }
    }

    if regression {
        if let Some((slope, intercept)) = linear_fit(&points) {
            let line = [
                (x_min, slope * x_min + intercept),
                (x_max, slope * x_max + intercept),
            ];
            chart.draw_series(LineSeries::new(line, RED.stroke_width(3)))?;
        }
    }

    root.present()?;
    Ok(())
}

fn render_heatmap(df: &DataFrame, title: &str, path: &Path, theme: &Theme) -> Result<()> {
    let matrix = correlation_matrix(df)?;
    let n = matrix.columns.len();
    if n == 0 {
        bail!("no numeric columns for correlation heatmap");
    }

    let root = BitMapBackend::new(path, (theme.width, theme.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, theme.caption_font())
        .margin(20)
        .x_label_area_size(120)
        .y_label_area_size(140)
        .build_cartesian_2d(
            (0i32..n as i32).into_segmented(),
            (0i32..n as i32).into_segmented(),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_label_formatter(&|seg| segment_label(seg, &matrix.columns))
        .y_label_formatter(&|seg| segment_label(seg, &matrix.columns))
        .x_labels(n)
        .y_labels(n)
        .label_style(theme.label_font())
        .draw()?;

    let cells = (0..n).flat_map(|i| (0..n).map(move |j| (i, j)));
    chart.draw_series(cells.clone().map(|(i, j)| {
        let corr = matrix.values[i][j];
        let color = if corr.is_nan() {
            RGBColor(200, 200, 200)
        } else {
            theme.heat_color(corr)
        };
        Rectangle::new(
            [
                (SegmentValue::Exact(i as i32), SegmentValue::Exact(j as i32)),
                (
                    SegmentValue::Exact(i as i32 + 1),
                    SegmentValue::Exact(j as i32 + 1),
                ),
            ],
            color.filled(),
        )
    }))?;

    let annotation_style = theme
        .label_font()
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(cells.map(|(i, j)| {
        let corr = matrix.values[i][j];
        Text::new(
            format!("{:.2}", corr),
            (
                SegmentValue::CenterOf(i as i32),
                SegmentValue::CenterOf(j as i32),
            ),
            annotation_style.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Index of a segmented axis position; the open end maps past every segment.
fn segment_index(seg: &SegmentValue<i32>) -> i32 {
    match seg {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => *i,
        SegmentValue::Last => i32::MAX,
    }
}

/// Map a segmented axis position to its category label.
fn segment_label(seg: &SegmentValue<i32>, labels: &[String]) -> String {
    labels
        .get(segment_index(seg) as usize)
        .cloned()
        .unwrap_or_default()
}

/// Non-missing values of a numeric column.
fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, AnalysisError> {
    Ok(numeric_column(df, name)?.iter().flatten().collect())
}

fn numeric_column(df: &DataFrame, name: &str) -> Result<Float64Chunked, AnalysisError> {
    let column = df
        .column(name)
        .map_err(|_| AnalysisError::missing_column(name))?;
    let column = column
        .cast(&DataType::Float64)
        .map_err(|e| AnalysisError::Computation {
            message: format!("cannot cast column '{}' to float: {}", name, e),
        })?;
    let ca = column.f64().map_err(|e| AnalysisError::Computation {
        message: format!("cannot read column '{}' as float: {}", name, e),
    })?;
    Ok(ca.clone())
}

/// Gaussian kernel density estimate over an evenly spaced grid, using
/// Silverman's rule-of-thumb bandwidth. Returns an empty curve when the
/// sample has no spread.
fn gaussian_density(values: &[f64], min: f64, max: f64, grid: usize) -> Vec<(f64, f64)> {
    let n = values.len() as f64;
    if values.len() < 2 || max <= min {
        return Vec::new();
    }

    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std = var.sqrt();
    if std == 0.0 {
        return Vec::new();
    }

    let bandwidth = 1.06 * std * n.powf(-0.2);
    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let step = (max - min) / (grid - 1) as f64;

    (0..grid)
        .map(|i| {
            let x = min + i as f64 * step;
            let d = values
                .iter()
                .map(|&v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            (x, d)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_density_integrates_to_one() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
        let curve = gaussian_density(&values, -5.0, 15.0, 500);
        let step = 20.0 / 499.0;
        let integral: f64 = curve.iter().map(|(_, d)| d * step).sum();
        assert!((integral - 1.0).abs() < 0.05, "integral was {}", integral);
    }

    #[test]
    fn test_gaussian_density_degenerate_sample() {
        assert!(gaussian_density(&[1.0], 0.0, 2.0, 100).is_empty());
        assert!(gaussian_density(&[3.0, 3.0, 3.0], 2.0, 4.0, 100).is_empty());
    }

    #[test]
    fn test_segment_index_covers_every_position() {
        assert_eq!(segment_index(&SegmentValue::Exact(2)), 2);
        assert_eq!(segment_index(&SegmentValue::CenterOf(5)), 5);
        assert_eq!(segment_index(&SegmentValue::Last), i32::MAX);
    }

    #[test]
    fn test_segment_label() {
        let labels = vec!["a".to_string(), "b".to_string()];
        assert_eq!(segment_label(&SegmentValue::CenterOf(1), &labels), "b");
        assert_eq!(segment_label(&SegmentValue::Exact(0), &labels), "a");
        assert_eq!(segment_label(&SegmentValue::CenterOf(9), &labels), "");
    }
}
