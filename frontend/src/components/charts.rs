//! Chart components
//!
//! Pie, bar and line charts drawn on an HTML5 canvas. Geometry lives in
//! plain functions so it can be tested off the browser.

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Slice and bar colors, one per series entry.
pub const CHART_COLORS: [&str; 5] = [
    "#ff8c00", // Villas
    "#e07c00", // Houses
    "#d2691e", // Plots
    "#cd853f", // Commercial
    "#deb887", // Rentals
];

const PRIMARY: &str = "#ff8c00";
const GRID: &str = "#e5e7eb";
const LABEL: &str = "#4b5563";

const EMPTY_CHART_TEXT: &str = "No data yet";

const CANVAS_WIDTH: u32 = 480;
const CANVAS_HEIGHT: u32 = 300;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// One labelled value in a chart series.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

pub fn color_for(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

// =============================================================================
// Geometry
// =============================================================================

/// Start/end angles (radians) of each pie slice, starting at 12 o'clock.
///
/// Returns an empty list when the values sum to zero.
pub fn pie_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    values
        .iter()
        .map(|value| {
            let sweep = value.max(0.0) / total * 2.0 * PI;
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// Height of a value on an axis that runs from 0 to `max` over `extent` pixels.
pub fn scale(value: f64, max: f64, extent: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value.max(0.0) / max) * extent
    }
}

/// Canvas coordinates of a line series inside the plot area.
///
/// Points are spread evenly across `width`; a single point sits in the middle.
pub fn line_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    let offset = if values.len() == 1 { width / 2.0 } else { 0.0 };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = offset + i as f64 * step;
            let y = height - scale(*value, max, height);
            (x, y)
        })
        .collect()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Middle of a `width` x `height` canvas.
pub fn centre(width: f64, height: f64) -> (f64, f64) {
    (width / 2.0, height / 2.0)
}

fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_text_align("start");
    ctx.set_text_baseline("alphabetic");
}

fn draw_empty(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    let (x, y) = centre(width, height);
    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("16px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text(EMPTY_CHART_TEXT, x, y);
}

/// Horizontal grid lines with value labels on the left axis.
fn draw_value_axis(ctx: &CanvasRenderingContext2d, max: f64, width: f64, plot_height: f64) {
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("12px sans-serif");

    for i in 0..=4 {
        let y = MARGIN_TOP + (i as f64 / 4.0) * plot_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * max;
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }
}

// =============================================================================
// Drawing
// =============================================================================

fn draw_pie(canvas: &HtmlCanvasElement, data: &[ChartDatum]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear(&ctx, width, height);

    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let angles = pie_angles(&values);
    if angles.is_empty() {
        draw_empty(&ctx, width, height);
        return;
    }

    let (cx, cy) = centre(width, height);
    let outer = 100.0_f64.min(height / 2.0 - 10.0);
    let inner = outer * 0.6;

    for (idx, (start, end)) in angles.into_iter().enumerate() {
        if end <= start {
            continue;
        }
        ctx.set_fill_style(&color_for(idx).into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, start, end);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true);
        ctx.close_path();
        ctx.fill();
    }
}

fn draw_bars(canvas: &HtmlCanvasElement, data: &[ChartDatum]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear(&ctx, width, height);

    if data.is_empty() {
        draw_empty(&ctx, width, height);
        return;
    }

    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let max = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
    draw_value_axis(&ctx, max, width, plot_height);

    let slot = plot_width / data.len() as f64;
    let bar_width = slot * 0.6;

    for (idx, datum) in data.iter().enumerate() {
        let bar_height = scale(datum.value, max, plot_height);
        let x = MARGIN_LEFT + idx as f64 * slot + (slot - bar_width) / 2.0;
        let y = MARGIN_TOP + plot_height - bar_height;

        ctx.set_fill_style(&PRIMARY.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&LABEL.into());
        let _ = ctx.fill_text(&datum.label, x, height - 15.0);
    }
}

fn draw_line(canvas: &HtmlCanvasElement, data: &[ChartDatum]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear(&ctx, width, height);

    if data.is_empty() {
        draw_empty(&ctx, width, height);
        return;
    }

    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    draw_value_axis(&ctx, max, width, plot_height);

    let points: Vec<(f64, f64)> = line_points(&values, plot_width, plot_height)
        .into_iter()
        .map(|(x, y)| (x + MARGIN_LEFT, y + MARGIN_TOP))
        .collect();

    ctx.set_stroke_style(&PRIMARY.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, (x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&PRIMARY.into());
    for (x, y) in &points {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 4.0, 0.0, PI * 2.0);
        ctx.fill();
    }

    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("12px sans-serif");
    for ((x, _), datum) in points.iter().zip(data) {
        let _ = ctx.fill_text(&datum.label, x - 10.0, height - 15.0);
    }
}

// =============================================================================
// Components
// =============================================================================

/// Which drawing routine a [`ChartCanvas`] uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

/// Titled canvas that draws `data` once the element is mounted.
#[component]
pub fn ChartCanvas(
    title: &'static str,
    kind: ChartKind,
    data: Vec<ChartDatum>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend = (kind == ChartKind::Pie).then(|| data.clone());

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            match kind {
                ChartKind::Pie => draw_pie(&canvas, &data),
                ChartKind::Bar => draw_bars(&canvas, &data),
                ChartKind::Line => draw_line(&canvas, &data),
            }
        }
    });

    view! {
        <div class="chart-container">
            <h3>{title}</h3>
            <canvas node_ref=canvas_ref width=CANVAS_WIDTH height=CANVAS_HEIGHT class="chart-canvas"/>
            {legend.map(|entries| view! {
                <div class="chart-legend">
                    {entries.into_iter().enumerate().map(|(idx, entry)| view! {
                        <div class="chart-legend-item">
                            <span class="chart-legend-swatch" style=format!("background-color: {}", color_for(idx))></span>
                            <span>{format!("{} ({})", entry.label, entry.value)}</span>
                        </div>
                    }).collect_view()}
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_pie_angles_cover_full_circle() {
        let angles = pie_angles(&[1.0, 1.0, 2.0]);
        assert_eq!(angles.len(), 3);
        assert!(approx(angles[0].0, -PI / 2.0));
        assert!(approx(angles[0].1 - angles[0].0, PI / 2.0));
        assert!(approx(angles[2].1 - angles[2].0, PI));
        assert!(approx(angles[2].1, -PI / 2.0 + 2.0 * PI));
    }

    #[test]
    fn test_pie_angles_zero_total() {
        assert!(pie_angles(&[0.0, 0.0]).is_empty());
        assert!(pie_angles(&[]).is_empty());
    }

    #[test]
    fn test_zero_slice_has_no_sweep() {
        let angles = pie_angles(&[0.0, 3.0]);
        assert!(approx(angles[0].0, angles[0].1));
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(50.0, 100.0, 200.0), 100.0);
        assert_eq!(scale(10.0, 0.0, 200.0), 0.0);
        assert_eq!(scale(-5.0, 100.0, 200.0), 0.0);
    }

    #[test]
    fn test_line_points_spread() {
        let points = line_points(&[0.0, 50.0, 100.0], 200.0, 100.0);
        assert_eq!(points, vec![(0.0, 100.0), (100.0, 50.0), (200.0, 0.0)]);
    }

    #[test]
    fn test_single_line_point_centered() {
        let points = line_points(&[10.0], 200.0, 100.0);
        assert_eq!(points, vec![(100.0, 0.0)]);
    }

    #[test]
    fn test_centre_tracks_canvas_size() {
        assert_eq!(centre(480.0, 300.0), (240.0, 150.0));
        let (x, _) = centre(60.0, 40.0);
        assert_eq!(x, 30.0);
    }

    #[test]
    fn test_colors_cycle() {
        assert_eq!(color_for(0), "#ff8c00");
        assert_eq!(color_for(5), color_for(0));
    }
}
