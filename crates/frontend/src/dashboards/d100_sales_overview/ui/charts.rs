//! Inline-SVG chart rendering for the overview dashboard.
//!
//! Each chart is a deterministic function of its `ChartSpec`: no retained
//! state, the whole SVG is rebuilt on every recompute.

use crate::dashboards::d100_sales_overview::view_model::{ChartKind, ChartSpec};
use crate::shared::number_format::format_int;
use contracts::dashboards::d100_sales_overview::dto::SeriesPoint;
use leptos::prelude::*;

const VIEW_W: f64 = 480.0;
const VIEW_H: f64 = 260.0;
const PLOT_TOP: f64 = 16.0;
const PLOT_BOTTOM: f64 = 224.0;
const PLOT_LEFT: f64 = 16.0;
const PLOT_RIGHT: f64 = 464.0;

/// Design-system blues (primary first) and the performance green
const PALETTE: [&str; 5] = ["#0078D4", "#1084D7", "#1890DB", "#209CDF", "#28A8E3"];
const PERFORMANCE_COLOR: &str = "#107c10";

/// Largest series value, clamped so scaling never divides by zero
fn max_value(points: &[SeriesPoint]) -> f64 {
    let max = points.iter().map(|p| p.value).fold(0.0f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Vertical position for a value, baseline at the plot bottom
fn scale_y(value: f64, max: f64) -> f64 {
    PLOT_BOTTOM - (value / max) * (PLOT_BOTTOM - PLOT_TOP)
}

/// Horizontal position of the i-th of n line points
fn line_x(i: usize, n: usize) -> f64 {
    if n <= 1 {
        (PLOT_LEFT + PLOT_RIGHT) / 2.0
    } else {
        PLOT_LEFT + (PLOT_RIGHT - PLOT_LEFT) * i as f64 / (n - 1) as f64
    }
}

/// "x1,y1 x2,y2 ..." for a polyline over the series
fn polyline_points(points: &[SeriesPoint], max: f64) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", line_x(i, points.len()), scale_y(p.value, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Polyline closed down to the baseline, for the filled area
fn area_points(points: &[SeriesPoint], max: f64) -> String {
    let first_x = line_x(0, points.len());
    let last_x = line_x(points.len() - 1, points.len());
    format!(
        "{:.1},{:.1} {} {:.1},{:.1}",
        first_x,
        PLOT_BOTTOM,
        polyline_points(points, max),
        last_x,
        PLOT_BOTTOM
    )
}

/// Point on a circle at `frac` of a full turn, starting at 12 o'clock
fn donut_point(cx: f64, cy: f64, r: f64, frac: f64) -> (f64, f64) {
    let angle = frac * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG arc path for one donut segment, fractions in 0..=1
fn donut_segment_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    // A full single-segment circle would collapse to a zero-length arc
    let end = end.min(start + 0.9999);
    let (x1, y1) = donut_point(cx, cy, r, start);
    let (x2, y2) = donut_point(cx, cy, r, end);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!("M {x1:.2} {y1:.2} A {r:.1} {r:.1} 0 {large_arc} 1 {x2:.2} {y2:.2}")
}

/// Share of each point in the series total, percent with one decimal
fn donut_shares(points: &[SeriesPoint]) -> Vec<f64> {
    let total: f64 = points.iter().map(|p| p.value).sum();
    if total <= 0.0 {
        return vec![0.0; points.len()];
    }
    points.iter().map(|p| p.value / total * 100.0).collect()
}

/// One chart card: title plus the SVG for the spec's kind
#[component]
pub fn ChartCard(spec: ChartSpec) -> impl IntoView {
    let body = match spec.kind {
        ChartKind::AreaLine => render_area_line(&spec.points),
        ChartKind::Bar => render_bars(&spec.points),
        ChartKind::Donut => render_donut(&spec.points),
        ChartKind::HBar => render_hbars(&spec.points),
    };

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{spec.title}</h3>
            {body}
        </div>
    }
}

fn render_area_line(points: &[SeriesPoint]) -> AnyView {
    if points.is_empty() {
        return view! { <svg viewBox={format!("0 0 {VIEW_W} {VIEW_H}")} class="chart-svg"></svg> }
            .into_any();
    }
    let max = max_value(points);
    let n = points.len();

    let markers = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cx = line_x(i, n);
            let cy = scale_y(p.value, max);
            view! { <circle cx=cx cy=cy r="3" fill={PALETTE[0]} stroke="white" stroke-width="1" /> }
        })
        .collect_view();

    let first_label = points.first().map(|p| p.category.clone()).unwrap_or_default();
    let last_label = points.last().map(|p| p.category.clone()).unwrap_or_default();

    view! {
        <svg viewBox={format!("0 0 {VIEW_W} {VIEW_H}")} class="chart-svg">
            <line x1=PLOT_LEFT y1=PLOT_BOTTOM x2=PLOT_RIGHT y2=PLOT_BOTTOM stroke="#f0f0f0" />
            <polygon points={area_points(points, max)} fill="rgba(0, 120, 212, 0.1)" />
            <polyline
                points={polyline_points(points, max)}
                fill="none"
                stroke={PALETTE[0]}
                stroke-width="2.5"
            />
            {markers}
            <text x=PLOT_LEFT y={VIEW_H - 8.0} font-size="10" fill="#666">{first_label}</text>
            <text x=PLOT_RIGHT y={VIEW_H - 8.0} font-size="10" fill="#666" text-anchor="end">
                {last_label}
            </text>
        </svg>
    }
    .into_any()
}

fn render_bars(points: &[SeriesPoint]) -> AnyView {
    let max = max_value(points);
    let n = points.len();
    let band = (PLOT_RIGHT - PLOT_LEFT) / n as f64;
    let bar_w = band * 0.6;

    let bars = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = PLOT_LEFT + band * i as f64 + (band - bar_w) / 2.0;
            let y = scale_y(p.value, max);
            let center = PLOT_LEFT + band * (i as f64 + 0.5);
            let color = PALETTE[i % PALETTE.len()];
            let category = p.category.clone();
            let value_label = format_int(p.value.round() as u64);
            view! {
                <rect x=x y=y width=bar_w height={PLOT_BOTTOM - y} fill=color rx="2" />
                <text x=center y={y - 4.0} font-size="9" fill="#666" text-anchor="middle">
                    {value_label}
                </text>
                <text x=center y={VIEW_H - 8.0} font-size="10" fill="#666" text-anchor="middle">
                    {category}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg viewBox={format!("0 0 {VIEW_W} {VIEW_H}")} class="chart-svg">
            <line x1=PLOT_LEFT y1=PLOT_BOTTOM x2=PLOT_RIGHT y2=PLOT_BOTTOM stroke="#f0f0f0" />
            {bars}
        </svg>
    }
    .into_any()
}

fn render_donut(points: &[SeriesPoint]) -> AnyView {
    let shares = donut_shares(points);
    let (cx, cy, r) = (130.0, VIEW_H / 2.0, 78.0);

    let mut cursor = 0.0f64;
    let segments = points
        .iter()
        .zip(&shares)
        .enumerate()
        .map(|(i, (_, share))| {
            let start = cursor;
            cursor += share / 100.0;
            let d = donut_segment_path(cx, cy, r, start, cursor);
            view! {
                <path d=d fill="none" stroke={PALETTE[i % PALETTE.len()]} stroke-width="30" />
            }
        })
        .collect_view();

    let legend = points
        .iter()
        .zip(&shares)
        .enumerate()
        .map(|(i, (p, share))| {
            let y = 60.0 + i as f64 * 26.0;
            let label = format!("{} — {:.1}%", p.category, share);
            view! {
                <rect x="250" y={y - 9.0} width="12" height="12" fill={PALETTE[i % PALETTE.len()]} rx="2" />
                <text x="268" y={y + 1.0} font-size="11" fill="#333">{label}</text>
            }
        })
        .collect_view();

    view! {
        <svg viewBox={format!("0 0 {VIEW_W} {VIEW_H}")} class="chart-svg">
            {segments}
            {legend}
        </svg>
    }
    .into_any()
}

fn render_hbars(points: &[SeriesPoint]) -> AnyView {
    let max = max_value(points);
    let n = points.len();
    let row_h = (PLOT_BOTTOM - PLOT_TOP) / n as f64;
    let bar_h = (row_h * 0.55).min(22.0);
    let left = 110.0;

    let bars = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let y = PLOT_TOP + row_h * i as f64 + (row_h - bar_h) / 2.0;
            let width = (p.value / max) * (PLOT_RIGHT - left);
            let category = p.category.clone();
            let value_label = format!("{:.0}%", p.value);
            view! {
                <text
                    x={left - 8.0}
                    y={y + bar_h / 2.0 + 4.0}
                    font-size="11"
                    fill="#333"
                    text-anchor="end"
                >
                    {category}
                </text>
                <rect x=left y=y width=width height=bar_h fill=PERFORMANCE_COLOR rx="2" />
                <text x={left + width + 6.0} y={y + bar_h / 2.0 + 4.0} font-size="10" fill="#666">
                    {value_label}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg viewBox={format!("0 0 {VIEW_W} {VIEW_H}")} class="chart-svg">
            {bars}
        </svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<SeriesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| SeriesPoint::new(format!("c{i}"), *v))
            .collect()
    }

    #[test]
    fn test_scale_y_endpoints() {
        assert_eq!(scale_y(0.0, 100.0), PLOT_BOTTOM);
        assert_eq!(scale_y(100.0, 100.0), PLOT_TOP);
    }

    #[test]
    fn test_max_value_guards_zero() {
        assert_eq!(max_value(&[]), 1.0);
        assert_eq!(max_value(&series(&[0.0, 0.0])), 1.0);
        assert_eq!(max_value(&series(&[3.0, 7.0])), 7.0);
    }

    #[test]
    fn test_single_point_is_centered() {
        assert_eq!(line_x(0, 1), (PLOT_LEFT + PLOT_RIGHT) / 2.0);
        assert_eq!(line_x(0, 2), PLOT_LEFT);
        assert_eq!(line_x(1, 2), PLOT_RIGHT);
    }

    #[test]
    fn test_polyline_has_one_pair_per_point() {
        let pts = polyline_points(&series(&[1.0, 2.0, 3.0]), 3.0);
        assert_eq!(pts.split(' ').count(), 3);
        // The highest value sits at the plot top
        assert!(pts.ends_with(&format!("{:.1},{:.1}", PLOT_RIGHT, PLOT_TOP)));
    }

    #[test]
    fn test_area_points_close_to_baseline() {
        let pts = area_points(&series(&[5.0, 5.0]), 5.0);
        let pairs: Vec<&str> = pts.split(' ').collect();
        assert_eq!(pairs.len(), 4);
        assert!(pairs[0].ends_with(&format!(",{:.1}", PLOT_BOTTOM)));
        assert!(pairs[3].ends_with(&format!(",{:.1}", PLOT_BOTTOM)));
    }

    #[test]
    fn test_donut_shares_sum_to_100() {
        let shares = donut_shares(&series(&[1.0, 1.0, 2.0]));
        assert_eq!(shares, vec![25.0, 25.0, 50.0]);
        assert!((shares.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_donut_shares_zero_total() {
        assert_eq!(donut_shares(&series(&[0.0, 0.0])), vec![0.0, 0.0]);
    }

    #[test]
    fn test_donut_segment_large_arc_flag() {
        let minor = donut_segment_path(0.0, 0.0, 10.0, 0.0, 0.25);
        let major = donut_segment_path(0.0, 0.0, 10.0, 0.0, 0.75);
        assert!(minor.contains(" 0 0 1 "));
        assert!(major.contains(" 0 1 1 "));
    }
}
