//! Chart-ready data and SVG geometry.
//!
//! Everything here is plain arithmetic over slices so the chart components
//! stay thin. Divisions are guarded: a zero denominator yields `0.0`.

use std::f64::consts::{FRAC_PI_2, TAU};

/// One named value of a bar or donut chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
    pub color: &'static str,
}

impl ChartDatum {
    pub fn new(name: impl Into<String>, value: f64, color: &'static str) -> Self {
        Self {
            name: name.into(),
            value,
            color,
        }
    }
}

/// `numerator / denominator`, or `0.0` when undefined.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        0.0
    } else {
        numerator / denominator
    }
}

/// `part` as a percentage of `total`.
pub fn percentage_of(part: f64, total: f64) -> f64 {
    ratio(part, total) * 100.0
}

pub fn max_value(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Bar length relative to the largest bar, clamped to `0..=1`.
pub fn bar_fraction(value: f64, max: f64) -> f64 {
    ratio(value, max).clamp(0.0, 1.0)
}

pub fn top_n<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.iter().take(n).cloned().collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Evenly spaced points scaled so `max` touches the top edge.
pub fn plot_points(values: &[f64], width: f64, height: f64, max: f64) -> Vec<Point> {
    let step = ratio(width, values.len().saturating_sub(1) as f64);
    values
        .iter()
        .enumerate()
        .map(|(i, value)| Point {
            x: i as f64 * step,
            y: height - bar_fraction(*value, max) * height,
        })
        .collect()
}

pub fn line_path(points: &[Point]) -> String {
    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        path.push_str(&format!("{} {:.2},{:.2}", cmd, p.x, p.y));
    }
    path
}

/// Line closed down to the baseline, for filled areas.
pub fn area_path(points: &[Point], height: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!(
        "{} L {:.2},{:.2} L {:.2},{:.2} Z",
        line_path(points),
        last.x,
        height,
        first.x,
        height
    )
}

/// Closed band between a lower and an upper series (confidence interval).
pub fn band_path(lower: &[Point], upper: &[Point]) -> String {
    if lower.is_empty() || upper.is_empty() {
        return String::new();
    }
    let mut path = line_path(upper);
    for p in lower.iter().rev() {
        path.push_str(&format!(" L {:.2},{:.2}", p.x, p.y));
    }
    path.push_str(" Z");
    path
}

/// One ring segment of a donut chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub name: String,
    pub value: f64,
    pub percent: f64,
    pub color: &'static str,
    pub path: String,
}

/// Ring segments starting at twelve o'clock, clockwise. Non-positive
/// values are skipped.
pub fn donut_slices(data: &[ChartDatum], center: Point, outer: f64, inner: f64) -> Vec<DonutSlice> {
    let total: f64 = data.iter().map(|d| d.value.max(0.0)).sum();
    let mut angle = -FRAC_PI_2;
    data.iter()
        .filter(|d| d.value > 0.0)
        .map(|d| {
            let fraction = ratio(d.value, total);
            // a full circle has identical endpoints and would render empty
            let sweep = (fraction * TAU).min(TAU - 1e-4);
            let path = ring_segment(center, outer, inner, angle, angle + sweep);
            angle += sweep;
            DonutSlice {
                name: d.name.clone(),
                value: d.value,
                percent: fraction * 100.0,
                color: d.color,
                path,
            }
        })
        .collect()
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point {
        x: center.x + radius * angle.cos(),
        y: center.y + radius * angle.sin(),
    }
}

fn ring_segment(center: Point, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let large_arc = if end - start > std::f64::consts::PI { 1 } else { 0 };
    let o1 = polar(center, outer, start);
    let o2 = polar(center, outer, end);
    let i2 = polar(center, inner, end);
    let i1 = polar(center, inner, start);
    format!(
        "M {:.2},{:.2} A {:.2},{:.2} 0 {} 1 {:.2},{:.2} L {:.2},{:.2} A {:.2},{:.2} 0 {} 0 {:.2},{:.2} Z",
        o1.x, o1.y, outer, outer, large_arc, o2.x, o2.y, i2.x, i2.y, inner, inner, large_arc, i1.x, i1.y
    )
}

/// Indices of at most `count` evenly spread labels along an axis.
pub fn axis_label_indices(len: usize, count: usize) -> Vec<usize> {
    if len == 0 || count == 0 {
        return Vec::new();
    }
    if len <= count {
        return (0..len).collect();
    }
    let step = (len - 1) as f64 / (count - 1).max(1) as f64;
    let mut indices: Vec<usize> = (0..count).map(|i| (i as f64 * step).round() as usize).collect();
    indices.dedup();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_guards_zero_denominator() {
        assert_eq!(ratio(10.0, 0.0), 0.0);
        assert_eq!(ratio(10.0, 4.0), 2.5);
        assert_eq!(percentage_of(1.0, 4.0), 25.0);
        assert_eq!(ratio(f64::NAN, 2.0), 0.0);
    }

    #[test]
    fn test_bar_fraction() {
        assert_eq!(bar_fraction(50.0, 200.0), 0.25);
        assert_eq!(bar_fraction(5.0, 0.0), 0.0);
        assert_eq!(bar_fraction(300.0, 200.0), 1.0);
        assert_eq!(max_value(vec![1.0, f64::NAN, 7.5, 3.0]), 7.5);
        assert_eq!(max_value(Vec::new()), 0.0);
    }

    #[test]
    fn test_plot_points_scale_to_height() {
        let points = plot_points(&[0.0, 50.0, 100.0], 200.0, 100.0, 100.0);
        assert_eq!(points[0], Point { x: 0.0, y: 100.0 });
        assert_eq!(points[1], Point { x: 100.0, y: 50.0 });
        assert_eq!(points[2], Point { x: 200.0, y: 0.0 });
        assert_eq!(line_path(&points[..2]), "M 0.00,100.00 L 100.00,50.00");
    }

    #[test]
    fn test_single_point_and_empty_series() {
        let points = plot_points(&[10.0], 200.0, 100.0, 10.0);
        assert_eq!(points, vec![Point { x: 0.0, y: 0.0 }]);
        assert_eq!(area_path(&[], 100.0), "");
        assert_eq!(band_path(&[], &points), "");
    }

    #[test]
    fn test_donut_percentages() {
        let data = vec![
            ChartDatum::new("A", 30.0, "#10b981"),
            ChartDatum::new("B", 0.0, "#f59e0b"),
            ChartDatum::new("C", 10.0, "#ef4444"),
        ];
        let slices = donut_slices(&data, Point { x: 50.0, y: 50.0 }, 40.0, 25.0);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].percent, 75.0);
        assert_eq!(slices[1].percent, 25.0);
        assert!(slices[0].path.starts_with("M 50.00,10.00"));
    }

    #[test]
    fn test_donut_of_zeros_is_empty() {
        let data = vec![ChartDatum::new("A", 0.0, "#10b981")];
        assert!(donut_slices(&data, Point { x: 0.0, y: 0.0 }, 1.0, 0.5).is_empty());
    }

    #[test]
    fn test_axis_label_indices() {
        assert_eq!(axis_label_indices(3, 6), vec![0, 1, 2]);
        assert_eq!(axis_label_indices(30, 4), vec![0, 10, 19, 29]);
        assert!(axis_label_indices(0, 4).is_empty());
    }
}
