use std::fmt::Display;

use crate::core::PlotPoint;
use crate::render::markup::{Attrs, Content, element, format_coordinate};

/// Default radius of hover markers on line and area charts.
pub const DEFAULT_MARKER_RADIUS: f64 = 3.0;

/// Straight stroke from `(x1, y1)` to `(x2, y2)`.
#[must_use]
pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, color: &str, attrs: Attrs) -> String {
    let attrs = attrs
        .with("x1", x1)
        .with("x2", x2)
        .with("y1", y1)
        .with("y2", y2)
        .with("stroke", color);
    element("line", Content::Empty, &attrs)
}

/// Text label anchored at `(x, y)`, filled with `fill`.
#[must_use]
pub fn text(value: impl Display, x: f64, y: f64, fill: &str, attrs: Attrs) -> String {
    let attrs = attrs.with("x", x).with("y", y).with("fill", fill);
    element("text", Content::Text(&value.to_string()), &attrs)
}

/// Rectangle with an optional `<title>` tooltip child.
#[must_use]
pub fn rect(x: f64, y: f64, width: f64, height: f64, title: Option<&str>, attrs: Attrs) -> String {
    let attrs = attrs
        .with("x", x)
        .with("y", y)
        .with("width", width)
        .with("height", height);
    with_title("rect", title, &attrs)
}

/// Circle with an optional `<title>` tooltip child.
#[must_use]
pub fn circle(x: f64, y: f64, radius: f64, title: Option<&str>, attrs: Attrs) -> String {
    let attrs = attrs.with("cx", x).with("cy", y).with("r", radius);
    with_title("circle", title, &attrs)
}

/// Path through `points` using one absolute move-to and a line-to run.
///
/// Callers close shapes by supplying the full boundary; a single point
/// yields a bare move-to.
#[must_use]
pub fn path(points: &[PlotPoint], attrs: Attrs) -> String {
    let attrs = attrs.with("d", path_data(points));
    element("path", Content::Empty, &attrs)
}

/// Open stroke through `points`.
#[must_use]
pub fn polyline(points: &[PlotPoint], attrs: Attrs) -> String {
    let attrs = attrs.with("points", polyline_points(points));
    element("polyline", Content::Empty, &attrs)
}

/// `d` attribute text: `M x0,y0 L x1,y1 x2,y2 ...`.
#[must_use]
pub fn path_data(points: &[PlotPoint]) -> String {
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut d = format!("M {}", point_pair(*first));
    let mut first_segment = true;
    for point in iter {
        d.push_str(if first_segment { " L " } else { " " });
        d.push_str(&point_pair(*point));
        first_segment = false;
    }
    d
}

/// `points` attribute text: `x0,y0 x1,y1 ...`.
#[must_use]
pub fn polyline_points(points: &[PlotPoint]) -> String {
    points
        .iter()
        .map(|point| point_pair(*point))
        .collect::<Vec<_>>()
        .join(" ")
}

fn point_pair(point: PlotPoint) -> String {
    format!(
        "{},{}",
        format_coordinate(point.x),
        format_coordinate(point.y)
    )
}

fn with_title(tag: &str, title: Option<&str>, attrs: &Attrs) -> String {
    match title.filter(|title| !title.is_empty()) {
        Some(title) => {
            let child = element("title", Content::Text(title), &Attrs::new());
            element(tag, Content::Markup(&child), attrs)
        }
        None => element(tag, Content::Empty, attrs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(f64, f64)]) -> Vec<PlotPoint> {
        raw.iter().copied().map(PlotPoint::from).collect()
    }

    #[test]
    fn path_data_handles_degenerate_inputs() {
        assert_eq!(path_data(&[]), "");
        assert_eq!(path_data(&points(&[(1.0, 2.5)])), "M 1,2.5");
        assert_eq!(
            path_data(&points(&[(0.0, 0.0), (10.0, 5.0), (20.0, 0.0)])),
            "M 0,0 L 10,5 20,0"
        );
    }

    #[test]
    fn polyline_points_trim_precision() {
        assert_eq!(
            polyline_points(&points(&[(640.0 / 3.0, 240.0), (1.5, 0.0)])),
            "213.333,240 1.5,0"
        );
        assert_eq!(polyline_points(&points(&[(4.0, 4.0)])), "4,4");
    }

    #[test]
    fn rect_embeds_escaped_title() {
        let out = rect(1.0, 2.0, 3.0, 4.0, Some("A & B: 1"), Attrs::new());
        assert_eq!(
            out,
            "<rect height=\"4\" width=\"3\" x=\"1\" y=\"2\">\n\t<title>A &amp; B: 1</title>\n</rect>\n"
        );
    }

    #[test]
    fn circle_without_title_self_closes() {
        let out = circle(5.0, 6.0, DEFAULT_MARKER_RADIUS, None, Attrs::new());
        assert_eq!(out, "<circle cx=\"5\" cy=\"6\" r=\"3\" />\n");
    }
}
