//! SVG serialization: the generic markup builder and chart geometry primitives.
//!
//! Nothing here knows about datasets or layout; callers hand in pixel
//! coordinates and receive deterministic markup text.

mod markup;
mod primitives;

pub use markup::{
    AttrValue, Attrs, COORDINATE_PRECISION, Content, element, escape_attr, escape_text,
    format_coordinate, format_number, normalize_attr_name,
};
pub use primitives::{
    DEFAULT_MARKER_RADIUS, circle, line, path, path_data, polyline, polyline_points, rect, text,
};

/// SVG namespace carried by the root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
