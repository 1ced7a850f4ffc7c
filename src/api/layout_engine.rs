use crate::core::{LegendLayout, Row, ValueScale, layout_legend};
use crate::render::{Attrs, Content, element, format_coordinate, format_number, line, rect, text};

use super::ChartRendererConfig;

/// Chart furniture shared by every chart type: axes, category labels,
/// legend and view box.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'a> {
    config: &'a ChartRendererConfig,
}

impl<'a> LayoutEngine<'a> {
    #[must_use]
    pub fn new(config: &'a ChartRendererConfig) -> Self {
        Self { config }
    }

    /// Axis lines, three value gridline labels and one label per row.
    #[must_use]
    pub fn render_axes(&self, rows: &[Row], scale: ValueScale) -> String {
        let config = self.config;
        let mut out = String::new();
        out.push_str(&line(0.0, 0.0, 0.0, config.height, &config.ui_color, Attrs::new()));
        out.push_str(&line(
            0.0,
            config.height,
            config.width,
            config.height,
            &config.ui_color,
            Attrs::new(),
        ));

        let mut gridlines = String::new();
        for (y, value) in scale.gridlines() {
            gridlines.push_str(&text(
                format_number(value),
                -config.char_padding,
                y,
                &config.ui_color,
                Attrs::new()
                    .with("dominant_baseline", "middle")
                    .with("text_anchor", "end"),
            ));
        }
        out.push_str(&element(
            "g",
            Content::Markup(&gridlines),
            &Attrs::new().with("aria_hidden", "true"),
        ));

        let mut categories = String::new();
        let band = config.width / rows.len() as f64;
        let y = config.height + config.label_row_height / 2.0;
        for (index, row) in rows.iter().enumerate() {
            categories.push_str(&text(
                &row.label,
                (index as f64 + 0.5) * band,
                y,
                &config.ui_color,
                Attrs::new()
                    .with("dominant_baseline", "middle")
                    .with("text_anchor", "middle")
                    .with("role", "columnheader"),
            ));
        }
        out.push_str(&element(
            "g",
            Content::Markup(&categories),
            &Attrs::new().with("role", "row"),
        ));

        out
    }

    /// Wraps `legend` into rows no wider than the canvas.
    #[must_use]
    pub fn layout_legend(&self, legend: &[String]) -> LegendLayout {
        layout_legend(
            legend,
            self.config.width,
            self.config.legend_row_height,
            self.config.text_metrics(),
        )
    }

    /// Boxed legend: a color swatch and label per series.
    #[must_use]
    pub fn render_legend(&self, layout: &LegendLayout) -> String {
        let config = self.config;
        let mut out = rect(
            layout.box_x,
            layout.box_y,
            layout.width,
            layout.height,
            None,
            Attrs::new()
                .with("fill", "none")
                .with("stroke", config.ui_color.as_str()),
        );

        for entry in layout.rows.iter().flat_map(|row| &row.entries) {
            out.push_str(&rect(
                entry.swatch_x,
                entry.swatch_y,
                entry.swatch_size,
                entry.swatch_size,
                None,
                Attrs::new().with("fill", config.color(entry.series)),
            ));
            out.push_str(&text(
                &entry.label,
                entry.text_x,
                entry.text_y,
                &config.ui_color,
                Attrs::new().with("dominant_baseline", "middle"),
            ));
        }

        element(
            "g",
            Content::Markup(&out),
            &Attrs::new().with("aria_hidden", "true"),
        )
    }

    /// Height reserved above the plot: the legend box, or one empty legend
    /// row when there is no legend.
    #[must_use]
    pub fn legend_band_height(&self, layout: Option<&LegendLayout>) -> f64 {
        layout
            .filter(|layout| !layout.is_empty())
            .map_or(self.config.legend_row_height, |layout| layout.height)
    }

    /// `viewBox` value covering the plot plus label, legend and padding margins.
    #[must_use]
    pub fn view_box(&self, legend_height: f64) -> String {
        let config = self.config;
        let label_width = config.value_label_width();
        let x = -(config.padding + label_width);
        let y = -(config.padding + legend_height);
        let width = config.width + 2.0 * config.padding + label_width;
        let height = config.height + 2.0 * config.padding + config.label_row_height + legend_height;
        [x, y, width, height]
            .map(format_coordinate)
            .join(" ")
    }
}
