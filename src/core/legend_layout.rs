use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Fixed-width text estimate used where no font measurement is available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub char_width: f64,
    pub char_padding: f64,
}

impl TextMetrics {
    #[must_use]
    pub const fn new(char_width: f64, char_padding: f64) -> Self {
        Self {
            char_width,
            char_padding,
        }
    }

    /// Estimated pixel width of `text`.
    #[must_use]
    pub fn text_width(self, text: &str) -> f64 {
        self.char_width * text.chars().count() as f64
    }

    /// Width taken by one legend entry: swatch, gap, label and trailing margin.
    #[must_use]
    pub fn legend_entry_width(self, label: &str) -> f64 {
        self.char_width + self.char_padding + self.text_width(label) + self.char_width
    }

    /// Box width for a legend row whose entries sum to `entries_width`.
    ///
    /// The box adds leading padding and swaps the last entry's margin for padding.
    #[must_use]
    pub fn legend_row_width(self, entries_width: f64) -> f64 {
        2.0 * self.char_padding - self.char_width + entries_width
    }
}

/// One legend key: colored swatch followed by its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Series index, used to pick the swatch color.
    pub series: usize,
    pub label: String,
    pub swatch_x: f64,
    pub swatch_y: f64,
    pub swatch_size: f64,
    pub text_x: f64,
    pub text_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendRow {
    pub width: f64,
    pub entries: Vec<LegendEntry>,
}

/// Wrapped legend placed above the plot and right-aligned to the canvas.
///
/// `box_y` is negative: the legend lives outside the plotting rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub box_x: f64,
    pub box_y: f64,
    pub width: f64,
    pub height: f64,
    pub rows: Vec<LegendRow>,
}

impl LegendLayout {
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Lays legend labels out left to right, wrapping when a row would overflow
/// `canvas_width`.
///
/// A row always takes at least one entry, so a single label wider than the
/// canvas still gets its own row and the box grows past the left edge.
#[must_use]
pub fn layout_legend(
    labels: &[String],
    canvas_width: f64,
    row_height: f64,
    metrics: TextMetrics,
) -> LegendLayout {
    let mut wrapped: Vec<SmallVec<[usize; 8]>> = Vec::new();
    let mut current: SmallVec<[usize; 8]> = SmallVec::new();
    let mut current_width = 0.0;
    for (index, label) in labels.iter().enumerate() {
        let entry_width = metrics.legend_entry_width(label);
        if !current.is_empty()
            && metrics.legend_row_width(current_width + entry_width) > canvas_width
        {
            wrapped.push(std::mem::take(&mut current));
            current_width = 0.0;
        }
        current.push(index);
        current_width += entry_width;
    }
    if !current.is_empty() {
        wrapped.push(current);
    }

    let row_widths: Vec<f64> = wrapped
        .iter()
        .map(|row| {
            let entries_width: f64 = row
                .iter()
                .map(|&index| metrics.legend_entry_width(&labels[index]))
                .sum();
            metrics.legend_row_width(entries_width)
        })
        .collect();

    let width = row_widths.iter().copied().fold(0.0, f64::max);
    let height = row_height * wrapped.len() as f64;
    let box_x = canvas_width - width;
    let box_y = -height;

    let rows = wrapped
        .iter()
        .zip(row_widths)
        .enumerate()
        .map(|(row_index, (indices, row_width))| {
            let center_y = box_y + row_height * (row_index as f64 + 0.5);
            let mut x = box_x + metrics.char_padding;
            let mut entries = Vec::with_capacity(indices.len());
            for &series in indices {
                let label = &labels[series];
                let swatch_size = metrics.char_width;
                let swatch_x = x;
                x += metrics.char_width + metrics.char_padding;
                entries.push(LegendEntry {
                    series,
                    label: label.clone(),
                    swatch_x,
                    swatch_y: center_y - swatch_size / 2.0,
                    swatch_size,
                    text_x: x,
                    text_y: center_y,
                });
                x += metrics.text_width(label) + metrics.char_width;
            }
            LegendRow {
                width: row_width,
                entries,
            }
        })
        .collect();

    LegendLayout {
        box_x,
        box_y,
        width,
        height,
        rows,
    }
}
