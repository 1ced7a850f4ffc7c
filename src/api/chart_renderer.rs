use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ChartData, ValueScale};
use crate::error::{ChartError, ChartResult};
use crate::render::{Attrs, Content, SVG_NAMESPACE, element};

use super::{
    ChartRendererConfig, ColumnRenderer, LayoutEngine, LineRenderer, RenderContext,
    SeriesRenderer, StackedAreaRenderer, StackedColumnRenderer,
};

/// Chart type selected at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    #[default]
    Column,
    StackedColumn,
    Line,
    StackedArea,
}

impl ChartKind {
    pub const ALL: [Self; 4] = [
        Self::Column,
        Self::StackedColumn,
        Self::Line,
        Self::StackedArea,
    ];

    #[must_use]
    pub fn series_renderer(self) -> &'static dyn SeriesRenderer {
        match self {
            Self::Column => &ColumnRenderer,
            Self::StackedColumn => &StackedColumnRenderer,
            Self::Line => &LineRenderer,
            Self::StackedArea => &StackedAreaRenderer,
        }
    }

    #[must_use]
    pub fn is_stacked(self) -> bool {
        self.series_renderer().stacked()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::StackedColumn => "stacked-column",
            Self::Line => "line",
            Self::StackedArea => "stacked-area",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ChartError::InvalidConfig(format!("unknown chart kind: `{s}`")))
    }
}

/// Immutable chart renderer: a validated config plus a chart type.
///
/// `render` is a pure function of its input, so one renderer can be reused
/// for any number of datasets and shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRenderer {
    kind: ChartKind,
    config: ChartRendererConfig,
}

impl ChartRenderer {
    pub fn new(kind: ChartKind, config: ChartRendererConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { kind, config })
    }

    #[must_use]
    pub fn with_defaults(kind: ChartKind) -> Self {
        Self {
            kind,
            config: ChartRendererConfig::default(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn config(&self) -> &ChartRendererConfig {
        &self.config
    }

    /// Axis scale for `data`: the round ceiling above the largest row sum
    /// (stacked kinds) or the largest single value.
    pub fn value_scale(&self, data: &ChartData) -> ChartResult<ValueScale> {
        let observed = if self.kind.is_stacked() {
            data.max_row_total()
        } else {
            data.max_value()
        }
        .ok_or(ChartError::EmptyDataset)?;
        ValueScale::from_observed_max(observed, self.config.height)
    }

    /// Renders `data` as a standalone SVG document.
    ///
    /// The dataset is validated up front; on error no markup is produced.
    pub fn render(&self, data: &ChartData) -> ChartResult<String> {
        let shape = data.validate().inspect_err(|err| {
            warn!(error = %err, kind = %self.kind, "rejecting dataset");
        })?;
        let scale = self.value_scale(data)?;
        let ctx = RenderContext::new(&self.config, scale);
        let layout = LayoutEngine::new(&self.config);

        let mut content = layout.render_axes(&data.rows, scale);
        let legend = data.has_legend().then(|| layout.layout_legend(&data.legend));
        if let Some(legend) = &legend {
            content.push_str(&layout.render_legend(legend));
        }
        content.push_str(
            &self
                .kind
                .series_renderer()
                .render_rows(&ctx, &data.rows, &data.legend)?,
        );
        let table = element(
            "g",
            Content::Markup(&content),
            &Attrs::new().with("role", "table"),
        );

        let view_box = layout.view_box(layout.legend_band_height(legend.as_ref()));
        debug!(
            kind = %self.kind,
            rows = shape.rows,
            series = shape.series,
            max_value = scale.max_value(),
            legend_rows = legend.as_ref().map_or(0, |legend| legend.row_count()),
            "rendered chart"
        );

        Ok(element(
            "svg",
            Content::Markup(&table),
            &Attrs::new()
                .with("xmlns", SVG_NAMESPACE)
                .with("viewBox", view_box)
                .with("font_family", self.config.font_family.as_str())
                .with("font_size", self.config.font_size),
        ))
    }
}
