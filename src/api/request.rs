use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    AreaChartConfig, AreaChartLayout, BarChartConfig, BarChartLayout, DonutChartConfig,
    DonutLayout, HoverState, Sample, Viewport, build_area_chart, build_bar_chart,
    build_donut_chart,
};
use crate::error::ChartResult;
use crate::render::{RenderFrame, SceneTheme, area_chart_frame, bar_chart_frame, donut_chart_frame};

/// One chart to lay out: samples plus the config of its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartRequest {
    Area {
        samples: Vec<Sample>,
        #[serde(default)]
        config: AreaChartConfig,
    },
    Bar {
        samples: Vec<Sample>,
        #[serde(default)]
        config: BarChartConfig,
    },
    Donut {
        samples: Vec<Sample>,
        #[serde(default)]
        config: DonutChartConfig,
    },
}

impl ChartRequest {
    #[must_use]
    pub fn area(samples: Vec<Sample>, config: AreaChartConfig) -> Self {
        Self::Area { samples, config }
    }

    #[must_use]
    pub fn bar(samples: Vec<Sample>, config: BarChartConfig) -> Self {
        Self::Bar { samples, config }
    }

    #[must_use]
    pub fn donut(samples: Vec<Sample>, config: DonutChartConfig) -> Self {
        Self::Donut { samples, config }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        match self {
            Self::Area { samples, .. } | Self::Bar { samples, .. } | Self::Donut { samples, .. } => {
                samples
            }
        }
    }

    /// Runs the generator matching the request kind.
    pub fn build(&self) -> ChartResult<ChartLayout> {
        let layout = match self {
            Self::Area { samples, config } => ChartLayout::Area(build_area_chart(samples, config)?),
            Self::Bar { samples, config } => ChartLayout::Bar(build_bar_chart(samples, config)?),
            Self::Donut { samples, config } => {
                ChartLayout::Donut(build_donut_chart(samples, config)?)
            }
        };
        debug!(kind = layout.kind_name(), count = layout.len(), "built chart layout");
        Ok(layout)
    }
}

/// Geometry produced for one [`ChartRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartLayout {
    Area(AreaChartLayout),
    Bar(BarChartLayout),
    Donut(DonutLayout),
}

impl ChartLayout {
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Area(_) => "area",
            Self::Bar(_) => "bar",
            Self::Donut(_) => "donut",
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        match self {
            Self::Area(layout) => layout.viewport,
            Self::Bar(layout) => layout.viewport,
            Self::Donut(layout) => layout.viewport,
        }
    }

    /// Number of hoverable primitives (points, bars or segments).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Area(layout) => layout.points.len(),
            Self::Bar(layout) => layout.bars.len(),
            Self::Donut(layout) => layout.segments.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn frame(&self, hover: HoverState, theme: &SceneTheme) -> RenderFrame {
        match self {
            Self::Area(layout) => area_chart_frame(layout, hover, theme),
            Self::Bar(layout) => bar_chart_frame(layout, hover, theme),
            Self::Donut(layout) => donut_chart_frame(layout, hover, theme),
        }
    }
}
