use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AreaChartConfig, BarChartConfig, DonutChartConfig, Sample};
use crate::error::{ChartError, ChartResult};

use super::{ChartLayout, ChartRequest};

/// Named chart requests, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub charts: IndexMap<String, ChartRequest>,
}

impl DashboardRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_chart(mut self, name: impl Into<String>, request: ChartRequest) -> Self {
        self.charts.insert(name.into(), request);
        self
    }

    /// Lays out every chart; the first failure is reported with its name.
    pub fn build(&self) -> ChartResult<DashboardLayout> {
        let mut charts = IndexMap::with_capacity(self.charts.len());
        for (name, request) in &self.charts {
            let layout = request.build().map_err(|err| match err {
                ChartError::InvalidData(message) => {
                    ChartError::InvalidData(format!("chart `{name}`: {message}"))
                }
                other => other,
            })?;
            charts.insert(name.clone(), layout);
        }
        debug!(charts = charts.len(), "built dashboard layout");
        Ok(DashboardLayout { charts })
    }
}

/// Layouts of a [`DashboardRequest`], keyed by chart name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub charts: IndexMap<String, ChartLayout>,
}

impl DashboardLayout {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ChartLayout> {
        self.charts.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

/// The demo dashboard: monthly revenue, weekly sales and device share.
#[must_use]
pub fn sample_dashboard() -> DashboardRequest {
    let revenue = [
        ("Jan", 12000.0),
        ("Feb", 19000.0),
        ("Mar", 3000.0),
        ("Apr", 5000.0),
        ("May", 28000.0),
        ("Jun", 45000.0),
    ];
    let sales = [
        ("Mon", 120.0),
        ("Tue", 190.0),
        ("Wed", 300.0),
        ("Thu", 500.0),
        ("Fri", 280.0),
        ("Sat", 450.0),
        ("Sun", 320.0),
    ];
    let devices = [("Desktop", 45.0), ("Mobile", 35.0), ("Tablet", 20.0)];

    DashboardRequest::new()
        .with_chart(
            "revenue",
            ChartRequest::area(samples(&revenue), AreaChartConfig::default().with_height(250.0)),
        )
        .with_chart(
            "sales",
            ChartRequest::bar(samples(&sales), BarChartConfig::default().with_height(250.0)),
        )
        .with_chart(
            "devices",
            ChartRequest::donut(
                samples(&devices),
                DonutChartConfig::default()
                    .with_size(250.0)
                    .with_inner_radius(70.0),
            ),
        )
}

fn samples(rows: &[(&str, f64)]) -> Vec<Sample> {
    rows.iter()
        .map(|&(label, value)| Sample::new(label, value))
        .collect()
}
