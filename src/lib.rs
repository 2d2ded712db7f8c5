//! dashboard-charts: chart geometry for analytics dashboards.
//!
//! `core` holds the stateless generators (scale mapping, area paths, bar
//! layout, donut segments) and the hover index. `render` turns layouts plus
//! caller-owned hover state into backend-agnostic frames, and `api` wraps
//! both behind serializable requests.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartLayout, ChartRequest, ChartView, DashboardLayout, DashboardRequest};
pub use error::{ChartError, ChartResult};
