//! Request/layout plumbing on top of the `core` generators.

mod dashboard;
mod json_contract;
mod request;
mod view;

pub use dashboard::{DashboardLayout, DashboardRequest, sample_dashboard};
pub use json_contract::{
    CHART_LAYOUT_JSON_SCHEMA_V1, ChartLayoutJsonContractV1, DASHBOARD_LAYOUT_JSON_SCHEMA_V1,
    DashboardLayoutJsonContractV1,
};
pub use request::{ChartLayout, ChartRequest};
pub use view::ChartView;
