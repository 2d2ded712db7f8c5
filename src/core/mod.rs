pub mod annotations;
pub mod area;
pub mod bar;
pub mod color;
pub mod donut;
pub mod hover;
pub mod path;
pub mod primitives;
pub mod scale;
pub mod types;

pub use area::{AreaChartConfig, AreaChartLayout, AreaFill, Gridline, ScaledPoint, build_area_chart};
pub use bar::{AxisTick, Bar, BarChartConfig, BarChartLayout, build_bar_chart};
pub use color::{Color, DEFAULT_PALETTE, resolve_series_color};
pub use donut::{ArcCorners, ArcSegment, DonutChartConfig, DonutLayout, build_donut_chart};
pub use hover::{HoverEvent, HoverState, IndexedPrimitive, resolve_active};
pub use path::{PathCommand, PathCommands};
pub use scale::LinearScale;
pub use types::{PixelPoint, Sample, Viewport};
