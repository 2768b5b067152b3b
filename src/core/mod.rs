pub mod path;
pub mod primitives;
pub mod scale;
pub mod scale_mapper;
pub mod types;

pub use path::{PathDescription, PathVertex, area_path, line_path};
pub use scale::{LinearScale, extent};
pub use scale_mapper::{ChartScales, DEFAULT_PADDING_TOP_PX, compute_scales, scale_data};
pub use types::{DataPoint, ScaledPoint, Viewport};
