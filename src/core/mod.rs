pub mod dataset;
pub mod geometry;
pub mod primitives;
pub mod rates;
pub mod scale;
pub mod types;

pub use dataset::{DailyRecord, Dataset, assign_variation_ids};
pub use geometry::{
    CurveKind, PathCommand, PathVertex, SeriesPath, category_x_positions, curve_commands,
    project_series_path,
};
pub use rates::{RATE_DECIMALS, RatePoint, compute_rate_point, compute_rate_points};
pub use scale::LinearScale;
pub use types::{LineStyle, Variation, Viewport};
