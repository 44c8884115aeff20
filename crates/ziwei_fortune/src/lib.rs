//! Fortune periods over a natal chart: major and minor limits, and
//! annual/monthly/daily transit overlays.

pub mod error;
pub mod limits;
pub mod transit;

pub use error::FortuneError;
pub use limits::{
    LimitDirection, MajorLimit, major_limit_at, major_limit_direction, major_limits, minor_limit,
};
pub use transit::{Transit, TransitKind, transit};
