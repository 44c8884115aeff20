//! Zi Wei Dou Shu natal chart computation.
//!
//! The pipeline: locate the Life and Body palaces from lunar month and
//! hour branch, take the five-element bureau from the Life palace's
//! nayin, place the 28-star catalogue, then mark the year stem's four
//! transformations. Everything is deterministic table arithmetic over
//! the twelve-branch ring.

pub mod bureau;
pub mod chart;
pub mod error;
pub mod palace;
pub mod star;
pub mod transform;

pub use bureau::{Bureau, bureau};
pub use chart::{Chart, House, PlacedStar, chart_at, natal_chart};
pub use error::ChartError;
pub use palace::{ALL_PALACES, PalaceName, body_palace, house_stem, life_palace, palace_label};
pub use star::{ALL_STARS, Star, StarCategory, place_stars, ziwei_branch};
pub use transform::{
    ALL_TRANSFORMATIONS, Transformation, transformation_of, transformed_stars,
};
