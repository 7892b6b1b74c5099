/// Lower bound of the rating scale.
pub const RATING_SCALE_MIN: f64 = 0.0;

/// Upper bound of the rating scale.
pub const RATING_SCALE_MAX: f64 = 5.0;

/// Smallest rating observed in practice (half-star scale starts at 0.5).
pub const MIN_OBSERVED_RATING: f64 = 0.5;

/// Largest possible difference between two observed ratings.
/// Average absolute differences are normalized by this span.
pub const RATING_SPAN: f64 = RATING_SCALE_MAX - MIN_OBSERVED_RATING;

/// Midpoint of the rating scale, returned when no similarity evidence exists.
pub const RATING_SCALE_MIDPOINT: f64 = (RATING_SCALE_MIN + RATING_SCALE_MAX) / 2.0;

/// Upper bound for configurable rounding precision.
pub const MAX_DECIMAL_PLACES: u32 = 10;
