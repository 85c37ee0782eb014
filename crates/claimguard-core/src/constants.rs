/// ClaimGuard version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Global accuracy reported before any round has run, and after a reset.
pub const INITIAL_GLOBAL_ACCURACY: f64 = 0.75;

/// Base score used when narrative text carries no labeled percentage.
pub const NEUTRAL_BASE_SCORE: f64 = 0.5;

/// Number of components in a claim feature vector.
pub const FEATURE_DIMENSIONS: usize = 5;

/// Claim amount that saturates the amount feature.
pub const FEATURE_AMOUNT_CEILING: f64 = 500_000.0;

/// Description length (chars) that saturates the description feature.
pub const FEATURE_DESCRIPTION_CEILING: f64 = 500.0;

/// Placeholder classifier fields reported while the supervised classifier is disabled.
pub const PLACEHOLDER_FRAUD_TYPE: &str = "N/A";
pub const PLACEHOLDER_ML_CONFIDENCE: f64 = 0.0;
