//! # claimguard-scoring
//!
//! Synchronous fraud scoring for submitted claims.
//!
//! ## Architecture
//!
//! ```text
//! ScoringEngine
//! ├── prompt (fixed template + attachment selection)
//! ├── INarrativeAnalyzer (GeminiProvider, or none)
//! ├── ScoreExtractor (ordered labeled-percentage patterns)
//! ├── RuleAdjuster (keyword, documentation, description rules)
//! ├── FallbackScorer (heuristic + bounded noise, advisory report)
//! └── classification (risk band, confidence, traditional indicators)
//! ```

pub mod adjustment;
pub mod classification;
pub mod engine;
pub mod extraction;
pub mod fallback;
pub mod keywords;
pub mod prompt;
pub mod providers;

pub use adjustment::RuleAdjuster;
pub use engine::ScoringEngine;
pub use extraction::ScoreExtractor;
pub use fallback::FallbackScorer;
pub use providers::GeminiProvider;
