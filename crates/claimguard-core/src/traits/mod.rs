pub mod narrative_analyzer;
pub mod random_source;
pub mod state_store;

pub use narrative_analyzer::{Attachment, INarrativeAnalyzer, NarrativeRequest};
pub use random_source::{choose, IRandomSource};
pub use state_store::IStateStore;
