pub mod assessment;
pub mod claim;
pub mod preparation;
pub mod round;
pub mod snapshot;
pub mod training;

pub use assessment::{FraudAssessment, ModelStats, RiskLevel};
pub use claim::{ClaimInput, ClaimType, ProofFile};
pub use preparation::{AiDecision, ClaimPreparation};
pub use round::{
    FederationStatus, NodeSummary, ParticipantResult, RoundOutcome, RoundRecord, TrainingHistory,
};
pub use snapshot::CoordinatorSnapshot;
pub use training::{
    ClaimId, ClaimLabel, ClaimStatus, FeatureVector, FinalizedClaim, NodeId, TrainingSample,
};
