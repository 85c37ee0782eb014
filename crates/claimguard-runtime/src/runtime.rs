//! ClaimGuardRuntime: explicit context object replacing process-wide globals.
//!
//! Lifecycle: construct once (config → provider → store → coordinator),
//! share by reference, call [`ClaimGuardRuntime::shutdown`] on exit.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use claimguard_core::config::ClaimGuardConfig;
use claimguard_core::errors::{ClaimGuardError, ClaimGuardResult};
use claimguard_core::models::{
    ClaimInput, ClaimPreparation, FederationStatus, FinalizedClaim, FraudAssessment, ModelStats,
    ProofFile, RoundOutcome, TrainingHistory,
};
use claimguard_core::tracing_setup;
use claimguard_core::traits::{INarrativeAnalyzer, IRandomSource, IStateStore};
use claimguard_core::SeededRandom;
use claimguard_federation::Coordinator;
use claimguard_scoring::{providers, ScoringEngine};
use tracing::info;

use crate::preparation;

/// Mixed into the configured seed for the scoring stream so fallback noise and
/// federation draws are not the same sequence.
const SCORING_SEED_MIX: u64 = 0x9E37_79B9;

fn scoring_seed(seed: Option<u64>) -> Option<u64> {
    seed.map(|s| s ^ SCORING_SEED_MIX)
}

/// Owns all mutable pipeline state.
///
/// Engines that need `&mut self` sit behind a `Mutex`, which gives every
/// operation single-writer semantics.
pub struct ClaimGuardRuntime {
    config: ClaimGuardConfig,
    scoring: Mutex<ScoringEngine>,
    coordinator: Mutex<Coordinator>,
}

impl ClaimGuardRuntime {
    /// Process startup: resolve config from defaults, `path`, and environment,
    /// install the tracing subscriber, then build.
    pub fn load(path: Option<&Path>) -> ClaimGuardResult<Self> {
        let config = ClaimGuardConfig::load(path)?;
        tracing_setup::init_tracing(&config.observability);
        Self::from_config(config)
    }

    /// Build every component from a config.
    pub fn from_config(config: ClaimGuardConfig) -> ClaimGuardResult<Self> {
        ClaimGuardConfig::validate(&config)?;
        let analyzer = providers::from_config(&config.narrative);
        let store = claimguard_storage::open_store(&config.storage)?;
        let seed = config.federation.seed;
        Self::with_parts(
            config,
            analyzer,
            store,
            Box::new(SeededRandom::from_optional_seed(scoring_seed(seed))),
            Box::new(SeededRandom::from_optional_seed(seed)),
        )
    }

    /// Build from injected collaborators.
    pub fn with_parts(
        config: ClaimGuardConfig,
        analyzer: Option<Box<dyn INarrativeAnalyzer>>,
        store: Box<dyn IStateStore>,
        scoring_rng: Box<dyn IRandomSource>,
        federation_rng: Box<dyn IRandomSource>,
    ) -> ClaimGuardResult<Self> {
        let coordinator = Coordinator::new(
            &config.federation.nodes,
            store,
            federation_rng,
            config.federation.history_limit,
        )?;
        let scoring = ScoringEngine::new(analyzer, scoring_rng, config.scoring.clone());

        info!(
            version = claimguard_core::constants::VERSION,
            nodes = config.federation.nodes.len(),
            storage = %config.storage.backend,
            "claimguard runtime ready"
        );

        Ok(Self {
            config,
            scoring: Mutex::new(scoring),
            coordinator: Mutex::new(coordinator),
        })
    }

    pub fn config(&self) -> &ClaimGuardConfig {
        &self.config
    }

    /// Score a claim synchronously.
    pub fn assess(&self, claim: &ClaimInput, files: &[ProofFile]) -> ClaimGuardResult<FraudAssessment> {
        claim.validate()?;
        Ok(self.scoring()?.assess(claim, files))
    }

    /// Score a claim and build the record the ledger stores with it.
    pub fn prepare_claim(
        &self,
        claim: &ClaimInput,
        files: &[ProofFile],
    ) -> ClaimGuardResult<ClaimPreparation> {
        claim.validate()?;
        let mut engine = self.scoring()?;
        let assessment = engine.assess(claim, files);
        let number = preparation::claim_number(engine.rng());
        Ok(preparation::prepare(number, assessment))
    }

    pub fn model_stats(&self) -> ClaimGuardResult<ModelStats> {
        Ok(self.scoring()?.stats())
    }

    /// Returns how many claims were newly accepted.
    pub fn ingest(&self, claims: &[FinalizedClaim]) -> ClaimGuardResult<usize> {
        Ok(self.coordinator()?.ingest(claims))
    }

    pub fn train_round(&self, claims: Option<&[FinalizedClaim]>) -> ClaimGuardResult<RoundOutcome> {
        Ok(self.coordinator()?.train_round(claims))
    }

    pub fn status(&self) -> ClaimGuardResult<FederationStatus> {
        Ok(self.coordinator()?.status())
    }

    pub fn history(&self) -> ClaimGuardResult<TrainingHistory> {
        Ok(self.coordinator()?.history())
    }

    pub fn reset(&self) -> ClaimGuardResult<()> {
        self.coordinator()?.reset();
        Ok(())
    }

    /// Flush coordinator state. Unlike the per-mutation writes, errors are returned.
    pub fn shutdown(&self) -> ClaimGuardResult<()> {
        self.coordinator()?.flush()?;
        info!("claimguard runtime shut down");
        Ok(())
    }

    fn scoring(&self) -> ClaimGuardResult<MutexGuard<'_, ScoringEngine>> {
        self.scoring.lock().map_err(|_| ClaimGuardError::LockPoisoned {
            component: "scoring".to_string(),
        })
    }

    fn coordinator(&self) -> ClaimGuardResult<MutexGuard<'_, Coordinator>> {
        self.coordinator
            .lock()
            .map_err(|_| ClaimGuardError::LockPoisoned {
                component: "coordinator".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_and_federation_streams_differ() {
        assert_eq!(scoring_seed(None), None);
        for seed in [0, 7, u64::MAX] {
            let derived = scoring_seed(Some(seed)).unwrap();
            assert_ne!(derived, seed);

            let mut scoring = SeededRandom::new(derived);
            let mut federation = SeededRandom::new(seed);
            let a: Vec<f64> = (0..4).map(|_| scoring.uniform(-0.05, 0.05)).collect();
            let b: Vec<f64> = (0..4).map(|_| federation.uniform(-0.05, 0.05)).collect();
            assert_ne!(a, b);
        }
    }
}
