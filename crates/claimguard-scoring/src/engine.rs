//! ScoringEngine: narrative path with deterministic fallback.
//!
//! Narrative path: prompt → analyzer → [`ScoreExtractor`] → [`RuleAdjuster`].
//! Any analyzer error (or no analyzer at all) switches to [`FallbackScorer`]
//! for that claim; the caller only sees `narrative_success = false`.

use chrono::Utc;
use claimguard_core::config::ScoringConfig;
use claimguard_core::errors::NarrativeError;
use claimguard_core::models::{ClaimInput, FraudAssessment, ModelStats, ProofFile};
use claimguard_core::tracing_setup::events;
use claimguard_core::traits::{INarrativeAnalyzer, IRandomSource};

use crate::adjustment::{AdjustmentInput, RuleAdjuster};
use crate::classification::{round_score, traditional_indicators, Classification};
use crate::extraction::ScoreExtractor;
use crate::fallback::FallbackScorer;
use crate::prompt;

const MODEL_TYPE_NARRATIVE: &str = "Narrative analysis with rule calibration";
const MODEL_TYPE_FALLBACK: &str = "Rule-based heuristic";

pub struct ScoringEngine {
    analyzer: Option<Box<dyn INarrativeAnalyzer>>,
    rng: Box<dyn IRandomSource>,
    config: ScoringConfig,
    predictions: u64,
    fallbacks: u64,
}

impl ScoringEngine {
    pub fn new(
        analyzer: Option<Box<dyn INarrativeAnalyzer>>,
        rng: Box<dyn IRandomSource>,
        config: ScoringConfig,
    ) -> Self {
        Self {
            analyzer,
            rng,
            config,
            predictions: 0,
            fallbacks: 0,
        }
    }

    /// Score one claim. Never fails.
    pub fn assess(&mut self, claim: &ClaimInput, files: &[ProofFile]) -> FraudAssessment {
        let proof_file_count = files.len();

        let (probability, narrative, narrative_success) = match self.narrative(claim, files) {
            Ok(text) => {
                let base = ScoreExtractor::base_score(&text);
                let probability = RuleAdjuster::adjust(
                    base,
                    AdjustmentInput {
                        narrative: &text,
                        proof_file_count,
                        description_len: claim.description_len(),
                    },
                );
                (probability, text, true)
            }
            Err(e) => {
                let failure = e.to_string();
                events::degradation_triggered("narrative", &failure, "fallback_scorer");
                self.fallbacks += 1;
                let probability = FallbackScorer::score(claim, self.rng.as_mut());
                let report = FallbackScorer::fallback_narrative(claim, proof_file_count, &failure);
                (probability, report, false)
            }
        };
        self.predictions += 1;

        let probability = round_score(probability);
        let class = Classification::from_probability(probability);
        events::assessment_completed(probability, class.risk_level, narrative_success);

        FraudAssessment {
            is_fraud: class.is_fraud,
            fraud_probability: probability,
            confidence: class.confidence,
            risk_level: class.risk_level,
            indicators: traditional_indicators(claim),
            narrative,
            proof_file_count,
            narrative_success,
            model_version: self.config.model_version.clone(),
            timestamp: Utc::now(),
        }
    }

    pub fn stats(&self) -> ModelStats {
        let narrative_enabled = self.analyzer.is_some();
        ModelStats {
            model_version: self.config.model_version.clone(),
            model_type: if narrative_enabled {
                MODEL_TYPE_NARRATIVE
            } else {
                MODEL_TYPE_FALLBACK
            }
            .to_string(),
            narrative_enabled,
            supports_multimodal: self
                .analyzer
                .as_ref()
                .is_some_and(|a| a.supports_multimodal()),
            predictions_made: self.predictions,
            fallback_predictions: self.fallbacks,
            last_updated: Utc::now(),
        }
    }

    /// Draw from the engine's random source. Used for claim numbers.
    pub fn rng(&mut self) -> &mut dyn IRandomSource {
        self.rng.as_mut()
    }

    fn narrative(&self, claim: &ClaimInput, files: &[ProofFile]) -> Result<String, NarrativeError> {
        let analyzer = self
            .analyzer
            .as_ref()
            .ok_or_else(|| NarrativeError::ProviderUnavailable {
                provider: "none configured".to_string(),
            })?;

        let mut request = prompt::build_request(claim, files, self.config.max_attachments);
        if !analyzer.supports_multimodal() {
            request.attachments.clear();
        }
        analyzer.analyze(&request)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use claimguard_core::models::RiskLevel;
    use claimguard_core::traits::NarrativeRequest;

    use super::*;

    struct Fixed(f64);

    impl IRandomSource for Fixed {
        fn uniform(&mut self, _low: f64, _high: f64) -> f64 {
            self.0
        }
        fn choose_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    struct Canned {
        reply: Result<&'static str, ()>,
        seen: Arc<Mutex<Vec<NarrativeRequest>>>,
    }

    impl INarrativeAnalyzer for Canned {
        fn analyze(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
            self.seen.lock().unwrap().push(request.clone());
            self.reply
                .map(str::to_string)
                .map_err(|_| NarrativeError::RequestFailed {
                    reason: "connection refused".into(),
                })
        }
        fn name(&self) -> &str {
            "canned"
        }
    }

    fn engine(reply: Result<&'static str, ()>) -> (ScoringEngine, Arc<Mutex<Vec<NarrativeRequest>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let analyzer = Canned {
            reply,
            seen: Arc::clone(&seen),
        };
        let engine = ScoringEngine::new(
            Some(Box::new(analyzer)),
            Box::new(Fixed(0.0)),
            ScoringConfig::default(),
        );
        (engine, seen)
    }

    fn claim(amount: f64, description: &str) -> ClaimInput {
        ClaimInput {
            amount,
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn narrative_success_path() {
        let (mut engine, seen) = engine(Ok("FRAUD RISK ASSESSMENT: 80%\nRECOMMENDATION: REJECT"));
        let desc = "a".repeat(100);
        let files = vec![ProofFile::from_bytes("x.png", "image/png", b"img")];
        let a = engine.assess(&claim(1_000.0, &desc), &files);

        assert!(a.narrative_success);
        assert!((a.fraud_probability - 0.80).abs() < 1e-12);
        assert!(a.is_fraud);
        assert_eq!(a.risk_level, RiskLevel::High);
        assert_eq!(a.proof_file_count, 1);
        assert_eq!(seen.lock().unwrap()[0].attachments.len(), 1);
    }

    #[test]
    fn analyzer_error_degrades_to_fallback() {
        let (mut engine, _) = engine(Err(()));
        let a = engine.assess(&claim(120_000.0, "twenty chars exactly"), &[]);

        assert!(!a.narrative_success);
        assert!((a.fraud_probability - 0.70).abs() < 1e-9);
        assert!(a.narrative.contains("connection refused"));
        assert_eq!(a.model_version, ScoringConfig::default().model_version);

        let stats = engine.stats();
        assert_eq!(stats.predictions_made, 1);
        assert_eq!(stats.fallback_predictions, 1);
        assert!(stats.narrative_enabled);
    }

    #[test]
    fn missing_analyzer_uses_fallback() {
        let mut engine = ScoringEngine::new(None, Box::new(Fixed(0.0)), ScoringConfig::default());
        let a = engine.assess(&claim(0.0, &"b".repeat(120)), &[]);
        assert!(!a.narrative_success);
        assert_eq!(a.fraud_probability, 0.0);
        assert_eq!(a.risk_level, RiskLevel::Low);
        assert!(!engine.stats().narrative_enabled);
    }

    #[test]
    fn unmatched_narrative_uses_neutral_base() {
        let (mut engine, _) = engine(Ok("no score in here"));
        let a = engine.assess(&claim(0.0, &"c".repeat(100)), &[ProofFile::from_bytes("a.pdf", "application/pdf", b"%PDF")]);
        assert!((a.fraud_probability - 0.5).abs() < 1e-12);
        assert!(!a.is_fraud);
    }
}
