//! ConsensusAggregator: cross-check claims from independent sources.
//!
//! Each claim defines a cluster: itself plus every claim agreeing with it.
//! Clusters are seed-centred, not transitive closures or cliques: members only
//! have to agree with the seed, so two members of the same cluster may sit up
//! to twice the tolerance apart. The largest cluster wins. Several distinct largest clusters are an even
//! split, broken in favour of the most reliable source.

use tracing::{debug, instrument};

use veritas_core::config::ConsensusConfig;
use veritas_core::errors::{ConfigError, VeritasError, VeritasResult};
use veritas_core::models::{Claim, ConsensusResult, ObservedValue, TrustWarning, WarningKind};
use veritas_core::traits::ReliabilitySource;

use super::agreement::values_agree;

/// Aggregates claims about one fact into a consensus result.
#[derive(Debug, Clone)]
pub struct ConsensusAggregator {
    config: ConsensusConfig,
}

impl ConsensusAggregator {
    pub fn new(config: ConsensusConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConsensusConfig {
        &self.config
    }

    /// Aggregate `claims`, looking source reliability up in `reliability`
    /// only to break even splits.
    ///
    /// Errors with `InsufficientData` when `claims` is empty. Weak or split
    /// consensus is not an error; it is reported through warnings.
    #[instrument(skip_all, fields(claims = claims.len()))]
    pub fn aggregate<R>(&self, claims: &[Claim], reliability: &R) -> VeritasResult<ConsensusResult>
    where
        R: ReliabilitySource + ?Sized,
    {
        let mut warnings = Vec::new();
        let claims: Vec<Claim> = claims
            .iter()
            .map(|c| sanitize_claim(c, &mut warnings))
            .collect();

        match claims.len() {
            0 => Err(VeritasError::insufficient("consensus requires at least one claim")),
            1 => {
                let only = claims[0].clone();
                warnings.push(TrustWarning::new(
                    WarningKind::SingleSource,
                    format!("only '{}' reported on this fact", only.source_id),
                ));
                Ok(ConsensusResult {
                    consensus_score: only.confidence,
                    agreement_reached: false,
                    consensus_value: Some(only.value.clone()),
                    agreeing: vec![only],
                    outliers: Vec::new(),
                    warnings,
                })
            }
            n => Ok(self.aggregate_many(claims, n, reliability, warnings)),
        }
    }

    fn aggregate_many<R>(
        &self,
        claims: Vec<Claim>,
        n: usize,
        reliability: &R,
        mut warnings: Vec<TrustWarning>,
    ) -> ConsensusResult
    where
        R: ReliabilitySource + ?Sized,
    {
        // Distinct clusters, in order of first discovery.
        let mut clusters: Vec<Vec<usize>> = Vec::new();
        for i in 0..n {
            let members: Vec<usize> = (0..n)
                .filter(|&j| i == j || values_agree(&claims[i].value, &claims[j].value, &self.config))
                .collect();
            if !clusters.contains(&members) {
                clusters.push(members);
            }
        }

        let largest = clusters.iter().map(Vec::len).max().unwrap_or(0);
        let candidates: Vec<&Vec<usize>> = clusters.iter().filter(|c| c.len() == largest).collect();

        let (winner, agreement_reached) = if candidates.len() == 1 {
            let winner = candidates[0];
            let majority = winner.len() * 2 > n;
            let enough = winner.len() >= self.config.min_agreeing_claims;
            if !(majority && enough) {
                warnings.push(TrustWarning::new(
                    WarningKind::NoMajority,
                    format!("largest agreeing group has {} of {n} claims", winner.len()),
                ));
            }
            (winner, majority && enough)
        } else {
            let winner = break_tie(&candidates, &claims, reliability);
            warnings.push(TrustWarning::new(
                WarningKind::ConsensusTieBreak,
                format!(
                    "{} groups of {largest} claims disagree; preferred the most reliable source",
                    candidates.len()
                ),
            ));
            (winner, false)
        };

        let mut agreeing = Vec::with_capacity(winner.len());
        let mut outliers = Vec::new();
        for (idx, claim) in claims.into_iter().enumerate() {
            if winner.contains(&idx) {
                agreeing.push(claim);
            } else {
                outliers.push(claim);
            }
        }

        let consensus_score = mean(agreeing.iter().map(|c| c.confidence));
        let consensus_value = consensus_value(&agreeing);

        debug!(
            agreeing = agreeing.len(),
            outliers = outliers.len(),
            agreement_reached,
            consensus_score,
            "consensus aggregated"
        );

        ConsensusResult {
            consensus_score,
            agreement_reached,
            consensus_value,
            agreeing,
            outliers,
            warnings,
        }
    }
}

/// Prefer the cluster holding the most reliable source, then the higher
/// mean confidence, then the earliest discovered.
fn break_tie<'a, R>(candidates: &[&'a Vec<usize>], claims: &[Claim], reliability: &R) -> &'a Vec<usize>
where
    R: ReliabilitySource + ?Sized,
{
    let key = |cluster: &Vec<usize>| {
        let best_source = cluster
            .iter()
            .map(|&i| reliability.reliability_of(&claims[i].source_id))
            .fold(f64::NEG_INFINITY, f64::max);
        let confidence = mean(cluster.iter().map(|&i| claims[i].confidence));
        (best_source, confidence)
    };

    let mut best = candidates[0];
    let mut best_key = key(best);
    for &cluster in &candidates[1..] {
        let k = key(cluster);
        if k.0 > best_key.0 || (k.0 == best_key.0 && k.1 > best_key.1) {
            best = cluster;
            best_key = k;
        }
    }
    best
}

fn consensus_value(agreeing: &[Claim]) -> Option<ObservedValue> {
    let first = agreeing.first()?;
    match &first.value {
        ObservedValue::Numeric(_) => {
            let values: Vec<f64> = agreeing.iter().filter_map(|c| c.value.as_numeric()).collect();
            Some(ObservedValue::Numeric(mean(values.into_iter())))
        }
        ObservedValue::State(state) => Some(ObservedValue::State(state.trim().to_string())),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn sanitize_claim(claim: &Claim, warnings: &mut Vec<TrustWarning>) -> Claim {
    let mut claim = claim.clone();
    if !claim.confidence.is_finite() {
        warnings.push(TrustWarning::new(
            WarningKind::ClampedInput,
            format!("claim from '{}' had non-finite confidence; treated as 0", claim.source_id),
        ));
        claim.confidence = 0.0;
    } else if !(0.0..=100.0).contains(&claim.confidence) {
        warnings.push(TrustWarning::new(
            WarningKind::ClampedInput,
            format!(
                "claim from '{}' had confidence {} outside [0, 100]",
                claim.source_id, claim.confidence
            ),
        ));
        claim.confidence = claim.confidence.clamp(0.0, 100.0);
    }
    claim
}
