//! Plain-language phrases for beginner explanations. None contain digits.

use veritas_core::models::{TrustGrade, TrustScore, WarningKind};

/// Opening clause of the beginner summary for a grade.
pub fn grade_lead(grade: TrustGrade) -> &'static str {
    match grade {
        TrustGrade::Excellent => "This information is highly trustworthy",
        TrustGrade::Good => "This information is trustworthy",
        TrustGrade::Fair => "This information is moderately trustworthy, so double-check it before important decisions",
        TrustGrade::Poor => "This information has low trustworthiness",
        TrustGrade::Suspect => "This information should not be relied on",
    }
}

pub fn base_confidence(value: f64) -> &'static str {
    match value {
        v if v >= 85.0 => "The source is very confident in this value.",
        v if v >= 70.0 => "The source is fairly confident in this value.",
        _ => "The source itself is unsure about this value.",
    }
}

pub fn freshness(value: f64) -> &'static str {
    match value {
        v if v >= 90.0 => "The data is fresh.",
        v if v >= 70.0 => "The data is a little old.",
        v if v >= 50.0 => "The data is getting stale.",
        _ => "The data is stale.",
    }
}

pub fn reliability(value: f64) -> &'static str {
    match value {
        v if v >= 85.0 => "The source has a strong track record.",
        v if v >= 70.0 => "The source has a reasonable track record.",
        v if v >= 50.0 => "The source's track record is mixed.",
        _ => "The source has a weak track record.",
    }
}

/// Consensus bullet. Warnings take priority over the raw score.
pub fn consensus(score: &TrustScore) -> &'static str {
    if score.has_warning(WarningKind::NoConsensus) {
        "No other sources were checked against this value."
    } else if score.has_warning(WarningKind::SingleSource) {
        "Only one source reported this value."
    } else if score.has_warning(WarningKind::ConsensusTieBreak)
        || score.has_warning(WarningKind::NoMajority)
    {
        "Other sources disagree about this value."
    } else if score.consensus_score >= 70.0 {
        "Other sources agree with this value."
    } else {
        "Other sources agree, but with low confidence."
    }
}
