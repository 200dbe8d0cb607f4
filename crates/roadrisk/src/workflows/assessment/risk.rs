use super::domain::{ProbabilityDistribution, SeverityClass};

const SLIGHT_WEIGHT: f64 = 0.3;
const SERIOUS_WEIGHT: f64 = 0.7;
const FATAL_WEIGHT: f64 = 1.0;

/// Compresses the predicted class and its probability distribution into a
/// bounded 0-100 score.
///
/// The probability-weighted base is amplified when the predicted class is
/// severe: fatal predictions scale by 1.3 (capped at 100), serious by 1.1
/// (capped at 95), slight predictions keep the base unchanged.
pub fn risk_score(predicted: SeverityClass, probabilities: &ProbabilityDistribution) -> u8 {
    let weighted = probabilities.slight_injury * SLIGHT_WEIGHT
        + probabilities.serious_injury * SERIOUS_WEIGHT
        + probabilities.fatal_injury * FATAL_WEIGHT;
    let base = weighted * 100.0;

    let amplified = match predicted {
        SeverityClass::FatalInjury => (base * 1.3).min(100.0),
        SeverityClass::SeriousInjury => (base * 1.1).min(95.0),
        SeverityClass::SlightInjury => base,
    };

    amplified.round().clamp(0.0, 100.0) as u8
}
