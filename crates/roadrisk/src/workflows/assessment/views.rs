use serde::Serialize;

use super::causes::CauseFinding;
use super::domain::{Categorical, ProbabilityDistribution};
use super::service::AssessmentOutcome;

/// Wire representation of one cause finding.
#[derive(Debug, Clone, Serialize)]
pub struct CauseFindingView {
    pub code: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

impl From<CauseFinding> for CauseFindingView {
    fn from(finding: CauseFinding) -> Self {
        Self {
            code: finding.code(),
            category: finding.category().label(),
            description: finding.description(),
        }
    }
}

/// Wire representation of a full assessment result.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub predicted_severity: &'static str,
    pub probabilities: ProbabilityDistribution,
    pub risk_score: u8,
    pub causes: Vec<CauseFindingView>,
    pub authority_recommendations: Vec<&'static str>,
    pub driver_recommendations: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_fields: Vec<&'static str>,
}

impl AssessmentOutcome {
    pub fn view(&self) -> AssessmentView {
        AssessmentView {
            predicted_severity: self.predicted_severity.label(),
            probabilities: self.probabilities,
            risk_score: self.risk_score,
            causes: self.causes.iter().copied().map(CauseFindingView::from).collect(),
            authority_recommendations: self.authority_recommendations.clone(),
            driver_recommendations: self.driver_recommendations.clone(),
            ignored_fields: self.ignored_fields.clone(),
        }
    }
}
