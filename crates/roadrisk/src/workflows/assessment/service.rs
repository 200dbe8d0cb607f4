use std::sync::Arc;

use super::causes::{infer_causes, CauseFinding};
use super::domain::{ProbabilityDistribution, Scenario, ScenarioForm, SeverityClass};
use super::model::{ModelInfo, SeverityModel};
use super::recommend::{authority_recommendations, driver_recommendations};
use super::risk::risk_score;

/// Stateless facade running the full assessment pipeline against an
/// immutable trained model.
///
/// The model handle is injected once at construction and shared read-only,
/// so the service can serve arbitrarily many concurrent requests without
/// locking.
pub struct AssessmentService {
    model: Arc<SeverityModel>,
}

impl AssessmentService {
    pub fn new(model: Arc<SeverityModel>) -> Self {
        Self { model }
    }

    pub fn model_info(&self) -> ModelInfo {
        self.model.info()
    }

    /// Normalizes a raw form and assesses it. Out-of-domain labels never
    /// fail the request; they are reported back as ignored fields.
    pub fn assess_form(&self, form: &ScenarioForm) -> AssessmentOutcome {
        self.assess(&Scenario::from_form(form))
    }

    pub fn assess(&self, scenario: &Scenario) -> AssessmentOutcome {
        let features = self.model.schema().encode(scenario);
        let probabilities = self.model.predict_proba(&features);
        let predicted_severity = probabilities.argmax();
        let risk_score = risk_score(predicted_severity, &probabilities);

        let causes = infer_causes(scenario);
        let authority_recommendations =
            authority_recommendations(&causes, predicted_severity);
        let driver_recommendations = driver_recommendations(scenario, predicted_severity);

        AssessmentOutcome {
            predicted_severity,
            probabilities,
            risk_score,
            causes,
            authority_recommendations,
            driver_recommendations,
            ignored_fields: scenario.ignored_fields(),
        }
    }
}

/// Complete result record for one scenario, consumed verbatim by reporting
/// and UI collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentOutcome {
    pub predicted_severity: SeverityClass,
    pub probabilities: ProbabilityDistribution,
    pub risk_score: u8,
    pub causes: Vec<CauseFinding>,
    pub authority_recommendations: Vec<&'static str>,
    pub driver_recommendations: Vec<&'static str>,
    pub ignored_fields: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::domain::{
        AccidentRecord, CollisionType, DriverAge, DriverExperience, RoadCondition, SafetyFeatures,
        SpeedCompliance, TimeOfDay, VehicleType, Weather,
    };

    fn severe_scenario() -> Scenario {
        Scenario::new(
            TimeOfDay::Night,
            Weather::Fog,
            RoadCondition::SnowyIcy,
            SpeedCompliance::AboveLimit,
            DriverAge::Under18,
            DriverExperience::NoLicense,
            CollisionType::VehicleToPedestrian,
            VehicleType::Motorcycle,
            SafetyFeatures::Basic,
        )
    }

    fn mild_scenario() -> Scenario {
        Scenario::new(
            TimeOfDay::Afternoon,
            Weather::Clear,
            RoadCondition::Dry,
            SpeedCompliance::AtLimit,
            DriverAge::Age31To50,
            DriverExperience::OverFiveYears,
            CollisionType::VehicleToObject,
            VehicleType::Sedan,
            SafetyFeatures::Advanced,
        )
    }

    fn build_service() -> AssessmentService {
        let mut records = Vec::new();
        for _ in 0..8 {
            records.push(AccidentRecord {
                scenario: severe_scenario(),
                severity: SeverityClass::FatalInjury,
            });
            records.push(AccidentRecord {
                scenario: mild_scenario(),
                severity: SeverityClass::SlightInjury,
            });
        }
        records.push(AccidentRecord {
            scenario: Scenario::new(
                TimeOfDay::Evening,
                Weather::Rain,
                RoadCondition::Wet,
                SpeedCompliance::AboveLimit,
                DriverAge::Age18To30,
                DriverExperience::UnderOneYear,
                CollisionType::VehicleToVehicle,
                VehicleType::Suv,
                SafetyFeatures::Standard,
            ),
            severity: SeverityClass::SeriousInjury,
        });

        let model = SeverityModel::train(&records).expect("model trains");
        AssessmentService::new(Arc::new(model))
    }

    #[test]
    fn outcome_satisfies_the_output_contract() {
        let service = build_service();
        let outcome = service.assess(&severe_scenario());

        assert!(!outcome.causes.is_empty());
        assert!((1..=10).contains(&outcome.authority_recommendations.len()));
        assert!((8..=12).contains(&outcome.driver_recommendations.len()));
        assert!((outcome.probabilities.total() - 1.0).abs() < 1e-6);
        assert_eq!(outcome.predicted_severity, outcome.probabilities.argmax());
        assert!(outcome.risk_score <= 100);
        assert!(outcome.ignored_fields.is_empty());
    }

    #[test]
    fn severe_scenario_scores_in_the_upper_third() {
        let service = build_service();
        let outcome = service.assess(&severe_scenario());

        assert_eq!(outcome.predicted_severity, SeverityClass::FatalInjury);
        assert!(outcome.risk_score >= 67, "score {}", outcome.risk_score);
    }

    #[test]
    fn mild_scenario_scores_low_with_fallback_cause() {
        let service = build_service();
        let outcome = service.assess(&mild_scenario());

        assert_eq!(outcome.predicted_severity, SeverityClass::SlightInjury);
        assert!(outcome.risk_score < 45, "score {}", outcome.risk_score);
        assert_eq!(outcome.causes, vec![CauseFinding::MultipleFactors]);
    }

    #[test]
    fn assessment_is_idempotent() {
        let service = build_service();
        let first = service.assess(&severe_scenario());
        let second = service.assess(&severe_scenario());
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_labels_are_reported_not_rejected() {
        let service = build_service();
        let form = ScenarioForm {
            time: "night".to_string(),
            weather: "Sandstorm".to_string(),
            road_condition: "snowy/icy".to_string(),
            speed: "Above Speed Limit".to_string(),
            driver_age: "Under 18".to_string(),
            driver_experience: "No License".to_string(),
            collision_type: "Vehicle to Pedestrian".to_string(),
            vehicle_type: "Motorcycle".to_string(),
            safety_features: "Basic".to_string(),
        };

        let outcome = service.assess_form(&form);
        assert_eq!(outcome.ignored_fields, vec!["weather"]);
        assert!(!outcome.causes.contains(&CauseFinding::AdverseWeather));
        assert!(!outcome.causes.is_empty());
    }
}
