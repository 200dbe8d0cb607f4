use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{AccidentRecord, Categorical, ProbabilityDistribution, SeverityClass};
use super::encoding::FeatureSchema;

const CLASS_COUNT: usize = 3;

/// Error raised while fitting the severity model at startup.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("training dataset contains no records")]
    EmptyDataset,
}

/// Categorical severity classifier trained once from historical records and
/// shared read-only for the rest of the process lifetime.
///
/// Internally a Naive Bayes model with Laplace smoothing over the schema's
/// indicator blocks. Consumers only rely on the documented contract:
/// `predict_proba` returns a normalized distribution and `predict` is its
/// argmax.
#[derive(Debug, Clone)]
pub struct SeverityModel {
    schema: FeatureSchema,
    class_log_priors: [f64; CLASS_COUNT],
    feature_log_likelihoods: [Vec<f64>; CLASS_COUNT],
    record_count: usize,
    trained_at: DateTime<Utc>,
}

impl SeverityModel {
    /// Fits the model against the v1 feature schema. An empty dataset is a
    /// fatal initialization error: the service must not start without a
    /// usable classifier.
    pub fn train(records: &[AccidentRecord]) -> Result<Self, TrainingError> {
        if records.is_empty() {
            return Err(TrainingError::EmptyDataset);
        }

        let schema = FeatureSchema::v1();
        let width = schema.width();

        let mut class_counts = [0usize; CLASS_COUNT];
        let mut feature_counts = [vec![0usize; width], vec![0usize; width], vec![0usize; width]];

        for record in records {
            let class = record.severity.index();
            class_counts[class] += 1;

            let features = schema.encode(&record.scenario);
            for block in schema.blocks() {
                if let Some(category) = schema.active_category(&features, block) {
                    feature_counts[class][block.offset + category] += 1;
                }
            }
        }

        let total = records.len();
        let mut class_log_priors = [0.0; CLASS_COUNT];
        let mut feature_log_likelihoods =
            [vec![0.0; width], vec![0.0; width], vec![0.0; width]];

        for class in 0..CLASS_COUNT {
            class_log_priors[class] =
                ((class_counts[class] + 1) as f64 / (total + CLASS_COUNT) as f64).ln();

            for block in schema.blocks() {
                let block_size = block.categories.len();
                for category in 0..block_size {
                    let index = block.offset + category;
                    let seen = feature_counts[class][index];
                    feature_log_likelihoods[class][index] =
                        ((seen + 1) as f64 / (class_counts[class] + block_size) as f64).ln();
                }
            }
        }

        Ok(Self {
            schema,
            class_log_priors,
            feature_log_likelihoods,
            record_count: total,
            trained_at: Utc::now(),
        })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Probability distribution over severity classes for an encoded
    /// scenario. All-zero blocks contribute no likelihood term, so unknown
    /// categories weaken the evidence instead of skewing it.
    pub fn predict_proba(&self, features: &[f32]) -> ProbabilityDistribution {
        let mut log_posteriors = self.class_log_priors;

        for block in self.schema.blocks() {
            if let Some(category) = self.schema.active_category(features, block) {
                let index = block.offset + category;
                for (class, posterior) in log_posteriors.iter_mut().enumerate() {
                    *posterior += self.feature_log_likelihoods[class][index];
                }
            }
        }

        // Normalize in log space to keep small posteriors from underflowing.
        let max = log_posteriors
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let mut masses = [0.0; CLASS_COUNT];
        let mut total = 0.0;
        for (class, posterior) in log_posteriors.iter().enumerate() {
            masses[class] = (posterior - max).exp();
            total += masses[class];
        }

        ProbabilityDistribution {
            slight_injury: masses[0] / total,
            serious_injury: masses[1] / total,
            fatal_injury: masses[2] / total,
        }
    }

    /// Predicted class: the argmax of `predict_proba`.
    pub fn predict(&self, features: &[f32]) -> SeverityClass {
        self.predict_proba(features).argmax()
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            schema_version: self.schema.version(),
            feature_width: self.schema.width(),
            classes: SeverityClass::ALL
                .iter()
                .map(|class| class.label())
                .collect(),
            record_count: self.record_count,
            trained_at: self.trained_at,
        }
    }
}

/// Metadata snapshot describing the trained model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub schema_version: &'static str,
    pub feature_width: usize,
    pub classes: Vec<&'static str>,
    pub record_count: usize,
    pub trained_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::domain::{
        CollisionType, DriverAge, DriverExperience, RoadCondition, SafetyFeatures, Scenario,
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

    fn training_records() -> Vec<AccidentRecord> {
        let mut records = Vec::new();
        for _ in 0..6 {
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
        records
    }

    #[test]
    fn empty_dataset_is_a_fatal_training_error() {
        assert!(matches!(
            SeverityModel::train(&[]),
            Err(TrainingError::EmptyDataset)
        ));
    }

    #[test]
    fn probabilities_are_normalized_and_bounded() {
        let model = SeverityModel::train(&training_records()).expect("model trains");
        let features = model.schema().encode(&severe_scenario());
        let distribution = model.predict_proba(&features);

        for (_, mass) in distribution.entries() {
            assert!((0.0..=1.0).contains(&mass));
        }
        assert!((distribution.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn predict_matches_distribution_argmax() {
        let model = SeverityModel::train(&training_records()).expect("model trains");
        let features = model.schema().encode(&mild_scenario());
        let distribution = model.predict_proba(&features);
        assert_eq!(model.predict(&features), distribution.argmax());
    }

    #[test]
    fn skewed_history_separates_the_classes() {
        let model = SeverityModel::train(&training_records()).expect("model trains");

        let severe = model.schema().encode(&severe_scenario());
        assert_eq!(model.predict(&severe), SeverityClass::FatalInjury);

        let mild = model.schema().encode(&mild_scenario());
        assert_eq!(model.predict(&mild), SeverityClass::SlightInjury);
    }

    #[test]
    fn unknown_fields_weaken_rather_than_break_prediction() {
        let model = SeverityModel::train(&training_records()).expect("model trains");
        let mut scenario = severe_scenario();
        scenario.weather = None;
        scenario.speed = None;

        let features = model.schema().encode(&scenario);
        let distribution = model.predict_proba(&features);
        assert!((distribution.total() - 1.0).abs() < 1e-6);
        assert_eq!(distribution.argmax(), SeverityClass::FatalInjury);
    }

    #[test]
    fn model_info_reports_training_shape() {
        let records = training_records();
        let model = SeverityModel::train(&records).expect("model trains");
        let info = model.info();

        assert_eq!(info.schema_version, "v1");
        assert_eq!(info.feature_width, 36);
        assert_eq!(info.record_count, records.len());
        assert_eq!(
            info.classes,
            vec!["Slight Injury", "Serious Injury", "Fatal Injury"]
        );
    }
}
