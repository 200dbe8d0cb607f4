//! Accident scenario assessment: feature encoding, severity prediction,
//! risk scoring, cause inference, and the two recommendation audiences.

pub mod causes;
pub mod domain;
pub mod encoding;
pub mod model;
mod recommend;
mod risk;
pub mod router;
pub mod service;
pub mod views;

pub use causes::{infer_causes, CauseCategory, CauseFinding};
pub use domain::{
    AccidentRecord, Categorical, CollisionType, DriverAge, DriverExperience,
    ProbabilityDistribution, RoadCondition, SafetyFeatures, Scenario, ScenarioForm, SeverityClass,
    SpeedCompliance, TimeOfDay, VehicleType, Weather,
};
pub use encoding::FeatureSchema;
pub use model::{ModelInfo, SeverityModel, TrainingError};
pub use recommend::{
    authority_recommendations, driver_recommendations, AUTHORITY_MAX, DRIVER_MAX, DRIVER_MIN,
};
pub use risk::risk_score;
pub use router::assessment_router;
pub use service::{AssessmentOutcome, AssessmentService};
pub use views::{AssessmentView, CauseFindingView};
