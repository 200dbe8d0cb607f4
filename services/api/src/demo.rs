use crate::infra::load_model;
use clap::Args;
use roadrisk::error::AppError;
use roadrisk::workflows::assessment::{
    AssessmentOutcome, AssessmentService, Categorical, ScenarioForm,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Time of day (Morning, Afternoon, Evening, Night)
    #[arg(long)]
    pub(crate) time: String,
    /// Weather (Clear, Rain, Snow, Fog)
    #[arg(long)]
    pub(crate) weather: String,
    /// Road condition (Dry, Wet, Snowy/Icy, Damaged)
    #[arg(long)]
    pub(crate) road_condition: String,
    /// Speed relative to the limit (Below/At/Above Speed Limit)
    #[arg(long)]
    pub(crate) speed: String,
    /// Driver age band (Under 18, 18-30, 31-50, Over 50)
    #[arg(long)]
    pub(crate) driver_age: String,
    /// Driver experience (No License, Less than 1 year, 1-5 years, Over 5 years)
    #[arg(long)]
    pub(crate) driver_experience: String,
    /// Collision type (Vehicle to Vehicle/Pedestrian/Object, Rollover, Other)
    #[arg(long)]
    pub(crate) collision_type: String,
    /// Vehicle type (Small Car, Sedan, SUV, Truck, Motorcycle)
    #[arg(long)]
    pub(crate) vehicle_type: String,
    /// Safety feature level (Basic, Standard, Advanced)
    #[arg(long)]
    pub(crate) safety_features: String,
    /// Historical accident records (CSV); defaults to the bundled sample
    #[arg(long)]
    pub(crate) training_data: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Historical accident records (CSV); defaults to the bundled sample
    #[arg(long)]
    pub(crate) training_data: Option<PathBuf>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let model = load_model(args.training_data.as_deref())?;
    let service = AssessmentService::new(Arc::new(model));

    let form = ScenarioForm {
        time: args.time,
        weather: args.weather,
        road_condition: args.road_condition,
        speed: args.speed,
        driver_age: args.driver_age,
        driver_experience: args.driver_experience,
        collision_type: args.collision_type,
        vehicle_type: args.vehicle_type,
        safety_features: args.safety_features,
    };

    let outcome = service.assess_form(&form);
    render_outcome(&outcome);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let model = load_model(args.training_data.as_deref())?;
    let info = model.info();
    let service = AssessmentService::new(Arc::new(model));

    println!("Road risk assessment demo");
    println!(
        "- Severity model: {} records, schema {} ({} indicator columns)",
        info.record_count, info.schema_version, info.feature_width
    );

    println!("\nHigh-risk scenario (night fog, icy road, unlicensed rider)");
    let high_risk = ScenarioForm {
        time: "Night".to_string(),
        weather: "Fog".to_string(),
        road_condition: "Snowy/Icy".to_string(),
        speed: "Above Speed Limit".to_string(),
        driver_age: "Under 18".to_string(),
        driver_experience: "No License".to_string(),
        collision_type: "Vehicle to Pedestrian".to_string(),
        vehicle_type: "Motorcycle".to_string(),
        safety_features: "Basic".to_string(),
    };
    render_outcome(&service.assess_form(&high_risk));

    println!("\nLow-risk scenario (clear afternoon, experienced driver)");
    let low_risk = ScenarioForm {
        time: "Afternoon".to_string(),
        weather: "Clear".to_string(),
        road_condition: "Dry".to_string(),
        speed: "At Speed Limit".to_string(),
        driver_age: "31-50".to_string(),
        driver_experience: "Over 5 years".to_string(),
        collision_type: "Vehicle to Object".to_string(),
        vehicle_type: "Sedan".to_string(),
        safety_features: "Advanced".to_string(),
    };
    render_outcome(&service.assess_form(&low_risk));

    Ok(())
}

// Display-layer interpretation of the 0-100 score; not part of the core
// output schema.
fn risk_tier(score: u8) -> &'static str {
    match score {
        0..=29 => "low",
        30..=69 => "medium",
        _ => "high",
    }
}

fn render_outcome(outcome: &AssessmentOutcome) {
    println!(
        "- Predicted severity: {}",
        outcome.predicted_severity.label()
    );
    println!(
        "  Probabilities: slight {:.1}% | serious {:.1}% | fatal {:.1}%",
        outcome.probabilities.slight_injury * 100.0,
        outcome.probabilities.serious_injury * 100.0,
        outcome.probabilities.fatal_injury * 100.0
    );
    println!(
        "  Risk score: {}/100 ({})",
        outcome.risk_score,
        risk_tier(outcome.risk_score)
    );

    if !outcome.ignored_fields.is_empty() {
        println!(
            "  Ignored out-of-domain fields: {}",
            outcome.ignored_fields.join(", ")
        );
    }

    println!("  Contributing factors:");
    for cause in &outcome.causes {
        println!("    - {}", cause.description());
    }

    println!("  Authority recommendations:");
    for item in &outcome.authority_recommendations {
        println!("    - {item}");
    }

    println!("  Driver recommendations:");
    for item in &outcome.driver_recommendations {
        println!("    - {item}");
    }
}
