use std::io::Read;

use serde::Deserialize;

use super::HistoryImportError;
use crate::workflows::assessment::domain::{
    AccidentRecord, Categorical, CollisionType, DriverAge, DriverExperience, RoadCondition,
    SafetyFeatures, Scenario, SeverityClass, SpeedCompliance, TimeOfDay, VehicleType, Weather,
};

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Weather")]
    weather: String,
    #[serde(rename = "Road Condition")]
    road_condition: String,
    #[serde(rename = "Speed")]
    speed: String,
    #[serde(rename = "Driver Age")]
    driver_age: String,
    #[serde(rename = "Driver Experience")]
    driver_experience: String,
    #[serde(rename = "Collision Type")]
    collision_type: String,
    #[serde(rename = "Vehicle Type")]
    vehicle_type: String,
    #[serde(rename = "Safety Features")]
    safety_features: String,
    #[serde(rename = "Severity")]
    severity: String,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<AccidentRecord>, HistoryImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<HistoryRow>().enumerate() {
        let row = row?;

        // Feature labels degrade to "no signal" exactly as at inference
        // time; the ground-truth label must parse or training is unusable.
        let severity = SeverityClass::from_label(&row.severity).ok_or_else(|| {
            HistoryImportError::UnknownSeverity {
                // header occupies the first line
                line: index + 2,
                label: row.severity.clone(),
            }
        })?;

        let scenario = Scenario {
            time: TimeOfDay::from_label(&row.time),
            weather: Weather::from_label(&row.weather),
            road_condition: RoadCondition::from_label(&row.road_condition),
            speed: SpeedCompliance::from_label(&row.speed),
            driver_age: DriverAge::from_label(&row.driver_age),
            driver_experience: DriverExperience::from_label(&row.driver_experience),
            collision_type: CollisionType::from_label(&row.collision_type),
            vehicle_type: VehicleType::from_label(&row.vehicle_type),
            safety_features: SafetyFeatures::from_label(&row.safety_features),
        };

        records.push(AccidentRecord { scenario, severity });
    }

    Ok(records)
}
