use serde::Serialize;

use super::domain::{
    CollisionType, DriverAge, DriverExperience, RoadCondition, SafetyFeatures, Scenario,
    SpeedCompliance, TimeOfDay, VehicleType, Weather,
};

/// Broad grouping used to key authority recommendations off findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CauseCategory {
    Visibility,
    Weather,
    RoadSurface,
    Speed,
    Inexperience,
    VehicleType,
    SafetyEquipment,
    CollisionType,
    DriverAge,
    General,
}

impl CauseCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Visibility => "visibility",
            Self::Weather => "weather",
            Self::RoadSurface => "road_surface",
            Self::Speed => "speed",
            Self::Inexperience => "inexperience",
            Self::VehicleType => "vehicle_type",
            Self::SafetyEquipment => "safety_equipment",
            Self::CollisionType => "collision_type",
            Self::DriverAge => "driver_age",
            Self::General => "general",
        }
    }
}

/// Discrete explanatory finding. Each variant is one entry of the fixed
/// cause catalog; recommendation lookup keys on the variant, never on the
/// description text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CauseFinding {
    NightLowVisibility,
    DuskLowVisibility,
    AdverseWeather,
    DenseFog,
    WetSurface,
    IcySurface,
    DamagedPavement,
    ExcessiveSpeed,
    DriverInexperience,
    UnlicensedDriver,
    MotorcycleExposure,
    HeavyVehicle,
    MinimalSafetyEquipment,
    PedestrianConflict,
    RolloverDynamics,
    UnderageDriver,
    OlderDriver,
    MultipleFactors,
}

impl CauseFinding {
    pub const fn category(self) -> CauseCategory {
        match self {
            Self::NightLowVisibility | Self::DuskLowVisibility => CauseCategory::Visibility,
            Self::AdverseWeather | Self::DenseFog => CauseCategory::Weather,
            Self::WetSurface | Self::IcySurface | Self::DamagedPavement => {
                CauseCategory::RoadSurface
            }
            Self::ExcessiveSpeed => CauseCategory::Speed,
            Self::DriverInexperience | Self::UnlicensedDriver => CauseCategory::Inexperience,
            Self::MotorcycleExposure | Self::HeavyVehicle => CauseCategory::VehicleType,
            Self::MinimalSafetyEquipment => CauseCategory::SafetyEquipment,
            Self::PedestrianConflict | Self::RolloverDynamics => CauseCategory::CollisionType,
            Self::UnderageDriver | Self::OlderDriver => CauseCategory::DriverAge,
            Self::MultipleFactors => CauseCategory::General,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::NightLowVisibility => "night_low_visibility",
            Self::DuskLowVisibility => "dusk_low_visibility",
            Self::AdverseWeather => "adverse_weather",
            Self::DenseFog => "dense_fog",
            Self::WetSurface => "wet_surface",
            Self::IcySurface => "icy_surface",
            Self::DamagedPavement => "damaged_pavement",
            Self::ExcessiveSpeed => "excessive_speed",
            Self::DriverInexperience => "driver_inexperience",
            Self::UnlicensedDriver => "unlicensed_driver",
            Self::MotorcycleExposure => "motorcycle_exposure",
            Self::HeavyVehicle => "heavy_vehicle",
            Self::MinimalSafetyEquipment => "minimal_safety_equipment",
            Self::PedestrianConflict => "pedestrian_conflict",
            Self::RolloverDynamics => "rollover_dynamics",
            Self::UnderageDriver => "underage_driver",
            Self::OlderDriver => "older_driver",
            Self::MultipleFactors => "multiple_factors",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::NightLowVisibility => "Night driving with reduced visibility and reaction margin",
            Self::DuskLowVisibility => "Evening light transition reducing hazard visibility",
            Self::AdverseWeather => "Adverse weather reducing traction and visibility",
            Self::DenseFog => "Dense fog severely limiting sight distance",
            Self::WetSurface => "Wet road surface extending braking distance",
            Self::IcySurface => "Snow or ice on the carriageway causing loss of traction",
            Self::DamagedPavement => "Damaged road surface destabilizing vehicles",
            Self::ExcessiveSpeed => "Travelling above the posted speed limit",
            Self::DriverInexperience => "Limited driving experience behind the wheel",
            Self::UnlicensedDriver => "Driver operating without a valid license",
            Self::MotorcycleExposure => "Motorcycle travel without a protective cabin",
            Self::HeavyVehicle => "Heavy vehicle with long braking distance and large blind spots",
            Self::MinimalSafetyEquipment => "Vehicle equipped with only basic safety features",
            Self::PedestrianConflict => "Collision course involving a pedestrian",
            Self::RolloverDynamics => "Rollover dynamics with high occupant injury potential",
            Self::UnderageDriver => "Driver below the legal licensing age",
            Self::OlderDriver => "Reduced reaction margin common for drivers over 50",
            Self::MultipleFactors => "Multiple contributing factors with no single dominant cause",
        }
    }
}

/// Runs the nine per-field checks in fixed order (time, weather, road,
/// speed, experience, vehicle, safety, collision, age). Checks are
/// independent and non-exclusive; fog adds a second finding on top of the
/// general weather one, and an unknown field simply fires nothing.
pub fn infer_causes(scenario: &Scenario) -> Vec<CauseFinding> {
    let mut findings = Vec::new();

    match scenario.time {
        Some(TimeOfDay::Night) => findings.push(CauseFinding::NightLowVisibility),
        Some(TimeOfDay::Evening) => findings.push(CauseFinding::DuskLowVisibility),
        _ => {}
    }

    if let Some(weather) = scenario.weather {
        if matches!(weather, Weather::Rain | Weather::Snow | Weather::Fog) {
            findings.push(CauseFinding::AdverseWeather);
        }
        if weather == Weather::Fog {
            findings.push(CauseFinding::DenseFog);
        }
    }

    match scenario.road_condition {
        Some(RoadCondition::Wet) => findings.push(CauseFinding::WetSurface),
        Some(RoadCondition::SnowyIcy) => findings.push(CauseFinding::IcySurface),
        Some(RoadCondition::Damaged) => findings.push(CauseFinding::DamagedPavement),
        _ => {}
    }

    if scenario.speed == Some(SpeedCompliance::AboveLimit) {
        findings.push(CauseFinding::ExcessiveSpeed);
    }

    if let Some(experience) = scenario.driver_experience {
        if matches!(
            experience,
            DriverExperience::NoLicense | DriverExperience::UnderOneYear
        ) {
            findings.push(CauseFinding::DriverInexperience);
        }
        if experience == DriverExperience::NoLicense {
            findings.push(CauseFinding::UnlicensedDriver);
        }
    }

    match scenario.vehicle_type {
        Some(VehicleType::Motorcycle) => findings.push(CauseFinding::MotorcycleExposure),
        Some(VehicleType::Truck) => findings.push(CauseFinding::HeavyVehicle),
        _ => {}
    }

    if scenario.safety_features == Some(SafetyFeatures::Basic) {
        findings.push(CauseFinding::MinimalSafetyEquipment);
    }

    match scenario.collision_type {
        Some(CollisionType::VehicleToPedestrian) => {
            findings.push(CauseFinding::PedestrianConflict)
        }
        Some(CollisionType::Rollover) => findings.push(CauseFinding::RolloverDynamics),
        _ => {}
    }

    match scenario.driver_age {
        Some(DriverAge::Under18) => findings.push(CauseFinding::UnderageDriver),
        Some(DriverAge::Over50) => findings.push(CauseFinding::OlderDriver),
        _ => {}
    }

    if findings.is_empty() {
        findings.push(CauseFinding::MultipleFactors);
    }

    findings
}
