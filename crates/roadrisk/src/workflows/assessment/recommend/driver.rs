use super::{dedup_and_cap, DRIVER_MAX, DRIVER_MIN};
use crate::workflows::assessment::domain::{
    CollisionType, DriverAge, DriverExperience, RoadCondition, SafetyFeatures, Scenario,
    SeverityClass, SpeedCompliance, TimeOfDay, VehicleType, Weather,
};

const FILLERS: [&str; 2] = [
    "Review insurance and roadside assistance coverage",
    "Keep emergency contacts and breakdown numbers accessible",
];

/// Personal behavior guidance for the driver, built straight from scenario
/// attributes rather than cause findings. Between eight and twelve unique
/// items: two generic items always apply, severity-gated items are added for
/// fatal predictions, and filler items top the list up to the floor.
pub fn driver_recommendations(scenario: &Scenario, severity: SeverityClass) -> Vec<&'static str> {
    let mut candidates = vec![
        "Walk around the vehicle and check surroundings before moving off",
        "Keep the vehicle maintenance record up to date",
    ];

    match scenario.time {
        Some(TimeOfDay::Morning) => {
            candidates.push("Allow for sun glare during low-angle morning light")
        }
        Some(TimeOfDay::Evening) => candidates.push("Switch headlights on before dusk"),
        Some(TimeOfDay::Night) => {
            candidates.push("Use headlights correctly and take fatigue breaks on night drives")
        }
        _ => {}
    }

    match scenario.weather {
        Some(Weather::Rain) => candidates.push("Double the following distance on wet roads"),
        Some(Weather::Snow) => candidates.push("Fit winter tires before driving in snow"),
        Some(Weather::Fog) => {
            candidates.push("Use fog lights with low beam and slow right down in fog")
        }
        _ => {}
    }

    match scenario.road_condition {
        Some(RoadCondition::Wet) => candidates.push("Brake earlier and gently on wet surfaces"),
        Some(RoadCondition::SnowyIcy) => {
            candidates.push("Use gentle steering and braking inputs on ice")
        }
        Some(RoadCondition::Damaged) => {
            candidates.push("Slow down over broken surfaces and report defects")
        }
        _ => {}
    }

    match scenario.speed {
        Some(SpeedCompliance::BelowLimit) => {
            candidates.push("Keep a steady speed and let faster traffic pass safely")
        }
        Some(SpeedCompliance::AtLimit) => {
            candidates.push("Maintain at least a three second following gap")
        }
        Some(SpeedCompliance::AboveLimit) => {
            candidates.push("Respect posted speed limits at all times")
        }
        None => {}
    }

    match scenario.driver_experience {
        Some(DriverExperience::NoLicense) => {
            candidates.push("Complete an accredited driver training program before driving")
        }
        Some(DriverExperience::UnderOneYear) => {
            candidates.push("Practice in varied conditions with an experienced supervisor")
        }
        Some(DriverExperience::OneToFiveYears) => {
            candidates.push("Book a defensive driving refresher course")
        }
        Some(DriverExperience::OverFiveYears) => {
            candidates.push("Guard against routine complacency on familiar routes")
        }
        None => {}
    }

    match scenario.vehicle_type {
        Some(VehicleType::SmallCar) => {
            candidates.push("Maximize visibility to others with daytime running lights")
        }
        Some(VehicleType::Sedan) => candidates.push("Check tire tread and pressure monthly"),
        Some(VehicleType::Suv) => {
            candidates.push("Account for the higher center of gravity in corners")
        }
        Some(VehicleType::Truck) => {
            candidates.push("Check blind spots and allow for long braking distances")
        }
        Some(VehicleType::Motorcycle) => {
            candidates.push("Always wear a helmet and full protective gear")
        }
        None => {}
    }

    match scenario.safety_features {
        Some(SafetyFeatures::Basic) => candidates
            .push("Consider a vehicle with airbags and electronic stability control"),
        Some(SafetyFeatures::Standard) => {
            candidates.push("Learn the limits of your driver assistance systems")
        }
        Some(SafetyFeatures::Advanced) => {
            candidates.push("Keep driver assistance sensors clean and calibrated")
        }
        None => {}
    }

    match scenario.collision_type {
        Some(CollisionType::VehicleToVehicle) => {
            candidates.push("Keep a safe following distance in traffic")
        }
        Some(CollisionType::VehicleToPedestrian) => {
            candidates.push("Reduce speed near crossings, schools and residential areas")
        }
        Some(CollisionType::VehicleToObject) => {
            candidates.push("Scan well ahead for stationary obstacles and parked vehicles")
        }
        Some(CollisionType::Rollover) => {
            candidates.push("Avoid abrupt steering corrections, especially when loaded")
        }
        _ => {}
    }

    match scenario.driver_age {
        Some(DriverAge::Under18) => {
            candidates.push("Drive only under qualified supervision until fully licensed")
        }
        Some(DriverAge::Age18To30) => {
            candidates.push("Put the phone away and avoid in-car distractions")
        }
        Some(DriverAge::Over50) => candidates.push("Schedule regular vision and reaction checks"),
        _ => {}
    }

    if severity == SeverityClass::FatalInjury {
        candidates.push("Complete a certified defensive driving course as soon as possible");
        candidates.push("Plan routes that avoid high-speed corridors where practical");
    }

    let mut items = dedup_and_cap(candidates, DRIVER_MAX);
    if items.len() < DRIVER_MIN {
        for filler in FILLERS {
            items.push(filler);
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn safe_scenario() -> Scenario {
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

    fn risky_scenario() -> Scenario {
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

    fn assert_unique(items: &[&'static str]) {
        let mut sorted = items.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), items.len());
    }

    #[test]
    fn safe_scenario_reaches_the_floor_with_fillers() {
        let items = driver_recommendations(&safe_scenario(), SeverityClass::SlightInjury);

        assert!(items.len() >= DRIVER_MIN);
        assert!(items.len() <= DRIVER_MAX);
        assert_unique(&items);
        for filler in FILLERS {
            assert!(items.contains(&filler));
        }
    }

    #[test]
    fn risky_fatal_scenario_hits_the_cap_without_fillers() {
        let items = driver_recommendations(&risky_scenario(), SeverityClass::FatalInjury);

        assert_eq!(items.len(), DRIVER_MAX);
        assert_unique(&items);
        for filler in FILLERS {
            assert!(!items.contains(&filler));
        }
    }

    #[test]
    fn fatal_gate_items_are_absent_for_lower_severities() {
        let serious = driver_recommendations(&safe_scenario(), SeverityClass::SeriousInjury);
        assert!(!serious
            .contains(&"Complete a certified defensive driving course as soon as possible"));

        let fatal = driver_recommendations(&safe_scenario(), SeverityClass::FatalInjury);
        assert!(fatal
            .contains(&"Complete a certified defensive driving course as soon as possible"));
    }

    #[test]
    fn fog_scenario_carries_the_fog_specific_item() {
        let mut scenario = safe_scenario();
        scenario.weather = Some(Weather::Fog);
        let items = driver_recommendations(&scenario, SeverityClass::SlightInjury);
        assert!(items.contains(&"Use fog lights with low beam and slow right down in fog"));
    }

    #[test]
    fn generic_items_are_always_present() {
        for scenario in [safe_scenario(), risky_scenario()] {
            let items = driver_recommendations(&scenario, SeverityClass::SlightInjury);
            assert!(
                items.contains(&"Walk around the vehicle and check surroundings before moving off")
            );
            assert!(items.contains(&"Keep the vehicle maintenance record up to date"));
        }
    }
}
