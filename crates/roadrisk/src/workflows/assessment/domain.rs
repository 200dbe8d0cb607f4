use serde::{Deserialize, Serialize};

/// Canonicalizes a category label before matching: strips zero-width
/// characters, collapses whitespace, and lowercases.
pub(crate) fn normalize_label(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

/// Closed categorical domain with a fixed member order.
///
/// The `ALL` order is load-bearing: it is the one-hot encoding order shared
/// by training and inference, so members must never be reordered within a
/// schema version.
pub trait Categorical: Copy + Eq + Sized + 'static {
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(value: &str) -> Option<Self> {
        let wanted = normalize_label(value);
        Self::ALL
            .iter()
            .copied()
            .find(|member| normalize_label(member.label()) == wanted)
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|member| *member == self)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Categorical for TimeOfDay {
    const FIELD: &'static str = "time";
    const ALL: &'static [Self] = &[Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weather {
    Clear,
    Rain,
    Snow,
    Fog,
}

impl Categorical for Weather {
    const FIELD: &'static str = "weather";
    const ALL: &'static [Self] = &[Self::Clear, Self::Rain, Self::Snow, Self::Fog];

    fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Fog => "Fog",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoadCondition {
    Dry,
    Wet,
    SnowyIcy,
    Damaged,
}

impl Categorical for RoadCondition {
    const FIELD: &'static str = "road_condition";
    const ALL: &'static [Self] = &[Self::Dry, Self::Wet, Self::SnowyIcy, Self::Damaged];

    fn label(self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Wet => "Wet",
            Self::SnowyIcy => "Snowy/Icy",
            Self::Damaged => "Damaged",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedCompliance {
    BelowLimit,
    AtLimit,
    AboveLimit,
}

impl Categorical for SpeedCompliance {
    const FIELD: &'static str = "speed";
    const ALL: &'static [Self] = &[Self::BelowLimit, Self::AtLimit, Self::AboveLimit];

    fn label(self) -> &'static str {
        match self {
            Self::BelowLimit => "Below Speed Limit",
            Self::AtLimit => "At Speed Limit",
            Self::AboveLimit => "Above Speed Limit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverAge {
    Under18,
    Age18To30,
    Age31To50,
    Over50,
}

impl Categorical for DriverAge {
    const FIELD: &'static str = "driver_age";
    const ALL: &'static [Self] = &[
        Self::Under18,
        Self::Age18To30,
        Self::Age31To50,
        Self::Over50,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Under18 => "Under 18",
            Self::Age18To30 => "18-30",
            Self::Age31To50 => "31-50",
            Self::Over50 => "Over 50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverExperience {
    NoLicense,
    UnderOneYear,
    OneToFiveYears,
    OverFiveYears,
}

impl Categorical for DriverExperience {
    const FIELD: &'static str = "driver_experience";
    const ALL: &'static [Self] = &[
        Self::NoLicense,
        Self::UnderOneYear,
        Self::OneToFiveYears,
        Self::OverFiveYears,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::NoLicense => "No License",
            Self::UnderOneYear => "Less than 1 year",
            Self::OneToFiveYears => "1-5 years",
            Self::OverFiveYears => "Over 5 years",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionType {
    VehicleToVehicle,
    VehicleToPedestrian,
    VehicleToObject,
    Rollover,
    Other,
}

impl Categorical for CollisionType {
    const FIELD: &'static str = "collision_type";
    const ALL: &'static [Self] = &[
        Self::VehicleToVehicle,
        Self::VehicleToPedestrian,
        Self::VehicleToObject,
        Self::Rollover,
        Self::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::VehicleToVehicle => "Vehicle to Vehicle",
            Self::VehicleToPedestrian => "Vehicle to Pedestrian",
            Self::VehicleToObject => "Vehicle to Object",
            Self::Rollover => "Rollover",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    SmallCar,
    Sedan,
    Suv,
    Truck,
    Motorcycle,
}

impl Categorical for VehicleType {
    const FIELD: &'static str = "vehicle_type";
    const ALL: &'static [Self] = &[
        Self::SmallCar,
        Self::Sedan,
        Self::Suv,
        Self::Truck,
        Self::Motorcycle,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::SmallCar => "Small Car",
            Self::Sedan => "Sedan",
            Self::Suv => "SUV",
            Self::Truck => "Truck",
            Self::Motorcycle => "Motorcycle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafetyFeatures {
    Basic,
    Standard,
    Advanced,
}

impl Categorical for SafetyFeatures {
    const FIELD: &'static str = "safety_features";
    const ALL: &'static [Self] = &[Self::Basic, Self::Standard, Self::Advanced];

    fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Standard => "Standard",
            Self::Advanced => "Advanced",
        }
    }
}

/// Ordered severity outcome. Declaration order matters: `SlightInjury`
/// compares lowest and `FatalInjury` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeverityClass {
    SlightInjury,
    SeriousInjury,
    FatalInjury,
}

impl Categorical for SeverityClass {
    const FIELD: &'static str = "severity";
    const ALL: &'static [Self] = &[Self::SlightInjury, Self::SeriousInjury, Self::FatalInjury];

    fn label(self) -> &'static str {
        match self {
            Self::SlightInjury => "Slight Injury",
            Self::SeriousInjury => "Serious Injury",
            Self::FatalInjury => "Fatal Injury",
        }
    }
}

/// Raw request payload: nine string-valued categorical fields as supplied by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioForm {
    pub time: String,
    pub weather: String,
    pub road_condition: String,
    pub speed: String,
    pub driver_age: String,
    pub driver_experience: String,
    pub collision_type: String,
    pub vehicle_type: String,
    pub safety_features: String,
}

/// Sanitized accident scenario. A `None` field means the submitted label was
/// outside the known domain; downstream stages treat it as "no signal"
/// instead of rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub time: Option<TimeOfDay>,
    pub weather: Option<Weather>,
    pub road_condition: Option<RoadCondition>,
    pub speed: Option<SpeedCompliance>,
    pub driver_age: Option<DriverAge>,
    pub driver_experience: Option<DriverExperience>,
    pub collision_type: Option<CollisionType>,
    pub vehicle_type: Option<VehicleType>,
    pub safety_features: Option<SafetyFeatures>,
}

impl Scenario {
    /// Builds a fully in-domain scenario.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        time: TimeOfDay,
        weather: Weather,
        road_condition: RoadCondition,
        speed: SpeedCompliance,
        driver_age: DriverAge,
        driver_experience: DriverExperience,
        collision_type: CollisionType,
        vehicle_type: VehicleType,
        safety_features: SafetyFeatures,
    ) -> Self {
        Self {
            time: Some(time),
            weather: Some(weather),
            road_condition: Some(road_condition),
            speed: Some(speed),
            driver_age: Some(driver_age),
            driver_experience: Some(driver_experience),
            collision_type: Some(collision_type),
            vehicle_type: Some(vehicle_type),
            safety_features: Some(safety_features),
        }
    }

    pub fn from_form(form: &ScenarioForm) -> Self {
        Self {
            time: TimeOfDay::from_label(&form.time),
            weather: Weather::from_label(&form.weather),
            road_condition: RoadCondition::from_label(&form.road_condition),
            speed: SpeedCompliance::from_label(&form.speed),
            driver_age: DriverAge::from_label(&form.driver_age),
            driver_experience: DriverExperience::from_label(&form.driver_experience),
            collision_type: CollisionType::from_label(&form.collision_type),
            vehicle_type: VehicleType::from_label(&form.vehicle_type),
            safety_features: SafetyFeatures::from_label(&form.safety_features),
        }
    }

    /// Names the fields whose submitted labels were out of domain.
    pub fn ignored_fields(&self) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if self.time.is_none() {
            ignored.push(TimeOfDay::FIELD);
        }
        if self.weather.is_none() {
            ignored.push(Weather::FIELD);
        }
        if self.road_condition.is_none() {
            ignored.push(RoadCondition::FIELD);
        }
        if self.speed.is_none() {
            ignored.push(SpeedCompliance::FIELD);
        }
        if self.driver_age.is_none() {
            ignored.push(DriverAge::FIELD);
        }
        if self.driver_experience.is_none() {
            ignored.push(DriverExperience::FIELD);
        }
        if self.collision_type.is_none() {
            ignored.push(CollisionType::FIELD);
        }
        if self.vehicle_type.is_none() {
            ignored.push(VehicleType::FIELD);
        }
        if self.safety_features.is_none() {
            ignored.push(SafetyFeatures::FIELD);
        }
        ignored
    }
}

/// One historical observation: an accident scenario plus its ground-truth
/// severity label, as supplied by the training-data collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccidentRecord {
    pub scenario: Scenario,
    pub severity: SeverityClass,
}

/// Probability mass over the three severity classes. Values are kept
/// normalized so they sum to 1 within floating tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityDistribution {
    pub slight_injury: f64,
    pub serious_injury: f64,
    pub fatal_injury: f64,
}

impl ProbabilityDistribution {
    pub fn probability(&self, class: SeverityClass) -> f64 {
        match class {
            SeverityClass::SlightInjury => self.slight_injury,
            SeverityClass::SeriousInjury => self.serious_injury,
            SeverityClass::FatalInjury => self.fatal_injury,
        }
    }

    /// Entries in fixed class order, slight first.
    pub fn entries(&self) -> [(SeverityClass, f64); 3] {
        [
            (SeverityClass::SlightInjury, self.slight_injury),
            (SeverityClass::SeriousInjury, self.serious_injury),
            (SeverityClass::FatalInjury, self.fatal_injury),
        ]
    }

    /// Class holding the largest mass. Exact ties resolve to the lower
    /// severity class so repeated calls stay deterministic.
    pub fn argmax(&self) -> SeverityClass {
        let mut best = SeverityClass::SlightInjury;
        let mut best_mass = self.slight_injury;
        for (class, mass) in self.entries() {
            if mass > best_mass {
                best = class;
                best_mass = mass;
            }
        }
        best
    }

    pub fn total(&self) -> f64 {
        self.slight_injury + self.serious_injury + self.fatal_injury
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_label() {
        for member in RoadCondition::ALL {
            assert_eq!(RoadCondition::from_label(member.label()), Some(*member));
        }
        for member in SeverityClass::ALL {
            assert_eq!(SeverityClass::from_label(member.label()), Some(*member));
        }
    }

    #[test]
    fn from_label_is_case_and_whitespace_insensitive() {
        assert_eq!(
            RoadCondition::from_label("  snowy/icy "),
            Some(RoadCondition::SnowyIcy)
        );
        assert_eq!(
            SpeedCompliance::from_label("above  SPEED limit"),
            Some(SpeedCompliance::AboveLimit)
        );
        assert_eq!(Weather::from_label("Drizzle"), None);
    }

    #[test]
    fn severity_ordering_matches_domain() {
        assert!(SeverityClass::SlightInjury < SeverityClass::SeriousInjury);
        assert!(SeverityClass::SeriousInjury < SeverityClass::FatalInjury);
    }

    #[test]
    fn unknown_form_labels_become_ignored_fields() {
        let form = ScenarioForm {
            time: "Night".to_string(),
            weather: "Hurricane".to_string(),
            road_condition: "Dry".to_string(),
            speed: "At Speed Limit".to_string(),
            driver_age: "31-50".to_string(),
            driver_experience: "Over 5 years".to_string(),
            collision_type: "Other".to_string(),
            vehicle_type: "Sedan".to_string(),
            safety_features: "Standard".to_string(),
        };

        let scenario = Scenario::from_form(&form);
        assert_eq!(scenario.weather, None);
        assert_eq!(scenario.time, Some(TimeOfDay::Night));
        assert_eq!(scenario.ignored_fields(), vec!["weather"]);
    }

    #[test]
    fn argmax_prefers_lower_severity_on_ties() {
        let distribution = ProbabilityDistribution {
            slight_injury: 0.4,
            serious_injury: 0.4,
            fatal_injury: 0.2,
        };
        assert_eq!(distribution.argmax(), SeverityClass::SlightInjury);
    }
}
