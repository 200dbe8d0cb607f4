use std::ops::Range;

use super::domain::{
    Categorical, CollisionType, DriverAge, DriverExperience, RoadCondition, SafetyFeatures,
    Scenario, SpeedCompliance, TimeOfDay, VehicleType, Weather,
};

/// One contiguous one-hot block inside the feature vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBlock {
    pub field: &'static str,
    pub categories: Vec<&'static str>,
    pub offset: usize,
}

impl FieldBlock {
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.categories.len()
    }
}

/// Versioned category-to-vector mapping shared by training and inference.
///
/// Field order and per-field category order are frozen per version; changing
/// either requires a new version so serialized expectations never drift
/// between the trainer and the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    version: &'static str,
    blocks: Vec<FieldBlock>,
    width: usize,
}

fn labels<T: Categorical>() -> Vec<&'static str> {
    T::ALL.iter().map(|member| member.label()).collect()
}

impl FeatureSchema {
    /// The initial (and only) published schema: nine fields in assessment
    /// order, 36 indicator columns in total.
    pub fn v1() -> Self {
        let field_shapes: [(&'static str, Vec<&'static str>); 9] = [
            (TimeOfDay::FIELD, labels::<TimeOfDay>()),
            (Weather::FIELD, labels::<Weather>()),
            (RoadCondition::FIELD, labels::<RoadCondition>()),
            (SpeedCompliance::FIELD, labels::<SpeedCompliance>()),
            (DriverAge::FIELD, labels::<DriverAge>()),
            (DriverExperience::FIELD, labels::<DriverExperience>()),
            (CollisionType::FIELD, labels::<CollisionType>()),
            (VehicleType::FIELD, labels::<VehicleType>()),
            (SafetyFeatures::FIELD, labels::<SafetyFeatures>()),
        ];

        let mut blocks = Vec::with_capacity(field_shapes.len());
        let mut offset = 0;
        for (field, categories) in field_shapes {
            let len = categories.len();
            blocks.push(FieldBlock {
                field,
                categories,
                offset,
            });
            offset += len;
        }

        Self {
            version: "v1",
            blocks,
            width: offset,
        }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn blocks(&self) -> &[FieldBlock] {
        &self.blocks
    }

    /// Encodes a scenario into the fixed-width indicator vector. An unknown
    /// (out-of-domain) field leaves its whole block at zero: no signal for
    /// that field rather than a failed request.
    pub fn encode(&self, scenario: &Scenario) -> Vec<f32> {
        let mut features = vec![0.0_f32; self.width];
        set_indicator(&mut features, &self.blocks[0], scenario.time);
        set_indicator(&mut features, &self.blocks[1], scenario.weather);
        set_indicator(&mut features, &self.blocks[2], scenario.road_condition);
        set_indicator(&mut features, &self.blocks[3], scenario.speed);
        set_indicator(&mut features, &self.blocks[4], scenario.driver_age);
        set_indicator(&mut features, &self.blocks[5], scenario.driver_experience);
        set_indicator(&mut features, &self.blocks[6], scenario.collision_type);
        set_indicator(&mut features, &self.blocks[7], scenario.vehicle_type);
        set_indicator(&mut features, &self.blocks[8], scenario.safety_features);
        features
    }

    /// Index of the active category within a block, if the block carries a
    /// signal at all.
    pub fn active_category(&self, features: &[f32], block: &FieldBlock) -> Option<usize> {
        features
            .get(block.range())
            .and_then(|slice| slice.iter().position(|value| *value > 0.5))
    }
}

fn set_indicator<T: Categorical>(features: &mut [f32], block: &FieldBlock, value: Option<T>) {
    if let Some(member) = value {
        features[block.offset + member.index()] = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::domain::{
        CollisionType, DriverAge, DriverExperience, RoadCondition, SafetyFeatures, Scenario,
        SpeedCompliance, TimeOfDay, VehicleType, Weather,
    };

    fn sample_scenario() -> Scenario {
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

    #[test]
    fn v1_width_covers_all_categories() {
        let schema = FeatureSchema::v1();
        assert_eq!(schema.version(), "v1");
        assert_eq!(schema.width(), 36);
        assert_eq!(schema.blocks().len(), 9);
        assert_eq!(schema.blocks()[0].offset, 0);
        assert_eq!(schema.blocks()[8].range(), 33..36);
    }

    #[test]
    fn encode_sets_exactly_one_indicator_per_field() {
        let schema = FeatureSchema::v1();
        let features = schema.encode(&sample_scenario());

        assert_eq!(features.len(), schema.width());
        for block in schema.blocks() {
            let ones = features[block.range()]
                .iter()
                .filter(|value| **value > 0.5)
                .count();
            assert_eq!(ones, 1, "field {} should carry one indicator", block.field);
        }

        // Night is the fourth time-of-day category.
        assert_eq!(features[3], 1.0);
    }

    #[test]
    fn unknown_field_encodes_as_zero_block() {
        let schema = FeatureSchema::v1();
        let mut scenario = sample_scenario();
        scenario.weather = None;

        let features = schema.encode(&scenario);
        let weather_block = &schema.blocks()[1];
        assert!(features[weather_block.range()]
            .iter()
            .all(|value| *value == 0.0));
        assert_eq!(schema.active_category(&features, weather_block), None);
    }
}
