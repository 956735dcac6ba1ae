use time::Duration;

use crate::base_types::{
    EquipmentIdx, MeterPerSecond, OperationalLimits, SquareMeter, Tonne, VesselCount, VesselIdx,
};

#[derive(Clone, PartialEq, Debug)]
pub struct VesselType {
    idx: VesselIdx,
    name: String,
    deck_area: SquareMeter,
    max_cargo: Tonne,
    transit_speed: MeterPerSecond,
    mobilisation_time: Option<Duration>, // None if unknown for this vessel type
    transit_limits: OperationalLimits,
    towing_limits: OperationalLimits,
    jacking_limits: OperationalLimits,
}

impl VesselType {
    pub fn new(
        idx: VesselIdx,
        name: String,
        deck_area: SquareMeter,
        max_cargo: Tonne,
        transit_speed: MeterPerSecond,
        mobilisation_time: Option<Duration>,
        transit_limits: OperationalLimits,
        towing_limits: OperationalLimits,
        jacking_limits: OperationalLimits,
    ) -> VesselType {
        VesselType {
            idx,
            name,
            deck_area,
            max_cargo,
            transit_speed,
            mobilisation_time,
            transit_limits,
            towing_limits,
            jacking_limits,
        }
    }

    pub fn idx(&self) -> VesselIdx {
        self.idx
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn deck_area(&self) -> SquareMeter {
        self.deck_area
    }

    pub fn max_cargo(&self) -> Tonne {
        self.max_cargo
    }

    pub fn transit_speed(&self) -> MeterPerSecond {
        self.transit_speed
    }

    pub fn mobilisation_time(&self) -> Option<Duration> {
        self.mobilisation_time
    }

    pub fn transit_limits(&self) -> &OperationalLimits {
        &self.transit_limits
    }

    pub fn towing_limits(&self) -> &OperationalLimits {
        &self.towing_limits
    }

    pub fn jacking_limits(&self) -> &OperationalLimits {
        &self.jacking_limits
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct EquipmentType {
    idx: EquipmentIdx,
    name: String,
    footprint: SquareMeter,
    weight: Tonne,
}

impl EquipmentType {
    pub fn new(idx: EquipmentIdx, name: String, footprint: SquareMeter, weight: Tonne) -> Self {
        EquipmentType {
            idx,
            name,
            footprint,
            weight,
        }
    }

    pub fn idx(&self) -> EquipmentIdx {
        self.idx
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn footprint(&self) -> SquareMeter {
        self.footprint
    }

    pub fn weight(&self) -> Tonne {
        self.weight
    }
}

/// the usable deck capacity of a combination once equipment is on board
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct DeckCapacity {
    pub area: SquareMeter,
    pub cargo: Tonne,
}

/// An ordered set of (vessel type, quantity) and (equipment type, quantity)
/// pairs forming one logistic-phase strategy. Created once per strategy and
/// read-only during scheduling.
#[derive(Clone, PartialEq, Debug)]
pub struct VesselCombination {
    vessels: Vec<(VesselType, VesselCount)>,
    equipment: Vec<(EquipmentType, u32)>,
}

// static functions:
impl VesselCombination {
    pub fn new(
        vessels: Vec<(VesselType, VesselCount)>,
        equipment: Vec<(EquipmentType, u32)>,
    ) -> VesselCombination {
        assert!(!vessels.is_empty(), "A combination needs at least one vessel.");
        VesselCombination { vessels, equipment }
    }
}

// methods:
impl VesselCombination {
    pub fn vessels(&self) -> impl Iterator<Item = &VesselType> + '_ {
        self.vessels.iter().map(|(v, _)| v)
    }

    pub fn equipment(&self) -> impl Iterator<Item = &EquipmentType> + '_ {
        self.equipment.iter().map(|(e, _)| e)
    }

    /// total deck area / cargo across all vessels, reduced by the footprint
    /// and weight of the equipment already occupying the deck. Never negative.
    pub fn deck_capacity(&self) -> DeckCapacity {
        let area: SquareMeter = self
            .vessels
            .iter()
            .map(|(v, count)| v.deck_area() * *count as f64)
            .sum();
        let cargo: Tonne = self
            .vessels
            .iter()
            .map(|(v, count)| v.max_cargo() * *count as f64)
            .sum();
        let occupied_area: SquareMeter = self
            .equipment
            .iter()
            .map(|(e, count)| e.footprint() * *count as f64)
            .sum();
        let occupied_weight: Tonne = self
            .equipment
            .iter()
            .map(|(e, count)| e.weight() * *count as f64)
            .sum();
        DeckCapacity {
            area: (area - occupied_area).max(0.0),
            cargo: (cargo - occupied_weight).max(0.0),
        }
    }

    /// the combination can only move as fast as its slowest vessel
    pub fn slowest_transit_speed(&self) -> MeterPerSecond {
        self.vessels
            .iter()
            .map(|(v, _)| v.transit_speed())
            .filter(|s| s.is_finite() && *s > 0.0)
            .fold(f64::INFINITY, f64::min)
    }

    /// the most restrictive transit thresholds across all vessels
    pub fn transit_limits(&self) -> OperationalLimits {
        OperationalLimits::most_restrictive(self.vessels.iter().map(|(v, _)| v.transit_limits()))
    }

    /// the longest vessel mobilisation time; vessels without a known
    /// mobilisation time count as zero
    pub fn max_mobilisation_time(&self) -> Duration {
        self.vessels
            .iter()
            .map(|(v, _)| v.mobilisation_time().unwrap_or_else(Duration::zero))
            .max()
            .unwrap_or_else(Duration::zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vessel(idx: u16, speed: f64, mob: Option<Duration>, hs: f64) -> VesselType {
        VesselType::new(
            VesselIdx(idx),
            format!("vessel {}", idx),
            400.0,
            1000.0,
            speed,
            mob,
            OperationalLimits::new(hs, 0.0, 12.0, 0.0),
            OperationalLimits::UNLIMITED,
            OperationalLimits::UNLIMITED,
        )
    }

    #[test]
    fn deck_capacity_is_reduced_by_equipment() {
        let combination = VesselCombination::new(
            vec![(vessel(0, 5.0, None, 2.0), 1)],
            vec![(
                EquipmentType::new(EquipmentIdx(0), String::from("rov"), 50.0, 120.0),
                2,
            )],
        );
        let capacity = combination.deck_capacity();
        assert_eq!(capacity.area, 300.0);
        assert_eq!(capacity.cargo, 760.0);
    }

    #[test]
    fn slowest_vessel_and_most_restrictive_limits_win() {
        let combination = VesselCombination::new(
            vec![
                (vessel(0, 6.0, Some(Duration::from_hours(48)), 2.5), 1),
                (vessel(1, 3.5, None, 1.5), 2),
            ],
            vec![],
        );
        assert_eq!(combination.slowest_transit_speed(), 3.5);
        assert_eq!(combination.transit_limits().max_hs, 1.5);
        assert_eq!(
            combination.max_mobilisation_time(),
            Duration::from_hours(48)
        );
    }
}
