use time::Duration;

use crate::base_types::ElementIdx;
use crate::elements::ElementKind;
use crate::json_serialisation::{load_metocean_records_from_csv, load_scenario_from_json};
use crate::operations::{DurationFunction, DurationRule, DurationSource};

#[test]
fn test_load_scenario_from_json() {
    // ACT
    let scenario = load_scenario_from_json("resources/small_scenario.json");

    // ASSERT
    assert_eq!(scenario.elements.len(), 3);
    let first = scenario.elements.get(ElementIdx(0)).unwrap();
    assert_eq!(first.kind(), ElementKind::Foundation);
    assert_eq!(first.area(), 120.0);
    assert_eq!(first.dry_mass(), 350.0);
    assert_eq!(first.position().easting(), 512000.0);

    // 450 + 2 * 80 deck space minus 30 occupied by the rov spread
    let capacity = scenario.combination.deck_capacity();
    assert_eq!(capacity.area, 580.0);
    assert_eq!(capacity.cargo, 1475.0);
    assert_eq!(scenario.combination.slowest_transit_speed(), 3.6);
    assert_eq!(
        scenario.combination.max_mobilisation_time(),
        Duration::from_hours(72)
    );

    // the multicat is the limiting vessel for transit
    let transit_limits = scenario.combination.transit_limits();
    assert_eq!(transit_limits.max_hs, 1.8);
    assert_eq!(transit_limits.max_ws, 12.0);
    assert_eq!(transit_limits.max_tp, 0.0);

    assert_eq!(scenario.plan.preparation.len(), 2);
    assert_eq!(scenario.plan.sea.len(), 2);
    assert_eq!(scenario.plan.demobilisation.len(), 1);

    assert_eq!(
        scenario.plan.preparation[0].rule(),
        &DurationRule::FixedPerElement(Duration::from_hours(6))
    );
    assert_eq!(
        scenario.plan.preparation[1].rule(),
        &DurationRule::External(DurationSource::Mobilisation)
    );
    assert_eq!(
        scenario.plan.sea[0].rule(),
        &DurationRule::Function(DurationFunction::Transit)
    );
    assert_eq!(
        scenario.plan.sea[1].rule(),
        &DurationRule::FixedPerElement(Duration::from_hours(4))
    );

    let lowering_limits = scenario.plan.sea[1].limits().unwrap();
    assert_eq!(lowering_limits.max_hs, 1.5);
    assert_eq!(lowering_limits.max_cs, 0.75);
    assert!(scenario.plan.demobilisation[0].limits().is_none());
}

#[test]
fn test_load_metocean_from_csv() {
    // ACT
    let records = load_metocean_records_from_csv("resources/metocean_sample.csv");

    // ASSERT
    assert_eq!(records.len(), 6);
    assert_eq!(records[0].year, 2001);
    assert_eq!(records[0].hour, 0);
    assert_eq!(records[0].hs, 1.2);
    assert_eq!(records[2].ws, 11.0);
    assert_eq!(records[5].timestamp(), time::DateTime::new("2001-01-01T05:00"));
}
