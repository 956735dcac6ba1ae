#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::prelude::*;

use time::Duration;

use crate::base_types::{
    ElementIdx, EquipmentIdx, OperationalLimits, Position, UtmZone, VesselIdx,
};
use crate::elements::{Element, ElementKind, Elements};
use crate::metocean::SeaStateRecord;
use crate::operations::{
    DurationFunction, DurationRule, DurationSource, Operation, OperationPhase, OperationPlan,
};
use crate::vessels::{EquipmentType, VesselCombination, VesselType};

/// everything the scheduler needs for one logistic phase, as loaded from the
/// scenario file
pub struct Scenario {
    pub elements: Elements,
    pub combination: VesselCombination,
    pub plan: OperationPlan,
    pub entry_point: Position,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonPosition {
    easting_in_meter: f64,
    northing_in_meter: f64,
    utm_zone: u8,
    northern_hemisphere: bool,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonElement {
    kind: String,
    footprint_in_square_meter: f64,
    dry_mass_in_tonnes: f64,
    position: JsonPosition,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsonLimits {
    max_hs_in_meter: Option<f64>,
    max_tp_in_seconds: Option<f64>,
    max_ws_in_meter_per_second: Option<f64>,
    max_cs_in_meter_per_second: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonVessel {
    name: String,
    quantity: u32,
    deck_space_in_square_meter: f64,
    max_cargo_in_tonnes: f64,
    transit_speed_in_meter_per_second: f64,
    mobilisation_time_in_hours: Option<f64>,
    transit_limits: Option<JsonLimits>,
    towing_limits: Option<JsonLimits>,
    jacking_limits: Option<JsonLimits>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonEquipment {
    name: String,
    quantity: u32,
    footprint_in_square_meter: f64,
    weight_in_tonnes: f64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonOperation {
    name: String,
    phase: String,
    duration_in_hours: Option<f64>,
    per_element: Option<bool>,
    function: Option<String>,
    source: Option<String>,
    limits: Option<JsonLimits>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonScenario {
    entry_point: JsonPosition,
    elements: Vec<JsonElement>,
    vessels: Vec<JsonVessel>,
    equipment: Vec<JsonEquipment>,
    operations: Vec<JsonOperation>,
}

pub fn load_scenario_from_json(path: &str) -> Scenario {
    let mut file = File::open(path).unwrap();
    let mut data = String::new();
    file.read_to_string(&mut data).unwrap();
    let json_scenario: JsonScenario = serde_json::from_str(&data).unwrap();
    create_scenario(json_scenario)
}

fn create_scenario(json_scenario: JsonScenario) -> Scenario {
    let elements = Elements::new(
        json_scenario
            .elements
            .iter()
            .enumerate()
            .map(|(i, e)| {
                Element::new(
                    ElementIdx(i as u16),
                    create_element_kind(&e.kind),
                    e.footprint_in_square_meter,
                    e.dry_mass_in_tonnes,
                    create_position(&e.position),
                )
            })
            .collect(),
    );

    let vessels = json_scenario
        .vessels
        .iter()
        .enumerate()
        .map(|(i, v)| {
            (
                VesselType::new(
                    VesselIdx(i as u16),
                    v.name.clone(),
                    v.deck_space_in_square_meter,
                    v.max_cargo_in_tonnes,
                    v.transit_speed_in_meter_per_second,
                    v.mobilisation_time_in_hours
                        .filter(|h| h.is_finite())
                        .map(Duration::from_hours_f64),
                    create_limits(v.transit_limits.as_ref()),
                    create_limits(v.towing_limits.as_ref()),
                    create_limits(v.jacking_limits.as_ref()),
                ),
                v.quantity,
            )
        })
        .collect();

    let equipment = json_scenario
        .equipment
        .iter()
        .enumerate()
        .map(|(i, e)| {
            (
                EquipmentType::new(
                    EquipmentIdx(i as u16),
                    e.name.clone(),
                    e.footprint_in_square_meter,
                    e.weight_in_tonnes,
                ),
                e.quantity,
            )
        })
        .collect();

    let operations = json_scenario
        .operations
        .into_iter()
        .map(create_operation)
        .collect();

    Scenario {
        elements,
        combination: VesselCombination::new(vessels, equipment),
        plan: OperationPlan::new(operations),
        entry_point: create_position(&json_scenario.entry_point),
    }
}

fn create_position(json_position: &JsonPosition) -> Position {
    Position::new(
        json_position.easting_in_meter,
        json_position.northing_in_meter,
        UtmZone::new(json_position.utm_zone, json_position.northern_hemisphere),
    )
}

fn create_element_kind(kind: &str) -> ElementKind {
    match kind {
        "foundation" => ElementKind::Foundation,
        "mooringSegment" => ElementKind::MooringSegment,
        "cableSegment" => ElementKind::CableSegment,
        "device" => ElementKind::Device,
        "subAssembly" => ElementKind::SubAssembly,
        _ => panic!("Unknown element kind: {}", kind),
    }
}

fn create_limits(json_limits: Option<&JsonLimits>) -> OperationalLimits {
    match json_limits {
        None => OperationalLimits::UNLIMITED,
        Some(l) => OperationalLimits::new(
            l.max_hs_in_meter.unwrap_or(0.0),
            l.max_tp_in_seconds.unwrap_or(0.0),
            l.max_ws_in_meter_per_second.unwrap_or(0.0),
            l.max_cs_in_meter_per_second.unwrap_or(0.0),
        ),
    }
}

fn create_operation(json_operation: JsonOperation) -> Operation {
    let phase = match json_operation.phase.as_str() {
        "preparation" => OperationPhase::Preparation,
        "sea" => OperationPhase::Sea,
        "demobilisation" => OperationPhase::Demobilisation,
        other => panic!("Unknown operation phase: {}", other),
    };

    // exactly one duration-resolution mode; anything unrecognized stays as a
    // skippable Unsupported operation
    let rule = if let Some(hours) = json_operation.duration_in_hours {
        let duration = Duration::from_hours_f64(hours);
        if json_operation.per_element.unwrap_or(false) {
            DurationRule::FixedPerElement(duration)
        } else {
            DurationRule::Fixed(duration)
        }
    } else if let Some(function) = &json_operation.function {
        match function.as_str() {
            "distance" => DurationRule::Function(DurationFunction::Transit),
            _ => DurationRule::Unsupported(json_operation.name.clone()),
        }
    } else if let Some(source) = &json_operation.source {
        match source.as_str() {
            "vesselMobilisation" => DurationRule::External(DurationSource::Mobilisation),
            _ => DurationRule::Unsupported(json_operation.name.clone()),
        }
    } else {
        DurationRule::Unsupported(json_operation.name.clone())
    };

    let limits = json_operation
        .limits
        .as_ref()
        .map(|l| create_limits(Some(l)));

    Operation::new(json_operation.name, phase, rule, limits)
}

#[derive(Deserialize, Debug)]
struct CsvSeaState {
    #[serde(rename = "year [-]")]
    year: u32,
    #[serde(rename = "month [-]")]
    month: u8,
    #[serde(rename = "day [-]")]
    day: u8,
    #[serde(rename = "hour [-]")]
    hour: u8,
    #[serde(rename = "Hs [m]")]
    hs: f64,
    #[serde(rename = "Tp [s]")]
    tp: f64,
    #[serde(rename = "Ws [m/s]")]
    ws: f64,
    #[serde(rename = "Cs [m/s]")]
    cs: f64,
}

/// raw metocean rows; normalization happens in the scheduler
pub fn load_metocean_records_from_csv(path: &str) -> Vec<SeaStateRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .deserialize()
        .map(|row| {
            let row: CsvSeaState = row.unwrap();
            SeaStateRecord {
                year: row.year,
                month: row.month,
                day: row.day,
                hour: row.hour,
                hs: row.hs,
                tp: row.tp,
                ws: row.ws,
                cs: row.cs,
            }
        })
        .collect()
}
