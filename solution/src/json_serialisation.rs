use serde::Serialize;
use serde_json::Value;

use crate::journey::{Journey, ScheduledTask};
use crate::schedule::Schedule;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonTask {
    name: String,
    duration_in_hours: f64,
    max_hs_in_meter: Option<f64>,
    max_tp_in_seconds: Option<f64>,
    max_ws_in_meter_per_second: Option<f64>,
    max_cs_in_meter_per_second: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonJourney {
    journey: u16,
    elements: Vec<u16>,
    loaded_area_in_square_meter: f64,
    loaded_mass_in_tonnes: f64,
    preparation: Vec<JsonTask>,
    sea: Vec<JsonTask>,
    demobilisation: Vec<JsonTask>,
    start_delay_in_hours: Option<f64>,
    waiting_time_in_hours: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSchedule {
    status: String,
    number_of_journeys: usize,
    journeys: Vec<JsonJourney>,
}

/// serialize a schedule for the downstream cost/reporting modules
pub fn schedule_to_json(schedule: &Schedule) -> Value {
    let json_schedule = JsonSchedule {
        status: schedule.status().to_string(),
        number_of_journeys: schedule.number_of_journeys(),
        journeys: schedule.journeys_iter().map(create_json_journey).collect(),
    };
    serde_json::to_value(json_schedule).expect("Schedule serialization cannot fail.")
}

fn create_json_journey(journey: &Journey) -> JsonJourney {
    JsonJourney {
        journey: journey.idx().0,
        elements: journey.elements().iter().map(|e| e.0).collect(),
        loaded_area_in_square_meter: journey.loaded_area(),
        loaded_mass_in_tonnes: journey.loaded_mass(),
        preparation: journey.preparation_tasks().iter().map(create_json_task).collect(),
        sea: journey.sea_tasks().iter().map(create_json_task).collect(),
        demobilisation: journey
            .demobilisation_tasks()
            .iter()
            .map(create_json_task)
            .collect(),
        start_delay_in_hours: journey.start_delay().map(|d| d.as_hours_f64()),
        waiting_time_in_hours: journey.waiting_time().map(|d| d.as_hours_f64()),
    }
}

fn create_json_task(task: &ScheduledTask) -> JsonTask {
    JsonTask {
        name: task.name().to_string(),
        duration_in_hours: task.duration().as_hours_f64(),
        max_hs_in_meter: task.limits().map(|l| l.max_hs),
        max_tp_in_seconds: task.limits().map(|l| l.max_tp),
        max_ws_in_meter_per_second: task.limits().map(|l| l.max_ws),
        max_cs_in_meter_per_second: task.limits().map(|l| l.max_cs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduleStatus;
    use model::base_types::{ElementIdx, JourneyIdx, OperationalLimits};
    use time::Duration;

    #[test]
    fn schedule_serializes_with_status_and_timing() {
        let mut journey = Journey::new(JourneyIdx(0), vec![ElementIdx(0)], 10.0, 5.0);
        journey.add_sea_task(ScheduledTask::new(
            String::from("lowering"),
            Duration::from_hours(8),
            Some(OperationalLimits::new(1.5, 0.0, 0.0, 0.75)),
        ));
        journey.set_timing(Some(Duration::from_hours(750)), None);
        let schedule = Schedule::new(vec![journey], ScheduleStatus::WeatherWindowsFound);

        let json = schedule_to_json(&schedule);
        assert_eq!(json["status"], "WeatherWindowsFound");
        assert_eq!(json["numberOfJourneys"], 1);
        assert_eq!(json["journeys"][0]["elements"][0], 0);
        assert_eq!(json["journeys"][0]["startDelayInHours"], 750.0);
        assert_eq!(json["journeys"][0]["waitingTimeInHours"], Value::Null);
        assert_eq!(json["journeys"][0]["sea"][0]["maxHsInMeter"], 1.5);
    }
}
