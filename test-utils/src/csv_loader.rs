use std::error::Error;
use std::io;

use csv::{ReaderBuilder, StringRecord, Trim};

use common::{SensorEvent, SensorKind};

/// Column layout of a sensor trace: `t_ms,sensor,v0[,v1,v2,v3]`.
const TIMESTAMP_COLUMN: usize = 0;
const SENSOR_COLUMN: usize = 1;
const FIRST_VALUE_COLUMN: usize = 2;

/// Recorded hardware event, `t_ms` milliseconds after the trace began.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedSensorEvent {
    pub t_ms: u64,
    pub event: SensorEvent,
}

/// Loads a recorded sensor trace from a CSV file with a header row.
pub fn load_sensor_trace(file_path: &str) -> Result<Vec<TimedSensorEvent>, Box<dyn Error>> {
    let file = std::fs::File::open(file_path)?;
    parse_sensor_trace(file)
}

/// Parses a trace from any reader. Rows may carry between one and four values.
pub fn parse_sensor_trace<R: io::Read>(reader: R) -> Result<Vec<TimedSensorEvent>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut events = Vec::new();

    for result in rdr.records() {
        events.push(parse_record(&result?)?);
    }
    events.sort_by_key(|e| e.t_ms);

    Ok(events)
}

fn parse_record(record: &StringRecord) -> Result<TimedSensorEvent, Box<dyn Error>> {
    let t_ms = record
        .get(TIMESTAMP_COLUMN)
        .ok_or("missing timestamp")?
        .parse::<u64>()?;
    let kind = SensorKind::try_from(record.get(SENSOR_COLUMN).ok_or("missing sensor")?)?;
    let values = record
        .iter()
        .skip(FIRST_VALUE_COLUMN)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f32>())
        .collect::<Result<Vec<f32>, _>>()?;

    Ok(TimedSensorEvent {
        t_ms,
        event: SensorEvent::new(kind, values),
    })
}
