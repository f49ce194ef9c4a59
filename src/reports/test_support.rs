use crate::loader::parse_happen_date;
use crate::record::{AnimalRecord, NeuterStatus, ProcessState, Sex};

pub(crate) fn record(name: &str, date: &str, state: &str, lat: f64, lng: f64) -> AnimalRecord {
    let process_state = ProcessState::from_code(state).expect("known process state");
    AnimalRecord {
        shelter_name: name.to_string(),
        happen_date: parse_happen_date(date).expect("valid date"),
        process_state,
        process_state_class: process_state.class(),
        neuter_status: NeuterStatus::Unknown,
        sex: Sex::Unknown,
        latitude: lat,
        longitude: lng,
    }
}

pub(crate) fn record_with(
    name: &str,
    date: &str,
    state: &str,
    neuter_status: NeuterStatus,
    sex: Sex,
) -> AnimalRecord {
    AnimalRecord {
        neuter_status,
        sex,
        ..record(name, date, state, 0.0, 0.0)
    }
}
