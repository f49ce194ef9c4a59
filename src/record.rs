//! Normalized intake records and the fixed code tables they are built from.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Fine-grained outcome of an intake, as recorded in the `processState` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProcessState {
    #[serde(rename = "종료(자연사)")]
    NaturalDeath,
    #[serde(rename = "종료(안락사)")]
    Euthanasia,
    #[serde(rename = "종료(반환)")]
    Returned,
    #[serde(rename = "종료(기증)")]
    Donated,
    #[serde(rename = "종료(입양)")]
    Adopted,
    #[serde(rename = "종료(방사)")]
    Released,
    #[serde(rename = "종료(기타)")]
    OtherClosed,
    #[serde(rename = "보호중")]
    UnderCare,
}

/// Coarse outcome bucket derived from [`ProcessState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ProcessStateClass {
    Alive,
    Death,
    #[serde(rename = "Under care")]
    UnderCare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum NeuterStatus {
    Yes,
    No,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Sex {
    Male,
    Female,
    Unknown,
}

/// Raw `processState` value, parsed state and its outcome class.
///
/// Rows follow the declaration order of [`ProcessState`].
static PROCESS_STATES: &[(&str, ProcessState, ProcessStateClass)] = &[
    ("종료(자연사)", ProcessState::NaturalDeath, ProcessStateClass::Death),
    ("종료(안락사)", ProcessState::Euthanasia, ProcessStateClass::Death),
    ("종료(반환)", ProcessState::Returned, ProcessStateClass::Alive),
    ("종료(기증)", ProcessState::Donated, ProcessStateClass::Alive),
    ("종료(입양)", ProcessState::Adopted, ProcessStateClass::Alive),
    ("종료(방사)", ProcessState::Released, ProcessStateClass::Alive),
    ("종료(기타)", ProcessState::OtherClosed, ProcessStateClass::Alive),
    ("보호중", ProcessState::UnderCare, ProcessStateClass::UnderCare),
];

/// `neuterYn` code, status, display label and stacked-bar label.
///
/// Rows follow the declaration order of [`NeuterStatus`].
static NEUTER_CODES: &[(&str, NeuterStatus, &str, &str)] = &[
    ("Y", NeuterStatus::Yes, "Yes", "중성화"),
    ("N", NeuterStatus::No, "No", "중성화되지 않음"),
    ("U", NeuterStatus::Unknown, "Unknown", "알 수 없음"),
];

/// `sexCd` code, sex and display label.
///
/// Rows follow the declaration order of [`Sex`].
static SEX_CODES: &[(&str, Sex, &str)] = &[
    ("M", Sex::Male, "male"),
    ("F", Sex::Female, "female"),
    ("Q", Sex::Unknown, "unknown"),
];

impl ProcessState {
    pub const ALL: [Self; 8] = [
        Self::NaturalDeath,
        Self::Euthanasia,
        Self::Returned,
        Self::Donated,
        Self::Adopted,
        Self::Released,
        Self::OtherClosed,
        Self::UnderCare,
    ];

    /// Looks up a raw `processState` value. Returns `None` for values outside the table.
    pub fn from_code(code: &str) -> Option<Self> {
        PROCESS_STATES
            .iter()
            .find(|(raw, _, _)| *raw == code)
            .map(|(_, state, _)| *state)
    }

    /// Raw `processState` value. Table rows follow the declaration order.
    pub fn as_str(self) -> &'static str {
        PROCESS_STATES[self as usize].0
    }

    pub fn class(self) -> ProcessStateClass {
        match self {
            Self::NaturalDeath | Self::Euthanasia => ProcessStateClass::Death,
            Self::Returned | Self::Donated | Self::Adopted | Self::Released | Self::OtherClosed => {
                ProcessStateClass::Alive
            }
            Self::UnderCare => ProcessStateClass::UnderCare,
        }
    }
}

impl ProcessStateClass {
    pub const ALL: [Self; 3] = [Self::Alive, Self::Death, Self::UnderCare];

    pub fn label(self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Death => "Death",
            Self::UnderCare => "Under care",
        }
    }
}

impl NeuterStatus {
    pub const ALL: [Self; 3] = [Self::Yes, Self::No, Self::Unknown];

    pub fn from_code(code: &str) -> Option<Self> {
        NEUTER_CODES
            .iter()
            .find(|(raw, ..)| *raw == code)
            .map(|(_, status, ..)| *status)
    }

    pub fn code(self) -> &'static str {
        NEUTER_CODES[self as usize].0
    }

    pub fn label(self) -> &'static str {
        NEUTER_CODES[self as usize].2
    }

    /// Column label used in the outcome-by-neuter stacked bars.
    pub fn crosstab_label(self) -> &'static str {
        NEUTER_CODES[self as usize].3
    }
}

impl Sex {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Unknown];

    pub fn from_code(code: &str) -> Option<Self> {
        SEX_CODES
            .iter()
            .find(|(raw, _, _)| *raw == code)
            .map(|(_, sex, _)| *sex)
    }

    pub fn code(self) -> &'static str {
        SEX_CODES[self as usize].0
    }

    pub fn label(self) -> &'static str {
        SEX_CODES[self as usize].2
    }

    /// Column label used in the outcome-by-sex stacked bars: the raw code.
    pub fn crosstab_label(self) -> &'static str {
        self.code()
    }
}

/// One intake event after normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalRecord {
    pub shelter_name: String,
    pub happen_date: NaiveDate,
    pub process_state: ProcessState,
    pub process_state_class: ProcessStateClass,
    pub neuter_status: NeuterStatus,
    pub sex: Sex,
    pub latitude: f64,
    pub longitude: f64,
}

impl AnimalRecord {
    pub fn year(&self) -> i32 {
        self.happen_date.year()
    }

    /// Bit-exact coordinate key, usable in hash sets. `-0.0` and `0.0` share a key.
    pub(crate) fn coordinate_key(&self) -> (u64, u64) {
        (coordinate_bits(self.latitude), coordinate_bits(self.longitude))
    }
}

fn coordinate_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}
