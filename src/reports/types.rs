//! Value types returned by the report functions.

use std::str::FromStr;

use serde::Serialize;

use crate::error::ReportError;
use crate::record::{AnimalRecord, NeuterStatus, ProcessStateClass, Sex};
use crate::reports::tier::AdoptionTier;

/// Count for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Count for one outcome class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassCount {
    pub class: ProcessStateClass,
    pub count: usize,
}

/// Count for one categorical label such as `"Yes"` or `"female"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: &'static str,
    pub count: usize,
}

/// Outcome class by category label, for stacked bar charts.
///
/// `counts[i][j]` is the number of records with class `classes[i]` and label
/// `labels[j]`. Only classes and labels present in the input appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossTab {
    pub classes: Vec<ProcessStateClass>,
    pub labels: Vec<&'static str>,
    pub counts: Vec<Vec<usize>>,
}

impl CrossTab {
    /// Count for a combination. Combinations absent from the table are 0.
    pub fn get(&self, class: ProcessStateClass, label: &str) -> usize {
        let Some(row) = self.classes.iter().position(|c| *c == class) else {
            return 0;
        };
        let Some(col) = self.labels.iter().position(|l| *l == label) else {
            return 0;
        };
        self.counts
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Adoptions ("Alive" outcomes) for one shelter location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShelterSummary {
    pub shelter_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub adoptions: usize,
    pub adoption_tier: Option<AdoptionTier>,
}

/// Number of shelters in each tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub good: usize,
    pub okay: usize,
    pub bad: usize,
}

impl TierCounts {
    pub fn get(&self, tier: AdoptionTier) -> usize {
        match tier {
            AdoptionTier::Good => self.good,
            AdoptionTier::Okay => self.okay,
            AdoptionTier::Bad => self.bad,
        }
    }
}

/// A record field that can be summarized as a labelled distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Neuter,
    Sex,
}

impl CategoryField {
    /// Display labels in table order.
    pub fn labels(self) -> [&'static str; 3] {
        match self {
            Self::Neuter => NeuterStatus::ALL.map(NeuterStatus::label),
            Self::Sex => Sex::ALL.map(Sex::label),
        }
    }

    pub fn label_of(self, record: &AnimalRecord) -> &'static str {
        match self {
            Self::Neuter => record.neuter_status.label(),
            Self::Sex => record.sex.label(),
        }
    }

    /// Stacked-bar column labels in table order: Korean neuter labels and
    /// raw sex codes.
    pub fn crosstab_labels(self) -> [&'static str; 3] {
        match self {
            Self::Neuter => NeuterStatus::ALL.map(NeuterStatus::crosstab_label),
            Self::Sex => Sex::ALL.map(Sex::crosstab_label),
        }
    }

    pub fn crosstab_label_of(self, record: &AnimalRecord) -> &'static str {
        match self {
            Self::Neuter => record.neuter_status.crosstab_label(),
            Self::Sex => record.sex.crosstab_label(),
        }
    }
}

impl FromStr for CategoryField {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neuterYn" | "neuterStatus" | "neuter_status" | "neuter" => Ok(Self::Neuter),
            "sexCd" | "sex" => Ok(Self::Sex),
            other => Err(ReportError::InvalidField(other.to_string())),
        }
    }
}

/// Accepted names for the outcome-class field.
pub(crate) const CLASS_FIELD_NAMES: &[&str] = &[
    "processStateClass",
    "processState_class",
    "process_state_class",
];
