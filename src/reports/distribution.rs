use crate::error::ReportError;
use crate::record::{AnimalRecord, ProcessStateClass};
use crate::reports::types::{CLASS_FIELD_NAMES, CategoryField, ClassCount, CrossTab, LabelCount};

/// Sorts by count descending. The sort is stable, so ties keep table order.
fn by_count_desc<T>(mut items: Vec<T>, count: impl Fn(&T) -> usize) -> Vec<T> {
    items.sort_by(|a, b| count(b).cmp(&count(a)));
    items
}

/// Number of records per outcome class, largest first. Classes with no
/// records are left out.
pub fn outcome_distribution(records: &[AnimalRecord]) -> Vec<ClassCount> {
    let counts = ProcessStateClass::ALL
        .iter()
        .map(|&class| ClassCount {
            class,
            count: records
                .iter()
                .filter(|r| r.process_state_class == class)
                .count(),
        })
        .filter(|c| c.count > 0)
        .collect();

    by_count_desc(counts, |c| c.count)
}

/// Number of records per label of a categorical field, largest first.
///
/// `field` names the neuter (`neuterYn`) or sex (`sexCd`) column.
///
/// # Errors
///
/// Returns [`ReportError::InvalidField`] for any other field name.
pub fn categorical_distribution(
    records: &[AnimalRecord],
    field: &str,
) -> Result<Vec<LabelCount>, ReportError> {
    let field: CategoryField = field.parse()?;

    let counts = field
        .labels()
        .into_iter()
        .map(|label| LabelCount {
            label,
            count: records
                .iter()
                .filter(|r| field.label_of(r) == label)
                .count(),
        })
        .filter(|c| c.count > 0)
        .collect();

    Ok(by_count_desc(counts, |c| c.count))
}

/// Outcome class by category label, using the stacked-bar labels: `중성화`,
/// `중성화되지 않음` and `알 수 없음` for neuter status, raw `M`/`F`/`Q` codes for sex.
///
/// # Errors
///
/// Returns [`ReportError::InvalidField`] when `class_field` does not name the
/// outcome class or `category_field` has no label table.
pub fn cross_tabulation(
    records: &[AnimalRecord],
    class_field: &str,
    category_field: &str,
) -> Result<CrossTab, ReportError> {
    if !CLASS_FIELD_NAMES.contains(&class_field) {
        return Err(ReportError::InvalidField(class_field.to_string()));
    }
    let field: CategoryField = category_field.parse()?;

    let classes: Vec<ProcessStateClass> = ProcessStateClass::ALL
        .into_iter()
        .filter(|class| records.iter().any(|r| r.process_state_class == *class))
        .collect();
    let labels: Vec<&'static str> = field
        .crosstab_labels()
        .into_iter()
        .filter(|label| records.iter().any(|r| field.crosstab_label_of(r) == *label))
        .collect();

    let mut counts = vec![vec![0usize; labels.len()]; classes.len()];
    for record in records {
        let row = classes.iter().position(|c| *c == record.process_state_class);
        let col = labels
            .iter()
            .position(|l| *l == field.crosstab_label_of(record));
        if let (Some(row), Some(col)) = (row, col) {
            counts[row][col] += 1;
        }
    }

    Ok(CrossTab {
        classes,
        labels,
        counts,
    })
}
