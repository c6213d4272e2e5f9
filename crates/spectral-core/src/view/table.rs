use crate::value::{coerce_number, display_string, is_blank};
use serde::Serialize;
use serde_json::{Map, Value};
use spectral_primitives::{FieldType, ValueFamily};
use spectral_schema::node::{EntityDefinition, FieldDefinition, SortDirection, SortSpec};
use std::cmp::Ordering;

/// Cell text for an empty value.
pub const EMPTY_CELL: &str = "—";

///
/// Column
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Column {
    pub ident: String,
    pub label: String,

    #[serde(skip)]
    pub field_type: FieldType,
}

///
/// Row
///
/// Formatted cells plus the record's position in the input slice, so a UI
/// can route clicks back to the source record.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Row {
    pub index: usize,
    pub cells: Vec<String>,
}

///
/// TableModel
///
/// List view for one entity: columns from `display.list_columns` (or every
/// field), rows ordered by the default sort unless overridden.
///

#[derive(Clone, Debug)]
pub struct TableModel<'a> {
    definition: &'a EntityDefinition,
    columns: Vec<&'a FieldDefinition>,
    sort: Option<SortSpec>,
}

impl<'a> TableModel<'a> {
    #[must_use]
    pub fn new(definition: &'a EntityDefinition) -> Self {
        Self {
            definition,
            columns: definition.list_columns(),
            sort: definition.display.default_sort.clone(),
        }
    }

    /// Override the sort (a header click). Unknown fields clear sorting.
    #[must_use]
    pub fn sorted_by(mut self, field: &str, direction: SortDirection) -> Self {
        self.sort = self.definition.fields.contains(field).then(|| SortSpec {
            field: field.to_string(),
            direction,
        });
        self
    }

    #[must_use]
    pub fn columns(&self) -> Vec<Column> {
        self.columns
            .iter()
            .map(|f| Column {
                ident: f.ident.clone(),
                label: f.label.clone(),
                field_type: f.field_type(),
            })
            .collect()
    }

    /// Format and order `records`. Sorting is stable and empty values sort
    /// last in either direction. In numeric columns, values that do not
    /// parse as numbers follow the numeric ones.
    #[must_use]
    pub fn rows(&self, records: &[Map<String, Value>]) -> Vec<Row> {
        let mut order: Vec<usize> = (0..records.len()).collect();

        if let Some(sort) = &self.sort
            && let Some(field) = self.definition.get_field(&sort.field)
        {
            order.sort_by(|&a, &b| {
                compare_values(
                    records[a].get(&sort.field),
                    records[b].get(&sort.field),
                    field.field_type(),
                    sort.direction,
                )
            });
        }

        order
            .into_iter()
            .map(|index| Row {
                index,
                cells: self
                    .columns
                    .iter()
                    .map(|f| format_cell(records[index].get(&f.ident)))
                    .collect(),
            })
            .collect()
    }
}

/// Display text for one cell.
#[must_use]
pub fn format_cell(value: Option<&Value>) -> String {
    match value {
        v if is_blank(v) => EMPTY_CELL.to_string(),
        Some(Value::Bool(true)) => "Yes".to_string(),
        Some(Value::Bool(false)) => "No".to_string(),
        Some(v) => display_string(v),
        None => EMPTY_CELL.to_string(),
    }
}

fn compare_values(
    a: Option<&Value>,
    b: Option<&Value>,
    ty: FieldType,
    direction: SortDirection,
) -> Ordering {
    match (is_blank(a), is_blank(b)) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    let (Some(a), Some(b)) = (a, b) else {
        return Ordering::Equal;
    };

    let ord = match ty.family() {
        // numbers first, then unparseable text; direction applies within each group
        ValueFamily::Numeric => match (coerce_number(a), coerce_number(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => compare_text(a, b),
        },
        ValueFamily::Flag => a.as_bool().cmp(&b.as_bool()),
        _ => compare_text(a, b),
    };

    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

fn compare_text(a: &Value, b: &Value) -> Ordering {
    display_string(a)
        .to_lowercase()
        .cmp(&display_string(b).to_lowercase())
}

///
/// TESTS
///
