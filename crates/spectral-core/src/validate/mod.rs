//! Record validation against schema definitions.
//!
//! Field checks run in a fixed order and stop at the first failure:
//! required → length/range → format → custom. Every message names the
//! field by its label.

mod format;

#[cfg(test)]
mod property;

use crate::value::{coerce_number, display_string, format_float, is_blank, text_len};
use serde_json::{Map, Value};
use spectral_schema::node::{EntityDefinition, FieldDefinition, FieldKind, FieldList, ValidationRules};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;
use tracing::warn;

///
/// ValidationError
///
/// A record that failed validation at a write boundary.
///

#[derive(Debug, ThisError)]
#[error("{entity} failed validation: {}", .report.summary())]
pub struct ValidationError {
    pub entity: String,
    pub report: RecordReport,
}

///
/// RecordReport
///
/// Per-field messages plus the whole-record rule's message. Only failing
/// fields appear in `fields`.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RecordReport {
    pub fields: BTreeMap<String, String>,
    pub entity: Option<String>,
}

impl RecordReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.is_empty() && self.entity.is_none()
    }

    /// All messages joined with `; `, record-level message last.
    #[must_use]
    pub fn summary(&self) -> String {
        self.fields
            .values()
            .map(String::as_str)
            .chain(self.entity.as_deref())
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn into_result(self, entity: impl Into<String>) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationError {
                entity: entity.into(),
                report: self,
            })
        }
    }
}

/// Validate one value against one field definition.
///
/// Returns the first failing check's message, or `None` when valid. Empty
/// optional values are always valid.
#[must_use]
pub fn validate_field(value: Option<&Value>, field: &FieldDefinition) -> Option<String> {
    let label = field.label.as_str();

    if is_blank(value) {
        return field.required.then(|| format!("{label} is required"));
    }
    let Some(value) = value else {
        return None;
    };

    let rules = &field.validation;
    let typed = match &field.kind {
        FieldKind::Text => check_text(value, rules, label),
        FieldKind::Number => check_number(value, rules, label),
        FieldKind::Enum { options } => check_enum(value, options, label),
        FieldKind::Date => check_date(value, label),
        FieldKind::Boolean | FieldKind::Reference { .. } => None,
    };
    if typed.is_some() {
        return typed;
    }

    rules
        .custom
        .as_ref()
        .and_then(|rule| rule.check(value).into_error(|| format!("{label} is invalid")))
}

fn check_text(value: &Value, rules: &ValidationRules, label: &str) -> Option<String> {
    let text = display_string(value);
    let len = text_len(&text);

    if let Some(min) = rules.min_length
        && len < min
    {
        return Some(format!("{label} must be at least {min} characters"));
    }
    if let Some(max) = rules.max_length
        && len > max
    {
        return Some(format!("{label} must be at most {max} characters"));
    }

    if rules.email && !format::is_email(&text) {
        return Some(format!("{label} must be a valid email address"));
    }
    if rules.url && !format::is_url(&text) {
        return Some(format!("{label} must be a valid URL"));
    }

    if let Some(pattern) = &rules.pattern {
        let matched = match pattern.regex() {
            Ok(re) => re.is_match(&text),
            Err(e) => {
                warn!(pattern = pattern.as_str(), error = e, "field pattern does not compile");
                false
            }
        };
        if !matched {
            return Some(format!("{label} has an invalid format"));
        }
    }

    None
}

fn check_number(value: &Value, rules: &ValidationRules, label: &str) -> Option<String> {
    let Some(n) = coerce_number(value) else {
        return Some(format!("{label} must be a number"));
    };

    if let Some(min) = rules.min
        && n < min
    {
        return Some(format!("{label} must be at least {}", format_float(min)));
    }
    if let Some(max) = rules.max
        && n > max
    {
        return Some(format!("{label} must be at most {}", format_float(max)));
    }

    None
}

fn check_enum(value: &Value, options: &[String], label: &str) -> Option<String> {
    let text = display_string(value);

    if options.iter().any(|o| *o == text) {
        None
    } else {
        Some(format!("{label} must be one of: {}", options.join(", ")))
    }
}

fn check_date(value: &Value, label: &str) -> Option<String> {
    match value {
        Value::String(s) if format::is_date(s) => None,
        _ => Some(format!("{label} must be a valid date")),
    }
}

/// Validate every declared field; keys in `data` that are not declared are
/// ignored. Only failing fields appear in the result.
#[must_use]
pub fn validate_entity(data: &Map<String, Value>, fields: &FieldList) -> BTreeMap<String, String> {
    fields
        .iter()
        .filter_map(|field| {
            validate_field(data.get(&field.ident), field).map(|msg| (field.ident.clone(), msg))
        })
        .collect()
}

/// Validate a record against its definition: all fields first, then the
/// whole-record rule once every field passes.
#[must_use]
pub fn validate_record(def: &EntityDefinition, data: &Map<String, Value>) -> RecordReport {
    let fields = validate_entity(data, &def.fields);

    let entity = if fields.is_empty() {
        def.rule.as_ref().and_then(|rule| {
            rule.check(data)
                .into_error(|| format!("{} is invalid", def.display.singular))
        })
    } else {
        None
    };

    RecordReport { fields, entity }
}

/// Fill keys missing from `data` with declared defaults. Present keys,
/// including explicit nulls, are left alone.
pub fn apply_defaults(def: &EntityDefinition, data: &mut Map<String, Value>) {
    for field in &def.fields {
        if let Some(default) = &field.default_value
            && !data.contains_key(&field.ident)
        {
            data.insert(field.ident.clone(), default.clone());
        }
    }
}

///
/// TESTS
///
