use crate::{
    validate::{RecordReport, apply_defaults, validate_field, validate_record},
    value::is_blank,
};
use serde::Serialize;
use serde_json::{Map, Value};
use spectral_primitives::InputHint;
use spectral_schema::node::{EntityDefinition, FieldDefinition};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// FormError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FormError {
    #[error("{label} cannot be changed from this form")]
    ReadOnly { field: String, label: String },

    #[error("'{field}' is not a field of {entity}")]
    UnknownField { entity: String, field: String },
}

///
/// InputKind
///
/// Widget for one field: the type's default input, refined by format rules.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    Checkbox,
    Date,
    Email,
    Number,
    ReferencePicker,
    Select,
    Text,
    Url,
}

impl InputKind {
    #[must_use]
    pub fn for_field(field: &FieldDefinition) -> Self {
        match field.field_type().input_hint() {
            InputHint::Text if field.validation.email => Self::Email,
            InputHint::Text if field.validation.url => Self::Url,
            InputHint::Text => Self::Text,
            InputHint::Number => Self::Number,
            InputHint::Checkbox => Self::Checkbox,
            InputHint::Date => Self::Date,
            InputHint::Select => Self::Select,
            InputHint::ReferencePicker => Self::ReferencePicker,
        }
    }
}

///
/// FormField
///
/// Everything needed to draw one input.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub ident: String,
    pub label: String,
    pub input: InputKind,
    pub required: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    pub value: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

///
/// FormModel
///
/// Create/edit form state for one entity. Errors appear per field on blur
/// and for every field on submit.
///

#[derive(Clone, Debug)]
pub struct FormModel<'a> {
    definition: &'a EntityDefinition,
    values: Map<String, Value>,
    errors: BTreeMap<String, String>,
    record_error: Option<String>,
}

impl<'a> FormModel<'a> {
    /// Blank create form, seeded with declared defaults.
    #[must_use]
    pub fn new(definition: &'a EntityDefinition) -> Self {
        Self::edit(definition, &Map::new())
    }

    /// Edit form over an existing record; missing keys fall back to defaults.
    #[must_use]
    pub fn edit(definition: &'a EntityDefinition, record: &Map<String, Value>) -> Self {
        let mut values: Map<String, Value> = definition
            .fields
            .iter()
            .filter_map(|f| record.get(&f.ident).map(|v| (f.ident.clone(), v.clone())))
            .collect();
        apply_defaults(definition, &mut values);

        Self {
            definition,
            values,
            errors: BTreeMap::new(),
            record_error: None,
        }
    }

    #[must_use]
    pub const fn definition(&self) -> &'a EntityDefinition {
        self.definition
    }

    #[must_use]
    pub fn value(&self, ident: &str) -> Option<&Value> {
        self.values.get(ident)
    }

    #[must_use]
    pub const fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    #[must_use]
    pub fn record_error(&self) -> Option<&str> {
        self.record_error.as_deref()
    }

    /// Update a field's value. Any message for the field is cleared until
    /// the next blur or submit. Read-only fields keep their seeded value.
    pub fn set(&mut self, ident: &str, value: impl Into<Value>) -> Result<(), FormError> {
        let field = self.field(ident)?;
        if field.read_only {
            return Err(FormError::ReadOnly {
                field: field.ident.clone(),
                label: field.label.clone(),
            });
        }
        let ident = field.ident.clone();

        let value = value.into();
        if is_blank(Some(&value)) {
            self.values.remove(&ident);
        } else {
            self.values.insert(ident.clone(), value);
        }
        self.errors.remove(&ident);
        self.record_error = None;

        Ok(())
    }

    /// Validate a single field as the user leaves it.
    pub fn blur(&mut self, ident: &str) -> Result<Option<&str>, FormError> {
        let field = self.field(ident)?;

        match validate_field(self.values.get(ident), field) {
            Some(message) => {
                self.errors.insert(ident.to_string(), message);
            }
            None => {
                self.errors.remove(ident);
            }
        }

        Ok(self.errors.get(ident).map(String::as_str))
    }

    /// Validate the whole record. On success the submitted values are
    /// returned; on failure every message is recorded on the form.
    pub fn submit(&mut self) -> Result<Map<String, Value>, RecordReport> {
        let report = validate_record(self.definition, &self.values);

        self.errors.clone_from(&report.fields);
        self.record_error.clone_from(&report.entity);

        if report.is_valid() {
            Ok(self.values.clone())
        } else {
            Err(report)
        }
    }

    /// Inputs in declaration order.
    #[must_use]
    pub fn fields(&self) -> Vec<FormField> {
        self.definition
            .fields
            .iter()
            .map(|f| FormField {
                ident: f.ident.clone(),
                label: f.label.clone(),
                input: InputKind::for_field(f),
                required: f.required,
                read_only: f.read_only,
                options: f.options().map(<[String]>::to_vec).unwrap_or_default(),
                reference: f.reference_target().map(ToString::to_string),
                value: self.values.get(&f.ident).cloned(),
                error: self.errors.get(&f.ident).cloned(),
            })
            .collect()
    }

    fn field(&self, ident: &str) -> Result<&'a FieldDefinition, FormError> {
        self.definition
            .get_field(ident)
            .ok_or_else(|| FormError::UnknownField {
                entity: self.definition.name.clone(),
                field: ident.to_string(),
            })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patient() -> EntityDefinition {
        EntityDefinition::new("patient")
            .field(FieldDefinition::text("name", "Full Name").required())
            .field(FieldDefinition::text("email", "Email").email())
            .field(FieldDefinition::enumeration("blood_type", "Blood Type", ["A", "B", "AB", "O"]))
            .field(FieldDefinition::boolean("insured", "Insured").default_value(false))
            .field(FieldDefinition::reference("doctor", "Doctor", "doctor"))
    }

    #[test]
    fn inputs_follow_field_types_and_rules() {
        let def = patient();
        let form = FormModel::new(&def);
        let inputs: Vec<_> = form.fields().into_iter().map(|f| f.input).collect();

        assert_eq!(
            inputs,
            [
                InputKind::Text,
                InputKind::Email,
                InputKind::Select,
                InputKind::Checkbox,
                InputKind::ReferencePicker
            ]
        );
        assert_eq!(form.fields()[2].options, ["A", "B", "AB", "O"]);
        assert_eq!(form.fields()[4].reference.as_deref(), Some("doctor"));
    }

    #[test]
    fn create_form_starts_from_defaults() {
        let def = patient();
        let form = FormModel::new(&def);

        assert_eq!(form.value("insured"), Some(&json!(false)));
        assert_eq!(form.value("name"), None);
    }

    #[test]
    fn blur_reports_and_clears_one_field() {
        let def = patient();
        let mut form = FormModel::new(&def);

        assert_eq!(form.blur("name").unwrap(), Some("Full Name is required"));

        form.set("name", "Vincent Price").unwrap();
        assert!(form.errors().is_empty());
        assert_eq!(form.blur("name").unwrap(), None);
    }

    #[test]
    fn read_only_fields_keep_their_seeded_value() {
        let def = patient().field(
            FieldDefinition::enumeration("intake", "Intake", ["open", "closed"])
                .read_only()
                .default_value("open"),
        );
        let mut form = FormModel::new(&def);

        assert_eq!(
            form.set("intake", "closed"),
            Err(FormError::ReadOnly {
                field: "intake".to_string(),
                label: "Intake".to_string()
            })
        );
        assert_eq!(form.value("intake"), Some(&json!("open")));
        assert!(form.fields()[5].read_only);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let def = patient();
        let mut form = FormModel::new(&def);

        assert_eq!(
            form.set("ssn", "123"),
            Err(FormError::UnknownField {
                entity: "patient".to_string(),
                field: "ssn".to_string()
            })
        );
    }

    #[test]
    fn submit_collects_all_errors_then_succeeds() {
        let def = patient();
        let mut form = FormModel::new(&def);
        form.set("email", "ghost").unwrap();

        let report = form.submit().expect_err("missing name and bad email");
        assert_eq!(report.fields.len(), 2);
        assert_eq!(form.errors()["email"], "Email must be a valid email address");

        form.set("name", "Vincent Price").unwrap();
        form.set("email", "").unwrap();
        let values = form.submit().expect("valid");

        assert_eq!(values["name"], "Vincent Price");
        assert!(!values.contains_key("email"));
    }

    #[test]
    fn edit_form_keeps_only_declared_keys() {
        let def = patient();
        let record = json!({ "name": "Elvira", "legacy_id": 9 });
        let form = FormModel::edit(&def, record.as_object().unwrap());

        assert_eq!(form.value("name"), Some(&json!("Elvira")));
        assert_eq!(form.value("legacy_id"), None);
        assert_eq!(form.value("insured"), Some(&json!(false)));
    }
}
