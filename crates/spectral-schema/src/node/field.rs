use crate::{err, error::ErrorTree, validate::ValidateNode, validate::naming};
use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;
use spectral_primitives::FieldType;
use std::{collections::BTreeSet, ops::Not};

use super::CustomRule;

///
/// FieldKind
///
/// Field type plus the payload some types require. Enum options and
/// reference targets are carried by the variant so a definition can never
/// name an enum without an option list.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Boolean,
    Date,
    Enum { options: Vec<String> },
    Number,
    Reference { reference: String },
    #[serde(rename = "string")]
    Text,
}

impl FieldKind {
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::Boolean => FieldType::Boolean,
            Self::Date => FieldType::Date,
            Self::Enum { .. } => FieldType::Enum,
            Self::Number => FieldType::Number,
            Self::Reference { .. } => FieldType::Reference,
            Self::Text => FieldType::Text,
        }
    }
}

///
/// Pattern
///
/// Caller-supplied regular expression, compiled once when the definition
/// is built. A pattern that fails to compile is kept so schema validation
/// can report it; it never matches.
///

#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    compiled: Result<Regex, String>,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let compiled = Regex::new(&source).map_err(|e| e.to_string());

        Self { source, compiled }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Return the compiled expression, or the compile error message.
    pub fn regex(&self) -> Result<&Regex, &str> {
        self.compiled.as_ref().map_err(String::as_str)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

///
/// ValidationRules
///
/// Optional per-field rules. Each rule is only evaluated when present, and
/// only for the field types it applies to.
///

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,

    #[serde(skip_serializing_if = "Not::not")]
    pub email: bool,

    #[serde(skip_serializing_if = "Not::not")]
    pub url: bool,

    #[serde(skip)]
    pub custom: Option<CustomRule>,
}

impl ValidationRules {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min_length.is_none()
            && self.max_length.is_none()
            && self.min.is_none()
            && self.max.is_none()
            && self.pattern.is_none()
            && !self.email
            && !self.url
            && self.custom.is_none()
    }

    // rules only make sense for the types that consume them
    fn validate_for(&self, ty: FieldType, errs: &mut ErrorTree) {
        if !ty.supports_length() && (self.min_length.is_some() || self.max_length.is_some()) {
            err!(errs, "length rules do not apply to {ty} fields");
        }
        if !ty.supports_format() && (self.email || self.url || self.pattern.is_some()) {
            err!(errs, "format rules do not apply to {ty} fields");
        }
        if !ty.supports_range() && (self.min.is_some() || self.max.is_some()) {
            err!(errs, "range rules do not apply to {ty} fields");
        }

        if let (Some(min), Some(max)) = (self.min_length, self.max_length)
            && min > max
        {
            err!(errs, "min_length {min} is greater than max_length {max}");
        }

        for (name, bound) in [("min", self.min), ("max", self.max)] {
            if bound.is_some_and(f64::is_nan) {
                err!(errs, "{name} must not be NaN");
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            err!(errs, "min {min} is greater than max {max}");
        }

        if self.email && self.url {
            err!(errs, "email and url rules are mutually exclusive");
        }

        if let Some(pattern) = &self.pattern
            && let Err(e) = pattern.regex()
        {
            err!(errs, "pattern '{}' does not compile: {e}", pattern.as_str());
        }
    }
}

///
/// FieldDefinition
///
/// One attribute of an entity. `label` doubles as the subject of every
/// generated error message.
///

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub ident: String,
    pub label: String,

    #[serde(flatten)]
    pub kind: FieldKind,

    #[serde(skip_serializing_if = "Not::not")]
    pub required: bool,

    #[serde(skip_serializing_if = "Not::not")]
    pub read_only: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    #[serde(skip_serializing_if = "ValidationRules::is_empty")]
    pub validation: ValidationRules,
}

impl FieldDefinition {
    pub fn new(ident: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            ident: ident.into(),
            label: label.into(),
            kind,
            required: false,
            read_only: false,
            default_value: None,
            validation: ValidationRules::default(),
        }
    }

    pub fn text(ident: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(ident, label, FieldKind::Text)
    }

    pub fn number(ident: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(ident, label, FieldKind::Number)
    }

    pub fn boolean(ident: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(ident, label, FieldKind::Boolean)
    }

    pub fn date(ident: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(ident, label, FieldKind::Date)
    }

    pub fn enumeration<I, S>(ident: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();

        Self::new(ident, label, FieldKind::Enum { options })
    }

    pub fn reference(
        ident: impl Into<String>,
        label: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(
            ident,
            label,
            FieldKind::Reference {
                reference: target.into(),
            },
        )
    }

    //
    // builder
    //

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Generated forms show the value but never change it; the field is
    /// owned by a dedicated workflow.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn min_length(mut self, len: usize) -> Self {
        self.validation.min_length = Some(len);
        self
    }

    #[must_use]
    pub fn max_length(mut self, len: usize) -> Self {
        self.validation.max_length = Some(len);
        self
    }

    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.validation.min = Some(min);
        self
    }

    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.validation.max = Some(max);
        self
    }

    #[must_use]
    pub fn pattern(mut self, source: impl Into<String>) -> Self {
        self.validation.pattern = Some(Pattern::new(source));
        self
    }

    #[must_use]
    pub fn email(mut self) -> Self {
        self.validation.email = true;
        self
    }

    #[must_use]
    pub fn url(mut self) -> Self {
        self.validation.url = true;
        self
    }

    #[must_use]
    pub fn custom<F, V>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> V + Send + Sync + 'static,
        V: Into<super::Verdict>,
    {
        self.validation.custom = Some(CustomRule::new(f));
        self
    }

    //
    // accessors
    //

    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Allowed values for enum fields.
    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            FieldKind::Enum { options } => Some(options),
            _ => None,
        }
    }

    /// Target entity name for reference fields.
    #[must_use]
    pub fn reference_target(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Reference { reference } => Some(reference),
            _ => None,
        }
    }

    fn validate_default(&self, default: &Value, errs: &mut ErrorTree) {
        let ok = match &self.kind {
            FieldKind::Boolean => default.is_boolean(),
            FieldKind::Number => default.is_number(),
            FieldKind::Enum { options } => default
                .as_str()
                .is_some_and(|s| options.iter().any(|o| o == s)),
            FieldKind::Date | FieldKind::Reference { .. } | FieldKind::Text => {
                default.is_string()
            }
        };

        if !ok {
            err!(
                errs,
                "default value {default} is not valid for a {} field",
                self.field_type()
            );
        }
    }
}

impl ValidateNode for FieldDefinition {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = naming::validate_field_ident(&self.ident) {
            errs.add(e);
        }
        if self.label.trim().is_empty() {
            err!(errs, "label is empty");
        }

        let ty = self.field_type();
        if ty.requires_options() {
            let options = self.options().unwrap_or_default();
            if options.is_empty() {
                err!(errs, "{ty} field has no options");
            }

            let mut seen = BTreeSet::new();
            for option in options {
                if option.is_empty() {
                    err!(errs, "{ty} option is empty");
                } else if !seen.insert(option.as_str()) {
                    err!(errs, "duplicate {ty} option '{option}'");
                }
            }
        }
        if ty.requires_target() && self.reference_target().is_none_or(|t| t.trim().is_empty()) {
            err!(errs, "{ty} field has no target entity");
        }
        if self.read_only && self.required && self.default_value.is_none() {
            err!(errs, "read-only required field needs a default value");
        }

        self.validation.validate_for(self.field_type(), &mut errs);

        if let Some(default) = &self.default_value {
            self.validate_default(default, &mut errs);
        }

        errs.result()
    }
}

///
/// FieldList
///
/// Declared fields in display order.
///

#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct FieldList {
    pub fields: Vec<FieldDefinition>,
}

impl FieldList {
    #[must_use]
    pub const fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub fn contains(&self, ident: &str) -> bool {
        self.get(ident).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDefinition> {
        self.fields.iter()
    }

    pub fn idents(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.ident.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn push(&mut self, field: FieldDefinition) {
        self.fields.push(field);
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a FieldDefinition;
    type IntoIter = std::slice::Iter<'a, FieldDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FromIterator<FieldDefinition> for FieldList {
    fn from_iter<I: IntoIterator<Item = FieldDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ValidateNode for FieldList {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        let mut seen = BTreeSet::new();

        for field in &self.fields {
            if !seen.insert(field.ident.as_str()) {
                err!(errs, "duplicate field '{}'", field.ident);
            }
            errs.collect_at(field.ident.clone(), field.validate());
        }

        errs.result()
    }
}

///
/// TESTS
///
