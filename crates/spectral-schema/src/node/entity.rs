use crate::{err, error::ErrorTree, validate::ValidateNode, validate::naming};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use super::{
    DisplayMeta, EntityRule, Feature, FieldDefinition, FieldList, Permissions, SortDirection,
    Verdict,
};

///
/// EntityDefinition
///
/// Static description of one entity: its fields, who may touch it, which
/// generated views it offers and how those views present it. Authored once
/// at startup and never mutated afterwards.
///

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDefinition {
    pub name: String,
    pub fields: FieldList,
    pub permissions: Permissions,
    pub features: BTreeSet<Feature>,
    pub display: DisplayMeta,

    /// Whole-record rule, run only once every field passes.
    #[serde(skip)]
    pub rule: Option<EntityRule>,
}

impl EntityDefinition {
    /// Start a definition with derived display labels and the standard
    /// CRUD feature set.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let display = DisplayMeta::for_entity(&name);

        Self {
            name,
            fields: FieldList::default(),
            permissions: Permissions::default(),
            features: Feature::STANDARD.into_iter().collect(),
            display,
            rule: None,
        }
    }

    #[must_use]
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    #[must_use]
    pub fn features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        self.features = features.into_iter().collect();
        self
    }

    #[must_use]
    pub fn display(mut self, display: DisplayMeta) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.display.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.display = self.display.columns(columns);
        self
    }

    #[must_use]
    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.display = self.display.sort_by(field, direction);
        self
    }

    #[must_use]
    pub fn validate_with<F, V>(mut self, f: F) -> Self
    where
        F: Fn(&Map<String, Value>) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        self.rule = Some(EntityRule::new(f));
        self
    }

    #[must_use]
    pub fn supports(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    #[must_use]
    pub fn get_field(&self, ident: &str) -> Option<&FieldDefinition> {
        self.fields.get(ident)
    }

    /// Columns a list view shows: the declared list columns, or every field.
    #[must_use]
    pub fn list_columns(&self) -> Vec<&FieldDefinition> {
        if self.display.list_columns.is_empty() {
            self.fields.iter().collect()
        } else {
            self.display
                .list_columns
                .iter()
                .filter_map(|c| self.fields.get(c))
                .collect()
        }
    }

    fn validate_display(&self, errs: &mut ErrorTree) {
        let display = &self.display;

        if display.singular.trim().is_empty() || display.plural.trim().is_empty() {
            err!(errs, "singular and plural labels must be set");
        }
        for column in &display.list_columns {
            if !self.fields.contains(column) {
                err!(errs, "list column '{column}' is not a declared field");
            }
        }
        if let Some(sort) = &display.default_sort
            && !self.fields.contains(&sort.field)
        {
            err!(errs, "default sort field '{}' is not a declared field", sort.field);
        }
    }

    fn validate_features(&self, errs: &mut ErrorTree) {
        let reachable = self.supports(Feature::List) || self.supports(Feature::Detail);

        for feature in [Feature::Edit, Feature::Delete] {
            if self.supports(feature) && !reachable {
                err!(errs, "feature '{feature}' requires 'List' or 'Detail'");
            }
        }
    }
}

impl ValidateNode for EntityDefinition {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = naming::validate_entity_name(&self.name) {
            errs.add_at("name", e);
        }

        if self.fields.is_empty() {
            err!(errs, "entity has no fields");
        }
        errs.collect_at("fields", self.fields.validate());
        errs.collect_at("permissions", self.permissions.validate());

        let mut display = ErrorTree::new();
        self.validate_display(&mut display);
        errs.merge_at("display", display);

        let mut features = ErrorTree::new();
        self.validate_features(&mut features);
        errs.merge_at("features", features);

        errs.result()
    }
}

///
/// TESTS
///
