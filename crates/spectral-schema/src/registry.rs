use crate::{
    SchemaError,
    node::EntityDefinition,
    validate::{ValidateNode, validate_schema},
};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

///
/// EntityRegistry
///
/// Name → definition lookup, constructed explicitly and handed to whatever
/// needs it. Definitions are validated on the way in and never mutated
/// afterwards.
///

#[derive(Clone, Debug, Default)]
pub struct EntityRegistry {
    entities: BTreeMap<String, EntityDefinition>,
}

impl EntityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every definition, then run the registry-wide checks.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = EntityDefinition>,
    ) -> Result<Self, SchemaError> {
        let mut registry = Self::new();
        for def in definitions {
            registry.register(def)?;
        }
        registry.validate()?;

        Ok(registry)
    }

    /// Register one definition after validating it in isolation.
    ///
    /// Cross-entity checks (reference targets) need the full set, so they run
    /// in `validate`.
    pub fn register(&mut self, def: EntityDefinition) -> Result<(), SchemaError> {
        if self.entities.contains_key(&def.name) {
            return Err(SchemaError::DuplicateEntity(def.name));
        }

        if let Err(tree) = def.validate() {
            let mut root = crate::error::ErrorTree::new();
            root.merge_at(def.name.clone(), tree);

            return Err(SchemaError::Validation(root));
        }

        debug!(entity = %def.name, fields = def.fields.len(), "registered entity");
        self.entities.insert(def.name.clone(), def);

        Ok(())
    }

    /// Run full schema validation across all registered entities.
    pub fn validate(&self) -> Result<(), SchemaError> {
        validate_schema(self.entities.values()).map_err(SchemaError::Validation)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EntityDefinition> {
        self.entities.get(name)
    }

    /// Look up a definition, treating absence as an error.
    pub fn require(&self, name: &str) -> Result<&EntityDefinition, SchemaError> {
        self.get(name)
            .ok_or_else(|| SchemaError::EntityNotFound(name.to_string()))
    }

    /// Iterate registered definitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityDefinition)> {
        self.entities.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Export every definition as JSON, keyed by entity name.
    pub fn to_json(&self) -> Result<Value, SchemaError> {
        Ok(serde_json::to_value(&self.entities)?)
    }
}

///
/// TESTS
///
