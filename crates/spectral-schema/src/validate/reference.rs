use crate::{err, error::ErrorTree, node::EntityDefinition};
use std::collections::BTreeSet;

// Every reference field must point at an entity the registry knows about.
// Record-level referential integrity is not checked anywhere in the schema.
pub fn validate_reference_targets<'a>(
    entities: impl IntoIterator<Item = &'a EntityDefinition> + Clone,
    errs: &mut ErrorTree,
) {
    let known: BTreeSet<&str> = entities.clone().into_iter().map(|e| e.name.as_str()).collect();

    for entity in entities {
        for field in &entity.fields {
            let Some(target) = field.reference_target() else {
                continue;
            };
            if target.trim().is_empty() {
                // reported by the field node itself
                continue;
            }
            if !known.contains(target) {
                let mut field_errs = ErrorTree::new();
                err!(
                    field_errs,
                    "reference target '{target}' is not a registered entity"
                );

                let mut fields = ErrorTree::new();
                fields.merge_at(field.ident.clone(), field_errs);
                let mut entity_errs = ErrorTree::new();
                entity_errs.merge_at("fields", fields);
                errs.merge_at(entity.name.clone(), entity_errs);
            }
        }
    }
}
