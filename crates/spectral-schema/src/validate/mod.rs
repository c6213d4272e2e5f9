//! Schema validation: per-node checks plus registry-wide passes.

pub mod naming;
pub mod reference;

use crate::{error::ErrorTree, node::EntityDefinition};

///
/// ValidateNode
/// Local structural invariants of one schema node.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

/// Run node validation for every entity, then the registry-wide passes.
pub(crate) fn validate_schema<'a>(
    entities: impl IntoIterator<Item = &'a EntityDefinition> + Clone,
) -> Result<(), ErrorTree> {
    let mut errors = ErrorTree::new();

    // Phase 1: validate each node (structural + local invariants).
    for entity in entities.clone() {
        errors.collect_at(entity.name.clone(), entity.validate());
    }

    // Phase 2: enforce schema-wide invariants.
    reference::validate_reference_targets(entities, &mut errors);

    errors.result()
}
