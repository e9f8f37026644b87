//! Product tag reconciliation
//!
//! Given the association rows a product currently has and the tag ids a
//! caller wants it to have, work out which rows to insert and which to
//! delete. Nothing here touches storage; the caller applies the result.

use crate::types::{NewProductTag, ProductTag};
use serde::Serialize;
use std::collections::HashSet;

/// Insert/remove plan for one product's tag associations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagReconciliation {
    /// Rows to bulk-insert, in the order the desired ids were given
    pub to_insert: Vec<NewProductTag>,
    /// Association ids to bulk-delete, in current-row order
    pub to_remove: Vec<i64>,
    /// Tag ids the product carries once both sets are applied
    tag_ids: Vec<i64>,
}

impl TagReconciliation {
    /// Nothing to insert and nothing to delete
    pub fn is_noop(&self) -> bool {
        self.to_insert.is_empty() && self.to_remove.is_empty()
    }

    /// Resulting tag ids: surviving current ids followed by inserted ids
    pub fn tag_ids(&self) -> &[i64] {
        &self.tag_ids
    }
}

/// Compute the association changes that turn `current` into `desired`.
///
/// `desired == None` means the caller did not ask for a tag change; the
/// plan is empty and [`TagReconciliation::tag_ids`] echoes the current ids.
/// `Some(&[])` clears every association.
///
/// Repeated ids in `desired` that are not already linked produce repeated
/// inserts.
pub fn reconcile_tags(
    product_id: i64,
    current: &[ProductTag],
    desired: Option<&[i64]>,
) -> TagReconciliation {
    let current_ids: Vec<i64> = current.iter().map(|row| row.tag_id).collect();

    let Some(desired) = desired else {
        return TagReconciliation {
            tag_ids: current_ids,
            ..Default::default()
        };
    };

    let linked: HashSet<i64> = current_ids.iter().copied().collect();
    let wanted: HashSet<i64> = desired.iter().copied().collect();

    let to_insert: Vec<NewProductTag> = desired
        .iter()
        .filter(|tag_id| !linked.contains(*tag_id))
        .map(|&tag_id| NewProductTag { product_id, tag_id })
        .collect();

    let (kept, removed): (Vec<&ProductTag>, Vec<&ProductTag>) =
        current.iter().partition(|row| wanted.contains(&row.tag_id));

    let tag_ids = kept
        .iter()
        .map(|row| row.tag_id)
        .chain(to_insert.iter().map(|row| row.tag_id))
        .collect();

    TagReconciliation {
        to_insert,
        to_remove: removed.iter().map(|row| row.id).collect(),
        tag_ids,
    }
}
