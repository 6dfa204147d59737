//! Sibling merge for the frequency-combined view
//!
//! Within one sibling set, every region sharing a name is folded into a
//! single aggregate node; the aggregate's children are the concatenation of
//! all merged subtrees and are merged again by the same rule one level down.
//! Merging never crosses sibling sets, so a name is only ever folded with
//! regions recorded under the same parent.
//!
//! # Algorithm
//!
//! ```text
//! 1. Fold the sibling list into accumulators keyed by name:
//!    - first occurrence: clone becomes the accumulator
//!    - later occurrences: sum seconds and call_count, append children
//! 2. Recurse into each accumulator's (concatenated) children
//! 3. Sort the resulting sibling list by descending seconds (stable)
//! ```
//!
//! The input forest is only borrowed; combination always produces a new tree
//! so the raw recording stays available for the chronological view.
//! Combining an already-combined forest is a no-op.

use std::collections::HashMap;

use crate::region::RegionNode;

/// Combine one subtree: the node itself is kept, its descendants are merged
/// level by level
pub fn combine(region: &RegionNode) -> RegionNode {
    let mut combined = region.without_children();
    combined.children = combine_forest(&region.children);
    combined
}

/// Combine a sibling list (typically the recorded top-level forest)
///
/// Returns the merged siblings in descending duration order. Descriptive
/// fields of a merged node are taken from the first occurrence; duration and
/// call count are the sums over everything it absorbed.
pub fn combine_forest(siblings: &[RegionNode]) -> Vec<RegionNode> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut merged: Vec<RegionNode> = Vec::new();

    for region in siblings {
        match slots.get(region.name.as_str()) {
            Some(&slot) => {
                let accumulator = &mut merged[slot];
                accumulator.seconds += region.seconds;
                accumulator.call_count += region.call_count;
                accumulator.children.extend(region.children.iter().cloned());
            }
            None => {
                slots.insert(region.name.as_str(), merged.len());
                merged.push(region.clone());
            }
        }
    }

    for region in &mut merged {
        region.children = combine_forest(&region.children);
    }

    merged.sort_by(|a, b| {
        b.seconds
            .partial_cmp(&a.seconds)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    merged
}
