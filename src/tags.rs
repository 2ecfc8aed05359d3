//! Tag derivation and the pure collection transforms.
//!
//! Tags are not stored as first-class entities: a tag exists only inside the
//! `tags` list of whichever site records reference it, and the tag set shown
//! in the sidebar is recomputed from the collection on every render. The
//! cascade operations (rename, delete) and the drag-reorder are expressed
//! here as pure functions over the collection, independent of storage and of
//! any page script.

use crate::models::Site;

/// Virtual filter selecting the whole collection. Never persisted as a tag.
pub const TAG_ALL: &str = "all";

/// Virtual filter selecting records with an empty tag list. Never persisted.
pub const TAG_UNCATEGORIZED: &str = "uncategorized";

pub fn is_pseudo_tag(tag: &str) -> bool {
    tag == TAG_ALL || tag == TAG_UNCATEGORIZED
}

// ============================================================================
// Derivation
// ============================================================================

/// The sorted, duplicate-free union of every record's tag list.
pub fn all_tags(sites: &[Site]) -> Vec<String> {
    let mut tags: Vec<String> = sites.iter().flat_map(|s| s.tags.iter().cloned()).collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Single-tag filter. `all` selects everything, `uncategorized` selects
/// records with an empty tag list, anything else selects records whose tag
/// list contains the tag exactly.
pub fn filter_by_tag<'a>(sites: &'a [Site], tag: &str) -> Vec<&'a Site> {
    match tag {
        TAG_ALL => sites.iter().collect(),
        TAG_UNCATEGORIZED => sites.iter().filter(|s| s.tags.is_empty()).collect(),
        _ => sites
            .iter()
            .filter(|s| s.tags.iter().any(|t| t == tag))
            .collect(),
    }
}

/// Record count under the same three filter rules; sidebar badges.
pub fn site_count(sites: &[Site], tag: &str) -> usize {
    filter_by_tag(sites, tag).len()
}

// ============================================================================
// Cascades
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TagError {
    /// Renaming onto a tag that already exists in the derived set.
    NameCollision(String),
}

impl std::fmt::Display for TagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagError::NameCollision(name) => write!(f, "Tag already exists: {name}"),
        }
    }
}

impl std::error::Error for TagError {}

/// Rewrite `old` to `new` inside every record's tag list, preserving each
/// record's tag order. Rejected when `new` already exists in the derived
/// set; the caller's collection stays as it was.
pub fn rename_tag(sites: &[Site], old: &str, new: &str) -> Result<Vec<Site>, TagError> {
    if all_tags(sites).iter().any(|t| t == new) {
        return Err(TagError::NameCollision(new.to_string()));
    }

    Ok(sites
        .iter()
        .map(|site| {
            let mut site = site.clone();
            for tag in &mut site.tags {
                if tag == old {
                    *tag = new.to_string();
                }
            }
            site
        })
        .collect())
}

/// Remove `tag` from every record's tag list. Records are untagged, never
/// deleted; a record left with no tags shows up under `uncategorized`.
pub fn delete_tag(sites: &[Site], tag: &str) -> Vec<Site> {
    sites
        .iter()
        .map(|site| {
            let mut site = site.clone();
            site.tags.retain(|t| t != tag);
            site
        })
        .collect()
}

// ============================================================================
// Ordering
// ============================================================================

/// Move the element at `from` to position `to`. Out-of-range indices return
/// the input unchanged; pseudo-tags never appear in the orderable list, so
/// they cannot be reordered here.
pub fn reorder(list: &[String], from: usize, to: usize) -> Vec<String> {
    if from >= list.len() || to >= list.len() {
        return list.to_vec();
    }
    let mut out = list.to_vec();
    let moved = out.remove(from);
    out.insert(to, moved);
    out
}

/// Reconcile the persisted manual order against the derived tag set. The
/// two can diverge in both directions: stale persisted entries are dropped,
/// and tags missing from the persisted list are appended in sorted order.
/// With no persisted order the derived (sorted) set is used as-is.
pub fn sidebar_order(derived: &[String], persisted: Option<&[String]>) -> Vec<String> {
    let Some(persisted) = persisted else {
        return derived.to_vec();
    };

    let mut ordered: Vec<String> = persisted
        .iter()
        .filter(|t| derived.contains(t))
        .cloned()
        .collect();
    for tag in derived {
        if !ordered.contains(tag) {
            ordered.push(tag.clone());
        }
    }
    ordered
}

/// Rewrite the persisted order after a rename so it keeps tracking the tag.
pub fn rename_in_order(order: &[String], old: &str, new: &str) -> Vec<String> {
    order
        .iter()
        .map(|t| if t == old { new.to_string() } else { t.clone() })
        .collect()
}

/// Drop a deleted tag from the persisted order.
pub fn remove_from_order(order: &[String], tag: &str) -> Vec<String> {
    order.iter().filter(|t| *t != tag).cloned().collect()
}

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;
