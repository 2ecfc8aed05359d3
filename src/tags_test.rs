//! Tests for tag derivation, the cascade transforms, and order
//! reconciliation.

use super::*;
use crate::models::Site;

// ============================================================================
// Helpers
// ============================================================================

fn site(url: &str, tags: &[&str]) -> Site {
    Site::new("Title", "Description", url, tags)
}

fn collection() -> Vec<Site> {
    vec![
        site("https://a.com", &["rust", "tools"]),
        site("https://b.com", &["rust"]),
        site("https://c.com", &[]),
        site("https://d.com", &["tools", "news"]),
    ]
}

// ============================================================================
// Derivation
// ============================================================================

#[test]
fn all_tags_is_sorted_and_deduplicated() {
    let tags = all_tags(&collection());
    assert_eq!(tags, vec!["news", "rust", "tools"]);
}

#[test]
fn all_tags_of_empty_collection_is_empty() {
    assert!(all_tags(&[]).is_empty());
}

#[test]
fn all_tags_equals_union_of_record_tags() {
    let sites = collection();
    let tags = all_tags(&sites);
    for s in &sites {
        for t in &s.tags {
            assert!(tags.contains(t), "missing tag {t}");
        }
    }
    for t in &tags {
        assert!(sites.iter().any(|s| s.tags.contains(t)));
    }
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn filter_all_returns_everything() {
    let sites = collection();
    assert_eq!(filter_by_tag(&sites, TAG_ALL).len(), sites.len());
}

#[test]
fn filter_uncategorized_returns_untagged_records() {
    let sites = collection();
    let untagged = filter_by_tag(&sites, TAG_UNCATEGORIZED);
    assert_eq!(untagged.len(), 1);
    assert_eq!(untagged[0].url, "https://c.com");
}

#[test]
fn filter_concrete_tag_returns_exactly_the_tagged_records() {
    let sites = collection();
    let rust: Vec<&str> = filter_by_tag(&sites, "rust")
        .iter()
        .map(|s| s.url.as_str())
        .collect();
    assert_eq!(rust, vec!["https://a.com", "https://b.com"]);
}

#[test]
fn filter_unknown_tag_is_empty() {
    assert!(filter_by_tag(&collection(), "nope").is_empty());
}

#[test]
fn site_counts_match_filters() {
    let sites = collection();
    assert_eq!(site_count(&sites, TAG_ALL), 4);
    assert_eq!(site_count(&sites, TAG_UNCATEGORIZED), 1);
    assert_eq!(site_count(&sites, "tools"), 2);
}

// ============================================================================
// Rename Cascade
// ============================================================================

#[test]
fn rename_rewrites_every_record() {
    let sites = collection();
    let before = site_count(&sites, "rust");

    let renamed = rename_tag(&sites, "rust", "systems").unwrap();

    assert_eq!(site_count(&renamed, "rust"), 0);
    assert_eq!(site_count(&renamed, "systems"), before);
    assert_eq!(renamed.len(), sites.len());
}

#[test]
fn rename_preserves_per_record_tag_order() {
    let sites = vec![site("https://a.com", &["rust", "tools"])];
    let renamed = rename_tag(&sites, "rust", "systems").unwrap();
    assert_eq!(renamed[0].tags, vec!["systems", "tools"]);
}

#[test]
fn rename_onto_existing_tag_is_a_collision() {
    let sites = collection();
    let result = rename_tag(&sites, "rust", "tools");
    assert_eq!(result, Err(TagError::NameCollision("tools".to_string())));
}

// ============================================================================
// Delete Cascade
// ============================================================================

#[test]
fn delete_untags_without_deleting_records() {
    let sites = collection();
    let after = delete_tag(&sites, "rust");

    assert_eq!(after.len(), sites.len());
    assert_eq!(site_count(&after, "rust"), 0);
    assert_eq!(after[1].tags, Vec::<String>::new());
}

#[test]
fn delete_moves_only_tagged_records_to_uncategorized() {
    let sites = vec![site("https://a.com", &["solo"]), site("https://b.com", &[])];
    let after = delete_tag(&sites, "solo");
    assert_eq!(site_count(&after, TAG_UNCATEGORIZED), 2);
}

// ============================================================================
// End-to-End Walkthrough
// ============================================================================

#[test]
fn two_record_walkthrough() {
    let sites = vec![site("https://a.com", &["x"]), site("https://b.com", &[])];

    let uncategorized = filter_by_tag(&sites, TAG_UNCATEGORIZED);
    assert_eq!(uncategorized.len(), 1);
    assert_eq!(uncategorized[0].url, "https://b.com");

    let sites = rename_tag(&sites, "x", "y").unwrap();
    assert_eq!(sites[0].tags, vec!["y"]);

    let sites = delete_tag(&sites, "y");
    assert!(sites[0].tags.is_empty());
    assert_eq!(filter_by_tag(&sites, TAG_UNCATEGORIZED).len(), 2);
}

// ============================================================================
// Reorder & Sidebar Order
// ============================================================================

#[test]
fn reorder_moves_forward_and_backward() {
    let list = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(reorder(&list, 0, 2), vec!["b", "c", "a"]);
    assert_eq!(reorder(&list, 2, 0), vec!["c", "a", "b"]);
}

#[test]
fn reorder_out_of_range_is_unchanged() {
    let list = vec!["a".to_string(), "b".to_string()];
    assert_eq!(reorder(&list, 5, 0), list);
    assert_eq!(reorder(&list, 0, 5), list);
}

#[test]
fn pseudo_tags_are_recognized() {
    assert!(is_pseudo_tag(TAG_ALL));
    assert!(is_pseudo_tag(TAG_UNCATEGORIZED));
    assert!(!is_pseudo_tag("rust"));
}

#[test]
fn sidebar_order_without_persisted_list_is_derived_order() {
    let derived = vec!["a".to_string(), "b".to_string()];
    assert_eq!(sidebar_order(&derived, None), derived);
}

#[test]
fn sidebar_order_drops_stale_and_appends_new_sorted() {
    let derived = vec!["alpha".to_string(), "beta".to_string(), "zeta".to_string()];
    let persisted = vec!["zeta".to_string(), "gone".to_string(), "alpha".to_string()];

    // "gone" no longer exists; "beta" appeared after the order was saved.
    assert_eq!(
        sidebar_order(&derived, Some(&persisted)),
        vec!["zeta", "alpha", "beta"]
    );
}

#[test]
fn order_tracks_rename_and_delete() {
    let order = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(rename_in_order(&order, "b", "z"), vec!["a", "z", "c"]);
    assert_eq!(remove_from_order(&order, "b"), vec!["a", "c"]);
}
