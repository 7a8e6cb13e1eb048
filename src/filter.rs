//! Keyword filtering over item collections.
//!
//! Filtering is a pure synchronous function of the full collection and the
//! current keyword. It always starts from the caller-supplied items, never
//! from a previously filtered subset, so narrowing and widening the keyword
//! both behave predictably.

use crate::item::SelectItem;

/// Case-sensitive substring containment of `keyword` within the label.
pub fn matches(item: &SelectItem, keyword: &str) -> bool {
    item.label.contains(keyword)
}

/// Items whose label contains `keyword`. An empty keyword matches
/// everything, which is equivalent to the filter being disabled.
pub fn filter_items(items: &[SelectItem], keyword: &str) -> Vec<SelectItem> {
    if keyword.is_empty() {
        return items.to_vec();
    }
    items.iter().filter(|item| matches(item, keyword)).cloned().collect()
}
