//! Multi-select state for bulk operations

use std::collections::HashSet;

use shared::models::EntityId;

/// Set of checked entity ids, keyed off the unfiltered collection
///
/// Ids that no longer exist in the collection are stale: they are pruned
/// after every reload and never resurrected.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<EntityId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id when `present` is true, remove it otherwise. Idempotent.
    pub fn toggle(&mut self, id: &str, present: bool) {
        if present {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// Replace the selection with exactly `ids`.
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = EntityId>,
    {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True iff every one of `total` rows is selected and there is at
    /// least one row. An empty collection is never "all selected".
    pub fn is_all_selected(&self, total: usize) -> bool {
        total > 0 && self.ids.len() == total
    }

    /// The selected ids, in no particular order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.ids.iter().cloned().collect()
    }

    /// Drop ids that are no longer present in the collection.
    pub fn prune<'a, I>(&mut self, live: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let live: HashSet<&str> = live.into_iter().collect();
        self.ids.retain(|id| live.contains(id.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trip_restores_prior_state() {
        let mut selection = SelectionSet::new();
        selection.toggle("a", true);

        let before: Vec<_> = selection.ids();
        selection.toggle("b", true);
        selection.toggle("b", false);
        let after: Vec<_> = selection.ids();

        assert_eq!(before, after);
    }

    #[test]
    fn toggle_is_idempotent() {
        let mut selection = SelectionSet::new();
        selection.toggle("a", true);
        selection.toggle("a", true);
        assert_eq!(selection.len(), 1);

        selection.toggle("a", false);
        selection.toggle("a", false);
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_then_deselect_one() {
        // Three officers {1, 2, 3}: select all, then uncheck one
        let mut selection = SelectionSet::new();
        selection.select_all(["1".to_string(), "2".to_string(), "3".to_string()]);
        assert!(selection.is_all_selected(3));

        selection.toggle("2", false);
        assert!(!selection.is_all_selected(3));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn empty_collection_is_never_all_selected() {
        let selection = SelectionSet::new();
        assert!(!selection.is_all_selected(0));
    }

    #[test]
    fn prune_drops_stale_ids_only() {
        let mut selection = SelectionSet::new();
        selection.select_all(["1".to_string(), "2".to_string(), "3".to_string()]);

        selection.prune(["1", "3"]);
        assert!(selection.contains("1"));
        assert!(!selection.contains("2"));
        assert!(selection.contains("3"));
    }
}
