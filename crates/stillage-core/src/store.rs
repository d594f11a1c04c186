// ── Per-resource list store ──
//
// The transient cache behind each resource screen: the fetch state
// machine plus the local CRUD merge rules. Successful writes mutate the
// cached list in place (trusting the server's returned representation)
// instead of refetching; failed writes leave it untouched.

use crate::model::Keyed;

/// Fetch lifecycle for a resource list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Not fetched yet.
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// In-memory list of one resource plus its load phase.
///
/// A generation counter guards against late responses: `reset` and
/// every `begin_load` bump it, and a resolve/fail carrying a stale
/// generation is dropped. The underlying request is never aborted --
/// only its result is discarded.
#[derive(Debug)]
pub struct ResourceList<T> {
    items: Vec<T>,
    phase: LoadPhase,
    generation: u64,
}

impl<T> Default for ResourceList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
            generation: 0,
        }
    }
}

impl<T: Keyed> ResourceList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ── Fetch state machine ──────────────────────────────────────────

    /// Enter `Loading` and return the ticket the eventual result must
    /// present. The previous list stays visible until the new fetch
    /// resolves (no stale-while-revalidate beyond that).
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.generation
    }

    /// Apply a successful fetch: replaces the entire list. Returns
    /// `false` (and changes nothing) if the ticket is stale.
    pub fn resolve(&mut self, ticket: u64, items: Vec<T>) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.items = items;
        self.phase = LoadPhase::Ready;
        true
    }

    /// Apply a failed fetch. Returns `false` if the ticket is stale.
    /// The previous items are kept; only the phase changes.
    pub fn fail(&mut self, ticket: u64, message: impl Into<String>) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.phase = LoadPhase::Error(message.into());
        true
    }

    /// Screen-unmount analogue: drop the cached list and invalidate any
    /// in-flight fetch.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.items.clear();
        self.phase = LoadPhase::Idle;
    }

    // ── Local CRUD merges ────────────────────────────────────────────

    /// Append the server's returned representation after a create.
    pub fn apply_created(&mut self, item: T) {
        self.items.push(item);
    }

    /// Replace the matching element in place after an update. A miss
    /// (e.g. the list was never fetched) leaves the list untouched.
    pub fn apply_updated(&mut self, item: T) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.key() == item.key()) {
            *slot = item;
        }
    }

    /// Remove by id after a delete.
    pub fn apply_removed(&mut self, id: i64) {
        self.items.retain(|item| item.key() != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        label: String,
    }

    impl Item {
        fn new(id: i64, label: &str) -> Self {
            Self {
                id,
                label: label.into(),
            }
        }
    }

    impl Keyed for Item {
        fn key(&self) -> i64 {
            self.id
        }
    }

    #[test]
    fn fetch_cycle_idle_loading_ready() {
        let mut list: ResourceList<Item> = ResourceList::new();
        assert_eq!(*list.phase(), LoadPhase::Idle);

        let ticket = list.begin_load();
        assert_eq!(*list.phase(), LoadPhase::Loading);

        assert!(list.resolve(ticket, vec![Item::new(1, "a")]));
        assert_eq!(*list.phase(), LoadPhase::Ready);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn failed_fetch_keeps_previous_items() {
        let mut list: ResourceList<Item> = ResourceList::new();
        let ticket = list.begin_load();
        list.resolve(ticket, vec![Item::new(1, "a")]);

        let ticket = list.begin_load();
        assert!(list.fail(ticket, "HTTP 500: Internal Server Error"));
        assert_eq!(
            *list.phase(),
            LoadPhase::Error("HTTP 500: Internal Server Error".into())
        );
        assert_eq!(list.len(), 1, "error transition does not clear the list");
    }

    #[test]
    fn stale_resolve_after_reset_is_dropped() {
        let mut list: ResourceList<Item> = ResourceList::new();
        let ticket = list.begin_load();

        // Unmount before the response lands.
        list.reset();
        assert!(!list.resolve(ticket, vec![Item::new(1, "late")]));
        assert!(list.is_empty());
        assert_eq!(*list.phase(), LoadPhase::Idle);
    }

    #[test]
    fn newer_load_wins_over_older_inflight_response() {
        let mut list: ResourceList<Item> = ResourceList::new();
        let first = list.begin_load();
        let second = list.begin_load();

        assert!(list.resolve(second, vec![Item::new(2, "new")]));
        assert!(!list.resolve(first, vec![Item::new(1, "old")]));
        assert_eq!(list.items(), &[Item::new(2, "new")]);
    }

    #[test]
    fn refetch_replaces_the_entire_list() {
        let mut list: ResourceList<Item> = ResourceList::new();
        let t = list.begin_load();
        list.resolve(t, vec![Item::new(1, "a"), Item::new(2, "b")]);

        let t = list.begin_load();
        list.resolve(t, vec![Item::new(3, "c")]);
        assert_eq!(list.items(), &[Item::new(3, "c")]);
    }

    #[test]
    fn created_appends_updated_replaces_removed_deletes() {
        let mut list: ResourceList<Item> = ResourceList::new();
        let t = list.begin_load();
        list.resolve(t, vec![Item::new(1, "a"), Item::new(2, "b")]);

        list.apply_created(Item::new(3, "c"));
        assert_eq!(list.len(), 3);

        list.apply_updated(Item::new(2, "b2"));
        assert_eq!(list.get(2).map(|i| i.label.as_str()), Some("b2"));
        assert_eq!(
            list.items().iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 2, 3],
            "update replaces in place, order unchanged"
        );

        list.apply_updated(Item::new(99, "ghost"));
        assert_eq!(list.len(), 3, "update miss leaves the list untouched");

        list.apply_removed(1);
        assert_eq!(
            list.items().iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }
}
