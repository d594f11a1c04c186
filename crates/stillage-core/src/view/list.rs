// ── Generic list view-state ──
//
// The pattern every resource screen repeats: an unfiltered row list
// plus query / sort-toggle / page state, recomputed into a visible
// slice on demand. Filtering always runs against the full list; the
// page is clamped whenever the filtered count changes.

use super::pages::{PageItem, page_strip};

/// Row types expose the text the search box matches against and the
/// single sortable column.
pub trait ListEntry {
    /// Haystacks for the case-insensitive substring search. Which
    /// fields participate is a per-resource decision.
    fn search_text(&self) -> Vec<String>;

    /// Value of the sortable column.
    fn sort_key(&self) -> String;
}

/// Tri-state sort toggle over the single sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Original (server) order.
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortOrder {
    /// none -> asc -> desc -> none.
    pub fn toggled(self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }
}

/// The computed visible state for one render.
#[derive(Debug)]
pub struct PageView<'a, T> {
    /// Rows on the current page, in display order.
    pub rows: Vec<&'a T>,
    /// Clamped current page (1-based).
    pub page: usize,
    /// Total pages for the current filter; at least 1.
    pub total_pages: usize,
    /// Filtered row count across all pages.
    pub total_rows: usize,
    /// Page-number strip for rendering.
    pub strip: Vec<PageItem>,
}

/// List view-state for a single resource screen.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    items: Vec<T>,
    query: String,
    sort: SortOrder,
    page: usize,
    page_size: usize,
}

impl<T: ListEntry> ListView<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            query: String::new(),
            sort: SortOrder::None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replace the full row list (after a refetch or a local CRUD
    /// merge). Query, sort, and page survive; the page re-clamps
    /// against the new count on the next read.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Update the search query. Any change resets to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.page = 1;
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Advance the sort toggle one step and return the new order.
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort = self.sort.toggled();
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Request a page; clamping happens at read time against the
    /// filtered count.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.page = self.current_page().saturating_add(1).min(self.total_pages());
    }

    pub fn prev_page(&mut self) {
        self.page = self.current_page().saturating_sub(1).max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The clamped current page.
    pub fn current_page(&self) -> usize {
        self.page.clamp(1, self.total_pages())
    }

    fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size).max(1)
    }

    /// Filtered rows in original order.
    fn filtered(&self) -> Vec<&T> {
        let needle = self.query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                if needle.is_empty() {
                    return true;
                }
                item.search_text()
                    .iter()
                    .any(|hay| hay.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Compute the visible page: filter, stable-sort, clamp, slice.
    pub fn visible(&self) -> PageView<'_, T> {
        let mut rows = self.filtered();

        match self.sort {
            SortOrder::None => {}
            // `sort_by` is stable, so equal keys keep original order in
            // both directions.
            SortOrder::Ascending => {
                rows.sort_by(|a, b| a.sort_key().to_lowercase().cmp(&b.sort_key().to_lowercase()));
            }
            SortOrder::Descending => {
                rows.sort_by(|a, b| b.sort_key().to_lowercase().cmp(&a.sort_key().to_lowercase()));
            }
        }

        let total_rows = rows.len();
        let total_pages = total_rows.div_ceil(self.page_size).max(1);
        let page = self.page.clamp(1, total_pages);

        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(total_rows);
        let rows = if start < total_rows {
            rows.drain(start..end).collect()
        } else {
            Vec::new()
        };

        PageView {
            rows,
            page,
            total_pages,
            total_rows,
            strip: page_strip(page, total_pages),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        kind: String,
        name: String,
    }

    impl Row {
        fn new(id: i64, kind: &str, name: &str) -> Self {
            Self {
                id,
                kind: kind.into(),
                name: name.into(),
            }
        }
    }

    impl ListEntry for Row {
        fn search_text(&self) -> Vec<String> {
            vec![self.name.clone(), self.kind.clone()]
        }

        fn sort_key(&self) -> String {
            self.kind.clone()
        }
    }

    fn ids(view: &ListView<Row>) -> Vec<i64> {
        view.visible().rows.iter().map(|r| r.id).collect()
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| Row::new(i64::try_from(i).expect("small"), "x", &format!("row {i}")))
            .collect()
    }

    // ── Sort ────────────────────────────────────────────────────────

    #[test]
    fn sort_toggle_is_a_three_cycle() {
        let mut view = ListView::new(vec![Row::new(1, "B", "b"), Row::new(2, "A", "a")], 6);

        assert_eq!(ids(&view), vec![1, 2]);

        view.toggle_sort();
        assert_eq!(ids(&view), vec![2, 1], "first toggle sorts ascending");

        view.toggle_sort();
        assert_eq!(ids(&view), vec![1, 2], "second toggle sorts descending");

        view.toggle_sort();
        assert_eq!(ids(&view), vec![1, 2], "third toggle restores original order");
        assert_eq!(view.sort(), SortOrder::None);

        view.toggle_sort();
        assert_eq!(view.sort(), SortOrder::Ascending);
    }

    #[test]
    fn sort_is_case_insensitive() {
        let mut view = ListView::new(
            vec![
                Row::new(1, "beta", "b"),
                Row::new(2, "Alpha", "a"),
                Row::new(3, "alpha2", "c"),
            ],
            6,
        );
        view.toggle_sort();
        assert_eq!(ids(&view), vec![2, 3, 1]);
    }

    #[test]
    fn equal_sort_keys_keep_original_order() {
        let mut view = ListView::new(
            vec![
                Row::new(1, "same", "c"),
                Row::new(2, "same", "a"),
                Row::new(3, "aaa", "b"),
                Row::new(4, "same", "d"),
            ],
            6,
        );

        view.toggle_sort();
        assert_eq!(ids(&view), vec![3, 1, 2, 4], "ascending keeps 1,2,4 order");

        view.toggle_sort();
        assert_eq!(ids(&view), vec![1, 2, 4, 3], "descending keeps 1,2,4 order");
    }

    // ── Search ──────────────────────────────────────────────────────

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let mut view = ListView::new(
            vec![
                Row::new(1, "Barrel", "Oak one"),
                Row::new(2, "Vat", "Steel"),
                Row::new(3, "Barrel", "Chestnut"),
            ],
            6,
        );

        view.set_query("barrel");
        assert_eq!(ids(&view), vec![1, 3]);

        view.set_query("OAK");
        assert_eq!(ids(&view), vec![1]);

        view.set_query("");
        assert_eq!(ids(&view), vec![1, 2, 3]);
    }

    #[test]
    fn changing_the_query_resets_to_page_one() {
        let mut view = ListView::new(rows(20), 6);
        view.set_page(3);
        assert_eq!(view.visible().page, 3);

        view.set_query("row");
        assert_eq!(view.visible().page, 1);

        // Same query again is not a change.
        view.set_page(2);
        view.set_query("row");
        assert_eq!(view.visible().page, 2);
    }

    #[test]
    fn search_runs_against_the_full_list_not_the_page() {
        let mut view = ListView::new(rows(20), 6);
        view.set_page(3);
        view.set_query("row 17");
        let page = view.visible();
        assert_eq!(page.total_rows, 1);
        assert_eq!(page.rows[0].id, 17);
    }

    // ── Pagination ──────────────────────────────────────────────────

    #[test]
    fn requested_page_is_clamped_into_range() {
        // 13 filtered rows at page size 6 -> 3 pages; page 10 -> 3.
        let mut view = ListView::new(rows(13), 6);
        view.set_page(10);

        let page = view.visible();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.rows.len(), 1, "last page holds the 13th row");
        assert_eq!(page.rows[0].id, 13);
    }

    #[test]
    fn deleting_the_only_item_on_the_last_page_reclamps_backward() {
        let mut view = ListView::new(rows(13), 6);
        view.set_page(3);
        assert_eq!(view.visible().rows.len(), 1);

        // Row 13 deleted -> 12 rows, 2 pages; the view must show page 2
        // rather than an empty page 3.
        view.replace_items(rows(12));
        let page = view.visible();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.rows.len(), 6);
    }

    #[test]
    fn empty_list_renders_a_single_empty_page() {
        let view: ListView<Row> = ListView::new(Vec::new(), 6);
        let page = view.visible();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.rows.is_empty());
        assert_eq!(page.strip, vec![PageItem::Page(1)]);
    }

    #[test]
    fn slices_never_run_out_of_range() {
        for len in 0..=25 {
            for page_size in 1..=7 {
                for requested in 1..=10 {
                    let mut view = ListView::new(rows(len), page_size);
                    view.set_page(requested);
                    let page = view.visible();
                    assert!(page.page >= 1 && page.page <= page.total_pages);
                    assert!(page.rows.len() <= page_size);
                    if len > 0 {
                        // Clamping must never produce an empty page while
                        // earlier pages have rows.
                        assert!(!page.rows.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn prev_and_next_stay_in_bounds() {
        let mut view = ListView::new(rows(13), 6);
        view.prev_page();
        assert_eq!(view.visible().page, 1);

        view.next_page();
        view.next_page();
        view.next_page();
        view.next_page();
        assert_eq!(view.visible().page, 3);
    }

    #[test]
    fn filter_and_sort_compose_with_pagination() {
        let mut view = ListView::new(
            vec![
                Row::new(1, "vat", "big vat"),
                Row::new(2, "barrel", "oak barrel"),
                Row::new(3, "vat", "small vat"),
                Row::new(4, "barrel", "pine barrel"),
                Row::new(5, "vat", "mid vat"),
            ],
            2,
        );
        view.set_query("vat");
        view.toggle_sort();

        let first = view.visible();
        assert_eq!(first.total_rows, 3);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);

        view.next_page();
        let second = view.visible();
        assert_eq!(second.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![5]);
    }
}
