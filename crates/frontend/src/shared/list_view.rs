//! Generic list-view controller shared by the customer, billing, payment,
//! and tariff screens.
//!
//! The original screens each carried their own copy of the fetch/filter/
//! paginate/select plumbing; this module collapses them into one pure,
//! type-parameterized state machine. Pages keep a `ListView` inside an
//! `RwSignal` and drive it from event handlers; it performs no I/O itself,
//! which keeps the whole contract unit-testable off the browser.

use std::cmp::Ordering;

/// Record type that can live inside a [`ListView`].
pub trait ListRecord {
    /// Stable identifier used for selection tracking across refetches.
    fn record_id(&self) -> i64;

    /// Case-insensitive free-text match. `query` arrives trimmed and
    /// lowercased; an empty query never reaches this method.
    fn matches_query(&self, query: &str) -> bool;
}

/// Categorical predicate AND-ed with the free-text query (status tab,
/// service-type dropdown). `()` means "match everything".
pub trait ViewFilter<T> {
    fn matches(&self, item: &T) -> bool;
}

impl<T> ViewFilter<T> for () {
    fn matches(&self, _item: &T) -> bool {
        true
    }
}

/// Window of the filtered list that the table actually renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

/// Pagination math over a filtered list of `len` items. Pages are 1-indexed
/// and `page` is clamped into `[1, total_pages]`; an empty list still has
/// one (empty) page so the table can render its "no data" row.
pub fn paginate(len: usize, page_size: usize, page: usize) -> PageWindow {
    debug_assert!(page_size > 0);
    let total_pages = if len == 0 {
        1
    } else {
        (len + page_size - 1) / page_size
    };
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(len);
    PageWindow {
        page,
        total_pages,
        start,
        end,
        can_prev: page > 1,
        can_next: page < total_pages,
    }
}

/// Client-side list state: one raw list per screen instance, a derived
/// filtered view, a pager over that view, and at most one selected record.
#[derive(Clone)]
pub struct ListView<T, F = ()> {
    raw: Vec<T>,
    query: String,
    filter: F,
    page: usize,
    page_size: usize,
    selected_id: Option<i64>,
    sorter: Option<fn(&T, &T) -> Ordering>,
    latest_seq: u64,
    loading: bool,
}

impl<T, F> ListView<T, F>
where
    T: ListRecord + Clone,
    F: ViewFilter<T>,
{
    pub fn new(page_size: usize, filter: F) -> Self {
        Self {
            raw: Vec::new(),
            query: String::new(),
            filter,
            page: 1,
            page_size,
            selected_id: None,
            sorter: None,
            latest_seq: 0,
            loading: false,
        }
    }

    /// Comparator applied to the whole raw list after every successful
    /// fetch (e.g. the customer screen's A-Z name sort).
    pub fn with_sorter(mut self, sorter: fn(&T, &T) -> Ordering) -> Self {
        self.sorter = sorter.into();
        self
    }

    // --- remote fetch bookkeeping -------------------------------------

    /// Marks a fetch as in flight and returns its sequence number. A newer
    /// call supersedes older outstanding ones: their responses will be
    /// discarded when they eventually settle.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_seq += 1;
        self.loading = true;
        self.latest_seq
    }

    /// Installs a fetched list, wholesale. Returns `false` (and changes
    /// nothing) when `seq` is not the latest issued, so an out-of-order
    /// response can never clobber fresher data.
    pub fn complete_fetch(&mut self, seq: u64, mut records: Vec<T>) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        if let Some(sorter) = self.sorter {
            records.sort_by(sorter);
        }
        self.raw = records;
        self.page = 1;
        self.loading = false;
        // Selection survives a refetch only while the record still exists.
        if let Some(id) = self.selected_id {
            if !self.raw.iter().any(|r| r.record_id() == id) {
                self.selected_id = None;
            }
        }
        true
    }

    /// Marks a failed fetch as settled. The previous list stays visible;
    /// returns `true` when the failure belongs to the latest fetch and the
    /// caller should surface the error.
    pub fn fail_fetch(&mut self, seq: u64) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // --- local view filter --------------------------------------------

    /// Free-text query; any change resets the pager to page 1.
    pub fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.page = 1;
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Categorical predicate (status tab, service type); resets to page 1.
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Derived display subset: query AND categorical filter, in raw order.
    pub fn filtered(&self) -> Vec<T> {
        let query = self.query.trim().to_lowercase();
        self.raw
            .iter()
            .filter(|item| self.filter.matches(item))
            .filter(|item| query.is_empty() || item.matches_query(&query))
            .cloned()
            .collect()
    }

    // --- pager ---------------------------------------------------------

    /// Current page of the filtered list plus navigation flags.
    pub fn page_view(&self) -> (Vec<T>, PageWindow) {
        let filtered = self.filtered();
        let window = paginate(filtered.len(), self.page_size, self.page);
        let items = filtered[window.start..window.end].to_vec();
        (items, window)
    }

    pub fn set_page(&mut self, page: usize) {
        let len = self.filtered().len();
        self.page = paginate(len, self.page_size, page).page;
    }

    /// Boundary no-op, not an error.
    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    /// Boundary no-op, not an error.
    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1).max(1));
    }

    // --- selection -----------------------------------------------------

    /// Selects the record with `id` if it exists in the raw list.
    pub fn select(&mut self, id: i64) {
        if self.raw.iter().any(|r| r.record_id() == id) {
            self.selected_id = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Resolves the selection against the current raw list, so a refetch
    /// that dropped the record yields `None` rather than a stale copy.
    pub fn selected(&self) -> Option<&T> {
        let id = self.selected_id?;
        self.raw.iter().find(|r| r.record_id() == id)
    }

    // --- raw list ------------------------------------------------------

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn raw(&self) -> &[T] {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: String,
        paid: bool,
    }

    impl Row {
        fn new(id: i64, name: &str) -> Self {
            Self {
                id,
                name: name.to_string(),
                paid: false,
            }
        }

        fn paid(mut self) -> Self {
            self.paid = true;
            self
        }
    }

    impl ListRecord for Row {
        fn record_id(&self) -> i64 {
            self.id
        }

        fn matches_query(&self, query: &str) -> bool {
            self.name.to_lowercase().contains(query)
        }
    }

    #[derive(Clone, Copy, PartialEq)]
    enum Tab {
        All,
        Outstanding,
        Paid,
    }

    impl ViewFilter<Row> for Tab {
        fn matches(&self, item: &Row) -> bool {
            match self {
                Tab::All => true,
                Tab::Outstanding => !item.paid,
                Tab::Paid => item.paid,
            }
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n as i64).map(|i| Row::new(i, &format!("row {i}"))).collect()
    }

    fn loaded(page_size: usize, records: Vec<Row>) -> ListView<Row> {
        let mut view = ListView::new(page_size, ());
        let seq = view.begin_fetch();
        assert!(view.complete_fetch(seq, records));
        view
    }

    #[test]
    fn paginate_partitions_in_order() {
        // 12 items at page size 5: pages of 5, 5, 2.
        let items: Vec<i64> = (0..12).collect();
        let mut seen = Vec::new();
        let mut sizes = Vec::new();
        for page in 1.. {
            let w = paginate(items.len(), 5, page);
            assert_eq!(w.total_pages, 3);
            seen.extend_from_slice(&items[w.start..w.end]);
            sizes.push(w.end - w.start);
            if !w.can_next {
                break;
            }
        }
        assert_eq!(sizes, vec![5, 5, 2]);
        assert_eq!(seen, items);
    }

    #[test]
    fn paginate_boundaries() {
        let first = paginate(12, 5, 1);
        assert!(!first.can_prev);
        assert!(first.can_next);
        let last = paginate(12, 5, 3);
        assert!(last.can_prev);
        assert!(!last.can_next);
        assert_eq!(last.end - last.start, 2);
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let w = paginate(0, 5, 1);
        assert_eq!(w.total_pages, 1);
        assert_eq!((w.start, w.end), (0, 0));
        assert!(!w.can_prev && !w.can_next);
    }

    #[test]
    fn out_of_range_page_clamps() {
        assert_eq!(paginate(12, 5, 99).page, 3);
        assert_eq!(paginate(12, 5, 0).page, 1);
    }

    #[test]
    fn filter_is_subset_and_idempotent() {
        let mut view = loaded(5, rows(10));
        view.set_query("row 1".to_string());
        let once = view.filtered();
        assert!(once.iter().all(|r| view.raw().contains(r)));
        // Feeding the filtered result back through the same predicate
        // changes nothing.
        let twice: Vec<Row> = once
            .iter()
            .filter(|r| r.matches_query("row 1"))
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_query_matches_all() {
        let mut view = loaded(5, rows(7));
        view.set_query("   ".to_string());
        assert_eq!(view.filtered().len(), 7);
    }

    #[test]
    fn query_change_resets_page() {
        let mut view = loaded(5, rows(12));
        view.set_page(3);
        view.set_query("row".to_string());
        let (_, window) = view.page_view();
        assert_eq!(window.page, 1);
    }

    #[test]
    fn tab_change_resets_page() {
        let mut view: ListView<Row, Tab> = ListView::new(5, Tab::All);
        let seq = view.begin_fetch();
        view.complete_fetch(seq, rows(12));
        view.set_page(3);
        view.set_filter(Tab::Outstanding);
        let (_, window) = view.page_view();
        assert_eq!(window.page, 1);
    }

    #[test]
    fn status_tabs_partition_the_list() {
        let records = vec![
            Row::new(1, "a"),
            Row::new(2, "b").paid(),
            Row::new(3, "c"),
        ];
        let mut view: ListView<Row, Tab> = ListView::new(10, Tab::Outstanding);
        let seq = view.begin_fetch();
        view.complete_fetch(seq, records);
        assert_eq!(view.filtered().len(), 2);
        view.set_filter(Tab::Paid);
        assert_eq!(view.filtered().len(), 1);
        view.set_filter(Tab::All);
        assert_eq!(view.filtered().len(), 3);
    }

    #[test]
    fn sorter_runs_on_every_fetch() {
        let mut view: ListView<Row> = ListView::new(10, ()).with_sorter(|a, b| {
            a.name.to_lowercase().cmp(&b.name.to_lowercase())
        });
        let seq = view.begin_fetch();
        view.complete_fetch(
            seq,
            vec![
                Row::new(1, "Citra"),
                Row::new(2, "agus"),
                Row::new(3, "Budi"),
            ],
        );
        let names: Vec<&str> = view.raw().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["agus", "Budi", "Citra"]);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut view: ListView<Row> = ListView::new(5, ());
        let old = view.begin_fetch();
        let new = view.begin_fetch();
        assert!(view.complete_fetch(new, rows(3)));
        // The superseded response settles afterwards and must not win.
        assert!(!view.complete_fetch(old, rows(9)));
        assert_eq!(view.len(), 3);
        assert!(!view.is_loading());
    }

    #[test]
    fn stale_failure_does_not_clear_loading() {
        let mut view: ListView<Row> = ListView::new(5, ());
        let old = view.begin_fetch();
        let new = view.begin_fetch();
        assert!(!view.fail_fetch(old));
        assert!(view.is_loading());
        assert!(view.fail_fetch(new));
        assert!(!view.is_loading());
    }

    #[test]
    fn failed_fetch_keeps_previous_list() {
        let mut view = loaded(5, rows(4));
        let seq = view.begin_fetch();
        assert!(view.fail_fetch(seq));
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn successful_fetch_resets_to_page_one() {
        let mut view = loaded(5, rows(12));
        view.set_page(3);
        let seq = view.begin_fetch();
        view.complete_fetch(seq, rows(12));
        let (_, window) = view.page_view();
        assert_eq!(window.page, 1);
    }

    #[test]
    fn selection_resolves_into_raw_list() {
        let mut view = loaded(5, rows(3));
        view.select(2);
        assert_eq!(view.selected().map(|r| r.id), Some(2));
        view.clear_selection();
        assert!(view.selected().is_none());
    }

    #[test]
    fn selecting_unknown_id_is_ignored() {
        let mut view = loaded(5, rows(3));
        view.select(99);
        assert!(view.selected().is_none());
    }

    #[test]
    fn refetch_drops_selection_of_deleted_record() {
        let mut view = loaded(5, rows(3));
        view.select(3);
        let seq = view.begin_fetch();
        // Record 3 was deleted server-side.
        view.complete_fetch(seq, rows(2));
        assert!(view.selected().is_none());
    }

    #[test]
    fn refetch_keeps_selection_of_surviving_record() {
        let mut view = loaded(5, rows(3));
        view.select(2);
        let seq = view.begin_fetch();
        view.complete_fetch(seq, rows(3));
        assert_eq!(view.selected().map(|r| r.id), Some(2));
    }

    #[test]
    fn navigation_is_noop_at_boundaries() {
        let mut view = loaded(5, rows(12));
        view.prev_page();
        assert_eq!(view.page_view().1.page, 1);
        view.set_page(3);
        view.next_page();
        assert_eq!(view.page_view().1.page, 3);
    }
}
