use crate::api::RecordPage;
use std::collections::HashSet;

/// Issued per list fetch, monotonically increasing within one `TableState`.
/// A completing fetch is applied only if its ticket is still the newest
/// issued, so a slow page-1 response cannot overwrite a fresher page-2
/// result. In-flight requests are never cancelled, only gated on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Everything a list screen owns: the page-scoped row cache, pagination
/// cursor, search text, and the per-row busy markers used while a mutation
/// for that row is in flight.
pub struct TableState<T> {
    pub rows: Vec<T>,
    pub total_records: u64,
    /// 1-based, as the API counts pages.
    pub page: u64,
    pub rows_per_page: usize,
    pub search_text: String,
    pub loading: bool,
    pub busy_rows: HashSet<String>,
    next_ticket: u64,
    latest_ticket: Option<FetchTicket>,
}

impl<T> TableState<T> {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            rows: Vec::new(),
            total_records: 0,
            page: 1,
            rows_per_page,
            search_text: String::new(),
            loading: false,
            busy_rows: HashSet::new(),
            next_ticket: 0,
            latest_ticket: None,
        }
    }

    /// Marks the table loading and issues the ticket the fetch must present
    /// when it completes.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.next_ticket += 1;
        let ticket = FetchTicket(self.next_ticket);
        self.latest_ticket = Some(ticket);
        self.loading = true;
        ticket
    }

    /// Applies a completed fetch. Returns false (and changes nothing) when a
    /// newer fetch has been issued since this one started.
    pub fn apply(&mut self, ticket: FetchTicket, page: RecordPage<T>) -> bool {
        if self.latest_ticket != Some(ticket) {
            return false;
        }
        self.rows = page.rows;
        self.total_records = page.total_records;
        self.loading = false;
        true
    }

    /// Clears the loading flag for a failed fetch, unless it was already
    /// superseded. Returns whether the failure belongs to the current fetch.
    pub fn fail(&mut self, ticket: FetchTicket) -> bool {
        if self.latest_ticket != Some(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn reset_to_first_page(&mut self) {
        self.page = 1;
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.total_records = 0;
        self.page = 1;
        self.search_text.clear();
        self.loading = false;
        self.busy_rows.clear();
        self.latest_ticket = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: Vec<u32>, total: u64) -> RecordPage<u32> {
        RecordPage {
            rows,
            total_records: total,
        }
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut table = TableState::<u32>::new(10);
        let slow = table.begin_fetch();
        let fast = table.begin_fetch();

        assert!(table.apply(fast, page(vec![3, 4], 2)));
        assert_eq!(table.rows, vec![3, 4]);
        assert!(!table.loading);

        // The older fetch resolves afterwards; it must not win.
        assert!(!table.apply(slow, page(vec![1, 2], 99)));
        assert_eq!(table.rows, vec![3, 4]);
        assert_eq!(table.total_records, 2);
    }

    #[test]
    fn current_fetch_applies() {
        let mut table = TableState::<u32>::new(10);
        let ticket = table.begin_fetch();
        assert!(table.loading);

        assert!(table.apply(ticket, page(vec![7], 1)));
        assert_eq!(table.total_records, 1);
        assert!(!table.loading);
    }

    #[test]
    fn stale_failure_keeps_loading_flag() {
        let mut table = TableState::<u32>::new(10);
        let slow = table.begin_fetch();
        let fast = table.begin_fetch();

        // The superseded fetch failing must not clear the newer one's spinner.
        assert!(!table.fail(slow));
        assert!(table.loading);

        assert!(table.fail(fast));
        assert!(!table.loading);
    }

    #[test]
    fn clear_resets_everything() {
        let mut table = TableState::<u32>::new(10);
        let ticket = table.begin_fetch();
        table.apply(ticket, page(vec![1], 1));
        table.page = 4;
        table.search_text = "gold".to_string();
        table.busy_rows.insert("u1".to_string());

        table.clear();
        assert!(table.rows.is_empty());
        assert_eq!(table.page, 1);
        assert!(table.search_text.is_empty());
        assert!(table.busy_rows.is_empty());
    }
}
