use eframe::egui;

#[derive(Debug)]
pub enum PageBarEvent {
    PageChanged(u64),
}

/// One slot in the page-number window: a jumpable page or an ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u64),
    Gap,
}

pub fn total_pages(total_records: u64, rows_per_page: usize) -> u64 {
    let rows_per_page = rows_per_page.max(1) as u64;
    total_records.div_ceil(rows_per_page).max(1)
}

/// Bounded window of page numbers around the current page. Up to five pages
/// are shown verbatim; beyond that the window is the first page, up to five
/// pages centered on the current one, and the last page, with gaps where the
/// runs do not meet.
pub fn page_window(page: u64, total_pages: u64) -> Vec<PageEntry> {
    if total_pages <= 5 {
        return (1..=total_pages).map(PageEntry::Page).collect();
    }

    let mut window = vec![PageEntry::Page(1)];

    if page > 3 {
        window.push(PageEntry::Gap);
    }

    let start = page.saturating_sub(2).max(2);
    let end = (page + 2).min(total_pages - 1);
    for n in start..=end {
        window.push(PageEntry::Page(n));
    }

    if page + 2 < total_pages {
        window.push(PageEntry::Gap);
    }

    window.push(PageEntry::Page(total_pages));
    window
}

/// First and last record index shown on the page, 1-based. `(0, 0)` when
/// there are no records.
pub fn showing_range(page: u64, rows_per_page: usize, total_records: u64) -> (u64, u64) {
    if total_records == 0 {
        return (0, 0);
    }
    let rows_per_page = rows_per_page as u64;
    let start = (page - 1) * rows_per_page + 1;
    let end = (page * rows_per_page).min(total_records);
    (start, end)
}

pub fn range_label(page: u64, rows_per_page: usize, total_records: u64) -> String {
    let (start, end) = showing_range(page, rows_per_page, total_records);
    format!("Showing {}–{} of {}", start, end, total_records)
}

/// Range label, prev/next arrows, and the page-number window. Renders
/// nothing when there are no records. Does not clamp: keeping the requested
/// page inside `[1, total_pages]` is the caller's job.
pub struct PageBar;

impl PageBar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        page: u64,
        rows_per_page: usize,
        total_records: u64,
        loading: bool,
    ) -> Option<PageBarEvent> {
        if total_records == 0 {
            return None;
        }

        let mut event = None;
        let total_pages = total_pages(total_records, rows_per_page);
        let can_prev = page > 1;
        let can_next = page < total_pages;

        ui.horizontal(|ui| {
            ui.label(range_label(page, rows_per_page, total_records));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(can_next && !loading, egui::Button::new("›"))
                    .clicked()
                {
                    event = Some(PageBarEvent::PageChanged(page + 1));
                }

                for entry in page_window(page, total_pages).iter().rev() {
                    match entry {
                        PageEntry::Page(n) => {
                            if ui.selectable_label(*n == page, n.to_string()).clicked()
                                && *n != page
                            {
                                event = Some(PageBarEvent::PageChanged(*n));
                            }
                        }
                        PageEntry::Gap => {
                            ui.label("…");
                        }
                    }
                }

                if ui
                    .add_enabled(can_prev && !loading, egui::Button::new("‹"))
                    .clicked()
                {
                    event = Some(PageBarEvent::PageChanged(page - 1));
                }
            });
        });

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_and_floors_at_one() {
        assert_eq!(total_pages(42, 10), 5);
        assert_eq!(total_pages(40, 10), 4);
        assert_eq!(total_pages(41, 10), 5);
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(9, 3), 3);
    }

    #[test]
    fn short_totals_show_every_page() {
        assert_eq!(
            page_window(2, 5),
            vec![
                PageEntry::Page(1),
                PageEntry::Page(2),
                PageEntry::Page(3),
                PageEntry::Page(4),
                PageEntry::Page(5),
            ]
        );
        assert_eq!(page_window(1, 1), vec![PageEntry::Page(1)]);
    }

    #[test]
    fn deep_page_gets_gaps_on_both_sides() {
        assert_eq!(
            page_window(10, 20),
            vec![
                PageEntry::Page(1),
                PageEntry::Gap,
                PageEntry::Page(8),
                PageEntry::Page(9),
                PageEntry::Page(10),
                PageEntry::Page(11),
                PageEntry::Page(12),
                PageEntry::Gap,
                PageEntry::Page(20),
            ]
        );
    }

    #[test]
    fn edges_skip_the_near_gap() {
        assert_eq!(
            page_window(1, 20),
            vec![
                PageEntry::Page(1),
                PageEntry::Page(2),
                PageEntry::Page(3),
                PageEntry::Gap,
                PageEntry::Page(20),
            ]
        );
        assert_eq!(
            page_window(20, 20),
            vec![
                PageEntry::Page(1),
                PageEntry::Gap,
                PageEntry::Page(18),
                PageEntry::Page(19),
                PageEntry::Page(20),
            ]
        );
    }

    #[test]
    fn window_never_leaves_valid_range() {
        for total in 1..=40u64 {
            for page in 1..=total {
                for entry in page_window(page, total) {
                    if let PageEntry::Page(n) = entry {
                        assert!(
                            (1..=total).contains(&n),
                            "page {} outside 1..={} (current {})",
                            n,
                            total,
                            page
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn window_pages_are_strictly_increasing() {
        for total in 1..=40u64 {
            for page in 1..=total {
                let pages: Vec<u64> = page_window(page, total)
                    .into_iter()
                    .filter_map(|e| match e {
                        PageEntry::Page(n) => Some(n),
                        PageEntry::Gap => None,
                    })
                    .collect();
                assert!(
                    pages.windows(2).all(|w| w[0] < w[1]),
                    "duplicate or unordered pages for page {page} of {total}: {pages:?}"
                );
                assert!(pages.contains(&page));
            }
        }
    }

    #[test]
    fn showing_range_matches_examples() {
        assert_eq!(showing_range(1, 10, 42), (1, 10));
        assert_eq!(showing_range(5, 10, 42), (41, 42));
        assert_eq!(showing_range(1, 10, 0), (0, 0));
        assert_eq!(showing_range(2, 10, 15), (11, 15));
    }

    #[test]
    fn range_label_matches_examples() {
        assert_eq!(range_label(1, 10, 42), "Showing 1–10 of 42");
        assert_eq!(range_label(5, 10, 42), "Showing 41–42 of 42");
    }
}
