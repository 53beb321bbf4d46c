use crate::ui::components::{PageBar, PageBarEvent};
use eframe::egui;

pub const PAGE_SIZE_CHOICES: [usize; 4] = [10, 25, 50, 100];

#[derive(Debug)]
pub enum TableEvent<A> {
    /// A custom cell emitted a screen action.
    Row(A),
    PageChanged(u64),
    PageSizeChanged(usize),
}

enum CellRenderer<'a, R, A> {
    Text(fn(&R) -> String),
    Custom(Box<dyn Fn(&mut egui::Ui, &R) -> Option<A> + 'a>),
}

/// Column descriptor: label, width hint, alignment hint, and how to render a
/// cell. `text` cells are the default presentation; `custom` cells hold
/// widgets (badges, edit/delete buttons) that can emit an action.
pub struct Column<'a, R, A> {
    label: String,
    width: f32,
    right_aligned: bool,
    renderer: CellRenderer<'a, R, A>,
}

impl<'a, R, A> Column<'a, R, A> {
    pub fn text(label: &str, width: f32, cell: fn(&R) -> String) -> Self {
        Self {
            label: label.to_string(),
            width,
            right_aligned: false,
            renderer: CellRenderer::Text(cell),
        }
    }

    pub fn custom(
        label: &str,
        width: f32,
        cell: impl Fn(&mut egui::Ui, &R) -> Option<A> + 'a,
    ) -> Self {
        Self {
            label: label.to_string(),
            width,
            right_aligned: false,
            renderer: CellRenderer::Custom(Box::new(cell)),
        }
    }

    pub fn right_aligned(mut self) -> Self {
        self.right_aligned = true;
        self
    }
}

pub struct PageParams {
    pub page: u64,
    pub total_records: u64,
}

pub struct TableOptions<'a, R> {
    pub loading: bool,
    pub empty_text: &'a str,
    /// Stable row key used to salt widget ids; positional index otherwise.
    pub row_id: Option<fn(&R) -> &str>,
    /// Page-size selector and page window, shown only when supplied.
    pub pagination: Option<PageParams>,
    pub rows_per_page: usize,
}

impl<'a, R> Default for TableOptions<'a, R> {
    fn default() -> Self {
        Self {
            loading: false,
            empty_text: "No data found.",
            row_id: None,
            pagination: None,
            rows_per_page: PAGE_SIZE_CHOICES[0],
        }
    }
}

/// Which of the three mutually exclusive bodies the table shows.
#[derive(Debug, PartialEq, Eq)]
enum BodyState {
    Loading,
    Empty,
    Rows,
}

fn body_state(loading: bool, row_count: usize) -> BodyState {
    if loading {
        BodyState::Loading
    } else if row_count == 0 {
        BodyState::Empty
    } else {
        BodyState::Rows
    }
}

/// Generic header/body grid over a column descriptor list and a row slice.
pub struct DataTable {
    page_bar: PageBar,
}

impl DataTable {
    pub fn new() -> Self {
        Self {
            page_bar: PageBar::new(),
        }
    }

    pub fn show<R, A>(
        &mut self,
        ui: &mut egui::Ui,
        columns: &[Column<'_, R, A>],
        rows: &[R],
        opts: &TableOptions<'_, R>,
    ) -> Option<TableEvent<A>> {
        let mut event = None;

        if let Some(params) = &opts.pagination {
            ui.horizontal(|ui| {
                ui.label("Rows per page:");
                for size in PAGE_SIZE_CHOICES {
                    let is_selected = opts.rows_per_page == size;
                    if ui
                        .selectable_label(is_selected, size.to_string())
                        .clicked()
                        && !is_selected
                    {
                        event = Some(TableEvent::PageSizeChanged(size));
                    }
                }

                ui.separator();

                if let Some(PageBarEvent::PageChanged(page)) = self.page_bar.show(
                    ui,
                    params.page,
                    opts.rows_per_page,
                    params.total_records,
                    opts.loading,
                ) {
                    event = Some(TableEvent::PageChanged(page));
                }
            });
            ui.separator();
        }

        let state = body_state(opts.loading, rows.len());

        {
            use egui_extras::{Column as GridColumn, TableBuilder};

            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
            for column in columns {
                builder = builder.column(
                    GridColumn::initial(column.width)
                        .at_least(40.0)
                        .clip(true),
                );
            }

            builder
                .header(24.0, |mut header| {
                    for column in columns {
                        header.col(|ui| {
                            ui.strong(&column.label);
                        });
                    }
                })
                .body(|mut body| {
                    if state != BodyState::Rows {
                        return;
                    }
                    for (index, row) in rows.iter().enumerate() {
                        let row_key = match opts.row_id {
                            Some(key) => egui::Id::new(key(row)),
                            None => egui::Id::new(index),
                        };

                        body.row(26.0, |mut row_ui| {
                            for column in columns {
                                row_ui.col(|ui| {
                                    let layout = if column.right_aligned {
                                        egui::Layout::right_to_left(egui::Align::Center)
                                    } else {
                                        egui::Layout::left_to_right(egui::Align::Center)
                                    };
                                    ui.with_layout(layout, |ui| {
                                        ui.push_id(row_key, |ui| match &column.renderer {
                                            CellRenderer::Text(cell) => {
                                                ui.label(cell(row));
                                            }
                                            CellRenderer::Custom(cell) => {
                                                if let Some(action) = cell(ui, row) {
                                                    event = Some(TableEvent::Row(action));
                                                }
                                            }
                                        });
                                    });
                                });
                            }
                        });
                    }
                });
        }

        match state {
            BodyState::Loading => {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.label("Loading…");
                });
                ui.add_space(24.0);
            }
            BodyState::Empty => {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(opts.empty_text);
                });
                ui.add_space(24.0);
            }
            BodyState::Rows => {}
        }

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_over_empty_and_rows() {
        assert_eq!(body_state(true, 0), BodyState::Loading);
        assert_eq!(body_state(true, 7), BodyState::Loading);
    }

    #[test]
    fn empty_state_needs_idle_and_no_rows() {
        assert_eq!(body_state(false, 0), BodyState::Empty);
    }

    #[test]
    fn rows_render_when_present_and_idle() {
        assert_eq!(body_state(false, 1), BodyState::Rows);
        assert_eq!(body_state(false, 250), BodyState::Rows);
    }
}
