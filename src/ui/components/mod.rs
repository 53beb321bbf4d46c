mod category_editor;
mod confirm_dialog;
mod data_table;
mod item_editor;
mod login_panel;
mod menu_bar;
mod nav_panel;
mod pagination;
mod profile_editor;
mod search_box;
mod settings_dialog;
mod status_bar;

pub use category_editor::{CategoryEditor, CategoryEditorEvent};
pub use confirm_dialog::{ConfirmDialog, ConfirmDialogEvent};
pub use data_table::{Column, DataTable, PageParams, TableEvent, TableOptions};
pub use item_editor::{ItemEditor, ItemEditorEvent};
pub use login_panel::{LoginPanel, LoginPanelEvent};
pub use menu_bar::{MenuBar, MenuBarEvent};
pub use nav_panel::{NavPanel, NavPanelEvent};
pub use pagination::{PageBar, PageBarEvent};
pub use profile_editor::{ProfileEditor, ProfileEditorEvent};
pub use search_box::{SearchBox, SearchBoxEvent};
pub use settings_dialog::{SettingsDialog, SettingsDialogEvent};
pub use status_bar::StatusBar;
