use crate::api::{
    date_label, AdminSession, ApiClient, ApiError, ApiTask, Category, CategoryDraft, CategoryItem,
    Credentials, ItemDraft, User,
};
use crate::config::{ApiProfile, Config};
use crate::models::{Debouncer, Screen, TableState, UiState};
use crate::ui::components::*;
use crate::ui::{setup_styles, status_text};
use eframe::egui;
use poll_promise::Promise;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

/// Page size for the item editor's category dropdown; large enough to cover
/// every category without paging the dropdown itself.
const CHOICE_PAGE_SIZE: usize = 100;

#[derive(Debug)]
enum CategoryAction {
    Edit(Category),
    Delete(Category),
}

#[derive(Debug)]
enum ItemAction {
    Edit(CategoryItem),
    Delete(CategoryItem),
}

#[derive(Debug)]
enum UserAction {
    ToggleStatus(User),
}

enum PendingDelete {
    Category { id: String, name: String },
    Item { id: String, name: String },
}

pub struct AdminApp {
    // API connection
    pub config: Config,
    pub client: Arc<ApiClient>,
    pub session: Option<AdminSession>,

    // Tokio runtime for async operations
    pub runtime: Arc<tokio::runtime::Runtime>,

    // Screens
    pub screen: Screen,
    pub categories: TableState<Category>,
    pub items: TableState<CategoryItem>,
    pub users: TableState<User>,
    pub search_debounce: Debouncer,

    // Sign-in form
    pub credentials: Credentials,
    pub signing_in: bool,
    pub login_error: Option<String>,

    // Async operations
    pub tasks: Vec<ApiTask>,

    // Status
    pub status_message: String,

    // Dialogs
    pub show_settings: bool,
    pub edit_profile: Option<ApiProfile>,
    pub edit_profile_index: Option<usize>,
    pub category_draft: Option<CategoryDraft>,
    pub item_draft: Option<ItemDraft>,
    pub category_choices: Vec<Category>,
    pub choices_loading: bool,
    pending_delete: Option<PendingDelete>,

    // UI Components
    menu_bar: MenuBar,
    status_bar: StatusBar,
    nav_panel: NavPanel,
    login_panel: LoginPanel,
    search_box: SearchBox,
    data_table: DataTable,
    confirm_dialog: ConfirmDialog,
    category_editor: CategoryEditor,
    item_editor: ItemEditor,
    settings_dialog: SettingsDialog,
    profile_editor: ProfileEditor,
}

impl AdminApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        setup_styles(&cc.egui_ctx);

        let config = Config::load().unwrap_or_else(|_| Config::new());
        let profile = config.active_profile();
        let client = Arc::new(ApiClient::new(&profile.base_url));

        // Persistent tokio runtime shared by all request threads
        let runtime = Arc::new(
            tokio::runtime::Runtime::new().expect("Failed to create tokio runtime"),
        );

        let ui_state = UiState::load().unwrap_or_default();

        Self {
            config,
            client,
            session: None,
            runtime,
            screen: ui_state.screen,
            categories: TableState::new(ui_state.rows_per_page),
            items: TableState::new(ui_state.rows_per_page),
            users: TableState::new(ui_state.rows_per_page),
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE),
            credentials: Credentials::new(),
            signing_in: false,
            login_error: None,
            tasks: Vec::new(),
            status_message: "Please sign in".to_string(),
            show_settings: false,
            edit_profile: None,
            edit_profile_index: None,
            category_draft: None,
            item_draft: None,
            category_choices: Vec::new(),
            choices_loading: false,
            pending_delete: None,
            menu_bar: MenuBar::new(),
            status_bar: StatusBar::new(),
            nav_panel: NavPanel::new(),
            login_panel: LoginPanel::new(),
            search_box: SearchBox::new(),
            data_table: DataTable::new(),
            confirm_dialog: ConfirmDialog::new(),
            category_editor: CategoryEditor::new(),
            item_editor: ItemEditor::new(),
            settings_dialog: SettingsDialog::new(),
            profile_editor: ProfileEditor::new(),
        }
    }

    fn spawn<T>(
        &self,
        name: &'static str,
        future: impl Future<Output = Result<T, ApiError>> + Send + 'static,
    ) -> Promise<Result<T, ApiError>>
    where
        T: Send + 'static,
    {
        let runtime = Arc::clone(&self.runtime);
        Promise::spawn_thread(name, move || runtime.block_on(future))
    }

    fn save_ui_state(&self) {
        let state = UiState {
            screen: self.screen,
            rows_per_page: self.current_table_rows_per_page(),
        };
        let _ = state.save(); // Ignore errors when saving state
    }

    fn current_table_rows_per_page(&self) -> usize {
        match self.screen {
            Screen::Categories => self.categories.rows_per_page,
            Screen::CategoryItems => self.items.rows_per_page,
            Screen::Users => self.users.rows_per_page,
        }
    }

    /// Rebuilds the client for the active profile and forces a fresh sign-in.
    fn apply_profile(&mut self) {
        let profile = self.config.active_profile();
        info!(base_url = %profile.base_url, "switching api profile");
        self.client = Arc::new(ApiClient::new(&profile.base_url));
        self.session = None;
        self.credentials.password.clear();
        self.categories.clear();
        self.items.clear();
        self.users.clear();
        self.status_message = "Please sign in".to_string();
    }

    // -- fetches -------------------------------------------------------------

    fn fetch_current(&mut self) {
        match self.screen {
            Screen::Categories => self.fetch_categories(),
            Screen::CategoryItems => self.fetch_items(),
            Screen::Users => self.fetch_users(),
        }
    }

    fn fetch_categories(&mut self) {
        let ticket = self.categories.begin_fetch();
        let client = Arc::clone(&self.client);
        let page = self.categories.page;
        let rows_per_page = self.categories.rows_per_page;
        let search = self.categories.search_text.clone();

        let promise = self.spawn("list_categories", async move {
            client.list_categories(page, rows_per_page, &search).await
        });
        self.tasks.push(ApiTask::LoadCategories(ticket, promise));
    }

    fn fetch_items(&mut self) {
        let ticket = self.items.begin_fetch();
        let client = Arc::clone(&self.client);
        let page = self.items.page;
        let rows_per_page = self.items.rows_per_page;
        let search = self.items.search_text.clone();

        let promise = self.spawn("list_items", async move {
            client.list_items(page, rows_per_page, &search).await
        });
        self.tasks.push(ApiTask::LoadItems(ticket, promise));
    }

    fn fetch_users(&mut self) {
        let ticket = self.users.begin_fetch();
        let client = Arc::clone(&self.client);
        let page = self.users.page;
        let rows_per_page = self.users.rows_per_page;
        let search = self.users.search_text.clone();

        let promise = self.spawn("list_users", async move {
            client.list_users(page, rows_per_page, &search).await
        });
        self.tasks.push(ApiTask::LoadUsers(ticket, promise));
    }

    /// Dropdown choices for the item editor, fetched into dedicated state so
    /// they never disturb any table.
    fn fetch_category_choices(&mut self) {
        self.choices_loading = true;
        let client = Arc::clone(&self.client);

        let promise = self.spawn("category_choices", async move {
            client.list_categories(1, CHOICE_PAGE_SIZE, "").await
        });
        self.tasks.push(ApiTask::LoadCategoryChoices(promise));
    }

    // -- auth ----------------------------------------------------------------

    fn sign_in(&mut self) {
        self.signing_in = true;
        self.login_error = None;
        self.status_message = "Signing in...".to_string();

        let client = Arc::clone(&self.client);
        let credentials = self.credentials.clone();
        let promise = self.spawn("sign_in", async move { client.login(&credentials).await });
        self.tasks.push(ApiTask::SignIn(promise));
    }

    /// Clears the session locally right away; the logout call is best-effort.
    fn sign_out(&mut self) {
        if self.session.take().is_some() {
            info!("signed out");
            let client = Arc::clone(&self.client);
            let promise = self.spawn("sign_out", async move { client.logout().await });
            self.tasks.push(ApiTask::SignOut(promise));
        }

        self.client = Arc::new(self.client.as_ref().clone().with_token(None));
        self.credentials.password.clear();
        self.categories.clear();
        self.items.clear();
        self.users.clear();
        self.search_debounce.cancel();
        self.status_message = "Please sign in".to_string();
    }

    // -- mutations -----------------------------------------------------------

    fn save_category(&mut self, draft: CategoryDraft) {
        self.status_message = if draft.is_edit() {
            "Updating category...".to_string()
        } else {
            "Creating category...".to_string()
        };
        let client = Arc::clone(&self.client);
        let promise = self.spawn("save_category", async move {
            client.save_category(&draft).await
        });
        self.tasks.push(ApiTask::SaveCategory(promise));
    }

    fn delete_category(&mut self, id: String) {
        self.status_message = "Deleting category...".to_string();
        let client = Arc::clone(&self.client);
        let promise = self.spawn("delete_category", async move {
            client.delete_category(&id).await
        });
        self.tasks.push(ApiTask::DeleteCategory(promise));
    }

    fn save_item(&mut self, draft: ItemDraft) {
        self.status_message = if draft.is_edit() {
            "Updating item...".to_string()
        } else {
            "Creating item...".to_string()
        };
        let client = Arc::clone(&self.client);
        let promise = self.spawn("save_item", async move { client.save_item(&draft).await });
        self.tasks.push(ApiTask::SaveItem(promise));
    }

    fn delete_item(&mut self, id: String) {
        self.status_message = "Deleting item...".to_string();
        let client = Arc::clone(&self.client);
        let promise = self.spawn("delete_item", async move { client.delete_item(&id).await });
        self.tasks.push(ApiTask::DeleteItem(promise));
    }

    fn toggle_user_status(&mut self, user: &User) {
        // The badge is disabled while this row has a toggle in flight.
        if !self.users.busy_rows.insert(user.id.clone()) {
            return;
        }

        let client = Arc::clone(&self.client);
        let id = user.id.clone();
        let next_status = if user.is_active() { 0 } else { 1 };
        let promise = self.spawn("user_status", async move {
            client.set_user_status(&id, next_status).await
        });
        self.tasks
            .push(ApiTask::SetUserStatus(user.id.clone(), promise));
    }
}

impl eframe::App for AdminApp {
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.save_ui_state();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle completed async operations
        self.handle_api_tasks();

        // Debounced search: fires once per idle period
        if self.search_debounce.poll() && self.session.is_some() {
            self.fetch_current();
        }

        if self.session.is_none() {
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(LoginPanelEvent::Submit) = self.login_panel.show(
                    ui,
                    &mut self.credentials,
                    self.signing_in,
                    self.login_error.as_deref(),
                ) {
                    self.sign_in();
                }
            });
            self.request_repaints(ctx);
            return;
        }

        // Top menu bar
        let session_label = match &self.session {
            Some(session) => format!("{} ({})", session.email, self.client.base_url()),
            None => String::new(),
        };
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            if let Some(event) = self.menu_bar.show(ui, &session_label) {
                match event {
                    MenuBarEvent::ShowSettings => self.show_settings = true,
                    MenuBarEvent::LogOut => self.sign_out(),
                    MenuBarEvent::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                    MenuBarEvent::Refresh => self.fetch_current(),
                }
            }
        });

        // Status bar
        let counts = match self.screen {
            Screen::Categories => (self.categories.rows.len(), self.categories.total_records),
            Screen::CategoryItems => (self.items.rows.len(), self.items.total_records),
            Screen::Users => (self.users.rows.len(), self.users.total_records),
        };
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar.show(ui, &self.status_message, Some(counts));
        });

        // Settings dialog
        if self.show_settings {
            if let Some(event) = self.settings_dialog.show(ctx, &self.config) {
                match event {
                    SettingsDialogEvent::UseProfile(idx) => {
                        if self.config.get_profile(idx).is_some() {
                            self.config.last_profile_index = Some(idx);
                            let _ = self.config.save();
                            self.apply_profile();
                            self.show_settings = false;
                        }
                    }
                    SettingsDialogEvent::Edit(idx) => {
                        if let Some(profile) = self.config.get_profile(idx) {
                            self.edit_profile = Some(profile.clone());
                            self.edit_profile_index = Some(idx);
                        }
                    }
                    SettingsDialogEvent::Delete(idx) => {
                        self.config.delete_profile(idx);
                        let _ = self.config.save();
                    }
                    SettingsDialogEvent::NewProfile => {
                        self.edit_profile = Some(ApiProfile::new());
                        self.edit_profile_index = None;
                    }
                    SettingsDialogEvent::Close => self.show_settings = false,
                }
            }
        }

        // Profile editor dialog
        if let Some(ref mut profile) = self.edit_profile {
            if let Some(event) = self.profile_editor.show(ctx, profile) {
                match event {
                    ProfileEditorEvent::Save => {
                        let profile = profile.clone();
                        if let Some(idx) = self.edit_profile_index {
                            self.config.update_profile(idx, profile);
                        } else {
                            self.config.add_profile(profile);
                        }
                        let _ = self.config.save();
                        self.edit_profile = None;
                        self.edit_profile_index = None;
                    }
                    ProfileEditorEvent::Cancel => {
                        self.edit_profile = None;
                        self.edit_profile_index = None;
                    }
                }
            }
        }

        // Category create/edit dialog
        if let Some(ref mut draft) = self.category_draft {
            if let Some(event) = self.category_editor.show(ctx, draft) {
                match event {
                    CategoryEditorEvent::Save => {
                        let draft = draft.clone();
                        self.category_draft = None;
                        self.save_category(draft);
                    }
                    CategoryEditorEvent::Cancel => self.category_draft = None,
                }
            }
        }

        // Item create/edit dialog
        if let Some(ref mut draft) = self.item_draft {
            if let Some(event) =
                self.item_editor
                    .show(ctx, draft, &self.category_choices, self.choices_loading)
            {
                match event {
                    ItemEditorEvent::Save => {
                        let draft = draft.clone();
                        self.item_draft = None;
                        self.save_item(draft);
                    }
                    ItemEditorEvent::Cancel => self.item_draft = None,
                }
            }
        }

        // Delete confirmation
        if let Some(pending) = &self.pending_delete {
            let (title, message) = match pending {
                PendingDelete::Category { name, .. } => (
                    "Delete Category",
                    format!("Are you sure you want to delete category \"{}\"?", name),
                ),
                PendingDelete::Item { name, .. } => (
                    "Delete Item",
                    format!("Are you sure you want to delete item \"{}\"?", name),
                ),
            };
            if let Some(event) = self.confirm_dialog.show(ctx, title, &message) {
                match event {
                    ConfirmDialogEvent::Confirm => {
                        if let Some(pending) = self.pending_delete.take() {
                            match pending {
                                PendingDelete::Category { id, .. } => self.delete_category(id),
                                PendingDelete::Item { id, .. } => self.delete_item(id),
                            }
                        }
                    }
                    ConfirmDialogEvent::Cancel => self.pending_delete = None,
                }
            }
        }

        // Left sidebar - screen switcher
        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.heading("ARRC Admin");
                ui.separator();

                if let Some(NavPanelEvent::ScreenSelected(screen)) =
                    self.nav_panel.show(ui, self.screen)
                {
                    self.screen = screen;
                    self.search_debounce.cancel();
                    self.save_ui_state();
                    self.fetch_current();
                }
            });

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Categories => self.draw_categories(ui),
            Screen::CategoryItems => self.draw_items(ui),
            Screen::Users => self.draw_users(ui),
        });

        self.request_repaints(ctx);
    }
}

impl AdminApp {
    fn request_repaints(&self, ctx: &egui::Context) {
        if !self.tasks.is_empty() {
            ctx.request_repaint();
        }
        if let Some(remaining) = self.search_debounce.remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }

    // -- screens -------------------------------------------------------------

    fn draw_categories(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Categories");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("+ Add Category").clicked() {
                    self.category_draft = Some(CategoryDraft::new());
                }
                if let Some(SearchBoxEvent::Changed) = self.search_box.show(
                    ui,
                    &mut self.categories.search_text,
                    "Search category...",
                ) {
                    self.categories.reset_to_first_page();
                    self.search_debounce.arm();
                }
            });
        });
        ui.add_space(6.0);

        let columns = vec![
            Column::text("Name", 200.0, |c: &Category| c.name.clone()),
            Column::text("Slug", 160.0, |c: &Category| c.slug.clone()),
            Column::custom("Status", 90.0, |ui, c: &Category| {
                ui.label(status_text(c.is_active));
                None
            }),
            Column::text("Created", 110.0, |c: &Category| {
                date_label(c.created_at.as_ref())
            }),
            Column::custom("Action", 130.0, |ui, c: &Category| {
                let mut action = None;
                if ui.small_button("Edit").clicked() {
                    action = Some(CategoryAction::Edit(c.clone()));
                }
                if ui.small_button("Delete").clicked() {
                    action = Some(CategoryAction::Delete(c.clone()));
                }
                action
            }),
        ];

        let opts = TableOptions {
            loading: self.categories.loading,
            empty_text: "No categories found.",
            row_id: Some(|c: &Category| c.id.as_str()),
            pagination: Some(PageParams {
                page: self.categories.page,
                total_records: self.categories.total_records,
            }),
            rows_per_page: self.categories.rows_per_page,
        };

        let event = ui
            .push_id("categories_table", |ui| {
                self.data_table
                    .show(ui, &columns, &self.categories.rows, &opts)
            })
            .inner;

        match event {
            Some(TableEvent::Row(CategoryAction::Edit(category))) => {
                self.category_draft = Some(CategoryDraft::from_record(&category));
            }
            Some(TableEvent::Row(CategoryAction::Delete(category))) => {
                self.pending_delete = Some(PendingDelete::Category {
                    id: category.id,
                    name: category.name,
                });
            }
            Some(TableEvent::PageChanged(page)) => {
                self.categories.page = page;
                self.fetch_categories();
            }
            Some(TableEvent::PageSizeChanged(size)) => {
                self.categories.rows_per_page = size;
                self.categories.reset_to_first_page();
                self.save_ui_state();
                self.fetch_categories();
            }
            None => {}
        }
    }

    fn draw_items(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Category Items");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("+ Add Item").clicked() {
                    self.item_draft = Some(ItemDraft::new());
                    self.fetch_category_choices();
                }
                if let Some(SearchBoxEvent::Changed) =
                    self.search_box
                        .show(ui, &mut self.items.search_text, "Search...")
                {
                    self.items.reset_to_first_page();
                    self.search_debounce.arm();
                }
            });
        });
        ui.add_space(6.0);

        let columns = vec![
            Column::text("Name", 200.0, |i: &CategoryItem| i.name.clone()),
            Column::text("Symbol", 90.0, |i: &CategoryItem| i.stock_symbol.clone()),
            Column::text("Price", 90.0, |i: &CategoryItem| format!("{}", i.price)),
            Column::text("Reward", 80.0, |i: &CategoryItem| {
                format!("{}", i.reward_rate)
            }),
            Column::custom("Status", 90.0, |ui, i: &CategoryItem| {
                ui.label(status_text(i.is_active));
                None
            }),
            Column::custom("Action", 130.0, |ui, i: &CategoryItem| {
                let mut action = None;
                if ui.small_button("Edit").clicked() {
                    action = Some(ItemAction::Edit(i.clone()));
                }
                if ui.small_button("Delete").clicked() {
                    action = Some(ItemAction::Delete(i.clone()));
                }
                action
            })
            .right_aligned(),
        ];

        let opts = TableOptions {
            loading: self.items.loading,
            empty_text: "No items found.",
            row_id: Some(|i: &CategoryItem| i.id.as_str()),
            pagination: Some(PageParams {
                page: self.items.page,
                total_records: self.items.total_records,
            }),
            rows_per_page: self.items.rows_per_page,
        };

        let event = ui
            .push_id("items_table", |ui| {
                self.data_table.show(ui, &columns, &self.items.rows, &opts)
            })
            .inner;

        match event {
            Some(TableEvent::Row(ItemAction::Edit(item))) => {
                self.item_draft = Some(ItemDraft::from_record(&item));
                self.fetch_category_choices();
            }
            Some(TableEvent::Row(ItemAction::Delete(item))) => {
                self.pending_delete = Some(PendingDelete::Item {
                    id: item.id,
                    name: item.name,
                });
            }
            Some(TableEvent::PageChanged(page)) => {
                self.items.page = page;
                self.fetch_items();
            }
            Some(TableEvent::PageSizeChanged(size)) => {
                self.items.rows_per_page = size;
                self.items.reset_to_first_page();
                self.save_ui_state();
                self.fetch_items();
            }
            None => {}
        }
    }

    fn draw_users(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Users");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(SearchBoxEvent::Changed) = self.search_box.show(
                    ui,
                    &mut self.users.search_text,
                    "Search by email or name...",
                ) {
                    self.users.reset_to_first_page();
                    self.search_debounce.arm();
                }
            });
        });
        ui.add_space(6.0);

        let busy_rows = self.users.busy_rows.clone();
        let columns = vec![
            Column::text("Email", 260.0, |u: &User| u.email.clone()),
            Column::custom("Status", 110.0, move |ui, u: &User| {
                let is_busy = busy_rows.contains(&u.id);
                let badge = ui.add_enabled(
                    !is_busy,
                    egui::Button::new(status_text(u.is_active())).small(),
                );
                if badge.clicked() {
                    Some(UserAction::ToggleStatus(u.clone()))
                } else {
                    None
                }
            }),
            Column::text("Joined", 110.0, |u: &User| {
                date_label(u.created_at.as_ref())
            }),
        ];

        let opts = TableOptions {
            loading: self.users.loading,
            empty_text: "No users found",
            row_id: Some(|u: &User| u.id.as_str()),
            pagination: Some(PageParams {
                page: self.users.page,
                total_records: self.users.total_records,
            }),
            rows_per_page: self.users.rows_per_page,
        };

        let event = ui
            .push_id("users_table", |ui| {
                self.data_table.show(ui, &columns, &self.users.rows, &opts)
            })
            .inner;

        match event {
            Some(TableEvent::Row(UserAction::ToggleStatus(user))) => {
                self.toggle_user_status(&user);
            }
            Some(TableEvent::PageChanged(page)) => {
                self.users.page = page;
                self.fetch_users();
            }
            Some(TableEvent::PageSizeChanged(size)) => {
                self.users.rows_per_page = size;
                self.users.reset_to_first_page();
                self.save_ui_state();
                self.fetch_users();
            }
            None => {}
        }
    }

    // -- async completion ----------------------------------------------------

    fn handle_api_tasks(&mut self) {
        let tasks = std::mem::take(&mut self.tasks);

        for task in tasks {
            match task {
                ApiTask::SignIn(promise) => match promise.try_take() {
                    Ok(Ok(session)) => {
                        self.signing_in = false;
                        info!(email = %session.email, role = %session.role, "signed in");
                        self.client = Arc::new(
                            self.client.as_ref().clone().with_token(session.token.clone()),
                        );
                        self.status_message = format!("Signed in as {}", session.email);
                        self.session = Some(session);
                        self.fetch_current();
                    }
                    Ok(Err(e)) => {
                        self.signing_in = false;
                        warn!(error = %e, "sign-in failed");
                        self.login_error = Some(e.to_string());
                        self.status_message = "Please sign in".to_string();
                    }
                    Err(promise) => self.tasks.push(ApiTask::SignIn(promise)),
                },

                ApiTask::SignOut(promise) => match promise.try_take() {
                    Ok(Ok(())) => debug!("logout acknowledged"),
                    Ok(Err(e)) => warn!(error = %e, "logout call failed"),
                    Err(promise) => self.tasks.push(ApiTask::SignOut(promise)),
                },

                ApiTask::LoadCategories(ticket, promise) => match promise.try_take() {
                    Ok(Ok(page)) => {
                        if self.categories.apply(ticket, page) {
                            self.status_message = format!(
                                "Loaded {} of {} categories",
                                self.categories.rows.len(),
                                self.categories.total_records
                            );
                        }
                    }
                    Ok(Err(e)) => {
                        if self.categories.fail(ticket) {
                            self.status_message = format!("Failed to load categories: {}", e);
                        }
                    }
                    Err(promise) => self.tasks.push(ApiTask::LoadCategories(ticket, promise)),
                },

                ApiTask::LoadItems(ticket, promise) => match promise.try_take() {
                    Ok(Ok(page)) => {
                        if self.items.apply(ticket, page) {
                            self.status_message = format!(
                                "Loaded {} of {} items",
                                self.items.rows.len(),
                                self.items.total_records
                            );
                        }
                    }
                    Ok(Err(e)) => {
                        if self.items.fail(ticket) {
                            self.status_message = format!("Failed to load items: {}", e);
                        }
                    }
                    Err(promise) => self.tasks.push(ApiTask::LoadItems(ticket, promise)),
                },

                ApiTask::LoadUsers(ticket, promise) => match promise.try_take() {
                    Ok(Ok(page)) => {
                        if self.users.apply(ticket, page) {
                            self.status_message = format!(
                                "Loaded {} of {} users",
                                self.users.rows.len(),
                                self.users.total_records
                            );
                        }
                    }
                    Ok(Err(e)) => {
                        if self.users.fail(ticket) {
                            self.status_message = format!("Failed to load users: {}", e);
                        }
                    }
                    Err(promise) => self.tasks.push(ApiTask::LoadUsers(ticket, promise)),
                },

                ApiTask::LoadCategoryChoices(promise) => match promise.try_take() {
                    Ok(Ok(page)) => {
                        self.choices_loading = false;
                        self.category_choices = page.rows;
                    }
                    Ok(Err(e)) => {
                        self.choices_loading = false;
                        self.status_message = format!("Failed to load categories: {}", e);
                    }
                    Err(promise) => self.tasks.push(ApiTask::LoadCategoryChoices(promise)),
                },

                ApiTask::SaveCategory(promise) => match promise.try_take() {
                    Ok(Ok(())) => {
                        self.status_message = "Category saved".to_string();
                        self.fetch_categories();
                    }
                    Ok(Err(e)) => {
                        self.status_message = format!("Failed to save category: {}", e);
                    }
                    Err(promise) => self.tasks.push(ApiTask::SaveCategory(promise)),
                },

                ApiTask::DeleteCategory(promise) => match promise.try_take() {
                    Ok(Ok(())) => {
                        self.status_message = "Category deleted".to_string();
                        self.fetch_categories();
                    }
                    Ok(Err(e)) => {
                        self.status_message = format!("Failed to delete category: {}", e);
                    }
                    Err(promise) => self.tasks.push(ApiTask::DeleteCategory(promise)),
                },

                ApiTask::SaveItem(promise) => match promise.try_take() {
                    Ok(Ok(())) => {
                        self.status_message = "Item saved".to_string();
                        self.fetch_items();
                    }
                    Ok(Err(e)) => {
                        self.status_message = format!("Failed to save item: {}", e);
                    }
                    Err(promise) => self.tasks.push(ApiTask::SaveItem(promise)),
                },

                ApiTask::DeleteItem(promise) => match promise.try_take() {
                    Ok(Ok(())) => {
                        self.status_message = "Item deleted".to_string();
                        self.fetch_items();
                    }
                    Ok(Err(e)) => {
                        self.status_message = format!("Failed to delete item: {}", e);
                    }
                    Err(promise) => self.tasks.push(ApiTask::DeleteItem(promise)),
                },

                ApiTask::SetUserStatus(user_id, promise) => match promise.try_take() {
                    Ok(Ok(())) => {
                        self.users.busy_rows.remove(&user_id);
                        self.status_message = "User status updated".to_string();
                        self.fetch_users();
                    }
                    Ok(Err(e)) => {
                        self.users.busy_rows.remove(&user_id);
                        self.status_message = format!("Failed to update user status: {}", e);
                    }
                    Err(promise) => self.tasks.push(ApiTask::SetUserStatus(user_id, promise)),
                },
            }
        }
    }
}
