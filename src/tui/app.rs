//! # Application Model
//!
//! Root state machine of the dashboard. Everything that can happen becomes a
//! [`Message`]; `App::update` applies it and returns the one [`Effect`] the
//! event loop has to carry out.
//!
//! ```text
//! App
//! ├── active_view: ViewType       // which view owns the content pane
//! ├── focus: FocusArea            // sidebar or content
//! ├── show_help: bool             // help overlay swallows keys while open
//! ├── err: Option<String>         // top-level error (failed task)
//! ├── sidebar / status_bar / spinner / help
//! └── five views, each caching its last successful fetch
//! ```
//!
//! ## Key routing
//!
//! 1. Help overlay open: only `?`/esc are handled, everything else is dropped.
//! 2. A detail panel open in the focused content pane claims its close keys,
//!    so `q` closes the panel instead of quitting.
//! 3. Global keys: quit, help, focus toggle, `1`..`5`.
//! 4. Sidebar or active view, by focus.
//!
//! State changes only happen through `update()` on the loop thread, so
//! nothing here needs a lock.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use log::{debug, info, warn};

use crate::api::MailerLiteApi;
use crate::core::config::{DEFAULT_FETCH_LIMIT, ResolvedConfig};
use crate::core::loaded::Loaded;
use crate::core::view::{FocusArea, ViewType};
use crate::tui::components::{HelpOverlay, SIDEBAR_WIDTH, STATUS_BAR_HEIGHT, Sidebar, Spinner, StatusBar};
use crate::tui::keys;
use crate::tui::views::{
    AutomationsView, CampaignsView, FetchTask, FormsView, GroupsView, SubscribersView, View,
};

/// Header line plus its bottom border.
pub const HEADER_HEIGHT: u16 = 2;

/// Rows taken by the header and status bar together.
pub const CHROME_HEIGHT: u16 = HEADER_HEIGHT + STATUS_BAR_HEIGHT;

/// Horizontal padding around the content pane.
pub const CONTENT_PADDING: u16 = 2;

/// Everything the event loop feeds into the model.
#[derive(Debug)]
pub enum Message {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Animation frame.
    Tick,
    Loaded(Loaded),
    /// A background task died without producing a Loaded message.
    Error(String),
}

/// Side effect requested by `update`, carried out by the event loop.
pub enum Effect {
    None,
    Quit,
    Fetch(FetchTask),
}

impl Effect {
    fn from_fetch(task: Option<FetchTask>) -> Self {
        task.map_or(Effect::None, Effect::Fetch)
    }
}

pub struct App {
    profile: String,
    sidebar: Sidebar,
    status_bar: StatusBar,
    spinner: Spinner,
    help: HelpOverlay,
    subscribers: SubscribersView,
    campaigns: CampaignsView,
    automations: AutomationsView,
    groups: GroupsView,
    forms: FormsView,
    active_view: ViewType,
    focus: FocusArea,
    width: u16,
    height: u16,
    show_help: bool,
    err: Option<String>,
    initialized: bool,
}

impl App {
    /// `client == None` runs the dashboard headless: every fetch loads an
    /// empty list.
    pub fn new(client: Option<Arc<dyn MailerLiteApi>>, profile: impl Into<String>, limit: usize) -> Self {
        let profile = profile.into();
        let mut status_bar = StatusBar::new();
        status_bar.set_profile(profile.clone());

        let mut app = Self {
            profile,
            sidebar: Sidebar::new(),
            status_bar,
            spinner: Spinner::new(""),
            help: HelpOverlay::new(keys::help_sections()),
            subscribers: SubscribersView::new(client.clone(), limit),
            campaigns: CampaignsView::new(client.clone(), limit),
            automations: AutomationsView::new(client.clone(), limit),
            groups: GroupsView::new(client.clone(), limit),
            forms: FormsView::new(client, limit),
            active_view: ViewType::default(),
            focus: FocusArea::default(),
            width: 0,
            height: 0,
            show_help: false,
            err: None,
            initialized: false,
        };
        app.apply_focus();
        app.update_status_bar();
        app
    }

    pub fn from_config(client: Option<Arc<dyn MailerLiteApi>>, config: &ResolvedConfig) -> Self {
        Self::new(client, config.profile.clone(), config.fetch_limit)
    }

    /// Fetch for the initial view.
    pub fn init(&mut self) -> FetchTask {
        info!("Dashboard starting on {} (profile {})", self.active_view, self.profile);
        let task = self.view_mut().fetch();
        self.update_status_bar();
        task
    }

    pub fn update(&mut self, msg: Message) -> Effect {
        let effect = match msg {
            Message::Resize(width, height) => {
                self.width = width;
                self.height = height;
                self.update_layout();
                self.initialized = true;
                Effect::None
            }
            Message::Key(key) => self.handle_key(&key),
            Message::Tick => Effect::None,
            Message::Loaded(loaded) => {
                let target = loaded.view_type();
                debug!("Routing Loaded message to {}", target);
                self.view_of_mut(target).update(loaded);
                self.update_status_bar();
                Effect::None
            }
            Message::Error(err) => {
                warn!("Background task failed: {}", err);
                self.err = Some(err);
                Effect::None
            }
        };

        self.spinner.tick();
        self.status_bar.set_spinner_frame(self.spinner.frame());
        effect
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Effect {
        if self.show_help {
            if keys::HELP.matches(key) || keys::BACK.matches(key) {
                self.show_help = false;
            }
            return Effect::None;
        }

        if self.focus == FocusArea::Content
            && self.view().showing_detail()
            && keys::CLOSE_DETAIL.matches(key)
        {
            return Effect::from_fetch(self.view_mut().handle_key(key));
        }

        if keys::QUIT.matches(key) {
            info!("Quit requested");
            return Effect::Quit;
        }
        if keys::HELP.matches(key) {
            self.show_help = true;
            return Effect::None;
        }
        if keys::TAB.matches(key) {
            self.toggle_focus();
            return Effect::None;
        }
        let shortcuts = [keys::VIEW_1, keys::VIEW_2, keys::VIEW_3, keys::VIEW_4, keys::VIEW_5];
        if let Some(view) = shortcuts
            .iter()
            .position(|binding| binding.matches(key))
            .and_then(ViewType::from_index)
        {
            return Effect::from_fetch(self.switch_view(view));
        }

        let task = match self.focus {
            FocusArea::Sidebar => self.handle_sidebar_key(key),
            FocusArea::Content => self.view_mut().handle_key(key),
        };
        if task.is_some() {
            self.update_status_bar();
        }
        Effect::from_fetch(task)
    }

    fn handle_sidebar_key(&mut self, key: &KeyEvent) -> Option<FetchTask> {
        if keys::DOWN.matches(key) {
            self.sidebar.next();
            self.switch_view(self.sidebar.active())
        } else if keys::UP.matches(key) {
            self.sidebar.prev();
            self.switch_view(self.sidebar.active())
        } else if keys::ENTER.matches(key) || keys::RIGHT.matches(key) {
            self.focus = FocusArea::Content;
            self.apply_focus();
            None
        } else {
            None
        }
    }

    /// Make `view` the active one and fetch for it. No-op when it already is.
    fn switch_view(&mut self, view: ViewType) -> Option<FetchTask> {
        if self.active_view == view {
            return None;
        }
        debug!("Switching view {} -> {}", self.active_view, view);

        self.view_mut().set_focused(false);
        self.active_view = view;
        self.sidebar.set_active(view);
        let content_focused = self.focus == FocusArea::Content;
        self.view_mut().set_focused(content_focused);

        let task = self.view_mut().fetch();
        self.update_status_bar();
        Some(task)
    }

    fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
        self.apply_focus();
    }

    fn apply_focus(&mut self) {
        let content_focused = self.focus == FocusArea::Content;
        self.sidebar.set_focused(!content_focused);
        self.view_mut().set_focused(content_focused);
    }

    fn update_layout(&mut self) {
        let content_height = self.height.saturating_sub(CHROME_HEIGHT);
        let content_width = self
            .width
            .saturating_sub(SIDEBAR_WIDTH)
            .saturating_sub(CONTENT_PADDING);

        self.sidebar.set_height(content_height);
        self.status_bar.set_width(self.width);
        self.help.set_size(self.width, self.height);
        for view in ViewType::ALL {
            self.view_of_mut(view).set_size(content_width, content_height);
        }
        self.update_status_bar();
    }

    fn update_status_bar(&mut self) {
        let name = self.active_view.label();
        let (loading, count) = {
            let view = self.view();
            (view.loading(), view.item_count())
        };

        if loading {
            self.spinner.set_label(format!("Loading {name}..."));
            self.spinner.start();
            self.status_bar.set_left(name);
            self.status_bar.set_loading(true, self.spinner.label().to_string());
        } else {
            self.spinner.stop();
            self.status_bar.set_left(format!("{name} ({count})"));
            self.status_bar.set_loading(false, "");
        }
        self.status_bar.set_spinner_frame(self.spinner.frame());
    }

    /// The active view.
    pub fn view(&self) -> &dyn View {
        self.view_of(self.active_view)
    }

    pub fn view_mut(&mut self) -> &mut dyn View {
        self.view_of_mut(self.active_view)
    }

    pub fn view_of(&self, view: ViewType) -> &dyn View {
        match view {
            ViewType::Subscribers => &self.subscribers,
            ViewType::Campaigns => &self.campaigns,
            ViewType::Automations => &self.automations,
            ViewType::Groups => &self.groups,
            ViewType::Forms => &self.forms,
        }
    }

    pub fn view_of_mut(&mut self, view: ViewType) -> &mut dyn View {
        match view {
            ViewType::Subscribers => &mut self.subscribers,
            ViewType::Campaigns => &mut self.campaigns,
            ViewType::Automations => &mut self.automations,
            ViewType::Groups => &mut self.groups,
            ViewType::Forms => &mut self.forms,
        }
    }

    pub fn subscribers(&self) -> &SubscribersView {
        &self.subscribers
    }

    pub fn forms(&self) -> &FormsView {
        &self.forms
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn active_view(&self) -> ViewType {
        self.active_view
    }

    pub fn focus(&self) -> FocusArea {
        self.focus
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn error(&self) -> Option<&str> {
        self.err.as_deref()
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// True while the spinner needs animation frames.
    pub fn animating(&self) -> bool {
        self.spinner.is_active()
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    pub(crate) fn sidebar_mut(&mut self) -> &mut Sidebar {
        &mut self.sidebar
    }

    pub(crate) fn status_bar_mut(&mut self) -> &mut StatusBar {
        &mut self.status_bar
    }

    pub(crate) fn help_mut(&mut self) -> &mut HelpOverlay {
        &mut self.help
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(None, "default", DEFAULT_FETCH_LIMIT)
    }
}
