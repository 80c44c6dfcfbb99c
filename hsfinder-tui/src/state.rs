//! Application state and panel state definitions.

use crate::api_client::ApiClient;
use crate::config::HsfinderConfig;
use crate::controller::{HealthStatus, OrganizationForm, PanelStatus, SearchForm, Submission};
use crate::keys::Action;
use crate::nav::View;
use crate::notifications::{Notification, NotificationLevel};
use crate::render::DisplayBlock;
use crate::theme::Theme;
use crate::traits::FormField;
use crate::types::Language;

/// Notices kept for the footer; older ones are dropped.
pub const MAX_NOTIFICATIONS: usize = 50;

/// Work the event loop must perform after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
    Search(Language),
    SearchOrganizations,
    CheckHealth,
}

impl Command {
    /// Text shown while the command's request is in flight.
    pub fn busy_label(&self) -> Option<&'static str> {
        match self {
            Command::Search(_) => Some("Searching..."),
            Command::SearchOrganizations => Some("Searching organizations..."),
            Command::CheckHealth => Some("Checking API health..."),
            Command::None | Command::Quit => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

pub struct App {
    pub config: HsfinderConfig,
    pub theme: Theme,
    pub api: ApiClient,
    pub active_view: View,
    pub search_panels: [SearchPanel; 3],
    pub organization_panel: OrganizationPanel,
    pub health: HealthStatus,
    pub notifications: Vec<Notification>,
    pub modal: Option<Modal>,
    pub busy: Option<&'static str>,
}

impl App {
    pub fn new(config: HsfinderConfig, api: ApiClient) -> Self {
        let search_panels = Language::ALL.map(|language| SearchPanel::new(language, &config));
        let organization_panel = OrganizationPanel::new(&config);
        Self {
            config,
            theme: Theme::default(),
            api,
            active_view: View::SearchAz,
            search_panels,
            organization_panel,
            health: HealthStatus::Unchecked,
            notifications: Vec::new(),
            modal: None,
            busy: None,
        }
    }

    pub fn search_panel(&self, language: Language) -> &SearchPanel {
        &self.search_panels[language_slot(language)]
    }

    pub fn search_panel_mut(&mut self, language: Language) -> &mut SearchPanel {
        &mut self.search_panels[language_slot(language)]
    }

    /// Whether keystrokes currently go into a text field.
    pub fn editing(&self) -> bool {
        match self.active_view.language() {
            Some(language) => self.search_panel(language).cursor.editing,
            None => self.organization_panel.cursor.editing,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.push_notifications([Notification::new(level, message)]);
    }

    /// Append notices, keeping only the newest `MAX_NOTIFICATIONS`.
    fn push_notifications(&mut self, notices: impl IntoIterator<Item = Notification>) {
        self.notifications.extend(notices);
        let excess = self.notifications.len().saturating_sub(MAX_NOTIFICATIONS);
        self.notifications.drain(..excess);
    }

    pub fn apply(&mut self, action: Action) -> Command {
        if self.modal.is_some() {
            if action == Action::Quit {
                return Command::Quit;
            }
            self.modal = None;
            return Command::None;
        }

        match action {
            Action::Quit => Command::Quit,
            Action::NextView => self.switch_view(self.active_view.next()),
            Action::PrevView => self.switch_view(self.active_view.previous()),
            Action::SwitchView(index) => match View::from_index(index) {
                Some(view) => self.switch_view(view),
                None => Command::None,
            },
            Action::OpenHelp => {
                self.modal = Some(help_modal());
                Command::None
            }
            Action::CheckHealth => Command::CheckHealth,
            other => match self.active_view.language() {
                Some(language) => self.search_panel_mut(language).apply(other),
                None => self.organization_panel.apply(other),
            },
        }
    }

    fn switch_view(&mut self, view: View) -> Command {
        for panel in self.search_panels.iter_mut() {
            panel.cursor.editing = false;
        }
        self.organization_panel.cursor.editing = false;
        self.active_view = view;
        Command::None
    }

    pub fn record_search(&mut self, language: Language, submission: Submission) {
        self.push_notifications(submission.notices.iter().cloned());
        self.search_panel_mut(language).record(submission);
    }

    pub fn record_organizations(&mut self, submission: Submission) {
        self.push_notifications(submission.notices.iter().cloned());
        self.organization_panel.record(submission);
    }

    pub fn record_health(&mut self, status: HealthStatus) {
        match &status {
            HealthStatus::Reachable { .. } => {
                self.notify(NotificationLevel::Success, "API is reachable")
            }
            HealthStatus::Unhealthy { message } => {
                self.notify(NotificationLevel::Error, message.clone())
            }
            HealthStatus::Unchecked => {}
        }
        self.health = status;
    }
}

fn language_slot(language: Language) -> usize {
    match language {
        Language::Az => 0,
        Language::En => 1,
        Language::Ru => 2,
    }
}

fn help_modal() -> Modal {
    Modal {
        title: "Keybindings".to_string(),
        message: [
            "Tab / 1-4      switch tabs",
            "j/k or arrows  move between fields and results",
            "Enter / i      edit text field (Enter again submits)",
            "Space          toggle checkbox",
            "+/- or h/l     adjust size and alpha",
            "s              submit the form",
            "H              check API health",
            "q / Ctrl-C     quit",
        ]
        .join("\n"),
    }
}

// ============================================================================
// Form cursor
// ============================================================================

fn result_blocks(status: &PanelStatus) -> &[DisplayBlock] {
    match status {
        PanelStatus::Results(rendered) => &rendered.blocks,
        _ => &[],
    }
}

/// Returns false when the cursor is already on the first block.
fn select_previous_block(selected: &mut Option<usize>) -> bool {
    match *selected {
        Some(idx) if idx > 0 => {
            *selected = Some(idx - 1);
            true
        }
        _ => false,
    }
}

fn select_next_block(selected: &mut Option<usize>, len: usize) {
    if len == 0 {
        *selected = None;
        return;
    }
    *selected = Some(match *selected {
        Some(idx) => (idx + 1).min(len - 1),
        None => 0,
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorStep {
    Handled,
    Submit,
    /// Left to the panel: adjustments and toggles of its own rows.
    Unhandled(Action),
}

/// Focus, text editing and result selection of one form panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCursor<F: FormField> {
    pub focus: F,
    pub editing: bool,
    pub selected: Option<usize>,
}

impl<F: FormField> FormCursor<F> {
    fn new() -> Self {
        Self {
            focus: F::ORDER[0],
            editing: false,
            selected: None,
        }
    }

    /// Select the first block of fresh results, or leave the result row.
    fn reset(&mut self, result_count: usize) {
        self.selected = if result_count == 0 { None } else { Some(0) };
        if self.focus == F::RESULTS && self.selected.is_none() {
            self.focus = F::SUBMIT;
        }
    }

    fn apply(&mut self, action: Action, text: &mut String, result_count: usize) -> CursorStep {
        if self.editing {
            match action {
                Action::Input(c) => text.push(c),
                Action::Backspace => {
                    text.pop();
                }
                Action::Confirm => {
                    self.editing = false;
                    return CursorStep::Submit;
                }
                Action::Cancel => self.editing = false,
                Action::MoveUp | Action::MoveDown => {
                    self.editing = false;
                    return self.apply(action, text, result_count);
                }
                _ => {}
            }
            return CursorStep::Handled;
        }

        match action {
            Action::MoveDown => self.move_down(result_count),
            Action::MoveUp => self.move_up(),
            Action::Confirm if self.focus.is_text() => self.editing = true,
            Action::Confirm if self.focus == F::SUBMIT => return CursorStep::Submit,
            Action::Submit => return CursorStep::Submit,
            other => return CursorStep::Unhandled(other),
        }
        CursorStep::Handled
    }

    fn move_down(&mut self, result_count: usize) {
        if self.focus == F::RESULTS {
            select_next_block(&mut self.selected, result_count);
            return;
        }
        let next = self.focus.next();
        if next != F::RESULTS || result_count > 0 {
            self.focus = next;
        }
        if self.focus == F::RESULTS && self.selected.is_none() {
            self.selected = Some(0);
        }
    }

    fn move_up(&mut self) {
        if self.focus != F::RESULTS || !select_previous_block(&mut self.selected) {
            self.focus = self.focus.previous();
        }
    }
}

// ============================================================================
// Search panel
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Query,
    Size,
    Alpha,
    UseVector,
    Spelling,
    Submit,
    Results,
}

impl FormField for SearchField {
    const ORDER: &'static [Self] = &[
        SearchField::Query,
        SearchField::Size,
        SearchField::Alpha,
        SearchField::UseVector,
        SearchField::Spelling,
        SearchField::Submit,
        SearchField::Results,
    ];
    const SUBMIT: Self = SearchField::Submit;
    const RESULTS: Self = SearchField::Results;

    fn is_text(self) -> bool {
        self == SearchField::Query
    }
}

/// One language tab. The three tabs share this type and differ only in
/// `language`.
#[derive(Debug, Clone)]
pub struct SearchPanel {
    pub language: Language,
    pub form: SearchForm,
    pub cursor: FormCursor<SearchField>,
    pub status: PanelStatus,
    pub notices: Vec<Notification>,
}

impl SearchPanel {
    pub fn new(language: Language, config: &HsfinderConfig) -> Self {
        Self {
            language,
            form: SearchForm::new(config.default_size, config.default_alpha),
            cursor: FormCursor::new(),
            status: PanelStatus::Idle,
            notices: Vec::new(),
        }
    }

    pub fn header(&self) -> String {
        format!("Hybrid Search - {}", self.language.display_name())
    }

    pub fn blocks(&self) -> &[DisplayBlock] {
        result_blocks(&self.status)
    }

    pub fn selected_block(&self) -> Option<&DisplayBlock> {
        self.cursor.selected.and_then(|idx| self.blocks().get(idx))
    }

    pub fn record(&mut self, submission: Submission) {
        self.notices = submission.notices;
        self.status = submission.status;
        let count = self.blocks().len();
        self.cursor.reset(count);
    }

    pub fn apply(&mut self, action: Action) -> Command {
        let count = self.blocks().len();
        match self.cursor.apply(action, &mut self.form.query, count) {
            CursorStep::Submit => return Command::Search(self.language),
            CursorStep::Handled => {}
            CursorStep::Unhandled(action) => self.adjust(action),
        }
        Command::None
    }

    fn adjust(&mut self, action: Action) {
        match (action, self.cursor.focus) {
            (Action::Increase, SearchField::Size) => self.form.increase_size(),
            (Action::Decrease, SearchField::Size) => self.form.decrease_size(),
            (Action::Increase, SearchField::Alpha) => self.form.increase_alpha(),
            (Action::Decrease, SearchField::Alpha) => self.form.decrease_alpha(),
            (Action::Toggle | Action::Confirm, SearchField::UseVector) => {
                self.form.use_vector = !self.form.use_vector
            }
            (Action::Toggle | Action::Confirm, SearchField::Spelling) => {
                self.form.use_spelling = !self.form.use_spelling
            }
            _ => {}
        }
    }
}

// ============================================================================
// Organization panel
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizationField {
    SearchTerm,
    Size,
    Submit,
    Results,
}

impl FormField for OrganizationField {
    const ORDER: &'static [Self] = &[
        OrganizationField::SearchTerm,
        OrganizationField::Size,
        OrganizationField::Submit,
        OrganizationField::Results,
    ];
    const SUBMIT: Self = OrganizationField::Submit;
    const RESULTS: Self = OrganizationField::Results;

    fn is_text(self) -> bool {
        self == OrganizationField::SearchTerm
    }
}

#[derive(Debug, Clone)]
pub struct OrganizationPanel {
    pub form: OrganizationForm,
    pub cursor: FormCursor<OrganizationField>,
    pub status: PanelStatus,
    pub notices: Vec<Notification>,
}

impl OrganizationPanel {
    pub fn new(config: &HsfinderConfig) -> Self {
        Self {
            form: OrganizationForm::new(config.default_size),
            cursor: FormCursor::new(),
            status: PanelStatus::Idle,
            notices: Vec::new(),
        }
    }

    pub fn blocks(&self) -> &[DisplayBlock] {
        result_blocks(&self.status)
    }

    pub fn selected_block(&self) -> Option<&DisplayBlock> {
        self.cursor.selected.and_then(|idx| self.blocks().get(idx))
    }

    pub fn record(&mut self, submission: Submission) {
        self.notices = submission.notices;
        self.status = submission.status;
        let count = self.blocks().len();
        self.cursor.reset(count);
    }

    pub fn apply(&mut self, action: Action) -> Command {
        let count = self.blocks().len();
        match self.cursor.apply(action, &mut self.form.search_term, count) {
            CursorStep::Submit => return Command::SearchOrganizations,
            CursorStep::Handled => {}
            CursorStep::Unhandled(action) => match (action, self.cursor.focus) {
                (Action::Increase, OrganizationField::Size) => self.form.increase_size(),
                (Action::Decrease, OrganizationField::Size) => self.form.decrease_size(),
                _ => {}
            },
        }
        Command::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderedResults;

    fn app() -> App {
        let config = HsfinderConfig::default();
        let api = ApiClient::new(&config).unwrap();
        App::new(config, api)
    }

    fn block(index: usize) -> DisplayBlock {
        DisplayBlock {
            index,
            title: format!("Item {}", index),
            fields: Vec::new(),
            sections: Vec::new(),
        }
    }

    fn results(count: usize) -> Submission {
        Submission {
            notices: vec![Notification::success(format!("Found {} hits", count))],
            status: PanelStatus::Results(RenderedResults {
                total_hits: count as u64,
                summary: format!("Found {} hits", count),
                blocks: (1..=count).map(block).collect(),
            }),
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.apply(Action::Input(c));
        }
    }

    #[test]
    fn panels_start_from_config_defaults() {
        let app = app();
        let panel = app.search_panel(Language::En);
        assert_eq!(panel.form.size, 10);
        assert_eq!(panel.form.alpha(), 0.5);
        assert!(panel.form.use_vector);
        assert!(!panel.form.use_spelling);
        assert_eq!(panel.header(), "Hybrid Search - English");
    }

    #[test]
    fn typing_then_enter_submits_active_language() {
        let mut app = app();
        app.apply(Action::SwitchView(2));
        assert_eq!(app.apply(Action::Confirm), Command::None);
        assert!(app.editing());
        type_text(&mut app, "qatar");
        assert_eq!(app.apply(Action::Confirm), Command::Search(Language::Ru));
        assert!(!app.editing());
        assert_eq!(app.search_panel(Language::Ru).form.query, "qatar");
        assert_eq!(app.search_panel(Language::Az).form.query, "");
    }

    #[test]
    fn switching_tabs_stops_editing() {
        let mut app = app();
        app.apply(Action::Confirm);
        app.apply(Action::NextView);
        assert_eq!(app.active_view, View::SearchEn);
        assert!(!app.search_panel(Language::Az).cursor.editing);
    }

    #[test]
    fn toggles_and_adjustments_follow_focus() {
        let mut app = app();
        app.apply(Action::MoveDown);
        app.apply(Action::Increase);
        app.apply(Action::MoveDown);
        app.apply(Action::Decrease);
        app.apply(Action::MoveDown);
        app.apply(Action::Toggle);
        app.apply(Action::MoveDown);
        app.apply(Action::Confirm);
        let form = &app.search_panel(Language::Az).form;
        assert_eq!(form.size, 11);
        assert_eq!(form.alpha(), 0.4);
        assert!(!form.use_vector);
        assert!(form.use_spelling);
    }

    #[test]
    fn results_row_is_skipped_without_results() {
        let mut app = app();
        for _ in 0..10 {
            app.apply(Action::MoveDown);
        }
        assert_eq!(app.search_panel(Language::Az).cursor.focus, SearchField::Submit);
    }

    #[test]
    fn cursor_walks_results_and_returns_to_form() {
        let mut app = app();
        app.record_search(Language::Az, results(3));
        for _ in 0..6 {
            app.apply(Action::MoveDown);
        }
        let panel = app.search_panel(Language::Az);
        assert_eq!(panel.cursor.focus, SearchField::Results);
        assert_eq!(panel.cursor.selected, Some(0));
        app.apply(Action::MoveDown);
        app.apply(Action::MoveDown);
        app.apply(Action::MoveDown);
        assert_eq!(app.search_panel(Language::Az).cursor.selected, Some(2));
        app.apply(Action::MoveUp);
        app.apply(Action::MoveUp);
        app.apply(Action::MoveUp);
        assert_eq!(app.search_panel(Language::Az).cursor.focus, SearchField::Submit);
    }

    #[test]
    fn recording_results_selects_first_block_and_notifies() {
        let mut app = app();
        app.record_search(Language::En, results(2));
        let panel = app.search_panel(Language::En);
        assert_eq!(panel.selected_block().map(|b| b.title.as_str()), Some("Item 1"));
        assert_eq!(
            app.notifications.last().map(|n| n.message.as_str()),
            Some("Found 2 hits")
        );
    }

    #[test]
    fn organization_tab_submits_organization_search() {
        let mut app = app();
        app.apply(Action::SwitchView(3));
        app.apply(Action::Confirm);
        type_text(&mut app, "UN");
        assert_eq!(app.apply(Action::Confirm), Command::SearchOrganizations);
        assert_eq!(app.organization_panel.form.search_term, "UN");
        assert_eq!(app.apply(Action::Submit), Command::SearchOrganizations);
    }

    #[test]
    fn help_modal_swallows_next_key() {
        let mut app = app();
        app.apply(Action::OpenHelp);
        assert!(app.modal.is_some());
        assert_eq!(app.apply(Action::Submit), Command::None);
        assert!(app.modal.is_none());
    }

    #[test]
    fn health_is_a_global_action() {
        let mut app = app();
        app.apply(Action::SwitchView(3));
        assert_eq!(app.apply(Action::CheckHealth), Command::CheckHealth);
        app.record_health(HealthStatus::Unhealthy {
            message: "API returned status: 503".to_string(),
        });
        assert_eq!(
            app.notifications.last().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
    }

    #[test]
    fn busy_labels_match_commands() {
        assert_eq!(Command::Search(Language::Az).busy_label(), Some("Searching..."));
        assert_eq!(Command::Quit.busy_label(), None);
    }

    fn org_results(count: usize) -> Submission {
        let mut submission = results(count);
        if let PanelStatus::Results(rendered) = &mut submission.status {
            rendered.summary = format!("Found {} organizations", count);
        }
        submission
    }

    #[test]
    fn organization_cursor_walks_results_like_search_tabs() {
        let mut app = app();
        app.apply(Action::SwitchView(3));
        for _ in 0..5 {
            app.apply(Action::MoveDown);
        }
        assert_eq!(app.organization_panel.cursor.focus, OrganizationField::Submit);

        app.record_organizations(org_results(2));
        app.apply(Action::MoveDown);
        assert_eq!(app.organization_panel.cursor.focus, OrganizationField::Results);
        app.apply(Action::MoveDown);
        app.apply(Action::MoveDown);
        assert_eq!(
            app.organization_panel.selected_block().map(|b| b.title.as_str()),
            Some("Item 2")
        );
        app.apply(Action::MoveUp);
        app.apply(Action::MoveUp);
        assert_eq!(app.organization_panel.cursor.focus, OrganizationField::Submit);
    }

    #[test]
    fn moving_while_editing_leaves_the_text_field() {
        let mut app = app();
        app.apply(Action::SwitchView(3));
        app.apply(Action::Confirm);
        type_text(&mut app, "UNX");
        app.apply(Action::Backspace);
        app.apply(Action::MoveDown);
        assert!(!app.editing());
        assert_eq!(app.organization_panel.form.search_term, "UN");
        assert_eq!(app.organization_panel.cursor.focus, OrganizationField::Size);
        app.apply(Action::Increase);
        assert_eq!(app.organization_panel.form.size, 11);
    }

    #[test]
    fn empty_results_move_focus_off_result_row() {
        let mut app = app();
        app.record_search(Language::En, results(1));
        app.apply(Action::SwitchView(1));
        for _ in 0..6 {
            app.apply(Action::MoveDown);
        }
        assert_eq!(app.search_panel(Language::En).cursor.focus, SearchField::Results);
        app.record_search(Language::En, results(0));
        let panel = app.search_panel(Language::En);
        assert_eq!(panel.cursor.focus, SearchField::Submit);
        assert_eq!(panel.cursor.selected, None);
    }

    #[test]
    fn notification_history_is_capped() {
        let mut app = app();
        for i in 0..(MAX_NOTIFICATIONS + 7) {
            app.notify(NotificationLevel::Info, format!("note {}", i));
        }
        app.record_search(Language::Az, results(1));
        assert_eq!(app.notifications.len(), MAX_NOTIFICATIONS);
        assert_eq!(
            app.notifications.last().map(|n| n.message.as_str()),
            Some("Found 1 hits")
        );
        assert_eq!(app.notifications[0].message, "note 8");
    }
}
