use smarterp_core::pages::dashboards::{DashboardsEvent, DashboardsState};
use smarterp_core::pages::generate_page::{GeneratePageEvent, GeneratePageState};
use smarterp_core::{BannerSlot, DashboardForm, Effect, ModelChoice, Outcome, Update};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebTab {
    Dashboards,
    Generate,
}

impl WebTab {
    pub const ALL: [Self; 2] = [Self::Dashboards, Self::Generate];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboards => "Dashboards",
            Self::Generate => "Generate Dashboard",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Dashboards => 0,
            Self::Generate => 1,
        }
    }

    const fn toggled(self) -> Self {
        match self {
            Self::Dashboards => Self::Generate,
            Self::Generate => Self::Dashboards,
        }
    }
}

/// Keys the browser shell reacts to, decoupled from the DOM event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebKey {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Esc,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    F(u8),
}

#[derive(Debug)]
pub struct WebApp {
    pub tab: WebTab,
    pub dashboards: DashboardsState,
    pub generate: GeneratePageState,
    pub banner: BannerSlot,
    outbox: Vec<Effect>,
}

impl WebApp {
    /// Starts on the Dashboards tab with its list fetch already queued.
    pub fn new(dashboard_server: &str) -> Self {
        let mut app = Self {
            tab: WebTab::Dashboards,
            dashboards: DashboardsState::new(dashboard_server),
            generate: GeneratePageState::new(ModelChoice::default()),
            banner: BannerSlot::new(),
            outbox: Vec::new(),
        };
        let update = app.dashboards.update(DashboardsEvent::Open);
        app.apply(update);
        app
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.banner.tick(elapsed);
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.outbox)
    }

    fn apply(&mut self, update: Update) {
        if let Some(notice) = update.notice {
            self.banner.show(notice);
        }
        if let Some(effect) = update.effect {
            self.outbox.push(effect);
        }
    }

    fn switch_to(&mut self, tab: WebTab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        if tab == WebTab::Dashboards {
            let update = self.dashboards.update(DashboardsEvent::Open);
            self.apply(update);
        }
    }

    pub fn apply_outcome(&mut self, outcome: Outcome) {
        let update = match outcome {
            Outcome::DashboardsListed(result) => {
                self.dashboards.update(DashboardsEvent::Listed(result))
            }
            Outcome::DashboardDetailLoaded { id, result } => self
                .dashboards
                .update(DashboardsEvent::DetailLoaded { id, result }),
            Outcome::DashboardGenerated {
                form: DashboardForm::GeneratePage,
                result,
            } => self.generate.update(GeneratePageEvent::Settled(result)),
            _ => Update::none(),
        };
        self.apply(update);
    }

    pub fn handle_key(&mut self, key: WebKey) {
        if key == WebKey::Tab {
            self.switch_to(self.tab.toggled());
            return;
        }
        if key == WebKey::Esc && self.banner.is_visible() {
            self.banner.dismiss();
            return;
        }
        match self.tab {
            WebTab::Dashboards => self.handle_dashboards_key(key),
            WebTab::Generate => self.handle_generate_key(key),
        }
    }

    fn handle_dashboards_key(&mut self, key: WebKey) {
        let event = if self.dashboards.filtering {
            match key {
                WebKey::Char(ch) => DashboardsEvent::FilterPush(ch),
                WebKey::Backspace => DashboardsEvent::FilterPop,
                WebKey::Enter => DashboardsEvent::FinishFilter,
                WebKey::Esc => DashboardsEvent::ClearFilter,
                _ => return,
            }
        } else {
            match key {
                // Number keys pick tabs while no text field has focus.
                WebKey::Char('1') => return self.switch_to(WebTab::Dashboards),
                WebKey::Char('2') => return self.switch_to(WebTab::Generate),
                WebKey::Char('/') => DashboardsEvent::StartFilter,
                WebKey::Char('r') => DashboardsEvent::Open,
                WebKey::Char('o') => DashboardsEvent::OpenEmbed,
                WebKey::Esc if self.dashboards.embed.is_some() => DashboardsEvent::CloseEmbed,
                WebKey::Esc => DashboardsEvent::ClearFilter,
                WebKey::Up => DashboardsEvent::SelectPrev,
                WebKey::Down => DashboardsEvent::SelectNext,
                WebKey::PageUp => DashboardsEvent::PageUp,
                WebKey::PageDown => DashboardsEvent::PageDown,
                WebKey::Home => DashboardsEvent::SelectFirst,
                WebKey::End => DashboardsEvent::SelectLast,
                WebKey::Enter => DashboardsEvent::Choose,
                _ => return,
            }
        };
        let update = self.dashboards.update(event);
        self.apply(update);
    }

    fn handle_generate_key(&mut self, key: WebKey) {
        let event = match key {
            WebKey::Enter => GeneratePageEvent::Submit,
            WebKey::F(2) => GeneratePageEvent::OpenDashboard,
            WebKey::Char(ch) => return self.generate.form.push(ch),
            WebKey::Backspace => return self.generate.form.pop(),
            WebKey::Left => return self.generate.form.prev_model(),
            WebKey::Right => return self.generate.form.next_model(),
            _ => return,
        };
        let update = self.generate.update(event);
        self.apply(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarterp_core::wire::{DashboardCreated, DashboardSummary};
    use smarterp_core::{ApiError, Request};

    const SERVER: &str = "http://localhost:8088/superset";

    fn app() -> WebApp {
        let mut app = WebApp::new(SERVER);
        app.take_effects();
        app
    }

    #[test]
    fn startup_fetches_the_dashboard_list() {
        let mut app = WebApp::new(SERVER);
        assert_eq!(
            app.take_effects(),
            vec![Effect::Request(Request::ListDashboards)]
        );
    }

    #[test]
    fn choosing_a_dashboard_requests_its_detail() {
        let mut app = app();
        app.apply_outcome(Outcome::DashboardsListed(Ok(vec![DashboardSummary {
            id: 3,
            dashboard_title: "Finance".to_string(),
        }])));
        app.handle_key(WebKey::Enter);
        assert_eq!(
            app.take_effects(),
            vec![Effect::Request(Request::DashboardDetail { id: 3 })]
        );
    }

    #[test]
    fn number_keys_are_text_on_the_generate_form() {
        let mut app = app();
        app.handle_key(WebKey::Char('2'));
        assert_eq!(app.tab, WebTab::Generate);

        app.handle_key(WebKey::Char('1'));
        assert_eq!(app.tab, WebTab::Generate);
        assert_eq!(app.generate.form.input, "1");
    }

    #[test]
    fn generate_form_submits_to_the_dashboard_routes() {
        let mut app = app();
        app.handle_key(WebKey::Tab);
        "sales by region".chars().for_each(|ch| app.handle_key(WebKey::Char(ch)));
        app.handle_key(WebKey::Right);
        app.handle_key(WebKey::Enter);

        assert_eq!(
            app.take_effects(),
            vec![Effect::Request(Request::GenerateDashboard {
                form: DashboardForm::GeneratePage,
                prompt: "sales by region".to_string(),
                llm: ModelChoice::Deepseek,
            })]
        );
    }

    #[test]
    fn generate_failure_is_shown_inline() {
        let mut app = app();
        app.handle_key(WebKey::Tab);
        app.apply_outcome(Outcome::DashboardGenerated {
            form: DashboardForm::GeneratePage,
            result: Err(ApiError::Rejected("Failed to generate dashboard".to_string())),
        });
        assert_eq!(
            app.generate.error.as_deref(),
            Some("Failed to generate dashboard")
        );

        app.apply_outcome(Outcome::DashboardGenerated {
            form: DashboardForm::GeneratePage,
            result: Ok(DashboardCreated {
                dashboard_url: Some("http://localhost:8088/superset/dashboard/2/".to_string()),
                ..DashboardCreated::default()
            }),
        });
        assert!(app.generate.dashboard_url.is_some());
    }

    #[test]
    fn returning_to_dashboards_refetches() {
        let mut app = app();
        app.apply_outcome(Outcome::DashboardsListed(Ok(Vec::new())));
        app.handle_key(WebKey::Tab);
        app.handle_key(WebKey::Tab);
        assert_eq!(
            app.take_effects(),
            vec![Effect::Request(Request::ListDashboards)]
        );
    }
}
