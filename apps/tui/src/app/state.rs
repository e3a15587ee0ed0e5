use crate::config::AppConfig;
use smarterp_core::pages::dashboards::{DashboardsEvent, DashboardsState};
use smarterp_core::pages::explainer::{ExplainerEvent, ExplainerState, Stamp};
use smarterp_core::pages::generate_page::{GeneratePageEvent, GeneratePageState};
use smarterp_core::pages::generator::{GeneratorEvent, GeneratorState};
use smarterp_core::pages::history::{HistoryEvent, HistoryState};
use smarterp_core::pages::query::{QueryEvent, QueryState};
use smarterp_core::pages::settings::{SettingsEvent, SettingsState};
use smarterp_core::{BannerSlot, DashboardForm, Effect, ModelChoice, Notice, Outcome, Update};
use std::time::{Duration, Instant};

/// Routed pages, in navbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Query,
    Generator,
    Explainer,
    Dashboards,
    GeneratePage,
    History,
    Settings,
}

impl AppScreen {
    pub const ALL: [Self; 7] = [
        Self::Query,
        Self::Generator,
        Self::Explainer,
        Self::Dashboards,
        Self::GeneratePage,
        Self::History,
        Self::Settings,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Query => "SQL",
            Self::Generator => "Dashboard",
            Self::Explainer => "Explain",
            Self::Dashboards => "Dashboards",
            Self::GeneratePage => "Generate",
            Self::History => "History",
            Self::Settings => "Settings",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Query => 0,
            Self::Generator => 1,
            Self::Explainer => 2,
            Self::Dashboards => 3,
            Self::GeneratePage => 4,
            Self::History => 5,
            Self::Settings => 6,
        }
    }

    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn prev(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub banner: BannerSlot,
    pub config: AppConfig,
    pub query: QueryState,
    pub generator: GeneratorState,
    pub explainer: ExplainerState,
    pub dashboards: DashboardsState,
    pub generate_page: GeneratePageState,
    pub history: HistoryState,
    pub settings: SettingsState,
    pub animation_counter: f64,
    pub last_frame: Instant,
    outbox: Vec<Effect>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let model = config.default_model;
        Self {
            running: true,
            screen: AppScreen::Query,
            show_help: false,
            banner: BannerSlot::new(),
            query: QueryState::new(model),
            generator: GeneratorState::new(model),
            explainer: ExplainerState::new(model),
            dashboards: DashboardsState::new(config.dashboard_server_url.clone()),
            generate_page: GeneratePageState::new(model),
            history: HistoryState::default(),
            settings: SettingsState::new(model),
            animation_counter: 0.0,
            last_frame: Instant::now(),
            outbox: Vec::new(),
            config,
        }
    }

    /// Advance per-frame clocks: the spinner and the banner timeout.
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.tick(delta);
    }

    pub fn tick(&mut self, delta: Duration) {
        self.banner.tick(delta);

        // Cycles between 0 and 2*PI
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    /// Record what a reducer asked for: the notice goes to the banner slot,
    /// the effect waits in the outbox for the event loop.
    pub fn apply(&mut self, update: Update) {
        if let Some(notice) = update.notice {
            self.banner.show(notice);
        }
        if let Some(effect) = update.effect {
            self.outbox.push(effect);
        }
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.outbox)
    }

    pub fn notify(&mut self, notice: Notice) {
        self.banner.show(notice);
    }

    /// Navigate to a page. Data pages refetch on every visit.
    pub fn switch_to(&mut self, screen: AppScreen) {
        if self.screen == screen {
            return;
        }
        self.screen = screen;

        let update = match screen {
            AppScreen::Dashboards => self.dashboards.update(DashboardsEvent::Open),
            AppScreen::History => self.history.update(HistoryEvent::Open),
            _ => Update::none(),
        };
        self.apply(update);
    }

    /// Hand a settled request back to the page that issued it.
    pub fn apply_outcome(&mut self, outcome: Outcome) {
        let update = match outcome {
            Outcome::SqlGenerated(result) => self.query.update(QueryEvent::Settled(result)),
            Outcome::DashboardGenerated { form, result } => match form {
                DashboardForm::Generator => self.generator.update(GeneratorEvent::Settled(result)),
                DashboardForm::GeneratePage => {
                    self.generate_page.update(GeneratePageEvent::Settled(result))
                }
            },
            Outcome::DataExplained { question, result } => {
                self.explainer.update(ExplainerEvent::Settled {
                    question,
                    result,
                    stamp: now_stamp(),
                })
            }
            Outcome::DashboardsListed(result) => {
                self.dashboards.update(DashboardsEvent::Listed(result))
            }
            Outcome::DashboardDetailLoaded { id, result } => self
                .dashboards
                .update(DashboardsEvent::DetailLoaded { id, result }),
            Outcome::QueryHistoryLoaded(result) => {
                self.history.update(HistoryEvent::Loaded(result))
            }
            Outcome::PreferenceUpdated { model, result } => {
                let saved = result.is_ok();
                let update = self.settings.update(SettingsEvent::Saved { model, result });
                if saved {
                    self.use_model_everywhere(model);
                }
                update
            }
        };
        self.apply(update);
    }

    fn use_model_everywhere(&mut self, model: ModelChoice) {
        self.query.form.model = model;
        self.generator.form.model = model;
        self.explainer.form.model = model;
        self.generate_page.form.model = model;
    }
}

fn now_stamp() -> Stamp {
    let now = chrono::Local::now();
    Stamp {
        millis: u64::try_from(now.timestamp_millis()).unwrap_or_default(),
        display: now.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarterp_core::wire::{DashboardCreated, DashboardSummary, Explanation};
    use smarterp_core::{ApiError, Request, Severity};

    fn app() -> App {
        App::new(AppConfig::default())
    }

    #[test]
    fn navbar_wraps_around() {
        assert_eq!(AppScreen::Settings.next(), AppScreen::Query);
        assert_eq!(AppScreen::Query.prev(), AppScreen::Settings);
    }

    #[test]
    fn visiting_dashboards_fetches_the_list_each_time() {
        let mut app = app();
        app.switch_to(AppScreen::Dashboards);
        assert_eq!(
            app.take_effects(),
            vec![Effect::Request(Request::ListDashboards)]
        );

        app.apply_outcome(Outcome::DashboardsListed(Ok(vec![DashboardSummary {
            id: 1,
            dashboard_title: "Sales".to_string(),
        }])));
        app.switch_to(AppScreen::Query);
        app.switch_to(AppScreen::Dashboards);
        assert_eq!(
            app.take_effects(),
            vec![Effect::Request(Request::ListDashboards)]
        );
    }

    #[test]
    fn explanation_outcome_prepends_with_a_timestamp() {
        let mut app = app();
        app.apply_outcome(Outcome::DataExplained {
            question: "Why did sales drop?".to_string(),
            result: Ok(Explanation {
                answer: "Seasonality".to_string(),
                insights: None,
            }),
        });

        let record = &app.explainer.history[0];
        assert_eq!(record.question, "Why did sales drop?");
        assert!(!record.timestamp.is_empty());
    }

    #[test]
    fn failed_outcome_lands_in_the_banner() {
        let mut app = app();
        app.apply_outcome(Outcome::SqlGenerated(Err(ApiError::Server {
            status: 500,
            message: Some("Gemini quota exceeded".to_string()),
        })));

        let notice = app.banner.current().expect("banner shown");
        assert_eq!(notice.message, "Gemini quota exceeded");
        assert_eq!(notice.severity, Severity::Error);
    }

    #[test]
    fn generated_dashboard_returns_to_the_form_that_asked() {
        let mut app = app();
        app.apply_outcome(Outcome::DashboardGenerated {
            form: DashboardForm::Generator,
            result: Ok(DashboardCreated {
                dashboard_url: Some("http://localhost:8088/superset/dashboard/5/".to_string()),
                ..DashboardCreated::default()
            }),
        });

        assert_eq!(
            app.generator.dashboard_url.as_deref(),
            Some("http://localhost:8088/superset/dashboard/5/")
        );
        assert_eq!(app.generate_page.dashboard_url, None);

        app.apply_outcome(Outcome::DashboardGenerated {
            form: DashboardForm::GeneratePage,
            result: Err(ApiError::Rejected("Failed to generate dashboard".to_string())),
        });

        assert_eq!(
            app.generate_page.error.as_deref(),
            Some("Failed to generate dashboard")
        );
        assert_eq!(
            app.generator.dashboard_url.as_deref(),
            Some("http://localhost:8088/superset/dashboard/5/")
        );
    }

    #[test]
    fn saved_preference_becomes_every_form_default() {
        let mut app = app();
        app.apply_outcome(Outcome::PreferenceUpdated {
            model: ModelChoice::Deepseek,
            result: Ok(()),
        });

        assert_eq!(app.query.form.model, ModelChoice::Deepseek);
        assert_eq!(app.generator.form.model, ModelChoice::Deepseek);
        assert_eq!(app.explainer.form.model, ModelChoice::Deepseek);
        assert_eq!(app.generate_page.form.model, ModelChoice::Deepseek);
    }

    #[test]
    fn banner_expires_with_frame_time() {
        let mut app = app();
        app.notify(Notice::success("done"));
        app.tick(Duration::from_secs(7));
        assert!(!app.banner.is_visible());
    }
}
