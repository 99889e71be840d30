use crate::config::SharedConfig;
use crate::core::api::CareerClient;
use crate::core::events::{self, EventOutcome, Trigger, UiEvent};
use crate::core::page::{Binding, ErrorBlock, Page};
use crate::core::render;
use crate::domain::model::{
    AssessmentAnswers, JobListing, PersonalInfo, ResumeData, SearchResult,
};
use crate::domain::module::ModuleName;
use crate::utils::error::{Result, ScoutError};

/// Per-module bindings and the handlers behind them.
#[derive(Debug, Clone)]
pub struct ModuleHandlers {
    config: SharedConfig,
    client: CareerClient,
    page: Page,
}

impl ModuleHandlers {
    pub fn new(config: SharedConfig, page: Page) -> Self {
        Self {
            client: CareerClient::new(config.clone()),
            config,
            page,
        }
    }

    /// Attaches the module's binding if its trigger element is present.
    /// A resume tool without its generate button is a broken fragment.
    pub async fn initialize(&self, module: ModuleName) -> Result<()> {
        match module {
            ModuleName::Compare => self.attach(module, Trigger::Change, events::CAREER_SELECT),
            ModuleName::Opportunities => {
                self.attach(module, Trigger::Submit, events::JOB_SEARCH_FORM)
            }
            ModuleName::Keyword => self.attach(module, Trigger::Submit, events::SEARCH_TOOL),
            ModuleName::Skills => self.initialize_skills().await,
            ModuleName::Military => self.attach(module, Trigger::Submit, events::MILITARY_TOOL),
            ModuleName::Resume => {
                if self.page.has_element(events::RESUME_TOOL) {
                    if !self.page.has_element(events::RESUME_GENERATE_BUTTON) {
                        return Err(ScoutError::RenderError {
                            message: format!(
                                "{} has no {}",
                                events::RESUME_TOOL,
                                events::RESUME_GENERATE_BUTTON
                            ),
                        });
                    }
                    self.attach(module, Trigger::Click, events::RESUME_GENERATE_BUTTON);
                }
            }
        }
        Ok(())
    }

    async fn initialize_skills(&self) {
        if !self.page.has_element(events::SKILLS_FORM) {
            return;
        }

        match self.client.fetch_skills_assessment().await {
            Ok(assessment) => {
                self.page.render_region(
                    events::ASSESSMENT_CONTENT,
                    render::assessment_questions(&assessment),
                );
            }
            Err(e) => self.report(e, "skills assessment"),
        }

        self.attach(ModuleName::Skills, Trigger::Submit, events::SKILLS_FORM);
    }

    fn attach(&self, module: ModuleName, trigger: Trigger, selector: &'static str) {
        if !self.page.has_element(selector) {
            tracing::debug!("{}: {} not found, nothing to bind", module, selector);
            return;
        }
        if self.page.bind(Binding {
            module,
            trigger,
            selector,
        }) {
            tracing::debug!("{}: bound {:?} on {}", module, trigger, selector);
        }
    }

    /// Runs the handler bound to the event's target. Events nothing is bound
    /// to are ignored.
    pub async fn handle(&self, event: UiEvent) -> EventOutcome {
        let Some((trigger, selector)) = event.target() else {
            return EventOutcome::Ignored;
        };
        if self.page.binding_for(trigger, selector).is_none() {
            tracing::debug!("No binding for {:?} on {}, ignoring", trigger, selector);
            return EventOutcome::Ignored;
        }

        match event {
            UiEvent::CareersChanged { career1, career2 } => {
                self.on_careers_changed(&career1, &career2).await
            }
            UiEvent::JobSearchSubmitted { title, location } => {
                self.on_job_search(&title, &location).await
            }
            UiEvent::KeywordSearchSubmitted { keywords, location } => {
                self.on_keyword_search(&keywords, &location).await
            }
            UiEvent::SkillsSubmitted { answers } => self.on_skills_submitted(answers),
            UiEvent::MosSubmitted { mos } => self.on_mos_submitted(&mos).await,
            UiEvent::GenerateResumeClicked { personal } => self.on_generate_resume(personal).await,
            UiEvent::NavClicked(_) | UiEvent::RetryClicked(_) => EventOutcome::Ignored,
        }
    }

    async fn on_careers_changed(&self, career1: &str, career2: &str) -> EventOutcome {
        if career1.is_empty() || career2.is_empty() {
            return EventOutcome::Ignored;
        }

        let _loading = self.page.loading();
        // the comparison reuses the job search with the second career as location
        let result = self.client.fetch_job_listings(career1, career2).await;
        self.display(result, "job listings", |data| {
            if data.is_null() {
                return Ok(None);
            }
            Ok(Some((events::COMPARISON_RESULTS, render::comparison_results(&data)?)))
        })
    }

    async fn on_job_search(&self, title: &str, location: &str) -> EventOutcome {
        let _loading = self.page.loading();
        let result = self.client.fetch_job_listings(title, location).await;
        self.display(result, "job listings", |data| {
            if data.is_null() {
                return Ok(None);
            }
            let jobs: Vec<JobListing> = serde_json::from_value(data)?;
            Ok(Some((events::JOB_RESULTS, render::job_results(&jobs))))
        })
    }

    async fn on_keyword_search(&self, keywords: &str, location: &str) -> EventOutcome {
        let _loading = self.page.loading();
        let result = self.client.fetch_job_listings(keywords, location).await;
        self.display(result, "job listings", |data| {
            if data.is_null() {
                return Ok(None);
            }
            let results: Vec<SearchResult> = serde_json::from_value(data)?;
            Ok(Some((events::SEARCH_RESULTS, render::search_results(&results))))
        })
    }

    fn on_skills_submitted(&self, answers: AssessmentAnswers) -> EventOutcome {
        let _loading = self.page.loading();
        tracing::info!("Skills assessment submitted with {} answers", answers.len());
        self.page
            .render_region(events::ASSESSMENT_CONTENT, render::skills_results(&answers));
        self.page.reveal(events::COMPLETION_MESSAGE);
        EventOutcome::Handled
    }

    async fn on_mos_submitted(&self, mos: &str) -> EventOutcome {
        let _loading = self.page.loading();
        let result = self.client.fetch_military_translation(mos).await;
        self.display(result, "military translation", |translation| {
            Ok(Some((
                events::MILITARY_RESULTS,
                render::military_results(&translation),
            )))
        })
    }

    async fn on_generate_resume(&self, personal: PersonalInfo) -> EventOutcome {
        let data = ResumeData {
            personal,
            ..Default::default()
        };

        let _loading = self.page.loading();
        let result = self.client.generate_resume(&data).await;
        self.display(result, "resume generation", |resume| {
            Ok(Some((events::RESUME_SECTIONS, render::generated_resume(&resume))))
        })
    }

    /// Renders a successful response into its region, or reports the failure.
    fn display<T, F>(&self, result: Result<T>, label: &str, view: F) -> EventOutcome
    where
        F: FnOnce(T) -> Result<Option<(&'static str, String)>>,
    {
        match result.and_then(view) {
            Ok(Some((selector, html))) => {
                self.page.render_region(selector, html);
                EventOutcome::Handled
            }
            Ok(None) => EventOutcome::Handled,
            Err(e) => {
                self.report(e, label);
                EventOutcome::Failed
            }
        }
    }

    fn report(&self, err: ScoutError, label: &str) {
        tracing::error!(
            "Error fetching {}: {} (Category: {:?})",
            label,
            err,
            err.category()
        );

        let retry = self.page.current_module().unwrap_or(ModuleName::DEFAULT);
        let detail = err
            .user_message(&self.config.error_messages)
            .map(str::to_string);
        self.page.show_error(ErrorBlock {
            label: label.to_string(),
            retry,
            detail,
        });
    }
}
