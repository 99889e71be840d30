use crate::domain::model::{AssessmentAnswers, PersonalInfo};
use crate::domain::module::ModuleName;

// Elements the initializers bind to.
pub const CAREER_SELECT: &str = ".career-select";
pub const JOB_SEARCH_FORM: &str = ".job-search";
pub const SEARCH_TOOL: &str = ".search-tool";
pub const SKILLS_FORM: &str = "#skillsForm";
pub const MILITARY_TOOL: &str = ".military-tool";
pub const RESUME_TOOL: &str = ".resume-tool";
pub const RESUME_GENERATE_BUTTON: &str = ".resume-tool .generate-btn";

// Result regions.
pub const COMPARISON_RESULTS: &str = ".comparison-results";
pub const JOB_RESULTS: &str = ".job-results";
pub const SEARCH_RESULTS: &str = ".search-results";
pub const ASSESSMENT_CONTENT: &str = ".assessment-content";
pub const COMPLETION_MESSAGE: &str = ".completion-message";
pub const MILITARY_RESULTS: &str = ".military-results";
pub const RESUME_SECTIONS: &str = ".resume-sections";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Submit,
    Change,
    Click,
}

/// User interactions the page reacts to. Form events carry the values read
/// from their inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    NavClicked(ModuleName),
    RetryClicked(ModuleName),
    CareersChanged { career1: String, career2: String },
    JobSearchSubmitted { title: String, location: String },
    KeywordSearchSubmitted { keywords: String, location: String },
    SkillsSubmitted { answers: AssessmentAnswers },
    MosSubmitted { mos: String },
    GenerateResumeClicked { personal: PersonalInfo },
}

impl UiEvent {
    /// The element and trigger a binding must exist for. Navigation and retry
    /// controls live outside the container and are always live.
    pub fn target(&self) -> Option<(Trigger, &'static str)> {
        match self {
            UiEvent::NavClicked(_) | UiEvent::RetryClicked(_) => None,
            UiEvent::CareersChanged { .. } => Some((Trigger::Change, CAREER_SELECT)),
            UiEvent::JobSearchSubmitted { .. } => Some((Trigger::Submit, JOB_SEARCH_FORM)),
            UiEvent::KeywordSearchSubmitted { .. } => Some((Trigger::Submit, SEARCH_TOOL)),
            UiEvent::SkillsSubmitted { .. } => Some((Trigger::Submit, SKILLS_FORM)),
            UiEvent::MosSubmitted { .. } => Some((Trigger::Submit, MILITARY_TOOL)),
            UiEvent::GenerateResumeClicked { .. } => {
                Some((Trigger::Click, RESUME_GENERATE_BUTTON))
            }
        }
    }
}

/// What happened to a dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    Failed,
    /// No binding for the event, or nothing to do.
    Ignored,
}
