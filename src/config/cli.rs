use crate::config::ENVIRONMENT_VAR;
use crate::core::events::UiEvent;
use crate::domain::model::{AssessmentAnswers, PersonalInfo};
use crate::domain::module::ModuleName;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "scout")]
#[command(about = "SCOUT career platform client")]
pub struct Cli {
    /// Runtime environment: development, staging or production
    #[arg(long, env = ENVIRONMENT_VAR, default_value = "development", global = true)]
    pub env: String,

    /// TOML file overlaying the built-in configuration
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory or base URL holding the module fragments
    #[arg(long, default_value = "./fragments", global = true)]
    pub fragments: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load a module and print the page
    Load { module: String },

    /// Search job listings
    Search {
        #[arg(long)]
        title: String,
        #[arg(long)]
        location: Option<String>,
    },

    /// Keyword search
    Keyword {
        #[arg(long)]
        keywords: String,
        #[arg(long)]
        location: Option<String>,
    },

    /// Compare two careers
    Compare {
        #[arg(long)]
        career1: String,
        #[arg(long)]
        career2: String,
    },

    /// Fetch the skills assessment, optionally submitting answers (`q0=3`)
    Assess {
        #[arg(long = "answer", value_parser = parse_answer)]
        answers: Vec<(String, String)>,
    },

    /// Translate a military occupational specialty code
    Translate {
        #[arg(long)]
        mos: String,
    },

    /// Generate a resume
    Resume {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Print the resolved configuration
    Config,
}

fn parse_answer(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected QUESTION=VALUE, got '{}'", raw))
}

impl Command {
    /// The module a command runs in, with the event it submits once loaded.
    /// `default_location` fills in omitted locations.
    pub fn plan(&self, default_location: &str) -> Option<(ModuleName, Option<UiEvent>)> {
        let location = |value: &Option<String>| {
            value
                .clone()
                .unwrap_or_else(|| default_location.to_string())
        };

        let plan = match self {
            Command::Load { .. } | Command::Config => return None,
            Command::Search { title, location: loc } => (
                ModuleName::Opportunities,
                Some(UiEvent::JobSearchSubmitted {
                    title: title.clone(),
                    location: location(loc),
                }),
            ),
            Command::Keyword {
                keywords,
                location: loc,
            } => (
                ModuleName::Keyword,
                Some(UiEvent::KeywordSearchSubmitted {
                    keywords: keywords.clone(),
                    location: location(loc),
                }),
            ),
            Command::Compare { career1, career2 } => (
                ModuleName::Compare,
                Some(UiEvent::CareersChanged {
                    career1: career1.clone(),
                    career2: career2.clone(),
                }),
            ),
            Command::Assess { answers } => {
                let event = (!answers.is_empty()).then(|| UiEvent::SkillsSubmitted {
                    answers: answers.iter().cloned().collect::<AssessmentAnswers>(),
                });
                (ModuleName::Skills, event)
            }
            Command::Translate { mos } => (
                ModuleName::Military,
                Some(UiEvent::MosSubmitted { mos: mos.clone() }),
            ),
            Command::Resume { name, email, phone } => (
                ModuleName::Resume,
                Some(UiEvent::GenerateResumeClicked {
                    personal: PersonalInfo {
                        name: name.clone(),
                        email: email.clone(),
                        phone: phone.clone(),
                    },
                }),
            ),
        };
        Some(plan)
    }
}
