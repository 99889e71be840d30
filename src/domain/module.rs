use crate::config::FeatureFlags;
use crate::utils::error::ScoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A UI section with its own fragment and initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleName {
    Compare,
    Opportunities,
    Keyword,
    Skills,
    Military,
    Resume,
}

impl ModuleName {
    pub const ALL: [ModuleName; 6] = [
        ModuleName::Compare,
        ModuleName::Opportunities,
        ModuleName::Keyword,
        ModuleName::Skills,
        ModuleName::Military,
        ModuleName::Resume,
    ];

    /// Loaded when the page starts.
    pub const DEFAULT: ModuleName = ModuleName::Opportunities;

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleName::Compare => "compare",
            ModuleName::Opportunities => "opportunities",
            ModuleName::Keyword => "keyword",
            ModuleName::Skills => "skills",
            ModuleName::Military => "military",
            ModuleName::Resume => "resume",
        }
    }

    pub fn fragment_file(&self) -> String {
        format!("{}.html", self.as_str())
    }

    pub fn is_enabled(&self, features: &FeatureFlags) -> bool {
        match self {
            ModuleName::Compare => features.compare_jobs,
            ModuleName::Skills => features.skills_assessment,
            ModuleName::Military => features.military_translator,
            ModuleName::Resume => features.resume_builder,
            ModuleName::Opportunities | ModuleName::Keyword => true,
        }
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleName {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleName::ALL
            .into_iter()
            .find(|module| module.as_str() == s)
            .ok_or_else(|| ScoutError::UnknownModuleError {
                name: s.to_string(),
            })
    }
}
