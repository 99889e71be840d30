use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Response payloads are read leniently: absent fields become empty strings or
// lists rather than failing the whole response.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSearchRequest {
    pub query: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assessment {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerOption {
    pub value: String,
    pub text: String,
}

/// Answers keyed by question field name (`q0`, `q1`, ...).
pub type AssessmentAnswers = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub mos: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilitaryTranslation {
    pub matches: Vec<CareerMatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerMatch {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal: PersonalInfo,
    pub experience: Vec<serde_json::Value>,
    pub education: Vec<serde_json::Value>,
    pub skills: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedResume {
    pub sections: Vec<ResumeSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeSection {
    pub title: String,
    /// Markup, inserted as-is.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_job_listing() {
        let jobs: Vec<JobListing> =
            serde_json::from_value(json!([{"title": "Engineer", "salary": 120000}])).unwrap();
        assert_eq!(jobs[0].title, "Engineer");
        assert!(jobs[0].company.is_empty());
    }

    #[test]
    fn test_resume_data_shape() {
        let data = ResumeData {
            personal: PersonalInfo {
                name: Some("Pat Doe".to_string()),
                email: None,
                phone: None,
            },
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "personal": {"name": "Pat Doe", "email": null, "phone": null},
                "experience": [],
                "education": [],
                "skills": []
            })
        );
    }
}
