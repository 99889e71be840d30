use httpmock::prelude::*;
use scout::core::api::CareerClient;
use scout::domain::model::{PersonalInfo, ResumeData};
use scout::{AppConfig, Environment, SharedConfig};
use serde_json::json;

fn config_for(server: &MockServer) -> SharedConfig {
    let mut config = AppConfig::default();
    for api in [
        &mut config.apis.jobs,
        &mut config.apis.skills,
        &mut config.apis.resume,
        &mut config.apis.military,
    ] {
        api.endpoint = Some(server.base_url());
        api.key = "test-key".to_string();
    }
    config.resolve(Environment::Development)
}

#[tokio::test]
async fn test_job_search_posts_query_and_location() {
    let server = MockServer::start();
    let jobs_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/search")
            .header("Authorization", "Bearer test-key")
            .header("Content-Type", "application/json")
            .json_body(json!({"query": "engineer", "location": "Austin"}));
        then.status(200)
            .json_body(json!([{"title": "Engineer", "company": "Acme", "location": "Austin"}]));
    });

    let client = CareerClient::new(config_for(&server));
    let jobs = client.fetch_job_listings("engineer", "Austin").await.unwrap();

    jobs_mock.assert_hits(1);
    assert_eq!(jobs[0]["company"], "Acme");
}

#[tokio::test]
async fn test_skills_assessment_is_a_get_with_bearer() {
    let server = MockServer::start();
    let skills_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/assessment")
            .header("Authorization", "Bearer test-key");
        then.status(200).json_body(json!({
            "questions": [
                {"text": "Rate your leadership", "options": [{"value": "1", "text": "Low"}]}
            ]
        }));
    });

    let client = CareerClient::new(config_for(&server));
    let assessment = client.fetch_skills_assessment().await.unwrap();

    skills_mock.assert();
    assert_eq!(assessment.questions.len(), 1);
    assert_eq!(assessment.questions[0].options[0].text, "Low");
}

#[tokio::test]
async fn test_military_translation_posts_mos() {
    let server = MockServer::start();
    let military_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/translate")
            .json_body(json!({"mos": "25B"}));
        then.status(200).json_body(json!({
            "matches": [{"title": "Systems Administrator", "description": "IT support"}]
        }));
    });

    let client = CareerClient::new(config_for(&server));
    let translation = client.fetch_military_translation("25B").await.unwrap();

    military_mock.assert();
    assert_eq!(translation.matches[0].title, "Systems Administrator");
}

#[tokio::test]
async fn test_generate_resume_posts_resume_data() {
    let server = MockServer::start();
    let resume_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/generate").json_body(json!({
            "personal": {"name": "Pat Doe", "email": "pat@example.com", "phone": null},
            "experience": [],
            "education": [],
            "skills": []
        }));
        then.status(200).json_body(json!({
            "sections": [{"title": "Summary", "content": "<p>Veteran</p>"}]
        }));
    });

    let data = ResumeData {
        personal: PersonalInfo {
            name: Some("Pat Doe".to_string()),
            email: Some("pat@example.com".to_string()),
            phone: None,
        },
        ..Default::default()
    };

    let client = CareerClient::new(config_for(&server));
    let resume = client.generate_resume(&data).await.unwrap();

    resume_mock.assert();
    assert_eq!(resume.sections[0].content, "<p>Veteran</p>");
}

#[tokio::test]
async fn test_error_status_maps_to_configured_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/search");
        then.status(429);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/assessment");
        then.status(401);
    });

    let config = config_for(&server);
    let client = CareerClient::new(config.clone());
    let messages = &config.error_messages;

    let err = client.fetch_job_listings("nurse", "Denver").await.unwrap_err();
    assert_eq!(err.user_message(messages), Some(messages.api.rate_limit.as_str()));

    let err = client.fetch_skills_assessment().await.unwrap_err();
    assert_eq!(
        err.user_message(messages),
        Some(messages.api.unauthorized.as_str())
    );
}

#[tokio::test]
async fn test_configured_timeout_is_applied() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/translate");
        then.status(200)
            .delay(std::time::Duration::from_millis(500))
            .json_body(json!({"matches": []}));
    });

    let mut config = AppConfig::default();
    config.apis.military.endpoint = Some(server.base_url());
    config.apis.military.timeout = 50;
    let config = config.resolve(Environment::Development);

    let client = CareerClient::new(config.clone());
    let err = client.fetch_military_translation("11B").await.unwrap_err();
    assert_eq!(
        err.user_message(&config.error_messages),
        Some(config.error_messages.api.timeout.as_str())
    );
}

#[tokio::test]
async fn test_undecodable_body_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/assessment");
        then.status(200).body("<html>maintenance</html>");
    });

    let client = CareerClient::new(config_for(&server));
    assert!(client.fetch_skills_assessment().await.is_err());
}
