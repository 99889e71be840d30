//! Template-string views for API responses.

use crate::domain::model::{
    Assessment, AssessmentAnswers, GeneratedResume, JobListing, MilitaryTranslation,
    SearchResult,
};
use crate::utils::error::Result;
use crate::utils::html::escape;

pub fn comparison_results(data: &serde_json::Value) -> Result<String> {
    let pretty = serde_json::to_string_pretty(data)?;
    Ok(format!("<pre>{}</pre>", escape(&pretty)))
}

pub fn job_results(jobs: &[JobListing]) -> String {
    jobs.iter()
        .map(|job| {
            format!(
                r#"
<div class="job-card">
    <h3>{}</h3>
    <p>{}</p>
    <p>{}</p>
</div>"#,
                escape(&job.title),
                escape(&job.company),
                escape(&job.location)
            )
        })
        .collect()
}

pub fn search_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|result| {
            format!(
                r#"
<div class="search-result">
    <h3>{}</h3>
    <p>{}</p>
</div>"#,
                escape(&result.title),
                escape(&result.description)
            )
        })
        .collect()
}

pub fn assessment_questions(assessment: &Assessment) -> String {
    assessment
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let options: String = question
                .options
                .iter()
                .map(|opt| {
                    format!(
                        r#"
        <label>
            <input type="radio" name="q{}" value="{}">
            {}
        </label>"#,
                        index,
                        escape(&opt.value),
                        escape(&opt.text)
                    )
                })
                .collect();

            format!(
                r#"
<div class="question" data-id="{}">
    <h4>{}</h4>
    <div class="options">{}
    </div>
</div>"#,
                index,
                escape(&question.text),
                options
            )
        })
        .collect()
}

pub fn skills_results(answers: &AssessmentAnswers) -> String {
    format!(
        r#"
<div class="skills-results">
    <h3>Your Skills Assessment Results</h3>
    <p class="answered">{} questions answered</p>
    <div class="skills-chart"></div>
</div>"#,
        answers.len()
    )
}

pub fn military_results(translation: &MilitaryTranslation) -> String {
    let matches: String = translation
        .matches
        .iter()
        .map(|m| {
            format!(
                r#"
    <div class="career-match">
        <h4>{}</h4>
        <p>{}</p>
    </div>"#,
                escape(&m.title),
                escape(&m.description)
            )
        })
        .collect();

    format!(
        r#"
<div class="translation-results">
    <h3>Civilian Career Matches</h3>{}
</div>"#,
        matches
    )
}

pub fn generated_resume(resume: &GeneratedResume) -> String {
    let sections: String = resume
        .sections
        .iter()
        .map(|section| {
            format!(
                r#"
        <div class="resume-section">
            <h4>{}</h4>
            {}
        </div>"#,
                escape(&section.title),
                section.content
            )
        })
        .collect();

    format!(
        r#"
<div class="generated-resume">
    <h3>Generated Resume</h3>
    <div class="resume-content">{}
    </div>
</div>"#,
        sections
    )
}
