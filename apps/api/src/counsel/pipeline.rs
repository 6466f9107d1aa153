//! Counselling pipelines — the sequence of model calls behind `/chat` and `/analyze`.
//!
//! Every call is awaited before the next is built; later prompts embed earlier answers.
//! A failed call does not stop the pipeline, it flows on as `ModelText::Failed`.

use serde::Serialize;
use tracing::info;

use crate::counsel::classifier::{classify, UserCategory};
use crate::counsel::prompts::{build_career_prompt, build_chat_prompt, build_personality_prompt};
use crate::counsel::skill_gap::{analyze_skill_gap, suggest_courses};
use crate::llm_client::{ModelGateway, ModelText};
use crate::models::conversation::{render_transcript, ConversationMessage};

/// Attached to non-college analyses in place of the skill-gap fields.
pub const SKILL_GAP_SKIPPED_NOTE: &str = "Skill gap analysis not required.";

#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub category: UserCategory,
    pub reply: ModelText,
}

/// Result of `/analyze`. Skill-gap fields and `note` are mutually exclusive.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub category: UserCategory,
    pub traits: ModelText,
    pub career_recommendation: ModelText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<ModelText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Set when `required_skills` was diffed from a failed extraction's marker text.
    #[serde(skip)]
    pub skill_extraction_failed: bool,
}

impl AnalysisResult {
    /// True if any model-produced field is a degraded marker.
    pub fn is_degraded(&self) -> bool {
        self.traits.is_failed()
            || self.career_recommendation.is_failed()
            || self.skill_extraction_failed
            || self.courses.as_ref().is_some_and(ModelText::is_failed)
    }
}

/// Asks the model for one stage-appropriate follow-up question.
pub async fn run_chat(
    llm: &dyn ModelGateway,
    age: i64,
    messages: &[ConversationMessage],
) -> ChatReply {
    let category = classify(age);
    let prompt = build_chat_prompt(category, &render_transcript(messages));
    let reply = llm.generate_text(&prompt).await;

    ChatReply { category, reply }
}

/// Personality → career, then for college students skill gap → courses.
pub async fn run_analysis(
    llm: &dyn ModelGateway,
    age: i64,
    answers: &str,
    known_skills: &[String],
) -> AnalysisResult {
    let category = classify(age);

    let traits = llm.generate_text(&build_personality_prompt(answers)).await;
    let career_recommendation = llm
        .generate_text(&build_career_prompt(&traits.as_wire_text(), answers))
        .await;

    if !category.wants_skill_gap() {
        return AnalysisResult {
            category,
            traits,
            career_recommendation,
            required_skills: None,
            missing_skills: None,
            courses: None,
            note: Some(SKILL_GAP_SKIPPED_NOTE.to_string()),
            skill_extraction_failed: false,
        };
    }

    let (gap, extraction) =
        analyze_skill_gap(llm, &career_recommendation.as_wire_text(), known_skills).await;
    let courses = suggest_courses(llm, &gap.missing_skills).await.into_text();

    info!(
        "Skill gap computed: required={}, missing={}",
        gap.required_skills.len(),
        gap.missing_skills.len()
    );

    AnalysisResult {
        category,
        traits,
        career_recommendation,
        required_skills: Some(gap.required_skills),
        missing_skills: Some(gap.missing_skills),
        courses: Some(courses),
        note: None,
        skill_extraction_failed: extraction.is_failed(),
    }
}
