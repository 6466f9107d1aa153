// All LLM prompt templates for the counselling pipeline.
// User text is interpolated as-is; nothing is escaped.

use crate::counsel::classifier::UserCategory;

/// Personality analysis. Replace `{answers}` before sending.
pub const PERSONALITY_PROMPT_TEMPLATE: &str = "Analyze personality traits from this text:\n{answers}";

/// Career recommendation. Replace `{traits}` and `{answers}` before sending.
/// The answer is asked for in JSON but is passed downstream as opaque text.
pub const CAREER_PROMPT_TEMPLATE: &str = r#"Based on traits:
{traits}
and interests:
{answers}

Suggest ONE best-fit career in JSON."#;

/// Skill extraction. Replace `{career}` before sending.
pub const SKILL_EXTRACTION_PROMPT_TEMPLATE: &str = "List skills required for this career:\n{career}";

/// Course suggestion. Replace `{skills}` with a comma-separated list.
pub const COURSE_PROMPT_TEMPLATE: &str = "Suggest beginner-friendly courses for: {skills}";

/// Chat prompts, one per category. Replace `{conversation}` before sending.
pub const SCHOOL_CHAT_PROMPT_TEMPLATE: &str = r#"You are a career counsellor for SCHOOL students.
Conversation so far:
{conversation}
Ask ONE interest-based question."#;

pub const SENIOR_CHAT_PROMPT_TEMPLATE: &str = r#"You are a career counsellor for 11th–12th students.
Conversation so far:
{conversation}
Ask ONE subject/stream preference question."#;

pub const COLLEGE_CHAT_PROMPT_TEMPLATE: &str = r#"You are a career counsellor for COLLEGE students.
Conversation so far:
{conversation}
If skills are not mentioned, ask about skills.
Otherwise ask about career goals."#;

pub fn build_personality_prompt(answers: &str) -> String {
    PERSONALITY_PROMPT_TEMPLATE.replace("{answers}", answers)
}

pub fn build_career_prompt(traits: &str, answers: &str) -> String {
    // `{answers}` first: traits come from the model and may contain the literal `{answers}`.
    CAREER_PROMPT_TEMPLATE
        .replace("{answers}", answers)
        .replacen("{traits}", traits, 1)
}

pub fn build_skill_extraction_prompt(career: &str) -> String {
    SKILL_EXTRACTION_PROMPT_TEMPLATE.replace("{career}", career)
}

pub fn build_course_prompt(missing_skills: &[String]) -> String {
    COURSE_PROMPT_TEMPLATE.replace("{skills}", &missing_skills.join(", "))
}

/// Picks the follow-up-question prompt for the user's stage.
pub fn build_chat_prompt(category: UserCategory, conversation: &str) -> String {
    let template = match category {
        UserCategory::SchoolStudent => SCHOOL_CHAT_PROMPT_TEMPLATE,
        UserCategory::SeniorSchool => SENIOR_CHAT_PROMPT_TEMPLATE,
        UserCategory::CollegeStudent => COLLEGE_CHAT_PROMPT_TEMPLATE,
    };
    template.replace("{conversation}", conversation)
}
