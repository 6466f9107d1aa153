//! Skill-Gap Differ — compares model-derived required skills against what the user knows.
//!
//! Algorithm:
//! 1. Ask the model for the skills a career needs (one call).
//! 2. Split the answer on commas, normalize, drop empties → `required` (model order).
//! 3. Normalize the caller's skills → `known`.
//! 4. `missing` = `required` entries absent from `known`, order preserved.

use std::collections::HashSet;

use tracing::warn;

use crate::counsel::prompts::{build_course_prompt, build_skill_extraction_prompt};
use crate::llm_client::{ModelGateway, ModelText};

/// Returned in place of course suggestions when nothing is missing.
pub const NO_SKILL_GAP: &str = "No skill gap detected.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGap {
    pub required_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Trims and title-cases a skill name.
///
/// A cased character that follows another cased character is lower-cased;
/// any other cased character is title-cased. Uncased characters (digits,
/// punctuation, CJK) pass through and end the current word.
/// "node.js" → "Node.Js", "3d modelling" → "3D Modelling", "机器learning" → "机器Learning".
pub fn normalize_skill(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_is_cased = false;
    for c in raw.trim().chars() {
        if prev_is_cased {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(&mut out, c);
        }
        prev_is_cased = is_cased(c);
    }
    out
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

/// Upper-cases `c`; when that expands to several characters ("ß" → "SS")
/// only the first stays upper, so "ß" → "Ss".
fn push_titlecase(out: &mut String, c: char) {
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}

/// Pure diff of a comma-separated skill list against the user's known skills.
pub fn diff_skills(skills_text: &str, known_skills: &[String]) -> SkillGap {
    let required_skills: Vec<String> = skills_text
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(normalize_skill)
        .collect();

    let known: HashSet<String> = known_skills.iter().map(|s| normalize_skill(s)).collect();

    let missing_skills = required_skills
        .iter()
        .filter(|s| !known.contains(*s))
        .cloned()
        .collect();

    SkillGap {
        required_skills,
        missing_skills,
    }
}

/// Extracts the skills `career` needs via the model and diffs them against `known_skills`.
///
/// A failed extraction is diffed as its marker text, so the marker shows up as a
/// (bogus) required skill. Callers that care can check `ModelText::is_failed` on
/// the returned extraction.
pub async fn analyze_skill_gap(
    llm: &dyn ModelGateway,
    career: &str,
    known_skills: &[String],
) -> (SkillGap, ModelText) {
    let extraction = llm
        .generate_text(&build_skill_extraction_prompt(career))
        .await;

    if extraction.is_failed() {
        warn!("Skill extraction failed; marker text will be diffed as a skill");
    }

    let gap = diff_skills(&extraction.as_wire_text(), known_skills);
    (gap, extraction)
}

/// What the course step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseSuggestion {
    NoGap,
    Suggested(ModelText),
}

impl CourseSuggestion {
    pub fn into_text(self) -> ModelText {
        match self {
            CourseSuggestion::NoGap => ModelText::Generated(NO_SKILL_GAP.to_string()),
            CourseSuggestion::Suggested(text) => text,
        }
    }
}

/// Asks the model for beginner courses covering `missing_skills`.
/// Makes no model call when nothing is missing.
pub async fn suggest_courses(llm: &dyn ModelGateway, missing_skills: &[String]) -> CourseSuggestion {
    if missing_skills.is_empty() {
        return CourseSuggestion::NoGap;
    }
    CourseSuggestion::Suggested(llm.generate_text(&build_course_prompt(missing_skills)).await)
}
