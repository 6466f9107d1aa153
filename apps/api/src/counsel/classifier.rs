//! User Classifier — maps an age onto the counselling stage that drives prompt selection.

use serde::Serialize;

/// The stage a user is counselled at. Serializes as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UserCategory {
    #[serde(rename = "School Student (≤10th)")]
    SchoolStudent,
    #[serde(rename = "Senior School (11th–12th)")]
    SeniorSchool,
    #[serde(rename = "College Student")]
    CollegeStudent,
}

impl UserCategory {
    pub fn label(self) -> &'static str {
        match self {
            UserCategory::SchoolStudent => "School Student (≤10th)",
            UserCategory::SeniorSchool => "Senior School (11th–12th)",
            UserCategory::CollegeStudent => "College Student",
        }
    }

    /// Only college students get skill-gap and course analysis.
    pub fn wants_skill_gap(self) -> bool {
        matches!(self, UserCategory::CollegeStudent)
    }
}

/// Ages are not range-checked: anything at or below 15, negatives included,
/// is a school student.
pub fn classify(age: i64) -> UserCategory {
    match age {
        ..=15 => UserCategory::SchoolStudent,
        16..=18 => UserCategory::SeniorSchool,
        _ => UserCategory::CollegeStudent,
    }
}
