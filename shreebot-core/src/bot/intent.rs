//! Keyword-rule intent classification.
//!
//! Free text is classified by scanning a fixed, ordered rule table and
//! taking the first rule with a keyword contained in the lower-cased
//! query. Rule order is a behavioral contract: several rules share
//! keywords (e.g. "recognition" appears in both the face-project rule
//! and the achievements rule), and the earlier rule always wins.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The classified purpose of a user query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// The GIF Animation Generator project.
    GifProject,
    /// The Intelligent Healthcare project.
    HealthcareProject,
    /// The Face Recognition attendance project.
    FaceProject,
    /// Work experience across internships.
    Experience,
    /// Technical skills and tooling.
    Skills,
    /// Awards, rankings, and hackathon results.
    Achievements,
    /// Degree and institution.
    Education,
    /// Leadership positions and club roles.
    Positions,
    /// Nothing matched; the bot redirects to known topics.
    Unrecognized,
}

/// One classification rule: a keyword set and the intent it selects.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Keywords tested by substring containment against the query.
    pub keywords: &'static [&'static str],
    /// Intent returned when any keyword matches.
    pub intent: Intent,
}

impl Rule {
    /// Whether this rule matches an already lower-cased query.
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.keywords.iter().any(|kw| lowered_query.contains(kw))
    }
}

/// The rule table, in priority order. First match wins.
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["gif", "animation", "generator"],
        intent: Intent::GifProject,
    },
    Rule {
        keywords: &["healthcare", "health", "medical", "xgboost"],
        intent: Intent::HealthcareProject,
    },
    Rule {
        keywords: &["face", "recognition", "attendance"],
        intent: Intent::FaceProject,
    },
    Rule {
        keywords: &["experience", "work", "career"],
        intent: Intent::Experience,
    },
    Rule {
        keywords: &["skill", "know", "technologies", "framework", "language"],
        intent: Intent::Skills,
    },
    Rule {
        keywords: &["achievement", "award", "recognition", "accomplishment", "hackathon"],
        intent: Intent::Achievements,
    },
    Rule {
        keywords: &["education", "college", "university", "degree", "study", "cgpa", "gpa"],
        intent: Intent::Education,
    },
    Rule {
        keywords: &["position", "role", "responsibility", "lead", "club"],
        intent: Intent::Positions,
    },
];

/// Classify a free-text query.
///
/// Matching is substring containment over the lower-cased input, so
/// "xgboost" anywhere in the text selects the healthcare rule and a word
/// like "unrecognition" still contains "recognition". An empty query
/// matches no rule.
pub fn match_intent(query: &str) -> Intent {
    let lowered = query.to_lowercase();

    for rule in RULES {
        if rule.matches(&lowered) {
            debug!(intent = ?rule.intent, "matched intent rule");
            return rule.intent;
        }
    }

    debug!("no rule matched, falling back to Unrecognized");
    Intent::Unrecognized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gif_keywords() {
        assert_eq!(match_intent("Describe the GIF project"), Intent::GifProject);
        assert_eq!(match_intent("how does the animation work"), Intent::GifProject);
        assert_eq!(match_intent("the generator agent"), Intent::GifProject);
    }

    #[test]
    fn test_priority_order_holds() {
        // Both a gif keyword and a healthcare keyword: the earlier rule wins.
        assert_eq!(match_intent("gif xgboost"), Intent::GifProject);
        // Healthcare outranks the face rule.
        assert_eq!(match_intent("medical attendance"), Intent::HealthcareProject);
    }

    #[test]
    fn test_substring_containment() {
        // "recognition" is matched inside a longer token.
        assert_eq!(match_intent("unrecognitionable"), Intent::FaceProject);
        // "xgboost" triggers healthcare even mid-sentence.
        assert_eq!(
            match_intent("tell me about the XGBoost stack"),
            Intent::HealthcareProject
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(match_intent("WHAT IS HIS EXPERIENCE?"), Intent::Experience);
        assert_eq!(match_intent("CGPA?"), Intent::Education);
    }

    #[test]
    fn test_empty_query_is_unrecognized() {
        assert_eq!(match_intent(""), Intent::Unrecognized);
    }

    #[test]
    fn test_unmatched_query_is_unrecognized() {
        assert_eq!(match_intent("what's the weather today?"), Intent::Unrecognized);
    }

    #[test]
    fn test_recognition_prefers_face_rule() {
        // "recognition" appears in both the face and achievements rules;
        // the face rule is earlier in the table.
        assert_eq!(match_intent("recognition"), Intent::FaceProject);
    }

    #[test]
    fn test_positions_keywords() {
        assert_eq!(match_intent("what club does he lead"), Intent::Positions);
    }
}
