//! Reply composition.
//!
//! Maps a matched [`Intent`] to the reply text shown in the chat, plus
//! any repository links the UI renders as anchors. Replies are assembled
//! from knowledge base facts and fixed lead-in labels.

use super::intent::Intent;
use crate::knowledge::{self, KnowledgeError, Topic};
use serde::{Deserialize, Serialize};

/// GitHub repository for the GIF Animation Generator project.
pub const GIF_PROJECT_URL: &str = "https://github.com/Shree2604/GIF-Animation-Generator-Agent";

/// GitHub repository for the Intelligent Healthcare project.
pub const HEALTHCARE_PROJECT_URL: &str = "https://github.com/Shree2604/ML-Internship-Task";

/// GitHub repository for the Face Recognition project.
pub const FACE_PROJECT_URL: &str =
    "https://github.com/Shree2604/Face-Recognition-for-Attendance-Systems";

/// A display-text / URL pair attached to project replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Anchor text shown to the user.
    pub text: String,
    /// Target URL, opened in a new browsing context by the UI.
    pub url: String,
}

impl Link {
    /// Create a new link.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// A composed bot reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// The reply text.
    pub text: String,
    /// Links to render beneath the text. Empty for non-project intents.
    pub links: Vec<Link>,
}

impl Reply {
    fn text_only(text: String) -> Self {
        Self {
            text,
            links: Vec::new(),
        }
    }

    fn with_link(text: String, link: Link) -> Self {
        Self {
            text,
            links: vec![link],
        }
    }
}

/// Compose the reply for a matched intent.
///
/// Deterministic: the same intent always produces the same reply. The
/// error path only fires if the fact table is missing a topic the
/// mapping below references, which is a bug in this module.
pub fn compose(intent: Intent) -> Result<Reply, KnowledgeError> {
    let reply = match intent {
        Intent::GifProject => Reply::with_link(
            knowledge::fact(Topic::ProjectGif)?.to_string(),
            Link::new("View GIF Generator Project on GitHub", GIF_PROJECT_URL),
        ),
        Intent::HealthcareProject => Reply::with_link(
            knowledge::fact(Topic::ProjectHealthcare)?.to_string(),
            Link::new(
                "View Intelligent Healthcare Project on GitHub",
                HEALTHCARE_PROJECT_URL,
            ),
        ),
        Intent::FaceProject => Reply::with_link(
            knowledge::fact(Topic::ProjectFace)?.to_string(),
            Link::new("View Face Recognition Project on GitHub", FACE_PROJECT_URL),
        ),
        Intent::Experience => Reply::text_only(format!(
            "PROCESSING QUERY... Here's Shreeraj's work experience:\n\n1. {}\n\n2. {}\n\n3. {}",
            knowledge::fact(Topic::ExperienceValuedx)?,
            knowledge::fact(Topic::ExperienceCivicraft)?,
            knowledge::fact(Topic::ExperienceIiit)?,
        )),
        Intent::Skills => Reply::text_only(format!(
            "TECHNICAL SKILLS FOUND: {}\n\nProgramming Languages: {}\n\nTools & Frameworks: {}",
            knowledge::fact(Topic::SkillsMl)?,
            knowledge::fact(Topic::SkillsProgramming)?,
            knowledge::fact(Topic::SkillsTools)?,
        )),
        Intent::Achievements => Reply::text_only(format!(
            "ACHIEVEMENT DATA: {}",
            knowledge::fact(Topic::Achievements)?
        )),
        Intent::Education => Reply::text_only(format!(
            "EDUCATION INFORMATION: {}",
            knowledge::fact(Topic::Education)?
        )),
        Intent::Positions => Reply::text_only(format!(
            "LEADERSHIP ROLES: {}",
            knowledge::fact(Topic::Positions)?
        )),
        Intent::Unrecognized => Reply::text_only(
            "I'm specialized in answering questions about Shreeraj's AI/ML experience, \
             projects, and skills. Could you rephrase your question about his portfolio, \
             or ask me about his projects like the GIF Animation Generator, Intelligent \
             Healthcare, or Face Recognition system?"
                .to_string(),
        ),
    };

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_replies_carry_one_link() {
        let reply = compose(Intent::GifProject).unwrap();
        assert_eq!(reply.links.len(), 1);
        assert_eq!(reply.links[0].url, GIF_PROJECT_URL);
        assert!(reply.text.contains("GIF Animation Generator"));

        let reply = compose(Intent::HealthcareProject).unwrap();
        assert_eq!(reply.links.len(), 1);
        assert_eq!(reply.links[0].url, HEALTHCARE_PROJECT_URL);

        let reply = compose(Intent::FaceProject).unwrap();
        assert_eq!(reply.links.len(), 1);
        assert_eq!(reply.links[0].url, FACE_PROJECT_URL);
    }

    #[test]
    fn test_experience_concatenates_three_facts_in_order() {
        let reply = compose(Intent::Experience).unwrap();
        assert!(reply.links.is_empty());
        assert!(reply.text.starts_with("PROCESSING QUERY..."));

        let valuedx = reply.text.find("ValueDX").unwrap();
        let civicraft = reply.text.find("Civicraft").unwrap();
        let iiit = reply.text.find("IIIT Sri City").unwrap();
        assert!(valuedx < civicraft);
        assert!(civicraft < iiit);
    }

    #[test]
    fn test_skills_reply_covers_all_three_facts() {
        let reply = compose(Intent::Skills).unwrap();
        assert!(reply.links.is_empty());
        assert!(reply.text.contains("TensorFlow"));
        assert!(reply.text.contains("Python"));
        assert!(reply.text.contains("Streamlit"));
    }

    #[test]
    fn test_single_fact_replies() {
        let reply = compose(Intent::Achievements).unwrap();
        assert!(reply.text.starts_with("ACHIEVEMENT DATA:"));

        let reply = compose(Intent::Education).unwrap();
        assert!(reply.text.starts_with("EDUCATION INFORMATION:"));
        assert!(reply.text.contains("8.29/10"));

        let reply = compose(Intent::Positions).unwrap();
        assert!(reply.text.starts_with("LEADERSHIP ROLES:"));
    }

    #[test]
    fn test_unrecognized_redirects_without_links() {
        let reply = compose(Intent::Unrecognized).unwrap();
        assert!(reply.links.is_empty());
        assert!(reply.text.contains("GIF Animation Generator"));
        assert!(reply.text.contains("Intelligent Healthcare"));
        assert!(reply.text.contains("Face Recognition"));
    }

    #[test]
    fn test_every_reply_is_non_empty() {
        for intent in [
            Intent::GifProject,
            Intent::HealthcareProject,
            Intent::FaceProject,
            Intent::Experience,
            Intent::Skills,
            Intent::Achievements,
            Intent::Education,
            Intent::Positions,
            Intent::Unrecognized,
        ] {
            let reply = compose(intent).unwrap();
            assert!(!reply.text.is_empty(), "empty reply for {intent:?}");
        }
    }
}
