//! Static portfolio knowledge base.
//!
//! Every answer the bot can give is assembled from the facts in this
//! module. Facts are loaded once at process start and never mutated;
//! the composer references them by [`Topic`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from knowledge base lookups.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// The requested topic key is not in the fact table. All composer
    /// call sites are fixed at build time, so hitting this means a
    /// mapping bug, not a user condition.
    #[error("unknown knowledge topic: {key}")]
    UnknownTopic { key: String },
}

/// A topic key into the fact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    ExperienceValuedx,
    ExperienceCivicraft,
    ExperienceIiit,
    SkillsProgramming,
    SkillsTools,
    SkillsMl,
    SkillsCourses,
    ProjectGif,
    ProjectHealthcare,
    ProjectFace,
    Achievements,
    Positions,
    Education,
    Greeting,
}

impl Topic {
    /// Every topic in the knowledge base.
    pub const ALL: [Topic; 14] = [
        Topic::ExperienceValuedx,
        Topic::ExperienceCivicraft,
        Topic::ExperienceIiit,
        Topic::SkillsProgramming,
        Topic::SkillsTools,
        Topic::SkillsMl,
        Topic::SkillsCourses,
        Topic::ProjectGif,
        Topic::ProjectHealthcare,
        Topic::ProjectFace,
        Topic::Achievements,
        Topic::Positions,
        Topic::Education,
        Topic::Greeting,
    ];

    /// The dotted string form of this topic key.
    pub fn key(&self) -> &'static str {
        match self {
            Topic::ExperienceValuedx => "experience.valuedx",
            Topic::ExperienceCivicraft => "experience.civicraft",
            Topic::ExperienceIiit => "experience.iiit",
            Topic::SkillsProgramming => "skills.programming",
            Topic::SkillsTools => "skills.tools",
            Topic::SkillsMl => "skills.ml",
            Topic::SkillsCourses => "skills.courses",
            Topic::ProjectGif => "projects.gif",
            Topic::ProjectHealthcare => "projects.healthcare",
            Topic::ProjectFace => "projects.face",
            Topic::Achievements => "achievements",
            Topic::Positions => "positions",
            Topic::Education => "education",
            Topic::Greeting => "greeting",
        }
    }

    /// Parse a dotted topic key back into a `Topic`.
    pub fn from_key(key: &str) -> Option<Topic> {
        Topic::ALL.iter().copied().find(|t| t.key() == key)
    }
}

lazy_static::lazy_static! {
    /// The fact table. Immutable after construction.
    pub static ref FACTS: HashMap<Topic, &'static str> = {
        let mut facts = HashMap::new();
        facts.insert(
            Topic::ExperienceValuedx,
            "Shreeraj works as an Agentic AI Intern at ValueDX (November 2024 - Present) where he works extensively with the LangGraph Framework to design and optimize autonomous AI systems. He contributes to healthcare automation, including patient booking systems and medical workflow optimization, and develops AI-driven financial invoice processing for document handling and data extraction.",
        );
        facts.insert(
            Topic::ExperienceCivicraft,
            "At Civicraft (March 2024 - July 2024), Shreeraj worked as a Machine Learning Intern building Local Language Translation (LLT) models using TensorFlow & PyTorch. He integrated multi-lingual speech technology for seamless user interaction and focused on making AI adaptive & user-friendly via voice interaction and multi-format support.",
        );
        facts.insert(
            Topic::ExperienceIiit,
            "During his ML IoT Research Internship at IIIT Sri City (December 2023 - February 2024), Shreeraj developed a predictive model for infectious disease forecasting with 87.4% accuracy, built an IoT-based health monitoring prototype for real-time data processing, and improved model transparency using Eli5, SHAP, and LIME.",
        );
        facts.insert(
            Topic::SkillsProgramming,
            "Shreeraj is proficient in Python, C++, Java, and SQL programming languages.",
        );
        facts.insert(
            Topic::SkillsTools,
            "He has experience with Git, GitHub, Matlab, Linux, AWS, Flask, Django, Hugging Face, and Streamlit.",
        );
        facts.insert(
            Topic::SkillsMl,
            "His machine learning and AI skills include TensorFlow, PyTorch, Scikit-Learn, NumPy, Pandas, LangChain, and LangGraph.",
        );
        facts.insert(
            Topic::SkillsCourses,
            "Relevant coursework includes Data Structures, OOPS, Operating Systems, DBMS, Computer Networks, and Cloud Computing.",
        );
        facts.insert(
            Topic::ProjectGif,
            "The GIF Animation Generator Agent is an AI-powered GIF generation workflow with multiple autonomous agents. It uses Gemini 1.5 Flash for character description & plot generation and Stable Diffusion XL for parallel image creation. The project implements a complete end-to-end workflow leveraging async Python to handle complex operations in parallel.",
        );
        facts.insert(
            Topic::ProjectHealthcare,
            "The Intelligent Healthcare project is a smart healthcare ecosystem for real-time monitoring. It features a stacked model (Logistic Regression, Random Forest, XGBoost) with 87.4% accuracy and uses Eli5, DeepSHAP, and LIME for model explainability. It creates a comprehensive monitoring system with advanced predictive capabilities while making AI decisions transparent and trustworthy for healthcare professionals.",
        );
        facts.insert(
            Topic::ProjectFace,
            "The Face Recognition for Attendance Systems project is a Haar Cascade-based face recognition system with 95% accuracy. Built key components include generateimages.py, createdataandlabel.py, model.py, and testing.py. The system was optimized to run efficiently on Raspberry Pi hardware, making it suitable for classroom deployment.",
        );
        facts.insert(
            Topic::Achievements,
            "Shreeraj has collaborated and organized 'BIT N BUILD', an international hackathon at IIIT Sricity. He achieved a Top 1% ranking in GCCP Cloud Campaign 2024 and placed in the Top 10 in the Thryve Digital National Healthcare Hackathon 2023.",
        );
        facts.insert(
            Topic::Positions,
            "Shreeraj serves as the Club Lead at Epoch, the AI/ML Club of IIIT Sri City. He is also the NSS Design Lead at IIIT Sri City and Sponsorship Lead at IIIT Sri City.",
        );
        facts.insert(
            Topic::Education,
            "Shreeraj studies at the Indian Institute of Information Technology, Sricity (2022-2026) with a CGPA of 8.29/10.",
        );
        facts.insert(
            Topic::Greeting,
            "Greetings! I'm ShreeBot, your AI assistant for exploring Shreeraj's portfolio. I can answer questions about his AI/ML projects, technical skills, and professional experience. Feel free to ask me anything about Shreeraj's expertise in machine learning, autonomous agents, or his portfolio projects!",
        );
        facts
    };
}

/// Canned prompts the UI offers when the conversation is empty.
pub const SAMPLE_QUESTIONS: [&str; 5] = [
    "Tell me about Shreeraj's experience.",
    "What AI/ML skills does Shreeraj have?",
    "Describe the GIF Animation Generator project.",
    "What is Shreeraj's background in healthcare AI?",
    "Which frameworks does Shreeraj work with?",
];

/// Look up a fact by topic.
pub fn fact(topic: Topic) -> Result<&'static str, KnowledgeError> {
    FACTS
        .get(&topic)
        .copied()
        .ok_or_else(|| KnowledgeError::UnknownTopic {
            key: topic.key().to_string(),
        })
}

/// Look up a fact by its dotted string key.
pub fn fact_by_key(key: &str) -> Result<&'static str, KnowledgeError> {
    Topic::from_key(key)
        .ok_or_else(|| KnowledgeError::UnknownTopic {
            key: key.to_string(),
        })
        .and_then(fact)
}
