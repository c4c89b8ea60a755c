use serde::{Deserialize, Serialize};

/// Empty text is allowed; the extractor has a fallback profile for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResumePayload {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
}
