use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::resume::{Education, Experience, ParsedResume};
use crate::services::scoring_service;

/// Terms the extractor recognizes, technical and soft. Matching is a
/// case-insensitive substring test, so "react" in running text counts.
const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Next.js",
    "Node.js",
    "HTML",
    "CSS",
    "Python",
    "Java",
    "C++",
    "C#",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "Git",
    "CI/CD",
    "Project Management",
    "Agile",
    "Scrum",
    "Leadership",
    "Communication",
    "Marketing",
    "SEO",
    "Content Writing",
    "Social Media",
    "Analytics",
    "Design",
    "UI/UX",
    "Figma",
    "Photoshop",
    "Illustrator",
    "Sales",
    "Customer Service",
    "Negotiation",
    "CRM",
    "Account Management",
];

// Char-count heuristics standing in for real parsing. Longer texts are
// assumed to carry more signal; the exact cutoffs are relied on by
// downstream scoring expectations and must not drift.
const SOFT_SKILL_TEXT_LEN: usize = 500;
const LEADERSHIP_TEXT_LEN: usize = 1000;
const SECOND_EXPERIENCE_TEXT_LEN: usize = 800;

/// Heuristic signal extraction from raw resume text. Not an NLP parser:
/// it recognizes a fixed vocabulary and synthesizes placeholder entries
/// from coarse text features, which is enough to drive the pipeline.
#[derive(Clone)]
pub struct ResumeService;

impl ResumeService {
    pub fn new() -> Self {
        Self
    }

    /// Extracts skills, experience and education. `match_score` is left
    /// unset; scoring needs the role's required skills.
    pub fn extract(&self, resume_text: &str) -> ParsedResume {
        if resume_text.trim().is_empty() {
            return fallback_resume();
        }

        ParsedResume {
            skills: extract_skills(resume_text),
            experience: extract_experience(resume_text),
            education: extract_education(resume_text),
            match_score: None,
        }
    }

    /// Extraction plus scoring against a role's required skills.
    ///
    /// Unreadable input returns the fallback profile with its fixed
    /// neutral score; the scorer is not consulted for it.
    pub fn parse(&self, resume_text: &str, required_skills: &[String]) -> ParsedResume {
        if resume_text.trim().is_empty() {
            let mut parsed = fallback_resume();
            parsed.match_score = Some(scoring_service::NEUTRAL_SCORE);
            return parsed;
        }

        let mut parsed = self.extract(resume_text);
        parsed.match_score = Some(scoring_service::match_score(
            &parsed.skills,
            required_skills,
        ));
        parsed
    }
}

fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut skills: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| lowered.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    let text_len = text.chars().count();
    if text_len > SOFT_SKILL_TEXT_LEN {
        for implied in ["Communication", "Problem Solving"] {
            if !skills.iter().any(|s| s == implied) {
                skills.push(implied.to_string());
            }
        }
    }
    if text_len > LEADERSHIP_TEXT_LEN && !skills.iter().any(|s| s == "Team Leadership") {
        skills.push("Team Leadership".to_string());
    }

    skills
}

fn extract_experience(text: &str) -> Vec<Experience> {
    let lowered = text.to_lowercase();
    let mut experience = Vec::new();

    if lowered.contains("experience") || lowered.contains("work") {
        experience.push(Experience {
            id: Uuid::new_v4(),
            title: "Software Developer".to_string(),
            company: "Tech Company".to_string(),
            location: Some("San Francisco, CA".to_string()),
            start_date: date(2020, 1, 1),
            end_date: None,
            current: true,
            description: Some(
                "Developed and maintained web applications using modern technologies."
                    .to_string(),
            ),
        });
    }

    // Longer texts get a second, earlier entry regardless of the keyword
    // trigger above.
    if text.chars().count() > SECOND_EXPERIENCE_TEXT_LEN {
        experience.push(Experience {
            id: Uuid::new_v4(),
            title: "Junior Developer".to_string(),
            company: "Startup Inc.".to_string(),
            location: Some("Remote".to_string()),
            start_date: date(2018, 6, 1),
            end_date: Some(date(2019, 12, 31)),
            current: false,
            description: Some("Worked on frontend development using React and JavaScript.".to_string()),
        });
    }

    experience
}

fn extract_education(text: &str) -> Vec<Education> {
    let lowered = text.to_lowercase();
    let triggered = ["education", "university", "college", "degree"]
        .iter()
        .any(|term| lowered.contains(term));
    if !triggered {
        return Vec::new();
    }

    vec![Education {
        id: Uuid::new_v4(),
        degree: "Bachelor of Science in Computer Science".to_string(),
        school: "University of Technology".to_string(),
        location: Some("Boston, MA".to_string()),
        start_date: date(2014, 9, 1),
        end_date: Some(date(2018, 5, 31)),
        current: false,
        description: None,
    }]
}

/// Generic profile for unreadable input; an application is never rejected
/// just because the resume text could not be read.
fn fallback_resume() -> ParsedResume {
    ParsedResume {
        skills: vec![
            "JavaScript".to_string(),
            "Communication".to_string(),
            "Problem Solving".to_string(),
        ],
        experience: vec![Experience {
            id: Uuid::new_v4(),
            title: "Developer".to_string(),
            company: "Tech Company".to_string(),
            location: Some("Remote".to_string()),
            start_date: date(2020, 1, 1),
            end_date: None,
            current: true,
            description: Some("Software development role".to_string()),
        }],
        education: vec![Education {
            id: Uuid::new_v4(),
            degree: "Computer Science".to_string(),
            school: "University".to_string(),
            location: Some("Online".to_string()),
            start_date: date(2016, 1, 1),
            end_date: Some(date(2020, 1, 1)),
            current: false,
            description: None,
        }],
        match_score: None,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixed placeholder date is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svc() -> ResumeService {
        ResumeService::new()
    }

    #[test]
    fn empty_and_whitespace_input_take_the_fallback_path() {
        for text in ["", "   ", "\n\t  "] {
            let parsed = svc().parse(text, &["React".to_string()]);
            assert_eq!(
                parsed.skills,
                vec!["JavaScript", "Communication", "Problem Solving"]
            );
            assert_eq!(parsed.experience.len(), 1);
            assert!(parsed.experience[0].current);
            assert_eq!(parsed.education.len(), 1);
            // Fixed neutral score even though "React" would not match.
            assert_eq!(parsed.match_score, Some(0.5));
        }
    }

    #[test]
    fn vocabulary_terms_are_found_case_insensitively() {
        let parsed = svc().extract("Shipped features in REACT and typescript daily.");
        assert!(parsed.skills.contains(&"React".to_string()));
        assert!(parsed.skills.contains(&"TypeScript".to_string()));
        assert!(parsed.match_score.is_none());
    }

    #[test]
    fn skills_keep_vocabulary_order() {
        let parsed = svc().extract("python before javascript? No: JavaScript, Python.");
        let js = parsed.skills.iter().position(|s| s == "JavaScript");
        let py = parsed.skills.iter().position(|s| s == "Python");
        assert!(js < py, "vocabulary order, not text order");
    }

    #[test]
    fn long_text_implies_soft_skills_without_duplicates() {
        let text = format!("Communication matters. {}", "x".repeat(600));
        let skills = svc().extract(&text).skills;
        assert_eq!(
            skills.iter().filter(|s| *s == "Communication").count(),
            1,
            "already-found term must not be re-added"
        );
        assert!(skills.contains(&"Problem Solving".to_string()));
        assert!(!skills.contains(&"Team Leadership".to_string()));
    }

    #[test]
    fn very_long_text_adds_team_leadership() {
        let text = "y".repeat(1001);
        let skills = svc().extract(&text).skills;
        assert!(skills.contains(&"Team Leadership".to_string()));
    }

    #[test]
    fn length_thresholds_are_strictly_greater_than() {
        let at_500 = "a".repeat(500);
        assert!(svc().extract(&at_500).skills.is_empty());

        let at_1000 = "a".repeat(1000);
        let skills = svc().extract(&at_1000).skills;
        assert!(skills.contains(&"Communication".to_string()));
        assert!(!skills.contains(&"Team Leadership".to_string()));
    }

    #[test]
    fn experience_needs_the_keyword_trigger() {
        assert!(svc().extract("short bio, no triggers").experience.is_empty());

        let parsed = svc().extract("My work history is short.");
        assert_eq!(parsed.experience.len(), 1);
        assert_eq!(parsed.experience[0].title, "Software Developer");
        assert!(parsed.experience[0].current);
    }

    #[test]
    fn long_text_synthesizes_a_second_entry_even_without_the_keyword() {
        let text = "z".repeat(801);
        let parsed = svc().extract(&text);
        assert_eq!(parsed.experience.len(), 1);
        assert_eq!(parsed.experience[0].title, "Junior Developer");
        assert!(!parsed.experience[0].current);
        assert!(parsed.experience[0].end_date.is_some());
    }

    #[test]
    fn long_text_with_keyword_yields_two_entries() {
        let text = format!("Professional experience: {}", "z".repeat(900));
        let parsed = svc().extract(&text);
        assert_eq!(parsed.experience.len(), 2);
        assert_eq!(parsed.experience[0].title, "Software Developer");
        assert_eq!(parsed.experience[1].title, "Junior Developer");
    }

    #[test]
    fn very_long_text_with_keyword_gets_the_full_synthetic_profile() {
        let text = format!("Years of experience. {}", "q".repeat(1000));
        let parsed = svc().extract(&text);
        for implied in ["Communication", "Problem Solving", "Team Leadership"] {
            assert!(parsed.skills.iter().any(|s| s == implied), "missing {implied}");
        }
        assert_eq!(parsed.experience.len(), 2);
    }

    #[test]
    fn education_triggers_exactly_one_entry() {
        for text in [
            "BSc degree holder",
            "Went to University",
            "community college alum",
            "Education section follows",
        ] {
            let parsed = svc().extract(text);
            assert_eq!(parsed.education.len(), 1, "trigger: {text}");
            assert_eq!(parsed.education[0].school, "University of Technology");
        }
        assert!(svc().extract("self taught").education.is_empty());
    }

    #[test]
    fn parse_scores_extracted_skills_against_requirements() {
        let text = "Work experience with React, TypeScript and Figma at a university lab.";
        let required = vec!["React".to_string(), "TypeScript".to_string()];
        let parsed = svc().parse(text, &required);
        assert_eq!(parsed.match_score, Some(1.0));
    }

    #[test]
    fn length_is_measured_in_chars_not_bytes() {
        // 400 two-byte chars: 800 bytes but only 400 chars, so below
        // every threshold.
        let text = "é".repeat(400);
        let parsed = svc().extract(&text);
        assert!(parsed.skills.is_empty());
        assert!(parsed.experience.is_empty());
    }
}
