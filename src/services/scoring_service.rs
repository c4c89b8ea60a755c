//! Skill-overlap scoring between an extracted candidate profile and a
//! role's required skills. The output feeds the reconciler's match
//! threshold, so the exact figures here are load-bearing.

/// Returned when the role lists no required skills; nothing to compare against.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Returned when the candidate profile carries no skills at all.
pub const NO_SKILLS_SCORE: f64 = 0.3;

/// Fraction of required skills matched by the candidate, in [0, 1].
///
/// Matching is case-insensitive and bidirectional on substrings: "React"
/// satisfies a "react native" requirement and vice versa. Each required
/// skill counts at most once regardless of how many candidate skills
/// overlap it.
pub fn match_score(candidate_skills: &[String], required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return NEUTRAL_SCORE;
    }
    if candidate_skills.is_empty() {
        return NO_SKILLS_SCORE;
    }

    let candidate: Vec<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();
    let required: Vec<String> = required_skills.iter().map(|s| s.to_lowercase()).collect();

    let matched = required
        .iter()
        .filter(|req| {
            candidate
                .iter()
                .any(|have| have.contains(req.as_str()) || req.contains(have.as_str()))
        })
        .count();

    matched as f64 / required.len() as f64
}
