use crate::models::candidate::Candidate;

/// Finds the stored candidate a new submission belongs to, if any.
///
/// Email equality is case-insensitive; phone matches only when the
/// submission provides one and the stored record has one, compared
/// exactly (no normalization beyond presence). First match in store
/// order wins.
pub fn resolve<'a>(
    candidates: &'a [Candidate],
    email: &str,
    phone: Option<&str>,
) -> Option<&'a Candidate> {
    candidates.iter().find(|candidate| {
        if candidate.email.eq_ignore_ascii_case(email) {
            return true;
        }
        match (phone, candidate.phone.as_deref()) {
            (Some(submitted), Some(stored)) if !submitted.is_empty() => submitted == stored,
            _ => false,
        }
    })
}

/// Administrative sweep: every stored candidate sharing an email, phone
/// or exact name with the draft. Deliberately noisier than [`resolve`]
/// (exact email comparison, name included) and never auto-merged; the
/// result goes to a human.
pub fn potential_duplicates<'a>(
    candidates: &'a [Candidate],
    email: &str,
    phone: Option<&str>,
    name: &str,
) -> Vec<&'a Candidate> {
    candidates
        .iter()
        .filter(|candidate| {
            candidate.email == email
                || matches!(
                    (phone, candidate.phone.as_deref()),
                    (Some(a), Some(b)) if a == b
                )
                || candidate.name == name
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::Stage;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn candidate(name: &str, email: &str, phone: Option<&str>) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(|p| p.to_string()),
            location: None,
            role_id: Uuid::new_v4(),
            role_name: "Backend Engineer".to_string(),
            stage: Stage::Applied,
            applied_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            last_contact_date: None,
            resume: None,
            cover_letter: None,
            notes: Default::default(),
            skills: vec![],
            experience: vec![],
            education: vec![],
            match_score: None,
            application_history: Default::default(),
        }
    }

    #[test]
    fn email_matches_case_insensitively() {
        let stored = vec![candidate("Ana", "Ana@Example.com", None)];
        let hit = resolve(&stored, "ana@example.COM", None);
        assert_eq!(hit.map(|c| c.id), Some(stored[0].id));
    }

    #[test]
    fn phone_matches_only_when_both_sides_have_one() {
        let with_phone = vec![candidate("Ana", "ana@example.com", Some("+1555"))];
        assert!(resolve(&with_phone, "other@example.com", Some("+1555")).is_some());
        assert!(resolve(&with_phone, "other@example.com", None).is_none());

        let without_phone = vec![candidate("Ana", "ana@example.com", None)];
        assert!(resolve(&without_phone, "other@example.com", Some("+1555")).is_none());
    }

    #[test]
    fn empty_phone_never_matches() {
        let stored = vec![candidate("Ana", "ana@example.com", Some(""))];
        assert!(resolve(&stored, "other@example.com", Some("")).is_none());
    }

    #[test]
    fn phone_comparison_is_exact() {
        let stored = vec![candidate("Ana", "ana@example.com", Some("+1 (555) 123"))];
        assert!(resolve(&stored, "other@example.com", Some("+1555123")).is_none());
    }

    #[test]
    fn first_match_in_store_order_wins() {
        let stored = vec![
            candidate("Ana", "shared@example.com", None),
            candidate("Bea", "shared@example.com", None),
        ];
        let hit = resolve(&stored, "shared@example.com", None).unwrap();
        assert_eq!(hit.name, "Ana");
    }

    #[test]
    fn duplicate_sweep_is_or_combined_and_returns_all() {
        let stored = vec![
            candidate("Ana Ray", "ana@example.com", Some("+1555")),
            candidate("Ana Ray", "different@example.com", None),
            candidate("Cole Vu", "cole@example.com", Some("+1555")),
            candidate("Drew Li", "drew@example.com", Some("+9999")),
        ];

        let hits = potential_duplicates(&stored, "ana@example.com", Some("+1555"), "Ana Ray");
        let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ana Ray", "Ana Ray", "Cole Vu"]);
    }

    #[test]
    fn duplicate_sweep_compares_email_exactly() {
        let stored = vec![candidate("Ana", "Ana@Example.com", None)];
        assert!(potential_duplicates(&stored, "ana@example.com", None, "someone else").is_empty());
    }

    #[test]
    fn missing_phones_do_not_pair_with_each_other() {
        let stored = vec![candidate("Ana", "ana@example.com", None)];
        let hits = potential_duplicates(&stored, "new@example.com", None, "Someone New");
        assert!(hits.is_empty());
    }
}
