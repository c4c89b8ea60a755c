use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::models::role::{EmploymentType, LocationType, Role, RoleStatus};
use crate::store::TalentStore;
use crate::utils::time::today;

/// Loads a small fixture set so a fresh deployment has something to show.
/// Idempotence is not needed; the backend starts empty every boot.
pub fn load_demo_data(store: &dyn TalentStore) -> Result<()> {
    let roles = demo_roles();
    let count = roles.len();
    for role in roles {
        store.save_role(role)?;
    }
    store.recompute_dashboard_aggregates(today())?;
    info!(roles = count, "demo data loaded");
    Ok(())
}

fn demo_roles() -> Vec<Role> {
    vec![
        Role {
            id: Uuid::new_v4(),
            title: "Senior Frontend Developer".to_string(),
            department: "engineering".to_string(),
            location: "Remote".to_string(),
            location_type: LocationType::Remote,
            description: "We are looking for an experienced Frontend Developer to join our team. \
                          You will be responsible for building and maintaining user interfaces \
                          for our web applications."
                .to_string(),
            requirements: "- 5+ years of experience with React and modern JavaScript\n\
                           - Experience with TypeScript\n\
                           - Strong understanding of web standards and best practices\n\
                           - Good communication skills and ability to work in a team"
                .to_string(),
            responsibilities: "- Develop and maintain user interfaces for our web applications\n\
                               - Collaborate with designers and backend developers\n\
                               - Write clean, maintainable, and efficient code"
                .to_string(),
            employment_type: EmploymentType::FullTime,
            status: RoleStatus::Active,
            posted_date: NaiveDate::from_ymd_opt(2025, 4, 2).expect("valid date"),
            updated_date: NaiveDate::from_ymd_opt(2025, 4, 2).expect("valid date"),
            key_skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "JavaScript".to_string(),
                "CSS".to_string(),
            ],
        },
        Role {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            department: "engineering".to_string(),
            location: "Remote".to_string(),
            location_type: LocationType::Remote,
            description: "Join our engineering team to build scalable and reliable backend \
                          systems."
                .to_string(),
            requirements: "- 4+ years of experience in backend development\n\
                           - Proficiency in Node.js, Python, or Java\n\
                           - Experience with databases and API design\n\
                           - Knowledge of cloud services (AWS, GCP, or Azure)"
                .to_string(),
            responsibilities: "- Design and implement backend services\n\
                               - Optimize application performance\n\
                               - Write clean, testable code"
                .to_string(),
            employment_type: EmploymentType::FullTime,
            status: RoleStatus::Active,
            posted_date: NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date"),
            updated_date: NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date"),
            key_skills: vec![
                "Node.js".to_string(),
                "Python".to_string(),
                "SQL".to_string(),
                "AWS".to_string(),
                "Docker".to_string(),
            ],
        },
        Role {
            id: Uuid::new_v4(),
            title: "Marketing Manager".to_string(),
            department: "marketing".to_string(),
            location: "San Francisco, CA".to_string(),
            location_type: LocationType::Hybrid,
            description: "Lead our marketing efforts and drive growth for our products."
                .to_string(),
            requirements: "- 5+ years of experience in marketing\n\
                           - Experience with digital marketing channels\n\
                           - Strong analytical skills"
                .to_string(),
            responsibilities: "- Develop and execute marketing strategies\n\
                               - Manage marketing campaigns across channels\n\
                               - Analyze campaign performance and optimize ROI"
                .to_string(),
            employment_type: EmploymentType::FullTime,
            status: RoleStatus::Paused,
            posted_date: NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date"),
            updated_date: NaiveDate::from_ymd_opt(2025, 3, 20).expect("valid date"),
            key_skills: vec![
                "Marketing".to_string(),
                "SEO".to_string(),
                "Analytics".to_string(),
                "Communication".to_string(),
            ],
        },
    ]
}
