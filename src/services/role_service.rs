use std::sync::Arc;

use uuid::Uuid;

use crate::dto::role_dto::{CreateRolePayload, UpdateRolePayload};
use crate::error::{Error, Result};
use crate::models::activity::{Activity, ActivityType};
use crate::models::role::{Role, RoleStatus};
use crate::store::TalentStore;
use crate::utils::time;

#[derive(Clone)]
pub struct RoleService {
    store: Arc<dyn TalentStore>,
}

impl RoleService {
    pub fn new(store: Arc<dyn TalentStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateRolePayload) -> Result<Role> {
        let today = time::today();
        let role = Role {
            id: Uuid::new_v4(),
            title: payload.title,
            department: payload.department,
            location: payload.location,
            location_type: payload.location_type,
            description: payload.description,
            requirements: payload.requirements,
            responsibilities: payload.responsibilities,
            employment_type: payload.employment_type,
            status: payload.status.unwrap_or(RoleStatus::Active),
            posted_date: today,
            updated_date: today,
            key_skills: payload.key_skills,
        };

        self.store.save_role(role.clone())?;
        self.store.append_activity(
            Activity::new(
                ActivityType::RoleCreated,
                format!("New role created: {}", role.title),
                time::now(),
            )
            .for_role(role.id),
        )?;
        self.store.recompute_dashboard_aggregates(today)?;

        tracing::info!("Role created: {} ({})", role.title, role.id);
        Ok(role)
    }

    /// Partial merge; stamps `updated_date` on every call.
    pub fn update(&self, id: Uuid, payload: UpdateRolePayload) -> Result<Role> {
        let mut role = self
            .store
            .get_role(id)?
            .ok_or(Error::RoleNotFound(id))?;

        if let Some(title) = payload.title {
            role.title = title;
        }
        if let Some(department) = payload.department {
            role.department = department;
        }
        if let Some(location) = payload.location {
            role.location = location;
        }
        if let Some(location_type) = payload.location_type {
            role.location_type = location_type;
        }
        if let Some(description) = payload.description {
            role.description = description;
        }
        if let Some(requirements) = payload.requirements {
            role.requirements = requirements;
        }
        if let Some(responsibilities) = payload.responsibilities {
            role.responsibilities = responsibilities;
        }
        if let Some(employment_type) = payload.employment_type {
            role.employment_type = employment_type;
        }
        if let Some(status) = payload.status {
            role.status = status;
        }
        if let Some(key_skills) = payload.key_skills {
            role.key_skills = key_skills;
        }
        role.updated_date = time::today();

        self.store.save_role(role.clone())?;
        self.store.recompute_dashboard_aggregates(time::today())?;

        Ok(role)
    }

    pub fn list(&self, status: Option<RoleStatus>) -> Result<Vec<Role>> {
        let roles = self.store.list_roles()?;
        Ok(match status {
            Some(status) => roles.into_iter().filter(|r| r.status == status).collect(),
            None => roles,
        })
    }

    pub fn get(&self, id: Uuid) -> Result<Role> {
        self.store.get_role(id)?.ok_or(Error::RoleNotFound(id))
    }
}
