//! User registration, lookup, and profile management.

use chrono::Utc;
use serde::Deserialize;

use super::domain::{Education, Experience, Profile, User, UserId, UserRole};
use super::repository::HiringStore;
use super::service::{next_user_id, HiringError, HiringService};
use super::views::{UserPage, UserSummary};

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
    #[serde(default)]
    pub experience: Option<Vec<Experience>>,
}

impl<S> HiringService<S>
where
    S: HiringStore + 'static,
{
    /// Register any user. Email is unique across roles.
    pub fn register_user(&self, request: RegisterUserRequest) -> Result<User, HiringError> {
        if self.store().fetch_user_by_email(&request.email)?.is_some() {
            return Err(HiringError::conflict("User with this email already exists"));
        }

        let now = Utc::now();
        let user = User {
            id: next_user_id(),
            initials: User::initials_for(&request.name),
            name: request.name,
            email: request.email,
            role: request.role,
            avatar: request.avatar,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        Ok(self.store().insert_user(user)?)
    }

    pub fn find_user(&self, id: &UserId) -> Result<User, HiringError> {
        self.store()
            .fetch_user(id)?
            .ok_or_else(|| HiringError::not_found("User not found"))
    }

    pub fn find_user_by_email(&self, email: &str) -> Result<User, HiringError> {
        self.store()
            .fetch_user_by_email(email)?
            .ok_or_else(|| HiringError::not_found("User not found"))
    }

    pub fn list_users(&self, page: usize, limit: usize) -> Result<UserPage, HiringError> {
        let page = page.max(1);
        let limit = limit.max(1);
        let (users, total) = self.store().list_users((page - 1) * limit, limit)?;

        Ok(UserPage {
            users: users.iter().map(UserSummary::from_user).collect(),
            total,
            page,
            total_pages: total.div_ceil(limit),
        })
    }

    /// Create or replace the profile attached to a user.
    pub fn upsert_profile(
        &self,
        user_id: &UserId,
        request: ProfileRequest,
    ) -> Result<Profile, HiringError> {
        self.find_user(user_id)?;

        let existing = self.store().fetch_profile(user_id)?.unwrap_or(Profile {
            user_id: user_id.clone(),
            ..Profile::default()
        });

        let profile = Profile {
            user_id: user_id.clone(),
            bio: request.bio.or(existing.bio),
            location: request.location.or(existing.location),
            skills: request.skills.unwrap_or(existing.skills),
            education: request.education.unwrap_or(existing.education),
            experience: request.experience.unwrap_or(existing.experience),
        };

        Ok(self.store().upsert_profile(profile)?)
    }

    pub fn find_profile(&self, user_id: &UserId) -> Result<Profile, HiringError> {
        self.store()
            .fetch_profile(user_id)?
            .ok_or_else(|| HiringError::not_found("Profile not found"))
    }

    /// Employer listing backing the interviewer picker in the UI.
    pub fn list_employers(&self) -> Result<Vec<UserSummary>, HiringError> {
        Ok(self
            .store()
            .list_users_by_role(UserRole::Employer)?
            .iter()
            .map(UserSummary::from_user)
            .collect())
    }
}
