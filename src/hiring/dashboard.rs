//! Aggregate counters for the dashboard header cards.

use super::domain::{ApplicationStatus, JobStatus};
use super::repository::HiringStore;
use super::service::{HiringError, HiringService};
use super::views::{DashboardStats, OfferStats};

impl<S> HiringService<S>
where
    S: HiringStore + 'static,
{
    /// Single read-path aggregation, recomputed per request.
    ///
    /// Time-to-hire averages the created->updated span of offered
    /// applications on filled jobs; an offer counts as accepted when its job
    /// has been filled.
    pub fn dashboard_stats(&self) -> Result<DashboardStats, HiringError> {
        let applications = self.store().list_applications()?;

        let mut offered = 0usize;
        let mut accepted = 0usize;
        let mut active = 0usize;
        let mut hire_days: Vec<i64> = Vec::new();

        for application in &applications {
            if matches!(
                application.status,
                ApplicationStatus::Applied
                    | ApplicationStatus::Interviewed
                    | ApplicationStatus::Offered
            ) {
                active += 1;
            }

            if application.status == ApplicationStatus::Offered {
                offered += 1;
                let job_filled = self
                    .store()
                    .fetch_job(&application.job_id)?
                    .map(|job| job.status == JobStatus::Filled)
                    .unwrap_or(false);
                if job_filled {
                    accepted += 1;
                    hire_days
                        .push((application.updated_at - application.created_at).num_days());
                }
            }
        }

        let time_to_hire = if hire_days.is_empty() {
            0
        } else {
            hire_days.iter().sum::<i64>() / hire_days.len() as i64
        };

        Ok(DashboardStats {
            time_to_hire,
            open_roles: self.store().count_jobs_with_status(JobStatus::Open)?,
            active_candidates: active,
            offers_sent: OfferStats {
                total: offered,
                accepted,
                pending: offered - accepted,
            },
        })
    }
}
