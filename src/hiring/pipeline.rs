//! Kanban-style projection of application statuses into pipeline stages.
//!
//! The stage is never persisted. It is recomputed from [`ApplicationStatus`]
//! on every read, and the inverse mapping is what board moves write back, so
//! the two directions must stay consistent or cards snap back on reload.

use serde::{Deserialize, Serialize};

use super::domain::{ApplicationId, ApplicationStatus, JobApplication, User, UserId};

/// Display bucket for one column of the hiring board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    Applied,
    Screening,
    Interview,
    Assessment,
    Offer,
    Rejected,
}

impl PipelineStage {
    pub const fn ordered() -> [PipelineStage; 6] {
        [
            PipelineStage::Applied,
            PipelineStage::Screening,
            PipelineStage::Interview,
            PipelineStage::Assessment,
            PipelineStage::Offer,
            PipelineStage::Rejected,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            PipelineStage::Applied => "applied",
            PipelineStage::Screening => "screening",
            PipelineStage::Interview => "interview",
            PipelineStage::Assessment => "assessment",
            PipelineStage::Offer => "offer",
            PipelineStage::Rejected => "rejected",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PipelineStage::Applied => "Applied",
            PipelineStage::Screening => "HR Screening",
            PipelineStage::Interview => "Technical Interview",
            PipelineStage::Assessment => "Assessment",
            PipelineStage::Offer => "Offer",
            PipelineStage::Rejected => "Rejected",
        }
    }

    /// Forward mapping used when rendering the board.
    pub const fn for_status(status: ApplicationStatus) -> PipelineStage {
        match status {
            ApplicationStatus::Applied => PipelineStage::Applied,
            ApplicationStatus::Screening => PipelineStage::Screening,
            ApplicationStatus::Interviewed => PipelineStage::Interview,
            ApplicationStatus::Assessment => PipelineStage::Assessment,
            ApplicationStatus::Offered => PipelineStage::Offer,
            ApplicationStatus::Rejected => PipelineStage::Rejected,
        }
    }

    /// Inverse mapping used when a card is dropped onto a column.
    pub const fn target_status(self) -> ApplicationStatus {
        match self {
            PipelineStage::Applied => ApplicationStatus::Applied,
            PipelineStage::Screening => ApplicationStatus::Screening,
            PipelineStage::Interview => ApplicationStatus::Interviewed,
            PipelineStage::Assessment => ApplicationStatus::Assessment,
            PipelineStage::Offer => ApplicationStatus::Offered,
            PipelineStage::Rejected => ApplicationStatus::Rejected,
        }
    }
}

/// One candidate card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineCard {
    pub application_id: ApplicationId,
    pub candidate_id: UserId,
    pub candidate_name: String,
    pub status: ApplicationStatus,
    pub tags: Vec<String>,
}

/// One column of the board, in pipeline order.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineColumn {
    pub stage: PipelineStage,
    pub stage_label: &'static str,
    pub candidates: Vec<PipelineCard>,
}

/// The full board for one job.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineBoard {
    pub columns: Vec<PipelineColumn>,
}

impl PipelineBoard {
    pub fn column(&self, stage: PipelineStage) -> Option<&PipelineColumn> {
        self.columns.iter().find(|column| column.stage == stage)
    }
}

/// Group a job's applications into stage columns.
///
/// Pure and idempotent: the same applications always produce the same board.
/// Applications whose candidate record is missing are skipped rather than
/// rendered as anonymous cards.
pub fn project_board(applications: &[(JobApplication, Option<User>)]) -> PipelineBoard {
    let columns = PipelineStage::ordered()
        .into_iter()
        .map(|stage| {
            let candidates = applications
                .iter()
                .filter(|(application, _)| PipelineStage::for_status(application.status) == stage)
                .filter_map(|(application, candidate)| {
                    candidate.as_ref().map(|candidate| PipelineCard {
                        application_id: application.id.clone(),
                        candidate_id: candidate.id.clone(),
                        candidate_name: candidate.name.clone(),
                        status: application.status,
                        tags: application.tags.clone(),
                    })
                })
                .collect();

            PipelineColumn {
                stage,
                stage_label: stage.label(),
                candidates,
            }
        })
        .collect();

    PipelineBoard { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn application(id: &str, status: ApplicationStatus) -> JobApplication {
        JobApplication {
            id: ApplicationId(id.to_string()),
            job_id: super::super::domain::JobId("job-000001".to_string()),
            user_id: UserId(format!("user-{id}")),
            status,
            tags: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn candidate(id: &str, name: &str) -> User {
        User {
            id: UserId(format!("user-{id}")),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            role: super::super::domain::UserRole::Candidate,
            avatar: None,
            initials: User::initials_for(name),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn stage_and_status_mappings_are_inverses() {
        for stage in PipelineStage::ordered() {
            assert_eq!(PipelineStage::for_status(stage.target_status()), stage);
        }
        for status in ApplicationStatus::ordered() {
            assert_eq!(PipelineStage::for_status(status).target_status(), status);
        }
    }

    #[test]
    fn board_groups_applications_by_stage() {
        let applications = vec![
            (
                application("a", ApplicationStatus::Applied),
                Some(candidate("a", "Ada Park")),
            ),
            (
                application("b", ApplicationStatus::Interviewed),
                Some(candidate("b", "Bo Lindgren")),
            ),
            (
                application("c", ApplicationStatus::Interviewed),
                Some(candidate("c", "Cam Reyes")),
            ),
        ];

        let board = project_board(&applications);
        assert_eq!(board.columns.len(), 6);

        let interview = board.column(PipelineStage::Interview).expect("column");
        assert_eq!(interview.candidates.len(), 2);
        assert_eq!(interview.candidates[0].candidate_name, "Bo Lindgren");

        let offer = board.column(PipelineStage::Offer).expect("column");
        assert!(offer.candidates.is_empty());
    }

    #[test]
    fn board_is_deterministic_for_fixed_input() {
        let applications = vec![
            (
                application("a", ApplicationStatus::Offered),
                Some(candidate("a", "Ada Park")),
            ),
            (
                application("b", ApplicationStatus::Rejected),
                Some(candidate("b", "Bo Lindgren")),
            ),
        ];

        let first = project_board(&applications);
        let second = project_board(&applications);
        for (left, right) in first.columns.iter().zip(second.columns.iter()) {
            assert_eq!(left.stage, right.stage);
            assert_eq!(left.candidates, right.candidates);
        }
    }

    #[test]
    fn missing_candidate_records_are_skipped() {
        let applications = vec![(application("a", ApplicationStatus::Applied), None)];
        let board = project_board(&applications);
        let applied = board.column(PipelineStage::Applied).expect("column");
        assert!(applied.candidates.is_empty());
    }

    #[test]
    fn stage_ids_use_lowercase_wire_names() {
        let encoded = serde_json::to_string(&PipelineStage::Screening).expect("serialize");
        assert_eq!(encoded, "\"screening\"");
        for stage in PipelineStage::ordered() {
            assert_eq!(
                serde_json::to_string(&stage).expect("serialize"),
                format!("\"{}\"", stage.id())
            );
        }
    }
}
