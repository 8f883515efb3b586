use chrono::NaiveDate;

use crate::project::{
  Project,
  ProjectPriority,
  ProjectStatus
};

const DRAFT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Form-backed copy of a project while the edit overlay is open. Numeric
/// and date fields stay as raw text until submit.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
  pub id:            String,
  pub name:          String,
  pub description:   String,
  pub status:        ProjectStatus,
  pub priority:      ProjectPriority,
  pub progress:      String,
  pub delivery_date: String,
  pub allocations:   String
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  thiserror::Error,
)]
pub enum DraftError {
  #[error("Project name is required.")]
  EmptyName,
  #[error(
    "Progress '{0}' is not a whole number."
  )]
  InvalidProgress(String),
  #[error(
    "Progress must be between 0 and 100 \
     (got {0})."
  )]
  ProgressOutOfRange(i32),
  #[error(
    "Delivery date '{0}' must use \
     YYYY-MM-DD."
  )]
  InvalidDeliveryDate(String)
}

impl ProjectDraft {
  pub fn from_project(
    project: &Project
  ) -> Self {
    Self {
      id:            project.id.clone(),
      name:          project.name.clone(),
      description:   project
        .description
        .clone(),
      status:        project.status,
      priority:      project.priority,
      progress:      project
        .progress
        .to_string(),
      delivery_date: project
        .delivery_date
        .format(DRAFT_DATE_FORMAT)
        .to_string(),
      allocations:   project
        .allocations
        .join(", ")
    }
  }

  /// Validates the form and builds the replacement record. The id is
  /// carried over unchanged.
  pub fn into_project(
    self
  ) -> Result<Project, DraftError> {
    let name = self.name.trim().to_string();
    if name.is_empty() {
      return Err(DraftError::EmptyName);
    }

    let progress_raw = self.progress.trim();
    let progress = progress_raw
      .parse::<i32>()
      .map_err(|_| {
        DraftError::InvalidProgress(
          progress_raw.to_string()
        )
      })?;
    if !(0..=100).contains(&progress) {
      return Err(
        DraftError::ProgressOutOfRange(
          progress
        )
      );
    }

    let date_raw =
      self.delivery_date.trim();
    let delivery_date =
      NaiveDate::parse_from_str(
        date_raw,
        DRAFT_DATE_FORMAT
      )
      .map_err(|_| {
        DraftError::InvalidDeliveryDate(
          date_raw.to_string()
        )
      })?;

    Ok(Project {
      id: self.id,
      name,
      description: self
        .description
        .trim()
        .to_string(),
      status: self.status,
      priority: self.priority,
      progress,
      delivery_date,
      allocations: split_allocations(
        &self.allocations
      )
    })
  }
}

pub fn split_allocations(
  raw: &str
) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|name| !name.is_empty())
    .map(ToString::to_string)
    .collect()
}
