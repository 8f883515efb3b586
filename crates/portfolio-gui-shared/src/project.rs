use chrono::{
  DateTime,
  NaiveDate,
  NaiveTime,
  Utc
};
use serde::{
  Deserialize,
  Deserializer,
  Serialize,
  Serializer
};
use uuid::Uuid;

/// Lifecycle stage of a project.
///
/// Anything that is not one of the known wire strings is read as
/// `Planning`, so stored records with stale or misspelled statuses still
/// render.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
pub enum ProjectStatus {
  Completed,
  InProgress,
  Review,
  #[default]
  Planning
}

impl ProjectStatus {
  pub const ALL: [ProjectStatus; 4] = [
    ProjectStatus::Planning,
    ProjectStatus::InProgress,
    ProjectStatus::Review,
    ProjectStatus::Completed
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | ProjectStatus::Completed => {
        "completed"
      }
      | ProjectStatus::InProgress => {
        "in-progress"
      }
      | ProjectStatus::Review => "review",
      | ProjectStatus::Planning => {
        "planning"
      }
    }
  }

  pub fn parse(raw: &str) -> Self {
    match raw.trim() {
      | "completed" => {
        ProjectStatus::Completed
      }
      | "in-progress" => {
        ProjectStatus::InProgress
      }
      | "review" => ProjectStatus::Review,
      | _ => ProjectStatus::Planning
    }
  }
}

impl Serialize for ProjectStatus {
  fn serialize<S>(
    &self,
    serializer: S
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer
  {
    serializer.serialize_str(self.as_str())
  }
}

impl<'de> Deserialize<'de> for ProjectStatus {
  fn deserialize<D>(
    deserializer: D
  ) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw =
      String::deserialize(deserializer)?;
    Ok(ProjectStatus::parse(&raw))
  }
}

/// Urgency of a project. Unknown wire strings read as `Low`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
pub enum ProjectPriority {
  High,
  Medium,
  #[default]
  Low
}

impl ProjectPriority {
  pub const ALL: [ProjectPriority; 3] = [
    ProjectPriority::Low,
    ProjectPriority::Medium,
    ProjectPriority::High
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | ProjectPriority::High => "high",
      | ProjectPriority::Medium => "medium",
      | ProjectPriority::Low => "low"
    }
  }

  pub fn parse(raw: &str) -> Self {
    match raw.trim() {
      | "high" => ProjectPriority::High,
      | "medium" => ProjectPriority::Medium,
      | _ => ProjectPriority::Low
    }
  }
}

impl Serialize for ProjectPriority {
  fn serialize<S>(
    &self,
    serializer: S
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer
  {
    serializer.serialize_str(self.as_str())
  }
}

impl<'de> Deserialize<'de>
  for ProjectPriority
{
  fn deserialize<D>(
    deserializer: D
  ) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw =
      String::deserialize(deserializer)?;
    Ok(ProjectPriority::parse(&raw))
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  pub id:            String,
  #[serde(default)]
  pub name:          String,
  #[serde(default)]
  pub description:   String,
  #[serde(default)]
  pub status:        ProjectStatus,
  #[serde(default)]
  pub priority:      ProjectPriority,
  #[serde(default)]
  pub progress:      i32,
  pub delivery_date: NaiveDate,
  #[serde(default)]
  pub allocations:   Vec<String>
}

impl Project {
  /// A fresh planning-stage project with a generated id.
  pub fn new(
    name: impl Into<String>,
    delivery_date: NaiveDate
  ) -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      name: name.into(),
      description: String::new(),
      status: ProjectStatus::Planning,
      priority: ProjectPriority::Low,
      progress: 0,
      delivery_date,
      allocations: vec![]
    }
  }

  /// Delivery date taken at midnight UTC is before `now` and the project
  /// is not completed.
  pub fn is_overdue(
    &self,
    now: DateTime<Utc>
  ) -> bool {
    let due = self
      .delivery_date
      .and_time(NaiveTime::MIN)
      .and_utc();
    due < now
      && self.status
        != ProjectStatus::Completed
  }

  pub fn is_high_priority(&self) -> bool {
    self.priority == ProjectPriority::High
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  fn sample_project() -> Project {
    Project {
      id:            "p-1".to_string(),
      name:          "Billing revamp"
        .to_string(),
      description:   String::new(),
      status:        ProjectStatus::InProgress,
      priority:      ProjectPriority::Medium,
      progress:      40,
      delivery_date: NaiveDate::from_ymd_opt(
        2026, 3, 10
      )
      .expect("valid date"),
      allocations:   vec![]
    }
  }

  #[test]
  fn unknown_status_and_priority_degrade_to_defaults()
  {
    let raw = r#"{
      "id": "p-9",
      "name": "Legacy import",
      "description": "",
      "status": "on-hold",
      "priority": "urgent",
      "progress": 12,
      "deliveryDate": "2026-01-05",
      "allocations": ["Ana"]
    }"#;

    let project: Project =
      serde_json::from_str(raw)
        .expect("record decodes");
    assert_eq!(
      project.status,
      ProjectStatus::Planning
    );
    assert_eq!(
      project.priority,
      ProjectPriority::Low
    );
  }

  #[test]
  fn serializes_with_wire_field_names() {
    let value =
      serde_json::to_value(sample_project())
        .expect("encodes");
    assert_eq!(
      value["deliveryDate"],
      "2026-03-10"
    );
    assert_eq!(value["status"], "in-progress");
    assert_eq!(value["priority"], "medium");
  }

  #[test]
  fn overdue_requires_past_date_and_open_status(
  ) {
    let mut project = sample_project();
    let after = Utc
      .with_ymd_and_hms(2026, 3, 11, 9, 0, 0)
      .single()
      .expect("valid instant");
    let before = Utc
      .with_ymd_and_hms(2026, 3, 9, 9, 0, 0)
      .single()
      .expect("valid instant");

    assert!(project.is_overdue(after));
    assert!(!project.is_overdue(before));

    project.status = ProjectStatus::Completed;
    assert!(!project.is_overdue(after));
  }

  #[test]
  fn delivery_day_counts_as_overdue_after_midnight_utc(
  ) {
    let project = sample_project();
    let midnight = Utc
      .with_ymd_and_hms(2026, 3, 10, 0, 0, 0)
      .single()
      .expect("valid instant");
    let morning = Utc
      .with_ymd_and_hms(2026, 3, 10, 8, 0, 0)
      .single()
      .expect("valid instant");

    assert!(!project.is_overdue(midnight));
    assert!(project.is_overdue(morning));
  }

  #[test]
  fn new_project_gets_unique_id() {
    let date = NaiveDate::from_ymd_opt(
      2026, 6, 1
    )
    .expect("valid date");
    let a = Project::new("A", date);
    let b = Project::new("B", date);
    assert_ne!(a.id, b.id);
    assert_eq!(
      a.status,
      ProjectStatus::Planning
    );
  }
}
