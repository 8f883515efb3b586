use chrono::{
  DateTime,
  NaiveDate,
  Utc
};

use crate::project::{
  Project,
  ProjectPriority,
  ProjectStatus
};

/// Names shown as individual tags before the rest collapse into `+N`.
pub const ALLOCATION_PREVIEW_LIMIT: usize =
  3;

const DELIVERY_DATE_FORMAT: &str =
  "%d/%m/%Y";

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct BadgeStyle {
  pub label:      &'static str,
  pub background: &'static str,
  pub foreground: &'static str
}

impl BadgeStyle {
  pub fn class(&self) -> String {
    format!(
      "{} {}",
      self.background, self.foreground
    )
  }
}

pub fn status_badge(
  status: ProjectStatus
) -> BadgeStyle {
  match status {
    | ProjectStatus::Completed => {
      BadgeStyle {
        label:      "Completed",
        background: "bg-green-100",
        foreground: "text-green-800"
      }
    }
    | ProjectStatus::InProgress => {
      BadgeStyle {
        label:      "In Progress",
        background: "bg-blue-100",
        foreground: "text-blue-800"
      }
    }
    | ProjectStatus::Review => {
      BadgeStyle {
        label:      "In Review",
        background: "bg-yellow-100",
        foreground: "text-yellow-800"
      }
    }
    | ProjectStatus::Planning => {
      BadgeStyle {
        label:      "Planning",
        background: "bg-gray-100",
        foreground: "text-gray-800"
      }
    }
  }
}

pub fn priority_badge(
  priority: ProjectPriority
) -> BadgeStyle {
  match priority {
    | ProjectPriority::High => BadgeStyle {
      label:      "High",
      background: "bg-red-100",
      foreground: "text-red-800"
    },
    | ProjectPriority::Medium => {
      BadgeStyle {
        label:      "Medium",
        background: "bg-yellow-100",
        foreground: "text-yellow-800"
      }
    }
    | ProjectPriority::Low => BadgeStyle {
      label:      "Low",
      background: "bg-green-100",
      foreground: "text-green-800"
    }
  }
}

/// The single warning shown in the card corner.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum AlertBadge {
  Critical,
  Overdue,
  HighPriority
}

impl AlertBadge {
  pub fn label(self) -> &'static str {
    match self {
      | AlertBadge::Critical => "CRITICAL",
      | AlertBadge::Overdue => "OVERDUE",
      | AlertBadge::HighPriority => {
        "HIGH PRIORITY"
      }
    }
  }

  pub fn class(self) -> &'static str {
    match self {
      | AlertBadge::Critical => {
        "bg-red-700 text-white"
      }
      | AlertBadge::Overdue => {
        "bg-orange-500 text-white"
      }
      | AlertBadge::HighPriority => {
        "bg-red-500 text-white"
      }
    }
  }
}

pub fn alert_badge(
  project: &Project,
  now: DateTime<Utc>
) -> Option<AlertBadge> {
  match (
    project.is_high_priority(),
    project.is_overdue(now)
  ) {
    | (true, true) => {
      Some(AlertBadge::Critical)
    }
    | (false, true) => {
      Some(AlertBadge::Overdue)
    }
    | (true, false) => {
      Some(AlertBadge::HighPriority)
    }
    | (false, false) => None
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct AllocationPreview<'a> {
  pub shown:    &'a [String],
  pub overflow: Option<usize>
}

impl AllocationPreview<'_> {
  pub fn overflow_label(
    &self
  ) -> Option<String> {
    self
      .overflow
      .map(|hidden| format!("+{hidden}"))
  }

  pub fn is_empty(&self) -> bool {
    self.shown.is_empty()
  }
}

pub fn allocation_preview(
  allocations: &[String]
) -> AllocationPreview<'_> {
  let shown_len = allocations
    .len()
    .min(ALLOCATION_PREVIEW_LIMIT);
  let hidden =
    allocations.len() - shown_len;

  AllocationPreview {
    shown:    &allocations[..shown_len],
    overflow: (hidden > 0)
      .then_some(hidden)
  }
}

pub fn allocation_summary(
  count: usize
) -> String {
  format!("{count} person(s) allocated")
}

pub fn format_delivery_date(
  date: NaiveDate
) -> String {
  date
    .format(DELIVERY_DATE_FORMAT)
    .to_string()
}

/// Left border accent of the card.
pub fn card_accent_class(
  project: &Project
) -> &'static str {
  if project.is_high_priority() {
    "border-l-red-500"
  } else {
    "border-l-blue-500"
  }
}

/// Width of the filled progress bar. The numeric label keeps the raw value.
pub fn progress_bar_width(
  progress: i32
) -> i32 {
  progress.clamp(0, 100)
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  fn now() -> DateTime<Utc> {
    Utc
      .with_ymd_and_hms(2026, 5, 20, 12, 0, 0)
      .single()
      .expect("valid instant")
  }

  fn project_due(
    priority: ProjectPriority,
    status: ProjectStatus,
    delivery: (i32, u32, u32)
  ) -> Project {
    Project {
      id: "p-1".to_string(),
      name: "Warehouse sync".to_string(),
      description: String::new(),
      status,
      priority,
      progress: 50,
      delivery_date: NaiveDate::from_ymd_opt(
        delivery.0, delivery.1, delivery.2
      )
      .expect("valid date"),
      allocations: vec![]
    }
  }

  fn names(count: usize) -> Vec<String> {
    (1..=count)
      .map(|idx| format!("person-{idx}"))
      .collect()
  }

  #[test]
  fn status_table_matches_labels_and_colors()
  {
    let completed =
      status_badge(ProjectStatus::Completed);
    assert_eq!(completed.label, "Completed");
    assert_eq!(
      completed.class(),
      "bg-green-100 text-green-800"
    );

    let in_progress =
      status_badge(ProjectStatus::InProgress);
    assert_eq!(
      in_progress.label,
      "In Progress"
    );
    assert_eq!(
      in_progress.class(),
      "bg-blue-100 text-blue-800"
    );

    let review =
      status_badge(ProjectStatus::Review);
    assert_eq!(review.label, "In Review");
    assert_eq!(
      review.class(),
      "bg-yellow-100 text-yellow-800"
    );

    let unknown = status_badge(
      ProjectStatus::parse("archived")
    );
    assert_eq!(unknown.label, "Planning");
    assert_eq!(
      unknown.class(),
      "bg-gray-100 text-gray-800"
    );
  }

  #[test]
  fn priority_table_matches_labels_and_colors(
  ) {
    let high =
      priority_badge(ProjectPriority::High);
    assert_eq!(high.label, "High");
    assert_eq!(
      high.class(),
      "bg-red-100 text-red-800"
    );

    let medium =
      priority_badge(ProjectPriority::Medium);
    assert_eq!(medium.label, "Medium");
    assert_eq!(
      medium.class(),
      "bg-yellow-100 text-yellow-800"
    );

    let unknown = priority_badge(
      ProjectPriority::parse("")
    );
    assert_eq!(unknown.label, "Low");
    assert_eq!(
      unknown.class(),
      "bg-green-100 text-green-800"
    );
  }

  #[test]
  fn alert_badge_follows_precedence() {
    let critical = project_due(
      ProjectPriority::High,
      ProjectStatus::InProgress,
      (2026, 5, 1)
    );
    assert_eq!(
      alert_badge(&critical, now()),
      Some(AlertBadge::Critical)
    );

    let overdue = project_due(
      ProjectPriority::Medium,
      ProjectStatus::InProgress,
      (2026, 5, 1)
    );
    assert_eq!(
      alert_badge(&overdue, now()),
      Some(AlertBadge::Overdue)
    );

    let high = project_due(
      ProjectPriority::High,
      ProjectStatus::Review,
      (2026, 7, 1)
    );
    assert_eq!(
      alert_badge(&high, now()),
      Some(AlertBadge::HighPriority)
    );

    let calm = project_due(
      ProjectPriority::Low,
      ProjectStatus::Planning,
      (2026, 7, 1)
    );
    assert_eq!(alert_badge(&calm, now()), None);
  }

  #[test]
  fn completed_high_priority_project_is_not_critical(
  ) {
    let done = project_due(
      ProjectPriority::High,
      ProjectStatus::Completed,
      (2026, 1, 1)
    );
    assert_eq!(
      alert_badge(&done, now()),
      Some(AlertBadge::HighPriority)
    );
    assert_eq!(
      AlertBadge::Critical.label(),
      "CRITICAL"
    );
  }

  #[test]
  fn allocation_preview_collapses_after_three()
  {
    let empty: Vec<String> = vec![];
    let preview = allocation_preview(&empty);
    assert!(preview.is_empty());
    assert_eq!(preview.overflow_label(), None);

    let three = names(3);
    let preview = allocation_preview(&three);
    assert_eq!(preview.shown.len(), 3);
    assert_eq!(preview.overflow_label(), None);

    let five = names(5);
    let preview = allocation_preview(&five);
    assert_eq!(
      preview.shown,
      &five[..3]
    );
    assert_eq!(
      preview.overflow_label().as_deref(),
      Some("+2")
    );
  }

  #[test]
  fn delivery_date_renders_day_first() {
    let date = NaiveDate::from_ymd_opt(
      2026, 2, 7
    )
    .expect("valid date");
    assert_eq!(
      format_delivery_date(date),
      "07/02/2026"
    );
  }

  #[test]
  fn accent_and_progress_width() {
    let high = project_due(
      ProjectPriority::High,
      ProjectStatus::Planning,
      (2026, 7, 1)
    );
    let low = project_due(
      ProjectPriority::Low,
      ProjectStatus::Planning,
      (2026, 7, 1)
    );
    assert_eq!(
      card_accent_class(&high),
      "border-l-red-500"
    );
    assert_eq!(
      card_accent_class(&low),
      "border-l-blue-500"
    );
    assert_eq!(progress_bar_width(140), 100);
    assert_eq!(progress_bar_width(-5), 0);
    assert_eq!(progress_bar_width(64), 64);
    assert_eq!(
      allocation_summary(2),
      "2 person(s) allocated"
    );
  }
}
