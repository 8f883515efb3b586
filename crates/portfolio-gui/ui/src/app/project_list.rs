use chrono::{
  DateTime,
  Utc
};
use portfolio_gui_shared::Project;

/// Swaps in `updated` for the project with the same id. Returns whether a
/// project was replaced.
pub fn replace_project(
  projects: &mut [Project],
  updated: Project
) -> bool {
  match projects
    .iter_mut()
    .find(|project| project.id == updated.id)
  {
    | Some(slot) => {
      *slot = updated;
      true
    }
    | None => false
  }
}

pub fn remove_project(
  projects: &mut Vec<Project>,
  id: &str
) -> bool {
  let before = projects.len();
  projects.retain(|project| project.id != id);
  projects.len() != before
}

pub fn count_overdue(
  projects: &[Project],
  now: DateTime<Utc>
) -> usize {
  projects
    .iter()
    .filter(|project| project.is_overdue(now))
    .count()
}

#[cfg(test)]
mod tests {
  use chrono::{
    NaiveDate,
    TimeZone
  };
  use portfolio_gui_shared::ProjectStatus;

  use super::*;

  fn projects() -> Vec<Project> {
    let date = |day| {
      NaiveDate::from_ymd_opt(2026, 4, day)
        .expect("valid date")
    };
    let mut first =
      Project::new("First", date(1));
    first.id = "first".to_string();
    let mut second =
      Project::new("Second", date(20));
    second.id = "second".to_string();
    vec![first, second]
  }

  #[test]
  fn replace_swaps_matching_project_only() {
    let mut list = projects();
    let mut updated = list[1].clone();
    updated.status = ProjectStatus::Completed;

    assert!(replace_project(
      &mut list,
      updated.clone()
    ));
    assert_eq!(list[1], updated);
    assert_eq!(list[0].name, "First");

    let mut stranger = updated;
    stranger.id = "missing".to_string();
    assert!(!replace_project(
      &mut list, stranger
    ));
    assert_eq!(list.len(), 2);
  }

  #[test]
  fn remove_drops_by_id() {
    let mut list = projects();
    assert!(remove_project(
      &mut list, "first"
    ));
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "second");
    assert!(!remove_project(
      &mut list, "first"
    ));
  }

  #[test]
  fn counts_only_overdue_projects() {
    let list = projects();
    let now = Utc
      .with_ymd_and_hms(2026, 4, 10, 12, 0, 0)
      .single()
      .expect("valid instant");
    assert_eq!(count_overdue(&list, now), 1);
  }
}
