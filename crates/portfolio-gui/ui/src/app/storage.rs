use gloo::storage::errors::StorageError;
use gloo::storage::{
  LocalStorage,
  Storage
};
use portfolio_gui_shared::Project;
use serde_json::Value;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ProjectSource {
  Stored,
  Seed,
  /// Stored data exists but could not be fully read.
  Degraded
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProjects {
  pub projects: Vec<Project>,
  pub source:   ProjectSource
}

impl LoadedProjects {
  /// Degraded data is only written back once the user has changed the
  /// list, so unreadable entries survive a plain reload.
  pub fn should_persist(
    &self,
    current: &[Project]
  ) -> bool {
    self.source != ProjectSource::Degraded
      || current != self.projects.as_slice()
  }
}

/// Stored projects, or `seed` when nothing usable is stored yet.
pub fn load_projects(
  storage_key: &str,
  seed: &[Project]
) -> LoadedProjects {
  match LocalStorage::get::<Vec<Value>>(
    storage_key
  ) {
    | Ok(entries) => {
      let total = entries.len();
      let projects =
        decode_project_entries(entries);
      let source = if projects.len() == total
      {
        ProjectSource::Stored
      } else {
        ProjectSource::Degraded
      };
      tracing::info!(
        storage_key,
        count = projects.len(),
        skipped = total - projects.len(),
        "restored projects from local storage"
      );
      LoadedProjects {
        projects,
        source
      }
    }
    | Err(StorageError::KeyNotFound(_)) => {
      tracing::debug!(
        storage_key,
        "no stored projects; using seed list"
      );
      LoadedProjects {
        projects: seed.to_vec(),
        source:   ProjectSource::Seed
      }
    }
    | Err(error) => {
      tracing::warn!(
        storage_key,
        %error,
        "failed reading stored projects; \
         showing seed list without saving"
      );
      LoadedProjects {
        projects: seed.to_vec(),
        source:   ProjectSource::Degraded
      }
    }
  }
}

fn decode_project_entries(
  entries: Vec<Value>
) -> Vec<Project> {
  entries
    .into_iter()
    .enumerate()
    .filter_map(|(index, entry)| {
      match serde_json::from_value::<Project>(
        entry
      ) {
        | Ok(project) => Some(project),
        | Err(error) => {
          tracing::warn!(
            index,
            %error,
            "skipping undecodable stored project"
          );
          None
        }
      }
    })
    .collect()
}

pub fn save_projects(
  storage_key: &str,
  projects: &[Project]
) {
  if let Err(error) =
    LocalStorage::set(storage_key, projects)
  {
    tracing::error!(
      storage_key,
      %error,
      "failed persisting projects"
    );
  }
}
