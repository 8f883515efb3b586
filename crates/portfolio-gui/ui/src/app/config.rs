use portfolio_gui_shared::Project;
use serde::Deserialize;

const DASHBOARD_CONFIG_TOML: &str =
  include_str!("../../assets/dashboard.toml");
const DEFAULT_TITLE: &str =
  "Project Portfolio";
const DEFAULT_STORAGE_KEY: &str =
  "portfolio.projects";

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct DashboardConfig {
  #[serde(default)]
  pub version:     u32,
  #[serde(default = "default_title")]
  pub title:       String,
  #[serde(
    default = "default_storage_key"
  )]
  pub storage_key: String,
  #[serde(default)]
  pub projects:    Vec<Project>
}

impl Default for DashboardConfig {
  fn default() -> Self {
    Self {
      version:     0,
      title:       default_title(),
      storage_key: default_storage_key(),
      projects:    vec![]
    }
  }
}

fn default_title() -> String {
  DEFAULT_TITLE.to_string()
}

fn default_storage_key() -> String {
  DEFAULT_STORAGE_KEY.to_string()
}

pub fn load_dashboard_config()
-> DashboardConfig {
  match parse_dashboard_config(
    DASHBOARD_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        version = config.version,
        seed_projects = config.projects.len(),
        storage_key = %config.storage_key,
        "loaded dashboard config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing dashboard config; using defaults");
      DashboardConfig::default()
    }
  }
}

fn parse_dashboard_config(
  raw: &str
) -> Result<DashboardConfig, toml::de::Error>
{
  let mut config =
    toml::from_str::<DashboardConfig>(raw)?;
  sanitize_dashboard_config(&mut config);
  Ok(config)
}

fn sanitize_dashboard_config(
  config: &mut DashboardConfig
) {
  if config.title.trim().is_empty() {
    config.title = default_title();
  }
  if config.storage_key.trim().is_empty() {
    tracing::warn!(
      "dashboard storage key was empty; \
       using default"
    );
    config.storage_key =
      default_storage_key();
  }

  let mut seen =
    std::collections::BTreeSet::new();
  config.projects.retain(|project| {
    let fresh =
      seen.insert(project.id.clone());
    if !fresh {
      tracing::warn!(
        id = %project.id,
        "dropping seed project with duplicate id"
      );
    }
    fresh
  });
}

#[cfg(test)]
mod tests {
  use portfolio_gui_shared::{
    ProjectPriority,
    ProjectStatus
  };

  use super::*;

  #[test]
  fn bundled_config_parses() {
    let config = parse_dashboard_config(
      DASHBOARD_CONFIG_TOML
    )
    .expect("bundled config is valid");
    assert_eq!(
      config.storage_key,
      "portfolio.projects"
    );
    assert!(!config.projects.is_empty());
    assert!(config.projects.iter().any(
      |project| {
        project.allocations.len() > 3
      }
    ));
  }

  #[test]
  fn sanitize_fills_defaults_and_drops_duplicates(
  ) {
    let raw = r#"
      title = " "
      storage_key = ""

      [[projects]]
      id = "a"
      name = "First"
      status = "paused"
      priority = "urgent"
      deliveryDate = "2026-04-01"

      [[projects]]
      id = "a"
      name = "Duplicate"
      deliveryDate = "2026-04-02"
    "#;

    let config = parse_dashboard_config(raw)
      .expect("config parses");
    assert_eq!(config.title, DEFAULT_TITLE);
    assert_eq!(
      config.storage_key,
      DEFAULT_STORAGE_KEY
    );
    assert_eq!(config.projects.len(), 1);
    assert_eq!(
      config.projects[0].status,
      ProjectStatus::Planning
    );
    assert_eq!(
      config.projects[0].priority,
      ProjectPriority::Low
    );
  }
}
