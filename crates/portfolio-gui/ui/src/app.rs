mod config;
mod project_list;
mod storage;

use chrono::{
  Duration,
  Utc
};
use portfolio_gui_shared::Project;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_state
};

use self::config::load_dashboard_config;
use self::project_list::{
  count_overdue,
  remove_project,
  replace_project
};
use self::storage::{
  load_projects,
  save_projects
};
use crate::components::ProjectCard;

const NEW_PROJECT_LEAD_DAYS: i64 = 30;

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_dashboard_config);
  let loaded = {
    let config_snapshot =
      (*config).clone();
    use_state(move || {
      load_projects(
        &config_snapshot.storage_key,
        &config_snapshot.projects
      )
    })
  };
  let projects = {
    let initial = loaded.projects.clone();
    use_state(move || initial)
  };

  {
    let storage_key =
      config.storage_key.clone();
    let loaded = loaded.clone();
    use_effect_with(
      (*projects).clone(),
      move |projects| {
        if loaded.should_persist(projects) {
          save_projects(&storage_key, projects);
          tracing::debug!(
            count = projects.len(),
            "persisted projects"
          );
        } else {
          tracing::debug!(
            "stored projects left untouched \
             until the list changes"
          );
        }
        || ()
      }
    );
  }

  let on_update = {
    let projects = projects.clone();
    Callback::from(move |updated: Project| {
      let mut next = (*projects).clone();
      let id = updated.id.clone();
      if !replace_project(&mut next, updated)
      {
        tracing::warn!(
          %id,
          "update for unknown project ignored"
        );
        return;
      }
      tracing::info!(%id, "project updated");
      projects.set(next);
    })
  };

  let on_delete = {
    let projects = projects.clone();
    Callback::from(move |id: String| {
      let mut next = (*projects).clone();
      if !remove_project(&mut next, &id) {
        tracing::warn!(
          %id,
          "delete for unknown project ignored"
        );
        return;
      }
      tracing::info!(%id, "project deleted");
      projects.set(next);
    })
  };

  let on_add = {
    let projects = projects.clone();
    Callback::from(move |_: yew::MouseEvent| {
      let delivery = (Utc::now()
        + Duration::days(
          NEW_PROJECT_LEAD_DAYS
        ))
      .date_naive();
      let project =
        Project::new("New project", delivery);
      tracing::info!(id = %project.id, "project added");
      let mut next = (*projects).clone();
      next.push(project);
      projects.set(next);
    })
  };

  let overdue =
    count_overdue(&projects, Utc::now());

  html! {
      <div class="dashboard">
          <div class="dashboard-header">
              <div>
                  <div class="dashboard-title">{ &config.title }</div>
                  <div class="dashboard-subtitle">
                      { format!("{} project(s)", projects.len()) }
                      {
                          if overdue > 0 {
                              html! { <span class="badge bg-orange-500 text-white">{ format!("{overdue} overdue") }</span> }
                          } else {
                              html! {}
                          }
                      }
                  </div>
              </div>
              <button type="button" class="btn" onclick={on_add}>{ "New Project" }</button>
          </div>
          {
              if projects.is_empty() {
                  html! { <div class="dashboard-empty">{ "No projects yet." }</div> }
              } else {
                  html! {
                      <div class="project-grid">
                          {
                              for projects.iter().map(|project| html! {
                                  <ProjectCard
                                      key={project.id.clone()}
                                      project={project.clone()}
                                      on_update={on_update.clone()}
                                      on_delete={on_delete.clone()}
                                  />
                              })
                          }
                      </div>
                  }
              }
          }
      </div>
  }
}
