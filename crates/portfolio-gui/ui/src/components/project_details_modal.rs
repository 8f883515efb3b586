use chrono::Utc;
use portfolio_gui_shared::{
  Project,
  ProjectStatus,
  alert_badge,
  format_delivery_date,
  priority_badge,
  progress_bar_width,
  status_badge
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::ProjectAlertBadge;

const PROGRESS_STEP: i32 = 10;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailsModalProps {
  pub open:      bool,
  pub project:   Project,
  pub on_close:  Callback<()>,
  pub on_update: Callback<Project>
}

fn with_progress_step(
  project: &Project,
  step: i32
) -> Project {
  let mut next = project.clone();
  next.progress = progress_bar_width(
    project.progress.saturating_add(step)
  );
  next
}

fn marked_completed(
  project: &Project
) -> Project {
  let mut next = project.clone();
  next.status = ProjectStatus::Completed;
  next.progress = 100;
  next
}

#[function_component(ProjectDetailsModal)]
pub fn project_details_modal(
  props: &ProjectDetailsModalProps
) -> Html {
  if !props.open {
    return html! {};
  }

  let project = &props.project;
  let status = status_badge(project.status);
  let priority =
    priority_badge(project.priority);

  let emit_with = |build: fn(&Project) -> Project| {
    let on_update = props.on_update.clone();
    let project = project.clone();
    Callback::from(move |_: yew::MouseEvent| {
      on_update.emit(build(&project))
    })
  };

  let on_close = {
    let on_close = props.on_close.clone();
    Callback::from(move |_: yew::MouseEvent| {
      on_close.emit(())
    })
  };

  html! {
      <div class="modal-backdrop" onclick={on_close.clone()}>
          <div class="modal" onclick={Callback::from(|e: yew::MouseEvent| e.stop_propagation())}>
              <div class="header">
                  { &project.name }
                  <ProjectAlertBadge alert={alert_badge(project, Utc::now())} />
              </div>
              <div class="content">
                  <div class="details-description">{ &project.description }</div>
                  <div class="project-card-badges">
                      <span class={classes!("badge", status.class())}>{ status.label }</span>
                      <span class={classes!("badge", priority.class())}>{ priority.label }</span>
                  </div>
                  <div class="details-grid">
                      <div class="muted">{ "Progress" }</div>
                      <div>{ format!("{}%", project.progress) }</div>
                      <div class="muted">{ "Delivery" }</div>
                      <div>{ format_delivery_date(project.delivery_date) }</div>
                      <div class="muted">{ "Allocated" }</div>
                      <div>
                          {
                              if project.allocations.is_empty() {
                                  html! { <span class="muted">{ "Nobody allocated yet." }</span> }
                              } else {
                                  html! {
                                      <ul class="allocation-list">
                                          { for project.allocations.iter().map(|person| html! { <li>{ person }</li> }) }
                                      </ul>
                                  }
                              }
                          }
                      </div>
                  </div>
              </div>
              <div class="footer">
                  <button
                      type="button"
                      class="btn"
                      disabled={project.progress <= 0}
                      onclick={emit_with(|project| with_progress_step(project, -PROGRESS_STEP))}
                  >
                      { format!("-{PROGRESS_STEP}%") }
                  </button>
                  <button
                      type="button"
                      class="btn"
                      disabled={project.progress >= 100}
                      onclick={emit_with(|project| with_progress_step(project, PROGRESS_STEP))}
                  >
                      { format!("+{PROGRESS_STEP}%") }
                  </button>
                  {
                      if project.status == ProjectStatus::Completed {
                          html! {}
                      } else {
                          html! {
                              <button type="button" class="btn ok" onclick={emit_with(marked_completed)}>
                                  { "Mark Completed" }
                              </button>
                          }
                      }
                  }
                  <button type="button" class="btn" onclick={on_close}>{ "Close" }</button>
              </div>
          </div>
      </div>
  }
}
