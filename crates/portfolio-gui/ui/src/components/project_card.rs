use chrono::Utc;
use portfolio_gui_shared::{
  CardAction,
  CardEffect,
  CardOverlays,
  Project,
  alert_badge,
  card_accent_class,
  priority_badge,
  status_badge
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_state
};

use super::{
  EditProjectModal,
  ProjectAlertBadge,
  ProjectCardMenu,
  ProjectCardMeta,
  ProjectDetailsModal
};

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
  pub project:   Project,
  pub on_update: Callback<Project>,
  pub on_delete: Callback<String>
}

/// Reports a card effect to the parent. Each effect reaches exactly one
/// callback, once.
fn emit_card_effect(
  effect: Option<CardEffect>,
  on_update: &Callback<Project>,
  on_delete: &Callback<String>
) {
  match effect {
    | Some(CardEffect::Update(updated)) => {
      tracing::debug!(id = %updated.id, "card emitted update");
      on_update.emit(updated);
    }
    | Some(CardEffect::Delete(id)) => {
      tracing::debug!(%id, "card emitted delete");
      on_delete.emit(id);
    }
    | None => {}
  }
}

#[function_component(ProjectCard)]
pub fn project_card(
  props: &ProjectCardProps
) -> Html {
  let overlays =
    use_state(CardOverlays::default);

  let dispatch = {
    let overlays = overlays.clone();
    let project = props.project.clone();
    let on_update = props.on_update.clone();
    let on_delete = props.on_delete.clone();
    Callback::from(
      move |action: CardAction| {
        let mut next = *overlays;
        let effect =
          next.apply(action, &project);
        emit_card_effect(
          effect,
          &on_update,
          &on_delete
        );
        if next != *overlays {
          overlays.set(next);
        }
      }
    )
  };

  let project = &props.project;
  let status = status_badge(project.status);
  let priority =
    priority_badge(project.priority);
  let alert =
    alert_badge(project, Utc::now());

  let on_view_details = {
    let dispatch = dispatch.clone();
    Callback::from(move |_: yew::MouseEvent| {
      dispatch.emit(CardAction::ViewDetails)
    })
  };
  let on_edit_submit = {
    let dispatch = dispatch.clone();
    Callback::from(move |updated: Project| {
      dispatch.emit(CardAction::SubmitEdit(
        updated
      ))
    })
  };
  let on_edit_cancel = {
    let dispatch = dispatch.clone();
    Callback::from(move |_: ()| {
      dispatch.emit(CardAction::CancelEdit)
    })
  };
  let on_details_close = {
    let dispatch = dispatch.clone();
    Callback::from(move |_: ()| {
      dispatch.emit(CardAction::CloseDetails)
    })
  };
  let on_details_update = {
    let dispatch = dispatch.clone();
    Callback::from(move |updated: Project| {
      dispatch.emit(
        CardAction::DetailsUpdate(updated)
      )
    })
  };

  html! {
      <>
          <div class={classes!("project-card", card_accent_class(project))}>
              <div class="project-card-alert">
                  <ProjectAlertBadge alert={alert} />
              </div>
              <div class="project-card-header">
                  <div class="project-card-heading">
                      <div class="project-card-title">{ &project.name }</div>
                      <div class="project-card-description">{ &project.description }</div>
                  </div>
                  <ProjectCardMenu on_action={dispatch.clone()} />
              </div>
              <div class="project-card-badges">
                  <span class={classes!("badge", status.class())}>{ status.label }</span>
                  <span class={classes!("badge", priority.class())}>{ priority.label }</span>
              </div>
              <div class="project-card-content">
                  <ProjectCardMeta project={project.clone()} />
                  <button type="button" class="btn btn-outline btn-block" onclick={on_view_details}>
                      { "View Details" }
                  </button>
              </div>
          </div>
          <EditProjectModal
              open={overlays.edit_open}
              project={project.clone()}
              on_submit={on_edit_submit}
              on_cancel={on_edit_cancel}
          />
          <ProjectDetailsModal
              open={overlays.details_open}
              project={project.clone()}
              on_close={on_details_close}
              on_update={on_details_update}
          />
      </>
  }
}
