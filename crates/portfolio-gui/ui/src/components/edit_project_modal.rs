use portfolio_gui_shared::{
  Project,
  ProjectDraft,
  ProjectPriority,
  ProjectStatus,
  priority_badge,
  status_badge
};
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct EditProjectModalProps {
  pub open:      bool,
  pub project:   Project,
  pub on_submit: Callback<Project>,
  pub on_cancel: Callback<()>
}

#[function_component(EditProjectModal)]
pub fn edit_project_modal(
  props: &EditProjectModalProps
) -> Html {
  let draft = {
    let project = props.project.clone();
    use_state(move || {
      ProjectDraft::from_project(&project)
    })
  };
  let error = use_state(|| None::<String>);

  {
    let draft = draft.clone();
    let error = error.clone();
    use_effect_with(
      (props.open, props.project.clone()),
      move |(open, project)| {
        if *open {
          draft.set(
            ProjectDraft::from_project(
              project
            )
          );
          error.set(None);
        }
        || ()
      }
    );
  }

  if !props.open {
    return html! {};
  }

  let edit_text =
    |apply: fn(&mut ProjectDraft, String)| {
      let draft = draft.clone();
      Callback::from(
        move |e: yew::InputEvent| {
          let input: HtmlInputElement =
            e.target_unchecked_into();
          let mut next = (*draft).clone();
          apply(&mut next, input.value());
          draft.set(next);
        }
      )
    };

  let on_description = {
    let draft = draft.clone();
    Callback::from(move |e: yew::InputEvent| {
      let area: HtmlTextAreaElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.description = area.value();
      draft.set(next);
    })
  };

  let on_status = {
    let draft = draft.clone();
    Callback::from(move |e: yew::Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.status =
        ProjectStatus::parse(&select.value());
      draft.set(next);
    })
  };

  let on_priority = {
    let draft = draft.clone();
    Callback::from(move |e: yew::Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.priority = ProjectPriority::parse(
        &select.value()
      );
      draft.set(next);
    })
  };

  let on_save = {
    let draft = draft.clone();
    let error = error.clone();
    let on_submit = props.on_submit.clone();
    Callback::from(move |_: yew::MouseEvent| {
      match (*draft).clone().into_project() {
        | Ok(project) => {
          error.set(None);
          on_submit.emit(project);
        }
        | Err(err) => {
          tracing::debug!(%err, "project draft rejected");
          error.set(Some(err.to_string()));
        }
      }
    })
  };

  let on_close = {
    let on_cancel = props.on_cancel.clone();
    Callback::from(move |_: yew::MouseEvent| {
      on_cancel.emit(())
    })
  };

  let current = (*draft).clone();

  html! {
      <div class="modal-backdrop" onclick={on_close.clone()}>
          <div class="modal" onclick={Callback::from(|e: yew::MouseEvent| e.stop_propagation())}>
              <div class="header">{ "Edit Project" }</div>
              <div class="content">
                  <div class="field">
                      <label>{ "Name" }</label>
                      <input
                          value={current.name.clone()}
                          oninput={edit_text(|draft, value| draft.name = value)}
                      />
                  </div>
                  <div class="field">
                      <label>{ "Description" }</label>
                      <textarea
                          value={current.description.clone()}
                          oninput={on_description}
                      />
                  </div>
                  <div class="field-row">
                      <div class="field">
                          <label>{ "Status" }</label>
                          <select onchange={on_status}>
                              {
                                  for ProjectStatus::ALL.into_iter().map(|status| html! {
                                      <option
                                          value={status.as_str()}
                                          selected={status == current.status}
                                      >
                                          { status_badge(status).label }
                                      </option>
                                  })
                              }
                          </select>
                      </div>
                      <div class="field">
                          <label>{ "Priority" }</label>
                          <select onchange={on_priority}>
                              {
                                  for ProjectPriority::ALL.into_iter().map(|priority| html! {
                                      <option
                                          value={priority.as_str()}
                                          selected={priority == current.priority}
                                      >
                                          { priority_badge(priority).label }
                                      </option>
                                  })
                              }
                          </select>
                      </div>
                  </div>
                  <div class="field-row">
                      <div class="field">
                          <label>{ "Progress (%)" }</label>
                          <input
                              type="number"
                              min="0"
                              max="100"
                              value={current.progress.clone()}
                              oninput={edit_text(|draft, value| draft.progress = value)}
                          />
                      </div>
                      <div class="field">
                          <label>{ "Delivery Date" }</label>
                          <input
                              type="date"
                              value={current.delivery_date.clone()}
                              oninput={edit_text(|draft, value| draft.delivery_date = value)}
                          />
                      </div>
                  </div>
                  <div class="field">
                      <label>{ "Allocated People" }</label>
                      <input
                          placeholder="Comma separated names"
                          value={current.allocations.clone()}
                          oninput={edit_text(|draft, value| draft.allocations = value)}
                      />
                  </div>
                  {
                      if let Some(message) = (*error).clone() {
                          html! { <div class="field-error">{ message }</div> }
                      } else {
                          html! {}
                      }
                  }
              </div>
              <div class="footer">
                  <button type="button" class="btn" onclick={on_close}>{ "Cancel" }</button>
                  <button type="button" class="btn" onclick={on_save}>{ "Save" }</button>
              </div>
          </div>
      </div>
  }
}
