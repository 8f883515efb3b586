use portfolio_gui_shared::CardAction;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_state
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuEvent {
  Toggle,
  Dismiss,
  Pick
}

fn menu_open_after(
  open: bool,
  event: MenuEvent
) -> bool {
  match event {
    | MenuEvent::Toggle => !open,
    | MenuEvent::Dismiss | MenuEvent::Pick => {
      false
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardMenuProps {
  pub on_action: Callback<CardAction>
}

/// The "more" dropdown in the card header.
#[function_component(ProjectCardMenu)]
pub fn project_card_menu(
  props: &ProjectCardMenuProps
) -> Html {
  let open = use_state(|| false);

  let on_toggle = {
    let open = open.clone();
    Callback::from(move |e: yew::MouseEvent| {
      e.stop_propagation();
      open.set(menu_open_after(
        *open,
        MenuEvent::Toggle
      ));
    })
  };

  let on_dismiss = {
    let open = open.clone();
    Callback::from(move |_: yew::MouseEvent| {
      open.set(menu_open_after(
        *open,
        MenuEvent::Dismiss
      ))
    })
  };

  let make_item = |label: &'static str,
                   class: &'static str,
                   action: CardAction| {
    let open = open.clone();
    let on_action = props.on_action.clone();
    html! {
        <button
            type="button"
            class={class}
            onclick={move |_| {
                open.set(menu_open_after(*open, MenuEvent::Pick));
                on_action.emit(action.clone());
            }}
        >
            { label }
        </button>
    }
  };

  html! {
      <div class="dropdown">
          <button type="button" class="btn btn-ghost btn-icon" title="Actions" onclick={on_toggle}>{ "⋯" }</button>
          {
              if *open {
                  html! {
                      <>
                      <div class="dropdown-backdrop" onclick={on_dismiss}></div>
                      <div class="dropdown-content">
                          { make_item("View Details", "dropdown-item", CardAction::ViewDetails) }
                          { make_item("Edit", "dropdown-item", CardAction::Edit) }
                          { make_item("Delete", "dropdown-item danger", CardAction::Delete) }
                      </div>
                      </>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
