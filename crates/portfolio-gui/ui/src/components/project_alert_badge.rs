use portfolio_gui_shared::AlertBadge;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ProjectAlertBadgeProps {
  pub alert: Option<AlertBadge>
}

#[function_component(ProjectAlertBadge)]
pub fn project_alert_badge(
  props: &ProjectAlertBadgeProps
) -> Html {
  let Some(alert) = props.alert else {
    return html! {};
  };

  html! {
      <span class={classes!("badge", "alert-badge", alert.class())}>
          <span class="icon" aria-hidden="true">{ "!" }</span>
          { alert.label() }
      </span>
  }
}
