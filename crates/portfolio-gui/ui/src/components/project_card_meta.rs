use portfolio_gui_shared::{
  Project,
  allocation_summary,
  format_delivery_date,
  progress_bar_width
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::AllocationTags;

#[derive(Properties, PartialEq)]
pub struct ProjectCardMetaProps {
  pub project: Project
}

#[function_component(ProjectCardMeta)]
pub fn project_card_meta(
  props: &ProjectCardMetaProps
) -> Html {
  let project = &props.project;
  let bar_style = format!(
    "width:{}%;",
    progress_bar_width(project.progress)
  );

  html! {
      <>
          <div class="project-progress">
              <div class="project-progress-label">
                  <span class="muted">{ "Progress" }</span>
                  <span class="strong">{ format!("{}%", project.progress) }</span>
              </div>
              <div class="progress-track">
                  <div class="progress-fill" style={bar_style}></div>
              </div>
          </div>
          <div class="project-card-meta muted">
              <span class="icon" aria-hidden="true">{ "📅" }</span>
              <span>{ format!("Delivery: {}", format_delivery_date(project.delivery_date)) }</span>
          </div>
          <div class="project-card-meta muted">
              <span class="icon" aria-hidden="true">{ "👥" }</span>
              <span>{ allocation_summary(project.allocations.len()) }</span>
          </div>
          <AllocationTags allocations={project.allocations.clone()} />
      </>
  }
}
