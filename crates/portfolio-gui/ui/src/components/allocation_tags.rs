use portfolio_gui_shared::allocation_preview;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct AllocationTagsProps {
  pub allocations: Vec<String>
}

/// First few allocated people as tags, the rest as a single `+N` tag.
#[function_component(AllocationTags)]
pub fn allocation_tags(
  props: &AllocationTagsProps
) -> Html {
  let preview =
    allocation_preview(&props.allocations);
  if preview.is_empty() {
    return html! {};
  }

  html! {
      <div class="allocation-tags">
          {
              for preview.shown.iter().map(|person| html! {
                  <span class="badge badge-outline">{ person }</span>
              })
          }
          {
              if let Some(label) = preview.overflow_label() {
                  html! { <span class="badge badge-outline">{ label }</span> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
