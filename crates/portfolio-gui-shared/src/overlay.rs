use crate::project::Project;

/// Visibility of the two overlays a card can open. Both start closed and
/// live only as long as the card instance.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct CardOverlays {
  pub edit_open:    bool,
  pub details_open: bool
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardAction {
  ViewDetails,
  CloseDetails,
  Edit,
  CancelEdit,
  Delete,
  SubmitEdit(Project),
  DetailsUpdate(Project)
}

/// What the card must report to its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum CardEffect {
  Update(Project),
  Delete(String)
}

impl CardOverlays {
  pub fn apply(
    &mut self,
    action: CardAction,
    project: &Project
  ) -> Option<CardEffect> {
    match action {
      | CardAction::ViewDetails => {
        self.details_open = true;
        None
      }
      | CardAction::CloseDetails => {
        self.details_open = false;
        None
      }
      | CardAction::Edit => {
        self.edit_open = true;
        None
      }
      | CardAction::CancelEdit => {
        self.edit_open = false;
        None
      }
      | CardAction::Delete => Some(
        CardEffect::Delete(project.id.clone())
      ),
      | CardAction::SubmitEdit(updated) => {
        self.edit_open = false;
        Some(CardEffect::Update(updated))
      }
      | CardAction::DetailsUpdate(updated) => {
        Some(CardEffect::Update(updated))
      }
    }
  }
}
