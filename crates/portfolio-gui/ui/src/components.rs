mod allocation_tags;
mod edit_project_modal;
mod project_alert_badge;
mod project_card;
mod project_card_menu;
mod project_card_meta;
mod project_details_modal;

pub use allocation_tags::AllocationTags;
pub use edit_project_modal::EditProjectModal;
pub use project_alert_badge::ProjectAlertBadge;
pub use project_card::ProjectCard;
pub use project_card_menu::ProjectCardMenu;
pub use project_card_meta::ProjectCardMeta;
pub use project_details_modal::ProjectDetailsModal;
