//! Project records and the pure display rules shared by the dashboard UI.

pub mod display;
pub mod draft;
pub mod overlay;
pub mod project;

pub use display::{
  ALLOCATION_PREVIEW_LIMIT,
  AlertBadge,
  AllocationPreview,
  BadgeStyle,
  alert_badge,
  allocation_preview,
  allocation_summary,
  card_accent_class,
  format_delivery_date,
  priority_badge,
  progress_bar_width,
  status_badge
};
pub use draft::{
  DraftError,
  ProjectDraft,
  split_allocations
};
pub use overlay::{
  CardAction,
  CardEffect,
  CardOverlays
};
pub use project::{
  Project,
  ProjectPriority,
  ProjectStatus
};
