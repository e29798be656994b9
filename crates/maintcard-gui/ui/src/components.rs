mod icon;
mod maintenance_card;
mod status_badge;

pub use icon::{
  Icon,
  IconName,
  IconProps
};
pub use maintenance_card::{
  MaintenanceCard,
  MaintenanceCardProps,
  render_maintenance_card
};
pub use status_badge::{
  SCHEDULED_LABEL,
  StatusBadge
};
