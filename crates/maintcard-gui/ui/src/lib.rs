pub mod app;
pub mod components;

pub use components::{
  Icon,
  IconName,
  MaintenanceCard,
  MaintenanceCardProps,
  StatusBadge
};
