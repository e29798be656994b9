use maintcard_gui_shared::MaintenanceCardInput;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::{
  Icon,
  IconName,
  StatusBadge
};

const CARD_ICON_SIZE: u32 = 24;
const CARD_ICON_COLOR: &str =
  "var(--accent-primary)";

#[derive(
  Properties, PartialEq, Clone, Debug,
)]
pub struct MaintenanceCardProps {
  pub title:       String,
  pub description: String,
  pub time:        String
}

impl From<MaintenanceCardInput>
  for MaintenanceCardProps
{
  fn from(
    input: MaintenanceCardInput
  ) -> Self {
    Self {
      title:       input.title,
      description: input.description,
      time:        input.time
    }
  }
}

/// Lays out one maintenance card.
///
/// The three strings are placed verbatim
/// into their own slots; the icon and the
/// status badge never change.
pub fn render_maintenance_card(
  props: &MaintenanceCardProps
) -> Html {
  html! {
      <div class="maintenance-card">
          <div class="maintenance-card-icon">
              <Icon
                  name={IconName::Wrench}
                  size={CARD_ICON_SIZE}
                  color={CARD_ICON_COLOR.to_string()}
              />
          </div>
          <div class="maintenance-card-body">
              <div class="maintenance-card-header">
                  <div class="maintenance-card-title">{ &props.title }</div>
                  <StatusBadge />
              </div>
              <div class="maintenance-card-description">{ &props.description }</div>
              <div class="maintenance-card-time">{ &props.time }</div>
          </div>
      </div>
  }
}

#[function_component(MaintenanceCard)]
pub fn maintenance_card(
  props: &MaintenanceCardProps
) -> Html {
  render_maintenance_card(props)
}
