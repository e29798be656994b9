use yew::{
  Html,
  classes,
  function_component,
  html
};

pub const SCHEDULED_LABEL: &str =
  "Scheduled";

// Only one status is ever shown.
#[function_component(StatusBadge)]
pub fn status_badge() -> Html {
  html! {
      <span class={classes!("badge", "status-badge", "status-scheduled")}>{ SCHEDULED_LABEL }</span>
  }
}
