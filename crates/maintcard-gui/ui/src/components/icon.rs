use std::fmt;
use std::str::FromStr;

use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

const WRENCH_PATH: &str = "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z";

/// Semantic glyph names the icon set
/// knows how to draw.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum IconName {
  Wrench
}

impl IconName {
  pub fn as_str(self) -> &'static str {
    match self {
      | IconName::Wrench => "wrench"
    }
  }

  fn path(self) -> &'static str {
    match self {
      | IconName::Wrench => WRENCH_PATH
    }
  }
}

impl fmt::Display for IconName {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for IconName {
  type Err = String;

  fn from_str(
    value: &str
  ) -> Result<Self, Self::Err> {
    match value.trim() {
      | "wrench" => Ok(IconName::Wrench),
      | other => {
        Err(format!(
          "unknown icon name: {other}"
        ))
      }
    }
  }
}

fn default_icon_size() -> u32 {
  20
}

fn default_icon_color() -> String {
  "currentColor".to_string()
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
  pub name:  IconName,
  #[prop_or_else(default_icon_size)]
  pub size:  u32,
  #[prop_or_else(default_icon_color)]
  pub color: String
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
  let size = props.size.to_string();
  let name = props.name.as_str();

  html! {
      <svg
          class={classes!("icon", format!("icon-{name}"))}
          role="img"
          aria-label={name}
          xmlns="http://www.w3.org/2000/svg"
          viewBox="0 0 24 24"
          width={size.clone()}
          height={size}
          fill="none"
          stroke={props.color.clone()}
          stroke-width="2"
          stroke-linecap="round"
          stroke-linejoin="round"
      >
          <path d={props.name.path()} />
      </svg>
  }
}
