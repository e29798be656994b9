use serde::{
  Deserialize,
  Serialize
};

/// The three display strings a caller
/// hands to a maintenance card.
///
/// `time` is an already formatted label;
/// nothing here parses or reformats it.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct MaintenanceCardInput {
  pub title:       String,
  pub description: String,
  pub time:        String
}

impl MaintenanceCardInput {
  pub fn new(
    title: impl Into<String>,
    description: impl Into<String>,
    time: impl Into<String>
  ) -> Self {
    Self {
      title:       title.into(),
      description: description.into(),
      time:        time.into()
    }
  }
}
