use maintcard_gui_shared::MaintenanceCardInput;
use serde::Deserialize;

const CARD_DECK_TOML: &str =
  include_str!("../../assets/deck.toml");

fn deck_default_title() -> String {
  "Maintenance".to_string()
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct CardDeck {
  #[serde(default)]
  pub version: u32,
  #[serde(
    default = "deck_default_title"
  )]
  pub title:   String,
  #[serde(default)]
  pub cards:   Vec<MaintenanceCardInput>
}

impl Default for CardDeck {
  fn default() -> Self {
    Self {
      version: 0,
      title:   deck_default_title(),
      cards:   vec![]
    }
  }
}

pub fn parse_card_deck(
  text: &str
) -> Result<CardDeck, toml::de::Error> {
  toml::from_str::<CardDeck>(text)
}

pub fn load_card_deck() -> CardDeck {
  load_card_deck_from(CARD_DECK_TOML)
}

fn load_card_deck_from(
  text: &str
) -> CardDeck {
  match parse_card_deck(text) {
    | Ok(deck) if !deck.cards.is_empty() => {
      tracing::info!(
        version = deck.version,
        card_count = deck.cards.len(),
        "loaded card deck"
      );
      deck
    }
    | Ok(deck) => {
      tracing::warn!(
        title = %deck.title,
        "card deck has no cards"
      );
      deck
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing card deck; using empty deck");
      CardDeck::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_deck_parses_with_cards() {
    let deck =
      parse_card_deck(CARD_DECK_TOML)
        .expect("bundled deck parses");

    assert_eq!(deck.version, 1);
    assert!(!deck.cards.is_empty());
    assert_eq!(
      deck.cards[0].title,
      "Oil change"
    );
  }

  #[test]
  fn cards_keep_their_listed_order() {
    let deck = parse_card_deck(
      r#"
        [[cards]]
        title = "first"
        description = "a"
        time = "1"

        [[cards]]
        title = "second"
        description = "b"
        time = "2"
      "#
    )
    .expect("valid deck");

    let titles = deck
      .cards
      .iter()
      .map(|card| card.title.as_str())
      .collect::<Vec<_>>();
    assert_eq!(
      titles,
      vec!["first", "second"]
    );
    assert_eq!(deck.title, "Maintenance");
    assert_eq!(deck.version, 0);
  }

  #[test]
  fn card_missing_a_field_is_rejected() {
    let result = parse_card_deck(
      r#"
        [[cards]]
        title = "Oil change"
        description = "Replace engine oil"
      "#
    );

    assert!(result.is_err());
  }

  #[test]
  fn invalid_toml_falls_back_to_default_deck(
  ) {
    let deck = load_card_deck_from(
      "cards = [this is not toml"
    );

    assert_eq!(deck, CardDeck::default());
  }

  #[test]
  fn empty_deck_keeps_its_title() {
    let deck = load_card_deck_from(
      r#"title = "Fleet""#
    );

    assert_eq!(deck.title, "Fleet");
    assert!(deck.cards.is_empty());
  }
}
