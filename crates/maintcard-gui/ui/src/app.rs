mod deck;

use yew::{
  Html,
  function_component,
  html,
  use_state
};

use crate::components::MaintenanceCard;

pub use deck::{
  CardDeck,
  load_card_deck,
  parse_card_deck
};

#[function_component(App)]
pub fn app() -> Html {
  let deck = use_state(load_card_deck);

  html! {
      <div class="maintenance-deck">
          <div class="header">{ &deck.title }</div>
          {
              if deck.cards.is_empty() {
                  html! { <div class="maintenance-deck-empty">{ "No maintenance tasks" }</div> }
              } else {
                  html! {
                      <>
                          {
                              for deck.cards.iter().map(|card| html! {
                                  <MaintenanceCard
                                      title={card.title.clone()}
                                      description={card.description.clone()}
                                      time={card.time.clone()}
                                  />
                              })
                          }
                      </>
                  }
              }
          }
      </div>
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::render_markup;

  #[tokio::test]
  async fn app_renders_every_bundled_card(
  ) {
    let deck = load_card_deck();
    let markup =
      render_markup::<App, _>(|| ()).await;

    assert!(markup.contains(&deck.title));
    for card in &deck.cards {
      assert!(
        markup.contains(&card.title)
      );
    }
    assert_eq!(
      markup
        .matches(r#"class="maintenance-card""#)
        .count(),
      deck.cards.len()
    );
  }
}
