//! HTML page generation.
//!
//! The document shell is fixed; the only variable part is the content of the
//! `ul.cards` list, which holds either one card per animal or a "doesn't
//! exist" heading. Interpolated text goes through maud, which escapes it.

use crate::animal::Animal;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const PAGE_TITLE: &str = "My Animal Repository";

const UNKNOWN: &str = "Unknown";

const STYLESHEET: &str = r#"
    html { background-color: #ffe9e9; }
    body {
      font-family: 'Roboto','Helvetica Neue', Helvetica, Arial, sans-serif;
      padding: 1rem;
      width: 900px;
      margin: auto;
    }
    h1 {
      text-align: center;
      font-size: 40pt;
      font-weight: normal;
    }
    .cards {
      list-style: none;
      margin: 0;
      padding: 0;
    }
    .cards__item {
      background-color: white;
      border-radius: 0.25rem;
      box-shadow: 0 20px 40px -14px rgba(0,0,0,0.25);
      overflow: hidden;
      padding: 1rem;
      margin: 50px 0;
    }
    .card__title {
      font-size: 1.25rem;
      font-weight: 300;
      letter-spacing: 2px;
      text-transform: uppercase;
      margin-bottom: 0.5rem;
    }
    .card__text {
      font-size: 0.95rem;
      line-height: 1.5;
    }
    .card__fields {
      list-style: none;
      padding: 0;
      margin: 0;
    }
    .card__fields li {
      padding: 2px 0;
    }
"#;

/// Stable sort by name, case-sensitive. Missing names sort as "".
pub fn sort_animals(animals: &[Animal]) -> Vec<&Animal> {
    let mut sorted: Vec<&Animal> = animals.iter().collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    sorted
}

/// Render one animal as a card list item.
pub fn serialize_animal(animal: &Animal) -> Markup {
    let locations = if animal.locations().is_empty() {
        UNKNOWN.to_string()
    } else {
        animal.locations().join(", ")
    };

    html! {
        li class="cards__item" {
            div class="card__title" { (animal.display_name()) }
            div class="card__text" {
                ul class="card__fields" {
                    li { strong { "Diet:" } " " (animal.diet().unwrap_or(UNKNOWN)) }
                    li { strong { "Location:" } " " (locations) }
                    li { strong { "Type:" } " " (animal.kind().unwrap_or(UNKNOWN)) }
                    li { strong { "Skin Type:" } " " (animal.skin_type().unwrap_or(UNKNOWN)) }
                }
            }
        }
    }
}

/// All cards, sorted by name.
pub fn generate_animals_html(animals: &[Animal]) -> Markup {
    html! {
        @for animal in sort_animals(animals) {
            (serialize_animal(animal))
        }
    }
}

/// The complete document for a query and its results.
pub fn create_html_page(animals: &[Animal], query: &str) -> String {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { (PAGE_TITLE) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                h1 { (PAGE_TITLE) }
                ul class="cards" {
                    @if animals.is_empty() {
                        h2 { "The animal '" (query) "' doesn't exist." }
                    } @else {
                        (generate_animals_html(animals))
                    }
                }
            }
        }
    }
    .into_string()
}
