// Presentational components extracted from the app layout.

use dioxus::prelude::*;

use crate::api::SimilarWord;

/// One quick-select vocabulary entry. Clicking it hands the word back to the
/// parent, which copies it into the search box.
#[component]
pub fn WordChip(word: String, onselect: EventHandler<String>) -> Element {
    let selected = word.clone();
    rsx! {
        span {
            class: "word-chip",
            onclick: move |_| onselect.call(selected.clone()),
            "{word}"
        }
    }
}

/// One similarity candidate: the word, its score, and the reason text.
#[component]
pub fn ResultCard(result: SimilarWord, score_label: String) -> Element {
    rsx! {
        div { class: "result-card",
            div { class: "result-header",
                strong { "{result.word}" }
                span { class: "score", "{score_label} {result.score}" }
            }
            p { class: "result-reason", "{result.reason}" }
        }
    }
}
