use dioxus::prelude::*;
use crate::dioxus_elements::input_data::MouseButton;
use crate::api::{ApiHandler, DbStatus, SimilarWord};
use crate::i18n::I18nService;
use crate::ui::{ResultCard, WordChip};
use crate::{load_settings, save_settings};
use tracing::error;

/// Submission guard: whitespace-only input never leaves the client.
fn submittable(term: &str) -> bool {
    !term.trim().is_empty()
}

pub fn app() -> Element {
    let i18n_service = use_signal(I18nService::detect);

    let mut backend_url = use_signal(load_settings);
    let mut words = use_signal(Vec::<String>::new);
    let mut user_word = use_signal(|| "".to_string());
    let mut results = use_signal(Vec::<SimilarWord>::new);
    let mut loading = use_signal(|| false);
    let mut db_status = use_signal(|| None::<DbStatus>);

    let mut status_msg = use_signal(|| "".to_string());
    let mut show_settings_modal = use_signal(|| false);
    let mut settings_url_input = use_signal(|| "".to_string());

    // Word list and backend health, fetched on mount and again whenever the
    // backend URL changes. A failed fetch leaves the list empty; the user can
    // still search, just without the quick-select vocabulary.
    let _backend_sync = use_resource(move || async move {
        let base = backend_url.read().clone();
        match ApiHandler::fetch_words(&base).await {
            Ok(list) => words.set(list),
            Err(e) => error!("Error fetching words: {e}"),
        }
        match ApiHandler::db_status(&base).await {
            Ok(info) => db_status.set(Some(info)),
            Err(e) => {
                error!("Error fetching backend status: {e}");
                db_status.set(None);
            }
        }
    });

    let mut handle_search = move || {
        let term = user_word.read().clone();
        if !submittable(&term) {
            return;
        }
        loading.set(true);
        spawn(async move {
            let base = backend_url.read().clone();
            // The term goes out exactly as typed; only the guard trims.
            match ApiHandler::search(&base, &term).await {
                Ok(found) => results.set(found),
                Err(e) => {
                    error!("Error searching: {e}");
                    let msg = format!("{} {}", i18n_service.read().translate("err-search"), e);
                    rfd::MessageDialog::new()
                        .set_level(rfd::MessageLevel::Error)
                        .set_title("SimWords")
                        .set_description(msg.as_str())
                        .show();
                }
            }
            loading.set(false);
        });
    };

    let i18n = i18n_service.read();
    let word_list = words.read().clone();
    let result_list = results.read().clone();
    let is_loading = *loading.read();

    let db_badge = db_status.read().clone().map(|health| {
        if health.is_connected() {
            let label = match (health.collection, health.points_count) {
                (Some(collection), Some(count)) => format!("{collection} | {count}"),
                (Some(collection), None) => collection,
                _ => "connected".to_string(),
            };
            (true, label)
        } else {
            (false, i18n.translate("status-db-error"))
        }
    });

    rsx! {
        div { class: "app-shell",
            div { class: "title-bar",
                onmousedown: |e| {
                    if e.held_buttons().contains(MouseButton::Primary) {
                        dioxus::desktop::window().drag();
                    }
                },
                div { class: "title-section-left",
                    span { style: "color: var(--accent-primary); margin-right: 5px;", "Sim" } "Words"
                }
                div { class: "title-section-center",
                    if let Some((ok, label)) = db_badge {
                        div { class: if ok { "db-status-box" } else { "db-status-box bad" },
                            span { class: if ok { "db-dot ok" } else { "db-dot bad" } }
                            span { "{label}" }
                        }
                    }
                }
                div { class: "title-section-right",
                    if !status_msg.read().is_empty() {
                        div { class: "status-box", "{status_msg}" }
                    }
                    div { class: "control-btn",
                        onmousedown: |e| e.stop_propagation(),
                        onclick: move |e| {
                            e.stop_propagation();
                            settings_url_input.set(backend_url.read().clone());
                            show_settings_modal.set(true);
                        },
                        "⚙"
                    }
                    div { class: "window-controls",
                        div { class: "control-btn",
                            onmousedown: |e| e.stop_propagation(),
                            onclick: |e| {
                                e.stop_propagation();
                                dioxus::desktop::window().set_minimized(true);
                            },
                            "_"
                        }
                        div { class: "control-btn",
                            onmousedown: |e| e.stop_propagation(),
                            onclick: |e| {
                                e.stop_propagation();
                                let w = dioxus::desktop::window();
                                if w.is_maximized() { w.set_maximized(false); } else { w.set_maximized(true); }
                            },
                            "☐"
                        }
                        div { class: "control-btn close",
                            onmousedown: |e| e.stop_propagation(),
                            onclick: |e| {
                                e.stop_propagation();
                                std::thread::spawn::<_, ()>(|| std::process::exit(0));
                            },
                            "✕"
                        }
                    }
                }
            }

            div { class: "content",
                h1 { "{i18n.translate(\"app-title\")}" }

                div { class: "words-section",
                    h3 { "{i18n.translate(\"words-title\")}" }
                    div { class: "words-list",
                        for word in word_list {
                            WordChip {
                                word: word,
                                onselect: move |w: String| user_word.set(w),
                            }
                        }
                    }
                }

                div { class: "search-section",
                    h2 { class: "search-title", "{i18n.translate(\"search-title\")}" }
                    div { class: "search-form",
                        div { class: "search-input-container",
                            input {
                                r#type: "text",
                                class: "search-input",
                                value: "{user_word}",
                                placeholder: "{i18n.translate(\"search-placeholder\")}",
                                oninput: move |evt| user_word.set(evt.value()),
                                onkeydown: move |evt| {
                                    if evt.key() == Key::Enter {
                                        handle_search();
                                    }
                                },
                            }
                            span { class: "search-input-icon", "✨" }
                        }
                        button {
                            class: "search-button",
                            disabled: is_loading,
                            onclick: move |_| handle_search(),
                            if is_loading {
                                span { class: "button-icon", "⏳" }
                                " {i18n.translate(\"btn-searching\")}"
                            } else {
                                span { class: "button-icon", "🚀" }
                                " {i18n.translate(\"btn-search\")}"
                            }
                        }
                    }
                }

                if !result_list.is_empty() {
                    div { class: "results",
                        h3 { "{i18n.translate(\"results-title\")}" }
                        div { class: "results-grid",
                            for result in result_list {
                                ResultCard {
                                    result: result,
                                    score_label: i18n.translate("score-label"),
                                }
                            }
                        }
                    }
                }
            }

            if *show_settings_modal.read() {
                div { class: "modal-overlay",
                    div { class: "modal",
                        h3 { style: "margin-top: 0;", "{i18n.translate(\"modal-settings-title\")}" }
                        div { class: "modal-section-label", "{i18n.translate(\"settings-backend-section\")}" }
                        input {
                            class: "input-modern",
                            style: "width: 100%; margin: 8px 0;",
                            placeholder: "{i18n.translate(\"settings-backend-url\")}",
                            value: "{settings_url_input}",
                            oninput: move |e| settings_url_input.set(e.value()),
                        }
                        div { class: "modal-buttons",
                            button { class: "toolbar-btn",
                                onclick: move |_| show_settings_modal.set(false),
                                "{i18n.translate(\"modal-cancel\")}"
                            }
                            button { class: "btn-primary",
                                onclick: move |_| {
                                    let url = settings_url_input.read().trim_end_matches('/').to_string();
                                    if !url.is_empty() {
                                        match save_settings(&url) {
                                            Ok(_) => status_msg.set(i18n_service.read().translate("status-saved")),
                                            Err(e) => status_msg.set(e),
                                        }
                                        backend_url.set(url);
                                    }
                                    show_settings_modal.set(false);
                                },
                                "{i18n.translate(\"modal-save\")}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::submittable;

    #[test]
    fn guard_rejects_empty_and_whitespace_input() {
        assert!(!submittable(""));
        assert!(!submittable("   "));
        assert!(!submittable("\t\n"));
    }

    #[test]
    fn guard_accepts_padded_words() {
        assert!(submittable("cat"));
        assert!(submittable("  cat "));
    }
}
