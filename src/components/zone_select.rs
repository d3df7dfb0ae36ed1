use dioxus::prelude::*;

use crate::worldtime::models::TimeZoneOption;

/// Searchable dropdown over the zone catalog. Owns nothing but its own query
/// text and open/closed flag; a selection is reported upward through
/// `on_change` and the parent decides what it means.
#[component]
pub fn ZoneSelect(
    options: Vec<TimeZoneOption>,
    selected: Option<TimeZoneOption>,
    disabled: bool,
    on_change: EventHandler<TimeZoneOption>,
) -> Element {
    let mut query = use_signal(String::new);
    let mut open = use_signal(|| false);

    let filter = query().to_lowercase();
    let visible: Vec<TimeZoneOption> = options
        .iter()
        .filter(|option| {
            filter.is_empty()
                || option.label.to_lowercase().contains(&filter)
                || option.value.to_lowercase().contains(&filter)
        })
        .cloned()
        .collect();

    let placeholder = selected
        .as_ref()
        .map(|zone| zone.label.clone())
        .unwrap_or_else(|| "Select a time zone".to_string());
    let selected_value = selected.map(|zone| zone.value);

    rsx! {
        div { class: "zone-select",
            input {
                id: "timezone-select",
                class: "zone-select-input",
                r#type: "text",
                disabled,
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |event| {
                    query.set(event.value());
                    open.set(true);
                },
                onfocusin: move |_| open.set(true),
            }
            if open() && !disabled {
                // The menu opens upward so the clock panel above stays visible.
                ul { class: "zone-select-menu",
                    if visible.is_empty() {
                        li { class: "zone-select-empty", "No matching zones" }
                    }
                    {visible.into_iter().map(|option| {
                        let is_selected = selected_value.as_deref() == Some(option.value.as_str());
                        let option_class = if is_selected {
                            "zone-select-option selected"
                        } else {
                            "zone-select-option"
                        };
                        let label = option.label.clone();
                        let value = option.value.clone();
                        rsx! {
                            li {
                                key: "{value}",
                                class: "{option_class}",
                                onclick: move |_| {
                                    query.set(String::new());
                                    open.set(false);
                                    on_change.call(option.clone());
                                },
                                "{label}"
                            }
                        }
                    })}
                }
            }
        }
    }
}
