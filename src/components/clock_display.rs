use chrono::{NaiveDateTime, Timelike};
use dioxus::prelude::*;

use crate::worldtime::models::format_time_unit;

/// The seven-segment-style digital readout. Pure render: formats the given
/// instant as zero-padded 24-hour digits, or a placeholder while a fetch is
/// outstanding. The colon blink and glow live entirely in the stylesheet.
#[component]
pub fn ClockDisplay(time: NaiveDateTime, loading: bool) -> Element {
    if loading {
        return rsx! {
            div { class: "clock-digits",
                span { class: "clock-loading", "Loading..." }
            }
        };
    }

    let hours = format_time_unit(time.hour());
    let minutes = format_time_unit(time.minute());
    let seconds = format_time_unit(time.second());

    rsx! {
        div { class: "clock-digits",
            span { aria_label: "{hours} hours", "{hours}" }
            span { class: "clock-colon", aria_hidden: "true", ":" }
            span { aria_label: "{minutes} minutes", "{minutes}" }
            span { class: "clock-colon", aria_hidden: "true", ":" }
            span { aria_label: "{seconds} seconds", "{seconds}" }
        }
    }
}
