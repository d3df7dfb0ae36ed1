use chrono::{Local, NaiveDateTime};
use dioxus::prelude::*;

use crate::components::{ClockDisplay, PopIn, ZoneSelect};
use crate::worldtime::client::Client;
use crate::worldtime::events::ClockEvent;
use crate::worldtime::models::{ClockState, Mode, TimeZoneOption};

fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// The clock page. All state lives in one [`ClockState`] signal; the ticker,
/// the catalog fetch and per-selection time fetches each feed it events.
#[component]
pub fn Home() -> Element {
    let mut state = use_signal(|| ClockState::new(now_local()));

    // 1-second ticker. Only advances the display while local mode is active;
    // dropped (and thereby cancelled) when the component unmounts.
    use_future(move || async move {
        loop {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;

            state.write().apply_event(ClockEvent::Tick { now: now_local() });
        }
    });

    // Catalog fetch, once per mount. The initial default selection flows
    // through the same SelectionChanged path a user change would take.
    use_future(move || async move {
        match Client::default().available_time_zones().await {
            Ok(zones) => {
                let mut current = state.write();
                current.apply_event(ClockEvent::CatalogLoaded { zones });
                if let Some(sentinel) = current.zones.first().cloned() {
                    current.apply_event(ClockEvent::SelectionChanged {
                        zone: sentinel,
                        now: now_local(),
                    });
                }
            }
            Err(err) => {
                tracing::error!("time zone catalog fetch failed: {err}");
                state.write().apply_event(ClockEvent::CatalogFailed);
            }
        }
    });

    let on_select = move |zone: TimeZoneOption| {
        let pending = {
            let mut current = state.write();
            current.apply_event(ClockEvent::SelectionChanged {
                zone: zone.clone(),
                now: now_local(),
            });
            (current.mode == Mode::Remote).then(|| (zone.value.clone(), current.generation))
        };

        // A remote selection owns exactly one fetch, stamped with the
        // generation it was dispatched under.
        if let Some((zone_id, generation)) = pending {
            spawn(async move {
                match Client::default().current_time(&zone_id).await {
                    Ok(snapshot) => match snapshot.parsed_date_time() {
                        Ok(time) => {
                            state
                                .write()
                                .apply_event(ClockEvent::ZoneTimeLoaded { generation, time });
                        }
                        Err(err) => {
                            tracing::warn!("{err}");
                            state
                                .write()
                                .apply_event(ClockEvent::ZoneTimeFailed { generation });
                        }
                    },
                    Err(err) => {
                        tracing::error!("world time fetch failed for {zone_id}: {err}");
                        state
                            .write()
                            .apply_event(ClockEvent::ZoneTimeFailed { generation });
                    }
                }
            });
        }
    };

    let current = state.read();
    let displayed = current.displayed;
    let loading = current.loading;
    let error = current.error.clone();
    let zones = current.zones.clone();
    let selected = current.selected.clone();
    drop(current);

    let date_line = displayed.format("%A, %B %-d, %Y").to_string();
    let selected_label = selected
        .as_ref()
        .map(|zone| zone.label.clone())
        .unwrap_or_else(|| "None".to_string());

    rsx! {
        div { id: "clock-page",
            h1 { id: "clock-title", "What Time is it?" }
            PopIn { class: "clock-panel",
                ClockDisplay { time: displayed, loading }
            }
            div { class: "detail-panel",
                h2 { "Time Details" }
                if let Some(message) = error {
                    p { class: "error-message", "{message}" }
                }
                div { class: "detail-row",
                    p { class: "detail-label", "Current Date:" }
                    p { class: "detail-value", "{date_line}" }
                }
                div { class: "detail-row",
                    p { class: "detail-label", "Selected Time Zone:" }
                    p { class: "detail-value", "{selected_label}" }
                }
                div { class: "detail-row",
                    label { r#for: "timezone-select", class: "detail-label", "Select Time Zone:" }
                    ZoneSelect {
                        options: zones,
                        selected,
                        disabled: loading,
                        on_change: on_select,
                    }
                }
            }
        }
    }
}
