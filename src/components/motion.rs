use dioxus::prelude::*;

/// Wraps its children in an entrance animation. Purely visual; the animation
/// itself is a CSS keyframe class.
#[component]
pub fn PopIn(
    children: Element,
    #[props(into, default = "animate-pop-in".to_string())] animation: String,
    #[props(into, default = String::new())] class: String,
) -> Element {
    rsx! {
        div {
            class: "{class} {animation}",
            {children}
        }
    }
}
