//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, forms, and modals.

mod clock_display;
pub use clock_display::ClockDisplay;

mod zone_select;
pub use zone_select::ZoneSelect;

mod motion;
pub use motion::PopIn;
