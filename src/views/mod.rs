//! The views module contains the page-level components for our app. There is
//! a single page: [`Home`], which hosts the clock widget and wires its state
//! to the ticker and the time service.

mod home;
pub use home::Home;
