pub mod controller;
pub mod listeners;
pub mod pointer;

pub use controller::{SliderController, SliderEvent, Transition};
pub use listeners::GlobalListeners;
pub use pointer::{client_x, first_touch_x, read_bounds};
