pub mod app;
pub mod battery_slider;
pub mod charge_readout;
pub mod charging_icon;
pub mod progress_bar;
pub mod status_badge;

pub use battery_slider::BatterySlider;
