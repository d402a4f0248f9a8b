use super::charging_icon::ChargingIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBadgeProps {
    pub message: &'static str,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <div class="battery-status" style="display:flex; align-items:center; gap:6px; color:#3fb950;">
            <ChargingIcon />
            <small class="charging-message" style="font-size:12px; letter-spacing:0.04em; text-transform:uppercase;">{ props.message }</small>
        </div>
    }
}
