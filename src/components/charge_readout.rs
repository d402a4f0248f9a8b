use crate::model::Charge;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ChargeReadoutProps {
    pub charge: Charge,
    pub time_left: AttrValue,
}

#[function_component(ChargeReadout)]
pub fn charge_readout(props: &ChargeReadoutProps) -> Html {
    let dot_style = "display:inline-block; width:4px; height:4px; border-radius:50%; background:#8b949e;";
    html! {
        <div class="data" style="display:flex; align-items:center; gap:10px;">
            <label for="battery" class="percentage" style="font-size:32px; font-weight:600; font-variant-numeric:tabular-nums;">
                // keyed so each new value remounts and replays the fade
                <span key={props.charge.to_string()} style="animation:bs-fade 0.4s ease-out;">{ props.charge.value() }</span>
                {"%"}
            </label>
            <span class="dot" style={dot_style}></span>
            <span class="timeleft" style="font-size:14px; opacity:0.8;">{ props.time_left.clone() }</span>
        </div>
    }
}
