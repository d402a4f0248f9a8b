use crate::model::Charge;
use yew::prelude::*;

/// Keyframes for the glow and the readout fade. Widths animate with a plain CSS
/// transition whose overshooting curve stands in for a spring.
pub const SLIDER_CSS: &str = "
@keyframes bs-glow {
  0%, 100% { box-shadow: 0 0 10px 1px rgba(255,255,255,0.7), 0 0 15px 2px rgba(255,255,255,0.5), 0 0 20px 3px rgba(255,255,255,0.3); }
  50% { box-shadow: 0 0 12px 2px rgba(255,255,255,0.8), 0 0 20px 5px rgba(255,255,255,0.6), 0 0 30px 7px rgba(255,255,255,0.4); }
}
@keyframes bs-fade {
  from { opacity: 0.8; }
  to { opacity: 1; }
}
";

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressBarProps {
    pub charge: Charge,
    pub dragging: bool,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    // follow the pointer tightly while dragging, ease into place otherwise
    let transition = if props.dragging {
        "width 0.08s linear"
    } else {
        "width 0.35s cubic-bezier(0.34, 1.56, 0.64, 1)"
    };
    let style = format!(
        "height:100%; width:{}%; background:#f0f6fc; border-radius:6px; transition:{}; animation:bs-glow 3s ease-in-out infinite;",
        props.charge.value(),
        transition
    );
    html! { <div class="progress-bar" {style}></div> }
}
