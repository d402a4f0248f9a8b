use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Event;
use yew::prelude::*;

use super::{
    charge_readout::ChargeReadout,
    progress_bar::{ProgressBar, SLIDER_CSS},
    status_badge::StatusBadge,
};
use crate::display::{status_message, time_remaining};
use crate::error::SliderError;
use crate::model::{Charge, DEFAULT_CHARGE};
use crate::state::{client_x, first_touch_x, read_bounds, GlobalListeners, SliderController, SliderEvent};

#[derive(Properties, PartialEq, Clone)]
pub struct BatterySliderProps {
    /// Starting level in percent; values above 100 are clamped.
    #[prop_or(DEFAULT_CHARGE)]
    pub initial_charge: u8,
}

/// Everything an event callback needs to drive the controller.
#[derive(Clone)]
struct SliderHandle {
    controller: Rc<RefCell<SliderController>>,
    track: NodeRef,
    redraw: UseForceUpdateHandle,
}

impl SliderHandle {
    fn apply(&self, event: SliderEvent) {
        let t = self
            .controller
            .borrow_mut()
            .handle(event, || read_bounds(&self.track));
        match t.fault {
            // track not rendered (yet): nothing to map against
            Some(SliderError::BoundsUnavailable) => log::debug!("{:?} ignored, track unmounted", event),
            Some(e) => log::error!("error updating charge: {}", e),
            None => {}
        }
        if t.changed {
            self.redraw.force_update();
        }
    }

    fn is_dragging(&self) -> bool {
        self.controller.borrow().phase().is_dragging()
    }
}

/// Subscribes to document-wide moves and releases so a drag keeps tracking the
/// pointer after it leaves the track, and ends wherever the button comes up.
fn attach_global(handle: &SliderHandle) -> Result<GlobalListeners, SliderError> {
    let mut listeners = GlobalListeners::on_document()?;

    for (kind, passive) in [("mousemove", true), ("touchmove", false)] {
        let h = handle.clone();
        listeners.listen(kind, passive, move |e: Event| {
            if !h.is_dragging() {
                return;
            }
            let Some(x) = client_x(&e) else {
                return;
            };
            if kind == "touchmove" {
                // keep the page from scrolling under the finger
                e.prevent_default();
            }
            h.apply(SliderEvent::Move { client_x: x });
        })?;
    }
    for kind in ["mouseup", "touchend", "touchcancel"] {
        let h = handle.clone();
        listeners.listen(kind, true, move |_e: Event| h.apply(SliderEvent::Release))?;
    }
    Ok(listeners)
}

#[function_component(BatterySlider)]
pub fn battery_slider(props: &BatterySliderProps) -> Html {
    let track_ref = use_node_ref();
    let initial = Charge::new(props.initial_charge);
    let controller = use_mut_ref(move || SliderController::new(initial));
    let redraw = use_force_update();
    let handle = SliderHandle {
        controller: controller.clone(),
        track: track_ref.clone(),
        redraw,
    };

    // Global listeners live exactly as long as this instance is mounted.
    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            let guard = match attach_global(&handle) {
                Ok(g) => {
                    log::debug!("{} global listeners attached", g.count());
                    Some(g)
                }
                Err(e) => {
                    log::error!("slider will not track drags: {}", e);
                    None
                }
            };
            move || drop(guard)
        });
    }

    let onmousedown = {
        let handle = handle.clone();
        Callback::from(move |e: MouseEvent| {
            // no text selection while dragging
            e.prevent_default();
            handle.apply(SliderEvent::Press {
                client_x: e.client_x() as f64,
            });
        })
    };
    let ontouchstart = {
        let handle = handle.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                handle.apply(SliderEvent::Press { client_x: x });
            }
        })
    };

    let (charge, dragging) = {
        let c = controller.borrow();
        (c.charge(), c.phase().is_dragging())
    };
    let time_left = AttrValue::from(time_remaining(charge));
    let track_style = format!(
        "position:relative; height:12px; border-radius:6px; background:rgba(240,246,252,0.12); touch-action:none; cursor:{};",
        if dragging { "grabbing" } else { "grab" }
    );

    html! {
        <div class="battery-container" style="display:flex; flex-direction:column; gap:14px; padding:20px 24px; min-width:280px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; color:#f0f6fc; user-select:none;">
            <style>{ SLIDER_CSS }</style>
            <StatusBadge message={status_message(charge)} />
            <ChargeReadout {charge} time_left={time_left.clone()} />
            <div
                ref={track_ref}
                id="battery"
                class="progress-container"
                role="slider"
                aria-label="Battery charge"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={charge.to_string()}
                aria-valuetext={time_left}
                tabindex="0"
                style={track_style}
                {onmousedown}
                {ontouchstart}
            >
                <ProgressBar {charge} {dragging} />
            </div>
        </div>
    }
}
