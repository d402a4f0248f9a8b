// DOM reads for the slider: pointer coordinates and the track rectangle.
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};
use yew::NodeRef;

use crate::error::SliderError;
use crate::model::ContainerBounds;

/// Current on-screen extent of the element behind `node`.
pub fn read_bounds(node: &NodeRef) -> Result<ContainerBounds, SliderError> {
    let el = node
        .cast::<Element>()
        .ok_or(SliderError::BoundsUnavailable)?;
    let rect = el.get_bounding_client_rect();
    Ok(ContainerBounds::new(rect.left(), rect.width()))
}

/// Horizontal client coordinate of the first touch point, if any.
pub fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().item(0).map(|t| t.client_x() as f64)
}

/// Client x of a generic DOM event, for listeners registered on the document.
pub fn client_x(e: &Event) -> Option<f64> {
    if let Some(m) = e.dyn_ref::<MouseEvent>() {
        return Some(m.client_x() as f64);
    }
    e.dyn_ref::<TouchEvent>().and_then(first_touch_x)
}
