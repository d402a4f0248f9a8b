use crate::error::SliderError;
use crate::model::{Charge, ContainerBounds, DragPhase};

/// Input to the controller, already reduced to a single horizontal coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    Press { client_x: f64 },
    /// Mouse or touch move anywhere in the document.
    Move { client_x: f64 },
    /// Mouse-up, touch-end or touch-cancel anywhere in the document.
    Release,
}

/// What an event did to the controller.
#[derive(Debug, Default, PartialEq)]
pub struct Transition {
    pub changed: bool,
    /// Fault during the position update; the charge was left untouched.
    pub fault: Option<SliderError>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliderController {
    charge: Charge,
    phase: DragPhase,
}

impl SliderController {
    pub fn new(initial: Charge) -> Self {
        Self {
            charge: initial,
            phase: DragPhase::Idle,
        }
    }

    pub fn charge(&self) -> Charge {
        self.charge
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Applies one event. `bounds` is only invoked when a position update is due,
    /// so moves while idle never touch the DOM.
    pub fn handle<F>(&mut self, event: SliderEvent, bounds: F) -> Transition
    where
        F: FnOnce() -> Result<ContainerBounds, SliderError>,
    {
        match event {
            SliderEvent::Press { client_x } => {
                let mut t = self.update_from_position(client_x, bounds);
                if !self.phase.is_dragging() {
                    self.phase = DragPhase::Dragging;
                    t.changed = true;
                }
                log::debug!("press at x={client_x}, charge {}", self.charge);
                t
            }
            SliderEvent::Move { client_x } if self.phase.is_dragging() => {
                self.update_from_position(client_x, bounds)
            }
            SliderEvent::Move { .. } => Transition::default(),
            SliderEvent::Release => {
                if !self.phase.is_dragging() {
                    return Transition::default();
                }
                self.phase = DragPhase::Idle;
                log::debug!("drag ended at charge {}", self.charge);
                Transition {
                    changed: true,
                    fault: None,
                }
            }
        }
    }

    /// Sets the charge from a pointer coordinate. On any fault the charge is kept.
    pub fn update_from_position<F>(&mut self, client_x: f64, bounds: F) -> Transition
    where
        F: FnOnce() -> Result<ContainerBounds, SliderError>,
    {
        match bounds().and_then(|b| b.charge_at(client_x)) {
            Ok(next) => {
                log::trace!("charge {} -> {next} (x={client_x})", self.charge);
                let changed = next != self.charge;
                self.charge = next;
                Transition {
                    changed,
                    fault: None,
                }
            }
            Err(e) => Transition {
                changed: false,
                fault: Some(e),
            },
        }
    }
}
