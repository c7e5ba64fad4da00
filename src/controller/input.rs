/// Platform-agnostic gesture input events and the gating vocabulary shared
/// by the handlers.
use glam::Vec2;

/// Where an input event landed, as far as gating is concerned. UI-targeted
/// events keep their default browser behavior (scrolling, focus, clicks)
/// unless a gesture is in progress or the event sits over rendered geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Inside the designated scrollable UI container.
    ScrollableUi,
    /// One of the registered interactive controls (inputs, buttons).
    InteractiveControl,
    /// Anything else, typically the canvas itself.
    Other,
}

impl TargetKind {
    pub fn is_ui(self) -> bool {
        matches!(self, TargetKind::ScrollableUi | TargetKind::InteractiveControl)
    }
}

/// Platform-independent gesture events. Pointer positions are stored from
/// `page` coordinates (y sign inverted on registration); `client`
/// coordinates feed the alpha hit test.
#[derive(Debug, Clone, Copy)]
pub enum GestureEvent {
    PointerDown {
        id: i32,
        page: Vec2,
        client: Vec2,
        target: TargetKind,
    },
    PointerMove {
        id: i32,
        page: Vec2,
    },
    /// Covers both pointer-up and pointer-leave.
    PointerUp {
        id: i32,
    },
    Wheel {
        delta_y: f32,
        client: Vec2,
        target: TargetKind,
    },
    /// First touch of a touch-start; used only to decide default suppression.
    TouchStart {
        client: Vec2,
        target: TargetKind,
    },
}

/// What the platform layer should do with the browser event after the
/// gesture system has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Suppress default behavior (`preventDefault`; pointer-down also blurs
    /// the focused element).
    Consume,
    /// Leave the event alone so the browser scrolls/focuses/clicks normally.
    PassThrough,
}

impl Disposition {
    pub fn consumed(self) -> bool {
        self == Disposition::Consume
    }
}

pub mod wasm {
    use super::*;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, EventTarget, Node, PointerEvent, TouchEvent, WheelEvent};

    /// The scrollable UI container and interactive controls consulted when
    /// classifying event targets.
    pub struct UiRegistry {
        scroll_region: Option<Element>,
        controls: Vec<Element>,
    }

    impl UiRegistry {
        /// Build the registry from the document: the container matching
        /// `scroll_selector` (e.g. `#ui-scroll`) plus every input and button
        /// currently in the DOM.
        pub fn from_document(document: &Document, scroll_selector: &str) -> Result<Self, JsValue> {
            let scroll_region = document.query_selector(scroll_selector)?;

            let list = document.query_selector_all("input, button")?;
            let mut controls = Vec::with_capacity(list.length() as usize);
            for i in 0..list.length() {
                if let Some(node) = list.get(i) {
                    if let Ok(el) = node.dyn_into::<Element>() {
                        controls.push(el);
                    }
                }
            }

            Ok(Self { scroll_region, controls })
        }

        pub fn classify(&self, target: Option<EventTarget>) -> TargetKind {
            let Some(target) = target else {
                return TargetKind::Other;
            };
            let Some(node) = target.dyn_ref::<Node>() else {
                return TargetKind::Other;
            };

            if let Some(scroll) = &self.scroll_region {
                if scroll.contains(Some(node)) {
                    return TargetKind::ScrollableUi;
                }
            }
            if self.controls.iter().any(|el| el.is_same_node(Some(node))) {
                return TargetKind::InteractiveControl;
            }
            TargetKind::Other
        }
    }

    pub fn pointer_down_to_gesture(e: &PointerEvent, registry: &UiRegistry) -> GestureEvent {
        GestureEvent::PointerDown {
            id: e.pointer_id(),
            page: Vec2::new(e.page_x() as f32, e.page_y() as f32),
            client: Vec2::new(e.client_x() as f32, e.client_y() as f32),
            target: registry.classify(e.target()),
        }
    }

    pub fn pointer_move_to_gesture(e: &PointerEvent) -> GestureEvent {
        GestureEvent::PointerMove {
            id: e.pointer_id(),
            page: Vec2::new(e.page_x() as f32, e.page_y() as f32),
        }
    }

    pub fn pointer_up_to_gesture(e: &PointerEvent) -> GestureEvent {
        GestureEvent::PointerUp { id: e.pointer_id() }
    }

    pub fn wheel_to_gesture(e: &WheelEvent, registry: &UiRegistry) -> GestureEvent {
        GestureEvent::Wheel {
            delta_y: e.delta_y() as f32,
            client: Vec2::new(e.client_x() as f32, e.client_y() as f32),
            target: registry.classify(e.target()),
        }
    }

    /// Returns `None` when the touch list is empty (nothing to hit-test).
    pub fn touch_start_to_gesture(e: &TouchEvent, registry: &UiRegistry) -> Option<GestureEvent> {
        let touch = e.touches().get(0)?;
        Some(GestureEvent::TouchStart {
            client: Vec2::new(touch.client_x() as f32, touch.client_y() as f32),
            target: registry.classify(e.target()),
        })
    }
}
