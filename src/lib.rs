// Gesture-to-camera glue for a canvas-rendered 3D scene: pointer, touch and
// wheel input becomes pan-as-rotation, pinch zoom and twist on a pair of
// shared model/view matrices, plus a redraw flag for the render loop.
pub mod logging;
pub mod math;

// MVC Architecture
pub mod controller;
pub mod model;

pub use controller::{
    AlphaSampler, CameraController, Disposition, GestureEvent, GestureSystem, GestureTracker,
    TargetKind, Viewport,
};
pub use model::ViewState;

// Common imports for the DOM wiring
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{
    AddEventListenerOptions, Document, HtmlCanvasElement, HtmlElement, PointerEvent, TouchEvent,
    WheelEvent, Window,
};

#[cfg(target_arch = "wasm32")]
use controller::input::wasm::{self as input_wasm, UiRegistry};

/// Read the viewport from the window and canvas backing store. Call again
/// (followed by [`GestureSystem::set_viewport`]) whenever either changes.
#[cfg(target_arch = "wasm32")]
pub fn viewport_from_canvas(window: &Window, canvas: &HtmlCanvasElement) -> Viewport {
    Viewport {
        dpr: window.device_pixel_ratio() as f32,
        width: canvas.width(),
        height: canvas.height(),
    }
}

/// Wire the gesture system to the document: pointer, wheel and touch
/// listeners on `body`, with `passive: false` where `preventDefault` must be
/// honored. The render loop keeps driving [`GestureSystem::update`] and
/// [`ViewState::take_redraw`] itself.
#[cfg(target_arch = "wasm32")]
pub fn attach_listeners(
    document: &Document,
    system: Rc<RefCell<GestureSystem>>,
    sampler: Rc<dyn AlphaSampler>,
    registry: Rc<UiRegistry>,
) -> Result<(), JsValue> {
    let body = document.body().ok_or(js_error("no body on document"))?;

    let active_options = AddEventListenerOptions::new();
    active_options.set_passive(false);

    // Pointer down: gate, then engage; consuming also defocuses whatever
    // widget held focus so it stops intercepting key events mid-gesture
    {
        let system = system.clone();
        let sampler = sampler.clone();
        let registry = registry.clone();
        let document = document.clone();
        let pointerdown = Closure::wrap(Box::new(move |e: PointerEvent| {
            let event = input_wasm::pointer_down_to_gesture(&e, &registry);
            if system.borrow_mut().process_event(&event, sampler.as_ref()).consumed() {
                e.prevent_default();
                if let Some(el) = document.active_element() {
                    if let Ok(el) = el.dyn_into::<HtmlElement>() {
                        let _ = el.blur();
                    }
                }
            }
        }) as Box<dyn FnMut(PointerEvent)>);
        body.add_event_listener_with_callback(
            "pointerdown",
            pointerdown.as_ref().unchecked_ref(),
        )?;
        pointerdown.forget();
    }

    // Pointer move: position update only, aggregates wait for the frame tick
    {
        let system = system.clone();
        let sampler = sampler.clone();
        let pointermove = Closure::wrap(Box::new(move |e: PointerEvent| {
            let event = input_wasm::pointer_move_to_gesture(&e);
            system.borrow_mut().process_event(&event, sampler.as_ref());
        }) as Box<dyn FnMut(PointerEvent)>);
        body.add_event_listener_with_callback_and_add_event_listener_options(
            "pointermove",
            pointermove.as_ref().unchecked_ref(),
            &active_options,
        )?;
        pointermove.forget();
    }

    // Pointer up and leave share a handler; removal is idempotent
    {
        let system = system.clone();
        let sampler = sampler.clone();
        let pointerup = Closure::wrap(Box::new(move |e: PointerEvent| {
            let event = input_wasm::pointer_up_to_gesture(&e);
            system.borrow_mut().process_event(&event, sampler.as_ref());
        }) as Box<dyn FnMut(PointerEvent)>);
        body.add_event_listener_with_callback("pointerup", pointerup.as_ref().unchecked_ref())?;
        body.add_event_listener_with_callback("pointerleave", pointerup.as_ref().unchecked_ref())?;
        pointerup.forget();
    }

    // Wheel: zooms except when the UI underneath should scroll instead
    {
        let system = system.clone();
        let sampler = sampler.clone();
        let registry = registry.clone();
        let wheel = Closure::wrap(Box::new(move |e: WheelEvent| {
            let event = input_wasm::wheel_to_gesture(&e, &registry);
            if system.borrow_mut().process_event(&event, sampler.as_ref()).consumed() {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(WheelEvent)>);
        body.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            wheel.as_ref().unchecked_ref(),
            &active_options,
        )?;
        wheel.forget();
    }

    // Touch start: suppressed under the same gate as pointer-down so the
    // page does not scroll while the user drags the geometry
    {
        let touchstart = Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Some(event) = input_wasm::touch_start_to_gesture(&e, &registry) {
                if system.borrow_mut().process_event(&event, sampler.as_ref()).consumed() {
                    e.prevent_default();
                }
            }
        }) as Box<dyn FnMut(TouchEvent)>);
        body.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            touchstart.as_ref().unchecked_ref(),
            &active_options,
        )?;
        touchstart.forget();
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn js_error<E: Into<String>>(msg: E) -> JsValue {
    JsValue::from_str(&msg.into())
}
