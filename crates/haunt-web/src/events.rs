use crate::input::{self, DragMode, PointerState};
use haunt_core::HauntedHouse;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire pointer and wheel events on the canvas to the orbit controls.
pub fn attach_orbit_input(canvas: &web::HtmlCanvasElement, house: Rc<RefCell<HauntedHouse>>) {
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    // pointerdown: choose rotate or pan and capture the pointer
    {
        let canvas_c = canvas.clone();
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let modifier = ev.shift_key() || ev.ctrl_key() || ev.meta_key();
            if let Some(mode) = input::drag_mode(ev.button(), modifier) {
                let at = input::pointer_canvas_px(&ev, &canvas_c);
                pointer.borrow_mut().start(mode, at);
                _ = canvas_c.set_pointer_capture(ev.pointer_id());
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove: feed drag deltas to the controls
    {
        let canvas_c = canvas.clone();
        let pointer = pointer.clone();
        let house = house.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let at = input::pointer_canvas_px(&ev, &canvas_c);
            let Some((mode, delta)) = pointer.borrow_mut().drag(at) else {
                return;
            };
            let viewport_h = canvas_c.height() as f32;
            let mut guard = house.borrow_mut();
            let h = &mut *guard;
            match mode {
                DragMode::Rotate => h.controls.rotate(delta.x, delta.y, viewport_h),
                DragMode::Pan => h.controls.pan(&h.camera, delta.x, delta.y, viewport_h),
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup / pointercancel end the drag
    for name in ["pointerup", "pointercancel"] {
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            pointer.borrow_mut().end();
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // wheel: dolly; non-passive so the page does not scroll
    {
        let house = house.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ev.prevent_default();
            let notches = input::wheel_notches(ev.delta_y());
            if notches != 0.0 {
                house.borrow_mut().controls.dolly(notches);
            }
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }

    // right-drag pans, so keep the context menu out of the way
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
