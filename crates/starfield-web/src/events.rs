use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pause the driver while the page is hidden, resume when it becomes
/// visible again. Both transitions are idempotent so spurious events are
/// harmless.
pub fn wire_visibility_pause(document: &web::Document, ctx: Rc<RefCell<FrameContext>>) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let mut ctx = ctx.borrow_mut();
        if doc.hidden() {
            ctx.driver.pause();
        } else {
            ctx.driver.resume();
        }
    }) as Box<dyn FnMut()>);
    let _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Release every drawable resource when the page goes away.
pub fn wire_pagehide_teardown(window: &web::Window, ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move || {
        ctx.borrow_mut().dispose();
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
