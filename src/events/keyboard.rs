use crate::audio;
use rotunda_core::SessionState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(
    ev: &web::KeyboardEvent,
    session: &Rc<RefCell<SessionState>>,
    audio_ctx: &web::AudioContext,
) {
    // First gesture unlocks audio.
    audio::resume_if_suspended(audio_ctx);
    let bound = session.borrow_mut().key_down(&ev.code(), ev.repeat());
    if bound {
        // Arrow keys would otherwise scroll the page.
        ev.prevent_default();
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, session: &Rc<RefCell<SessionState>>) {
    if session.borrow_mut().key_up(&ev.code()) {
        ev.prevent_default();
    }
}

pub fn wire_keyboard(session: Rc<RefCell<SessionState>>, audio_ctx: web::AudioContext) {
    let Some(window) = web::window() else {
        return;
    };

    let down_session = session.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &down_session, &audio_ctx);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let up_session = session.clone();
    let keyup = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &up_session);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    // Key-ups are lost while the page is unfocused; let go of everything.
    let blur = Closure::wrap(Box::new(move || {
        session.borrow_mut().release_all();
        log::debug!("[keys] window blur, released all controls");
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}
