use crate::audio;
use crate::dom;
use crate::hint;
use instant::Instant;
use rotunda_core::{Control, FrameClock, SessionState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<SessionState>>,
    pub clock: FrameClock,
    pub document: web::Document,
    pub listener: web::AudioListener,
    /// Last hint written to the page, to avoid touching the DOM every frame.
    pub hint_shown: Option<bool>,
}

impl FrameContext {
    pub fn new(
        session: Rc<RefCell<SessionState>>,
        document: web::Document,
        listener: web::AudioListener,
    ) -> Self {
        Self {
            session,
            clock: FrameClock::new(),
            document,
            listener,
            hint_shown: None,
        }
    }

    pub fn frame(&mut self) {
        let dt = self.clock.delta(Instant::now());

        let (eye, forward, focused, hold_code) = {
            let mut session = self.session.borrow_mut();
            session.tick(dt);
            let focused = session.focused_door().is_some();
            let hold_code = session
                .config
                .bindings
                .code_for(Control::Hold)
                .map(str::to_owned);
            (session.viewer.position, session.viewer.forward(), focused, hold_code)
        };

        audio::update_listener(&self.listener, eye, forward);

        if self.hint_shown != Some(focused) {
            dom::set_hint(
                &self.document,
                &hint::hint_text(focused, hold_code.as_deref()),
            );
            self.hint_shown = Some(focused);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
