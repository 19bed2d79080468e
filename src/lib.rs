#![cfg(target_arch = "wasm32")]
use rotunda_core::{KeyBindings, SessionConfig, SessionState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod handle;
mod hint;

pub use handle::{session_handle, RotundaHandle};

fn session_config() -> SessionConfig {
    let mut config = SessionConfig::default();
    if let Some(raw) = dom::binding_overrides() {
        match KeyBindings::with_overrides(&raw) {
            Ok(b) => {
                log::info!("[config] key bindings from URL: {}", raw);
                config.bindings = b;
            }
            Err(e) => log::error!("[config] ignoring key bindings `{}`: {}", raw, e),
        }
    }
    config
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rotunda-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::hide_lock(&document);

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let listener = audio_ctx.listener();

    // Sounds load in the background; doors stay silent until theirs arrive.
    let shared = audio::SharedCues::load(&audio_ctx);
    let session = Rc::new(RefCell::new(SessionState::with_ring(
        session_config(),
        |i, anchor| audio::door_cues(&audio_ctx, &shared, i, anchor),
    )));

    events::wire_keyboard(session.clone(), audio_ctx.clone());
    handle::publish(session.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        session, document, listener,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
