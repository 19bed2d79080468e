use crate::constants::*;
use glam::Vec3;
use rotunda_core::{theme_for, AudioCue, DoorAnchor, DoorCues, CLOSE_SOUND, OPEN_SOUND};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Decoded sound shared by every cue that plays it. Empty until loaded.
pub type BufferSlot = Rc<RefCell<Option<web::AudioBuffer>>>;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

fn create_panner(audio_ctx: &web::AudioContext, at: Vec3) -> Result<web::PannerNode, ()> {
    let panner = web::PannerNode::new(audio_ctx).map_err(|e| {
        log::error!("PannerNode error: {:?}", e);
    })?;
    panner.set_panning_model(web::PanningModelType::Hrtf);
    panner.set_distance_model(web::DistanceModelType::Inverse);
    panner.set_ref_distance(CUE_REF_DISTANCE as f64);
    panner.position_x().set_value(at.x);
    panner.position_y().set_value(at.y);
    panner.position_z().set_value(at.z);
    Ok(panner)
}

async fn fetch_and_decode(
    audio_ctx: &web::AudioContext,
    url: &str,
) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let bytes_promise = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("{}: {:?}", url, e))?;
    let bytes: js_sys::ArrayBuffer = JsFuture::from(bytes_promise)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{}: {:?}", url, e))?;
    let decode = audio_ctx
        .decode_audio_data(&bytes)
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?;
    JsFuture::from(decode)
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))
}

/// Start loading `file` into a fresh slot. The slot stays empty on failure;
/// cues reading it stay silent.
pub fn load_sound(audio_ctx: &web::AudioContext, file: &str) -> BufferSlot {
    let slot: BufferSlot = Rc::new(RefCell::new(None));
    let fill = slot.clone();
    let ctx = audio_ctx.clone();
    let url = sound_url(file);
    spawn_local(async move {
        match fetch_and_decode(&ctx, &url).await {
            Ok(buf) => {
                *fill.borrow_mut() = Some(buf);
                log::info!("[audio] loaded {}", url);
            }
            Err(e) => log::error!("[audio] {:?}", e),
        }
    });
    slot
}

/// A positional sound source bound to one point in the room.
pub struct WebCue {
    audio_ctx: web::AudioContext,
    buffer: BufferSlot,
    output: web::GainNode,
    looping: bool,
    source: Option<web::AudioBufferSourceNode>,
    playing: Rc<Cell<bool>>,
    _on_ended: Option<Closure<dyn FnMut()>>,
}

impl WebCue {
    pub fn new(
        audio_ctx: &web::AudioContext,
        buffer: BufferSlot,
        at: Vec3,
        volume: f32,
        looping: bool,
    ) -> Result<Self, ()> {
        let output = create_gain(audio_ctx, volume, "cue")?;
        let panner = create_panner(audio_ctx, at)?;
        _ = output.connect_with_audio_node(&panner);
        _ = panner.connect_with_audio_node(&audio_ctx.destination());
        Ok(Self {
            audio_ctx: audio_ctx.clone(),
            buffer,
            output,
            looping,
            source: None,
            playing: Rc::new(Cell::new(false)),
            _on_ended: None,
        })
    }
}

impl AudioCue for WebCue {
    fn play(&mut self) {
        if self.playing.get() {
            return;
        }
        let slot = self.buffer.borrow();
        let Some(buf) = slot.as_ref() else {
            return;
        };
        let src = match self.audio_ctx.create_buffer_source() {
            Ok(s) => s,
            Err(e) => {
                log::error!("AudioBufferSourceNode error: {:?}", e);
                return;
            }
        };
        src.set_buffer(Some(buf));
        src.set_loop(self.looping);
        _ = src.connect_with_audio_node(&self.output);

        let playing = self.playing.clone();
        let on_ended = Closure::wrap(Box::new(move || playing.set(false)) as Box<dyn FnMut()>);
        src.set_onended(Some(on_ended.as_ref().unchecked_ref()));

        if src.start().is_ok() {
            self.playing.set(true);
            self.source = Some(src);
            self._on_ended = Some(on_ended);
        }
    }

    fn stop(&mut self) {
        if let Some(src) = self.source.take() {
            src.set_onended(None);
            _ = src.stop();
        }
        self.playing.set(false);
    }

    fn is_playing(&self) -> bool {
        self.playing.get()
    }
}

/// Shared one-shot sounds every door uses.
pub struct SharedCues {
    pub open: BufferSlot,
    pub close: BufferSlot,
}

impl SharedCues {
    pub fn load(audio_ctx: &web::AudioContext) -> Self {
        Self {
            open: load_sound(audio_ctx, OPEN_SOUND),
            close: load_sound(audio_ctx, CLOSE_SOUND),
        }
    }
}

/// Cues for door `index`, positioned at its hit volume. Any cue that cannot
/// be built falls back to silence.
pub fn door_cues(
    audio_ctx: &web::AudioContext,
    shared: &SharedCues,
    index: usize,
    anchor: &DoorAnchor,
) -> DoorCues {
    let at = anchor.world_position();
    let ambient_buf = load_sound(audio_ctx, theme_for(index).sound);
    let mut cues = DoorCues::silent();
    if let Ok(c) = WebCue::new(audio_ctx, ambient_buf, at, AMBIENT_VOLUME, true) {
        cues.ambient = Box::new(c);
    }
    if let Ok(c) = WebCue::new(audio_ctx, shared.open.clone(), at, CUE_VOLUME, false) {
        cues.open = Box::new(c);
    }
    if let Ok(c) = WebCue::new(audio_ctx, shared.close.clone(), at, CUE_VOLUME, false) {
        cues.close = Box::new(c);
    }
    cues
}

/// Keep the listener on the viewer's head, looking where the viewer looks.
pub fn update_listener(listener: &web::AudioListener, eye: Vec3, forward: Vec3) {
    listener.set_position(eye.x as f64, eye.y as f64, eye.z as f64);
    _ = listener.set_orientation(
        forward.x as f64,
        forward.y as f64,
        forward.z as f64,
        0.0,
        1.0,
        0.0,
    );
}

/// Browsers start audio suspended until a user gesture.
pub fn resume_if_suspended(audio_ctx: &web::AudioContext) {
    if audio_ctx.state() == web::AudioContextState::Suspended {
        _ = audio_ctx.resume();
    }
}
