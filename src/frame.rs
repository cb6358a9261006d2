use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::GroanVoice;
use crate::constants::{
    AGITATED_COLOR, BAR_MARGIN_PX, BAR_MAX_HEIGHT_FRAC, BAR_MIN_HEIGHT_PX, BAR_WIDTH_PX,
    CALM_COLOR, CIRCLE_ALPHA, CIRCLE_MAX_RADIUS_FRAC, CIRCLE_MIN_RADIUS_FRAC, INTENSITY_VIS_SCALE,
};
use crate::controls::ControlPanel;
use crate::core::{PipelineState, TickSnapshot, Waveform};
use crate::motion::SharedSample;
use crate::{dom, hud, render};

/// Everything one animation frame touches. Owned by the RAF closure; the
/// gesture handler shares only the pipeline (to arm it).
pub struct FrameContext<'a> {
    pub pipeline: Rc<RefCell<PipelineState>>,
    pub sample: SharedSample,
    pub controls: ControlPanel,

    pub canvas: web::HtmlCanvasElement,
    pub audio_ctx: web::AudioContext,
    pub voice: Option<GroanVoice>,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub last_waveform: Waveform,
}

impl FrameContext<'_> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let config = self.controls.read();
        if config.waveform != self.last_waveform {
            if let Some(v) = &self.voice {
                v.set_waveform(config.waveform);
            }
            self.last_waveform = config.waveform;
        }

        // Latest sample as a snapshot; the listener may run faster or
        // slower than the frame rate
        let raw = *self.sample.borrow();
        let snap = self.pipeline.borrow_mut().tick(raw, &config, dt_sec);

        if let Some(v) = &self.voice {
            v.apply(&self.audio_ctx, &snap.params);
        }

        let w = self.canvas.width();
        let h = self.canvas.height();
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            let instances = build_instances(w as f32, h as f32, &snap);
            if let Err(e) = g.render(&instances) {
                log::error!("render error: {:?}", e);
            }
        }

        if let Some(doc) = dom::window_document() {
            hud::update_readout(&doc, raw, &snap);
        }
    }
}

#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Intensity circle in the middle, VU bar on the right edge.
fn build_instances(width: f32, height: f32, snap: &TickSnapshot) -> Vec<render::Instance> {
    let norm = (snap.intensity / INTENSITY_VIS_SCALE).clamp(0.0, 1.0);

    let short_edge = width.min(height);
    let radius = short_edge * mix(CIRCLE_MIN_RADIUS_FRAC, CIRCLE_MAX_RADIUS_FRAC, norm);
    let color = [
        mix(CALM_COLOR[0], AGITATED_COLOR[0], norm),
        mix(CALM_COLOR[1], AGITATED_COLOR[1], norm),
        mix(CALM_COLOR[2], AGITATED_COLOR[2], norm),
        CIRCLE_ALPHA,
    ];
    let circle = render::Instance {
        center_px: [width / 2.0, height / 2.0],
        half_size_px: [radius, radius],
        color,
        shape: 0.0,
        _pad: [0.0; 3],
    };

    let bar_height = mix(BAR_MIN_HEIGHT_PX, height * BAR_MAX_HEIGHT_FRAC, norm);
    let bar = render::Instance {
        center_px: [
            width - BAR_MARGIN_PX - BAR_WIDTH_PX / 2.0,
            height - BAR_MARGIN_PX - bar_height / 2.0,
        ],
        half_size_px: [BAR_WIDTH_PX / 2.0, bar_height / 2.0],
        color: [1.0, 1.0, 1.0, 0.85],
        shape: 1.0,
        _pad: [0.0; 3],
    };

    vec![circle, bar]
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
