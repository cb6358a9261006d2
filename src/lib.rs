#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod audio;
mod constants;
mod controls;
mod core;
mod dom;
mod frame;
mod hud;
mod motion;
mod render;

use crate::core::{PipelineState, StartError, UserConfig};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("groantube starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    // The context is created suspended; the start gesture resumes it. The
    // voice wires and starts now so arming only has to unmute.
    let audio_ctx = web::AudioContext::new()
        .map_err(|e| anyhow::Error::from(StartError::AudioContext(format!("{:?}", e))))?;
    let defaults = UserConfig::default();
    let voice = audio::build_voice(&audio_ctx, defaults.waveform).ok();
    if voice.is_none() {
        log::error!("voice build failed; running visual-only");
    }

    let pipeline = Rc::new(RefCell::new(PipelineState::new()));

    // Motion events write the latest sample; the frame loop snapshots it
    let sample = motion::shared_sample();
    motion::wire_devicemotion(sample.clone());

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        pipeline: pipeline.clone(),
        sample,
        controls: controls::lookup(&document),
        canvas,
        audio_ctx: audio_ctx.clone(),
        voice,
        gpu,
        last_instant: Instant::now(),
        last_waveform: defaults.waveform,
    }));
    frame::start_loop(frame_ctx);

    // Arm on the start button, once; repeat clicks are ignored
    static STARTED: AtomicBool = AtomicBool::new(false);
    dom::add_click_listener(&document, "start-button", move || {
        if STARTED.swap(true, Ordering::SeqCst) {
            log::warn!("[gesture] start already triggered; ignoring extra click");
            return;
        }
        let audio_ctx = audio_ctx.clone();
        let pipeline = pipeline.clone();
        spawn_local(async move {
            arm_from_gesture(audio_ctx, pipeline).await;
        });
    });

    Ok(())
}

/// The two awaited steps of the start gesture: resume the audio context,
/// then ask for motion access. Each has an explicit failure branch. A
/// failed resume leaves the pipeline Idle (silent but running); a failed or
/// denied permission arms it without sensors.
async fn arm_from_gesture(audio_ctx: web::AudioContext, pipeline: Rc<RefCell<PipelineState>>) {
    log::info!("[gesture] start button pressed");

    if audio_ctx.state() != web::AudioContextState::Running {
        let resumed = match audio_ctx.resume() {
            Ok(p) => JsFuture::from(p)
                .await
                .map_err(|e| StartError::AudioResume(format!("{:?}", e))),
            Err(e) => Err(StartError::AudioResume(format!("{:?}", e))),
        };
        if let Err(err) = resumed {
            log::error!("[gesture] {}", err);
            if let Some(doc) = dom::window_document() {
                hud::set_status(&doc, &err.to_string());
            }
            return;
        }
    }

    let access = motion::request_motion_access().await;
    let (status, line) = match &access {
        Ok(a) => {
            log::info!("[motion] access: {:?}", a);
            (a.sensor_status(), a.status_line().to_string())
        }
        Err(err) => {
            // platform-level failure, recovered like a denial
            log::error!("[motion] {}", err);
            (
                crate::core::SensorStatus::Unavailable,
                format!("{err} — sound stays on without motion."),
            )
        }
    };

    {
        let mut p = pipeline.borrow_mut();
        p.set_sensor_status(status);
        p.arm();
    }
    log::info!("[gesture] armed, sensors {:?}", status);

    if let Some(doc) = dom::window_document() {
        hud::set_status(&doc, &line);
        hud::hide_overlay(&doc);
        hud::mark_started(&doc);
    }
}
