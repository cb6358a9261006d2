use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{AmplitudePolicy, UserConfig, Waveform};

/// Handles to the slider panel, looked up once. Any control may be missing
/// (bare page, stripped-down embed); reads then fall back to defaults.
pub struct ControlPanel {
    sensitivity: Option<web::HtmlInputElement>,
    pitch_min: Option<web::HtmlInputElement>,
    pitch_max: Option<web::HtmlInputElement>,
    brightness: Option<web::HtmlInputElement>,
    smoothing: Option<web::HtmlInputElement>,
    invert_pitch: Option<web::HtmlInputElement>,
    waveform: Option<web::HtmlSelectElement>,
    policy: Option<web::HtmlSelectElement>,
}

fn input(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

fn select(document: &web::Document, id: &str) -> Option<web::HtmlSelectElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
}

pub fn lookup(document: &web::Document) -> ControlPanel {
    ControlPanel {
        sensitivity: input(document, "sensitivity"),
        pitch_min: input(document, "pitch-min"),
        pitch_max: input(document, "pitch-max"),
        brightness: input(document, "brightness"),
        smoothing: input(document, "smoothing"),
        invert_pitch: input(document, "invert-pitch"),
        waveform: select(document, "waveform"),
        policy: select(document, "policy"),
    }
}

fn number(el: &Option<web::HtmlInputElement>, fallback: f32) -> f32 {
    el.as_ref()
        .map(|e| e.value_as_number() as f32)
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

fn parse_waveform(value: Option<String>, fallback: Waveform) -> Waveform {
    match value.as_deref() {
        Some("sine") => Waveform::Sine,
        Some("square") => Waveform::Square,
        Some("saw") => Waveform::Saw,
        Some("triangle") => Waveform::Triangle,
        _ => fallback,
    }
}

fn parse_policy(value: Option<String>, fallback: AmplitudePolicy) -> AmplitudePolicy {
    match value.as_deref() {
        Some("continuous") => AmplitudePolicy::Continuous,
        Some("transient") => AmplitudePolicy::Transient,
        _ => fallback,
    }
}

impl ControlPanel {
    /// Poll the panel into a config snapshot. No change events: the frame
    /// loop reads whatever the controls currently say.
    pub fn read(&self) -> UserConfig {
        let d = UserConfig::default();
        UserConfig {
            sensitivity: number(&self.sensitivity, d.sensitivity),
            pitch_min_hz: number(&self.pitch_min, d.pitch_min_hz),
            pitch_max_hz: number(&self.pitch_max, d.pitch_max_hz),
            brightness: number(&self.brightness, d.brightness),
            smoothing: number(&self.smoothing, d.smoothing),
            invert_pitch: self
                .invert_pitch
                .as_ref()
                .map(|e| e.checked())
                .unwrap_or(d.invert_pitch),
            waveform: parse_waveform(self.waveform.as_ref().map(|e| e.value()), d.waveform),
            policy: parse_policy(self.policy.as_ref().map(|e| e.value()), d.policy),
            pitch_drive: d.pitch_drive,
        }
    }
}
