use glam::Vec3;
use web_sys as web;

use crate::core::TickSnapshot;
use crate::dom;

pub fn set_status(document: &web::Document, text: &str) {
    dom::set_text(document, "status", text);
}

/// Debug readout mirroring the pipeline state, refreshed every tick.
pub fn update_readout(document: &web::Document, raw: Vec3, snap: &TickSnapshot) {
    let html = format!(
        "ax {:.2} • ay {:.2} • az {:.2}<br>jerk {:.2} • mag {:.2} • intensity {:.2}<br>freq {:.1} Hz • amp {:.2} • cutoff {:.0} Hz",
        raw.x,
        raw.y,
        raw.z,
        snap.features.jerk_magnitude,
        snap.features.total_magnitude,
        snap.intensity,
        snap.params.frequency_hz,
        snap.params.amplitude,
        snap.params.cutoff_hz,
    );
    dom::set_text(document, "readout", &html);
}

pub fn hide_overlay(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback for environments without CSS
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn mark_started(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-button") {
        el.set_inner_html("Sound on");
    }
}
