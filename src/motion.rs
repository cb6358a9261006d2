use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::core::{MotionAccess, StartError};

/// Latest raw acceleration, written by the event listener and snapshotted
/// by the frame loop. Zero until the first event arrives (or forever, on
/// hardware without sensors); valid input, not an error.
pub type SharedSample = Rc<RefCell<Vec3>>;

pub fn shared_sample() -> SharedSample {
    Rc::new(RefCell::new(Vec3::ZERO))
}

/// Listen for `devicemotion` and keep only the most recent vector. Events
/// arrive at the platform's own rate; no queueing beyond the snapshot.
pub fn wire_devicemotion(sample: SharedSample) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
            if let Some(acc) = ev.acceleration_including_gravity() {
                *sample.borrow_mut() = Vec3::new(
                    acc.x().unwrap_or(0.0) as f32,
                    acc.y().unwrap_or(0.0) as f32,
                    acc.z().unwrap_or(0.0) as f32,
                );
            }
        }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("devicemotion", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Ask for motion access where the platform gates it (iOS exposes a static
/// `DeviceMotionEvent.requestPermission`). Must run inside a user gesture.
/// Resolves or rejects exactly once; a rejection is an error outcome, not a
/// denial.
pub async fn request_motion_access() -> Result<MotionAccess, StartError> {
    let global = js_sys::global();
    let dme = match js_sys::Reflect::get(&global, &JsValue::from_str("DeviceMotionEvent")) {
        Ok(v) if !v.is_undefined() => v,
        _ => return Ok(MotionAccess::Unsupported),
    };
    let request = js_sys::Reflect::get(&dme, &JsValue::from_str("requestPermission"))
        .unwrap_or(JsValue::UNDEFINED);
    let func: &js_sys::Function = match request.dyn_ref() {
        Some(f) => f,
        // Everything except iOS: no gate, the listener just works
        None => return Ok(MotionAccess::GrantedImplicit),
    };
    let promise = func
        .call0(&dme)
        .map(js_sys::Promise::from)
        .map_err(|e| StartError::PermissionRequest(format!("{:?}", e)))?;
    match JsFuture::from(promise).await {
        Ok(v) => {
            if v.as_string().as_deref() == Some("granted") {
                Ok(MotionAccess::Granted)
            } else {
                Ok(MotionAccess::Denied)
            }
        }
        Err(e) => Err(StartError::PermissionRequest(format!("{:?}", e))),
    }
}
