use thiserror::Error;

/// Failures while arming from the start gesture. None are fatal: audio
/// failures leave the voice muted-but-running, permission failures degrade
/// to motionless operation. The `Display` strings feed the status line.
#[derive(Debug, Error)]
pub enum StartError {
    #[error("audio could not start: {0}")]
    AudioContext(String),
    #[error("audio context could not be resumed: {0}")]
    AudioResume(String),
    #[error("motion permission request failed: {0}")]
    PermissionRequest(String),
}

/// Whether motion input is feeding the pipeline. Tracked independently of
/// the voice state: sound never depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorStatus {
    Unknown,
    Available,
    Unavailable,
}

/// Outcome of the motion-permission step of the start gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionAccess {
    /// Explicitly granted (iOS permission dialog)
    Granted,
    /// No permission gate on this platform; the listener just works
    GrantedImplicit,
    Denied,
    /// The DeviceMotionEvent API is missing entirely
    Unsupported,
}

impl MotionAccess {
    pub fn sensor_status(&self) -> SensorStatus {
        match self {
            MotionAccess::Granted | MotionAccess::GrantedImplicit => SensorStatus::Available,
            MotionAccess::Denied | MotionAccess::Unsupported => SensorStatus::Unavailable,
        }
    }

    /// User-visible status line for this outcome. Never empty; degraded
    /// outcomes say explicitly that sound keeps running.
    pub fn status_line(&self) -> &'static str {
        match self {
            MotionAccess::Granted => {
                "Motion on — swing the phone like a groan tube (harder = louder, brighter)."
            }
            MotionAccess::GrantedImplicit => {
                "Ready — move the device to play; this browser needs no motion permission."
            }
            MotionAccess::Denied => {
                "Motion permission denied — enable it in browser settings. Sound stays on with a baseline tone."
            }
            MotionAccess::Unsupported => {
                "No motion sensors here — sound stays on with a baseline tone."
            }
        }
    }
}
