use web_sys as web;

use crate::constants::AMP_RAMP_SEC;
use crate::core::{SynthParams, Waveform};
use crate::core::constants::{FILTER_Q, INITIAL_CUTOFF_HZ, INITIAL_FREQ_HZ};

/// The single synthesis voice: oscillator → bandpass filter → gain →
/// destination. Built once; the oscillator starts immediately against the
/// (possibly suspended) context and never reaches the destination directly.
pub struct GroanVoice {
    osc: web::OscillatorNode,
    filter: web::BiquadFilterNode,
    gain: web::GainNode,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, ()> {
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

fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Saw => web::OscillatorType::Sawtooth,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

pub fn build_voice(audio_ctx: &web::AudioContext, waveform: Waveform) -> Result<GroanVoice, ()> {
    let osc = web::OscillatorNode::new(audio_ctx)
        .map_err(|e| {
            log::error!("OscillatorNode error: {:?}", e);
        })
        .map_err(|_| ())?;
    osc.set_type(oscillator_type(waveform));
    osc.frequency().set_value(INITIAL_FREQ_HZ);

    let filter = web::BiquadFilterNode::new(audio_ctx)
        .map_err(|e| {
            log::error!("BiquadFilterNode error: {:?}", e);
        })
        .map_err(|_| ())?;
    filter.set_type(web::BiquadFilterType::Bandpass);
    filter.frequency().set_value(INITIAL_CUTOFF_HZ);
    filter.q().set_value(FILTER_Q);

    let gain = create_gain(audio_ctx, 0.0, "Voice")?;

    _ = osc.connect_with_audio_node(&filter);
    _ = filter.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&audio_ctx.destination());
    _ = osc.start();

    log::info!("[voice] oscillator -> bandpass -> gain wired");
    Ok(GroanVoice { osc, filter, gain })
}

impl GroanVoice {
    pub fn set_waveform(&self, waveform: Waveform) {
        self.osc.set_type(oscillator_type(waveform));
    }

    /// Write the tick's parameters to the audio graph: one frequency, one
    /// cutoff, one Q, one amplitude ramp. Called every tick, changed or not.
    pub fn apply(&self, audio_ctx: &web::AudioContext, params: &SynthParams) {
        self.osc.frequency().set_value(params.frequency_hz);
        self.filter.frequency().set_value(params.cutoff_hz);
        self.filter.q().set_value(params.resonance);

        let g = self.gain.gain();
        let now = audio_ctx.current_time();
        let current = g.value();
        _ = g.cancel_scheduled_values(now);
        _ = g.set_value_at_time(current, now);
        _ = g.linear_ramp_to_value_at_time(params.amplitude, now + AMP_RAMP_SEC);
    }
}
