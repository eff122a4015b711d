//! Demo: a ball dropped onto a ground plane, with rolling and thud sounds
//! driven by its contact impulses.

use std::time::Duration;

use contact_audio::prelude::*;

const DT: f32 = 1.0 / 60.0;
const SAMPLE_RATE: u32 = 44_100;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("demo failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AudioError> {
    let output = AudioOutput::new()?;

    // No assets on disk: synthesize the two clips in memory.
    let roll_clip = AudioClip::from_bytes("roll (synth)", rumble_wav(4.0));
    let thud_clip = AudioClip::from_bytes("thud (synth)", thud_wav(0.25));

    let mut roll = output.create_source(&roll_clip, true)?;
    let mut thud = output.create_source(&thud_clip, false)?;

    let mut physics = Physics::new();
    let ground = physics.create_static_body(Vec3::ZERO, Quat::IDENTITY);
    physics.add_ground_plane(ground);

    let ball = physics.create_dynamic_body(Vec3::new(0.0, 4.0, 0.0), Quat::IDENTITY);
    let ball_collider = physics.add_sphere_collider(ball, 0.5, 1.0);

    let mut ball_audio = ContactReactiveAudio::new(ContactAudioParams {
        thud_threshold: 2.0,
        thud_max_impulse_for_volume: 20.0,
        ..Default::default()
    });

    log::info!("dropping ball, running for 10 seconds");

    for frame in 0..600 {
        physics.step(DT);

        // Kick the ball sideways once it has landed so it rolls.
        if frame == 120 {
            physics.apply_impulse(ball, Vec3::new(4.0, 0.0, 0.0));
        }

        let pairs = physics.contact_pairs(ball_collider);
        let velocity = physics.get_linear_velocity(ball).unwrap_or(Vec3::ZERO);
        ball_audio.update(DT, &pairs, velocity, &mut roll, &mut thud);

        if frame % 60 == 0 {
            let position = physics.get_position(ball).unwrap_or(Vec3::ZERO);
            log::info!(
                "t={:>4.1}s pos={:>5.2} speed={:>5.2} roll_gain={:.2}",
                frame as f32 * DT,
                position.y,
                velocity.length(),
                roll.gain(),
            );
        }

        std::thread::sleep(Duration::from_secs_f32(DT));
    }

    Ok(())
}

/// Encode mono 16-bit PCM samples as a WAV file in memory
fn wav_from_samples(samples: &[i16]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let byte_rate = SAMPLE_RATE * 2;

    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16_u32.to_le_bytes());
    wav.extend_from_slice(&1_u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1_u16.to_le_bytes()); // mono
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2_u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16_u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    for s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

/// Low filtered-noise rumble for the rolling loop
fn rumble_wav(seconds: f32) -> Vec<u8> {
    let count = (seconds * SAMPLE_RATE as f32) as usize;
    let mut rng: u32 = 0x2545_f491;
    let mut level = 0.0_f32;

    let samples: Vec<i16> = (0..count)
        .map(|_| {
            // xorshift noise through a one-pole lowpass
            rng ^= rng << 13;
            rng ^= rng >> 17;
            rng ^= rng << 5;
            let noise = (rng as f32 / u32::MAX as f32) * 2.0 - 1.0;
            level += 0.02 * (noise - level);
            (level * 0.8 * f32::from(i16::MAX)) as i16
        })
        .collect();
    wav_from_samples(&samples)
}

/// Short decaying low sine for the thud
fn thud_wav(seconds: f32) -> Vec<u8> {
    let count = (seconds * SAMPLE_RATE as f32) as usize;
    let samples: Vec<i16> = (0..count)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let envelope = (-t * 18.0).exp();
            let sample = (t * 90.0 * std::f32::consts::TAU).sin() * envelope;
            (sample * 0.9 * f32::from(i16::MAX)) as i16
        })
        .collect();
    wav_from_samples(&samples)
}
