//! Contact-reactive audio behavior
//!
//! Drives a continuous rolling sound and a one-shot thud sound from a
//! rigid body's contact impulses.

use glam::Vec3;

use crate::audio::AudioEmitter;
use crate::physics::ContactPair;

use super::params::ContactAudioParams;

/// Turns per-frame contact impulses into audio commands.
///
/// Each update reads the owning body's contact pairs (a frame-scoped
/// borrow from the physics world) and drives two emitters:
/// - a continuous "roll" emitter whose gain tracks the body's tangential
///   speed relative to the aggregated contact direction,
/// - a one-shot "thud" emitter triggered when a single contact's normal
///   impulse exceeds the configured threshold.
///
/// The behavior owns no audio or physics resources; it only holds its
/// tuning parameters and the previous frame's roll gain.
#[derive(Debug)]
pub struct ContactReactiveAudio {
    /// Tuning parameters, read-only after construction
    params: ContactAudioParams,
    /// Roll gain written last frame; used for edge-triggered playback
    roll_gain: f32,
}

impl ContactReactiveAudio {
    /// Create the behavior with the given tuning parameters
    #[must_use]
    pub fn new(params: ContactAudioParams) -> Self {
        Self {
            params,
            roll_gain: 0.0,
        }
    }

    /// Get the tuning parameters
    #[must_use]
    pub fn params(&self) -> &ContactAudioParams {
        &self.params
    }

    /// Advance the behavior by one frame.
    ///
    /// `pairs` is the body's contact-pair snapshot for this frame and
    /// `linear_velocity` its current linear velocity. `_dt` is unused for
    /// now but part of the contract for frame-rate-dependent effects.
    ///
    /// At most one thud fires per call: the first contact whose normal
    /// impulse exceeds the threshold wins, the rest only contribute to
    /// the aggregated impulse. The roll emitter receives a play command
    /// only on the transition from silent to audible; with no contacts it
    /// is silenced and stopped unconditionally.
    pub fn update<R, T>(
        &mut self,
        _dt: f32,
        pairs: &[ContactPair],
        linear_velocity: Vec3,
        roll: &mut R,
        thud: &mut T,
    ) where
        R: AudioEmitter + ?Sized,
        T: AudioEmitter + ?Sized,
    {
        let (impulse, thud_impulse) = scan_contacts(pairs, self.params.thud_threshold);

        if let Some(normal_impulse) = thud_impulse {
            let gain = normal_impulse / self.params.thud_max_impulse_for_volume;
            log::debug!("thud: impulse {normal_impulse:.2}, gain {gain:.2}");
            thud.set_gain(gain);
            thud.play();
        }

        if impulse.length_squared() > 0.0 {
            let tangential =
                linear_velocity - linear_velocity.project_onto_normalized(impulse.normalize());
            let ratio = tangential.length() / self.params.max_velocity_for_volume;

            let mut gain = ratio * self.params.max_volume;
            if gain.is_nan() {
                // Degenerate projection; fail loud rather than silent.
                gain = 1.0;
            }

            if self.roll_gain == 0.0 && gain > 0.0 {
                roll.play();
            }
            roll.set_gain(gain);
            self.roll_gain = gain;
        } else {
            roll.set_gain(0.0);
            roll.stop();
            self.roll_gain = 0.0;
        }
    }
}

/// Aggregate the frame's contact impulses.
///
/// Returns the impulse-weighted sum of contact normals and the normal
/// impulse of the first contact exceeding `threshold`, if any.
fn scan_contacts(pairs: &[ContactPair], threshold: f32) -> (Vec3, Option<f32>) {
    let mut total = Vec3::ZERO;
    let mut thud = None;

    for pair in pairs {
        for point in &pair.points {
            total += point.normal_impulse * point.normal;
            if point.normal_impulse > threshold && thud.is_none() {
                thud = Some(point.normal_impulse);
            }
        }
    }

    (total, thud)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{ColliderHandle, ContactPoint};

    /// Recording emitter double
    #[derive(Debug, Default)]
    struct MockEmitter {
        gain: f32,
        plays: usize,
        stops: usize,
    }

    impl AudioEmitter for MockEmitter {
        fn gain(&self) -> f32 {
            self.gain
        }

        fn set_gain(&mut self, gain: f32) {
            self.gain = gain;
        }

        fn play(&mut self) {
            self.plays += 1;
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    fn pair(points: &[(f32, Vec3)]) -> ContactPair {
        let mut pair = ContactPair::new(ColliderHandle(
            rapier3d::geometry::ColliderHandle::invalid(),
        ));
        for &(normal_impulse, normal) in points {
            pair.points.push(ContactPoint {
                normal_impulse,
                normal,
            });
        }
        pair
    }

    fn behavior(params: ContactAudioParams) -> ContactReactiveAudio {
        ContactReactiveAudio::new(params)
    }

    #[test]
    fn test_no_contacts_silences_and_stops() {
        let mut audio = behavior(ContactAudioParams::default());
        let mut roll = MockEmitter {
            gain: 0.7,
            ..Default::default()
        };
        let mut thud = MockEmitter::default();

        audio.update(0.016, &[], Vec3::new(4.0, 0.0, 0.0), &mut roll, &mut thud);

        assert_eq!(roll.gain, 0.0);
        assert_eq!(roll.stops, 1);
        assert_eq!(roll.plays, 0);
        assert_eq!(thud.plays, 0);
    }

    #[test]
    fn test_stop_reissued_every_contactless_frame() {
        let mut audio = behavior(ContactAudioParams::default());
        let mut roll = MockEmitter::default();
        let mut thud = MockEmitter::default();

        audio.update(0.016, &[], Vec3::ZERO, &mut roll, &mut thud);
        audio.update(0.016, &[], Vec3::ZERO, &mut roll, &mut thud);

        assert_eq!(roll.stops, 2);
        assert_eq!(roll.gain, 0.0);
    }

    #[test]
    fn test_tangential_speed_sets_roll_gain() {
        let mut audio = behavior(ContactAudioParams::default());
        let mut roll = MockEmitter::default();
        let mut thud = MockEmitter::default();

        // Resting on the ground, sliding along +X at 5 m/s with
        // max_velocity_for_volume = 10 and max_volume = 1.
        let pairs = [pair(&[(9.8, Vec3::Y)])];
        audio.update(0.016, &pairs, Vec3::new(5.0, 0.0, 0.0), &mut roll, &mut thud);

        assert!((roll.gain - 0.5).abs() < 1e-6);
        assert_eq!(roll.plays, 1);
        assert_eq!(roll.stops, 0);
    }

    #[test]
    fn test_normal_velocity_does_not_start_roll() {
        let mut audio = behavior(ContactAudioParams::default());
        let mut roll = MockEmitter::default();
        let mut thud = MockEmitter::default();

        // Moving straight into the contact: zero tangential speed keeps
        // the roll silent, so no play command is issued.
        let pairs = [pair(&[(9.8, Vec3::Y)])];
        audio.update(0.016, &pairs, Vec3::new(0.0, -3.0, 0.0), &mut roll, &mut thud);

        assert_eq!(roll.gain, 0.0);
        assert_eq!(roll.plays, 0);
    }

    #[test]
    fn test_degenerate_projection_falls_back_to_full_gain() {
        let mut audio = behavior(ContactAudioParams::default());
        let mut roll = MockEmitter::default();
        let mut thud = MockEmitter::default();

        let pairs = [pair(&[(9.8, Vec3::Y)])];
        audio.update(
            0.016,
            &pairs,
            Vec3::new(f32::NAN, 0.0, 0.0),
            &mut roll,
            &mut thud,
        );

        assert_eq!(roll.gain, 1.0);
        assert_eq!(roll.plays, 1);
    }

    #[test]
    fn test_roll_gain_is_not_clamped() {
        let mut audio = behavior(ContactAudioParams::default());
        let mut roll = MockEmitter::default();
        let mut thud = MockEmitter::default();

        let pairs = [pair(&[(9.8, Vec3::Y)])];
        audio.update(0.016, &pairs, Vec3::new(25.0, 0.0, 0.0), &mut roll, &mut thud);

        assert!((roll.gain - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_play_only_on_silent_to_audible_transition() {
        let mut audio = behavior(ContactAudioParams::default());
        let mut roll = MockEmitter::default();
        let mut thud = MockEmitter::default();

        let pairs = [pair(&[(9.8, Vec3::Y)])];
        let velocity = Vec3::new(5.0, 0.0, 0.0);
        audio.update(0.016, &pairs, velocity, &mut roll, &mut thud);
        audio.update(0.016, &pairs, velocity, &mut roll, &mut thud);

        assert_eq!(roll.plays, 1, "play must not be reissued while audible");
    }

    #[test]
    fn test_single_thud_per_update() {
        let params = ContactAudioParams {
            thud_threshold: 10.0,
            ..Default::default()
        };
        let mut audio = behavior(params);
        let mut roll = MockEmitter::default();
        let mut thud = MockEmitter::default();

        // Several contacts over the threshold across two pairs: only the
        // first one fires, the rest still feed the aggregated impulse.
        let pairs = [
            pair(&[(25.0, Vec3::Y), (40.0, Vec3::Y)]),
            pair(&[(60.0, Vec3::X)]),
        ];
        audio.update(0.016, &pairs, Vec3::ZERO, &mut roll, &mut thud);

        assert_eq!(thud.plays, 1);
        assert!((thud.gain - 25.0 / 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_thud_at_or_below_threshold() {
        let params = ContactAudioParams {
            thud_threshold: 10.0,
            ..Default::default()
        };
        let mut audio = behavior(params);
        let mut roll = MockEmitter::default();
        let mut thud = MockEmitter::default();

        let pairs = [pair(&[(10.0, Vec3::Y), (4.0, Vec3::X)])];
        audio.update(0.016, &pairs, Vec3::ZERO, &mut roll, &mut thud);

        assert_eq!(thud.plays, 0);
    }

    #[test]
    fn test_thud_gain_is_not_clamped() {
        let params = ContactAudioParams {
            thud_threshold: 10.0,
            ..Default::default()
        };
        let mut audio = behavior(params);
        let mut roll = MockEmitter::default();
        let mut thud = MockEmitter::default();

        let pairs = [pair(&[(125.0, Vec3::Y)])];
        audio.update(0.016, &pairs, Vec3::ZERO, &mut roll, &mut thud);

        assert_eq!(thud.plays, 1);
        assert!((thud.gain - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_cancelling_impulses_silence_the_roll() {
        let params = ContactAudioParams {
            thud_threshold: 100.0,
            ..Default::default()
        };
        let mut audio = behavior(params);
        let mut roll = MockEmitter::default();
        let mut thud = MockEmitter::default();

        // Squeezed between two opposing contacts: the aggregate is zero,
        // which counts as no contact direction at all.
        let pairs = [pair(&[(5.0, Vec3::Y), (5.0, Vec3::NEG_Y)])];
        audio.update(0.016, &pairs, Vec3::new(5.0, 0.0, 0.0), &mut roll, &mut thud);

        assert_eq!(roll.gain, 0.0);
        assert_eq!(roll.stops, 1);
        assert_eq!(roll.plays, 0);
    }

    #[test]
    fn test_worked_example() {
        // max_velocity_for_volume = 10, max_volume = 1, tangential 5
        // -> roll gain 0.5; thud_max 50, threshold 10, impulse 25
        // -> thud gain 0.5, fired once.
        let params = ContactAudioParams {
            thud_threshold: 10.0,
            ..Default::default()
        };
        let mut audio = behavior(params);
        let mut roll = MockEmitter::default();
        let mut thud = MockEmitter::default();

        let pairs = [pair(&[(25.0, Vec3::Y)])];
        audio.update(0.016, &pairs, Vec3::new(5.0, 0.0, 0.0), &mut roll, &mut thud);

        assert!((roll.gain - 0.5).abs() < 1e-6);
        assert_eq!(thud.plays, 1);
        assert!((thud.gain - 0.5).abs() < 1e-6);
    }
}
