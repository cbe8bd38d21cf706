use rand::rngs::StdRng;
use rand::SeedableRng;
use sfx_core::buffers::{impulse_response_channel, noise_channel, NoiseShape};

const LEN: usize = 19_200; // 0.4s at 48kHz

#[test]
fn impulse_response_stays_under_its_decay_envelope() {
    let mut rng = StdRng::seed_from_u64(7);
    let samples = impulse_response_channel(LEN, 2.0, &mut rng);
    assert_eq!(samples.len(), LEN);
    for (i, s) in samples.iter().enumerate() {
        let bound = (1.0 - i as f32 / LEN as f32).powf(2.0);
        assert!(
            s.abs() <= bound + 1e-6,
            "sample {i} escapes the envelope: {s} > {bound}"
        );
    }
    // The tail must actually die out.
    let tail_max = samples[LEN - LEN / 100..]
        .iter()
        .fold(0.0_f32, |m, s| m.max(s.abs()));
    assert!(tail_max < 0.001);
}

#[test]
fn impulse_response_is_not_silent() {
    let mut rng = StdRng::seed_from_u64(7);
    let samples = impulse_response_channel(LEN, 2.0, &mut rng);
    let head_max = samples[..LEN / 10].iter().fold(0.0_f32, |m, s| m.max(s.abs()));
    assert!(head_max > 0.5, "early reflections too quiet: {head_max}");
}

#[test]
fn impulse_response_content_is_stochastic() {
    let mut a = StdRng::seed_from_u64(1);
    let mut b = StdRng::seed_from_u64(2);
    let left = impulse_response_channel(LEN, 2.0, &mut a);
    let right = impulse_response_channel(LEN, 2.0, &mut b);
    assert_ne!(left, right, "channels should share shape, not content");
}

#[test]
fn exp_decay_noise_respects_its_time_constant() {
    let mut rng = StdRng::seed_from_u64(11);
    let len = 720; // 15ms at 48kHz
    let tau = 0.15;
    let samples = noise_channel(len, NoiseShape::ExpDecay { tau_fraction: tau }, &mut rng);
    for (i, s) in samples.iter().enumerate() {
        let bound = (-(i as f32) / (len as f32 * tau)).exp();
        assert!(s.abs() <= bound + 1e-6);
    }
    // After five time constants the burst is effectively silent.
    let late = &samples[(len as f32 * tau * 5.0) as usize..];
    assert!(late.iter().all(|s| s.abs() < 0.01));
}

#[test]
fn bell_noise_swells_and_fades() {
    let mut rng = StdRng::seed_from_u64(13);
    let len = 12_000; // 250ms at 48kHz
    let samples = noise_channel(len, NoiseShape::Bell, &mut rng);

    assert!(samples[0].abs() < 1e-6, "bell must start at silence");
    let edge = len / 50;
    let edge_max = samples[len - edge..].iter().fold(0.0_f32, |m, s| m.max(s.abs()));
    assert!(edge_max < 0.1, "bell must end near silence");

    let mid_max = samples[len / 2 - edge..len / 2 + edge]
        .iter()
        .fold(0.0_f32, |m, s| m.max(s.abs()));
    assert!(mid_max > 0.5, "bell peak missing: {mid_max}");
}

#[test]
fn zero_length_buffers_are_harmless() {
    let mut rng = StdRng::seed_from_u64(17);
    assert!(impulse_response_channel(0, 2.0, &mut rng).is_empty());
    assert!(noise_channel(0, NoiseShape::Bell, &mut rng).is_empty());
}
