use sfx_core::constants::*;
use sfx_core::SoundKind;

#[test]
fn cooldown_table_matches_design_values() {
    let expected = [
        (SoundKind::Ping, 200.0),
        (SoundKind::Tick, 50.0),
        (SoundKind::Pop, 80.0),
        (SoundKind::Whoosh, 400.0),
        (SoundKind::Knock, 200.0),
        (SoundKind::Chime, 300.0),
        (SoundKind::Shimmer, 300.0),
        (SoundKind::GlassTap, 100.0),
        (SoundKind::Resonance, 500.0),
    ];
    for (kind, ms) in expected {
        assert_eq!(kind.cooldown_ms(), ms, "{}", kind.name());
    }
}

#[test]
fn kind_names_are_stable_api() {
    let names: Vec<&str> = SoundKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(
        names,
        vec![
            "ping",
            "tick",
            "pop",
            "whoosh",
            "knock",
            "chime",
            "shimmer",
            "glassTap",
            "resonance"
        ]
    );
}

#[test]
fn dry_wet_split_preserves_unity() {
    assert!((DRY_GAIN + WET_GAIN - 1.0).abs() < 1e-6);
}

#[test]
fn compressor_parameters_match_design_values() {
    assert_eq!(COMPRESSOR_THRESHOLD_DB, -24.0);
    assert_eq!(COMPRESSOR_KNEE_DB, 30.0);
    assert_eq!(COMPRESSOR_RATIO, 12.0);
    assert_eq!(COMPRESSOR_ATTACK_SEC, 0.003);
    assert_eq!(COMPRESSOR_RELEASE_SEC, 0.25);
}

#[test]
fn drone_levels_are_felt_not_heard() {
    assert!(DRONE_LEVEL <= 0.02);
    assert!(DRONE_LOW_HZ < DRONE_HIGH_HZ);
    assert!(DRONE_HIGH_HZ <= DRONE_LOWPASS_HZ);
    // Fade-out plus grace must cover the teardown delay.
    assert!(DRONE_TEARDOWN_MS as f64 >= DRONE_FADE_OUT_SEC * 1000.0);
}

#[test]
fn impulse_response_is_short_and_front_loaded() {
    assert_eq!(IR_DURATION_SEC, 0.4);
    assert!(IR_DECAY_EXPONENT >= 1.0);
}
