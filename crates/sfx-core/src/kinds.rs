/// The nine one-shot sound effects the engine can play.
///
/// Each kind pairs a synthesis recipe (see [`crate::plan`]) with a cooldown
/// window enforced by the throttle gate. The ambient drone is not a kind; it
/// is start/stop controlled rather than fire-and-forget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundKind {
    /// Crystalline success chime with an upward pitch bend.
    Ping,
    /// Barely perceptible hover click.
    Tick,
    /// Bubbly card-interaction blip.
    Pop,
    /// Directional noise sweep for section entrances.
    Whoosh,
    /// Dry, woody error knock.
    Knock,
    /// Major-triad arpeggio for confirmations.
    Chime,
    /// High, detuned sparkle cluster.
    Shimmer,
    /// Short glassy tap with a noise transient.
    GlassTap,
    /// Low vibrato hum with a quiet octave partial.
    Resonance,
}

impl SoundKind {
    pub const ALL: [SoundKind; 9] = [
        SoundKind::Ping,
        SoundKind::Tick,
        SoundKind::Pop,
        SoundKind::Whoosh,
        SoundKind::Knock,
        SoundKind::Chime,
        SoundKind::Shimmer,
        SoundKind::GlassTap,
        SoundKind::Resonance,
    ];

    /// Minimum gap between two audible triggers of this kind.
    ///
    /// Hover-driven kinds (tick) tolerate rapid repeats; sweeps that several
    /// scroll events can fire in one gesture (whoosh) must not restack.
    pub fn cooldown_ms(self) -> f64 {
        match self {
            SoundKind::Ping => 200.0,
            SoundKind::Tick => 50.0,
            SoundKind::Pop => 80.0,
            SoundKind::Whoosh => 400.0,
            SoundKind::Knock => 200.0,
            SoundKind::Chime => 300.0,
            SoundKind::Shimmer => 300.0,
            SoundKind::GlassTap => 100.0,
            SoundKind::Resonance => 500.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SoundKind::Ping => "ping",
            SoundKind::Tick => "tick",
            SoundKind::Pop => "pop",
            SoundKind::Whoosh => "whoosh",
            SoundKind::Knock => "knock",
            SoundKind::Chime => "chime",
            SoundKind::Shimmer => "shimmer",
            SoundKind::GlassTap => "glassTap",
            SoundKind::Resonance => "resonance",
        }
    }
}
