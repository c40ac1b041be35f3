use serde::{Deserialize, Serialize};

/// Explicit motion preference, passed into every rendering unit at
/// construction time. `Reduced` means: final state immediately, all
/// transition durations zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn is_reduced(self) -> bool {
        matches!(self, MotionPreference::Reduced)
    }
}

/// How a chart decides when its entrance animation starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Intersection ratio that triggers the reveal. Charts in the report use
    /// values between 0.05 and 0.4.
    pub threshold: f64,
    pub motion: MotionPreference,
}

impl RevealConfig {
    pub fn new(threshold: f64, motion: MotionPreference) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            motion,
        }
    }
}

/// One-way latch: NotRevealed until the container first intersects the
/// viewport above the threshold, Revealed forever after. Never re-arms on
/// scroll-out. Under reduced motion the latch starts closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            revealed: config.motion.is_reduced(),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed an observed intersection ratio. Returns the (possibly newly
    /// latched) revealed flag.
    pub fn observe(&mut self, ratio: f64, config: &RevealConfig) -> bool {
        if !self.revealed && ratio >= config.threshold {
            self.revealed = true;
        }
        self.revealed
    }
}

/// Transition duration for an entrance animation, zero under reduced motion.
pub fn transition_ms(base_ms: u32, motion: MotionPreference) -> u32 {
    if motion.is_reduced() {
        0
    } else {
        base_ms
    }
}

/// Per-row stagger delay, proportional to row index, zero under reduced
/// motion.
pub fn stagger_delay_ms(index: usize, step_ms: u32, motion: MotionPreference) -> u32 {
    if motion.is_reduced() {
        0
    } else {
        index as u32 * step_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once_and_never_reverts() {
        let cfg = RevealConfig::new(0.2, MotionPreference::Full);
        let mut state = RevealState::new(&cfg);
        assert!(!state.is_revealed());
        assert!(!state.observe(0.1, &cfg));
        assert!(state.observe(0.2, &cfg));
        // Scrolling back out does not re-arm.
        assert!(state.observe(0.0, &cfg));
        assert!(state.is_revealed());
    }

    #[test]
    fn reduced_motion_starts_revealed_with_zero_durations() {
        let cfg = RevealConfig::new(0.4, MotionPreference::Reduced);
        let state = RevealState::new(&cfg);
        assert!(state.is_revealed());
        assert_eq!(transition_ms(600, MotionPreference::Reduced), 0);
        assert_eq!(stagger_delay_ms(5, 80, MotionPreference::Reduced), 0);
    }

    #[test]
    fn stagger_grows_with_row_index() {
        assert_eq!(stagger_delay_ms(0, 80, MotionPreference::Full), 0);
        assert_eq!(stagger_delay_ms(3, 80, MotionPreference::Full), 240);
        assert_eq!(transition_ms(600, MotionPreference::Full), 600);
    }

    #[test]
    fn threshold_is_clamped_to_unit_range() {
        let cfg = RevealConfig::new(1.7, MotionPreference::Full);
        assert_eq!(cfg.threshold, 1.0);
        let cfg = RevealConfig::new(-0.3, MotionPreference::Full);
        assert_eq!(cfg.threshold, 0.0);
    }
}
