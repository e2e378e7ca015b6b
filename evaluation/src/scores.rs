use cozy_chess::Color;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

// Score bounds for evaluation results.
/// Base value for checkmate. Static evaluation never reaches it.
pub const MATE_VALUE: i16 = 32_000;
/// Largest magnitude a static evaluation may return.
pub const MAX_EVAL: i16 = 29_999;

/// Clamps a raw evaluation into `[-MAX_EVAL, MAX_EVAL]`.
#[inline(always)]
pub fn clip(score: i32) -> i32 {
    score.clamp(-(MAX_EVAL as i32), MAX_EVAL as i32)
}

/// Converts a White-relative score into one relative to `side`.
#[inline(always)]
pub fn relative_to(score: i32, side: Color) -> i32 {
    match side {
        Color::White => score,
        Color::Black => -score,
    }
}

/// `value * percent / 100`, truncating toward zero.
#[inline(always)]
pub fn percent(value: i32, percent: i32) -> i32 {
    (value * percent) / 100
}

/// Middlegame and endgame halves of a score, blended later by game phase.
///
/// <https://www.chessprogramming.org/Tapered_Eval>
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaperedScore {
    pub mg: i32,
    pub eg: i32,
}

impl TaperedScore {
    pub const ZERO: TaperedScore = TaperedScore { mg: 0, eg: 0 };

    #[inline(always)]
    pub const fn new(mg: i32, eg: i32) -> Self {
        Self { mg, eg }
    }

    /// Same value in both halves.
    #[inline(always)]
    pub const fn splat(value: i32) -> Self {
        Self { mg: value, eg: value }
    }

    #[inline(always)]
    pub fn scaled(self, percent_weight: i32) -> Self {
        Self {
            mg: percent(self.mg, percent_weight),
            eg: percent(self.eg, percent_weight),
        }
    }

    /// Blends both halves. `phase` is clamped to `0..=24`, 24 being a full middlegame.
    #[inline(always)]
    pub fn interpolate(self, phase: i32) -> i32 {
        let (mg_phase, eg_phase) = phase_weights(phase);
        (self.mg * mg_phase + self.eg * eg_phase) / 24
    }
}

/// `(mg_phase, eg_phase)` for a raw phase counter.
#[inline(always)]
pub fn phase_weights(phase: i32) -> (i32, i32) {
    let mg_phase = phase.clamp(0, 24);
    (mg_phase, 24 - mg_phase)
}

impl Add for TaperedScore {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.mg + rhs.mg, self.eg + rhs.eg)
    }
}

impl AddAssign for TaperedScore {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.mg += rhs.mg;
        self.eg += rhs.eg;
    }
}

impl Sub for TaperedScore {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.mg - rhs.mg, self.eg - rhs.eg)
    }
}

impl SubAssign for TaperedScore {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.mg -= rhs.mg;
        self.eg -= rhs.eg;
    }
}

impl Neg for TaperedScore {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::new(-self.mg, -self.eg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_clamp() {
        assert_eq!(phase_weights(24), (24, 0));
        assert_eq!(phase_weights(31), (24, 0));
        assert_eq!(phase_weights(0), (0, 24));
        assert_eq!(phase_weights(-3), (0, 24));
        assert_eq!(phase_weights(10), (10, 14));
    }

    #[test]
    fn test_interpolate() {
        let score = TaperedScore::new(100, 40);
        assert_eq!(score.interpolate(24), 100);
        assert_eq!(score.interpolate(0), 40);
        assert_eq!(score.interpolate(12), 70);
    }

    #[test]
    fn test_percent_is_symmetric() {
        assert_eq!(percent(37, 50), 18);
        assert_eq!(percent(-37, 50), -18);
        assert_eq!(TaperedScore::new(-7, 9).scaled(109), TaperedScore::new(-7, 9));
    }

    #[test]
    fn test_clip_and_relative() {
        assert_eq!(clip(40_000), MAX_EVAL as i32);
        assert_eq!(clip(-40_000), -(MAX_EVAL as i32));
        assert!(MAX_EVAL < MATE_VALUE);
        assert_eq!(relative_to(25, Color::Black), -25);
        assert_eq!(relative_to(25, Color::White), 25);
    }
}
