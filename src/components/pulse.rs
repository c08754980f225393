//! Two-color gradient that sweeps across big text while a lookup runs

use artbox::{Color as ArtColor, ColorStop, Fill, LinearGradient};

use crate::state::LOADING_ANIM_CYCLE_TICKS;

/// Pulse phase in [0, 1) for the current tick
pub fn phase_for_tick(tick_count: u32) -> f32 {
    let steps = LOADING_ANIM_CYCLE_TICKS.max(1);
    (tick_count % steps) as f32 / steps as f32
}

#[derive(Clone, Copy)]
pub struct PulseGradient {
    start: ArtColor,
    end: ArtColor,
    angle: f32,
}

impl PulseGradient {
    pub fn new(start: ArtColor, end: ArtColor) -> Self {
        Self {
            start,
            end,
            angle: 0.0,
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Resting band: faded at both edges, full colors near the middle
    fn resting_stops(&self) -> [(f32, ArtColor); 5] {
        let faded = self.start.interpolate(self.end, 0.08);
        [
            (0.0, faded),
            (0.35, self.start),
            (0.5, self.start.interpolate(self.end, 0.5)),
            (0.65, self.end),
            (1.0, faded),
        ]
    }

    /// Resting stops moved right by `phase`, wrapping at 1.0. The seam color
    /// is pinned at both ends so the gradient stays continuous.
    fn shifted_stops(&self, phase: f32) -> Vec<(f32, ArtColor)> {
        let phase = phase.rem_euclid(1.0);
        let resting = self.resting_stops();
        let seam = color_at(&resting, 1.0 - phase);

        let mut stops: Vec<(f32, ArtColor)> = resting
            .iter()
            .map(|&(pos, color)| ((pos + phase).rem_euclid(1.0), color))
            .collect();
        stops.push((0.0, seam));
        stops.push((1.0, seam));
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        stops
    }

    pub fn fill(&self, phase: f32) -> Fill {
        let stops = self
            .shifted_stops(phase)
            .into_iter()
            .map(|(pos, color)| ColorStop::new(pos, color))
            .collect();
        Fill::Linear(LinearGradient::new(self.angle, stops))
    }
}

/// Linear interpolation between sorted stops
fn color_at(stops: &[(f32, ArtColor)], position: f32) -> ArtColor {
    let pos = position.clamp(0.0, 1.0);
    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if pos <= hi.0 {
            let span = hi.0 - lo.0;
            if span <= f32::EPSILON {
                return hi.1;
            }
            return lo.1.interpolate(hi.1, (pos - lo.0) / span);
        }
    }
    match stops.last() {
        Some(&(_, color)) => color,
        None => ArtColor::rgb(255, 255, 255),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pulse() -> PulseGradient {
        PulseGradient::new(ArtColor::rgb(255, 255, 255), ArtColor::rgb(253, 224, 71))
    }

    #[test]
    fn test_phase_for_tick_wraps() {
        assert_eq!(phase_for_tick(0), 0.0);
        assert_eq!(phase_for_tick(LOADING_ANIM_CYCLE_TICKS), 0.0);
        assert!(phase_for_tick(LOADING_ANIM_CYCLE_TICKS / 2) > 0.49);
    }

    #[test]
    fn test_shifted_stops_cover_full_range_in_order() {
        for phase in [0.0, 0.2, 0.5, 0.99, 1.7, -0.3] {
            let stops = pulse().shifted_stops(phase);
            assert_eq!(stops.len(), 7);
            assert_eq!(stops.first().map(|s| s.0), Some(0.0));
            assert_eq!(stops.last().map(|s| s.0), Some(1.0));
            assert!(stops.windows(2).all(|w| w[0].0 <= w[1].0), "phase {phase}");
        }
    }

    #[test]
    fn test_shifted_stops_move_with_phase() {
        let positions = |phase: f32| -> Vec<f32> {
            pulse().shifted_stops(phase).iter().map(|s| s.0).collect()
        };
        assert!(positions(0.25).iter().any(|&p| (p - 0.6).abs() < 1e-6));
        assert!(!positions(0.0).iter().any(|&p| (p - 0.6).abs() < 1e-6));
    }
}
