use rand::prelude::*;

/// Pieces dropped when a round is cleared.
pub(crate) const BURST_SIZE: usize = 300;

const COLORS: &[&str] = &[
    "#f44336", "#e91e63", "#9c27b0", "#3f51b5", "#03a9f4", "#00bcd4", "#4caf50", "#cddc39",
    "#ffeb3b", "#ff9800", "#ff5722", "#FFB7C5",
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct ConfettiPiece {
    /// Horizontal start, percent of the viewport width.
    pub left_pct: f64,
    pub color: &'static str,
    pub width_px: f64,
    pub height_px: f64,
    pub spin_deg: f64,
    pub delay_ms: u32,
    pub fall_ms: u32,
}

impl ConfettiPiece {
    pub(crate) fn style(&self) -> String {
        format!(
            "left: {:.2}%; width: {:.1}px; height: {:.1}px; background: {}; \
             animation-delay: {}ms; animation-duration: {}ms; --spin: {:.0}deg;",
            self.left_pct,
            self.width_px,
            self.height_px,
            self.color,
            self.delay_ms,
            self.fall_ms,
            self.spin_deg
        )
    }
}

/// One-shot burst, generated once per cleared round and kept until the next deal.
pub(crate) fn burst(rng: &mut impl Rng, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            left_pct: rng.random_range(0.0..100.0),
            color: COLORS[rng.random_range(0..COLORS.len())],
            width_px: rng.random_range(5.0..10.0),
            height_px: rng.random_range(10.0..18.0),
            spin_deg: rng.random_range(360.0..1080.0),
            delay_ms: rng.random_range(0..3000),
            fall_ms: rng.random_range(2500..5500),
        })
        .collect()
}
