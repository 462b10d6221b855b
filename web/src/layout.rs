use core::f64::consts::PI;
use rand::prelude::*;
use shinkei_core as game;

/// Cards per row.
const COLUMNS: usize = 4;
/// Horizontal distance between card centres, in card units.
const GAP_X: f64 = 1.2;
/// Vertical distance between card centres, in card units.
const GAP_Y: f64 = 1.5;
/// Height cards are dropped from when a round is dealt.
const DROP_HEIGHT: f64 = 6.0;
/// Pixels per card unit.
pub(crate) const UNIT_PX: f64 = 100.0;

const SETTLE_EPSILON: f64 = 1e-3;

/// Where a card should be and which way it should face.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct CardTransform {
    pub x: f64,
    pub y: f64,
    /// Rotation around the vertical axis, `0` shows the face and `PI` the back.
    pub rotation_y: f64,
}

impl CardTransform {
    pub(crate) fn css(&self) -> String {
        format!(
            "transform: translate3d({:.1}px, {:.1}px, 0) rotateY({:.4}rad);",
            self.x * UNIT_PX,
            -self.y * UNIT_PX,
            self.rotation_y
        )
    }
}

/// Target transform of slot `index` on a board of `len` slots, the grid is centred on the origin.
pub(crate) fn slot_transform(index: game::SlotIndex, len: game::SlotCount, face_up: bool) -> CardTransform {
    let index = usize::from(index);
    let rows = usize::from(len).div_ceil(COLUMNS);
    let offset_x = (COLUMNS - 1) as f64 * GAP_X / 2.0;
    let offset_y = rows.saturating_sub(1) as f64 * GAP_Y / 2.0;

    CardTransform {
        x: (index % COLUMNS) as f64 * GAP_X - offset_x,
        y: (index / COLUMNS) as f64 * -GAP_Y + offset_y,
        rotation_y: if face_up { 0.0 } else { PI },
    }
}

/// Board extent in pixels, `(width, height)`.
pub(crate) fn board_size_px(len: game::SlotCount) -> (f64, f64) {
    let rows = usize::from(len).div_ceil(COLUMNS).max(1);
    let cols = usize::from(len).clamp(1, COLUMNS);
    (
        ((cols - 1) as f64 * GAP_X + 1.0) * UNIT_PX,
        ((rows - 1) as f64 * GAP_Y + 1.4) * UNIT_PX,
    )
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Rendered state of one card, eased a fraction of the remaining distance towards its target every frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct CardMotion {
    pub current: CardTransform,
    speed: f64,
}

impl CardMotion {
    /// Face down, somewhat scattered, above the board.
    pub(crate) fn falling(start_x: f64, speed: f64) -> Self {
        Self {
            current: CardTransform {
                x: start_x,
                y: DROP_HEIGHT,
                rotation_y: PI,
            },
            speed,
        }
    }

    /// Advances one frame, returns whether the card is still moving.
    pub(crate) fn step(&mut self, target: CardTransform) -> bool {
        let current = &mut self.current;
        current.x = lerp(current.x, target.x, self.speed);
        current.y = lerp(current.y, target.y, self.speed);
        current.rotation_y = lerp(current.rotation_y, target.rotation_y, self.speed);

        let moving = (current.x - target.x).abs() > SETTLE_EPSILON
            || (current.y - target.y).abs() > SETTLE_EPSILON
            || (current.rotation_y - target.rotation_y).abs() > SETTLE_EPSILON;
        if !moving {
            *current = target;
        }
        moving
    }
}

/// Fresh motions for a newly dealt board, each card with its own start offset and easing speed.
pub(crate) fn entrance(len: game::SlotCount, rng: &mut impl Rng) -> Vec<CardMotion> {
    (0..len)
        .map(|_| CardMotion::falling(rng.random_range(-1.0..1.0), rng.random_range(0.07..0.12)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_board_is_four_by_five_around_origin() {
        let first = slot_transform(0, 20, false);
        let last = slot_transform(19, 20, false);

        assert!(close(first.x, -1.8));
        assert!(close(first.y, 3.0));
        assert!(close(last.x, 1.8));
        assert!(close(last.y, -3.0));
        assert!(close(first.rotation_y, PI));
    }

    #[test]
    fn face_up_cards_are_not_rotated() {
        let t = slot_transform(5, 20, true);
        assert!(close(t.rotation_y, 0.0));
        assert!(close(t.x, -0.6));
        assert!(close(t.y, 1.5));
    }

    #[test]
    fn partial_last_row_keeps_grid_columns() {
        let t = slot_transform(4, 6, false);
        assert!(close(t.x, -1.8));
        assert!(close(t.y, -0.75));
    }

    #[test]
    fn motion_settles_on_target() {
        let target = slot_transform(3, 20, true);
        let mut motion = CardMotion::falling(0.5, 0.1);

        let mut frames = 0;
        while motion.step(target) {
            frames += 1;
            assert!(frames < 1000, "card never settled");
        }

        assert_eq!(motion.current, target);
    }

    #[test]
    fn entrance_draws_speeds_and_offsets_in_range() {
        let mut rng = SmallRng::seed_from_u64(1);
        let motions = entrance(20, &mut rng);

        assert_eq!(motions.len(), 20);
        for motion in motions {
            assert!((0.07..0.12).contains(&motion.speed));
            assert!((-1.0..1.0).contains(&motion.current.x));
            assert!(close(motion.current.y, DROP_HEIGHT));
        }
    }

    #[test]
    fn css_flips_y_axis_for_screen_space() {
        let css = CardTransform {
            x: 1.2,
            y: 1.5,
            rotation_y: 0.0,
        }
        .css();
        assert_eq!(
            css,
            "transform: translate3d(120.0px, -150.0px, 0) rotateY(0.0000rad);"
        );
    }
}
