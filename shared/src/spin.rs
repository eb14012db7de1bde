use rand::Rng;
use std::cell::RefCell;

use crate::adaptivity::{Platform, SizeClass};
use crate::constants::*;
use crate::prize_catalog::{PrizeCatalog, PrizeEntry};
use crate::weighted_selector::select_winner;

/// Layout of the horizontally scrolling roulette strip, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    pub item_width: f64,
    pub item_gap: f64,
    pub container_width: f64,
    pub repetitions: usize,
    pub pointer_bias: f64,
}

impl StripGeometry {
    pub fn for_size(size: SizeClass, container_width: Option<f64>) -> Self {
        let item_width = match size {
            SizeClass::Compact => CARD_WIDTH_COMPACT_PX,
            SizeClass::Regular => CARD_WIDTH_REGULAR_PX,
        };
        Self {
            item_width,
            item_gap: CARD_GAP_PX,
            container_width: container_width
                .filter(|w| *w > 0.0)
                .unwrap_or(FALLBACK_CONTAINER_WIDTH_PX),
            repetitions: STRIP_REPETITIONS,
            pointer_bias: POINTER_BIAS_PX,
        }
    }

    pub fn item_stride(&self) -> f64 {
        self.item_width + self.item_gap
    }
}

/// Leftward scroll distance that centers the winning card under the pointer.
///
/// The winner is taken from the middle repetition of the strip so there is the
/// same runway on both sides.
pub fn compute_target_offset(
    winning_index: usize,
    catalog_len: usize,
    geometry: &StripGeometry,
) -> f64 {
    let target_index = catalog_len * (geometry.repetitions / 2) + winning_index;
    let center_offset =
        geometry.container_width / 2.0 - geometry.item_width / 2.0 + geometry.pointer_bias;
    target_index as f64 * geometry.item_stride() - center_offset
}

pub fn easing_for(platform: Platform) -> &'static str {
    match platform {
        Platform::Ios => EASING_IOS,
        Platform::Android | Platform::Desktop => EASING_DEFAULT,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning { started_at: u64, winning_index: usize },
    Revealing { revealed_at: u64, winning_index: usize },
}

/// What the view has to animate after a successful `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub winning_index: usize,
    pub offset_px: f64,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    Revealed(usize),
    Hidden,
}

/// Spin lifecycle: `Idle -> Spinning -> Revealing -> Idle`.
///
/// Time is passed in explicitly (milliseconds, any monotonic origin) so the
/// caller owns the timers and the machine stays deterministic.
#[derive(Debug, Clone)]
pub struct SpinMachine {
    catalog: PrizeCatalog,
    phase: SpinPhase,
    animation_ms: u32,
    reveal_ms: u32,
}

impl SpinMachine {
    pub fn new(catalog: PrizeCatalog) -> Self {
        Self::with_durations(catalog, SPIN_ANIMATION_MS, REVEAL_DISPLAY_MS)
    }

    pub fn with_durations(catalog: PrizeCatalog, animation_ms: u32, reveal_ms: u32) -> Self {
        Self {
            catalog,
            phase: SpinPhase::Idle,
            animation_ms,
            reveal_ms,
        }
    }

    pub fn catalog(&self) -> &PrizeCatalog {
        &self.catalog
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SpinPhase::Idle
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. })
    }

    pub fn animation_ms(&self) -> u32 {
        self.animation_ms
    }

    pub fn reveal_ms(&self) -> u32 {
        self.reveal_ms
    }

    /// The won prize, only while it is being revealed.
    pub fn winning_entry(&self) -> Option<&PrizeEntry> {
        match self.phase {
            SpinPhase::Revealing { winning_index, .. } => self.catalog.get(winning_index),
            _ => None,
        }
    }

    /// Begins a spin. Returns `None` without touching any state unless idle.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        now_ms: u64,
        rng: &mut R,
        geometry: &StripGeometry,
    ) -> Option<SpinPlan> {
        if !self.is_idle() {
            return None;
        }

        let winning_index = select_winner(&self.catalog, rng);
        let offset_px = compute_target_offset(winning_index, self.catalog.len(), geometry);
        self.phase = SpinPhase::Spinning { started_at: now_ms, winning_index };

        Some(SpinPlan {
            winning_index,
            offset_px,
            duration_ms: self.animation_ms,
        })
    }

    /// Applies any timer transition that is due at `now_ms`.
    pub fn advance(&mut self, now_ms: u64) -> Option<SpinEvent> {
        match self.phase {
            SpinPhase::Spinning { started_at, winning_index }
                if now_ms >= started_at + u64::from(self.animation_ms) =>
            {
                self.phase = SpinPhase::Revealing { revealed_at: now_ms, winning_index };
                Some(SpinEvent::Revealed(winning_index))
            }
            SpinPhase::Revealing { revealed_at, .. }
                if now_ms >= revealed_at + u64::from(self.reveal_ms) =>
            {
                self.phase = SpinPhase::Idle;
                Some(SpinEvent::Hidden)
            }
            _ => None,
        }
    }
}

/// Advances a machine shared behind a `RefCell` and returns the event together
/// with the phase it left behind. The mutable borrow ends before the phase is read.
pub fn advance_shared(machine: &RefCell<SpinMachine>, now_ms: u64) -> (Option<SpinEvent>, SpinPhase) {
    let event = machine.borrow_mut().advance(now_ms);
    let phase = machine.borrow().phase();
    (event, phase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize_catalog::roulette_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference_geometry() -> StripGeometry {
        StripGeometry {
            item_width: 145.0,
            item_gap: 12.0,
            container_width: 360.0,
            repetitions: 10,
            pointer_bias: POINTER_BIAS_PX,
        }
    }

    #[test]
    fn test_target_offset_golden_value() {
        let geometry = reference_geometry();
        // 30 * 157 - (180 - 72.5 + 6)
        assert_eq!(compute_target_offset(0, 6, &geometry), 4596.5);
        assert_eq!(compute_target_offset(5, 6, &geometry), 4596.5 + 5.0 * 157.0);
    }

    #[test]
    fn test_target_offset_is_stable() {
        let geometry = reference_geometry();
        let a = compute_target_offset(3, 6, &geometry);
        let b = compute_target_offset(3, 6, &geometry);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_odd_repetitions_round_down() {
        let mut geometry = reference_geometry();
        geometry.repetitions = 7;
        assert_eq!(
            compute_target_offset(0, 6, &geometry),
            18.0 * 157.0 - 113.5
        );
    }

    #[test]
    fn test_geometry_for_size() {
        let compact = StripGeometry::for_size(SizeClass::Compact, None);
        assert_eq!(compact.item_width, CARD_WIDTH_COMPACT_PX);
        assert_eq!(compact.container_width, FALLBACK_CONTAINER_WIDTH_PX);

        let regular = StripGeometry::for_size(SizeClass::Regular, Some(412.0));
        assert_eq!(regular.item_width, CARD_WIDTH_REGULAR_PX);
        assert_eq!(regular.container_width, 412.0);
        assert_eq!(regular.item_stride(), CARD_WIDTH_REGULAR_PX + CARD_GAP_PX);

        let zero = StripGeometry::for_size(SizeClass::Regular, Some(0.0));
        assert_eq!(zero.container_width, FALLBACK_CONTAINER_WIDTH_PX);
    }

    #[test]
    fn test_easing_varies_by_platform() {
        assert_eq!(easing_for(Platform::Ios), EASING_IOS);
        assert_eq!(easing_for(Platform::Android), EASING_DEFAULT);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut machine = SpinMachine::new(roulette_catalog());
        let mut rng = StdRng::seed_from_u64(3);
        let geometry = reference_geometry();

        let plan = machine.start(1_000, &mut rng, &geometry).unwrap();
        assert!(machine.is_spinning());
        assert!(machine.winning_entry().is_none());
        assert_eq!(plan.duration_ms, SPIN_ANIMATION_MS);
        assert_eq!(
            plan.offset_px,
            compute_target_offset(plan.winning_index, 6, &geometry)
        );

        assert_eq!(machine.advance(1_000 + 3_999), None);
        assert!(machine.is_spinning());

        assert_eq!(
            machine.advance(5_000),
            Some(SpinEvent::Revealed(plan.winning_index))
        );
        assert_eq!(
            machine.winning_entry(),
            machine.catalog().get(plan.winning_index)
        );

        assert_eq!(machine.advance(5_000 + 2_999), None);
        assert!(machine.winning_entry().is_some());

        assert_eq!(machine.advance(8_000), Some(SpinEvent::Hidden));
        assert!(machine.is_idle());
        assert!(machine.winning_entry().is_none());
    }

    #[test]
    fn test_start_is_ignored_unless_idle() {
        let mut machine = SpinMachine::with_durations(roulette_catalog(), 100, 50);
        let mut rng = StdRng::seed_from_u64(11);
        let geometry = reference_geometry();

        machine.start(0, &mut rng, &geometry).unwrap();
        let spinning = machine.phase();
        assert_eq!(machine.start(10, &mut rng, &geometry), None);
        assert_eq!(machine.phase(), spinning);

        machine.advance(100);
        let revealing = machine.phase();
        let winner = machine.winning_entry().cloned();
        assert_eq!(machine.start(120, &mut rng, &geometry), None);
        assert_eq!(machine.phase(), revealing);
        assert_eq!(machine.winning_entry().cloned(), winner);

        machine.advance(150);
        assert!(machine.start(151, &mut rng, &geometry).is_some());
    }

    #[test]
    fn test_advance_while_idle_does_nothing() {
        let mut machine = SpinMachine::new(roulette_catalog());
        assert_eq!(machine.advance(u64::MAX / 2), None);
        assert!(machine.is_idle());
    }

    #[test]
    fn test_shared_machine_returns_to_idle() {
        let machine = std::rc::Rc::new(RefCell::new(SpinMachine::with_durations(roulette_catalog(), 10, 10)));
        let mut rng = StdRng::seed_from_u64(5);
        let plan = machine
            .borrow_mut()
            .start(0, &mut rng, &reference_geometry())
            .unwrap();

        let (event, phase) = advance_shared(&machine, 10);
        assert_eq!(event, Some(SpinEvent::Revealed(plan.winning_index)));
        assert!(matches!(phase, SpinPhase::Revealing { .. }));

        let (event, phase) = advance_shared(&machine, 20);
        assert_eq!(event, Some(SpinEvent::Hidden));
        assert_eq!(phase, SpinPhase::Idle);
        assert!(machine.borrow().is_idle());
    }
}
