use alloc::vec;
use alloc::vec::Vec;
use core::num::Saturating;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Flow of a single round:
///
/// - Ready -> Active, on the first accepted selection
/// - Active -> Cleared, when the last pair is matched
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    Ready,
    Active,
    Cleared,
}

impl EnginePhase {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_cleared(self) -> bool {
        matches!(self, Self::Cleared)
    }
}

impl Default for EnginePhase {
    fn default() -> Self {
        Self::Ready
    }
}

/// Authoritative state of the memory game.
///
/// Input arrives through [`select`](Self::select) and [`reset`](Self::reset), deferred work through
/// [`tick`](Self::tick) and [`resolve_mismatch`](Self::resolve_mismatch). Every mutation queues [`EngineEvent`]s for
/// the host to drain.
#[derive(Clone, Debug)]
pub struct PairEngine {
    config: GameConfig,
    generator: RandomDeckGenerator,
    deck: Deck,
    slots: Vec<SlotState>,
    /// Revealed slots in selection order, never more than two.
    pending: SmallVec<[SlotIndex; 2]>,
    matched_count: SlotCount,
    mistakes: Saturating<u32>,
    elapsed_secs: Saturating<Seconds>,
    timer_running: bool,
    locked: bool,
    phase: EnginePhase,
    round: RoundId,
    events: Vec<EngineEvent>,
}

impl PairEngine {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut generator = RandomDeckGenerator::new(seed);
        let deck = generator.generate(&config);
        Self::from_parts(config, generator, deck)
    }

    /// Starts the first round from `deck`, later rounds are shuffled with `seed`.
    pub fn with_deck(config: GameConfig, deck: Deck, seed: u64) -> Self {
        let config = GameConfig {
            pairs: deck.pairs(),
            ..config
        };
        Self::from_parts(config, RandomDeckGenerator::new(seed), deck)
    }

    fn from_parts(config: GameConfig, generator: RandomDeckGenerator, deck: Deck) -> Self {
        let round = RoundId::first();
        log::debug!("round {} dealt with {} slots", round, deck.len());
        Self {
            config,
            generator,
            slots: vec![SlotState::Hidden; deck.faces().len()],
            deck,
            pending: SmallVec::new(),
            matched_count: 0,
            mistakes: Saturating(0),
            elapsed_secs: Saturating(0),
            timer_running: false,
            locked: false,
            phase: Default::default(),
            round,
            events: vec![EngineEvent::RoundStarted { round }],
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn len(&self) -> SlotCount {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn round(&self) -> RoundId {
        self.round
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn is_clear(&self) -> bool {
        self.phase.is_cleared()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes.0
    }

    pub fn elapsed_secs(&self) -> Seconds {
        self.elapsed_secs.0
    }

    pub fn matched_count(&self) -> SlotCount {
        self.matched_count
    }

    pub fn pending(&self) -> &[SlotIndex] {
        &self.pending
    }

    pub fn slot_at(&self, index: SlotIndex) -> Option<SlotState> {
        self.slots.get(usize::from(index)).copied()
    }

    pub fn face_at(&self, index: SlotIndex) -> Option<Face> {
        self.deck.face_at(index)
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round: self.round,
            phase: self.phase,
            slots: self
                .deck
                .faces()
                .iter()
                .zip(&self.slots)
                .map(|(&face, &state)| SlotView { face, state })
                .collect(),
            elapsed_secs: self.elapsed_secs(),
            mistakes: self.mistakes(),
            is_clear: self.is_clear(),
            timer_running: self.timer_running,
            locked: self.locked,
        }
    }

    /// Drains the events queued since the last call.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        core::mem::take(&mut self.events)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Turns the slot at `index` face up. Anything that is not a hidden slot of an unlocked round is ignored.
    pub fn select(&mut self, index: SlotIndex) -> SelectOutcome {
        use SelectOutcome::*;

        if self.locked {
            log::trace!("select {}: input locked, dropped", index);
            return Ignored;
        }
        if self.phase.is_cleared() {
            log::trace!("select {}: round {} already clear", index, self.round);
            return Ignored;
        }
        let index = match self.deck.validate_index(index) {
            Ok(index) => index,
            Err(err) => {
                log::trace!("select {}: {}", index, err);
                return Ignored;
            }
        };
        if !self.slots[usize::from(index)].is_hidden() {
            log::trace!("select {}: already face up", index);
            return Ignored;
        }

        self.start_timer();
        self.slots[usize::from(index)] = SlotState::Revealed;
        self.pending.push(index);

        if self.pending.len() < 2 {
            self.notify_changed();
            return Revealed;
        }

        self.locked = true;
        let (first, second) = (self.pending[0], self.pending[1]);

        if self.deck.is_pair(first, second) {
            for index in self.pending.drain(..) {
                self.slots[usize::from(index)] = SlotState::Matched;
            }
            self.matched_count += 2;
            self.locked = false;
            log::debug!("matched {} and {} (face {})", first, second, self.deck[first]);

            if self.matched_count == self.deck.len() {
                self.mark_cleared();
                Cleared
            } else {
                self.notify_changed();
                Matched
            }
        } else {
            self.mistakes += 1;
            let round = self.round;
            let delay_ms = self.config.mismatch_delay_ms;
            log::debug!(
                "mismatch {} and {}, {} mistakes so far",
                first,
                second,
                self.mistakes
            );
            self.notify_changed();
            self.events
                .push(EngineEvent::MismatchScheduled { round, delay_ms });
            Mismatched { round, delay_ms }
        }
    }

    /// Turns a mismatched pair back over and releases the input lock. Returns whether anything changed; calls tagged
    /// with a stale round, or arriving when no mismatch is pending, are discarded.
    pub fn resolve_mismatch(&mut self, round: RoundId) -> bool {
        if round != self.round {
            log::trace!(
                "discarded mismatch resolution for round {}, current is {}",
                round,
                self.round
            );
            return false;
        }
        if !self.locked || self.pending.len() != 2 {
            log::trace!("no mismatch pending in round {}", round);
            return false;
        }

        for index in self.pending.drain(..) {
            self.slots[usize::from(index)] = SlotState::Hidden;
        }
        self.locked = false;
        self.notify_changed();
        true
    }

    /// Counts one second if the timer of `round` is running.
    pub fn tick(&mut self, round: RoundId) -> bool {
        if round != self.round {
            log::trace!("discarded tick for round {}, current is {}", round, self.round);
            return false;
        }
        if !self.timer_running {
            return false;
        }

        self.elapsed_secs += 1;
        self.notify_changed();
        true
    }

    /// Discards the current round and deals a new one.
    pub fn reset(&mut self) {
        self.stop_timer();

        self.round = self.round.next();
        self.deck = self.generator.generate(&self.config);
        self.slots.clear();
        self.slots
            .resize(self.deck.faces().len(), SlotState::Hidden);
        self.pending.clear();
        self.matched_count = 0;
        self.mistakes = Saturating(0);
        self.elapsed_secs = Saturating(0);
        self.locked = false;
        self.phase = EnginePhase::Ready;

        log::debug!("round {} dealt with {} slots", self.round, self.deck.len());
        self.events
            .push(EngineEvent::RoundStarted { round: self.round });
        self.notify_changed();
    }

    fn start_timer(&mut self) {
        if self.timer_running || self.phase.is_cleared() {
            return;
        }

        self.timer_running = true;
        self.phase = EnginePhase::Active;
        log::debug!("timer started for round {}", self.round);
        self.events.push(EngineEvent::TimerStarted {
            round: self.round,
            interval_ms: self.config.tick_interval_ms,
        });
    }

    fn stop_timer(&mut self) {
        if !self.timer_running {
            return;
        }

        self.timer_running = false;
        log::debug!(
            "timer stopped for round {} at {}s",
            self.round,
            self.elapsed_secs
        );
        self.events
            .push(EngineEvent::TimerStopped { round: self.round });
    }

    fn mark_cleared(&mut self) {
        if self.phase.is_cleared() {
            return;
        }

        self.stop_timer();
        self.phase = EnginePhase::Cleared;
        log::debug!(
            "round {} clear in {}s with {} mistakes",
            self.round,
            self.elapsed_secs,
            self.mistakes
        );
        self.notify_changed();
        self.events.push(EngineEvent::Cleared {
            round: self.round,
            elapsed_secs: self.elapsed_secs(),
            mistakes: self.mistakes(),
        });
    }

    fn notify_changed(&mut self) {
        self.events.push(EngineEvent::Changed { round: self.round });
    }
}
