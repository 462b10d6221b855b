use shinkei_core as game;

/// Host timer handles requested by the engine, at most one round interval and one mismatch timeout at a time.
///
/// The handle types are generic so the bookkeeping runs without a browser; the app stores gloo timers, where dropping
/// a handle cancels it.
#[derive(Debug)]
pub(crate) struct HostTimers<I, T> {
    interval: Option<I>,
    timeout: Option<T>,
}

impl<I, T> Default for HostTimers<I, T> {
    fn default() -> Self {
        Self {
            interval: None,
            timeout: None,
        }
    }
}

impl<I, T> HostTimers<I, T> {
    #[cfg(test)]
    pub(crate) fn interval(&self) -> Option<&I> {
        self.interval.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn timeout(&self) -> Option<&T> {
        self.timeout.as_ref()
    }

    /// Arms or drops handles for one engine event.
    pub(crate) fn apply(
        &mut self,
        event: &game::EngineEvent,
        arm_interval: impl FnOnce(game::RoundId, u32) -> I,
        arm_timeout: impl FnOnce(game::RoundId, u32) -> T,
    ) {
        use game::EngineEvent::*;

        match *event {
            RoundStarted { .. } => {
                self.interval = None;
                self.timeout = None;
            }
            TimerStarted { round, interval_ms } => {
                self.interval = Some(arm_interval(round, interval_ms));
            }
            TimerStopped { .. } | Cleared { .. } => {
                self.interval = None;
            }
            MismatchScheduled { round, delay_ms } => {
                self.timeout = Some(arm_timeout(round, delay_ms));
            }
            Changed { .. } => {}
        }
    }

    /// The pending mismatch was resolved, its timeout already fired.
    pub(crate) fn settle_timeout(&mut self) {
        self.timeout = None;
    }

    pub(crate) fn cancel_all(&mut self) {
        self.interval = None;
        self.timeout = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::{Deck, EngineEvent, GameConfig, PairEngine, RoundId};

    type Armed = (RoundId, u32);
    type Timers = HostTimers<Armed, Armed>;

    fn engine() -> PairEngine {
        let deck = Deck::from_faces(vec![1, 2, 1, 2]).unwrap();
        PairEngine::with_deck(GameConfig::default(), deck, 7)
    }

    fn sync(timers: &mut Timers, engine: &mut PairEngine) -> Vec<EngineEvent> {
        let events = engine.take_events();
        for event in &events {
            timers.apply(event, |round, ms| (round, ms), |round, ms| (round, ms));
        }
        events
    }

    #[test]
    fn first_selection_arms_the_round_interval() {
        let mut engine = engine();
        let mut timers = Timers::default();
        sync(&mut timers, &mut engine);
        assert!(timers.interval().is_none());

        engine.select(0);
        sync(&mut timers, &mut engine);

        assert_eq!(timers.interval(), Some(&(RoundId::first(), 1000)));
        assert!(timers.timeout().is_none());
    }

    #[test]
    fn mismatch_arms_a_timeout_for_the_current_round() {
        let mut engine = engine();
        let mut timers = Timers::default();

        engine.select(0);
        engine.select(1);
        sync(&mut timers, &mut engine);

        assert_eq!(timers.timeout(), Some(&(RoundId::first(), 1000)));
        assert!(timers.interval().is_some());

        assert!(engine.resolve_mismatch(RoundId::first()));
        timers.settle_timeout();
        sync(&mut timers, &mut engine);
        assert!(timers.timeout().is_none());
        assert!(timers.interval().is_some());
    }

    #[test]
    fn reset_mid_mismatch_drops_both_handles() {
        let mut engine = engine();
        let mut timers = Timers::default();

        engine.select(0);
        engine.select(1);
        sync(&mut timers, &mut engine);
        assert!(timers.interval().is_some());
        assert!(timers.timeout().is_some());

        engine.reset();
        sync(&mut timers, &mut engine);

        assert!(timers.interval().is_none());
        assert!(timers.timeout().is_none());

        // the next round arms fresh handles tagged with its own id
        engine.select(0);
        sync(&mut timers, &mut engine);
        assert_eq!(timers.interval(), Some(&(RoundId::first().next(), 1000)));
    }

    #[test]
    fn clearing_the_board_drops_the_interval() {
        let mut engine = engine();
        let mut timers = Timers::default();

        engine.select(0);
        engine.select(2);
        engine.select(1);
        engine.select(3);
        let events = sync(&mut timers, &mut engine);

        assert!(events.iter().any(|e| matches!(e, EngineEvent::Cleared { .. })));
        assert!(timers.interval().is_none());
        assert!(timers.timeout().is_none());
    }

    #[test]
    fn cleared_alone_drops_the_interval() {
        let mut timers = Timers::default();
        let round = RoundId::first();
        timers.apply(
            &EngineEvent::TimerStarted {
                round,
                interval_ms: 1000,
            },
            |round, ms| (round, ms),
            |round, ms| (round, ms),
        );
        assert!(timers.interval().is_some());

        timers.apply(
            &EngineEvent::Cleared {
                round,
                elapsed_secs: 3,
                mistakes: 0,
            },
            |_, _| unreachable!(),
            |_, _| unreachable!(),
        );
        assert!(timers.interval().is_none());
    }

    #[test]
    fn teardown_cancels_everything() {
        let mut engine = engine();
        let mut timers = Timers::default();

        engine.select(0);
        engine.select(1);
        sync(&mut timers, &mut engine);

        timers.cancel_all();
        assert!(timers.interval().is_none());
        assert!(timers.timeout().is_none());
    }
}
