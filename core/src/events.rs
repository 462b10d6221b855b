use serde::{Deserialize, Serialize};

use crate::*;

/// Notification queued by the engine for the presentation layer, drained with [`PairEngine::take_events`].
///
/// Timer events are requests to the host: `TimerStarted` asks for a periodic [`PairEngine::tick`] and
/// `MismatchScheduled` asks for a single [`PairEngine::resolve_mismatch`] after the delay. Both carry the round that
/// made the request, the engine ignores callbacks tagged with any other round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A fresh deck was dealt.
    RoundStarted { round: RoundId },
    /// Round state changed and should be re-rendered.
    Changed { round: RoundId },
    TimerStarted { round: RoundId, interval_ms: u32 },
    TimerStopped { round: RoundId },
    MismatchScheduled { round: RoundId, delay_ms: u32 },
    /// Emitted once per round, when the last pair is matched.
    Cleared {
        round: RoundId,
        elapsed_secs: Seconds,
        mistakes: u32,
    },
}

impl EngineEvent {
    pub const fn round(self) -> RoundId {
        use EngineEvent::*;
        match self {
            RoundStarted { round } => round,
            Changed { round } => round,
            TimerStarted { round, .. } => round,
            TimerStopped { round } => round,
            MismatchScheduled { round, .. } => round,
            Cleared { round, .. } => round,
        }
    }
}
