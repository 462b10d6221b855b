use crate::confetti::{self, ConfettiPiece};
use crate::layout::{self, CardMotion, CardTransform};
use crate::timers::HostTimers;
use crate::utils::*;
use clap::Args;
use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::{Interval, Timeout};
use rand::prelude::*;
use shinkei_core as game;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Select(game::SlotIndex),
    Tick(game::RoundId),
    ResolveMismatch(game::RoundId),
    Frame,
    Reset,
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    index: game::SlotIndex,
    face: game::Face,
    state: game::SlotState,
    transform: CardTransform,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::SlotIndex>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    use game::SlotState::*;

    let CardProps {
        index,
        face,
        state,
        transform,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "card",
        match state {
            Hidden => classes!(),
            Revealed => classes!("revealed"),
            Matched => classes!("matched"),
        }
    );
    if locked {
        class.push("locked");
    }

    let onpointerdown = Callback::from(move |_: PointerEvent| {
        log::trace!("card {} pointer down", index);
        callback.emit(index);
    });

    html! {
        <div {class} style={transform.css()} {onpointerdown}>
            <div class={classes!("front", format!("face-{}", face))}>{face.to_string()}</div>
            <div class="back"/>
        </div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of distinct card faces, each dealt twice
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_PAIRS)]
    pub pairs: game::SlotCount,

    /// How long a mismatched pair stays face up
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_MISMATCH_DELAY_MS)]
    pub mismatch_delay_ms: u32,

    /// Period of the round timer
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_TICK_INTERVAL_MS)]
    pub tick_interval_ms: u32,
}

impl GameProps {
    fn game_config(&self) -> game::GameConfig {
        game::GameConfig::new(self.pairs, self.mismatch_delay_ms, self.tick_interval_ms)
    }
}

/// Hosts a [`game::PairEngine`]: feeds it input, runs the timers it asks for and animates the cards.
pub(crate) struct GameView {
    engine: game::PairEngine,
    rng: SmallRng,
    motions: Vec<CardMotion>,
    confetti: Option<Vec<ConfettiPiece>>,
    timers: HostTimers<Interval, Timeout>,
    animation_frame: Option<AnimationFrame>,
}

impl GameView {
    /// Drains engine events, starting and cancelling host timers as requested. Returns whether a redraw is needed.
    fn sync_engine(&mut self, ctx: &Context<Self>) -> bool {
        use game::EngineEvent::*;

        let mut updated = false;
        for event in self.engine.take_events() {
            log::trace!("engine event: {:?}", event);
            // dropping a gloo timer cancels it
            self.timers.apply(
                &event,
                |round, interval_ms| {
                    let link = ctx.link().clone();
                    Interval::new(interval_ms, move || link.send_message(Msg::Tick(round)))
                },
                |round, delay_ms| {
                    let link = ctx.link().clone();
                    Timeout::new(delay_ms, move || {
                        link.send_message(Msg::ResolveMismatch(round))
                    })
                },
            );
            match event {
                RoundStarted { round } => {
                    self.confetti = None;
                    self.motions = layout::entrance(self.engine.len(), &mut self.rng);
                    log::debug!("round {} on the table", round);
                    updated = true;
                }
                Changed { .. } => {
                    updated = true;
                }
                Cleared {
                    round,
                    elapsed_secs,
                    mistakes,
                } => {
                    log::info!(
                        "round {} clear in {}s with {} mistakes",
                        round,
                        elapsed_secs,
                        mistakes
                    );
                    self.confetti = Some(confetti::burst(&mut self.rng, confetti::BURST_SIZE));
                    updated = true;
                }
                TimerStarted { .. } | TimerStopped { .. } | MismatchScheduled { .. } => {}
            }
        }

        if updated {
            self.request_frame(ctx);
        }
        updated
    }

    fn request_frame(&mut self, ctx: &Context<Self>) {
        if self.animation_frame.is_some() {
            return;
        }
        let link = ctx.link().clone();
        self.animation_frame = Some(request_animation_frame(move |_| {
            link.send_message(Msg::Frame)
        }));
    }

    fn target_of(&self, index: game::SlotIndex) -> CardTransform {
        let face_up = self
            .engine
            .slot_at(index)
            .is_some_and(|state| state.is_face_up());
        layout::slot_transform(index, self.engine.len(), face_up)
    }

    /// Eases every card one step, returns whether any card is still moving.
    fn step_motions(&mut self) -> bool {
        let targets: Vec<_> = (0..self.engine.len())
            .map(|index| self.target_of(index))
            .collect();
        let mut moving = false;
        for (motion, target) in self.motions.iter_mut().zip(targets) {
            moving |= motion.step(target);
        }
        moving
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let engine = game::PairEngine::new(props.game_config(), seed);
        let mut view = Self {
            engine,
            rng: SmallRng::seed_from_u64(seed.rotate_left(32)),
            motions: Vec::new(),
            confetti: None,
            timers: HostTimers::default(),
            animation_frame: None,
        };
        view.sync_engine(ctx);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Select(index) => {
                let outcome = self.engine.select(index);
                log::debug!("select {}: {:?}", index, outcome);
            }
            Tick(round) => {
                self.engine.tick(round);
            }
            ResolveMismatch(round) => {
                if self.engine.resolve_mismatch(round) {
                    self.timers.settle_timeout();
                }
            }
            Reset => {
                log::debug!("reset requested");
                self.engine.reset();
            }
            Frame => {
                self.animation_frame = None;
                if self.step_motions() {
                    self.request_frame(ctx);
                }
                return true;
            }
        }

        self.sync_engine(ctx)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = self.engine.snapshot();
        let len = self.engine.len();
        let (width, height) = layout::board_size_px(len);
        let board_style = format!("width: {:.0}px; height: {:.0}px;", width, height);
        let elapsed = format_seconds(snapshot.elapsed_secs);

        let cb_select = ctx.link().callback(Msg::Select);
        let cb_reset = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Reset
        });

        html! {
            <div class="shinkei">
                <nav class="hud">
                    <aside class="time">{format!("⏱ {}", elapsed)}</aside>
                    <aside class="mistakes">{format!("✖ {}", snapshot.mistakes)}</aside>
                    <button class="reset-button" onclick={cb_reset}>{"🔁 もう一度"}</button>
                </nav>
                <div class="board" style={board_style}>
                    {
                        for snapshot.slots.iter().enumerate().map(|(index, slot)| {
                            let index = index as game::SlotIndex;
                            let transform = self
                                .motions
                                .get(usize::from(index))
                                .map_or_else(|| self.target_of(index), |motion| motion.current);
                            html! {
                                <CardView
                                    key={format!("{}-{}", snapshot.round.get(), index)}
                                    {index}
                                    face={slot.face}
                                    state={slot.state}
                                    {transform}
                                    locked={snapshot.locked}
                                    callback={cb_select.clone()}
                                />
                            }
                        })
                    }
                </div>
                if snapshot.is_clear {
                    <div class="clear-message">
                        <h1>{"🎊"}</h1>
                        <p>{"全部そろいました👏"}</p>
                        <p class="time">{format!("⏱：{}", format_total_seconds(snapshot.elapsed_secs))}</p>
                    </div>
                }
                if let Some(pieces) = &self.confetti {
                    <div class="confetti">
                        { for pieces.iter().map(|piece| html! { <i style={piece.style()}/> }) }
                    </div>
                }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        log::debug!("tearing down round {}", self.engine.round());
        self.timers.cancel_all();
        self.animation_frame = None;
    }
}
