use crate::storage::LocalSnapshotStore;
use crate::utils::*;
use clap::Args;
use scramble_core as game;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Everything the page shows, derived from the engine after each action.
#[derive(Clone, Debug, PartialEq)]
struct Scoreboard {
    scrambled: String,
    points: String,
    strikes: String,
    pass_label: String,
    can_pass: bool,
    message: Option<String>,
    game_over: bool,
}

impl Scoreboard {
    fn from_engine(engine: &game::PlayEngine) -> Self {
        Self {
            scrambled: engine.scrambled_word().into(),
            points: format!("Points: {}", engine.points()),
            strikes: format!(
                "Strikes: {}/{}",
                engine.strikes(),
                engine.config().max_strikes()
            ),
            pass_label: format!("Pass ({} left)", engine.passes()),
            can_pass: engine.passes() > 0,
            message: engine.message().map(|message| message.to_string()),
            game_over: engine.is_finished(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Input(String),
    Submit,
    Pass,
    NewGame,
}

#[derive(Args, Properties, Debug, Default, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,

    /// Wrong guesses allowed before the game is lost
    #[arg(long)]
    #[prop_or_default]
    pub max_strikes: Option<u32>,

    /// Words that may be skipped per game
    #[arg(long)]
    #[prop_or_default]
    pub passes: Option<u32>,
}

impl GameProps {
    fn game_config(&self) -> game::GameConfig {
        let mut config = game::GameConfig::default();
        if let Some(max_strikes) = self.max_strikes {
            config = config.with_max_strikes(max_strikes);
        }
        if let Some(passes) = self.passes {
            config = config.with_initial_passes(passes);
        }
        config
    }
}

/// Runs one action against the session. Anything but typing empties the pending guess, accepted or not.
fn apply<S: game::SnapshotStore>(session: &mut game::Session<S>, guess: &mut String, msg: Msg) {
    use Msg::*;

    match msg {
        Input(text) => {
            log::trace!("guess input: {:?}", text);
            *guess = text;
        }
        Submit => {
            let guess = std::mem::take(guess);
            log::debug!("submit guess: {:?}", guess);
            session.submit_guess(&guess);
        }
        Pass => {
            log::debug!("pass");
            guess.clear();
            session.pass();
        }
        NewGame => {
            log::debug!("new game");
            guess.clear();
            session.start_new_game();
        }
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::Session<LocalSnapshotStore>,
    guess: String,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);
        let store = LocalSnapshotStore::open();
        log::debug!("saving progress: {}", store.is_available());

        Self {
            session: game::Session::open(props.game_config(), store, seed),
            guess: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        apply(&mut self.session, &mut self.guess, msg);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let board = Scoreboard::from_engine(self.session.engine());

        let cb_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Input(input.value())
        });
        let cb_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Submit
        });
        let cb_pass = ctx.link().callback(|_: MouseEvent| Pass);
        let cb_new_game = ctx.link().callback(|_: MouseEvent| NewGame);

        html! {
            <div class="scramble">
                <header><h1>{"Scramble"}</h1></header>
                <article>
                    <div class="word">{board.scrambled}</div>
                    if !board.game_over {
                        <form onsubmit={cb_submit}>
                            <input
                                type="text"
                                value={self.guess.clone()}
                                oninput={cb_input}
                                placeholder="Enter your guess"
                            />
                            <nav>
                                <button type="submit">{"Guess"}</button>
                                <button type="button" onclick={cb_pass} disabled={!board.can_pass}>
                                    {board.pass_label}
                                </button>
                            </nav>
                        </form>
                    }
                </article>
                <footer>
                    <aside>{board.points}</aside>
                    <aside>{board.strikes}</aside>
                </footer>
                if let Some(message) = board.message {
                    <p class="message">{message}</p>
                }
                if board.game_over {
                    <button class="new-game" onclick={cb_new_game}>{"Play Again"}</button>
                }
            </div>
        }
    }
}
