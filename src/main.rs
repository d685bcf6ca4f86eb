use anyhow::Result;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use std::cell::RefCell;
use std::io::{stdin, stdout, BufRead, BufReader, Stdin, Write};
use std::rc::Rc;
use std::time::Duration;

use connectn::config::{GameConfig, PlayerKind};
use connectn::game::Game;
use connectn::player::{Agent, HumanPlayer, StrongPlayer, WeakPlayer};
use connectn::*;

mod display;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PlayerChoice {
    Human,
    Weak,
    Strong,
}

impl From<PlayerChoice> for PlayerKind {
    fn from(choice: PlayerChoice) -> Self {
        match choice {
            PlayerChoice::Human => PlayerKind::Human,
            PlayerChoice::Weak => PlayerKind::Weak,
            PlayerChoice::Strong => PlayerKind::Strong,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "connectn", version, about = "Play Connect N in the terminal")]
struct Cli {
    /// Number of columns on the board
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,
    /// Number of levels in each column
    #[arg(long, default_value_t = DEFAULT_LEVELS)]
    levels: usize,
    /// Checkers in a row needed to win
    #[arg(long = "connect", short = 'n', default_value_t = DEFAULT_CONNECT)]
    connect: usize,
    /// Milliseconds a strong player may think per move
    #[arg(long = "think-ms", default_value_t = 8750)]
    think_ms: u64,
    /// Cap on the strong player's search depth in plies
    #[arg(long = "max-depth")]
    max_depth: Option<usize>,
    /// Who plays red (moves first)
    #[arg(long, value_enum, default_value = "human")]
    red: PlayerChoice,
    /// Who plays yellow
    #[arg(long, value_enum, default_value = "strong")]
    yellow: PlayerChoice,
    /// Print the board as plain text instead of in colour
    #[arg(long)]
    plain: bool,
    /// Don't wait for Enter between moves when two computer players meet
    #[arg(long)]
    auto: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            columns: self.columns,
            levels: self.levels,
            connect: self.connect,
            think_time: Duration::from_millis(self.think_ms),
            max_depth: self.max_depth,
            players: [self.red.into(), self.yellow.into()],
        }
    }
}

fn make_agent(
    kind: PlayerKind,
    name: &str,
    config: &GameConfig,
    input: &Rc<RefCell<BufReader<Stdin>>>,
) -> Box<dyn Agent> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::with_shared_input(name, input.clone(), stdout())),
        PlayerKind::Weak => Box::new(WeakPlayer::new(name)),
        PlayerKind::Strong => Box::new(StrongPlayer::with_searcher(name, config.searcher())),
    }
}

fn show(board: &Board, plain: bool) -> Result<()> {
    if plain {
        println!("{}", board);
        Ok(())
    } else {
        display::draw(board)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    println!("Welcome to Connect {}\n", config.connect);

    let board = Board::new(config.columns, config.levels)?;
    // both humans read through one buffer so neither steals the other's lines
    let input = Rc::new(RefCell::new(BufReader::new(stdin())));
    let mut game = Game::new(
        board,
        config.connect,
        make_agent(config.players[0], "Player 1", &config, &input),
        make_agent(config.players[1], "Player 2", &config, &input),
    );

    // game loop
    loop {
        show(game.board(), cli.plain)?;

        match game.state() {
            GameState::Playing => {
                let agent = game.agent(game.to_move());
                if agent.is_interactive() {
                    game.take_turn()?;
                    continue;
                }

                // let the user follow along when no one is playing
                if game.is_unattended() && !cli.auto {
                    print!("Press Enter to continue");
                    stdout().flush()?;
                    let mut buffer = String::new();
                    input.borrow_mut().read_line(&mut buffer)?;
                }

                let spinner = ProgressBar::new_spinner();
                spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
                spinner.set_message(&format!("{} is thinking...", agent.name()));
                spinner.enable_steady_tick(100);

                let result = game.take_turn();
                spinner.finish_and_clear();
                result?;

                if let Some(&column) = game.board().moves().last() {
                    println!("{} played column {}", game.agent(game.to_move().opponent()).name(), column);
                }
            }

            // end states
            GameState::Win(Player::One) => {
                println!("{} (red) wins!", game.agent(Player::One).name());
                break;
            }
            GameState::Win(Player::Two) => {
                println!("{} (yellow) wins!", game.agent(Player::Two).name());
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
