use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_engine::agent::{GamePlayer, HumanPlayer, SharedPlayer};
use tictactoe_engine::cli::Cli;
use tictactoe_engine::config::{GameConfig, GameMode, PlayerConfig};
use tictactoe_engine::game_repr::Player;
use tictactoe_engine::orchestrator::{self, Orchestrator};
use tictactoe_engine::renderer::TextRenderer;

type Terminal = HumanPlayer<io::StdinLock<'static>, io::Stdout>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config()?;
    log::info!("starting {:?} on a {}x{} board", config.mode, config.board_size, config.board_size);

    if config.mode == GameMode::Simulate {
        let summary = orchestrator::simulate(&config)?;
        println!("{}", summary);
        return Ok(());
    }

    let (player_a, player_b) = build_players(&config);
    let mut game = Orchestrator::new(
        config.board_size,
        player_a,
        player_b,
        Box::new(TextRenderer::new(io::stdout())),
    );

    for line in config.welcome_lines() {
        game.announce(&line)?;
    }
    game.start()?;
    game.run().context("game aborted")?;
    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}

/// Seats for an interactive game. Human seats share one stdin reader.
fn build_players(config: &GameConfig) -> (Box<dyn GamePlayer>, Box<dyn GamePlayer>) {
    let humans = [config.player_a, config.player_b].iter().filter(|seat| seat.is_human()).count();
    let terminal: Rc<RefCell<Terminal>> = Rc::new(RefCell::new(HumanPlayer::new(
        io::stdin().lock(),
        io::stdout(),
        "You".to_string(),
    )));

    let seat = |side: Player| -> Box<dyn GamePlayer> {
        match config.seat(side) {
            PlayerConfig::Human => {
                let name = if humans > 1 {
                    format!("Player {}", side.symbol())
                } else {
                    "You".to_string()
                };
                Box::new(SharedPlayer::new(Rc::clone(&terminal), name))
            }
            PlayerConfig::AI(ai) => ai.create_player(side),
        }
    };

    (seat(Player::A), seat(Player::B))
}
