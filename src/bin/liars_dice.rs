//! Terminal Liar's Dice: one human against bots.
//!
//! Reads commands from stdin (`3 5`, `lie`, `reroll 0 2`, `help`, `rules`,
//! `new`, `quit`) and prints what happened. `RUST_LOG=debug` shows the
//! engine's own log lines.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use liars_dice::core::{Face, MatchConfig, PlayerId, DEFAULT_STARTING_DICE};
use liars_dice::rules::Verdict;
use liars_dice::session::{Command, GameSession, SessionEvent};

#[derive(Parser, Debug)]
#[command(name = "liars-dice", about = "Play Liar's Dice against bots")]
struct Args {
    /// Your display name
    #[arg(long, default_value = "Player")]
    name: String,

    /// Number of bot opponents
    #[arg(long, default_value_t = 1)]
    bots: usize,

    /// Dice per player at the start
    #[arg(long, default_value_t = DEFAULT_STARTING_DICE)]
    dice: usize,

    /// Seed for reproducible matches
    #[arg(long)]
    seed: Option<u64>,
}

const HELP: &str = "\
Commands:
  <quantity> <face>   bid, e.g. `2 5` for two dice showing 5
  lie                 call the last bid a lie
  reroll <i> ...      reroll dice by position, 0 is your first die (once per match)
  rules               show the rules
  new                 start a new match
  quit                leave";

const RULES: &str = "\
Rules:
  Every player rolls their dice in secret. On your turn, bid how many dice
  on the whole table show a face, or call the last bid a lie.
  A bid must raise the quantity, or keep it and raise the face.
  When a lie is called all dice are revealed:
    the bid holds  -> the challenger loses 1 die
    the bid fails  -> the bidder loses 2 dice
  A player with fewer than 2 dice is out. The last one standing wins.
  Bidding every die on the table as a 6, and being right, wins outright.
  Once per match you may reroll any of your dice, then you must bid.";

impl Args {
    fn config(&self) -> MatchConfig {
        let config = MatchConfig::against_bots(self.name.clone(), self.bots, self.dice);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn faces(dice: &[Face]) -> String {
    dice.iter().map(Face::to_string).collect::<Vec<_>>().join(" ")
}

fn show_table(session: &GameSession) {
    for view in session.table() {
        match &view.dice {
            Some(dice) => println!("  {:<12} [{}]", view.name, faces(dice)),
            None => println!("  {:<12} {} dice", view.name, view.dice_count),
        }
    }
    if let Some(bid) = session.state().standing_bid() {
        println!("  standing bid: {}", bid);
    }
}

fn name_of(session: &GameSession, player: PlayerId) -> String {
    session
        .state()
        .player(player)
        .map(|p| p.name().to_string())
        .unwrap_or_else(|| player.to_string())
}

fn show_event(session: &GameSession, event: &SessionEvent) {
    match event {
        SessionEvent::BidMade { player, bid } => {
            println!("{} bids {}", name_of(session, *player), bid);
        }
        SessionEvent::Rerolled { player, indices } => {
            if *player == session.human() {
                println!("you rerolled, your dice: [{}]", faces(&session.hand()));
            } else {
                println!("{} rerolls {} dice", name_of(session, *player), indices.len());
            }
        }
        SessionEvent::Challenged(resolution) => {
            let name = |id| resolution.name_of(id).unwrap_or("?").to_string();
            println!(
                "{} calls {} a lie! {} showing:",
                name(resolution.challenger),
                resolution.bid,
                resolution.actual
            );
            for hand in &resolution.revealed {
                println!("  {:<12} [{}]", hand.name, faces(&hand.dice));
            }
            match (resolution.verdict, resolution.loser) {
                (Verdict::InstantWin, _) => {
                    println!("{} called every die exactly", name(resolution.bidder));
                }
                (_, Some(loser)) => {
                    println!("{} loses {} dice", name(loser), resolution.dice_lost);
                }
                (_, None) => {}
            }
            for out in &resolution.eliminated {
                println!("{} is out", name(*out));
            }
        }
        SessionEvent::RoundStarted { round } => {
            println!("-- round {} --", round);
            show_table(session);
        }
        SessionEvent::MatchOver { name, .. } => {
            println!("{} wins the match!", name);
        }
    }
}

fn start(args: &Args) -> Result<GameSession> {
    let mut session = GameSession::new(args.config()).context("could not set up the match")?;
    println!("new match, {} dice each", args.dice);
    for event in session.advance_bots()? {
        show_event(&session, &event);
    }
    show_table(&session);
    Ok(session)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Liar's Dice. Type `help` for commands.");
    let mut session = start(&args)?;

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim().to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "rules" => println!("{}", RULES),
            "new" => session = start(&args)?,
            input => match input.parse::<Command>() {
                Err(err) => println!("{}", err),
                Ok(command) => match session.play(command) {
                    Err(err) => println!("{}", err),
                    Ok(events) => {
                        for event in &events {
                            show_event(&session, event);
                        }
                        if session.is_over() {
                            println!("type `new` to play again or `quit` to leave");
                        }
                    }
                },
            },
        }
    }
    Ok(())
}
