//! Conversational play through `GameSession` and `SessionRegistry`.

use std::sync::Arc;
use std::thread;

use liars_dice::core::{MatchConfig, PlayerId, ScriptedRng};
use liars_dice::rules::{MatchBuilder, Verdict};
use liars_dice::session::{Command, GameSession, SessionError, SessionEvent, SessionRegistry};
use liars_dice::IllegalAction;

fn play_line(session: &mut GameSession, line: &str) -> Result<Vec<SessionEvent>, IllegalAction> {
    session.play(line.parse::<Command>().unwrap())
}

#[test]
fn test_typed_commands_drive_a_match() {
    let mut session = GameSession::new(MatchConfig::against_bots("Alice", 2, 5).with_seed(17)).unwrap();

    assert!(session.is_human_turn());
    let events = play_line(&mut session, "1 1").unwrap();
    assert!(matches!(
        events[0],
        SessionEvent::BidMade { player, .. } if player == PlayerId::new(0)
    ));
    assert!(session.is_over() || session.is_human_turn());
}

#[test]
fn test_rejected_command_changes_nothing() {
    let mut session = GameSession::new(MatchConfig::default().with_seed(3)).unwrap();
    let hand = session.hand();

    assert_eq!(
        play_line(&mut session, "0 3"),
        Err(IllegalAction::InvalidQuantity)
    );
    assert_eq!(
        play_line(&mut session, "2 7"),
        Err(IllegalAction::InvalidFace(7))
    );
    assert_eq!(
        play_line(&mut session, "11 2"),
        Err(IllegalAction::ExceedsDiceInPlay { quantity: 11, in_play: 10 })
    );
    assert_eq!(session.hand(), hand);
    assert!(session.state().history().is_empty());
    assert_eq!(session.state().standing_bid(), None);
}

/// The human is caught bluffing until eliminated; the bot wins.
#[test]
fn test_human_loses_to_bot() {
    let (logic, state) = MatchBuilder::new()
        .human("Alice", 2)
        .bot("Bot", 5)
        .build_with_rng(ScriptedRng::new(0).with_faces([1, 1, 2, 2, 2, 2, 2]))
        .unwrap();
    let mut session = GameSession::from_parts(logic, state, PlayerId::new(0));

    // No six on the table; nothing can raise it, so the bot must call it.
    let events = play_line(&mut session, "7 6").unwrap();
    assert_eq!(events.len(), 3);
    let SessionEvent::Challenged(resolution) = &events[1] else {
        panic!("expected a challenge, got {:?}", events[1]);
    };
    assert_eq!(resolution.verdict, Verdict::BidFalse);
    assert_eq!(resolution.eliminated, vec![PlayerId::new(0)]);
    assert_eq!(
        events[2],
        SessionEvent::MatchOver {
            winner: PlayerId::new(1),
            name: "Bot".to_string()
        }
    );
    assert!(session.hand().is_empty());
    assert_eq!(play_line(&mut session, "lie"), Err(IllegalAction::MatchOver));
}

#[test]
fn test_registry_removes_finished_sessions() {
    let registry: SessionRegistry<i64> = SessionRegistry::new().with_seed(1);
    registry.start(42, "Alice").unwrap();

    let total = registry.view(&42, |s| s.state().total_dice_count()).unwrap();
    let events = registry
        .play(&42, Command::Bid { quantity: total, face: 6 })
        .unwrap();

    assert!(events
        .iter()
        .any(|e| matches!(e, SessionEvent::Challenged(_))));
    let over = events.iter().any(|e| matches!(e, SessionEvent::MatchOver { .. }));
    assert_eq!(registry.contains(&42), !over);
}

#[test]
fn test_registry_errors() {
    let registry: SessionRegistry<String> = SessionRegistry::new();
    let key = "chat-1".to_string();

    assert_eq!(
        registry.play(&key, Command::Challenge),
        Err(SessionError::NoSession)
    );
    registry.start(key.clone(), "Alice").unwrap();
    assert_eq!(
        registry.play(&key, Command::Challenge),
        Err(SessionError::Illegal(IllegalAction::NoStandingBid))
    );
    assert_eq!(
        SessionError::NoSession.to_string(),
        "no game is running, start one first"
    );
}

#[test]
fn test_registry_across_threads() {
    let registry = Arc::new(SessionRegistry::<u32>::new().with_table(2, 5).with_seed(8));

    let handles: Vec<_> = (0..8)
        .map(|key| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry.start(key, format!("Player {}", key)).unwrap();
                registry.play(&key, Command::Bid { quantity: 1, face: 1 }).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for key in 0..8 {
        if let Some(history) = registry.view(&key, |s| s.state().history().len()) {
            assert!(history >= 2);
        }
    }
}
