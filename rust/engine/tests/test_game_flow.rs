use holdem_engine::config::GameConfig;
use holdem_engine::errors::GameError;
use holdem_engine::events::GameEvent;
use holdem_engine::game::{Game, Phase, MAX_SEATS};

fn config(seed: u64) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    }
}

fn table(names: &[&str], seed: u64) -> Game {
    let mut game = Game::new(config(seed)).unwrap();
    for name in names {
        let seat = game.add_player(name).unwrap();
        game.set_ready(seat, true).unwrap();
    }
    game.initialise().unwrap();
    game
}

#[test]
fn heads_up_blinds_are_25_and_50() {
    let mut game = table(&["alice", "bob"], 1);
    game.start_game().unwrap();

    let dealer = game.player(0).unwrap();
    let other = game.player(1).unwrap();
    assert_eq!((dealer.bet(), dealer.stack()), (25, 975));
    assert_eq!((other.bet(), other.stack()), (50, 950));
    assert_eq!(game.highest_bet(), 50);
    assert_eq!(game.pots().pots().len(), 1);
    assert_eq!(game.pots().main_pot(), 0);
}

#[test]
fn full_hand_deals_five_board_cards_and_conserves_chips() {
    let mut game = table(&["alice", "bob", "carol"], 9);
    game.start_game().unwrap();
    assert!(game.players().iter().all(|p| p.hole_cards().len() == 2));

    game.call(0).unwrap();
    game.call(1).unwrap();
    game.check(2).unwrap();
    game.pre_flop().unwrap();
    assert_eq!(game.board().len(), 3);
    assert_eq!(game.pots().main_pot(), 150);
    assert_eq!(game.highest_bet(), 0);

    game.flop().unwrap();
    assert_eq!(game.board().len(), 4);
    game.turn().unwrap();
    assert_eq!(game.board().len(), 5);
    game.river().unwrap();
    assert_eq!(game.board().len(), 5);
    game.determine_winner().unwrap();

    assert_eq!(game.phase(), Phase::DetermineWinner);
    assert_eq!(game.pots().total(), 0);
    assert_eq!(game.chips_in_play(), 3000);
    let paid: u32 = game.awards().iter().map(|a| a.amount).sum();
    assert_eq!(paid, 150);
    assert_eq!(game.deck_remaining(), 52 - 6 - 5);
}

#[test]
fn river_bets_are_settled_before_showdown() {
    let mut game = table(&["alice", "bob"], 4);
    game.start_game().unwrap();
    game.call(0).unwrap();
    game.check(1).unwrap();
    for _ in 0..4 {
        game.advance().unwrap();
    }
    assert_eq!(game.phase(), Phase::River);
    game.raise(0, 200).unwrap();
    game.call(1).unwrap();
    game.determine_winner().unwrap();
    let paid: u32 = game.awards().iter().map(|a| a.amount).sum();
    assert_eq!(paid, 500);
    assert_eq!(game.chips_in_play(), 2000);
}

#[test]
fn everyone_folding_hands_the_pot_to_the_last_player() {
    let mut game = table(&["alice", "bob", "carol"], 2);
    game.start_game().unwrap();
    game.fold(0).unwrap();
    game.fold(1).unwrap();
    assert!(game.is_decided());
    game.pre_flop().unwrap();

    assert_eq!(game.player(2).unwrap().stack(), 1025);
    assert_eq!(game.pots().total(), 0);
    let won = game.events().records().iter().any(|r| {
        matches!(
            r.event,
            GameEvent::UncontestedWin {
                seat: 2,
                amount: 75
            }
        )
    });
    assert!(won);
}

#[test]
fn pot_stays_in_main_when_every_player_folds() {
    let mut game = table(&["alice", "bob"], 4);
    game.start_game().unwrap();
    game.fold(0).unwrap();
    game.fold(1).unwrap();
    while game.phase() != Phase::DetermineWinner {
        game.advance().unwrap();
    }

    assert!(game.awards().is_empty());
    assert_eq!(game.player(0).unwrap().stack(), 975);
    assert_eq!(game.player(1).unwrap().stack(), 950);
    assert_eq!(game.pots().main_pot(), 75);
    assert_eq!(game.chips_in_play(), 2000);
    let paid_out = game.events().records().iter().any(|r| {
        matches!(
            r.event,
            GameEvent::UncontestedWin { .. } | GameEvent::PotAwarded { .. }
        )
    });
    assert!(!paid_out);
}

#[test]
fn largest_valid_stacks_play_out_without_overflow() {
    let stack = u32::MAX / 2;
    let mut game = Game::new(GameConfig {
        starting_stack: stack,
        max_seats: 2,
        seed: Some(12),
        ..GameConfig::default()
    })
    .unwrap();
    for name in ["alice", "bob"] {
        let seat = game.add_player(name).unwrap();
        game.set_ready(seat, true).unwrap();
    }
    game.initialise().unwrap();
    game.start_game().unwrap();
    game.all_in(0).unwrap();
    assert_eq!(game.round().to_call(game.player(1).unwrap().bet()), stack - 50);
    game.call(1).unwrap();
    while game.phase() != Phase::DetermineWinner {
        game.advance().unwrap();
    }
    assert_eq!(game.chips_in_play(), stack * 2);
    assert_eq!(game.pots().total(), 0);
}

#[test]
fn oversized_table_total_is_rejected_up_front() {
    let result = Game::new(GameConfig {
        starting_stack: 3_000_000_000,
        ..GameConfig::default()
    });
    assert!(matches!(result, Err(GameError::InvalidConfig(_))));
}

#[test]
fn out_of_order_transition_is_rejected_without_changes() {
    let mut game = table(&["alice", "bob"], 3);
    let events_before = game.events().len();
    let err = game.flop().unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidTransition {
            from: Phase::WaitingForPlayers,
            to: Phase::Flop
        }
    );
    assert_eq!(game.phase(), Phase::WaitingForPlayers);
    assert!(game.board().is_empty());
    assert_eq!(game.events().len(), events_before);
    assert_eq!(game.deck_remaining(), 52);
}

#[test]
fn start_requires_two_ready_players() {
    let mut game = table(&["alice"], 5);
    assert_eq!(
        game.start_game(),
        Err(GameError::NotEnoughPlayers {
            seated: 1,
            minimum: 2
        })
    );

    let mut game = Game::new(config(5)).unwrap();
    game.add_player("alice").unwrap();
    let bob = game.add_player("bob").unwrap();
    game.set_ready(bob, true).unwrap();
    game.initialise().unwrap();
    assert_eq!(
        game.start_game(),
        Err(GameError::PlayersNotReady(vec!["alice".to_string()]))
    );
    assert_eq!(game.phase(), Phase::WaitingForPlayers);
}

#[test]
fn seating_rejects_duplicates_and_full_tables() {
    let mut game = Game::new(config(6)).unwrap();
    game.add_player("alice").unwrap();
    assert_eq!(
        game.add_player("alice"),
        Err(GameError::DuplicatePlayer("alice".into()))
    );
    for i in 1..MAX_SEATS {
        game.add_player(&format!("p{i}")).unwrap();
    }
    assert_eq!(
        game.add_player("extra"),
        Err(GameError::TableFull { max: MAX_SEATS })
    );
    assert_eq!(game.seat_of("p3"), Some(3));
    assert!(game.player_by_name("nobody").is_none());
}

#[test]
fn ten_handed_game_runs_to_showdown() {
    let names: Vec<String> = (0..MAX_SEATS).map(|i| format!("p{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut game = table(&refs, 77);
    game.start_game().unwrap();
    for seat in 0..MAX_SEATS {
        game.call(seat).unwrap();
    }
    while game.phase() != Phase::DetermineWinner {
        game.advance().unwrap();
    }
    assert_eq!(game.chips_in_play(), 10_000);
    assert_eq!(game.deck_remaining(), 52 - 20 - 5);
    assert!(game.advance().is_err());
}

#[test]
fn same_seed_deals_same_hand() {
    let mut a = table(&["alice", "bob"], 42);
    let mut b = table(&["alice", "bob"], 42);
    a.start_game().unwrap();
    b.start_game().unwrap();
    for _ in 0..3 {
        a.advance().unwrap();
        b.advance().unwrap();
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(
        a.player(1).unwrap().hole_cards(),
        b.player(1).unwrap().hole_cards()
    );
}

#[test]
fn event_log_drains_as_json_lines() {
    let mut game = table(&["alice", "bob"], 8);
    game.start_game().unwrap();
    let text = game.events().to_json_lines().unwrap();
    assert!(text.lines().all(|l| l.starts_with('{')));
    assert!(text.contains("\"type\":\"blind_posted\""));
    let drained = game.drain_events();
    assert!(!drained.is_empty());
    assert!(game.events().is_empty());
}
