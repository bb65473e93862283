//! Game lifecycle and move execution integration tests.

use stack_duel::cards::{CardKind, Deck};
use stack_duel::core::{DeckRng, DuelError, Game, GameStatus, Player, PlayerId, PlayerStatus};
use stack_duel::rules::{resolve, Outcome};

fn with_deck(name: &str, deck: Deck) -> Player {
    Player {
        deck,
        ..Player::create(name).unwrap()
    }
}

/// Two seated players, Alice to move.
fn started(alice: Player, bob: Player) -> Game {
    let alice_id = alice.id;
    let mut game = Game::create(alice).unwrap();
    game.players.push(Player {
        status: PlayerStatus::Accepted,
        ..bob
    });
    game.status = GameStatus::Started;
    game.current_player = Some(alice_id);
    game
}

#[test]
fn test_alice_and_bob() {
    let alice = with_deck("Alice", Deck::from_stacks([vec![CardKind::Spear]]));
    let bob = with_deck("Bob", Deck::from_stacks([vec![CardKind::Mace]]));
    let (a, b) = (alice.id, bob.id);

    let mut game = Game::create(alice).unwrap();
    assert_eq!(game.status, GameStatus::Open);
    assert_eq!(game.owner, a);
    assert_eq!(game.players.len(), 1);
    assert_eq!(game.players[0].status, PlayerStatus::Accepted);

    assert!(matches!(game.execute_move(a, 0, b, 0), Err(DuelError::GameNotStarted)));

    game.status = GameStatus::Started;
    game.current_player = Some(a);
    game.players.push(bob);

    let record = game.execute_move(a, 0, b, 0).unwrap();
    assert_eq!(record.winner, Some(a));
    assert_eq!(record.attacker_card.rank(), Some(5));
    assert_eq!(record.defender_card.rank(), Some(3));
    assert_eq!(record.outcome(), Outcome::AttackerWins);
    assert_eq!(game.moves.len(), 1);
}

#[test]
fn test_rejected_moves_do_not_mutate() {
    let alice = with_deck("Alice", Deck::from_stacks([vec![CardKind::Spear], Vec::new()]));
    let bob = with_deck("Bob", Deck::from_stacks([vec![CardKind::Mace]]));
    let (a, b) = (alice.id, bob.id);
    let game = started(alice, bob);

    let attempts: [(PlayerId, usize, PlayerId, usize); 5] = [
        (b, 0, a, 0),                  // not Bob's turn
        (a, 5, b, 0),                  // no such stack
        (a, 1, b, 0),                  // empty stack
        (a, 0, b, 3),                  // no such defender stack
        (a, 0, PlayerId::generate(), 0), // defender not seated
    ];

    for (attacker, a_stack, defender, d_stack) in attempts {
        let mut copy = game.clone();
        assert!(copy.execute_move(attacker, a_stack, defender, d_stack).is_err());
        assert_eq!(copy, game);
    }
}

#[test]
fn test_self_attack_is_resolved() {
    let alice = with_deck(
        "Alice",
        Deck::from_stacks([vec![CardKind::Archer], vec![CardKind::Crown]]),
    );
    let bob = with_deck("Bob", Deck::from_stacks([vec![CardKind::Dagger]]));
    let a = alice.id;
    let mut game = started(alice, bob);

    let record = game.execute_move(a, 0, a, 1).unwrap();
    assert_eq!(record.attacker, record.defender);
    assert_eq!(record.winner, Some(a));
}

#[test]
fn test_move_does_not_consume_cards_or_pass_turn() {
    let alice = with_deck("Alice", Deck::deal(&mut DeckRng::new(11)));
    let bob = with_deck("Bob", Deck::deal(&mut DeckRng::new(12)));
    let (a, b) = (alice.id, bob.id);
    let mut game = started(alice, bob);
    let before = game.players.clone();

    for stack in 0..5 {
        let record = game.execute_move(a, stack, b, stack).unwrap();
        assert_eq!(record.outcome(), resolve(record.attacker_card, record.defender_card));
    }

    assert_eq!(game.players, before);
    assert_eq!(game.current_player, Some(a));
    assert_eq!(game.moves.len(), 5);
    assert!(game.players.iter().all(|p| p.validate_deck().is_ok()));
}

#[test]
fn test_history_is_ordered() {
    let alice = with_deck(
        "Alice",
        Deck::from_stacks([vec![CardKind::Dagger], vec![CardKind::LongSword]]),
    );
    let bob = with_deck("Bob", Deck::from_stacks([vec![CardKind::BattleAxe]]));
    let (a, b) = (alice.id, bob.id);
    let mut game = started(alice, bob);

    let first = game.execute_move(a, 0, b, 0).unwrap();
    let snapshot = game.clone();
    let second = game.execute_move(a, 1, b, 0).unwrap();

    assert_eq!(first.winner, Some(b));
    assert_eq!(second.winner, Some(a));
    assert_eq!(game.moves.iter().cloned().collect::<Vec<_>>(), vec![first, second]);
    assert_eq!(snapshot.moves.len(), 1);
}

#[test]
fn test_game_record_round_trip() {
    let alice = with_deck("Alice", Deck::deal(&mut DeckRng::new(3)));
    let bob = with_deck("Bob", Deck::deal(&mut DeckRng::new(4)));
    let (a, b) = (alice.id, bob.id);
    let mut game = started(alice, bob);
    game.execute_move(a, 2, b, 4).unwrap();

    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["status"], "started");
    assert_eq!(value["players"][1]["status"], "accepted");
    assert!(value["players"][0]["deck"][0][0].is_u64());

    let restored: Game = serde_json::from_value(value).unwrap();
    assert_eq!(restored, game);
    assert!(restored.validate().is_ok());
}
