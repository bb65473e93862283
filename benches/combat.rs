use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stack_duel::cards::{CardKind, Deck};
use stack_duel::core::{DeckRng, Game, GameStatus, Player};
use stack_duel::rules::{resolve, resolve_codes};

fn resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");

    group.bench_function("all_pairs", |b| {
        b.iter(|| {
            for attacking in CardKind::ALL {
                for defending in CardKind::ALL {
                    black_box(resolve(black_box(attacking), black_box(defending)));
                }
            }
        })
    });

    group.bench_function("all_codes", |b| {
        b.iter(|| {
            for attacking in 0u8..=10 {
                for defending in 0u8..=10 {
                    let _ = black_box(resolve_codes(black_box(attacking), black_box(defending)));
                }
            }
        })
    });

    group.finish();
}

fn decks(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck");
    let dealt = Deck::deal(&mut DeckRng::new(42));

    group.bench_function("validate", |b| b.iter(|| black_box(dealt.validate())));

    group.bench_function("deal", |b| {
        let mut rng = DeckRng::new(7);
        b.iter(|| black_box(Deck::deal(&mut rng)))
    });

    group.finish();
}

fn moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute_move");
    for history in [0usize, 100, 1_000] {
        let alice = Player {
            deck: Deck::deal(&mut DeckRng::new(1)),
            ..Player::create("Alice").unwrap()
        };
        let bob = Player {
            deck: Deck::deal(&mut DeckRng::new(2)),
            ..Player::create("Bob").unwrap()
        };
        let (a, b_id) = (alice.id, bob.id);

        let mut base = Game::create(alice).unwrap();
        base.players.push(bob);
        base.status = GameStatus::Started;
        base.current_player = Some(a);
        for i in 0..history {
            base.execute_move(a, i % 5, b_id, (i + 1) % 5).unwrap();
        }

        group.bench_function(BenchmarkId::new("on_history", history), |b| {
            b.iter(|| {
                let mut game = base.clone();
                black_box(game.execute_move(a, 0, b_id, 0).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, resolver, decks, moves);
criterion_main!(benches);
