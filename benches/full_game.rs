//! Benchmarks for dealing and playing a complete game.

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_pairs::cards::{CardId, Deck};
use rust_pairs::core::GameRng;
use rust_pairs::game::Game;

fn bench_deal(c: &mut Criterion) {
    let mut rng = GameRng::new(42);
    c.bench_function("deck_build", |b| b.iter(|| black_box(Deck::build(&mut rng))));
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_perfect_play", |b| {
        let mut game = Game::immediate(42);
        b.iter(|| {
            game.start_game();

            let mut by_value: BTreeMap<u8, Vec<CardId>> = BTreeMap::new();
            for card in game.state().deck().iter() {
                by_value.entry(card.match_value).or_default().push(card.id);
            }
            for ids in by_value.values() {
                for pair in ids.chunks(2) {
                    game.select_card(pair[0]);
                    game.select_card(pair[1]);
                    game.tick();
                }
            }

            game.drain_events();
            black_box(game.outcome())
        })
    });
}

criterion_group!(benches, bench_deal, bench_full_game);
criterion_main!(benches);
