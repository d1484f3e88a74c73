use std::collections::HashSet;

use backgammon_engine::ai::heuristic::{
    choose_move, score_move, score_strategic, Difficulty, HeuristicBot,
};
use backgammon_engine::ai::simple::RandomBot;
use backgammon_engine::ai::Bot;
use backgammon_engine::board::Player;
use backgammon_engine::game::GameState;
use backgammon_engine::mv::Move;
use backgammon_engine::util::consistent_rng;

use crate::util::{position, test_sampler_uniform};

#[test]
fn novice_is_uniform_over_the_legal_set() {
    let mut game = GameState::new();
    game.roll_exact(3, 1).unwrap();
    let expected = game.legal_moves();

    let mut rng = consistent_rng();
    test_sampler_uniform(&expected, || {
        choose_move(&game, Difficulty::Novice, &mut rng)
    });
}

#[test]
fn nothing_to_play_yields_none() {
    let game = GameState::new();
    let mut rng = consistent_rng();

    for &difficulty in &[Difficulty::Novice, Difficulty::Intermediate, Difficulty::Advanced] {
        assert_eq!(None, choose_move(&game, difficulty, &mut rng));
    }
    test_sampler_uniform(&[], || choose_move(&game, Difficulty::Novice, &mut rng));

    assert_eq!(None, RandomBot::new(consistent_rng()).select_move(&game));
    assert_eq!(
        None,
        HeuristicBot::new(Difficulty::Advanced, consistent_rng()).select_move(&game)
    );
}

#[test]
fn random_bot_returns_legal_moves() {
    let mut game = GameState::new();
    game.roll_exact(6, 5).unwrap();
    let legal: HashSet<Move> = game.legal_moves().into_iter().collect();

    let mut bot = RandomBot::new(consistent_rng());
    for _ in 0..100 {
        let mv = bot.select_move(&game).unwrap();
        assert!(legal.contains(&mv));
    }
}

#[test]
fn greedy_score_values() {
    let board = position(&[(10, 2), (3, 1)], &[(5, 1)], [0, 0]);

    // plain advance scores the die
    assert_eq!(4, score_move(&board, Player::White, Move::point(10, 6, 4)));
    // hitting a blot adds 50
    assert_eq!(55, score_move(&board, Player::White, Move::point(10, 5, 5)));
    // bearing off scores 100 plus the exit distance
    assert_eq!(104, score_move(&board, Player::White, Move::off(3, 4)));
}

#[test]
fn strategic_score_terms() {
    let board = position(&[(12, 1), (7, 2), (6, 2)], &[], [0, 0]);

    // stacking onto the 8-point forms a block (+30) and extends a
    // two-point prime (+20) on top of the five pips advanced
    assert_eq!(55, score_strategic(&board, Player::White, Move::point(12, 7, 5)));
    // landing alone is a blot: 4 pips, then -20
    assert_eq!(-16, score_strategic(&board, Player::White, Move::point(12, 8, 4)));
}

#[test]
fn strategic_score_penalizes_breaking_a_point() {
    let board = position(&[(12, 2), (7, 2)], &[], [0, 0]);

    // 5 pips + block 30 + one-point run 10 - blot left behind on 13 = 25
    assert_eq!(25, score_strategic(&board, Player::White, Move::point(12, 7, 5)));
}

#[test]
fn strategic_prime_runs_toward_black_home() {
    let board = position(&[], &[(10, 1), (13, 2), (14, 2)], [0, 0]);

    // 3 pips + block 30 + run of 13,14 (20) = 53
    assert_eq!(53, score_strategic(&board, Player::Black, Move::point(10, 13, 3)));
}

#[test]
fn intermediate_picks_uniformly_among_top_three() {
    // scores: 10→4 hits with a six (56), 10→9 hits with a one (51),
    // 20→14 plain six (6), 20→19 plain one (1)
    let board = position(&[(10, 2), (20, 2)], &[(4, 1), (9, 1)], [0, 0]);
    let mut game = GameState::from_board(board, Player::White);
    game.roll_exact(6, 1).unwrap();
    assert_eq!(4, game.legal_moves().len());

    let top3 = [
        Move::point(10, 4, 6),
        Move::point(10, 9, 1),
        Move::point(20, 14, 6),
    ];
    let mut rng = consistent_rng();
    test_sampler_uniform(&top3, || {
        choose_move(&game, Difficulty::Intermediate, &mut rng)
    });
}

#[test]
fn advanced_picks_uniformly_among_top_two() {
    // strategic scores: 36, 31, -14, -19 (each move leaves a blot)
    let board = position(&[(10, 2), (20, 2)], &[(4, 1), (9, 1)], [0, 0]);
    let mut game = GameState::from_board(board, Player::White);
    game.roll_exact(6, 1).unwrap();

    let top2 = [Move::point(10, 4, 6), Move::point(10, 9, 1)];
    let mut rng = consistent_rng();
    test_sampler_uniform(&top2, || {
        choose_move(&game, Difficulty::Advanced, &mut rng)
    });
}

#[test]
fn heuristic_bot_plays_a_full_game() {
    let mut rng = consistent_rng();
    let mut white = HeuristicBot::new(Difficulty::Advanced, consistent_rng());
    let mut black = HeuristicBot::new(Difficulty::Intermediate, consistent_rng());

    let mut game = GameState::new();
    while !game.is_done() {
        game.roll(&mut rng).unwrap();
        loop {
            let bot: &mut dyn Bot = match game.side_to_move() {
                Player::White => &mut white,
                Player::Black => &mut black,
            };
            match bot.select_move(&game) {
                Some(mv) => {
                    game.apply_move(mv).unwrap();
                }
                None => break,
            }
        }
    }
    assert!(game.winner().is_some());
}

#[test]
fn bot_debug_names() {
    assert_eq!("RandomBot", format!("{:?}", RandomBot::new(consistent_rng())));
    assert!(format!(
        "{:?}",
        HeuristicBot::new(Difficulty::Novice, consistent_rng())
    )
    .contains("Novice"));
}
