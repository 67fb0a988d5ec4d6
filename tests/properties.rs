//! Scoring and solver properties checked over random combinations

use mastermind_engine::core::{Color, Combination, Difficulty, EngineError, Feedback};
use mastermind_engine::game::{Game, GameStatus, calculate_score, generate_solution, is_won, score};
use mastermind_engine::solver::{AdaptiveStrategy, CandidateSpace, Solver};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn color() -> impl Strategy<Value = Color> {
    (0..Color::COUNT).prop_map(|i| Color::from_index(i).unwrap())
}

fn combination(length: usize) -> impl Strategy<Value = Combination> {
    prop::collection::vec(color(), length).prop_map(|pegs| Combination::new(pegs).unwrap())
}

/// Two combinations of a shared length between 1 and 6
fn pair() -> impl Strategy<Value = (Combination, Combination)> {
    (1usize..=6).prop_flat_map(|len| (combination(len), combination(len)))
}

fn color_count(code: &Combination, color: Color) -> usize {
    code.pegs().iter().filter(|&&peg| peg == color).count()
}

proptest! {
    #[test]
    fn pegs_never_exceed_length((secret, guess) in pair()) {
        let fb = score(&secret, &guess).unwrap();
        prop_assert!(usize::from(fb.black()) + usize::from(fb.white()) <= secret.len());
    }

    #[test]
    fn black_counts_positional_matches((secret, guess) in pair()) {
        let matches = secret
            .pegs()
            .iter()
            .zip(guess.pegs())
            .filter(|(s, g)| s == g)
            .count();
        prop_assert_eq!(usize::from(score(&secret, &guess).unwrap().black()), matches);
    }

    #[test]
    fn total_equals_shared_color_counts((secret, guess) in pair()) {
        let shared: usize = Color::ALL
            .iter()
            .map(|&c| color_count(&secret, c).min(color_count(&guess, c)))
            .sum();
        let fb = score(&secret, &guess).unwrap();
        prop_assert_eq!(usize::from(fb.black()) + usize::from(fb.white()), shared);
    }

    #[test]
    fn feedback_is_symmetric((secret, guess) in pair()) {
        prop_assert_eq!(score(&secret, &guess).unwrap(), score(&guess, &secret).unwrap());
    }

    #[test]
    fn self_score_is_perfect(code in (1usize..=8).prop_flat_map(combination)) {
        prop_assert_eq!(score(&code, &code).unwrap(), Feedback::perfect(code.len()));
        prop_assert!(is_won(&code, &code).unwrap());
    }

    #[test]
    fn won_only_on_exact_match((secret, guess) in pair()) {
        prop_assert_eq!(is_won(&secret, &guess).unwrap(), secret == guess);
    }

    #[test]
    fn text_form_parses_back(code in (1usize..=8).prop_flat_map(combination)) {
        let parsed: Combination = code.to_string().parse().unwrap();
        prop_assert_eq!(parsed, code);
    }

    #[test]
    fn generated_secret_matches_tier(seed in any::<u64>(), tier in 0usize..4) {
        let difficulty = Difficulty::ALL[tier];
        let secret = generate_solution(difficulty, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(secret.len(), difficulty.length());
    }

    #[test]
    fn score_decreases_with_turns(tier in 0usize..4, max in 1u32..=20, turn in 1u32..=20) {
        prop_assume!(turn < max);
        let difficulty = Difficulty::ALL[tier];
        let earlier = calculate_score(difficulty, turn, max).unwrap();
        let later = calculate_score(difficulty, turn + 1, max).unwrap();
        prop_assert_eq!(earlier - later, difficulty.points_per_turn());
    }
}

#[test]
fn duplicate_colors_are_consumed_once() {
    let secret: Combination = "red,red,blue,green".parse().unwrap();
    let guess: Combination = "red,blue,blue,yellow".parse().unwrap();
    assert_eq!(score(&secret, &guess).unwrap(), Feedback::new(2, 0));

    let guess: Combination = "red,blue,green,yellow".parse().unwrap();
    assert_eq!(score(&secret, &guess).unwrap(), Feedback::new(1, 2));
}

#[test]
fn no_shared_colors_gives_empty_feedback() {
    let secret: Combination = "red,red,red,red".parse().unwrap();
    let guess: Combination = "blue,blue,blue,blue".parse().unwrap();
    assert_eq!(score(&secret, &guess).unwrap(), Feedback::new(0, 0));
}

#[test]
fn mismatched_lengths_are_rejected() {
    let secret: Combination = "red,red,red,red".parse().unwrap();
    let guess: Combination = "red,red,red".parse().unwrap();
    assert_eq!(
        score(&secret, &guess),
        Err(EngineError::LengthMismatch {
            secret: 4,
            guess: 3
        })
    );
}

#[test]
fn score_table() {
    assert_eq!(calculate_score(Difficulty::Easy, 1, 12), Ok(110));
    assert_eq!(calculate_score(Difficulty::Medium, 1, 12), Ok(165));
    assert_eq!(calculate_score(Difficulty::Hard, 3, 12), Ok(180));
    assert_eq!(calculate_score(Difficulty::Evil, 12, 12), Ok(0));
    assert!(calculate_score(Difficulty::Evil, 0, 12).is_err());
    assert!(calculate_score(Difficulty::Evil, 13, 12).is_err());
}

#[test]
fn solver_wins_a_seeded_easy_game() {
    let space = CandidateSpace::for_difficulty(Difficulty::Easy);
    let solver = Solver::new(AdaptiveStrategy::default(), &space);
    let mut game = Game::random(Difficulty::Easy, &mut StdRng::seed_from_u64(99));

    while !game.status().is_over() {
        let guess = solver.next_guess(&game.history()).unwrap().unwrap();
        game.guess(guess).unwrap();
    }

    assert_eq!(game.status(), GameStatus::Won);
    assert!(game.score().is_some());
}

#[test]
fn unknown_difficulty_is_rejected() {
    assert_eq!(
        "nightmare".parse::<Difficulty>(),
        Err(EngineError::UnknownDifficulty("nightmare".to_string()))
    );
    assert_eq!("hardcore".parse::<Difficulty>(), Ok(Difficulty::Evil));
}

#[test]
fn evil_secret_has_six_pegs() {
    let secret = generate_solution(Difficulty::Evil, &mut StdRng::seed_from_u64(7));
    assert_eq!(secret.len(), 6);
}
