//! Game engine integration tests.
//!
//! These tests play whole games through the public API and check the
//! rules: dealing, guessing, mistakes, winning, losing and what happens
//! after the game ends.

use funnections::core::{
    Action, ActionOutcome, GameConfig, GameRng, GameState, GameStatus, Group, GroupLabel,
    IgnoreReason, Message, Puzzle, TileId,
};
use funnections::rules::{GameEngine, GameResult};

fn letters_puzzle(config: &GameConfig) -> Puzzle {
    Puzzle::new(
        config,
        vec![
            Group::new(["A", "B", "C", "D"]),
            Group::new(["E", "F", "G", "H"]),
            Group::new(["I", "J", "K", "L"]),
            Group::new(["M", "N", "O", "P"]),
        ],
    )
    .unwrap()
}

fn new_game(config: GameConfig, seed: u64) -> (GameEngine, GameState) {
    let puzzle = letters_puzzle(&config);
    let engine = GameEngine::new(config);
    let state = engine.initialize(&puzzle, "March 3, 2025", GameRng::new(seed));
    (engine, state)
}

fn tile_id(state: &GameState, word: &str) -> TileId {
    state
        .tiles()
        .iter()
        .find(|t| t.word().eq_ignore_ascii_case(word))
        .map(|t| t.id)
        .unwrap()
}

fn guess(engine: &GameEngine, state: &mut GameState, words: &[&str]) -> ActionOutcome {
    for word in words {
        let id = tile_id(state, word);
        engine.apply(state, Action::SelectTile(id));
    }
    engine.apply(state, Action::Submit)
}

// =============================================================================
// Dealing
// =============================================================================

/// Test that a fresh game has sixteen tiles with IDs 1..=16.
#[test]
fn test_initialize_assigns_unique_ids() {
    for seed in 0..20 {
        let (_, state) = new_game(GameConfig::default(), seed);

        let mut ids: Vec<u32> = state.tiles().iter().map(|t| t.id.raw()).collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=16).collect::<Vec<_>>());
        assert_eq!(state.remaining_groups().len(), 4);
        assert!(state.tiles().iter().all(|t| !t.selected && !t.is_solved()));
    }
}

/// Test that the deal is shuffled but reproducible from the seed.
#[test]
fn test_initialize_shuffle_is_seeded() {
    let order = |seed| -> Vec<TileId> {
        let (_, state) = new_game(GameConfig::default(), seed);
        state.tiles().iter().map(|t| t.id).collect()
    };

    assert_eq!(order(11), order(11));
    assert_ne!(order(11), order(12));
    // With 16! layouts, landing on identity order for several seeds is not plausible
    let identity: Vec<TileId> = (1..=16).map(TileId).collect();
    assert!((0..5).any(|seed| order(seed) != identity));
}

/// Test that the mistake budget comes from the configuration.
#[test]
fn test_initialize_uses_mistake_budget() {
    let (_, state) = new_game(GameConfig::new().with_mistake_budget(2), 1);

    assert_eq!(state.mistakes_left(), 2);
}

// =============================================================================
// Selection
// =============================================================================

/// Test that toggling twice restores the original state.
#[test]
fn test_toggle_is_its_own_inverse() {
    let (engine, mut state) = new_game(GameConfig::default(), 3);
    let before = state.tiles().to_vec();

    engine.toggle_tile(&mut state, TileId(6));
    assert!(state.tile(TileId(6)).unwrap().selected);

    engine.toggle_tile(&mut state, TileId(6));
    assert_eq!(state.tiles(), &before[..]);
    assert_eq!(state.message(), Message::Instructions);
    assert_eq!(state.mistakes_left(), 4);
}

/// Test that an unknown tile ID is silently ignored.
#[test]
fn test_toggle_unknown_id() {
    let (engine, mut state) = new_game(GameConfig::default(), 3);
    let before = state.tiles().to_vec();

    let outcome = engine.apply(&mut state, Action::SelectTile(TileId(0)));

    assert_eq!(outcome, ActionOutcome::Ignored { reason: IgnoreReason::UnknownTile });
    assert_eq!(state.tiles(), &before[..]);
}

/// Test that deselect-all clears every selection.
#[test]
fn test_deselect_all() {
    let (engine, mut state) = new_game(GameConfig::default(), 3);
    for id in [1, 5, 9] {
        engine.toggle_tile(&mut state, TileId(id));
    }

    let outcome = engine.apply(&mut state, Action::DeselectAll);

    assert_eq!(outcome, ActionOutcome::Deselected);
    assert_eq!(state.selected_count(), 0);
}

/// Test that shuffling leaves selection and group flags with their tiles.
#[test]
fn test_shuffle_preserves_tile_flags() {
    let (engine, mut state) = new_game(GameConfig::default(), 3);
    guess(&engine, &mut state, &["M", "N", "O", "P"]);
    let a = tile_id(&state, "A");
    engine.toggle_tile(&mut state, a);

    engine.apply(&mut state, Action::Shuffle);

    assert!(state.tile(tile_id(&state, "A")).unwrap().selected);
    for word in ["M", "N", "O", "P"] {
        let tile = state.tile(tile_id(&state, word)).unwrap();
        assert_eq!(tile.group(), Some(GroupLabel::new(1)));
        assert!(!tile.selected);
    }
    assert!(state.tiles()[12..].iter().all(|t| t.is_solved()));
}

// =============================================================================
// Guessing
// =============================================================================

/// Test a correct guess: group moves to solved, tiles get label 1.
#[test]
fn test_correct_guess() {
    let (engine, mut state) = new_game(GameConfig::default(), 7);

    let outcome = guess(&engine, &mut state, &["E", "F", "G", "H"]);

    assert_eq!(outcome, ActionOutcome::Correct { label: GroupLabel::new(1), won: false });
    assert_eq!(state.remaining_groups().len(), 3);
    assert_eq!(state.solved_groups().len(), 1);
    assert_eq!(state.solved_groups()[0].words.as_slice(), ["E", "F", "G", "H"]);
    for word in ["E", "F", "G", "H"] {
        let tile = state.tile(tile_id(&state, word)).unwrap();
        assert_eq!(tile.group_id(), 1);
        assert!(!tile.selected);
    }
    assert_eq!(state.mistakes_left(), 4);
    assert_eq!(state.message(), Message::Correct);
}

/// Test that the right group is removed from the answer key.
#[test]
fn test_correct_guess_removes_matched_group() {
    let (engine, mut state) = new_game(GameConfig::default(), 7);

    guess(&engine, &mut state, &["I", "J", "K", "L"]);

    let remaining: Vec<&[String]> = state.remaining_groups().iter().map(Group::words).collect();
    assert_eq!(remaining.len(), 3);
    assert_eq!(remaining[0], ["A", "B", "C", "D"]);
    assert_eq!(remaining[1], ["E", "F", "G", "H"]);
    assert_eq!(remaining[2], ["M", "N", "O", "P"]);
}

/// Test that guessing ignores case.
#[test]
fn test_guess_is_case_insensitive() {
    let config = GameConfig::default();
    let puzzle = Puzzle::new(
        &config,
        vec![
            Group::new(["A", "B", "C", "D"]),
            Group::new(["e", "f", "g", "h"]),
            Group::new(["I", "J", "K", "L"]),
            Group::new(["M", "N", "O", "P"]),
        ],
    )
    .unwrap();
    let engine = GameEngine::new(config);
    let mut state = engine.initialize(&puzzle, "", GameRng::new(1));

    // Tiles read "e".."h"; the key matches regardless
    let outcome = guess(&engine, &mut state, &["E", "f", "G", "h"]);

    assert!(matches!(outcome, ActionOutcome::Correct { .. }));
}

/// Test an incorrect guess: one mistake consumed, selection cleared.
#[test]
fn test_incorrect_guess() {
    let (engine, mut state) = new_game(GameConfig::default(), 7);

    let outcome = guess(&engine, &mut state, &["A", "B", "C", "E"]);

    assert_eq!(outcome, ActionOutcome::Incorrect { mistakes_left: 3, lost: false });
    assert_eq!(state.mistakes_left(), 3);
    assert_eq!(state.selected_count(), 0);
    assert_eq!(state.remaining_groups().len(), 4);
    assert_eq!(state.message(), Message::Incorrect);
}

/// Test that a wrong-sized selection costs nothing.
#[test]
fn test_wrong_selection_size() {
    let (engine, mut state) = new_game(GameConfig::default(), 7);

    let outcome = guess(&engine, &mut state, &["A", "B", "C", "D", "E"]);

    assert_eq!(outcome, ActionOutcome::WrongSelectionSize { selected: 5 });
    assert_eq!(state.mistakes_left(), 4);
    assert_eq!(state.selected_count(), 5);
    assert_eq!(state.message().to_string(), "Please select exactly 4 tiles.");
}

// =============================================================================
// Endings
// =============================================================================

/// Test that the last mistake ends the game.
#[test]
fn test_last_mistake_loses() {
    let (engine, mut state) = new_game(GameConfig::new().with_mistake_budget(1), 7);

    let outcome = guess(&engine, &mut state, &["A", "B", "C", "E"]);

    assert_eq!(outcome, ActionOutcome::Incorrect { mistakes_left: 0, lost: true });
    assert_eq!(state.status(), GameStatus::Lost);
    assert_eq!(state.message(), Message::GameOver);
    assert_eq!(engine.result(&state), Some(GameResult::Lost { groups_solved: 0 }));
}

/// Test that nothing moves once the game is lost.
#[test]
fn test_no_actions_after_loss() {
    let (engine, mut state) = new_game(GameConfig::new().with_mistake_budget(1), 7);
    guess(&engine, &mut state, &["A", "B", "C", "E"]);
    let tiles = state.tiles().to_vec();

    let finished = ActionOutcome::Finished { status: GameStatus::Lost };
    for action in [
        Action::SelectTile(tile_id(&state, "A")),
        Action::Submit,
        Action::Shuffle,
        Action::DeselectAll,
    ] {
        assert_eq!(engine.apply(&mut state, action), finished);
    }

    assert_eq!(state.mistakes_left(), 0);
    assert_eq!(state.tiles(), &tiles[..]);
    assert_eq!(state.message(), Message::GameOver);
    assert_eq!(engine.apply(&mut state, Action::View), ActionOutcome::Viewed);
}

/// Test that solving every group wins, labels following solve order.
#[test]
fn test_win_in_any_order() {
    let (engine, mut state) = new_game(GameConfig::default(), 21);

    guess(&engine, &mut state, &["M", "N", "O", "P"]);
    guess(&engine, &mut state, &["A", "B", "C", "E"]);
    guess(&engine, &mut state, &["E", "F", "G", "H"]);
    guess(&engine, &mut state, &["A", "B", "C", "D"]);
    let outcome = guess(&engine, &mut state, &["L", "K", "J", "I"]);

    assert_eq!(outcome, ActionOutcome::Correct { label: GroupLabel::new(4), won: true });
    assert!(state.remaining_groups().is_empty());
    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(state.message(), Message::Won);
    assert_eq!(engine.result(&state), Some(GameResult::Won { mistakes_left: 3 }));

    let order: Vec<&str> = state.solved_groups().iter().map(|g| g.words[0].as_str()).collect();
    assert_eq!(order, ["M", "E", "A", "I"]);
    assert_eq!(state.tile(tile_id(&state, "M")).unwrap().group_id(), 1);
    assert_eq!(state.tile(tile_id(&state, "I")).unwrap().group_id(), 4);
}

/// Test that a submit after winning is rejected.
#[test]
fn test_no_submit_after_win() {
    let (engine, mut state) = new_game(GameConfig::default(), 21);
    let groups = [
        ["A", "B", "C", "D"],
        ["E", "F", "G", "H"],
        ["I", "J", "K", "L"],
        ["M", "N", "O", "P"],
    ];
    for group in groups {
        guess(&engine, &mut state, &group);
    }

    let outcome = engine.apply(&mut state, Action::Submit);

    assert_eq!(outcome, ActionOutcome::Finished { status: GameStatus::Won });
    assert_eq!(state.solved_groups().len(), 4);
    assert_eq!(state.message(), Message::Won);
}

/// Test the group accounting invariant across a mixed game.
#[test]
fn test_solved_plus_remaining_is_constant() {
    let (engine, mut state) = new_game(GameConfig::default(), 5);
    let guesses: [&[&str]; 5] = [
        &["A", "B", "C", "D"],
        &["E", "F", "G", "I"],
        &["E", "F"],
        &["E", "F", "G", "H"],
        &["I", "J", "K", "M"],
    ];

    for words in guesses {
        guess(&engine, &mut state, words);
        engine.apply(&mut state, Action::DeselectAll);
        assert_eq!(state.solved_groups().len() + state.remaining_groups().len(), 4);
        assert!(state.tiles().iter().all(|t| !(t.is_solved() && t.selected)));
    }

    assert_eq!(state.solved_groups().len(), 2);
    assert_eq!(state.mistakes_left(), 2);
}
