// Integration tests for the wordle-clone game
// These tests drive complete games through the public API

use std::io::Cursor;
use wordle_clone::cli::CliInterface;
use wordle_clone::definitions::DefinitionFile;
use wordle_clone::evaluator::Verdict::{Absent, Correct, Present};
use wordle_clone::*;

fn single_word_game(word: &str) -> Game {
    let dictionary = Dictionary::new(load_wordbank_from_str(word)).unwrap();
    Game::new(dictionary, GameConfig::default())
}

#[test]
fn test_end_to_end_win_through_cli() {
    let mut game = single_word_game("CRANE");
    let mut interface = CliInterface::new(Cursor::new("SLATE\nCRANE\n"));

    game_loop(&mut game, &mut interface);

    assert_eq!(game.session().status(), SessionStatus::Won);
    assert_eq!(game.session().current_row(), 1);
    assert_eq!(game.stats().games_played, 1);
    assert_eq!(game.stats().games_won, 1);
    assert_eq!(game.stats().current_streak, 1);
}

#[test]
fn test_end_to_end_loss_through_cli() {
    let mut game = single_word_game("CRANE");
    let input = "SLATE\nBUILT\nMOIST\nPLUMB\nGHOST\nFIELD\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut game, &mut interface);

    assert_eq!(game.session().status(), SessionStatus::Lost);
    assert!(game.session().is_over());
    assert_eq!(game.stats().games_played, 1);
    assert_eq!(game.stats().games_won, 0);
    assert_eq!(game.stats().current_streak, 0);
}

#[test]
fn test_input_after_game_over_is_ignored() {
    let mut game = single_word_game("CRANE");
    let mut interface = CliInterface::new(Cursor::new("CRANE\nSLATE\nhint\nCRANE\n"));

    game_loop(&mut game, &mut interface);

    assert_eq!(game.session().current_row(), 0);
    assert_eq!(game.session().hints_used(), 0);
    assert_eq!(game.stats().games_played, 1);
}

#[test]
fn test_invalid_lines_skipped() {
    let mut game = single_word_game("CRANE");
    let input = "CRAN\nCRANES\nCR4NE\n\nCRANE\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut game, &mut interface);

    assert_eq!(game.session().status(), SessionStatus::Won);
    assert_eq!(game.session().current_row(), 0);
}

#[test]
fn test_multiple_games_build_streak() {
    let mut game = single_word_game("CRANE");
    let input = "CRANE\nnext\nSLATE\nCRANE\nnext\nCRANE\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut game, &mut interface);

    let stats = game.stats();
    assert_eq!(stats.games_played, 3);
    assert_eq!(stats.games_won, 3);
    assert_eq!(stats.current_streak, 3);
    assert_eq!(stats.max_streak, 3);
    assert_eq!(stats.win_percentage(), 100);
}

#[test]
fn test_new_game_abandons_unfinished_session() {
    let mut game = single_word_game("CRANE");
    let input = "SLATE\nnext\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut game, &mut interface);

    assert_eq!(game.session().current_row(), 0);
    assert!(!game.session().is_over());
    // Abandoned sessions are not terminal and never recorded
    assert_eq!(game.stats().games_played, 0);
}

#[test]
fn test_hint_flow_through_cli() {
    let mut game = single_word_game("CRANE");
    let input = "hint\nCLOUD\nhint\nhint\nhint\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut game, &mut interface);

    // First request is denied, the next two are granted, the last is over budget
    assert_eq!(game.session().hints_used(), 2);
    assert_eq!(game.session().hints_remaining(), 0);
}

#[test]
fn test_stats_survive_restart() {
    let path = std::env::temp_dir().join("wordle_clone_integration_stats.json");
    let _ = std::fs::remove_file(&path);
    let config = GameConfig {
        stats_path: Some(path.clone()),
        ..GameConfig::default()
    };

    {
        let dictionary = Dictionary::new(load_wordbank_from_str("CRANE")).unwrap();
        let mut game = Game::new(dictionary, config.clone());
        let mut interface = CliInterface::new(Cursor::new("CRANE\nnext\nCRANE\n"));
        game_loop(&mut game, &mut interface);
    }

    let dictionary = Dictionary::new(load_wordbank_from_str("CRANE")).unwrap();
    let game = Game::new(dictionary, config);
    assert_eq!(game.stats().games_played, 2);
    assert_eq!(game.stats().max_streak, 2);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_win_with_stats_at_counter_limit() {
    let path = std::env::temp_dir().join("wordle_clone_integration_full_stats.json");
    let full = Statistics {
        games_played: u32::MAX,
        games_won: u32::MAX,
        current_streak: u32::MAX,
        max_streak: u32::MAX,
    };
    wordle_clone::stats::write_stats(&path, &full).unwrap();

    let dictionary = Dictionary::new(load_wordbank_from_str("CRANE")).unwrap();
    let config = GameConfig {
        stats_path: Some(path.clone()),
        ..GameConfig::default()
    };
    let mut game = Game::new(dictionary, config);
    assert_eq!(game.stats(), &full);

    let mut interface = CliInterface::new(Cursor::new("CRANE
"));
    game_loop(&mut game, &mut interface);

    assert_eq!(game.session().status(), SessionStatus::Won);
    assert_eq!(game.stats(), &full);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let words = load_wordbank_from_str("CRANE\nSLATE\nRAISE\nSTARE\nARISE\nIRATE");
    let config = GameConfig {
        seed: Some(1234),
        ..GameConfig::default()
    };
    let first = Game::new(Dictionary::new(words.clone()).unwrap(), config.clone());
    let second = Game::new(Dictionary::new(words).unwrap(), config);
    assert_eq!(first.session().secret(), second.session().secret());
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let wordbank_path = std::env::temp_dir().join("wordle_clone_custom_wordbank.txt");
    {
        let mut file = File::create(&wordbank_path).unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "not-a-word").unwrap();
    }

    let dictionary = Dictionary::from_file(&wordbank_path).unwrap();
    assert_eq!(dictionary.len(), 1);

    let mut game = Game::new(dictionary, GameConfig::default());
    let mut interface = CliInterface::new(Cursor::new("apple\n"));
    game_loop(&mut game, &mut interface);
    assert_eq!(game.session().status(), SessionStatus::Won);

    std::fs::remove_file(&wordbank_path).unwrap();
}

#[test]
fn test_definitions_file_with_game() {
    let definitions = DefinitionFile::from_text("CRANE: a large long-necked bird\n");
    let mut game = single_word_game("CRANE").with_definitions(Box::new(definitions));
    let mut interface = CliInterface::new(Cursor::new("CRANE\n"));

    game_loop(&mut game, &mut interface);

    assert_eq!(game.stats().games_won, 1);
}

#[test]
fn test_evaluator_repeated_letter_cases() {
    let w = |s: &str| Word::new(s).unwrap();
    assert_eq!(
        evaluate(&w("SPEED"), &w("ERASE")),
        [Present, Absent, Absent, Present, Present]
    );
    assert_eq!(
        evaluate(&w("SPEED"), &w("SPEED")),
        [Correct, Correct, Correct, Correct, Correct]
    );
    assert_eq!(
        evaluate(&w("SPEED"), &w("EXPEL")),
        [Present, Absent, Present, Correct, Absent]
    );
}
