use std::io;
use std::process::ExitCode;
use wordle_clone::cli::{CliInterface, parse_cli};
use wordle_clone::definitions::DefinitionFile;
use wordle_clone::logging::init_logger;
use wordle_clone::tui::TuiInterface;
use wordle_clone::{Dictionary, Game, game_loop};

fn main() -> ExitCode {
    let cli = parse_cli();

    // Logging to stderr would draw over the full-screen interface
    let default_filter = match (cli.verbose, cli.plain || cli.log_file.is_some()) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "off",
    };
    if let Err(e) = init_logger(default_filter, cli.log_file.as_deref()) {
        eprintln!("Failed to open log file: {e}");
        return ExitCode::FAILURE;
    }

    let dictionary = match &cli.wordbank_path {
        Some(path) => Dictionary::from_file(path),
        None => Dictionary::embedded(),
    };
    let dictionary = match dictionary {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("Cannot start: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {} words", dictionary.len());

    let mut game = Game::new(dictionary, cli.game_config());
    if let Some(path) = &cli.definitions_path {
        match DefinitionFile::load(path) {
            Ok(definitions) => game = game.with_definitions(Box::new(definitions)),
            Err(e) => log::warn!("Ignoring definitions file {}: {e}", path.display()),
        }
    }

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut game, &mut interface);
    } else {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to initialise terminal: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&mut game, &mut interface);
    }

    ExitCode::SUCCESS
}
