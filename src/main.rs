use std::process::ExitCode;

use slovolov::cli::parse_cli;
use slovolov::dictionary::load_dictionary;
use slovolov::filter::filter_words;
use slovolov::solver::find_words;
use slovolov::logging;

fn main() -> ExitCode {
    logging::init();

    let request = match parse_cli().into_request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let dictionary = match load_dictionary(&request.dictionary_path) {
        Ok(words) => words,
        Err(e) => {
            eprintln!(
                "Failed to load dictionary from '{}': {e}",
                request.dictionary_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let words = find_words(&request.letters, &dictionary);
    for word in filter_words(&words, &request.filter) {
        println!("{word}");
    }
    ExitCode::SUCCESS
}
