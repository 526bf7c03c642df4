use encoding_rs::WINDOWS_1251;
use std::fs;
use std::io;
use std::path::Path;

/// Word list shipped alongside the binary, one word per line, CP1251.
pub const DEFAULT_DICTIONARY_PATH: &str = "russian-words/russian.txt";

/// Loads the word list, transcoding from CP1251 to UTF-8. A missing or
/// unreadable file is fatal for the run; there is no fallback dictionary.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let (text, _, had_errors) = WINDOWS_1251.decode(&bytes);
    if had_errors {
        log::warn!("dictionary contains bytes outside CP1251, replaced with U+FFFD");
    }
    let words = parse_dictionary(&text);
    log::info!("loaded {} dictionary words", words.len());
    Ok(words)
}

/// Splits already-decoded word-list text into entries, keeping file order.
pub fn parse_dictionary(data: &str) -> Vec<String> {
    data.lines().map(|line| line.trim().to_owned()).collect()
}
