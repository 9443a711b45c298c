//! Typewriter-style console output.
//!
//! The engine returns plain strings; the delayed character-by-character
//! display below is purely a presentation effect applied here.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Print the greeting shown at startup.
pub fn welcome() {
    typewriter(&format!("Hi {}!", username()), Duration::from_millis(120), false);
    typewriter(
        "Welcome to the Almanac console app :)",
        Duration::from_millis(200),
        true,
    );
    typewriter("Let's start . . .", Duration::from_millis(100), true);
    println!();
}

/// Print `text` one character (or word) at a time, sleeping `delay` between
/// writes, then terminate the line.
pub fn typewriter(text: &str, delay: Duration, by_words: bool) {
    let mut stdout = io::stdout();
    if by_words {
        for word in text.split(' ') {
            print!("{word} ");
            let _ = stdout.flush();
            thread::sleep(delay);
        }
    } else {
        for ch in text.chars() {
            print!("{ch}");
            let _ = stdout.flush();
            thread::sleep(delay);
        }
    }
    println!();
}

fn username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_owned())
}
