use rpawogen::passgen;
use rpawogen::strength::{calculate_password_strength, estimate_guessability};

use super::display_strength;

pub fn test_password(
    password: String,
    check_confusion: bool,
    estimate: bool,
) -> Result<(), String> {
    let result = calculate_password_strength(&password);
    display_strength(&result);

    if estimate {
        let guess = estimate_guessability(&password);
        println!("zxcvbn score: {}/4", guess.score);
        if let Some(warning) = guess.warning {
            println!("Warning: {}", warning);
        }
        if !guess.suggestions.is_empty() {
            println!("Suggestions: {}", guess.suggestions.join(" "));
        }
    }

    if check_confusion {
        let confusing = passgen::check_confusing_chars(&password);
        if !confusing.is_empty() {
            println!("Potentially confusing characters: {:?}", confusing);
        } else {
            println!("No confusing characters detected");
        }
    }
    Ok(())
}
