pub mod config;
pub mod list;
pub mod password_gen;
pub mod testpass;

use rpawogen::strength::StrengthResult;

pub fn display_strength(result: &StrengthResult) {
    println!("Password strength: {} (score: {})", result.strength, result.score);
    for reason in &result.reasons {
        println!("  - {}", reason);
    }
}
