//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___|   ___   _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _   / _ \ | '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| | |  __/ | | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|  \___| |_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength scoring

use serde::{Deserialize, Serialize};
use std::fmt;
use zxcvbn::zxcvbn;

// 密码强度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: i32) -> Self {
        if score < 4 {
            Strength::Weak
        } else if score < 6 {
            Strength::Medium
        } else if score < 8 {
            Strength::Strong
        } else {
            Strength::VeryStrong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::VeryStrong => write!(f, "very strong"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    pub strength: Strength,
    pub reasons: Vec<String>,
    pub score: i32,
}

// 行终止符不参与重复判断
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// 统计连续出现 3 次及以上的相同字符段数（行终止符除外）
fn count_repeating_runs(password: &str) -> i32 {
    let mut runs = 0;
    let mut prev: Option<char> = None;
    let mut run_len = 0;

    for c in password.chars() {
        if Some(c) == prev {
            run_len += 1;
        } else {
            if run_len >= 3 && prev.is_some_and(|p| !is_line_terminator(p)) {
                runs += 1;
            }
            prev = Some(c);
            run_len = 1;
        }
    }
    if run_len >= 3 && prev.is_some_and(|p| !is_line_terminator(p)) {
        runs += 1;
    }
    runs
}

/// 启发式评估密码强度：长度、字符种类、重复字符
pub fn calculate_password_strength(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult {
            strength: Strength::Weak,
            reasons: vec!["No password provided".to_string()],
            score: 0,
        };
    }

    let mut reasons = Vec::new();
    let mut score = 0;

    let length = password.chars().count();
    let (points, reason) = if length < 8 {
        (1, "Password is too short")
    } else if length < 12 {
        (2, "Decent length")
    } else if length < 16 {
        (3, "Good length")
    } else {
        (4, "Excellent length")
    };
    score += points;
    reasons.push(reason.to_string());

    let classes = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let char_type_count = classes.iter().filter(|present| **present).count();
    score += char_type_count as i32;

    match char_type_count {
        1 => reasons.push("Only one type of characters".to_string()),
        2 => reasons.push("Uses two types of characters".to_string()),
        3 => reasons.push("Good variety of characters".to_string()),
        4 => reasons.push("Excellent variety of characters".to_string()),
        _ => {}
    }

    let repeats = count_repeating_runs(password);
    if repeats > 0 {
        score -= repeats;
        reasons.push("Contains repeating characters".to_string());
    }

    StrengthResult {
        strength: Strength::from_score(score),
        reasons,
        score,
    }
}

// zxcvbn 可猜测性估计，仅作参考展示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEstimate {
    pub score: u8,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

pub fn estimate_guessability(password: &str) -> GuessEstimate {
    let entropy = zxcvbn(password, &[]);
    let feedback = entropy.feedback();
    let warning = feedback.and_then(|f| f.warning().map(|w| w.to_string()));
    let suggestions = feedback
        .map(|f| f.suggestions().iter().map(|s| s.to_string()).collect())
        .unwrap_or_default();

    GuessEstimate {
        score: u8::from(entropy.score()),
        warning,
        suggestions,
    }
}
