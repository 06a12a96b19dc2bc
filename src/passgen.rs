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
// Password generator

use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

// 字符集（已去除易混淆字符）
pub const LOWERCASE_CHARS: &str = "abcdefghijkmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
pub const NUMBER_CHARS: &str = "23456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+{}[]|:;<>,.?/~";

// 易混淆字符，仅在未开启 avoid_similar_characters 时加入
pub const SIMILAR_LOWERCASE: &str = "l";
pub const SIMILAR_UPPERCASE: &str = "IO";
pub const SIMILAR_NUMBERS: &str = "10";

/// 命令行允许的密码长度范围
pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 50;

// 随机密码生成选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub avoid_similar_characters: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            avoid_similar_characters: false,
        }
    }
}

fn push_class(pool: &mut String, base: &str, similar: &str, avoid_similar: bool) {
    pool.push_str(base);
    if !avoid_similar {
        pool.push_str(similar);
    }
}

/// 按选项拼接候选字符池；未选择任何字符集时回退为小写字母
pub fn build_char_pool(options: &PasswordOptions) -> Vec<char> {
    let avoid = options.avoid_similar_characters;
    let mut pool = String::new();

    if options.include_lowercase {
        push_class(&mut pool, LOWERCASE_CHARS, SIMILAR_LOWERCASE, avoid);
    }
    if options.include_uppercase {
        push_class(&mut pool, UPPERCASE_CHARS, SIMILAR_UPPERCASE, avoid);
    }
    if options.include_numbers {
        push_class(&mut pool, NUMBER_CHARS, SIMILAR_NUMBERS, avoid);
    }
    if options.include_symbols {
        pool.push_str(SYMBOL_CHARS);
    }

    if pool.is_empty() {
        push_class(&mut pool, LOWERCASE_CHARS, SIMILAR_LOWERCASE, avoid);
    }

    pool.chars().collect()
}

/// 使用系统随机源生成密码
pub fn generate_password(options: &PasswordOptions) -> String {
    let mut rng = OsRng;
    generate_password_with_rng(options, &mut rng)
}

/// 使用指定随机源生成密码。
///
/// 每一位独立、等概率地从字符池中抽取（有放回），
/// 因此并不保证每个已选字符集都至少出现一次。
pub fn generate_password_with_rng<R: Rng + ?Sized>(options: &PasswordOptions, rng: &mut R) -> String {
    let pool = build_char_pool(options);
    let mut password = String::with_capacity(options.length);
    for _ in 0..options.length {
        // pool 至少包含小写字母，choose 不会返回 None
        if let Some(c) = pool.choose(rng) {
            password.push(*c);
        }
    }
    password
}

pub fn check_confusing_chars(password: &str) -> Vec<char> {
    let confusing_chars: Vec<char> = SIMILAR_LOWERCASE
        .chars()
        .chain(SIMILAR_UPPERCASE.chars())
        .chain(SIMILAR_NUMBERS.chars())
        .collect();
    password.chars().filter(|c| confusing_chars.contains(c)).collect()
}
