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
// A random password generator written in Rust.

use clap::{Args, Parser};
use std::path::PathBuf;

use rpawogen::configtool::Settings;
use rpawogen::logging;
use rpawogen::passgen::{MAX_LENGTH, MIN_LENGTH, PasswordOptions};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "A random password generator written in Rust", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Test password strength
    Testpass(TestpassArgs),

    /// List recently generated passwords
    History {
        /// Show passwords in plain text
        #[arg(long, default_value_t = false)]
        show: bool,
    },

    /// Copy a password from history to the clipboard
    Copy {
        /// Position in the history list (1 = newest)
        index: usize,
    },

    /// Clear password history
    Clear,

    /// Show or change the default generation options
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
struct OptionArgs {
    /// Length of the password
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
    length: Option<u16>,

    /// Include lowercase letters
    #[arg(long, default_value_t = false, overrides_with = "no_lowercase")]
    lowercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false, overrides_with = "lowercase")]
    no_lowercase: bool,

    /// Include uppercase letters
    #[arg(long, default_value_t = false, overrides_with = "no_uppercase")]
    uppercase: bool,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false, overrides_with = "uppercase")]
    no_uppercase: bool,

    /// Include numbers
    #[arg(long, default_value_t = false, overrides_with = "no_numbers")]
    numbers: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false, overrides_with = "numbers")]
    no_numbers: bool,

    /// Include symbols
    #[arg(long, default_value_t = false, overrides_with = "no_symbols")]
    symbols: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false, overrides_with = "symbols")]
    no_symbols: bool,

    /// Avoid visually similar characters (1, l, I, 0, O)
    #[arg(short = 'a', long, default_value_t = false, overrides_with = "allow_similar")]
    avoid_similar: bool,

    /// Allow visually similar characters
    #[arg(long, default_value_t = false, overrides_with = "avoid_similar")]
    allow_similar: bool,
}

// 一对开关中给出的那个生效，都没给时沿用默认值
fn toggle(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}

impl OptionArgs {
    // 命令行参数只覆盖显式给出的选项
    fn apply(&self, defaults: PasswordOptions) -> PasswordOptions {
        PasswordOptions {
            length: self.length.map_or(defaults.length, usize::from),
            include_lowercase: toggle(self.lowercase, self.no_lowercase, defaults.include_lowercase),
            include_uppercase: toggle(self.uppercase, self.no_uppercase, defaults.include_uppercase),
            include_numbers: toggle(self.numbers, self.no_numbers, defaults.include_numbers),
            include_symbols: toggle(self.symbols, self.no_symbols, defaults.include_symbols),
            avoid_similar_characters: toggle(
                self.avoid_similar,
                self.allow_similar,
                defaults.avoid_similar_characters,
            ),
        }
    }
}

#[derive(Debug, Args)]
struct GenArgs {
    #[command(flatten)]
    options: OptionArgs,

    /// Copy the password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,

    /// Save the password to password-YYYY-MM-DD.txt in DIR (default: current directory)
    #[arg(short, long, num_args = 0..=1, default_missing_value = ".")]
    export: Option<PathBuf>,

    /// Do not record the password in history
    #[arg(long, default_value_t = false)]
    no_history: bool,
}

#[derive(Debug, Args)]
struct TestpassArgs {
    /// Password to test
    password: String,

    /// Check for visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    check_confusion: bool,

    /// Also show the zxcvbn guessability estimate
    #[arg(short, long, default_value_t = false)]
    estimate: bool,
}

#[derive(Debug, Args)]
struct ConfigArgs {
    #[command(flatten)]
    options: OptionArgs,

    /// Save the given options as the new defaults
    #[arg(short, long, default_value_t = false)]
    save: bool,

    /// Restore the built-in defaults
    #[arg(long, default_value_t = false, conflicts_with = "save")]
    reset: bool,
}

fn run(cli: Cli) -> Result<(), String> {
    match cli {
        Cli::Gen(args) => {
            let options = args.options.apply(Settings::load().defaults);
            commands::password_gen::generate_random(options, args.copy, args.export, !args.no_history)
        },
        Cli::Testpass(args) => {
            commands::testpass::test_password(args.password, args.check_confusion, args.estimate)
        },
        Cli::History { show } => commands::list::list_history(show),
        Cli::Copy { index } => commands::list::copy_entry(index),
        Cli::Clear => commands::list::clear_history(),
        Cli::Config(args) => {
            if args.save || args.reset {
                let options = args.options.apply(Settings::load().defaults);
                commands::config::save_defaults(options, args.reset)
            } else {
                commands::config::show_defaults()
            }
        },
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    run(cli).map_err(anyhow::Error::msg)
}
