//! Parsing Options.
//! `n-queens <N> [--headless] [--start-delay MS] [--step-delay MS] [--final-delay MS]`

use std::time::Duration;

use clap::{value_parser, Arg, ArgAction, Command};
use engine::constant::{FINAL_DELAY_MS, START_DELAY_MS, STEP_DELAY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub start: Duration,
    pub step: Duration,
    pub finish: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            start: Duration::from_millis(START_DELAY_MS),
            step: Duration::from_millis(STEP_DELAY_MS),
            finish: Duration::from_millis(FINAL_DELAY_MS),
        }
    }
}

fn delay_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("MS")
        .help(help)
        .value_parser(value_parser!(u64))
}

fn make_options_parser() -> clap::Command {
    Command::new("n-queens")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Animates a backtracking search for the N-Queens problem")
        .arg(
            // 这里只收字符串，数字校验交给 engine，保证提示信息一致
            Arg::new("n")
                .value_name("N")
                .help("Number of queens and side length of the board, more than 3")
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("headless")
                .long("headless")
                .help("Log every step instead of opening a window, then print the solution")
                .action(ArgAction::SetTrue),
        )
        .arg(delay_arg("start-delay", "Pause on the empty board"))
        .arg(delay_arg("step-delay", "Pause after every placement and removal"))
        .arg(delay_arg("final-delay", "Pause on the solved board"))
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub size: Option<String>,
    pub headless: bool,
    pub pacing: Pacing,
}

impl Options {
    pub fn parse_from_args<I, T>(flags: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(flags)?;
        let millis = |name: &str, default: u64| {
            Duration::from_millis(matches.get_one::<u64>(name).copied().unwrap_or(default))
        };
        Ok(Options {
            size: matches.get_one::<String>("n").cloned(),
            headless: matches.get_flag("headless"),
            pacing: Pacing {
                start: millis("start-delay", START_DELAY_MS),
                step: millis("step-delay", STEP_DELAY_MS),
                finish: millis("final-delay", FINAL_DELAY_MS),
            },
        })
    }
}
