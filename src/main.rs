// SPDX-License-Identifier: MPL-2.0
use slider_picker::app::{self, Flags};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: slider_picker [OPTIONS]

Options:
  --config <PATH>     Read the picker configuration from PATH
  --max <N>           Override the largest selectable value
  --screen-reader     Show the numeric input instead of the slider
  -h, --help          Print this help";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_path: args.opt_value_from_str::<_, PathBuf>("--config")?,
        max_value: args.opt_value_from_str("--max")?,
        screen_reader: args.contains("--screen-reader"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    log::info!("starting slider picker with {flags:?}");
    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}
