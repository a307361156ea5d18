// std imports
use std::{
    fs,
    io::{IsTerminal, Read, stderr, stdin, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use sectional::{
    App, Options,
    cli::Opt,
    error::*,
    settings::{ColorOption, Settings, resolve_token_type},
};

const SECTIONAL_DEBUG_LOG: &str = "SECTIONAL_DEBUG_LOG";
const SECTIONAL_DEBUG_LOG_STYLE: &str = "SECTIONAL_DEBUG_LOG_STYLE";

// ---

fn bootstrap(opt: &Opt) -> Result<Settings> {
    if std::env::var(SECTIONAL_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(SECTIONAL_DEBUG_LOG)
                .write_style(SECTIONAL_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    Settings::load(opt.config.as_deref())
}

fn run(opt: &Opt, settings: &Settings) -> Result<()> {
    let keep = opt.keep.iter().map(|name| resolve_token_type(name)).collect::<Result<Vec<_>>>()?;
    let discard = settings.discard_types()?.into_iter().filter(|ty| !keep.contains(ty)).collect();

    let options = Options {
        discard,
        output: opt.output.unwrap_or(settings.output),
        tokens_only: opt.tokens,
    };
    log::debug!("running with {:?}", options);

    let text = match opt.input_file() {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            stdin().read_to_string(&mut text)?;
            text
        }
    };

    App::new(options).run(&text, stdout().lock())
}

fn use_colors(color: ColorOption) -> bool {
    match color {
        ColorOption::Auto => stderr().is_terminal(),
        ColorOption::Always => true,
        ColorOption::Never => false,
    }
}

fn main() {
    let opt = Opt::parse();
    let mut colored = use_colors(opt.color.unwrap_or(ColorOption::Auto));

    let result = bootstrap(&opt).and_then(|settings| {
        colored = use_colors(opt.color.unwrap_or(settings.color));
        run(&opt, &settings)
    });

    if let Err(err) = result {
        err.log(colored);
        process::exit(1);
    }
}
