use std::io::Write;

use chrono::Utc;
use colored::{Color, Colorize as _};
use env_logger::{Builder, Env};
use log::Level;

pub fn init(verbose: bool) {
    let mut builder = Builder::new();

    builder.parse_env(get_env(verbose));

    builder.format(|f, record| {
        let time = Utc::now().format("%H:%M:%S").to_string().dimmed();
        let level = record.level();
        let tag = level_tag(level).color(color_by_level(level)).bold();
        let message = record.args();

        writeln!(f, "{time} {tag} {message}")
    });

    builder.init();
}

/// `RUST_LOG` wins over the `--verbose` flag.
fn get_env(verbose: bool) -> Env<'static> {
    let default_level = if verbose || cfg!(debug_assertions) {
        "discohook=debug,warn"
    } else {
        "discohook=info,warn"
    };
    Env::default().default_filter_or(default_level)
}

const fn color_by_level(level: Level) -> Color {
    match level {
        Level::Trace => Color::Magenta,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}

const fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Trace => "trace",
        Level::Debug => "debug",
        Level::Info => "info ",
        Level::Warn => "warn ",
        Level::Error => "error",
    }
}
