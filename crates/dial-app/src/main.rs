mod fonts;
mod screen;
mod view;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use dial_engine::device::GpuInit;
use dial_engine::logging::{init_logging, LoggingConfig};
use dial_engine::text::FontSystem;
use dial_engine::window::{Runtime, RuntimeConfig};
use dial_face::{ClockPalette, ClockStyle, LocalClock};

use crate::screen::ClockScreen;
use crate::view::ClockView;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    fn palette(self) -> ClockPalette {
        match self {
            Theme::Light => ClockPalette::light(),
            Theme::Dark => ClockPalette::dark(),
        }
    }
}

/// Analog clock face, refreshed once per second.
#[derive(Parser, Debug)]
#[command(name = "dial", version, about, long_about = None)]
struct Cli {
    /// Length of the minute tick marks, in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 8.0)]
    minute_tick_length: f32,

    /// Length of every fifth (hour) tick mark, in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 24.0)]
    hour_tick_length: f32,

    /// Color scheme
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,

    /// Log filter in env_logger syntax; overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig { env_filter: cli.log_filter.clone(), ..Default::default() });

    let style = ClockStyle::with_tick_lengths(cli.minute_tick_length, cli.hour_tick_length)
        .context("invalid tick length")?;
    log::info!("starting dial ({:?} theme)", cli.theme);

    let mut fonts = FontSystem::new();
    let readout_font = fonts::load_system_font(&mut fonts);

    let screen = ClockScreen::new(LocalClock, style, cli.theme.palette());
    let view = ClockView::new(screen, fonts, readout_font);

    Runtime::run(RuntimeConfig::default(), GpuInit::default(), view).context("dial runtime error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_style() {
        let cli = Cli::try_parse_from(["dial"]).unwrap();
        let style = ClockStyle::with_tick_lengths(cli.minute_tick_length, cli.hour_tick_length)
            .unwrap();
        assert_eq!(style, ClockStyle::default());
        assert_eq!(cli.theme, Theme::Dark);
        assert!(cli.log_filter.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "dial",
            "--minute-tick-length",
            "4",
            "--hour-tick-length",
            "30.5",
            "--theme",
            "light",
            "--log-filter",
            "dial=debug",
        ])
        .unwrap();
        assert_eq!(cli.minute_tick_length, 4.0);
        assert_eq!(cli.hour_tick_length, 30.5);
        assert_eq!(cli.theme.palette(), ClockPalette::light());
        assert_eq!(cli.log_filter.as_deref(), Some("dial=debug"));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(Cli::try_parse_from(["dial", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn negative_length_parses_but_fails_validation() {
        let cli = Cli::try_parse_from(["dial", "--minute-tick-length=-3"]).unwrap();
        assert!(ClockStyle::with_tick_lengths(cli.minute_tick_length, cli.hour_tick_length).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
