//! siren-lookup - Terminal client for company lookups

use anyhow::Result;
use clap::{value_parser, Arg, Command};
use siren_lookup::render::ui::TerminalUI;
use siren_lookup::settings::{Settings, SettingsOverrides};
use siren_lookup::Application;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("siren-lookup")
        .version(siren_lookup::VERSION)
        .about("Log in and look up companies by web domain")
        .long_about(
            "siren-lookup reads the backend address from the serving origin's config.json, \
             then lets you log in, register and search companies scored against a domain.",
        )
        .arg(
            Arg::new("origin")
                .long("origin")
                .value_name("URL")
                .help("Origin that serves config.json"),
        )
        .arg(
            Arg::new("settings")
                .long("settings")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Settings file (defaults to the user config directory)"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .value_parser(value_parser!(u64).range(1..))
                .help("Request timeout in seconds"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_parser(["default", "monochrome", "high-contrast"])
                .help("Color theme"),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let matches = cli().get_matches();

    let overrides = SettingsOverrides {
        origin: matches.get_one::<String>("origin").cloned(),
        request_timeout_secs: matches.get_one::<u64>("timeout").copied(),
        theme: matches.get_one::<String>("theme").cloned(),
    };
    let settings_path = matches.get_one::<PathBuf>("settings");
    let settings = Settings::load(settings_path.map(PathBuf::as_path))?.apply(overrides);

    log::info!(
        "Starting siren-lookup {} against origin {}",
        siren_lookup::VERSION,
        settings.origin
    );

    let ui_renderer = Box::new(TerminalUI::with_theme(settings.color_theme()?)?);
    let mut app = Application::new(&settings, ui_renderer).await?;

    app.run().await?;

    Ok(())
}
