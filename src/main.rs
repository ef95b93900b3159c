//! screenprinter - demo of typewriter screens and arrow-key menus
//!
//! Prints an introduction, a menu, and the option the player picked, using whatever
//! render settings were given on the command line.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use screenprinter::{
    Alignment, ArrowPosition, BorderGlyphs, BorderStyle, RenderSettings, ScreenRenderer,
    SettingsUpdate, TerminalKeys, TerminalOutput, TerminalSession, WriteStyle,
};
use std::str::FromStr;

const INTRO: &[&str] = &[
    "Thanks for trying screenprinter.",
    "",
    "Every screen you see is printed with the settings given on the command line.",
    "Run with --help to see what can be changed.",
    "",
    "Press any key to continue.",
];

const MENU_PROMPT: &[&str] = &[
    "This is a menu screen.",
    "",
    "Use the Up and Down arrows to move, and Enter to choose.",
    "Menus can have as many options as you like, but when centering or framing",
    "make sure they fit inside the screen width.",
    "",
];

const MENU_OPTIONS: &[&str] = &["Index 0 - Option 1", "Index 1 - Option 2", "Index 2 - Option 3"];

fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = command().get_matches();

    let mut settings = RenderSettings::for_terminal();
    settings
        .apply(&file_settings(&matches)?.merged_with(cli_settings(&matches)))
        .context("invalid render settings")?;

    let session = TerminalSession::start(matches.get_flag("alternate-screen"))?;
    let mut printer = ScreenRenderer::for_terminal(settings)?;
    let outcome = run_demo(&mut printer);
    drop(session);

    outcome
}

fn run_demo(printer: &mut ScreenRenderer<TerminalOutput, TerminalKeys>) -> Result<()> {
    printer.print_screen(INTRO, true)?;
    printer.read_key()?;

    let selected = printer.print_menu_get_index_selected(MENU_PROMPT, MENU_OPTIONS, true, 0)?;

    let outro = [
        "You selected:",
        MENU_OPTIONS[selected],
        "",
        "Press any key to exit.",
    ];
    printer.print_screen(&outro, true)?;
    printer.read_key()?;
    Ok(())
}

fn command() -> Command {
    let command = Command::new("screenprinter")
        .version(screenprinter::VERSION)
        .about("Typewriter-style screens and arrow-key menus in the terminal")
        .arg(
            Arg::new("width")
                .long("width")
                .help("Screen width used for horizontal centering [default: terminal width]")
                .value_parser(value_parser!(u16).range(1..)),
        )
        .arg(
            Arg::new("sleep-ms")
                .long("sleep-ms")
                .help("Delay in milliseconds used by the delayed write styles")
                .value_parser(value_parser!(u64)),
        )
        .arg(named_arg::<WriteStyle>("write-style", WriteStyle::NAMES))
        .arg(named_arg::<Alignment>("alignment", Alignment::NAMES))
        .arg(named_arg::<ArrowPosition>("arrows", &ArrowPosition::NAMES))
        .arg(named_arg::<BorderStyle>("border", BorderStyle::NAMES))
        .arg(named_arg::<BorderGlyphs>("glyphs", &BorderGlyphs::NAMES))
        .arg(
            Arg::new("alternate-screen")
                .long("alternate-screen")
                .help("Draw on the terminal's alternate screen")
                .action(ArgAction::SetTrue),
        );

    #[cfg(feature = "config")]
    let command = command.arg(
        Arg::new("config")
            .long("config")
            .value_name("PATH")
            .help("Settings file to load [default: <config dir>/screenprinter/config.toml]")
            .value_parser(value_parser!(std::path::PathBuf)),
    );

    command
}

fn named_arg<T>(name: &'static str, names: &'static [&'static str]) -> Arg
where
    T: FromStr<Err = screenprinter::ScreenError> + Clone + Send + Sync + 'static,
{
    Arg::new(name)
        .long(name)
        .value_name("NAME")
        .help(format!("One of: {}", names.join(", ")))
        .value_parser(|value: &str| value.parse::<T>())
}

fn cli_settings(matches: &ArgMatches) -> SettingsUpdate {
    SettingsUpdate {
        sleep_interval_ms: matches.get_one::<u64>("sleep-ms").copied(),
        screen_width: matches.get_one::<u16>("width").copied(),
        write_style: matches.get_one::<WriteStyle>("write-style").copied(),
        alignment: matches.get_one::<Alignment>("alignment").copied(),
        arrow_position: matches.get_one::<ArrowPosition>("arrows").copied(),
        border_style: matches.get_one::<BorderStyle>("border").copied(),
        border_glyphs: matches.get_one::<BorderGlyphs>("glyphs").copied(),
    }
}

#[cfg(feature = "config")]
fn file_settings(matches: &ArgMatches) -> Result<SettingsUpdate> {
    let update = match matches.get_one::<std::path::PathBuf>("config") {
        Some(path) => screenprinter::config::load(path)?,
        None => screenprinter::config::load_default()?,
    };
    Ok(update)
}

#[cfg(not(feature = "config"))]
fn file_settings(_matches: &ArgMatches) -> Result<SettingsUpdate> {
    Ok(SettingsUpdate::default())
}
