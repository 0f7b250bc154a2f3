// Shrthnd CLI
// Terminal front end: typing simulation and store inspection without an OS hook

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use shrthnd_core::{
    available_layouts, detect, layout, ExpansionOutcome, KeyEvent, LayoutTranscoder, Processed,
    ProfileStore, Settings, ShorthandController, TextInjector,
};

/// Layout-aware shorthand expander
#[derive(Parser, Debug)]
#[command(name = "shrthnd")]
#[command(about = "Layout-aware shorthand expander", long_about = None)]
struct Args {
    /// TOML settings file (default: ~/.config/shrthnd/settings.toml)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read lines from stdin and show transcoding and expansion decisions
    Run {
        /// Override the active layout
        #[arg(short, long)]
        layout: Option<String>,

        /// Start on this profile
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// List available layouts with their efficiency scores
    Layouts,
    /// List stored profiles and their entries
    Profiles,
}

/// Injector that narrates edit operations on stdout, standing in for a
/// platform backend during simulation.
struct EchoInjector;

impl TextInjector for EchoInjector {
    fn delete(&mut self, count: usize) {
        println!("  -> delete {count} chars");
    }

    fn insert(&mut self, text: &str) {
        println!("  -> insert {text:?}");
    }
}

fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Settings::load_default().context("loading default settings"),
    }
}

fn load_profiles(settings: &Settings) -> ProfileStore {
    let path = settings
        .profiles_path()
        .map(PathBuf::from)
        .or_else(ProfileStore::default_path);
    match path {
        Some(path) => ProfileStore::load_or_default(path),
        None => ProfileStore::with_defaults(),
    }
}

/// Pick the startup layout: CLI flag, then settings, then locale
/// suggestion, then the hard-coded default.
fn initial_layout(flag: Option<&str>, settings: &Settings) -> String {
    flag.map(str::to_string)
        .or_else(|| settings.layout().map(str::to_string))
        .or_else(|| detect::suggest_layout_from_locale().map(str::to_string))
        .unwrap_or_else(|| shrthnd_core::DEFAULT_LAYOUT.to_string())
}

fn run_simulation(settings: &Settings, layout_flag: Option<&str>, profile: Option<&str>) -> anyhow::Result<()> {
    let layout_name = initial_layout(layout_flag, settings);
    let transcoder = LayoutTranscoder::new(&layout_name)
        .with_context(|| format!("layout {layout_name:?}"))?;
    let store = load_profiles(settings);

    let controller = ShorthandController::with_suppress_timeout(
        Box::new(EchoInjector),
        transcoder,
        store,
        settings.suppress_timeout(),
    );
    if let Some(name) = profile {
        controller.switch_profile(name);
    }

    println!(
        "layout: {}  profile: {}  (type words, Ctrl-D to quit)",
        controller.layout_name(),
        controller.active_profile_name()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        for c in line.chars() {
            let event = match c {
                ' ' => KeyEvent::Space,
                '\n' => KeyEvent::Enter,
                _ => KeyEvent::Char(c),
            };
            match controller.on_key_event(event) {
                Processed::Boundary(ExpansionOutcome::Expanded { deleted, inserted }) => {
                    // Model the synthetic re-delivery a real hook would see.
                    for _ in 0..deleted {
                        controller.on_key_event(KeyEvent::Backspace);
                    }
                    for ic in inserted.chars() {
                        let ev = match ic {
                            ' ' => KeyEvent::Space,
                            '\n' => KeyEvent::Enter,
                            _ => KeyEvent::Char(ic),
                        };
                        controller.on_key_event(ev);
                    }
                }
                Processed::Buffered(glyph) if glyph != c => {
                    println!("  ({c} transcodes to {glyph})");
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn list_layouts() {
    println!("Available layouts:");
    for name in available_layouts() {
        match layout::get(name).ok().and_then(|t| t.score()) {
            Some(score) => println!("  {name}  (score {score})"),
            None => println!("  {name}"),
        }
    }
}

fn list_profiles(settings: &Settings) {
    let store = load_profiles(settings);
    for name in store.profile_names() {
        let marker = if name == store.active_name() { "*" } else { " " };
        println!("{marker} {name}");
    }
}


fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let settings = load_settings(&args)?;

    match args.command {
        Some(Command::Run { layout, profile }) => {
            run_simulation(&settings, layout.as_deref(), profile.as_deref())
        }
        Some(Command::Layouts) => {
            list_layouts();
            Ok(())
        }
        Some(Command::Profiles) => {
            list_profiles(&settings);
            Ok(())
        }
        None => run_simulation(&settings, None, None),
    }
}
