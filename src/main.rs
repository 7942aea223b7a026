mod clipboard;
mod config;
mod errors;
mod generators;
mod password;
mod state;
mod strength;

use std::io::{ self, BufRead, Write };
use std::path::PathBuf;
use std::time::{ Duration, Instant };

use clap::Parser;

use crate::clipboard::{ Clipboard, SystemClipboard };
use crate::config::Config;
use crate::generators::CharacterClass;
use crate::state::{ GeneratorState, MAX_LENGTH };

#[derive(Parser, Debug)]
#[command(name = "oktogen", version, about = "Password generator with a strength indicator")]
struct Cli {
    /// Password length
    #[arg(short = 'L', long, value_parser = clap::value_parser!(u8).range(0..=20))]
    length: Option<u8>,

    #[arg(short = 'u', long)]
    no_uppercase: bool,

    #[arg(short = 'l', long)]
    no_lowercase: bool,

    #[arg(short = 'n', long)]
    no_numbers: bool,

    #[arg(short = 's', long)]
    no_specials: bool,

    /// Also include symbols when the config leaves them off
    #[arg(short = 'S', long, conflicts_with = "no_specials")]
    specials: bool,

    /// Copy the generated password to the clipboard
    #[arg(short = 'c', long)]
    copy: bool,

    /// Print the form state as JSON
    #[arg(short = 'j', long)]
    json: bool,

    /// Run the line-oriented generator form
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Config file, defaults to <config dir>/oktogen/config.json
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut state = build_state(&cli, &config);
    let mut clipboard = if cli.copy || cli.interactive {
        SystemClipboard::new().ok()
    } else {
        None
    };
    let mut stdout = io::stdout();

    let result = if cli.interactive {
        let started = Instant::now();
        run_interactive(
            &mut state,
            io::stdin().lock(),
            &mut stdout,
            &mut clipboard,
            || started.elapsed(),
        )
    } else {
        run_once(&mut state, &cli, &mut clipboard, &mut stdout)
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn build_state(cli: &Cli, config: &Config) -> GeneratorState {
    let mut state = GeneratorState::from_config(config);

    if let Some(length) = cli.length {
        state.set_length(length as usize);
    }

    let overrides = [
        (cli.no_uppercase, CharacterClass::Uppercase),
        (cli.no_lowercase, CharacterClass::Lowercase),
        (cli.no_numbers, CharacterClass::Numbers),
        (cli.no_specials, CharacterClass::Symbols),
    ];
    for (disabled, class) in overrides {
        if disabled {
            state.set_option(class, false);
        }
    }
    if cli.specials {
        state.set_option(CharacterClass::Symbols, true);
    }

    state
}

fn run_once<C, W>(
    state: &mut GeneratorState,
    cli: &Cli,
    clipboard: &mut C,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>>
where
    C: Clipboard + ?Sized,
    W: Write,
{
    state.generate(&mut rand::rng())?;

    let copied = cli.copy && state.copy(clipboard, Duration::ZERO);

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&*state)?)?;
    } else {
        writeln!(out, "{}", state.password())?;
        writeln!(out, "STRENGTH: {}", state.strength())?;
        if copied {
            writeln!(out, "Copied.")?;
        }
    }

    Ok(())
}

const HELP: &str = "\
commands:
  g          generate a new password
  c          copy the password to the clipboard
  l <0-20>   set the length
  u w n s    toggle uppercase, lowercase, numbers, symbols
  p          print the form
  j          print the form as JSON
  h          this help
  q          quit";

/// Line-oriented generator form. `clock` is the time since the form opened;
/// due copy resets fire before each command runs.
fn run_interactive<R, W, C, F>(
    state: &mut GeneratorState,
    input: R,
    out: &mut W,
    clipboard: &mut C,
    clock: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: BufRead,
    W: Write,
    C: Clipboard + ?Sized,
    F: Fn() -> Duration,
{
    render(state, out)?;
    writeln!(out, "{}", HELP)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let now = clock();
        state.tick(now);

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("g") => match state.generate(&mut rand::rng()) {
                Ok(_) => render(state, out)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Some("c") => {
                if state.copy(clipboard, now) {
                    writeln!(out, "Copied.")?;
                }
            }
            Some("l") => match parts.next().and_then(|n| n.parse::<usize>().ok()) {
                Some(length) if length <= MAX_LENGTH => {
                    state.set_length(length);
                    render(state, out)?;
                }
                _ => writeln!(out, "Usage: l <0-{}>", MAX_LENGTH)?,
            },
            Some(key @ ("u" | "w" | "n" | "s")) => {
                state.toggle_option(class_for_key(key));
                render(state, out)?;
            }
            Some("p") => render(state, out)?,
            Some("j") => writeln!(out, "{}", serde_json::to_string_pretty(&*state)?)?,
            Some("h") => writeln!(out, "{}", HELP)?,
            Some("q") => break,
            Some(other) => writeln!(out, "Unknown command: {}", other)?,
            None => (),
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    Ok(())
}

fn class_for_key(key: &str) -> CharacterClass {
    match key {
        "u" => CharacterClass::Uppercase,
        "w" => CharacterClass::Lowercase,
        "n" => CharacterClass::Numbers,
        _ => CharacterClass::Symbols,
    }
}

fn render<W: Write>(state: &GeneratorState, out: &mut W) -> io::Result<()> {
    let copied = if state.copied() { "  [copied]" } else { "" };
    writeln!(out, "{}{}", state.password(), copied)?;
    writeln!(out, "Character Length: {}", state.length())?;

    let options = state.options();
    for class in CharacterClass::ALL {
        let mark = if options.is_enabled(class) { 'x' } else { ' ' };
        writeln!(out, "[{}] Include {}", mark, class)?;
    }

    writeln!(out, "STRENGTH: {}", state.strength())
}
