mod input;
mod render;

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use xo_engine::config::{ConfigManager, GameConfig, Validate};
use xo_engine::game::{GameMode, LocalSession, SessionRng};
use xo_engine::log;
use xo_engine::logger::{self, LogTarget};

use input::{Command, parse_command};
use render::{game_over_banner, render_board};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    HumanVsAi,
    HumanVsHuman,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::HumanVsAi => GameMode::HumanVsAi,
            ModeArg::HumanVsHuman => GameMode::HumanVsHuman,
        }
    }
}

#[derive(Parser)]
#[command(name = "xo_console", about = "Play N-in-a-row in the terminal")]
struct Args {
    #[arg(long, default_value = "xo_console.yaml")]
    config: String,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(long)]
    win_length: Option<usize>,
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_overrides(&self, mut config: GameConfig) -> GameConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(win_length) = self.win_length {
            config.win_length = win_length;
        }
        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger_with_target(prefix, LogTarget::Stderr);

    let config_manager: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&args.config);
    let config = args.apply_overrides(config_manager.get_config()?);
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Using {:?} with seed {}", config.mode, rng.seed());

    let mut session = LocalSession::new(config, rng)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", render_board(session.game().board()));
    print_prompt(&mut stdout, &session)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::NewGame) => session.restart()?,
            Ok(Command::Place(pos)) => {
                if let Err(e) = session.handle_cell(pos) {
                    println!("{}", e);
                }
            }
            Err(e) => println!("{}", e),
        }

        print!("{}", render_board(session.game().board()));
        print_prompt(&mut stdout, &session)?;
    }

    Ok(())
}

fn print_prompt<R: xo_engine::game::CoordinateSource>(
    stdout: &mut io::Stdout,
    session: &LocalSession<R>,
) -> io::Result<()> {
    match game_over_banner(session.status()) {
        Some(banner) => write!(stdout, "*** {} ***\n[n]ew game or [q]uit: ", banner)?,
        None => write!(stdout, "{:?} to move (x y): ", session.current_side())?,
    }
    stdout.flush()
}
