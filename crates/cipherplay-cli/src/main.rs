use std::io::{self, BufRead};
use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cipherplay_core::{
    decrypt, encrypt, normalize, GuessOutcome, HintOutcome, Round, RoundConfig, Shift,
    TickOutcome, MAX_ATTEMPTS, ROUND_DURATION_SECS,
};

/// Built-in puzzle catalog. The engine takes whatever message the shell
/// supplies; this list is shell policy, not an engine concern.
const SECRET_MESSAGES: &[&str] = &[
    "The eagle has landed",
    "All roads lead to Rome",
    "Fortune favors the bold",
    "Veni vidi vici",
    "Carpe diem seize the day",
    "Knowledge is power",
    "The die is cast",
    "Beware the ides of March",
];

/// cipherplay — crack the Caesar cipher
///
/// Encrypt, decrypt, and play a timed code-cracking round.
#[derive(Parser)]
#[command(name = "cipherplay", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a Caesar shift
    Encrypt {
        /// Plaintext to encrypt
        text: String,
        /// Shift amount (any integer; reduced mod 26)
        #[arg(long, allow_hyphen_values = true)]
        shift: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decrypt text encrypted with a known shift
    Decrypt {
        /// Ciphertext to decrypt
        text: String,
        /// Shift the text was encrypted with
        #[arg(long, allow_hyphen_values = true)]
        shift: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Canonicalize text the way guesses are compared
    Normalize {
        /// Text to normalize
        text: String,
    },

    /// Print the alphabet mapping for a shift
    Table {
        /// Shift amount (any integer; reduced mod 26)
        #[arg(long, allow_hyphen_values = true)]
        shift: f64,
    },

    /// Play one timed code-cracking round
    Play {
        /// Fixed message instead of a random catalog pick
        #[arg(long)]
        message: Option<String>,
        /// Fixed shift instead of a random one from 1..=25
        #[arg(long, allow_hyphen_values = true)]
        shift: Option<f64>,
        /// Seed for reproducible message/shift selection
        #[arg(long)]
        seed: Option<u64>,
        /// Guesses allowed before the round is lost
        #[arg(long, default_value_t = MAX_ATTEMPTS)]
        attempts: u32,
        /// Round length in seconds
        #[arg(long, default_value_t = ROUND_DURATION_SECS)]
        duration: u32,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Encrypt { text, shift, json } => cmd_encrypt(&text, shift, json),
        Commands::Decrypt { text, shift, json } => cmd_decrypt(&text, shift, json),
        Commands::Normalize { text } => {
            println!("{}", normalize(&text));
            0
        }
        Commands::Table { shift } => cmd_table(shift),
        Commands::Play {
            message,
            shift,
            seed,
            attempts,
            duration,
        } => cmd_play(message, shift, seed, attempts, duration),
        Commands::Version => {
            println!(
                "cipherplay {} (cipherplay-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
            0
        }
    };

    process::exit(exit_code);
}

// ── Utility commands ──────────────────────────────────────

fn cmd_encrypt(text: &str, shift: f64, json: bool) -> i32 {
    let shift = match parse_shift(shift) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let ciphertext = encrypt(text, shift);
    if json {
        let out = serde_json::json!({
            "ciphertext": ciphertext,
            "shift": shift.value(),
        });
        println!("{}", out);
    } else {
        println!("{}", ciphertext);
    }
    0
}

fn cmd_decrypt(text: &str, shift: f64, json: bool) -> i32 {
    let shift = match parse_shift(shift) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let plaintext = decrypt(text, shift);
    if json {
        let out = serde_json::json!({
            "plaintext": plaintext,
            "shift": shift.value(),
        });
        println!("{}", out);
    } else {
        println!("{}", plaintext);
    }
    0
}

fn cmd_table(shift: f64) -> i32 {
    let shift = match parse_shift(shift) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let shifted = encrypt(alphabet, shift);
    println!("Alphabet mapping (shift {}):", shift);
    println!("  {}", spaced(alphabet));
    println!("  {}", spaced(&shifted).yellow().bold());
    0
}

fn spaced(s: &str) -> String {
    let chars: Vec<String> = s.chars().map(|c| c.to_string()).collect();
    chars.join(" ")
}

/// Shell boundary: shift arrives as a raw number and must be finite and
/// integer-valued. Exit code 2 mirrors a usage error.
fn parse_shift(raw: f64) -> Result<Shift, i32> {
    Shift::try_from_f64(raw).map_err(|e| {
        eprintln!("{} {}", "error:".red().bold(), e);
        2
    })
}

// ── Play ──────────────────────────────────────────────────

fn cmd_play(
    message: Option<String>,
    shift: Option<f64>,
    seed: Option<u64>,
    attempts: u32,
    duration: u32,
) -> i32 {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let message = message
        .unwrap_or_else(|| SECRET_MESSAGES[rng.gen_range(0..SECRET_MESSAGES.len())].to_string());
    let shift = match shift {
        Some(raw) => match parse_shift(raw) {
            Ok(s) => s,
            Err(code) => return code,
        },
        // 1..=25: shift 0 would show the plaintext outright
        None => Shift::new(rng.gen_range(1..=25)),
    };

    let mut round = Round::new(
        message,
        shift,
        RoundConfig {
            max_attempts: attempts,
            duration_secs: duration,
        },
    );

    println!("{}", "Crack the code!".bold());
    println!(
        "Encrypted message: {}",
        round.encrypted().yellow().bold()
    );
    println!("Puzzle id: {}", &round.fingerprint()[..12]);
    println!("Type your guess, 'hint' for a hint, or 'quit' to give up.");
    print_status(&round);

    let stdin = io::stdin();
    let mut last = Instant::now();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        // Wall-clock seconds since the previous event become timer ticks
        let elapsed = last.elapsed().as_secs();
        last = Instant::now();
        for _ in 0..elapsed {
            if matches!(round.tick(), TickOutcome::Expired) {
                println!("{}", "Time's up!".red().bold());
                return reveal_and_fail(&round);
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" => return reveal_and_fail(&round),
            "hint" => match round.request_hint() {
                HintOutcome::Revealed(hint) => {
                    println!("{} {}", "Hint:".cyan().bold(), hint);
                }
                HintOutcome::NoMoreHints => println!("{}", "No more hints.".cyan()),
            },
            guess => match round.submit_guess(guess) {
                GuessOutcome::Correct => {
                    println!("{}", "Correct! You cracked the code!".green().bold());
                    return 0;
                }
                GuessOutcome::Incorrect { attempts_remaining } => {
                    println!(
                        "{} {} attempt{} remaining.",
                        "Incorrect!".red().bold(),
                        attempts_remaining,
                        if attempts_remaining == 1 { "" } else { "s" }
                    );
                }
                GuessOutcome::Exhausted => {
                    println!("{}", "No attempts left!".red().bold());
                    return reveal_and_fail(&round);
                }
                GuessOutcome::Ignored => break,
            },
        }
        print_status(&round);
    }

    // EOF before a terminal outcome counts as giving up
    reveal_and_fail(&round)
}

fn reveal_and_fail(round: &Round) -> i32 {
    println!(
        "The original message was: {}",
        round.message().bold()
    );
    1
}

fn print_status(round: &Round) {
    let state = round.state();
    let time = format_time(state.time_remaining_secs);
    let time = if state.time_remaining_secs > 120 {
        time.green()
    } else if state.time_remaining_secs > 60 {
        time.yellow()
    } else {
        time.red()
    };
    println!(
        "[{} left | {} attempts | {} hints used]",
        time, state.attempts_remaining, state.hints_used
    );
}

fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
