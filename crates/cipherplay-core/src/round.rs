//! Round controller — orchestrates one play-through of a puzzle
//!
//! A `Round` owns the message/ciphertext pair and the mutable
//! `RoundState` for exactly one play session. It is driven by discrete
//! external events arriving serially — guess submissions, hint requests,
//! one-second timer ticks — and returns an explicit outcome value for
//! every event.
//!
//! # State machine
//!
//! ```text
//! Active ──correct guess──────────▶ Succeeded
//!   │
//!   ├────attempts exhausted───────▶ FailedExhausted
//!   │
//!   └────timer reaches zero───────▶ FailedTimeout
//! ```
//!
//! All three non-Active phases are terminal and mutually exclusive. The
//! active-phase guard makes termination idempotent: a late tick or stray
//! submission after the round has ended is answered with `Ignored` and
//! changes nothing, so exactly one terminal transition happens per round
//! no matter how events race at the boundary.

use crate::cipher::{encrypt, Shift};
use crate::hints::build_ladder;
use crate::normalizer::{normalize, puzzle_fingerprint};

/// Default number of guesses per round
pub const MAX_ATTEMPTS: u32 = 5;

/// Default round length in seconds (4 minutes)
pub const ROUND_DURATION_SECS: u32 = 240;

/// Per-round limits, reset to these values when a round starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundConfig {
    pub max_attempts: u32,
    pub duration_secs: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        RoundConfig {
            max_attempts: MAX_ATTEMPTS,
            duration_secs: ROUND_DURATION_SECS,
        }
    }
}

/// Lifecycle phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Accepting guesses, hints, and ticks
    Active,
    /// Terminal: guess matched the message
    Succeeded,
    /// Terminal: all attempts used without a match
    FailedExhausted,
    /// Terminal: the countdown reached zero
    FailedTimeout,
}

/// Snapshot of the mutable round state
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundState {
    pub attempts_remaining: u32,
    pub time_remaining_secs: u32,
    pub hints_used: u32,
    pub phase: Phase,
}

/// Result of a guess submission
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GuessOutcome {
    /// Normalized guess matched the normalized message; round succeeded
    Correct,
    /// Wrong guess with attempts still left
    Incorrect { attempts_remaining: u32 },
    /// Wrong guess consumed the final attempt; round failed
    Exhausted,
    /// Round was already over — nothing changed
    Ignored,
}

/// Result of a one-second timer tick
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TickOutcome {
    /// Countdown still running
    Running { time_remaining_secs: u32 },
    /// This tick reached zero; round failed on time
    Expired,
    /// Round was already over — nothing changed
    Ignored,
}

/// Result of a hint request
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HintOutcome {
    /// The next rung of the ladder
    Revealed(String),
    /// Sentinel: ladder spent, or round already over. Returned forever
    /// thereafter; a previously revealed hint is never repeated.
    NoMoreHints,
}

// ── Transcript ────────────────────────────────────────────

/// One processed event and the state it left behind.
///
/// Guess text is deliberately not recorded — a guess is ephemeral and
/// exists only for the comparison.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TranscriptEntry {
    /// Sequential event number (0-indexed)
    pub sequence: u64,
    pub event: RoundEvent,
    pub state_after: RoundState,
}

/// The kind of event a transcript entry records
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RoundEvent {
    Guess { matched: bool },
    Tick,
    Hint { rung: u32 },
}

/// Append-only log of every state transition in a round
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Transcript {
    pub entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the transcript for shell-side logging
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

// ── Round ─────────────────────────────────────────────────

/// One complete play session from a fresh message/shift pair to a
/// terminal outcome.
#[derive(Debug, Clone)]
pub struct Round {
    message: String,
    normalized_message: String,
    encrypted: String,
    fingerprint: String,
    hints: Vec<String>,
    state: RoundState,
    transcript: Transcript,
    sequence: u64,
}

impl Round {
    /// Start a round: store the message, derive the ciphertext and hint
    /// ladder once, and reset the state to the configured limits.
    pub fn new(message: impl Into<String>, shift: Shift, config: RoundConfig) -> Self {
        let message = message.into();
        let encrypted = encrypt(&message, shift);
        let normalized_message = normalize(&message);
        let fingerprint = puzzle_fingerprint(&message, shift);
        let hints = build_ladder(&message);

        Round {
            message,
            normalized_message,
            encrypted,
            fingerprint,
            hints,
            state: RoundState {
                attempts_remaining: config.max_attempts,
                time_remaining_secs: config.duration_secs,
                hints_used: 0,
                phase: Phase::Active,
            },
            transcript: Transcript::default(),
            sequence: 0,
        }
    }

    /// Start a round with the default limits (5 attempts, 240 seconds)
    pub fn with_defaults(message: impl Into<String>, shift: Shift) -> Self {
        Self::new(message, shift, RoundConfig::default())
    }

    /// Compare a raw guess against the message.
    ///
    /// Normalization absorbs case, whitespace, and control-character
    /// differences, so `"veni   VIDI vici"` matches `"Veni vidi vici"`.
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        if !self.is_active() {
            return GuessOutcome::Ignored;
        }

        let matched = normalize(raw) == self.normalized_message;
        let outcome = if matched {
            self.state.phase = Phase::Succeeded;
            GuessOutcome::Correct
        } else {
            self.state.attempts_remaining = self.state.attempts_remaining.saturating_sub(1);
            if self.state.attempts_remaining == 0 {
                self.state.phase = Phase::FailedExhausted;
                GuessOutcome::Exhausted
            } else {
                GuessOutcome::Incorrect {
                    attempts_remaining: self.state.attempts_remaining,
                }
            }
        };
        self.record(RoundEvent::Guess { matched });
        outcome
    }

    /// Advance the countdown by one elapsed second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_active() {
            return TickOutcome::Ignored;
        }

        self.state.time_remaining_secs = self.state.time_remaining_secs.saturating_sub(1);
        let outcome = if self.state.time_remaining_secs == 0 {
            self.state.phase = Phase::FailedTimeout;
            TickOutcome::Expired
        } else {
            TickOutcome::Running {
                time_remaining_secs: self.state.time_remaining_secs,
            }
        };
        self.record(RoundEvent::Tick);
        outcome
    }

    /// Reveal the next rung of the hint ladder.
    pub fn request_hint(&mut self) -> HintOutcome {
        if !self.is_active() {
            return HintOutcome::NoMoreHints;
        }
        let Some(hint) = self.hints.get(self.state.hints_used as usize).cloned() else {
            return HintOutcome::NoMoreHints;
        };

        self.state.hints_used += 1;
        self.record(RoundEvent::Hint {
            rung: self.state.hints_used,
        });
        HintOutcome::Revealed(hint)
    }

    fn record(&mut self, event: RoundEvent) {
        self.transcript.entries.push(TranscriptEntry {
            sequence: self.sequence,
            event,
            state_after: self.state,
        });
        self.sequence += 1;
    }

    // ── Accessors ──────────────────────────────────────

    /// The ciphertext shown to the player
    pub fn encrypted(&self) -> &str {
        &self.encrypted
    }

    /// The original plaintext — for the reveal after a lost round
    pub fn message(&self) -> &str {
        &self.message
    }

    /// SHA-256 puzzle fingerprint (stable across presentation differences)
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_active(&self) -> bool {
        self.state.phase == Phase::Active
    }

    /// Total rungs in this message's hint ladder
    pub fn hints_available(&self) -> usize {
        self.hints.len()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
