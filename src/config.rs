//! Launch configuration: command-line flags and route strings.
//!
//! Routes follow the `/<automaton>/:c<cols>r<rows>` scheme, e.g.
//! `/gol/:c64r32`. The elementary automaton has no free row count (its
//! height is half its width), so its `r` field carries the rule number
//! instead: `/eca/:c101r90`.

use std::str::FromStr;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::application::SessionConfig;
use crate::domain::{Automaton, WolframCode};

/// Largest accepted side length. The grid is meant for interactive
/// editing, not large-scale simulation.
pub const MAX_SIDE: i64 = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown automaton '{0}' (expected one of gol, ww, bb, eca)")]
    UnknownAutomaton(String),

    #[error("malformed route '{0}' (expected /<automaton>/:c<cols>r<rows>)")]
    MalformedRoute(String),

    #[error("{field} must be an integer between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Automaton selector as it appears on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AutomatonKind {
    /// Conway's Game of Life
    Gol,
    /// Wireworld
    Ww,
    /// Brian's Brain
    Bb,
    /// Elementary (1D) automaton stacked as rows
    Eca,
}

impl FromStr for AutomatonKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gol" => Ok(Self::Gol),
            "ww" => Ok(Self::Ww),
            "bb" => Ok(Self::Bb),
            "eca" => Ok(Self::Eca),
            other => Err(ConfigError::UnknownAutomaton(other.to_owned())),
        }
    }
}

/// Interactive cellular automata on a toroidal grid
#[derive(Parser, Debug, Clone)]
#[command(name = "automata", version)]
pub struct Cli {
    /// Automaton to run
    #[arg(value_enum, default_value_t = AutomatonKind::Gol)]
    pub automaton: AutomatonKind,

    /// Grid rows (ignored by eca, whose height is cols / 2)
    #[arg(long, default_value_t = 32, allow_negative_numbers = true)]
    pub rows: i64,

    /// Grid columns
    #[arg(long, default_value_t = 32, allow_negative_numbers = true)]
    pub cols: i64,

    /// Wolfram code for eca
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub rule: i64,

    /// Route string such as /gol/:c64r32; overrides the other options
    #[arg(long)]
    pub route: Option<String>,
}

impl Cli {
    /// Resolve flags (or the route, when given) into a validated launch config
    pub fn launch_config(&self) -> Result<LaunchConfig, ConfigError> {
        match &self.route {
            Some(route) => route.parse(),
            None => Ok(LaunchConfig {
                kind: self.automaton,
                rows: self.rows,
                cols: self.cols,
                rule: self.rule,
            }),
        }
    }
}

/// Unvalidated launch request, as typed by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchConfig {
    pub kind: AutomatonKind,
    pub rows: i64,
    pub cols: i64,
    pub rule: i64,
}

impl FromStr for LaunchConfig {
    type Err = ConfigError;

    fn from_str(route: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedRoute(route.to_owned());

        let (slug, params) = route
            .trim_start_matches('/')
            .split_once('/')
            .ok_or_else(malformed)?;
        let kind: AutomatonKind = slug.parse()?;

        let (cols, rows) = params
            .trim_start_matches(':')
            .strip_prefix('c')
            .and_then(|rest| rest.split_once('r'))
            .ok_or_else(malformed)?;
        let cols: i64 = cols.parse().map_err(|_| malformed())?;
        let rows: i64 = rows.parse().map_err(|_| malformed())?;

        Ok(match kind {
            AutomatonKind::Eca => LaunchConfig { kind, rows: 0, cols, rule: rows },
            _ => LaunchConfig { kind, rows, cols, rule: 0 },
        })
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<usize, ConfigError> {
    if (min..=max).contains(&value) {
        Ok(value as usize)
    } else {
        Err(ConfigError::OutOfRange { field, value, min, max })
    }
}

impl LaunchConfig {
    /// Validate sizes and rule before any engine object is built
    pub fn validate(&self) -> Result<SessionConfig, ConfigError> {
        match self.kind {
            AutomatonKind::Eca => {
                let cols = check_range("cols", self.cols, 2, MAX_SIDE)?;
                let code = WolframCode::new(self.rule).map_err(|_| ConfigError::OutOfRange {
                    field: "rule",
                    value: self.rule,
                    min: 0,
                    max: 255,
                })?;
                let automaton = Automaton::Elementary(code);
                Ok(SessionConfig {
                    automaton,
                    rows: automaton.rows_for(0, cols),
                    cols,
                })
            }
            kind => {
                let rows = check_range("rows", self.rows, 1, MAX_SIDE)?;
                let cols = check_range("cols", self.cols, 1, MAX_SIDE)?;
                let automaton = match kind {
                    AutomatonKind::Ww => Automaton::Wireworld,
                    AutomatonKind::Bb => Automaton::BriansBrain,
                    _ => Automaton::GameOfLife,
                };
                Ok(SessionConfig { automaton, rows, cols })
            }
        }
    }
}
