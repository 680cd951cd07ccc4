//! Search configuration and the controller handshake
//!
//! The controller sends one comma-separated line before the first turn:
//!
//! ```text
//! color,limit,minimax,caching,ordering
//! ```
//!
//! - `color`: 1 for dark (moves first), 2 for light
//! - `limit`: depth limit in plies, negative for unbounded
//! - `minimax`: 1 for minimax, 0 for alpha-beta
//! - `caching`, `ordering`: 1 on, 0 off
//!
//! # Example
//!
//! ```
//! use othello::config::{Algorithm, DepthLimit, Handshake};
//! use othello::Player;
//!
//! let handshake: Handshake = "2,4,0,1,1".parse().unwrap();
//! assert_eq!(handshake.color, Player::Light);
//! assert_eq!(handshake.config.depth_limit, DepthLimit::Plies(4));
//! assert_eq!(handshake.config.algorithm, Algorithm::AlphaBeta);
//! assert!(handshake.config.caching && handshake.config.ordering);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::board::Player;
use crate::eval::Evaluation;

/// Number of comma-separated handshake fields
const HANDSHAKE_FIELDS: usize = 5;

/// Rejected configuration input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Wrong number of handshake fields
    #[error("expected {expected} comma-separated fields, got {0}", expected = HANDSHAKE_FIELDS)]
    FieldCount(usize),

    /// A field that is not an integer
    #[error("{field} is not an integer: {value:?}")]
    NotAnInteger { field: &'static str, value: String },

    /// Player color other than 1 or 2
    #[error("unknown player color {0} (expected 1 or 2)")]
    UnknownColor(i64),

    /// On/off flag other than 0 or 1
    #[error("{field} flag must be 0 or 1, got {value}")]
    InvalidFlag { field: &'static str, value: i64 },
}

/// Tree search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Plain minimax, every child of every node is searched
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => f.write_str("minimax"),
            Algorithm::AlphaBeta => f.write_str("alpha-beta"),
        }
    }
}

/// Search depth budget in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthLimit {
    /// Search until no legal move remains
    #[default]
    Unbounded,
    /// Hard ply cutoff
    Plies(u32),
}

impl DepthLimit {
    /// Remaining plies, `None` when unbounded.
    #[inline]
    pub fn plies(self) -> Option<u32> {
        match self {
            DepthLimit::Unbounded => None,
            DepthLimit::Plies(n) => Some(n),
        }
    }
}

/// Negative limits mean unbounded.
impl From<i64> for DepthLimit {
    fn from(limit: i64) -> Self {
        match u32::try_from(limit) {
            Ok(n) => DepthLimit::Plies(n),
            Err(_) if limit < 0 => DepthLimit::Unbounded,
            Err(_) => DepthLimit::Plies(u32::MAX),
        }
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthLimit::Unbounded => f.write_str("unbounded"),
            DepthLimit::Plies(n) => write!(f, "{n}"),
        }
    }
}

/// Everything the move selector needs besides the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub depth_limit: DepthLimit,
    pub algorithm: Algorithm,
    /// Consult and fill the transposition cache
    pub caching: bool,
    /// Search children best-first (most useful with alpha-beta)
    pub ordering: bool,
    /// Scoring at depth cutoffs
    pub evaluation: Evaluation,
}

impl SearchConfig {
    #[must_use]
    pub fn new(depth_limit: DepthLimit, algorithm: Algorithm) -> Self {
        Self {
            depth_limit,
            algorithm,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_caching(mut self, caching: bool) -> Self {
        self.caching = caching;
        self
    }

    #[must_use]
    pub fn with_ordering(mut self, ordering: bool) -> Self {
        self.ordering = ordering;
        self
    }

    #[must_use]
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }
}

/// Parsed handshake line: which color we play and how to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handshake {
    pub color: Player,
    pub config: SearchConfig,
}

impl FromStr for Handshake {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(',').map(str::trim).collect();
        if fields.len() != HANDSHAKE_FIELDS {
            return Err(ConfigError::FieldCount(fields.len()));
        }

        let color_code = parse_int("color", fields[0])?;
        let color = u8::try_from(color_code)
            .ok()
            .and_then(Player::from_code)
            .ok_or(ConfigError::UnknownColor(color_code))?;

        let depth_limit = DepthLimit::from(parse_int("limit", fields[1])?);
        let algorithm = if parse_flag("minimax", fields[2])? {
            Algorithm::Minimax
        } else {
            Algorithm::AlphaBeta
        };

        Ok(Self {
            color,
            config: SearchConfig {
                depth_limit,
                algorithm,
                caching: parse_flag("caching", fields[3])?,
                ordering: parse_flag("ordering", fields[4])?,
                evaluation: Evaluation::default(),
            },
        })
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, ConfigError> {
    value.parse().map_err(|_| ConfigError::NotAnInteger {
        field,
        value: value.to_string(),
    })
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, ConfigError> {
    match parse_int(field, value)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(ConfigError::InvalidFlag {
            field,
            value: other,
        }),
    }
}
