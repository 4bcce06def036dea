//! Command implementations for the ttr CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod completions;
pub mod edges;
pub mod info;
pub mod locate;
pub mod nodes;
pub mod path;
pub mod ticket;

use crate::output::OutputConfig;
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use ttr_core::{Board, BoardLoader};

/// Settings shared by every board command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Board file from `--board` or the config file.
    pub board: Option<PathBuf>,
    pub strict_colors: bool,
    pub output: OutputConfig,
}

impl Context {
    /// Path of the board file, or an error telling the user how to set one.
    pub fn board_path(&self) -> Result<&Path> {
        self.board.as_deref().context(
            "No board file given. Pass --board <FILE> or set [board].path in .ttrrc.toml",
        )
    }

    /// Load the board file.
    pub fn load_board(&self) -> Result<Board> {
        let path = self.board_path()?;
        BoardLoader::new()
            .strict_colors(self.strict_colors)
            .from_path(path)
            .with_context(|| format!("Failed to load board: {}", path.display()))
    }
}

/// Fail with a readable message when `name` is not a city on `board`.
pub fn require_city(board: &Board, name: &str) -> Result<()> {
    if board.contains(name) {
        Ok(())
    } else {
        anyhow::bail!("Unknown city: {}", name)
    }
}
