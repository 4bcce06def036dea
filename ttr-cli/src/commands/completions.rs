//! Shell completions command - Generate shell completion scripts
//!
//! Generates completion scripts for bash, zsh, fish, powershell and elvish.

use std::io;

use clap::Command;
use clap_complete::{generate, shells};
use colored::Colorize;
use serde::Serialize;

use crate::output::{Output, OutputConfig, Outputter};

const BIN: &str = "ttr";

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
            Shell::Fish => write!(f, "fish"),
            Shell::PowerShell => write!(f, "powershell"),
            Shell::Elvish => write!(f, "elvish"),
        }
    }
}

/// Instructions for installing completions
#[derive(Debug, Serialize)]
pub struct CompletionInstructions {
    pub shell: String,
    pub instructions: Vec<String>,
}

impl Outputter for CompletionInstructions {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let mut output = format!(
            "{} completions for {}\n\n{}\n",
            BIN.cyan().bold(),
            self.shell.yellow(),
            "Installation:".cyan().bold()
        );
        for instruction in &self.instructions {
            output.push_str(&format!("  {}\n", instruction));
        }
        output
    }
}

fn get_instructions(shell: Shell) -> Vec<String> {
    let lines: &[&str] = match shell {
        Shell::Bash => &[
            "# Add to ~/.bashrc:",
            "eval \"$(ttr completions bash)\"",
            "",
            "# Or save to a file:",
            "ttr completions bash > ~/.local/share/bash-completion/completions/ttr",
        ],
        Shell::Zsh => &[
            "# Add to ~/.zshrc:",
            "eval \"$(ttr completions zsh)\"",
            "",
            "# Or save to a file in fpath:",
            "ttr completions zsh > ~/.zfunc/_ttr",
        ],
        Shell::Fish => &[
            "# Save to fish completions directory:",
            "ttr completions fish > ~/.config/fish/completions/ttr.fish",
        ],
        Shell::PowerShell => &[
            "# Add to $PROFILE:",
            "Invoke-Expression (& ttr completions powershell | Out-String)",
        ],
        Shell::Elvish => &[
            "# Add to ~/.elvish/rc.elv:",
            "eval (ttr completions elvish | slurp)",
        ],
    };
    lines.iter().map(|line| line.to_string()).collect()
}

/// Generate completions for `cmd` and write them to stdout
pub fn generate_completions(shell: Shell, cmd: &mut Command) {
    let out = &mut io::stdout();
    match shell {
        Shell::Bash => generate(shells::Bash, cmd, BIN, out),
        Shell::Zsh => generate(shells::Zsh, cmd, BIN, out),
        Shell::Fish => generate(shells::Fish, cmd, BIN, out),
        Shell::PowerShell => generate(shells::PowerShell, cmd, BIN, out),
        Shell::Elvish => generate(shells::Elvish, cmd, BIN, out),
    }
}

/// Print installation instructions for `shell`
pub fn run_instructions(shell: Shell, config: OutputConfig) -> anyhow::Result<()> {
    let instructions = CompletionInstructions {
        shell: shell.to_string(),
        instructions: get_instructions(shell),
    };
    Output::new(instructions, config).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_display() {
        assert_eq!(Shell::Bash.to_string(), "bash");
        assert_eq!(Shell::PowerShell.to_string(), "powershell");
        assert_eq!(Shell::Elvish.to_string(), "elvish");
    }

    #[test]
    fn test_get_instructions() {
        let bash = get_instructions(Shell::Bash);
        assert!(bash.iter().any(|i| i.contains("bashrc")));
        assert!(bash.iter().any(|i| i.contains("ttr completions bash")));

        let zsh = get_instructions(Shell::Zsh);
        assert!(zsh.iter().any(|i| i.contains("_ttr")));
    }
}
