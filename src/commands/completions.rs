use clap::{Args, CommandFactory};
use clap_complete::Shell;
use std::io::{self, Write};

use crate::cli::Cli;

#[derive(Debug, Clone, Args)]
pub struct CompletionsCommand {
    #[arg(value_enum, help = "Target shell for completion script")]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self) {
        self.write_to(&mut io::stdout());
    }

    fn write_to(&self, out: &mut dyn Write) {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        clap_complete::generate(self.shell, &mut cmd, bin_name, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut buffer = Vec::new();
        CompletionsCommand { shell }.write_to(&mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_shell_specific_markers() {
        let cases: [(Shell, &[&str]); 3] = [
            (Shell::Bash, &["_rolekit()", "COMPREPLY", "complete -F _rolekit"]),
            (Shell::Zsh, &["#compdef rolekit", "_arguments"]),
            (Shell::Fish, &["complete -c rolekit"]),
        ];

        for (shell, markers) in cases {
            let result = script(shell);
            for marker in markers {
                assert!(
                    result.contains(marker),
                    "'{marker}' not found in {shell} completion script"
                );
            }
        }
    }

    #[test]
    fn test_completion_contains_subcommands() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            let result = script(shell);
            for subcommand in ["make-arn", "parse-arn", "remain", "url", "path", "configure"] {
                assert!(
                    result.contains(subcommand),
                    "{subcommand} missing from {shell} completions"
                );
            }
        }
    }

    #[test]
    fn test_completion_contains_global_options() {
        let result = script(Shell::Bash);
        assert!(result.contains("--profile"));
        assert!(result.contains("--verbose"));
    }
}
