//! Shared helpers for building the shell-interpreted launch command.

use std::{collections::BTreeMap, process::Stdio};

use tokio::process::Command;

use super::env::merge_environment;

/// Join the executable and its arguments into the single line handed to the
/// shell. Nothing is escaped: shell operators and expansions in the
/// configuration are honored on purpose, the file is developer-authored.
pub fn shell_line(executable: &str, args: &[String]) -> String {
    let mut line = String::from(executable);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Build the child command: shell-interpreted, stdio fully inherited, entry
/// env overlaid on the parent environment.
pub fn build_shell_command(
    executable: &str,
    args: &[String],
    env_overrides: &BTreeMap<String, String>,
) -> Command {
    let mut command = shell_command(&shell_line(executable, args));
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());
    command.env_clear();
    command.envs(merge_environment(std::env::vars(), env_overrides));
    command
}

#[cfg(unix)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(line);
    command
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(line);
    command
}
