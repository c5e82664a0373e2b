//! Process-spawning helpers
//!
//! Git subprocesses must never pop a console window on Windows and must
//! never fall back to an interactive credential prompt.

use std::process::Command;

/// Create a git `Command` with platform-specific settings applied.
pub fn git_command() -> Command {
    let mut cmd = Command::new("git");

    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        // CREATE_NO_WINDOW = 0x08000000
        cmd.creation_flags(0x08000000);
    }

    // Credentials come in through the push URL; a prompt would hang the tool
    cmd.env("GIT_TERMINAL_PROMPT", "0");

    cmd
}
