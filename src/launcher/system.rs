//! Navigator backed by the operating system

use super::traits::{LaunchError, Navigator};
use std::process::{Command, Stdio};

/// Opens URIs with the OS default handler or a configured launcher command
#[derive(Debug, Clone, Default)]
pub struct SystemNavigator {
    launcher: Option<String>,
}

impl SystemNavigator {
    pub fn new(launcher: Option<String>) -> Self {
        let launcher = launcher
            .map(|cmd| cmd.trim().to_string())
            .filter(|cmd| !cmd.is_empty());
        Self { launcher }
    }
}

impl Navigator for SystemNavigator {
    fn navigate(&mut self, uri: &str) -> Result<(), LaunchError> {
        match &self.launcher {
            Some(command) => {
                tracing::debug!("Opening URI with launcher {command}");
                // Output is discarded so the handler cannot draw over the TUI
                Command::new(command)
                    .arg(uri)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .map(drop)
                    .map_err(|source| LaunchError::Spawn {
                        command: command.clone(),
                        source,
                    })
            }
            None => {
                tracing::debug!("Opening URI with the system handler");
                open::that_detached(uri).map_err(LaunchError::Open)
            }
        }
    }
}
