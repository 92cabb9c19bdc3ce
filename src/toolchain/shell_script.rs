use std::path::Path;

/// Shell dialect the activation commands are written for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    /// POSIX shells (`export`)
    Bash,
    /// Windows `cmd.exe` (`set`)
    Cmd,
    /// Windows PowerShell (`$env:`)
    PowerShell,
}

impl ShellKind {
    /// Picks the dialect for the running platform
    ///
    /// `powershell` only matters on Windows.
    pub fn detect(powershell: bool) -> Self {
        if cfg!(windows) {
            if powershell {
                ShellKind::PowerShell
            } else {
                ShellKind::Cmd
            }
        } else {
            ShellKind::Bash
        }
    }
}

/// Shell commands that put a Go toolchain first on PATH
pub struct ActivationScript;

impl ActivationScript {
    /// # Arguments
    /// * `shell` - Target dialect
    /// * `goroot` - Root of the installed toolchain
    /// * `version` - Go version; 1.5.x also enables the vendor experiment
    /// * `current_path` - Value of PATH, only spelled out for `cmd.exe`
    pub fn render(shell: ShellKind, goroot: &Path, version: &str, current_path: &str) -> String {
        let goroot = goroot.display();
        let mut script = match shell {
            ShellKind::Bash => format!(
                "export GOROOT=\"{}\"\nexport PATH=\"$GOROOT/bin:$PATH\"\n",
                goroot
            ),
            ShellKind::Cmd => format!(
                "set GOROOT={}\nset PATH={}\\bin;{}\n",
                goroot, goroot, current_path
            ),
            ShellKind::PowerShell => format!(
                "$env:GOROOT = \"{}\"\n$env:PATH = \"$env:GOROOT\\bin;$env:PATH\"\n",
                goroot
            ),
        };

        if version.starts_with("1.5") {
            script.push_str(match shell {
                ShellKind::Bash => "export GO15VENDOREXPERIMENT=1\n",
                ShellKind::Cmd => "set GO15VENDOREXPERIMENT=1\n",
                ShellKind::PowerShell => "$env:GO15VENDOREXPERIMENT = \"1\"\n",
            });
        }
        script
    }
}
