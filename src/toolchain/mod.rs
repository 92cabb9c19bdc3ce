/// Go toolchain domain - locating the project's Go version and rendering
/// the shell commands that activate a toolchain
mod go_version;
mod shell_script;

pub use go_version::{
    parse_goroot, parse_travis_go_version, parse_version_asciidoc, TRAVIS_YML, VERSION_ASCIIDOC,
};
pub use shell_script::{ShellKind, ActivationScript};
