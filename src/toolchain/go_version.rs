use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Primary source of the project's Go version, relative to the project root
pub const VERSION_ASCIIDOC: &str = "libbeat/docs/version.asciidoc";

/// Fallback source, relative to the project root
pub const TRAVIS_YML: &str = ".travis.yml";

static TRAVIS_GO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^go:\r?\n\s*-\s+(\S+)\s*$").expect("static regex is valid")
});

static GOROOT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*(?:export\s+|set\s+|\$env:)GOROOT\s*=\s*"?([^"\r\n]+?)"?\s*$"#)
        .expect("static regex is valid")
});

/// Finds the `:go-version: 1.9.2` attribute in an asciidoc document
pub fn parse_version_asciidoc(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let (key, value) = line.split_once(' ')?;
        (key == ":go-version:").then(|| value.trim().to_string())
    })
    .filter(|version| !version.is_empty())
}

/// Finds the first entry of the top-level `go:` list in a Travis config
pub fn parse_travis_go_version(content: &str) -> Option<String> {
    TRAVIS_GO
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extracts GOROOT from the activation script printed by the version manager
pub fn parse_goroot(script: &str) -> Option<PathBuf> {
    GOROOT_LINE
        .captures(script)
        .and_then(|caps| caps.get(1))
        .map(|m| PathBuf::from(m.as_str()))
}
