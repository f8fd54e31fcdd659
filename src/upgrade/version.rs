//! The `$version` control statement.

use crate::base::constants::{LEGACY_VERSIONS, TARGET_VERSION, UPGRADED_VERSIONS};
use crate::text::LineEnding;

/// The version string of a `$version: "..."` line, if `line` is one.
///
/// Leading and trailing whitespace and whitespace around `$`, `version` and
/// `:` are tolerated.
pub fn parse_version_line(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix('$')?.trim_start();
    let rest = rest.strip_prefix("version")?.trim_start();
    let rest = rest.strip_prefix(':')?.trim_start();
    let (version, tail) = rest.strip_prefix('"')?.split_once('"')?;
    tail.trim().is_empty().then_some(version)
}

/// The version declared by the first `$version` line of `text`.
pub fn declared_version(text: &str) -> Option<&str> {
    text.lines().find_map(parse_version_line)
}

/// Whether `text` already declares IDL 2.
pub fn is_upgraded(text: &str) -> bool {
    declared_version(text).is_some_and(|v| UPGRADED_VERSIONS.contains(&v))
}

/// The `$version` line written into upgraded files.
pub fn target_version_line() -> String {
    format!("$version: \"{TARGET_VERSION}\"")
}

/// Point `text` at IDL 2.
///
/// The first legacy `$version` line is replaced in place. A file without any
/// `$version` line gets one, followed by a blank line, at the top. A file
/// that declares some other version is returned as is.
pub fn rewrite_version(text: &str, line_ending: LineEnding) -> String {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches(['\r', '\n']);
        if let Some(version) = parse_version_line(content) {
            if !LEGACY_VERSIONS.contains(&version) {
                return text.to_string();
            }
            let end = offset + content.len();
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..offset]);
            out.push_str(&target_version_line());
            out.push_str(&text[end..]);
            return out;
        }
        offset += line.len();
    }

    let ending = line_ending.as_str();
    format!("{}{ending}{ending}{text}", target_version_line())
}
