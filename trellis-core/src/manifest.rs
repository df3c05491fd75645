//! Dependency manifest merging.

use std::collections::BTreeSet;

/// Path of the dependency manifest that is merged rather than overwritten.
pub const MANIFEST_PATH: &str = "requirements.txt";

/// Merge two newline-separated dependency manifests.
///
/// Lines are trimmed and blank lines dropped. The result is the sorted union
/// of both inputs, joined with `\n` and terminated by a single newline.
/// Duplicates collapse only when the trimmed lines are byte-identical; no
/// version reconciliation is attempted.
pub fn merge_manifests(base: &str, addition: &str) -> String {
    let lines: BTreeSet<&str> = base
        .lines()
        .chain(addition.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut merged = lines.into_iter().collect::<Vec<_>>().join("\n");
    merged.push('\n');
    merged
}
