use serde::Serialize;
use similar::{ChangeTag, TextDiff};

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Line diff from what is on disk to what would be generated.
pub fn print_diff(on_disk: &str, generated: &str) {
    let diff = TextDiff::from_lines(on_disk, generated);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        print!("{sign}{change}");
        if change.missing_newline() {
            println!();
        }
    }
}
