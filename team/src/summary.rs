use std::fmt::Write;

use crate::record::CreatureRecord;

/// Shown in place of an empty list
pub const EMPTY_LIST: &str = "-";

/// Text block shown under a panel's sprite
pub fn summary(record: &CreatureRecord) -> String {
    let mut text = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(text, "Types: {}", join(&record.types));
    let _ = writeln!(text, "Moves: {}", join(&record.moves));
    let _ = writeln!(text, "Strengths: {}", join(&record.relations.strengths));
    let _ = write!(text, "Weaknesses: {}", join(&record.relations.weaknesses));

    text
}

fn join<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let joined = items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        EMPTY_LIST.to_string()
    } else {
        joined
    }
}
