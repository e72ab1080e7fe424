/// Level used when the level input cannot be parsed
pub const DEFAULT_LEVEL: i32 = 100;

/// Parse the level field of a query form, falling back to [`DEFAULT_LEVEL`]
pub fn parse_level(input: &str) -> i32 {
    input.trim().parse().unwrap_or(DEFAULT_LEVEL)
}

/// Parse the name field of a query form; blank input means no query
pub fn parse_name(input: &str) -> Option<String> {
    let name = input.trim();
    (!name.is_empty()).then(|| name.to_string())
}
