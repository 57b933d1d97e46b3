/// Symbols offered by the front end. The store itself accepts any string.
pub const SUGGESTED: [&str; 4] = ["$", "€", "₽", "£"];

pub const DEFAULT_SYMBOL: &str = "$";

pub fn suggested() -> Vec<String> {
    SUGGESTED.iter().map(|s| s.to_string()).collect()
}
