use std::collections::HashMap;
use std::path::Path;

/// Read a line-oriented `KEY=VALUE` file into a map.
///
/// A missing or unreadable file yields an empty map and malformed lines
/// are skipped, so this never fails. The process environment is not
/// consulted.
pub fn load_values(path: impl AsRef<Path>) -> HashMap<String, String> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter.flatten().collect(),
        Err(_) => HashMap::new(),
    }
}
