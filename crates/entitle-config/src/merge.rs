/// Recursively deep-merge `overlay` into `base`.
///
/// - Tables merge recursively per-field.
/// - Scalars and arrays from the overlay **replace** the base value.
pub fn deep_merge(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                if let Some(base_val) = base_table.get_mut(key) {
                    deep_merge(base_val, overlay_val);
                } else {
                    base_table.insert(key.clone(), overlay_val.clone());
                }
            }
        },
        (base, overlay) => {
            *base = overlay.clone();
        },
    }
}

/// Set a dotted `path` (e.g. `"logging.level"`) in `root` to a string,
/// creating intermediate tables as needed.
pub fn set_path(root: &mut toml::Value, path: &str, value: &str) {
    let mut current = root;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        let toml::Value::Table(table) = current else {
            return;
        };
        if segments.peek().is_none() {
            table.insert(segment.to_owned(), toml::Value::String(value.to_owned()));
            return;
        }
        current = table
            .entry(segment.to_owned())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> toml::Value {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn test_tables_merge_recursively() {
        let mut base = parse("[output]\nformat = \"pretty\"\ncolor = true\n");
        deep_merge(&mut base, &parse("[output]\nformat = \"json\"\n"));

        assert_eq!(base["output"]["format"].as_str(), Some("json"));
        assert_eq!(base["output"]["color"].as_bool(), Some(true));
    }

    #[test]
    fn test_arrays_replace() {
        let mut base = parse("[logging]\ndirectives = [\"a=debug\", \"b=info\"]\n");
        deep_merge(&mut base, &parse("[logging]\ndirectives = [\"c=trace\"]\n"));

        let directives = base["logging"]["directives"].as_array().unwrap();
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].as_str(), Some("c=trace"));
    }

    #[test]
    fn test_set_path_creates_tables() {
        let mut root = toml::Value::Table(toml::map::Map::new());
        set_path(&mut root, "logging.level", "debug");
        assert_eq!(root["logging"]["level"].as_str(), Some("debug"));

        set_path(&mut root, "logging.format", "json");
        assert_eq!(root["logging"]["level"].as_str(), Some("debug"));
        assert_eq!(root["logging"]["format"].as_str(), Some("json"));
    }
}
