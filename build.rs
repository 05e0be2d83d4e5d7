use std::fs;

fn main() {
    // Validate the bundled theme at compile time
    let theme_path = "src/default_theme.toml";
    println!("cargo:rerun-if-changed={}", theme_path);

    let content = fs::read_to_string(theme_path).expect("Failed to read default_theme.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_theme.toml: {}", e),
    };

    let rules = match table.get("rules") {
        Some(toml::Value::Array(rules)) if !rules.is_empty() => rules,
        _ => panic!("default_theme.toml must define at least one [[rules]] entry"),
    };

    for (i, rule) in rules.iter().enumerate() {
        let Some(rule) = rule.as_table() else {
            panic!("default_theme.toml: rules[{}] must be a table", i);
        };
        match rule.get("selectors") {
            Some(toml::Value::Array(selectors)) if selectors.iter().all(|s| s.is_str()) => {}
            _ => panic!("default_theme.toml: rules[{}].selectors must be an array of strings", i),
        }
        if !rule.get("declarations").is_some_and(toml::Value::is_str) {
            panic!("default_theme.toml: rules[{}].declarations must be a string", i);
        }
    }
}
