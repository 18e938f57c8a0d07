use std::env;

use log::warn;

pub fn get_environment_variable_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}

/// Parsed variable, falling back to `default` when unset or unparsable.
pub fn get_parsed_environment_variable_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(val) => match val.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!("Ignoring invalid value for {}: {:?}", key, val);
                default
            }
        },
        Err(_) => default,
    }
}
