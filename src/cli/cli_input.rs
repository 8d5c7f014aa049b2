use std::io::{self, Write};

pub fn get_user_input() -> String {
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        input.clear();
    }
    input
}

pub fn prompt(text: &str) -> String {
    print!("\x1b[36m{}\x1b[0m", text);
    let _ = io::stdout().flush();
    get_user_input()
}

/// Empty input keeps the default value
pub fn parse_with_default(input: &str, default: f64) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    input
        .parse::<f64>()
        .map_err(|_| format!("Invalid number format: '{}'", input))
}

/// Asks for a number showing the default in brackets
pub fn input_value(name: &str, default: f64) -> Result<f64, String> {
    let answer = prompt(&format!("{} [{}]: ", name, default));
    parse_with_default(&answer, default)
}

pub fn input_count(name: &str, default: usize) -> Result<usize, String> {
    let answer = prompt(&format!("{} [{}]: ", name, default));
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse::<usize>()
        .map_err(|_| format!("Invalid integer format: '{}'", answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_default() {
        assert_eq!(parse_with_default("", 1.5), Ok(1.5));
        assert_eq!(parse_with_default("  \n", 1.5), Ok(1.5));
        assert_eq!(parse_with_default("3e6\n", 1.5), Ok(3e6));
        assert!(parse_with_default("three", 1.5).is_err());
    }
}
