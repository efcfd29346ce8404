use std::collections::HashMap;

/// Splits a handler header such as `shell user=bob` into the handler kind and
/// its parameters. Only the first `=` separates key from value; a word
/// without `=` becomes a parameter with an empty value.
pub fn split_header(header: &str) -> (String, HashMap<String, String>) {
    let mut words = header.split_whitespace();
    let kind = words.next().unwrap_or_default().to_string();

    let params = words
        .map(|word| match word.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (word.to_string(), String::new()),
        })
        .collect();

    (kind, params)
}
