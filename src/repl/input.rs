//! Input normalization for the command line.

/// Lowercases `text` and splits it into whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        let cases = [
            ("  hello  world  ", vec!["hello", "world"]),
            (
                "Charmander Bulbasaur PIKACHU",
                vec!["charmander", "bulbasaur", "pikachu"],
            ),
            ("  singleword  ", vec!["singleword"]),
            ("\texplore\tCanalave-City-Area\n", vec!["explore", "canalave-city-area"]),
            ("   ", vec![]),
            ("", vec![]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input {input:?}");
        }
    }
}
