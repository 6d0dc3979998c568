use std::env;

/// Environment variable holding extra scoring keywords, separated by `;`.
pub const KEYWORDS_ENV: &str = "TRENDS_KEYWORDS";

/// Retrieves an environment variable and splits it into a vector of strings based on a delimiter.
///
/// # Arguments
/// - `var`: The name of the environment variable.
/// - `delimiter`: The character to split the environment variable's value by.
///
/// # Returns
/// - `Vec<String>` of trimmed, non-empty entries; empty when the variable is unset.
pub fn get_env_var_as_vec(var: &str, delimiter: char) -> Vec<String> {
    split_list(&env::var(var).unwrap_or_default(), delimiter)
}

fn split_list(value: &str, delimiter: char) -> Vec<String> {
    value
        .split(delimiter)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_drops_empty_entries() {
        assert_eq!(split_list(" storm ; ;election;", ';'), vec!["storm", "election"]);
        assert!(split_list("", ';').is_empty());
    }

    #[test]
    fn test_unset_variable_is_empty() {
        assert!(get_env_var_as_vec("NEWS_TRENDS_TEST_UNSET_VARIABLE", ';').is_empty());
    }
}
