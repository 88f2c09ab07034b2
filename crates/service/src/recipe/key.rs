pub use configs::KeyPolicy;

/// Key a newly created recipe is stored under.
pub fn derive_key(policy: KeyPolicy, name: &str) -> String {
    match policy {
        KeyPolicy::Slug => common::slugify(name),
        KeyPolicy::RawName => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_policy_normalizes() {
        assert_eq!(derive_key(KeyPolicy::Slug, "Tomato Soup"), "tomato-soup");
        assert_eq!(derive_key(KeyPolicy::Slug, "Tomato Soup"), derive_key(KeyPolicy::Slug, "tomato  SOUP"));
    }

    #[test]
    fn raw_policy_keeps_name() {
        assert_eq!(derive_key(KeyPolicy::RawName, "Tomato Soup"), "Tomato Soup");
    }
}
