/// Derive a URL-safe slug: ASCII-fold, lowercase, and collapse every
/// run of non-alphanumeric characters into a single `-`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut gap = false;

    for ch in input.chars() {
        match deunicode::deunicode_char(ch) {
            None => gap = true,
            Some(mapped) => for c in mapped.chars() {
                if c.is_ascii_alphanumeric() || c == '_' {
                    if gap && !slug.is_empty() {
                        slug.push('-');
                    }

                    slug.push(c.to_ascii_lowercase());
                    gap = false;
                } else {
                    gap = true;
                }
            },
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn slugs() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  2021 in review  "), "2021-in-review");
        assert_eq!(slugify("naïve façade"), "naive-facade");
        assert_eq!(slugify("snake_case survives"), "snake_case-survives");
        assert_eq!(slugify("a    b"), "a-b");
        assert_eq!(slugify("---"), "");
    }
}
