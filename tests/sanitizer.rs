#[cfg(test)]
mod tests {
    use dewit::libs::sanitizer::{deduplicate_tags, normalize_descriptors, sanitize_tags};
    use dewit::libs::tags::Tags;

    #[test]
    fn test_sanitize_strips_spaces_and_lowercases() {
        assert_eq!(sanitize_tags("work, testing"), "work,testing");
        assert_eq!(sanitize_tags("Work,TESTING"), "work,testing");
    }

    #[test]
    fn test_sanitize_drops_single_trailing_comma() {
        assert_eq!(sanitize_tags("tag1,tag2,"), "tag1,tag2");
        assert_eq!(sanitize_tags("tag1,,"), "tag1,");
    }

    #[test]
    fn test_sanitize_removes_symbols() {
        assert_eq!(sanitize_tags("hello!@#world"), "helloworld");
        assert_eq!(sanitize_tags("snake_case-tag"), "snake_casetag");
    }

    #[test]
    fn test_sanitize_keeps_internal_double_commas() {
        assert_eq!(sanitize_tags("a,,b"), "a,,b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize_tags(""), "");
        assert_eq!(deduplicate_tags(""), "");
    }

    #[test]
    fn test_deduplicate_keeps_first_seen_order() {
        let result = deduplicate_tags("a,b,a,c,b");
        assert_eq!(result, "a,b,c");
        assert_eq!(result.split(',').count(), 3);
    }

    #[test]
    fn test_deduplicate_is_idempotent() {
        for input in ["a,b,a,c,b", "x,,y,,x", "", "single", ",lead,trail,"] {
            let once = deduplicate_tags(input);
            assert_eq!(deduplicate_tags(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_deduplicate_collapses_empty_tokens() {
        assert_eq!(deduplicate_tags(sanitize_tags("a,,b").as_str()), "a,b");
    }

    #[test]
    fn test_tags_from_user_input() {
        let tags = Tags::from_user_input("Work, urgent, work!");
        assert_eq!(tags.to_csv(), "work,urgent");
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("urgent"));
    }

    #[test]
    fn test_tags_merge_and_remove() {
        let mut tags = Tags::from_csv("a,b");
        tags.merge(&Tags::from_csv("b,c"));
        assert_eq!(tags.to_csv(), "a,b,c");

        tags.remove_all(&Tags::from_csv("a,zzz"));
        assert_eq!(tags.to_csv(), "b,c");

        tags.clear();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_descriptors_keep_their_characters() {
        assert_eq!(normalize_descriptors("well rested, café time ,Calm"), "well rested,café time,Calm");
    }

    #[test]
    fn test_descriptors_drop_empty_and_repeated_tokens() {
        assert_eq!(normalize_descriptors(" a , ,b,a,, "), "a,b");
        assert_eq!(normalize_descriptors(""), "");
    }
}
