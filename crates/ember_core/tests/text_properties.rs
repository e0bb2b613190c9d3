use ember_core::Text;
use ember_core::text::INLINE_CAP;
use proptest::prelude::*;

proptest! {
    #[test]
    fn text_make_respects_inline_boundary(s in ".*") {
        let t = Text::make(&s);
        prop_assert_eq!(t.len(), s.len());
        prop_assert_eq!(t.as_str(), s.as_str());
        prop_assert_eq!(t.is_inline(), s.len() <= INLINE_CAP);
    }
}

proptest! {
    #[test]
    fn text_from_string_matches_make(s in ".*") {
        let a = Text::from_string(s.clone());
        let b = Text::make(&s);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.char_count(), s.chars().count());
        prop_assert_eq!(a.to_string(), s);
    }
}

proptest! {
    #[test]
    fn text_ordering_follows_str(a in ".*", b in ".*") {
        let ta = Text::make(&a);
        let tb = Text::make(&b);
        prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
    }
}
