use super::*;
use pretty_assertions::assert_eq;

#[test]
fn normalize_strips_spaces_and_tabs() {
    assert_eq!(normalize("x :=\t5 ;"), "x:=5;");
}

#[test]
fn normalize_removes_spaces_inside_string_literals() {
    assert_eq!(normalize("output<<\"hello world\";"), "output<<\"helloworld\";");
}

#[test]
fn normalize_keeps_other_characters() {
    assert_eq!(normalize("a\rb"), "a\rb");
}

#[test]
fn scan_line_combines_both_logs() {
    let scan = scan_line("y : double ;");
    assert_eq!(scan.normalized, "y:double;");
    assert_eq!(
        scan.tokens,
        vec![
            ClassifiedToken::ReservedWord(ReservedWord::Double),
            ClassifiedToken::Symbol(Symbol::Semicolon),
        ]
    );
}

mod proptest_normalize {
    use crate::{classify, normalize};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalized_has_no_spaces_or_tabs(line in "[ \\ta-z0-9:=<>+;()\"-]{0,40}") {
            let normalized = normalize(&line);
            prop_assert!(!normalized.contains(' '));
            prop_assert!(!normalized.contains('\t'));
        }

        #[test]
        fn normalize_only_deletes(line in "[ \\ta-z0-9:=<>+;()\"-]{0,40}") {
            let expected: String = line.chars().filter(|c| *c != ' ' && *c != '\t').collect();
            prop_assert_eq!(normalize(&line), expected);
        }

        #[test]
        fn normalize_is_idempotent(line in "[ \\ta-z0-9:=<>+;()-]{0,40}") {
            let once = normalize(&line);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn classification_ignores_extra_spacing(words in proptest::collection::vec("[a-z0-9:=<>+;()-]{1,8}", 0..6)) {
            let tight = words.join(" ");
            let loose = words.join(" \t  ");
            prop_assert_eq!(classify(&tight), classify(&loose));
        }
    }
}
