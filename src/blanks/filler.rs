use super::scanner::scan;

/// Replace the i-th blank of `text` with `answers[i]`.
///
/// Substitution is positional: the output is rebuilt from the text between
/// blanks, so equal-length blanks and answers containing underscores never
/// shift later replacements. Blanks without an answer are kept as-is; extra
/// answers are ignored.
pub fn fill<S: AsRef<str>>(text: &str, answers: &[S]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for marker in scan(text).into_iter().take(answers.len()) {
        out.push_str(&text[cursor..marker.start]);
        out.push_str(answers[marker.ordinal].as_ref());
        cursor = marker.end();
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blanks::count_blanks;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn full_answer_set_leaves_no_blanks_for_any_text(
            text in "[_a é.]{0,64}",
            answer in "[a é.]{0,6}",
        ) {
            let answers = vec![answer; count_blanks(&text)];
            prop_assert_eq!(count_blanks(&fill(&text, &answers)), 0);
        }

        #[test]
        fn prefix_answer_set_leaves_the_rest(
            text in "[_a é.]{0,64}",
            keep in 0usize..8,
        ) {
            let blanks = count_blanks(&text);
            let given = keep.min(blanks);
            let answers = vec!["x".to_string(); given];
            prop_assert_eq!(count_blanks(&fill(&text, &answers)), blanks - given);
        }
    }

    #[test]
    fn fills_every_blank_in_order() {
        assert_eq!(fill("X ___ Y ___ Z", &["one", "two"]), "X one Y two Z");
    }

    #[test]
    fn trailing_blanks_stay_when_answers_run_out() {
        assert_eq!(fill("X ___ Y ___ Z", &["only"]), "X only Y ___ Z");
    }

    #[test]
    fn no_answers_returns_text_unchanged() {
        let empty: [&str; 0] = [];
        assert_eq!(fill("X ___ Y", &empty), "X ___ Y");
    }

    #[test]
    fn extra_answers_are_ignored() {
        assert_eq!(fill("A ___ B", &["1", "2", "3"]), "A 1 B");
    }

    #[test]
    fn answers_containing_underscores_do_not_shift_later_blanks() {
        let filled = fill("first ___ then ___ end", &["a___b", "c"]);
        assert_eq!(filled, "first a___b then c end");
    }

    #[test]
    fn mixed_run_lengths_replace_whole_runs() {
        assert_eq!(fill("A ____ B ___ C", &["x", "y"]), "A x B y C");
    }

    #[test]
    fn full_answer_set_leaves_no_blanks() {
        let template = "The Olympic Games are a ___ event held every ___ years since ___.";
        let filled = fill(template, &["global".to_string(), "four".into(), "1896".into()]);
        assert_eq!(count_blanks(&filled), 0);
        assert_eq!(
            filled,
            "The Olympic Games are a global event held every four years since 1896."
        );
    }

    #[test]
    fn input_text_is_left_untouched() {
        let template = String::from("keep ___ me");
        let _ = fill(&template, &["it"]);
        assert_eq!(template, "keep ___ me");
    }
}
