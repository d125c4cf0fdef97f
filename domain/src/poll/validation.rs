//! Response validation
//!
//! Gates acceptance of every incoming message. Pure, no side effects.

use super::option::ResponseOption;

/// Find the option selected by `text`
///
/// Options are checked in configured order, then each option's triggers in
/// configured order. Returns the first option with a trigger equal to `text`
/// or equal to [`WILDCARD_TRIGGER`](super::WILDCARD_TRIGGER); `None` when
/// nothing matches (including when `options` is empty).
pub fn is_valid<'a>(options: &'a [ResponseOption], text: &str) -> Option<&'a ResponseOption> {
    options.iter().find(|option| option.matches(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agree_disagree() -> Vec<ResponseOption> {
        vec![
            ResponseOption::new("Agree", ["a"]),
            ResponseOption::new("Disagree", ["d"]),
        ]
    }

    #[test]
    fn test_valid_response_selects_matching_option() {
        let options = agree_disagree();
        assert_eq!(is_valid(&options, "d").map(|o| o.text.as_str()), Some("Disagree"));
    }

    #[test]
    fn test_invalid_response_returns_none() {
        let options = agree_disagree();
        assert!(is_valid(&options, "x").is_none());
    }

    #[test]
    fn test_empty_options_reject_everything() {
        assert!(is_valid(&[], "a").is_none());
        assert!(is_valid(&[], "").is_none());
    }

    #[test]
    fn test_first_matching_option_wins() {
        let options = vec![
            ResponseOption::new("First", ["a"]),
            ResponseOption::new("Second", ["a"]),
        ];
        assert_eq!(is_valid(&options, "a").unwrap().text, "First");
    }

    #[test]
    fn test_wildcard_option_shadows_later_options() {
        let options = vec![
            ResponseOption::wildcard("Anything"),
            ResponseOption::new("Agree", ["a"]),
        ];
        assert_eq!(is_valid(&options, "a").unwrap().text, "Anything");
        assert_eq!(is_valid(&options, "zzz").unwrap().text, "Anything");
    }

    #[test]
    fn test_wildcard_after_literal_still_prefers_literal_option() {
        let options = vec![
            ResponseOption::new("Agree", ["a"]),
            ResponseOption::wildcard("Other"),
        ];
        assert_eq!(is_valid(&options, "a").unwrap().text, "Agree");
        assert_eq!(is_valid(&options, "maybe").unwrap().text, "Other");
    }
}
