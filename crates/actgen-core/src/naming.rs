//! Identifier derivation for generated declarations.
//!
//! Keys from the input document are free-form (`sendPost`, `send_post`,
//! `send-post`); every generated name goes through the same Pascal/camel
//! transforms so that all of them map to the same identifiers.
//!
//! Words break at lower/digit -> upper transitions, before the last capital
//! of an acronym (`URLAction` -> `URL Action`) and at any non-alphanumeric
//! character. A letter followed by a digit never starts a new word, so
//! `v2beta` stays one word (`V2beta`) and `load2fa` yields `load2faFn`.

use convert_case::{Boundary, Case, Converter};

const WORD_BOUNDARIES: [Boundary; 4] = [
    Boundary::Space,
    Boundary::LowerUpper,
    Boundary::DigitUpper,
    Boundary::Acronym,
];

fn convert(input: &str, case: Case) -> String {
    Converter::new()
        .set_boundaries(&WORD_BOUNDARIES)
        .to_case(case)
        .convert(separate_words(input))
}

/// Pascal-case `input`, treating any non-alphanumeric character as a word break.
pub fn pascal(input: &str) -> String {
    convert(input, Case::Pascal)
}

/// Camel-case `input`, treating any non-alphanumeric character as a word break.
pub fn camel(input: &str) -> String {
    convert(input, Case::Camel)
}

fn separate_words(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}

/// `sendPost` -> `SendPostAction`; also the value of the type tag.
pub fn action_name(action_key: &str) -> String {
    pascal(&format!("{action_key}Action"))
}

/// `sendPost` -> `ISendPostAction`
pub fn action_def_name(action_key: &str) -> String {
    pascal(&format!("I{}", action_name(action_key)))
}

/// `sendPost` -> `sendPostFn`
pub fn action_fn_name(action_key: &str) -> String {
    camel(&format!("{action_key}Fn"))
}

/// `post` -> `PostActionsDto`
pub fn group_dto_name(group_key: &str) -> String {
    pascal(&format!("{group_key}ActionsDto"))
}

/// `post` -> `PostActions`
pub fn group_set_name(group_key: &str) -> String {
    pascal(&format!("{group_key}Actions"))
}

/// Type tag string, namespaced by group: `post/SendPostAction`.
pub fn action_tag(action_key: &str, namespace: &str) -> String {
    if namespace.is_empty() {
        action_name(action_key)
    } else {
        format!("{namespace}/{}", action_name(action_key))
    }
}

pub fn file_name(group_key: &str) -> String {
    format!("{group_key}.actions.ts")
}

/// Split a trailing `?` off a payload key. Returns the bare name and whether it was optional.
pub fn parse_optional(name: &str) -> (&str, bool) {
    match name.strip_suffix('?') {
        Some(bare) => (bare, true),
        None => (name, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_action_names() {
        assert_eq!(action_name("sendPost"), "SendPostAction");
        assert_eq!(action_def_name("sendPost"), "ISendPostAction");
        assert_eq!(action_fn_name("sendPost"), "sendPostFn");
    }

    #[test]
    fn derives_group_names() {
        assert_eq!(group_dto_name("post"), "PostActionsDto");
        assert_eq!(group_set_name("post"), "PostActions");
        assert_eq!(file_name("post"), "post.actions.ts");
    }

    #[test]
    fn separators_and_case_styles_converge() {
        for key in ["sendPost", "send_post", "send-post", "send post", "SendPost"] {
            assert_eq!(action_name(key), "SendPostAction", "key {key}");
            assert_eq!(action_fn_name(key), "sendPostFn", "key {key}");
        }
        assert_eq!(group_set_name("user.profile"), "UserProfileActions");
    }

    #[test]
    fn acronyms_are_merged_into_single_words() {
        assert_eq!(action_name("fetchURL"), "FetchUrlAction");
        assert_eq!(action_name("FETCH_USER"), "FetchUserAction");
        assert_eq!(action_def_name("fetchURL"), "IFetchUrlAction");
    }

    #[test]
    fn digits_stay_inside_their_word() {
        assert_eq!(action_name("v2beta"), "V2betaAction");
        assert_eq!(action_fn_name("load2fa"), "load2faFn");
        assert_eq!(action_def_name("load2fa"), "ILoad2faAction");
        assert_eq!(group_set_name("oauth2"), "Oauth2Actions");
    }

    #[test]
    fn digit_followed_by_capital_starts_a_word() {
        assert_eq!(action_name("v2Beta"), "V2BetaAction");
        assert_eq!(action_fn_name("step3Done"), "step3DoneFn");
        assert_eq!(action_name("send_2fa_code"), "Send2faCodeAction");
    }

    #[test]
    fn tag_is_namespaced_by_group() {
        assert_eq!(action_tag("sendPost", "post"), "post/SendPostAction");
        assert_eq!(action_tag("sendPost", ""), "SendPostAction");
    }

    #[test]
    fn parse_optional_strips_one_marker() {
        assert_eq!(parse_optional("question?"), ("question", true));
        assert_eq!(parse_optional("question"), ("question", false));
        assert_eq!(parse_optional("q??"), ("q?", true));
    }
}
