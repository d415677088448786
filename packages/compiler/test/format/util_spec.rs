/**
 * Utility Function Tests
 *
 * Case conversion, bracket wrapping and template-literal escaping.
 */
use reflow_compiler::util;

#[test]
fn should_get_the_close_char_for_each_open_char() {
    let cases = vec![
        ('{', '}'),
        ('(', ')'),
        ('[', ']'),
        ('<', '>'),
        ('"', '"'),
        ('\'', '\''),
        ('`', '`'),
    ];
    for (open, close) in cases {
        assert_eq!(util::get_close_char(open), close);
    }
}

#[test]
fn should_detect_wrapped_text() {
    let cases = vec![
        ("", '{', false),
        ("{", '{', false),
        ("{wrap}", '{', true),
        ("{wrap", '{', false),
        ("{wrap}", '(', false),
        ("(wrap)", '(', true),
    ];
    for (text, open, expected) in cases {
        assert_eq!(
            util::is_wrapped(text, open),
            expected,
            "is_wrapped({:?}, {:?})",
            text,
            open
        );
    }
}

#[test]
fn should_wrap_text_in_bracket_pairs() {
    let cases = vec![
        ("", '{', true, 1, "{}"),
        ("wrap", '{', true, 1, "{wrap}"),
        ("wrap", '(', true, 1, "(wrap)"),
        ("wrap", '(', true, 2, "((wrap))"),
        ("(wrap)", '(', true, 1, "(wrap)"),
        ("{wrap}", '{', true, 2, "{wrap}"),
        ("(wrap)", '{', true, 1, "{(wrap)}"),
        ("(wrap)", '(', false, 1, "((wrap))"),
    ];
    for (text, open, check_first, num, expected) in cases {
        assert_eq!(util::wrap_with(text, open, check_first, num), expected);
    }
}

#[test]
fn should_wrap_idempotently_when_checking_first() {
    for open in ['{', '(', '[', '<', '"', '\''] {
        let once = util::wrap("value", open);
        assert!(util::is_wrapped(&once, open));
        assert_eq!(util::wrap(&once, open), once);
    }
}

#[test]
fn should_escape_backticks_outside_interpolation_spans() {
    let cases = vec![
        ("This is a random string", "This is a random string"),
        (
            "This is a random string with `backticks`",
            "This is a random string with \\`backticks\\`",
        ),
        (
            "This is a random string with \\`escaped backticks\\`",
            "This is a random string with \\`escaped backticks\\`",
        ),
        (
            "This is a string with ${someValue[`string interpolation`]} unescaped",
            "This is a string with ${someValue[`string interpolation`]} unescaped",
        ),
        (
            "This is a string with `backticks` and ${someValue[`string interpolation`]} unescaped",
            "This is a string with \\`backticks\\` and ${someValue[`string interpolation`]} unescaped",
        ),
        (
            "This is a string with `backticks`, ${someValue[`the first string interpolation`]} and ${someValue[`the second`]}",
            "This is a string with \\`backticks\\`, ${someValue[`the first string interpolation`]} and ${someValue[`the second`]}",
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(util::escape_js_string(input), expected, "escape({:?})", input);
    }
}

#[test]
fn should_indent_multiline_text_only() {
    let cases = vec![
        ("", 2, "".to_string()),
        ("hello", 2, "hello".to_string()),
        ("hello\nworld", 2, "  hello\n  world\n".to_string()),
        ("hello\nworld", 4, "    hello\n    world\n".to_string()),
        ("  hello\n  world", 2, "    hello\n    world\n".to_string()),
    ];
    for (text, level, expected) in cases {
        assert_eq!(util::indent(text, level), expected);
    }
}

#[test]
fn should_convert_to_snake_case() {
    let cases = vec![
        ("", ""),
        ("hello", "hello"),
        ("Hello", "hello"),
        ("camelCase", "camel_case"),
        ("camelTwoHumps", "camel_two_humps"),
        ("_start_with_underscore", "_start_with_underscore"),
        ("__start_with_double_underscore", "__start_with_double_underscore"),
        ("kebab-case", "kebab_case"),
        ("double-kebab-case", "double_kebab_case"),
        (":start-with-colon", ":start_with_colon"),
        (":-start-with-colon-dash", ":_start_with_colon_dash"),
    ];
    for (input, expected) in cases {
        assert_eq!(util::to_snake_case(input), expected, "to_snake_case({:?})", input);
    }
}

#[test]
fn should_convert_to_camel_case() {
    let cases = vec![
        ("", ""),
        ("hello", "hello"),
        ("Hello", "Hello"),
        ("snake_case", "snakeCase"),
        ("snake_case_two", "snakeCaseTwo"),
        ("kebab-case", "kebabCase"),
        ("kebab-case-two", "kebabCaseTwo"),
        ("snake_kebab-case", "snakeKebabCase"),
        ("_hover", "_hover"),
        ("-starts-with-hyphen", "-startsWithHyphen"),
        ("--starts-with-double-hyphen", "--startsWithDoubleHyphen"),
        ("_starts_with_underscore", "_startsWithUnderscore"),
        ("__starts_with_double_underscore", "__startsWithDoubleUnderscore"),
        (":start-with-colon", ":startWithColon"),
        (":-start-with-colon-dash", ":StartWithColonDash"),
    ];
    for (input, expected) in cases {
        assert_eq!(util::to_camel_case(input), expected, "to_camel_case({:?})", input);
    }
}

#[test]
fn should_convert_to_title_case() {
    let cases = vec![
        ("", ""),
        ("hello", "Hello"),
        ("Hello", "Hello"),
        ("snake_case", "SnakeCase"),
        ("snake_case_two", "SnakeCaseTwo"),
    ];
    for (input, expected) in cases {
        assert_eq!(util::to_title_case(input), expected);
    }
}

#[test]
fn should_convert_to_kebab_case() {
    let cases = vec![
        ("", ""),
        ("hello", "hello"),
        ("Hello", "hello"),
        ("snake_case", "snake-case"),
        ("snake_case_two", "snake-case-two"),
        (":startWithColon", ":start-with-colon"),
        (":StartWithColonDash", ":-start-with-colon-dash"),
        (":start_with_colon", ":start-with-colon"),
        (":_start_with_colon_dash", ":-start-with-colon-dash"),
    ];
    for (input, expected) in cases {
        assert_eq!(util::to_kebab_case(input), expected, "to_kebab_case({:?})", input);
    }
}

#[test]
fn should_round_trip_camel_case_through_snake_case() {
    for input in ["camelCase", "camelTwoHumps", "hello"] {
        assert_eq!(util::to_camel_case(&util::to_snake_case(input)), input);
    }
}
