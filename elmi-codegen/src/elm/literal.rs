/// Quote `value` as an Elm string literal.
///
/// ```
/// use elmi18n_codegen::elm::string_literal;
///
/// assert_eq!(string_literal("greetings.hello"), "\"greetings.hello\"");
/// assert_eq!(string_literal(r#"say "hi""#), r#""say \"hi\"""#);
/// ```
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:04X}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
