//! Escaping for text that lands inside generated source.

/// Make a column comment safe inside a double-quoted doc attribute:
/// backslashes and double quotes are escaped, CR and LF are dropped.
pub fn sanitize_comment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\r' | '\n' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Field identifier for a column name. Keyword names are emitted in raw
/// form (`r#type`); the few names raw syntax cannot express (`self`,
/// `Self`, `super`, `crate`) get an underscore suffix and need a serde
/// rename back to the column name.
pub fn field_ident(name: &str) -> String {
    if matches!(name, "self" | "Self" | "super" | "crate") {
        return format!("{name}_");
    }
    if is_keyword(name) {
        return format!("r#{name}");
    }
    name.to_string()
}

// Strict and reserved keywords, edition 2024, minus the non-rawable names
// handled above.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop",
    "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct",
    "trait", "true", "type", "unsafe", "use", "where", "while", "abstract",
    "become", "box", "do", "final", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}
