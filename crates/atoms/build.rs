use std::{env, path::Path};

fn main() {
    let out = Path::new(&env::var_os("OUT_DIR").unwrap()).join("js_word.rs");

    string_cache_codegen::AtomType::new("JsWord", "js_word!")
        .atoms(JS_WORDS)
        .write_to_file(&out)
        .unwrap();
}

const JS_WORDS: &[&str] = &[
    "",
    // Punctuators that show up in nearly every token stream.
    "(",
    ")",
    "[",
    "]",
    "{",
    "}",
    ",",
    ";",
    ".",
    "...",
    "=",
    "=>",
    ":",
    "?",
    // Literal words.
    "null",
    "true",
    "false",
    // Keywords.
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "export",
    "extends",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // Contextual words.
    "arguments",
    "async",
    "eval",
    "get",
    "of",
    "set",
    "static",
    "undefined",
];
