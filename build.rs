//! Build script to generate the embedded word bank
//!
//! Reads one word list per category and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// (input file, const name, doc comment)
const CATEGORY_LISTS: &[(&str, &str, &str)] = &[
    ("data/fruit.txt", "FRUIT", "Fruit category words"),
    ("data/color.txt", "COLOR", "Color category words"),
    ("data/sport.txt", "SPORT", "Sport category words"),
    ("data/president.txt", "PRESIDENT", "President category words"),
    (
        "data/programming_language.txt",
        "PROGRAMMING_LANGUAGE",
        "Programming language category words (space-separated tokens)",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordbank.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word bank").unwrap();
    writeln!(output).unwrap();

    for (input_path, const_name, doc_comment) in CATEGORY_LISTS {
        generate_word_list(&mut output, input_path, const_name, doc_comment);
        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
    writeln!(output).unwrap();
}
