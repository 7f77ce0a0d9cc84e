//! Build script to embed the built-in word list
//!
//! Reads `SCRAMBLED,correct` pairs and generates a const slice of tuples.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_pair_list(
        "data/words.txt",
        &Path::new(&out_dir).join("word_pairs.rs"),
        "WORD_PAIRS",
        "Built-in scrambled/correct word pairs",
    );

    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_pair_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let pairs: Vec<(&str, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (scrambled, correct) = line
                .split_once(',')
                .unwrap_or_else(|| panic!("Malformed pair in {input_path}: {line}"));
            (scrambled.trim(), correct.trim())
        })
        .collect();
    let count = pairs.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (scrambled, correct) in pairs {
        writeln!(output, "    ({scrambled:?}, {correct:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of pairs in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
