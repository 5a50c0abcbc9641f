use std::path::Path;

fn main() {
    let puzzle_path = Path::new("puzzles/demo.json");
    validate_puzzle_file(puzzle_path);
    set_build_dependencies();
}

fn validate_puzzle_file(puzzle_path: &Path) {
    // Ensure the demo puzzle exists at build time
    assert!(
        puzzle_path.exists(),
        "\n\nPUZZLE BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the demo puzzle before building.\n",
        puzzle_path.display()
    );

    let puzzle_contents = std::fs::read_to_string(puzzle_path).unwrap_or_else(|e| {
        panic!(
            "\n\nPUZZLE BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            puzzle_path.display()
        );
    });

    let puzzle: serde_json::Value = serde_json::from_str(&puzzle_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nPUZZLE BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            puzzle_path.display()
        );
    });

    validate_puzzle_structure(&puzzle);
}

fn validate_puzzle_structure(puzzle: &serde_json::Value) {
    assert!(
        puzzle.is_object(),
        "\n\nPUZZLE BUILD ERROR: Root must be a JSON object\n\
         Got: {puzzle}\n"
    );

    let rows = string_array(puzzle, "rows");
    let words = string_array(puzzle, "words");

    validate_rows(&rows);
    validate_words(&words);

    println!(
        "cargo:warning=Validated demo puzzle: {n}x{n} grid, {} words",
        words.len(),
        n = rows.len()
    );
}

fn string_array<'a>(puzzle: &'a serde_json::Value, field: &str) -> Vec<&'a str> {
    let values = puzzle
        .get(field)
        .and_then(serde_json::Value::as_array)
        .unwrap_or_else(|| {
            panic!(
                "\n\nPUZZLE BUILD ERROR: Missing '{field}' array\n\
                 The puzzle must have a top-level '{field}' array of strings.\n"
            );
        });

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_str().unwrap_or_else(|| {
                panic!("\n\nPUZZLE BUILD ERROR: '{field}' entry {i} is not a string\n");
            })
        })
        .collect()
}

fn validate_rows(rows: &[&str]) {
    assert!(
        !rows.is_empty(),
        "\n\nPUZZLE BUILD ERROR: 'rows' must not be empty\n"
    );

    let size = rows.len();
    for (i, row) in rows.iter().enumerate() {
        let length = row.chars().count();
        assert!(
            length == size,
            "\n\nPUZZLE BUILD ERROR: Row {i} has {length} characters, expected {size}\n\
             The grid must be square.\n"
        );
    }
}

fn validate_words(words: &[&str]) {
    for (i, word) in words.iter().enumerate() {
        assert!(
            !word.trim().is_empty(),
            "\n\nPUZZLE BUILD ERROR: Word {i} is empty\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the demo puzzle changes
    println!("cargo:rerun-if-changed=puzzles/demo.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
