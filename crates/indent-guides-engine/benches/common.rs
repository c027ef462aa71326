// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_source(functions: usize) -> String {
    let base = "def handler(request):\n    if request.ok:\n        value = request.body\n\n        for item in value:\n            process(item)\n\n    return value\n\n\n";
    base.repeat(functions)
}

#[allow(dead_code)]
pub fn generate_nested_source(blocks: usize, depth: usize) -> String {
    let mut content = String::new();

    for block in 0..blocks {
        content.push_str(&format!("block_{block}:\n"));
        for level in 1..=depth {
            let indent = "\t".repeat(level);
            content.push_str(&format!("{indent}open_{level}:\n"));
            content.push('\n');
        }
        for level in (1..=depth).rev() {
            let indent = "    ".repeat(level);
            content.push_str(&format!("{indent}close_{level}\n"));
        }
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
pub fn generate_blank_buffer(lines: usize) -> String {
    "   \n".repeat(lines)
}
