// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_article(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and ~~struck~~ words.\n\n- Bullet point with `code`\n1. Numbered [link](https://example.com)\n> A quote\n\n![figure](figure.png \"A caption\")\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_emphasis(depth: usize) -> String {
    let mut content = String::from("core");
    for level in 0..depth {
        content = if level % 2 == 0 {
            format!("**a {content} b**")
        } else {
            format!("_a {content} b_")
        };
    }
    content
}

#[allow(dead_code)]
pub fn generate_plain_prose(paragraphs: usize) -> String {
    let sentence = "Readers skim long articles looking for the one term they remember. ";
    let mut content = String::new();
    for _ in 0..paragraphs {
        content.push_str(&sentence.repeat(8));
        content.push_str("\n\n");
    }
    content
}
