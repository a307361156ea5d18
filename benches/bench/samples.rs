pub const SMALL: &str = include_str!("../../src/testing/assets/sample.sec");

/// Builds a document with `width` fields per section nested `depth` levels deep.
pub fn nested(width: usize, depth: usize) -> String {
    let mut text = String::new();
    section(&mut text, width, depth, 0);
    text
}

fn section(text: &mut String, width: usize, depth: usize, level: usize) {
    let indent = "    ".repeat(level + 1);
    text.push_str("{\n");
    for i in 0..width {
        text.push_str(&format!("{}\"field-{}\": ", indent, i));
        match i % 4 {
            0 => text.push_str(&format!("\"value \\\"{}\\\" \\u00e4\"", i)),
            1 => text.push_str(&format!("{}", i as i64 * -7919)),
            2 => text.push_str(&format!("{}.25e-3", i)),
            _ if level < depth => section(text, width, depth, level + 1),
            _ => text.push_str("{}"),
        }
        text.push_str(",\n");
    }
    text.push_str(&"    ".repeat(level));
    text.push('}');
}
