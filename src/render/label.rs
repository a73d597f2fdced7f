// src/render/label.rs

use crate::course::Course;

/// Separator between hover label lines (HTML line break, as understood by
/// the plotting front-end).
pub const LABEL_SEPARATOR: &str = "<br>";

/// Build the hover text of a course.
///
/// Each display name is resolved against the course attributes through
/// [`crate::course::normalize_key`] and rendered as `"<Name>: <value>"`,
/// where `<Name>` is the display name with only its first letter upper-case.
/// Missing attributes render as an empty value.
///
/// ```text
/// ["Course Name", "Semester"]  ->  "Course name: Algorithms<br>Semester: 3"
/// ```
pub fn generate_label<S: AsRef<str>>(course: &Course, label_columns: &[S]) -> String {
    label_columns
        .iter()
        .map(|column| {
            let column = column.as_ref();
            let value = course
                .attributes()
                .lookup(column)
                .map(|v| v.to_string())
                .unwrap_or_default();
            format!("{}: {}", capitalize(column), value)
        })
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR)
}

/// First character title-case, the rest lower-case.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(s.len());
    match title_case(first) {
        Some(title) => out.push(title),
        None => out.extend(first.to_uppercase()),
    }
    out.push_str(&chars.as_str().to_lowercase());
    out
}

/// Characters whose title case differs from their upper case. Only the Latin
/// digraphs are covered.
fn title_case(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}
