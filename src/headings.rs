//! Section headings for known input files.

/// Lowercased file name and the heading shown above its table.
pub const HEADINGS: &[(&str, &str)] = &[
    ("q0.csv", "Question 1"),
    ("q1.csv", "Question 2"),
    ("q2.csv", "Question 3"),
    ("q3.csv", "Question 4"),
    ("q4.csv", "Question 5"),
    ("q5.csv", "Question 6"),
    ("q6.csv", "Question 7"),
    ("q7.csv", "Question 8"),
    ("cross_table.csv", "Deviations across questions"),
];

/// Heading for a file name; unknown names are used as-is.
pub fn resolve_heading(name: &str) -> &str {
    let key = name.to_lowercase();
    HEADINGS
        .iter()
        .find(|(file, _)| *file == key)
        .map(|(_, heading)| *heading)
        .unwrap_or(name)
}
