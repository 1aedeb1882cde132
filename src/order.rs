//! Input ordering: the cross-question table always goes last.

use log::debug;

use crate::model::{DataTable, NamedInput};

/// File name (compared case-insensitively) of the table rendered last.
pub const SENTINEL_FILE: &str = "cross_table.csv";

/// Anything identified by an original file name.
pub trait Named {
    /// The original file name.
    fn name(&self) -> &str;
}

impl Named for NamedInput {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for DataTable {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Check whether a file name is the sentinel.
pub fn is_special(name: &str) -> bool {
    name.to_lowercase() == SENTINEL_FILE
}

/// Stable partition: regular items first, then sentinel items.
///
/// Both groups keep their input order. Applying it twice is the same as
/// applying it once.
pub fn order<T: Named>(inputs: Vec<T>) -> Vec<T> {
    let (mut regular, special): (Vec<T>, Vec<T>) =
        inputs.into_iter().partition(|item| !is_special(item.name()));

    if !special.is_empty() {
        debug!(
            "Moving {} {} item(s) after {} other input(s)",
            special.len(),
            SENTINEL_FILE,
            regular.len()
        );
    }

    regular.extend(special);
    regular
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(names: &[&str]) -> Vec<NamedInput> {
        names.iter().map(|n| NamedInput::new(*n, Vec::new())).collect()
    }

    fn names(items: &[NamedInput]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_sentinel_moves_last() {
        let ordered = order(inputs(&["cross_table.csv", "q0.csv", "q1.csv"]));
        assert_eq!(names(&ordered), vec!["q0.csv", "q1.csv", "cross_table.csv"]);
    }

    #[test]
    fn test_case_insensitive() {
        let ordered = order(inputs(&["Cross_Table.CSV", "q2.csv"]));
        assert_eq!(names(&ordered), vec!["q2.csv", "Cross_Table.CSV"]);
    }

    #[test]
    fn test_no_sentinel_unchanged() {
        let ordered = order(inputs(&["q3.csv", "q1.csv", "foo.csv"]));
        assert_eq!(names(&ordered), vec!["q3.csv", "q1.csv", "foo.csv"]);
    }

    #[test]
    fn test_multiple_sentinels_keep_relative_order() {
        let ordered = order(inputs(&[
            "CROSS_TABLE.csv",
            "q0.csv",
            "cross_table.csv",
            "q1.csv",
        ]));
        assert_eq!(
            names(&ordered),
            vec!["q0.csv", "q1.csv", "CROSS_TABLE.csv", "cross_table.csv"]
        );
    }

    #[test]
    fn test_empty() {
        let ordered: Vec<NamedInput> = order(Vec::new());
        assert!(ordered.is_empty());
    }

    #[test]
    fn test_near_miss_names_are_regular() {
        assert!(is_special("cross_table.csv"));
        assert!(is_special("CROSS_TABLE.CSV"));
        assert!(!is_special(" cross_table.csv"));
        assert!(!is_special("cross_table.csv.bak"));
        assert!(!is_special("my_cross_table.csv"));
    }

    #[test]
    fn test_works_on_references() {
        let owned = inputs(&["cross_table.csv", "q0.csv"]);
        let ordered = order(owned.iter().collect());
        assert_eq!(ordered[0].name, "q0.csv");
        assert_eq!(ordered[1].name, "cross_table.csv");
    }
}
