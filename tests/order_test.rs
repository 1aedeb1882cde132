//! Integration tests for input ordering.

use csv2docx::{order, DataTable, NamedInput, SENTINEL_FILE};

fn inputs(names: &[&str]) -> Vec<NamedInput> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| NamedInput::new(*n, format!("id\n{}\n", i)))
        .collect()
}

fn names(items: &[NamedInput]) -> Vec<String> {
    items.iter().map(|i| i.name.clone()).collect()
}

/// Every arrangement of a small name set, generated by rotation and reversal.
fn arrangements(base: &[&'static str]) -> Vec<Vec<&'static str>> {
    let mut all = Vec::new();
    for shift in 0..base.len() {
        let mut rotated = base.to_vec();
        rotated.rotate_left(shift);
        all.push(rotated.clone());
        rotated.reverse();
        all.push(rotated);
    }
    all
}

#[test]
fn test_sentinel_after_all_regular_items() {
    let base = ["q0.csv", "CROSS_TABLE.csv", "q1.csv", "foo.csv", "cross_table.csv"];
    for arrangement in arrangements(&base) {
        let ordered = names(&order(inputs(&arrangement)));
        let first_special = ordered
            .iter()
            .position(|n| n.to_lowercase() == SENTINEL_FILE)
            .unwrap();

        assert!(ordered[..first_special]
            .iter()
            .all(|n| n.to_lowercase() != SENTINEL_FILE));
        assert!(ordered[first_special..]
            .iter()
            .all(|n| n.to_lowercase() == SENTINEL_FILE));
    }
}

#[test]
fn test_relative_order_preserved_in_both_groups() {
    let base = ["q2.csv", "Cross_Table.csv", "q0.csv", "cross_table.CSV", "bar.csv"];
    for arrangement in arrangements(&base) {
        let ordered = names(&order(inputs(&arrangement)));

        let expected_regular: Vec<&str> = arrangement
            .iter()
            .copied()
            .filter(|n| n.to_lowercase() != SENTINEL_FILE)
            .collect();
        let expected_special: Vec<&str> = arrangement
            .iter()
            .copied()
            .filter(|n| n.to_lowercase() == SENTINEL_FILE)
            .collect();

        let expected: Vec<String> = expected_regular
            .into_iter()
            .chain(expected_special)
            .map(String::from)
            .collect();
        assert_eq!(ordered, expected);
    }
}

#[test]
fn test_order_is_stable_when_reapplied() {
    let base = ["cross_table.csv", "q1.csv", "q0.csv", "zzz.csv"];
    for arrangement in arrangements(&base) {
        let once = order(inputs(&arrangement));
        let twice = order(once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn test_order_parsed_tables() {
    let tables = vec![
        DataTable::new("cross_table.csv", vec!["a".into()]),
        DataTable::new("q1.csv", vec!["a".into()]),
    ];
    let ordered = order(tables);
    assert_eq!(ordered[0].name, "q1.csv");
    assert_eq!(ordered[1].name, "cross_table.csv");
}

#[test]
fn test_empty_input() {
    assert!(order(Vec::<NamedInput>::new()).is_empty());
}
