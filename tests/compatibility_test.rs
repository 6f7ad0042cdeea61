use bidsort::prelude::*;

// Column-major storage: titles and amounts live in parallel vectors, like a
// small ledger table. Proves KeyAccess is implementable by outside crates
// without copying into an intermediate collection.
struct Ledger {
    titles: Vec<String>,
    amounts: Vec<f64>,
}

impl Ledger {
    fn new(rows: &[(&str, f64)]) -> Self {
        Self {
            titles: rows.iter().map(|(t, _)| t.to_string()).collect(),
            amounts: rows.iter().map(|(_, a)| *a).collect(),
        }
    }
}

impl KeyAccess for Ledger {
    fn key(&self, index: usize) -> &str {
        &self.titles[index]
    }

    fn len(&self) -> usize {
        self.titles.len()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.titles.swap(a, b);
        self.amounts.swap(a, b);
    }
}

#[test]
fn external_columnar_storage_sorts_with_rows_paired() {
    let mut ledger = Ledger::new(&[("foo", 3.0), ("bar", 1.0), ("baz", 2.0)]);

    quick_sort(&mut ledger, 0, 2).unwrap();

    assert_eq!(ledger.titles, ["bar", "baz", "foo"]);
    assert_eq!(ledger.amounts, [1.0, 2.0, 3.0]);
}

#[test]
fn both_strategies_agree_on_external_storage() {
    let rows = [
        ("delta", 4.0),
        ("alpha", 1.0),
        ("charlie", 3.0),
        ("bravo", 2.0),
        ("alpha", 1.5),
    ];

    let mut quick = Ledger::new(&rows);
    quick_sort(&mut quick, 0, rows.len() - 1).unwrap();

    let mut selection = Ledger::new(&rows);
    selection_sort(&mut selection);

    assert_eq!(quick.titles, selection.titles);
    assert_eq!(
        quick.titles,
        ["alpha", "alpha", "bravo", "charlie", "delta"]
    );
}
