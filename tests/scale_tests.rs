use bidsort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn reverse_sorted_1000_distinct_keys() {
    // Zero-padded so byte order matches numeric order. Asserts correct
    // output and completion, not a time bound.
    let mut titles: Vec<String> = (0..1000).rev().map(|i| format!("key-{i:04}")).collect();

    let end = titles.len() - 1;
    let start = Instant::now();
    quick_sort(&mut titles, 0, end).unwrap();
    println!("quick_sort, 1000 reverse-sorted keys: {:?}", start.elapsed());

    let expected: Vec<String> = (0..1000).map(|i| format!("key-{i:04}")).collect();
    assert_eq!(titles, expected);
}

#[test]
fn presorted_1000_keys_stay_put() {
    let expected: Vec<String> = (0..1000).map(|i| format!("key-{i:04}")).collect();

    let mut titles = expected.clone();
    let end = titles.len() - 1;
    quick_sort(&mut titles, 0, end).unwrap();
    assert_eq!(titles, expected);

    let mut titles = expected.clone();
    quick_sort_iterative(&mut titles, 0, end).unwrap();
    assert_eq!(titles, expected);
}

#[test]
fn random_100k_keys_iterative() {
    let count = 100_000;
    let mut rng = rand::rng();

    let mut titles: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(4..16);
            (0..len)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect();

    let mut expected = titles.clone();
    expected.sort();

    let end = titles.len() - 1;
    let start = Instant::now();
    quick_sort_iterative(&mut titles, 0, end).unwrap();
    println!("quick_sort_iterative, {count} random keys: {:?}", start.elapsed());

    assert_eq!(titles, expected);
}

#[test]
fn selection_sort_2000_random_keys() {
    let count = 2_000;
    let mut rng = rand::rng();

    let mut titles: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(1..10);
            (0..len)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect();

    let mut expected = titles.clone();
    expected.sort();

    let start = Instant::now();
    selection_sort(&mut titles);
    println!("selection_sort, {count} random keys: {:?}", start.elapsed());

    assert_eq!(titles, expected);
}
