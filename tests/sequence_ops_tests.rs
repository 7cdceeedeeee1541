//! Integration tests for the structural slice operations and the
//! traversal/fold helpers.

use rstest::rstest;

use seqkit::sequence::{
    clip, contains, contains_by, delete, equal, equal_by, filter, index_by, index_of, reduce,
    replace, split, try_for_each, unique,
};

// =============================================================================
// equal / equal_by Tests
// =============================================================================

#[rstest]
fn equal_is_true_for_identical_slices() {
    assert!(equal(&[1, 2, 3], &[1, 2, 3]));
    assert!(equal::<i32>(&[], &[]));
}

#[rstest]
fn equal_is_false_on_length_mismatch() {
    assert!(!equal(&[1, 2, 3], &[1, 2]));
}

#[rstest]
fn equal_is_false_on_first_unequal_pair() {
    assert!(!equal(&[1, 2, 3], &[1, 9, 3]));
}

#[rstest]
fn equal_by_compares_heterogeneous_element_types() {
    let numbers = [1, 2, 3];
    let words = ["1", "2", "3"];
    assert!(equal_by(&numbers, &words, |n, w| n.to_string() == *w));
    assert!(!equal_by(&numbers, &["1", "2"], |n, w| n.to_string() == *w));
}

// =============================================================================
// Search Tests
// =============================================================================

#[rstest]
fn index_of_returns_first_match() {
    assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
}

#[rstest]
fn index_of_returns_none_when_absent() {
    assert_eq!(index_of(&[10, 20, 30], &40), None);
}

#[rstest]
fn index_by_returns_first_satisfying_index() {
    assert_eq!(index_by(&[1, 3, 4, 6], |v| v % 2 == 0), Some(2));
    assert_eq!(index_by(&[1, 3, 5], |v| v % 2 == 0), None);
}

#[rstest]
fn contains_reports_presence() {
    assert!(contains(&[1, 2, 3], &2));
    assert!(!contains(&[1, 2, 3], &4));
    assert!(contains_by(&[1, 2, 3], |v| *v > 2));
    assert!(!contains_by(&[1, 2, 3], |v| *v > 3));
}

// =============================================================================
// delete / replace Tests
// =============================================================================

#[rstest]
fn delete_removes_half_open_range_in_place() {
    let mut v = vec![1, 2, 3, 4, 5];
    delete(&mut v, 1, 3);
    assert_eq!(v, vec![1, 4, 5]);
}

#[rstest]
fn delete_of_empty_range_is_a_no_op() {
    let mut v = vec![1, 2, 3];
    delete(&mut v, 1, 1);
    assert_eq!(v, vec![1, 2, 3]);
}

#[rstest]
#[should_panic(expected = "start")]
fn delete_panics_when_start_exceeds_end() {
    let mut v = vec![1, 2, 3];
    delete(&mut v, 2, 1);
}

#[rstest]
#[should_panic(expected = "out of")]
fn delete_panics_when_end_exceeds_length() {
    let mut v = vec![1, 2, 3];
    delete(&mut v, 0, 4);
}

#[rstest]
fn replace_with_shorter_replacement_shrinks() {
    let mut v = vec![1, 2, 3, 4, 5];
    replace(&mut v, 1, 4, [9]);
    assert_eq!(v, vec![1, 9, 5]);
}

#[rstest]
fn replace_with_longer_replacement_grows_and_keeps_tail() {
    let mut v = vec![1, 2, 3, 4];
    replace(&mut v, 1, 2, [7, 8, 9]);
    assert_eq!(v, vec![1, 7, 8, 9, 3, 4]);
}

#[rstest]
fn replace_with_empty_replacement_equals_delete() {
    let mut replaced = vec![1, 2, 3, 4, 5];
    let mut deleted = replaced.clone();
    replace(&mut replaced, 1, 3, []);
    delete(&mut deleted, 1, 3);
    assert_eq!(replaced, deleted);
}

#[rstest]
#[should_panic(expected = "out of")]
fn replace_panics_on_invalid_range() {
    let mut v = vec![1, 2, 3];
    replace(&mut v, 0, 4, [9]);
}

// =============================================================================
// clip / filter / unique Tests
// =============================================================================

#[rstest]
fn clip_drops_spare_capacity_and_is_idempotent() {
    let mut v = Vec::with_capacity(64);
    v.extend([1, 2, 3]);
    clip(&mut v);
    assert_eq!(v.capacity(), 3);
    clip(&mut v);
    assert_eq!(v.capacity(), 3);
    assert_eq!(v, vec![1, 2, 3]);
}

#[rstest]
fn filter_preserves_relative_order_and_right_sizes() {
    let survivors = filter(&[1, 2, 3, 4, 5, 6], |v| v % 2 == 0);
    assert_eq!(survivors, vec![2, 4, 6]);
    assert_eq!(survivors.capacity(), 3);
}

#[rstest]
fn filter_with_rejecting_predicate_is_empty() {
    assert_eq!(filter(&[1, 2, 3], |_| false), Vec::<i32>::new());
}

#[rstest]
fn unique_keeps_first_occurrences_in_order() {
    assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
}

#[rstest]
fn unique_is_idempotent() {
    let once = unique(&[5, 5, 4, 5, 3]);
    assert_eq!(unique(&once), once);
}

// =============================================================================
// split Tests
// =============================================================================

#[rstest]
fn split_chunks_with_shorter_tail() {
    let s = [1, 2, 3, 4, 5];
    let chunks = split(&s, 2);
    assert_eq!(chunks, vec![&s[0..2], &s[2..4], &s[4..5]]);
}

#[rstest]
#[case(0)]
#[case(5)]
#[case(9)]
fn split_degenerate_sizes_yield_single_chunk(#[case] n: usize) {
    let s = [1, 2, 3, 4, 5];
    assert_eq!(split(&s, n), vec![&s[..]]);
}

#[rstest]
fn split_of_empty_input_yields_no_chunks() {
    assert_eq!(split::<i32>(&[], 3), Vec::<&[i32]>::new());
}

#[rstest]
fn split_chunk_count_is_ceiling_of_len_over_n() {
    let s: Vec<i32> = (0..10).collect();
    assert_eq!(split(&s, 3).len(), 4);
    assert_eq!(split(&s, 5).len(), 2);
}

// =============================================================================
// try_for_each / reduce Tests
// =============================================================================

#[rstest]
fn try_for_each_visits_every_element_in_order() {
    let mut visited = Vec::new();
    let outcome: Result<(), ()> = try_for_each(&[10, 20, 30], |v, k| {
        visited.push((*v, k));
        Ok(())
    });
    assert_eq!(outcome, Ok(()));
    assert_eq!(visited, vec![(10, 0), (20, 1), (30, 2)]);
}

#[rstest]
fn try_for_each_stops_at_first_error() {
    // index 2 で失敗したら 3 と 4 は訪問されない
    let mut visited = 0;
    let outcome = try_for_each(&[0, 1, 2, 3, 4], |_, k| {
        if k == 2 {
            return Err("stop");
        }
        visited += 1;
        Ok(())
    });
    assert_eq!(outcome, Err("stop"));
    assert_eq!(visited, 2);
}

#[rstest]
fn reduce_sums_into_a_numeric_accumulator() {
    let total: i32 = reduce(&[1, 3, 5, 7, 9], |acc, v, _| *acc += v);
    assert_eq!(total, 25);
}

#[rstest]
fn reduce_builds_a_map_accumulator() {
    use std::collections::HashMap;
    let by_value: HashMap<i32, usize> = reduce(&[7, 8, 9], |acc: &mut HashMap<i32, usize>, v, k| {
        acc.insert(*v, k);
    });
    assert_eq!(by_value[&8], 1);
}

#[rstest]
fn reduce_builds_a_vec_accumulator() {
    let squares: Vec<i32> = reduce(&[1, 3, 5], |acc: &mut Vec<i32>, v, _| acc.push(v * v));
    assert_eq!(squares, vec![1, 9, 25]);
}

#[rstest]
fn reduce_builds_a_struct_accumulator() {
    #[derive(Default)]
    struct Tally {
        total: i32,
    }
    let tally: Tally = reduce(&[1, 3, 5, 7, 9], |acc: &mut Tally, v, _| acc.total += v);
    assert_eq!(tally.total, 25);
}
