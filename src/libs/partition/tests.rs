use super::*;

fn items(values: &[f64]) -> Vec<LabeledValue> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| LabeledValue::new(&format!("row{}", i), *v))
        .collect()
}

fn names(node: &PartitionNode) -> Vec<&str> {
    node.leaves().iter().map(|leaf| leaf.name()).collect()
}

#[test]
fn test_partition_shape() {
    let root = partition(items(&[0.9, 0.1, 0.5, 0.3, 0.7, 0.2, 0.8, 0.4, 0.6]));

    //          Whole set
    //         /         \
    //    1st half      2nd half
    //    /     \        /     \
    //  1st    2nd     3rd    4th
    assert_eq!(root.name(), WHOLE_SET);
    assert_eq!(root.height(), 3);
    assert_eq!(root.children().len(), 2);
    for half in root.children() {
        assert!(!half.is_leaf());
        assert_eq!(half.children().len(), 2);
        assert!(half.value().is_none());
    }

    let quartiles: Vec<&str> = root
        .children()
        .iter()
        .flat_map(|half| half.children().iter().map(|q| q.name()))
        .collect();
    assert_eq!(
        quartiles,
        vec!["1st quartile", "2nd quartile", "3rd quartile", "4th quartile"]
    );
}

#[test]
fn test_partition_keeps_every_item_once() {
    let values = [5.0, 3.0, 3.0, 8.0, 1.0, 9.0, 3.0, 2.0, 7.0, 7.0, 0.0];
    let root = partition(items(&values));

    let mut seen = names(&root);
    assert_eq!(seen.len(), values.len());
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), values.len());

    approx::assert_relative_eq!(root.total(), values.iter().sum::<f64>());
}

#[test]
fn test_partition_first_split_by_median() {
    // sorted: 1 2 3 4 5 6, median 3.5
    let root = partition(items(&[6.0, 1.0, 4.0, 2.0, 5.0, 3.0]));
    let low = &root.children()[0];
    let high = &root.children()[1];

    assert!(low.leaves().iter().all(|l| l.value().unwrap() < 3.5));
    assert!(high.leaves().iter().all(|l| l.value().unwrap() >= 3.5));
    // quartile order, then original order inside each quartile
    assert_eq!(names(low), vec!["row1", "row3", "row5"]);
    assert_eq!(names(high), vec!["row2", "row0", "row4"]);
}

#[test]
fn test_split_preserves_original_order() {
    let leaves = items(&[6.0, 1.0, 4.0, 2.0, 5.0, 3.0])
        .into_iter()
        .map(PartitionNode::from)
        .collect();
    let node = PartitionNode::branch("all", leaves).split("low", "high");

    assert_eq!(names(&node.children()[0]), vec!["row1", "row3", "row5"]);
    assert_eq!(names(&node.children()[1]), vec!["row0", "row2", "row4"]);
}

#[test]
fn test_partition_ties_go_high() {
    let root = partition(items(&[2.0, 1.0, 2.0, 3.0, 2.0]));
    let low = &root.children()[0];
    let high = &root.children()[1];

    // median is 2.0
    assert_eq!(names(low), vec!["row1"]);
    assert_eq!(names(high), vec!["row0", "row2", "row3", "row4"]);

    // [2, 2, 3, 2] has median 2.0 again, nothing is strictly below
    assert!(high.children()[0].children().is_empty());
    assert_eq!(high.children()[1].children().len(), 4);
}

#[test]
fn test_partition_constant_values() {
    let root = partition(items(&[4.0, 4.0, 4.0]));
    assert_eq!(root.leaves().len(), 3);
    assert!(root.children()[0].children()[0].children().is_empty());
    assert!(root.children()[0].children()[1].children().is_empty());
    assert_eq!(names(&root.children()[1].children()[1]), vec!["row0", "row1", "row2"]);
}

#[test]
fn test_partition_empty_and_single() {
    let root = partition(vec![]);
    assert_eq!(root.leaves().len(), 0);
    assert_eq!(root.height(), 2);

    let root = partition(items(&[1.5]));
    assert_eq!(names(&root), vec!["row0"]);
    assert_eq!(root.children()[1].children()[1].children()[0].value(), Some(1.5));
}

#[test]
fn test_split_sends_branches_high() {
    let node = PartitionNode::branch(
        "mixed",
        vec![
            PartitionNode::branch("inner", vec![]),
            LabeledValue::new("x", 1.0).into(),
            LabeledValue::new("y", 3.0).into(),
        ],
    )
    .split("low", "high");

    assert_eq!(names(&node.children()[0]), vec!["x"]);
    let high: Vec<&str> = node.children()[1].children().iter().map(|c| c.name()).collect();
    assert_eq!(high, vec!["inner", "y"]);
}

#[test]
fn test_partition_serializes_for_layout() {
    let root = partition(items(&[1.0, 2.0]));
    let json = serde_json::to_value(&root).unwrap();

    assert_eq!(json["name"], "Whole set");
    assert_eq!(json["children"][0]["name"], "1st half");
    assert_eq!(json["children"][1]["children"][1]["children"][0]["name"], "row1");
    assert_eq!(json["children"][1]["children"][1]["children"][0]["value"], 2.0);
    assert!(json["children"][0].get("value").is_none());
}
