use std::collections::HashMap;

#[derive(formbind::Record, Default)]
struct Empty {}

fn main() {
    let mut empty = Empty::default();
    let input = HashMap::from([("anything".to_string(), "1".to_string())]);
    formbind::from_map(&input, &mut empty).unwrap();
    assert!(<Empty as formbind::Record>::fields().is_empty());
}
