use std::collections::HashMap;

use formbind::BindError;

#[derive(formbind::Record, Default)]
pub struct Login {
    user: String,
}

fn main() {
    let input: HashMap<String, String> = HashMap::new();
    let err = formbind::from_map(&input, Login::default()).unwrap_err();
    assert!(matches!(err, BindError::NotAReference { .. }));
}
