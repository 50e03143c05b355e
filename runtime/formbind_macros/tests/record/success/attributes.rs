use std::collections::HashMap;

use formbind::{FieldKind, Record, ScalarKind};

#[derive(formbind::Record, Default)]
pub struct Profile {
    #[bind(key = "user_name")]
    name: String,
    r#type: u8,
    #[bind(skip)]
    cache: std::cell::RefCell<Vec<u8>>,
    #[bind(key = "ignored", skip)]
    internal: Option<usize>,
    scores: Vec<f32>,
    extra: HashMap<String, String>,
}

fn main() {
    let fields = Profile::fields();
    assert_eq!(fields.len(), 6);

    assert_eq!(fields[0].name(), "name");
    assert_eq!(fields[0].key(), "user_name");
    assert_eq!(fields[0].kind(), Some(FieldKind::Scalar(ScalarKind::Text)));

    assert_eq!(fields[1].name(), "type");
    assert_eq!(fields[1].key(), "type");

    assert!(!fields[2].is_writable());
    assert_eq!(fields[2].kind(), None);

    assert_eq!(fields[3].key(), "ignored");
    assert!(!fields[3].is_writable());

    assert_eq!(
        fields[4].kind(),
        Some(FieldKind::Sequence(ScalarKind::Float))
    );
    assert_eq!(fields[5].kind(), Some(FieldKind::Unsupported));

    let profile = Profile::default();
    let _ = (&profile.name, profile.r#type, &profile.cache, profile.internal);
    let _ = (&profile.scores, &profile.extra);
}
