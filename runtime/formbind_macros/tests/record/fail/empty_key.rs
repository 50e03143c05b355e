#![allow(dead_code)]

#[derive(formbind::Record)]
pub struct Login {
    #[bind(key = "")]
    user: String,
    password: String,
}

fn main() {}
