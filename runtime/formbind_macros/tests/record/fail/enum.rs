#![allow(dead_code)]

#[derive(formbind::Record)]
pub enum Choice {
    Yes,
    No,
}

fn main() {}
