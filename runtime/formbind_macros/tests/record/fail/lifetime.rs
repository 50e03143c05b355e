#![allow(dead_code)]

#[derive(formbind::Record)]
pub struct Borrowed<'a> {
    name: &'a str,
}

fn main() {}
