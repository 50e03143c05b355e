#![allow(dead_code)]

#[derive(formbind::Record)]
pub struct Wrapper<T> {
    value: T,
}

fn main() {}
