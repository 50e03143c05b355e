#![allow(dead_code)]

#[derive(formbind::Record)]
pub struct Point(i32, i32);

fn main() {}
