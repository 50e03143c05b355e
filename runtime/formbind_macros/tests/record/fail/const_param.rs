#![allow(dead_code)]

#[derive(formbind::Record)]
pub struct Buffer<const N: usize> {
    bytes: [u8; N],
}

fn main() {}
