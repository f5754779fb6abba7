//! Detects corners on a synthetic checkerboard and prints them.

use harris_corners::{detect, HarrisConfig, Matrix};

fn main() {
    let (size, square) = (128usize, 16usize);
    let img = Matrix::from_fn(size, size, |i, j| {
        if (i / square + j / square) % 2 == 0 {
            255.0
        } else {
            0.0
        }
    });

    let corners = detect(&img, &HarrisConfig::default()).expect("checkerboard fits the kernels");

    println!("found {} corners on a {size}x{size} checkerboard", corners.len());
    for c in &corners {
        println!("({}, {})", c.x, c.y);
    }
}
