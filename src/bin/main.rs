#![warn(clippy::all)]

use vec3::Double3;

fn main() {
    let a = Double3::new(0.0, 1.0, 2.0);
    let b = Double3::new(0.0, 0.0, 1.0);

    println!("a - b = {}", a - b);
    println!("dot(a, b) = {}", a.dot(&b));
}
