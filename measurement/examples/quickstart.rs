//! Minimal end-to-end example: construct, convert, and mix distance units.

use measurement::{Feet, Kilometer, Kilometers, Meters, Miles};

fn main() {
    let m = Meters::new(1000.0);
    let km = m.to::<Kilometer>();
    println!("{} = {}", m, km);

    // Mixed-unit arithmetic operates on canonical values; the result keeps
    // the left operand's unit.
    let total = Meters::new(1.0) + Feet::new(3.28084);
    assert!((total.count() - 2.0).abs() < 1e-5);
    println!("1 m + 3.28084 ft = {}", total);

    let marathon: Kilometers = Miles::new(26.219).into();
    println!("a marathon is {}", marathon);
}
