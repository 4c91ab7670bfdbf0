//! Carrying mixed units through a single runtime type.
//!
//! `Distance` erases the compile-time unit tag while keeping the canonical
//! value, so heterogeneous quantities fit in one collection. `distance_cast`
//! recovers any typed view.

use measurement::{distance_cast, Distance, Feet, Kilometers, Meter, Meters, NauticalMiles};

fn main() {
    let legs: Vec<Distance> = vec![
        Kilometers::new(12.5).into(),
        Meters::new(840.0).into(),
        NauticalMiles::new(0.25).into(),
        Feet::new(660.0).into(),
    ];

    for leg in &legs {
        println!("leg: {}", leg);
    }

    let total = legs
        .iter()
        .fold(Meters::default(), |acc, leg| acc + distance_cast::<Meter>(*leg));
    println!("total: {}", total);
}
