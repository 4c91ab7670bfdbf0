//! Serializing and deserializing distance quantities.
//!
//! Quantities serialize as their bare count by default; the
//! `serde_with_unit` helper preserves the unit symbol per field and
//! validates it on the way back in.
//!
//! Run with: cargo run --example serialization --features serde

#[cfg(feature = "serde")]
fn main() {
    use measurement::{Kilometers, Meters, Miles};
    use serde::{Deserialize, Serialize};

    // Default serialization: the count as a bare f64. The unit is NOT
    // preserved, so the reader must know which type to deserialize into.
    let distance = Meters::new(42.5);
    let json = serde_json::to_string(&distance).unwrap();
    println!("{} -> {}", distance, json);

    let restored: Meters = serde_json::from_str(&json).unwrap();
    println!("{} -> {}", json, restored);

    // Structs and collections of quantities work out of the box.
    #[derive(Serialize, Deserialize, Debug)]
    struct Route {
        name: String,
        length: Kilometers,
        legs: Vec<Meters>,
    }

    let route = Route {
        name: "harbor loop".to_string(),
        length: Kilometers::new(12.4),
        legs: vec![Meters::new(5200.0), Meters::new(4100.0), Meters::new(3100.0)],
    };
    println!("{}", serde_json::to_string_pretty(&route).unwrap());

    // serde_with_unit keeps the symbol alongside the value, per field.
    #[derive(Serialize, Deserialize, Debug)]
    struct Waypoint {
        name: String,

        #[serde(with = "measurement::serde_with_unit")]
        distance_from_start: Miles,

        // Internal field, compact form.
        elevation_gain: Meters,
    }

    let waypoint = Waypoint {
        name: "summit".to_string(),
        distance_from_start: Miles::new(3.2),
        elevation_gain: Meters::new(450.0),
    };
    println!("{}", serde_json::to_string_pretty(&waypoint).unwrap());

    // Deserialization validates the symbol when present.
    let wrong_unit = r#"{"name": "summit", "distance_from_start": {"value": 3.2, "unit": "km"}, "elevation_gain": 450.0}"#;
    match serde_json::from_str::<Waypoint>(wrong_unit) {
        Ok(_) => println!("unexpected: wrong unit accepted"),
        Err(e) => println!("rejected wrong unit: {}", e),
    }

    // The unit field is optional for backwards compatibility.
    let no_unit = r#"{"name": "summit", "distance_from_start": {"value": 3.2}, "elevation_gain": 450.0}"#;
    let restored: Waypoint = serde_json::from_str(no_unit).unwrap();
    println!("without unit field: {}", restored.distance_from_start);
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
