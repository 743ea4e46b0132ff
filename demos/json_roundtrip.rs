//! JSON round-trip example.
//!
//! Serializes a Container, reads it back, and shows that the reloaded
//! collection is equal to the one written out.

use punctum::{Container, Point, Vector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut container = Container::new();
    container.append(Point::new(1.0, 1.0, 1.0));
    container.append(Vector::with_start(2.0, 0.0, -1.5, Point::new(1.0, 1.0, 1.0)));

    let encoded = container.to_json_string();
    println!("encoded: {}", encoded);

    let decoded = Container::from_json_str(&encoded)?;
    println!("decoded: {}", decoded);
    assert_eq!(decoded, container);

    // Individual element JSON forms
    for element in &container {
        println!("{} -> {}", element, element.to_json_value());
    }

    Ok(())
}
