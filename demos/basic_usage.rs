//! Basic usage example for the geometry types.
//!
//! Builds Points and Vectors from values and from text, runs the vector
//! arithmetic, and collects everything into a Container.

use punctum::{Container, Point, Vector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("punctum basic usage");
    println!("===================");

    // Points: from values and from text
    let origin = Point::origin();
    let parsed: Point = "(1;2.5;3)".parse()?;
    println!("origin = {}, parsed = {}", origin, parsed);

    // Vectors: coordinate mode and endpoint mode
    let from_coords = Vector::new(2.0, 3.0, 2.0);
    let from_points = Vector::between(Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.0, 2.0));
    println!("from coords = {}", from_coords);
    println!("from points = {}", from_points);

    // Arithmetic
    let scaled = from_coords * 2.0;
    let dot = from_coords * from_points;
    let cross = Vector::cross(&from_coords, &from_points);
    println!("scaled = {}", scaled);
    println!("dot = {}", dot);
    println!("cross = {}", cross);
    println!(
        "collinear with double: {}",
        Vector::collinear(&from_coords, &scaled)
    );

    // A container over both kinds
    let mut container = Container::new();
    container.append(parsed);
    container.append(from_coords);
    container.append(cross);
    println!("container = {}", container);
    println!("as JSON = {}", container.to_json_string());

    Ok(())
}
