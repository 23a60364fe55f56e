use scalar_field::Grid2D;

fn main() {
    env_logger::init();
    println!("--- Generic 2D field simulator ---");

    println!("\n>> Gravitational field (f32) <<");
    let mut field: Grid2D<f32> = Grid2D::new(3, 3);
    println!("Created 3x3 grid, setting initial values...");
    let samples = [[10.0, 8.0, 5.0], [12.0, 9.0, 6.0], [15.0, 11.0, 7.0]];
    for (r, row) in samples.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            field.set_value(r, c, v);
        }
    }
    println!("\nCurrent grid (step 0):");
    print!("{}", field.render());

    println!("\nAverage gradient over rows [0,2] x cols [0,2]...");
    match field.average_gradient(0, 2, 0, 2) {
        Ok(g) => println!("Average gradient: {g:.5} units/m"),
        Err(err) => eprintln!("Error: {err}"),
    }

    println!("\nResizing grid to 4x4...");
    field.resize(4, 4);
    print!("{}", field.render());

    println!("\nResizing grid to 2x2...");
    field.resize(2, 2);
    print!("{}", field.render());

    println!("\n>> Potential field (i32) <<");
    let potential: Grid2D<i32> = Grid2D::new(2, 4);
    println!("Created 2x4 grid.");
    println!("\nCurrent grid (step 0):");
    print!("{}", potential.render());

    println!("\nDone.");
}
