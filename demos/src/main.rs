//! Cosine driver.
//!
//! Prints the cosine of a few known angles and of a labeled collection, then
//! evaluates one full period sampled every 0.1 rad and hands it to the plotter.
//!
//! Set `RUST_LOG=debug` to see which element pass each adapter picks.

mod plot;

use fastCosine::prelude::*;
use log::info;
use std::f64::consts::PI;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Cosine Demo");
    println!("===========");
    println!();

    run_scalars()?;
    println!();

    run_labeled()?;
    println!();

    run_full_period()?;

    Ok(())
}

/// Cosine of 0, 1, pi/2 and pi.
fn run_scalars() -> Result<(), Box<dyn std::error::Error>> {
    println!("1. Scalars");
    println!("----------");

    let model = Cosine::<f64>::new().adapter(Scalar).build()?;
    for x in [0.0, 1.0, PI / 2.0, PI] {
        println!("cos({:.6}) = {}", x, model.evaluate(x));
    }

    Ok(())
}

/// Cosine of a four-entry labeled collection.
fn run_labeled() -> Result<(), Box<dyn std::error::Error>> {
    println!("2. Labeled Collection");
    println!("---------------------");

    let mut to_cos = LabeledMap::new();
    to_cos.insert("zero".to_string(), 0.0);
    to_cos.insert("one".to_string(), 1.0);
    to_cos.insert("half_pi".to_string(), PI / 2.0);
    to_cos.insert("pi".to_string(), PI);

    let model = Cosine::<f64>::new().adapter(Labeled).build()?;
    let result = model.evaluate(&to_cos);

    println!("{}", CosineOutput::Labeled(result));

    Ok(())
}

/// One full period, x in [0, 2pi) with step 0.1.
fn run_full_period() -> Result<(), Box<dyn std::error::Error>> {
    println!("3. Full Period");
    println!("--------------");

    let x = full_period(0.1)?;
    let model = Cosine::<f64>::new().adapter(Array).build()?;
    let y = model.evaluate(&x)?;
    info!("evaluated {} points", y.len());

    println!("{}", CosineOutput::Array(y.clone()));

    let output_dir = Path::new("output");
    std::fs::create_dir_all(output_dir)?;
    let csv_path = output_dir.join("cosine.csv");

    plot::write_csv(&csv_path, &x, &y)?;
    println!("Saved {} points to {}", x.len(), csv_path.display());
    println!();

    print!("{}", plot::render_ascii(&x, &y, 64, 17));

    Ok(())
}
