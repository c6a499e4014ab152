use scatter_map::MapRenderer;
use scatter_sampling::{PointSampler, Region};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let region = Region::square(10_000);
    let renderer = MapRenderer::new(25, 25, 10_000, 10_000)?;

    // Same run, two separation thresholds
    for min_distance in [2500, 3000] {
        println!("min distance {}", min_distance);
        let points = PointSampler::new(region, min_distance).generate(23)?;
        renderer.render(&points)?;
        println!();
    }

    // A wider map only changes the z divisor
    let wide = MapRenderer::new(25, 50, 10_000, 10_000)?;
    let points = PointSampler::new(region, 2500).generate(23)?;
    println!("divisors: {:?}", wide.projection().divisors());
    wide.render(&points)?;

    Ok(())
}
