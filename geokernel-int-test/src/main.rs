use geokernel::{BoundingBox, Feature, FeatureCollection, GeoResult};
use geokernel_int_test::test_util::square;

fn main() -> GeoResult<()> {
    println!("Starting stress test...");

    let count = 250_000;
    let start = std::time::Instant::now();
    let features: FeatureCollection = (0..count)
        .map(|i| {
            let x = (i % 500) as f64 * 0.7 - 175.0;
            let y = (i / 500) as f64 * 0.3 - 75.0;
            Feature::new(square(x, y, x + 0.5, y + 0.2)).with_property("index", i)
        })
        .collect();
    println!("Built {} features in {:?}", features.len(), start.elapsed());

    let start = std::time::Instant::now();
    let bounds = features.bounds();
    println!("Computed {} in {:?}", bounds, start.elapsed());

    let start = std::time::Instant::now();
    let query = BoundingBox::new(150.0, -20.0, -150.0, 20.0);
    let found = features.features_in(&query).len();
    println!("Found {} features across the antimeridian in {:?}", found, start.elapsed());

    let start = std::time::Instant::now();
    let json = serde_json::to_string(&features.to_geojson())?;
    println!("Wrote {} bytes of GeoJSON in {:?}", json.len(), start.elapsed());

    Ok(())
}
