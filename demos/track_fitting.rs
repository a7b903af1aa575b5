// demos/track_fitting.rs

// Following a noisy live track along a known route.
// Run with:
// RUST_LOG=debug cargo run --example track_fitting

use latlng::prelude::*;
use latlng::trajectory::*;

// Use Anyhow for convenient error handling
fn main() -> anyhow::Result<()> {
    // The library logs its decisions through the `log` facade, so any
    // logger will do. Here, env_logger, controlled by RUST_LOG
    env_logger::init();

    // A route, as it would arrive from a Chinese map service: in GCJ02
    // ("Mars") coordinates. All geodesic computations are carried out on
    // WGS84, so we start by converting the route back.
    let route_gcj = [
        GeoPoint::new(31.6934, 119.8060),
        GeoPoint::new(31.6921, 119.8131),
        GeoPoint::new(31.6890, 119.8205),
        GeoPoint::new(31.6842, 119.8244),
        GeoPoint::new(31.6790, 119.8259),
    ];
    let route: Polyline = route_gcj
        .iter()
        .map(|p| p.convert(CoordinateSystem::Gcj02, CoordinateSystem::Wgs84))
        .collect();
    println!("route, WGS84:");
    for point in &route {
        println!("    {point:?}");
    }

    // How long is it, and which way does it start out?
    let length = total_distance(&route)?;
    let first = latlng::distance_and_bearing(&route[0], &route[1])?;
    println!("length: {length:.1} m, initial bearing: {:.2}°", first.initial_bearing);

    // The vertices of the route are unevenly spaced. Snapping works best on
    // an evenly resampled reference, so we resample it at 10 m spacing
    let reference = resample(&route, 10.)?;
    println!("resampled: {} -> {} points", route.len(), reference.len());

    // Now fake a live GPS track: walk along the reference, and add a few
    // meters of sideways noise to each position
    let mut live = Polyline::new();
    for (i, point) in reference.iter().take(80).enumerate() {
        let sideways: f64 = if i % 2 == 0 { 3. } else { -3. };
        let heading = reference.get(i + 1).map_or(Ok(0.), |next| latlng::bearing(point, next))?;
        live.push(latlng::destination(point, sideways.abs(), heading + sideways.signum() * 90.)?);
    }

    // The noise is mostly removed by simplification...
    let simplified = simplify(&live)?;
    println!("simplified: {} -> {} points", live.len(), simplified.len());

    // ...and the position along the route is found by projecting the track
    // onto the reference
    let fitted = project_line_onto_reference(&live, &reference, DEFAULT_OFFSET)?;
    let covered = total_distance(&fitted)?;
    println!("fitted: {} points, {covered:.1} m along the route", fitted.len());

    // Finally, show the current position in BD09, for use with Baidu maps
    if let Some(here) = fitted.last() {
        let bd = here.convert(CoordinateSystem::Wgs84, CoordinateSystem::Bd09);
        println!("current position, BD09: {bd:?}");

        // Are we there yet?
        let destination = route[route.len() - 1];
        let arrived = latlng::is_point_in_circle(here, &destination, 50., 5.)?;
        println!("arrived: {arrived}");
    }
    Ok(())
}
