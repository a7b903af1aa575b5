//! Projection of points and tracks onto a reference line
use super::require_points;
use super::require_tolerance;
use super::simplify;
use super::DEFAULT_OFFSET;
use crate::internal::*;
use crate::Polyline;

/// [`nearest_segments`] returns at most this many candidates
pub const MAX_CANDIDATES: usize = 3;

/// The segments of `line` that `point` most likely belongs to, best first.
///
/// Segment `i` runs from `line[i]` to `line[i + 1]`. Each segment is scored by
/// the sum of the distances from `point` to its two end points, and the
/// result holds the (at most [`MAX_CANDIDATES`]) segments scoring within
/// `offset` meters of the best one. Zero length segments are only returned
/// when the line consists of nothing else.
///
/// The line should preferably be resampled to an even spacing first
/// (see [`resample`](crate::trajectory::resample)).
pub fn nearest_segments(point: &GeoPoint, line: &[GeoPoint], offset: f64) -> Result<Vec<usize>, Error> {
    require_points(line, 2)?;
    require_tolerance(offset)?;

    let ellps = Ellipsoid::default();
    let distances = line
        .iter()
        .map(|vertex| ellps.distance(point, vertex))
        .collect::<Result<Vec<f64>, Error>>()?;

    // (segment index, score), sorted by score
    let mut shortlist: Vec<(usize, f64)> = Vec::with_capacity(MAX_CANDIDATES + 1);
    let mut degenerate: Option<(usize, f64)> = None;

    for (i, pair) in line.windows(2).enumerate() {
        let score = distances[i] + distances[i + 1];

        if pair[0] == pair[1] {
            if degenerate.map_or(true, |(_, best)| score < best) {
                degenerate = Some((i, score));
            }
            continue;
        }

        let Some(&(_, best)) = shortlist.first() else {
            shortlist.push((i, score));
            continue;
        };

        if score > best + offset {
            continue;
        }

        // A clear winner: start over
        if score < best - offset {
            trace!("nearest_segments: segment {i} beats the shortlist {shortlist:?}");
            shortlist.clear();
            shortlist.push((i, score));
            continue;
        }

        let at = shortlist
            .iter()
            .position(|&(_, s)| score < s)
            .unwrap_or(shortlist.len());
        shortlist.insert(at, (i, score));

        let best = shortlist[0].1;
        shortlist.retain(|&(_, s)| s <= best + offset);
        shortlist.truncate(MAX_CANDIDATES);
    }

    if shortlist.is_empty() {
        shortlist.extend(degenerate);
    }
    debug!("nearest_segments: {shortlist:?}");
    Ok(shortlist.into_iter().map(|(i, _)| i).collect())
}

/// Project `point` onto the segment from `start` to `end`.
///
/// With p2s, p2e and s2e the distances point-start, point-end and start-end:
/// If the point overhangs the end (p2s - p2e > s2e), the end point is
/// returned, and likewise for the start (p2e - p2s > s2e). Otherwise the
/// projection is placed along the segment at the fraction p2s / (p2s + p2e)
/// of its length, so the result never leaves the segment.
pub fn project_onto_segment(point: &GeoPoint, start: &GeoPoint, end: &GeoPoint) -> Result<GeoPoint, Error> {
    let ellps = Ellipsoid::default();
    let p2s = ellps.distance(point, start)?;
    let p2e = ellps.distance(point, end)?;
    let s2e = ellps.distance(start, end)?;

    if p2s - p2e > s2e {
        return Ok(*end);
    }
    if p2e - p2s > s2e {
        return Ok(*start);
    }
    if p2s + p2e == 0. {
        return Ok(*start);
    }
    ellps.point_at_fraction(start, end, p2s / (p2s + p2e))
}

/// Project `point` onto the segment of `line` it most likely belongs to.
pub fn project_point_onto_line(point: &GeoPoint, line: &[GeoPoint]) -> Result<GeoPoint, Error> {
    let i = best_segment(point, line)?;
    project_onto_segment(point, &line[i], &line[i + 1])
}

/// The part of `reference` leading up to `point`: the reference line up to,
/// and including, the start of the nearest segment, followed by the
/// projection of `point` onto that segment.
pub fn project_line_with_point(point: &GeoPoint, reference: &[GeoPoint]) -> Result<Polyline, Error> {
    let i = best_segment(point, reference)?;
    let projection = project_onto_segment(point, &reference[i], &reference[i + 1])?;
    Ok(truncated(reference, i, projection))
}

/// Fit a live (noisy) track onto a known reference route.
///
/// The track is simplified, and its latest point is projected onto the
/// nearest segment of the reference. When several segments are within
/// `offset` meters of each other (e.g. where the route passes the same
/// place twice, in opposite directions), the one whose direction best
/// matches the latest movement of the track is chosen.
///
/// Returns the reference route up to the projected position. An empty
/// track has not yet left the start: the result is the first point of the
/// reference.
///
/// ```rust
/// use latlng::prelude::*;
/// use latlng::trajectory::{project_line_onto_reference, DEFAULT_OFFSET};
/// # fn main() -> Result<(), Error> {
/// let route = [
///     GeoPoint::new(30., 120.),
///     GeoPoint::new(30., 120.001),
///     GeoPoint::new(30., 120.002),
/// ];
/// let track = [GeoPoint::new(30.0001, 120.0013)];
/// let fitted = project_line_onto_reference(&track, &route, DEFAULT_OFFSET)?;
/// assert_eq!(fitted.len(), 3);
/// assert_eq!(fitted[..2], route[..2]);
/// # Ok(())
/// # }
/// ```
pub fn project_line_onto_reference(
    track: &[GeoPoint],
    reference: &[GeoPoint],
    offset: f64,
) -> Result<Polyline, Error> {
    require_points(reference, 1)?;
    let simplified = simplify(track)?;
    let Some((latest, earlier)) = simplified.split_last() else {
        return Ok(vec![reference[0]]);
    };

    let candidates = nearest_segments(latest, reference, offset)?;
    let mut chosen = candidates[0];

    // Ambiguous: compare the latest movement with the direction of each candidate
    if let (Some(previous), [_, _, ..]) = (earlier.last(), candidates.as_slice()) {
        let ellps = Ellipsoid::default();
        let heading = ellps.bearing(previous, latest)?;
        let mut smallest = f64::INFINITY;
        for &i in &candidates {
            let direction = ellps.bearing(&reference[i], &reference[i + 1])?;
            let difference = angular::bearing_difference(direction, heading);
            if difference < smallest {
                smallest = difference;
                chosen = i;
            }
        }
        debug!("project_line_onto_reference: heading {heading:.1}°, chose segment {chosen} of {candidates:?}");
    }

    let projection = project_onto_segment(latest, &reference[chosen], &reference[chosen + 1])?;
    Ok(truncated(reference, chosen, projection))
}

// The first of the nearest segments, with the default tolerance
fn best_segment(point: &GeoPoint, line: &[GeoPoint]) -> Result<usize, Error> {
    let candidates = nearest_segments(point, line, DEFAULT_OFFSET)?;
    candidates
        .first()
        .copied()
        .ok_or(Error::TooFewPoints { required: 2, found: line.len() })
}

fn truncated(reference: &[GeoPoint], segment: usize, projection: GeoPoint) -> Polyline {
    let mut line = reference[..=segment].to_vec();
    line.push(projection);
    line
}

// ----- Tests ---------------------------------------------------------------------
