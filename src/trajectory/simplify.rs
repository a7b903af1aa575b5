//! Angle based track simplification
use crate::internal::*;
use crate::Polyline;

/// Polylines with at most this many points are returned unchanged by [`simplify`]
pub const PASS_THROUGH_LIMIT: usize = 10;

// Chains (a→b→c) shorter than SHORT_CHAIN meters tolerate turns up to
// WIDE_TURN degrees, chains longer than LONG_CHAIN only NARROW_TURN
const SHORT_CHAIN: f64 = 10.;
const LONG_CHAIN: f64 = 50.;
const WIDE_TURN: f64 = 90.;
const NARROW_TURN: f64 = 5.;

/// The largest change of direction, in degrees, that is considered noise
/// for a chain of the given length. Short chains are dominated by position
/// noise, so they tolerate larger turns.
fn turn_threshold(chain: f64) -> f64 {
    if chain <= SHORT_CHAIN {
        return WIDE_TURN;
    }
    if chain > LONG_CHAIN {
        return NARROW_TURN;
    }
    ((1. - chain / LONG_CHAIN) * WIDE_TURN)
        .trunc()
        .max(NARROW_TURN)
}

/// State threaded through the points while simplifying
struct Simplifier {
    // The last point known to stay (a), and the latest candidate (b)
    anchor: GeoPoint,
    candidate: GeoPoint,
    kept: Polyline,
}

impl Simplifier {
    fn visit(mut self, ellps: &Ellipsoid, next: GeoPoint) -> Result<Self, Error> {
        let ab = ellps.geodesic_inv(&self.anchor, &self.candidate)?;
        let bc = ellps.geodesic_inv(&self.candidate, &next)?;

        let chain = ab.distance + bc.distance;
        let turn = angular::bearing_difference(ab.final_bearing, bc.initial_bearing);
        if turn < turn_threshold(chain) {
            // b is colinear noise: drop it, and keep measuring from a
            trace!("simplify: dropping {:?} (turn {turn:.1}°)", self.candidate);
            self.kept.pop();
        } else {
            self.anchor = self.candidate;
        }

        self.kept.push(next);
        self.candidate = next;
        Ok(self)
    }
}

/// Simplify a track by dropping points where it runs (nearly) straight.
///
/// A single forward pass: each point `b` is judged by the change of direction
/// between the segments `a→b` and `b→c`, where `a` is the last point kept and
/// `c` the next one. The threshold depends on the length of the chain `a→b→c`:
/// 90° up to 10 m, 5° beyond 50 m, and linearly decreasing in between.
///
/// The pass is greedy and O(n): it does not look for the globally best
/// subset of points, as e.g. [Douglas-Peucker](crate::Bibliography::Dou73)
/// does. The first and last points are always kept, and tracks with at most
/// [`PASS_THROUGH_LIMIT`] points are returned unchanged.
pub fn simplify(points: &[GeoPoint]) -> Result<Polyline, Error> {
    if points.len() <= PASS_THROUGH_LIMIT {
        return Ok(points.to_vec());
    }

    let ellps = Ellipsoid::default();
    let start = Simplifier {
        anchor: points[0],
        candidate: points[1],
        kept: vec![points[0], points[1]],
    };
    let simplifier = points[2..]
        .iter()
        .try_fold(start, |simplifier, next| simplifier.visit(&ellps, *next))?;

    debug!(
        "simplify: {} of {} points kept",
        simplifier.kept.len(),
        points.len()
    );
    Ok(simplifier.kept)
}

// ----- Tests ---------------------------------------------------------------------
