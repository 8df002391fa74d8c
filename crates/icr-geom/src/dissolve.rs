//! Dissolve: merge a route's segment geometries into one logical multi-part
//! feature.
//!
//! Road datasets split a route into many short segments (one per attribute
//! change).  Sampling wants one continuous line per route so spacing does not
//! restart at every segment break.  `dissolve` chains parts whose endpoints
//! coincide; parts that touch nothing stay separate, giving a multi-part
//! result the sampler processes part by part.
//!
//! Chaining is greedy in input order, so callers passing parts in ascending
//! segment-id order get a deterministic result.

use icr_core::PlanePoint;

use crate::polyline::Polyline;

/// Endpoint coincidence tolerance in native units.  Projected coordinates of
/// a shared vertex agree to far better than a millimeter.
const SNAP_EPS: f64 = 1e-3;

/// Chain touching parts end-to-end; return the remaining disjoint parts.
///
/// Empty input parts are discarded.  Each output part's coordinate order
/// follows the first part placed in its chain; later parts are reversed as
/// needed to connect.
pub fn dissolve(parts: Vec<Polyline>) -> Vec<Polyline> {
    let mut pending: Vec<Option<Vec<PlanePoint>>> = parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(|p| Some(p.coords().to_vec()))
        .collect();

    let mut merged = Vec::new();

    for i in 0..pending.len() {
        let Some(mut chain) = pending[i].take() else {
            continue;
        };

        // Repeatedly scan forward for a part that connects to either end of
        // the growing chain.  First match in input order wins.
        loop {
            let mut attached = false;
            for slot in pending.iter_mut().skip(i + 1) {
                let Some(part) = slot.as_ref() else { continue };
                if let Some(joined) = try_attach(&chain, part) {
                    chain = joined;
                    *slot = None;
                    attached = true;
                    break;
                }
            }
            if !attached {
                break;
            }
        }

        merged.push(Polyline::new(chain));
    }

    merged
}

/// Join `part` onto `chain` if an endpoint pair coincides; `None` otherwise.
fn try_attach(chain: &[PlanePoint], part: &[PlanePoint]) -> Option<Vec<PlanePoint>> {
    let (c_start, c_end) = (chain[0], chain[chain.len() - 1]);
    let (p_start, p_end) = (part[0], part[part.len() - 1]);

    let joined = if touches(c_end, p_start) {
        concat(chain.iter().copied(), part[1..].iter().copied())
    } else if touches(c_end, p_end) {
        concat(chain.iter().copied(), part[..part.len() - 1].iter().rev().copied())
    } else if touches(c_start, p_end) {
        concat(part.iter().copied(), chain[1..].iter().copied())
    } else if touches(c_start, p_start) {
        concat(part.iter().rev().copied(), chain[1..].iter().copied())
    } else {
        return None;
    };
    Some(joined)
}

#[inline]
fn touches(a: PlanePoint, b: PlanePoint) -> bool {
    a.distance(b) <= SNAP_EPS
}

fn concat(
    head: impl Iterator<Item = PlanePoint>,
    tail: impl Iterator<Item = PlanePoint>,
) -> Vec<PlanePoint> {
    head.chain(tail).collect()
}
