//! Proximity volume for annotated sounds.
//!
//! A sound directive gives a clip a maximum volume and a maximum audible
//! distance. The playback volume fades linearly with the listener's grid
//! distance, in integer arithmetic, reaching silence past the maximum
//! distance.

use marginalia_foundation::types::SoundSpec;

/// Grid (manhattan) distance between two cells.
#[must_use]
pub fn manhattan_distance(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// The volume a sound should play at for a listener at `distance`.
///
/// Zero beyond the maximum distance; otherwise
/// `min(max_volume, (max_volume / max_distance) * (max_distance + 1 - distance))`
/// with integer division. A sound with zero maximum distance is audible only
/// at distance zero, at full volume.
#[must_use]
pub fn playback_volume(spec: &SoundSpec, distance: i32) -> i32 {
    if distance > spec.max_distance {
        return 0;
    }
    if spec.max_distance == 0 {
        return spec.max_volume;
    }
    // Widened so directive-sized extremes cannot wrap; the clamp keeps the
    // result inside i32.
    let step = i64::from(spec.max_volume) / i64::from(spec.max_distance);
    let remaining = i64::from(spec.max_distance) + 1 - i64::from(distance);
    let volume = (step * remaining).min(i64::from(spec.max_volume));
    i32::try_from(volume).unwrap_or(spec.max_volume)
}
