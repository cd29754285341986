//! View-offset table for the Graph Mover's view-based re-route check.

/// Offsets `(dx, dy)` with both components in `[-10, 10]`, sorted by
/// ascending radius `⌈√(dx²+dy²)⌉` and truncated at radius 10
/// (SPEC_FULL.md §4.5).
pub fn build_view_offsets() -> Vec<(i32, i32)> {
    let mut offsets: Vec<(i32, i32, i32)> = Vec::new();
    for dx in -10..=10 {
        for dy in -10..=10 {
            let radius = offset_radius(dx, dy);
            if radius <= 10 {
                offsets.push((dx, dy, radius));
            }
        }
    }
    offsets.sort_by_key(|&(dx, dy, r)| (r, dx, dy));
    offsets.into_iter().map(|(dx, dy, _)| (dx, dy)).collect()
}

/// `⌈√(dx²+dy²)⌉`, the radius bucket an offset belongs to.
#[inline]
pub fn offset_radius(dx: i32, dy: i32) -> i32 {
    ((dx * dx + dy * dy) as f64).sqrt().ceil() as i32
}
