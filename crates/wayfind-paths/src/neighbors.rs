use wayfind_core::Point;

const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// The four cardinal neighbours of `p` (up, right, down, left).
#[inline]
pub fn moves_4(p: Point) -> [Point; 4] {
    CARDINAL.map(|d| p + d)
}

/// All eight neighbours of `p`, row by row.
pub fn moves_8(p: Point) -> [Point; 8] {
    let mut out = [p; 8];
    let mut i = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            out[i] = p.shift(dx, dy);
            i += 1;
        }
    }
    out
}
