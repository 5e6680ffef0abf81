//! Circle-vs-rect overlap test for marker/obstacle contact.

use crate::game::obstacle::Obstacle;

/// True iff the circle at (`cx`, `cy`) with radius `r` intersects the
/// obstacle rect. Clamp the center into the rect; the clamped point is the
/// rect's closest point, so comparing its squared distance against `r²`
/// decides overlap. Touching counts as a hit.
pub fn circle_intersects_rect(cx: f64, cy: f64, r: f64, rect: &Obstacle) -> bool {
    let nearest_x = cx.clamp(rect.x, rect.x + rect.w);
    let nearest_y = cy.clamp(rect.y, rect.y + rect.h);
    let dx = cx - nearest_x;
    let dy = cy - nearest_y;
    dx * dx + dy * dy <= r * r
}
