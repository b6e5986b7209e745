//! Spawn placement: random points kept clear of the player.

use glam::Vec2;
use rand::Rng;

use blorb_core::types::{Bounds, Position};

/// Parameters for choosing a timed spawn point.
pub struct Placement {
    pub bounds: Bounds,
    /// Lowest coordinate on either axis.
    pub min_coord: f32,
    /// Radius of the forbidden zone around the player.
    pub clearance: f32,
    /// Random samples tried before pushing a sample out of the zone.
    pub attempts: u32,
}

impl Placement {
    /// Pick a spawn point at least `clearance` away from `player`.
    ///
    /// Arenas smaller than twice the clearance on either axis cannot hold a
    /// guaranteed clear interior point, so those fall back to the arena
    /// corner farthest from the player.
    pub fn choose(&self, rng: &mut impl Rng, player: Option<Position>) -> Position {
        let Some(player) = player else {
            return self.sample(rng);
        };

        if self.bounds.width < 2.0 * self.clearance || self.bounds.height < 2.0 * self.clearance {
            return self.farthest_corner(&player);
        }

        let mut candidate = self.sample(rng);
        for _ in 0..self.attempts {
            if candidate.distance_to(&player) >= self.clearance {
                return candidate;
            }
            candidate = self.sample(rng);
        }
        if candidate.distance_to(&player) >= self.clearance {
            return candidate;
        }

        let pushed = self.bounds.clamp(self.push_out(candidate, &player));
        if pushed.distance_to(&player) >= self.clearance {
            pushed
        } else {
            self.farthest_corner(&player)
        }
    }

    /// Uniform point in `[min_coord, width] x [min_coord, height]`.
    fn sample(&self, rng: &mut impl Rng) -> Position {
        let lo_x = self.min_coord.min(self.bounds.width);
        let lo_y = self.min_coord.min(self.bounds.height);
        Position::new(
            rng.gen_range(lo_x..=self.bounds.width),
            rng.gen_range(lo_y..=self.bounds.height),
        )
    }

    /// Move `candidate` radially away from the player onto the zone boundary.
    fn push_out(&self, candidate: Position, player: &Position) -> Position {
        let dir = (candidate.as_vec2() - player.as_vec2()).normalize_or(Vec2::X);
        (player.as_vec2() + dir * self.clearance).into()
    }

    fn farthest_corner(&self, player: &Position) -> Position {
        let mut best = self.bounds.corners()[0];
        for corner in self.bounds.corners() {
            if corner.distance_to(player) > best.distance_to(player) {
                best = corner;
            }
        }
        best
    }
}
