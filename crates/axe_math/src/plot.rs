//! Grid traversal along a ray
//!
//! [`PlotCell3`] walks the cells of a regular 3D grid that a ray passes
//! through, in the order it enters them. Each step crosses exactly one cell
//! face, so consecutive cells always share a face.

use crate::{Vec3, Vec3i};

/// Walks grid cells along a ray, yielding each cell index in turn
#[derive(Clone, Debug, PartialEq)]
pub struct PlotCell3 {
    offset: Vec3,
    size: Vec3,
    position: Vec3,
    direction: Vec3,
    sign: Vec3i,
    /// Ray distance needed to cross one whole cell on each axis
    delta: Vec3,
    /// Ray distance to the next face on each axis
    max: Vec3,
    index: Vec3i,
    limit: u32,
    plotted: u32,
}

impl PlotCell3 {
    /// A grid whose cell `(0, 0, 0)` has its minimum corner at `offset`
    pub fn new(offset: Vec3, size: Vec3) -> Self {
        Self {
            offset,
            size,
            position: Vec3::ZERO,
            direction: Vec3::ZERO,
            sign: Vec3i::ZERO,
            delta: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::INFINITY),
            index: Vec3i::ZERO,
            limit: 0,
            plotted: 0,
        }
    }

    /// Start a walk of at most `cells` cells from `position` along `direction`
    ///
    /// The direction need not be normalized. Axes the ray does not move along
    /// are never stepped.
    pub fn plot(&mut self, position: Vec3, direction: Vec3, cells: u32) {
        self.limit = cells;
        self.position = position;
        self.direction = direction.normalized();
        self.sign = Vec3i::new(
            axis_sign(self.direction.x),
            axis_sign(self.direction.y),
            axis_sign(self.direction.z),
        );
        self.delta = Vec3::new(
            crossing(self.size.x, self.direction.x),
            crossing(self.size.y, self.direction.y),
            crossing(self.size.z, self.direction.z),
        );
        self.reset();
    }

    /// Restart the current walk from its first cell
    pub fn reset(&mut self) {
        self.plotted = 0;
        self.index = Vec3i::new(
            cell_of(self.position.x, self.offset.x, self.size.x),
            cell_of(self.position.y, self.offset.y, self.size.y),
            cell_of(self.position.z, self.offset.z, self.size.z),
        );
        let corner = self.corner();
        self.max = Vec3::new(
            face_distance(self.position.x, corner.x, self.size.x, self.direction.x),
            face_distance(self.position.y, corner.y, self.size.y, self.direction.y),
            face_distance(self.position.z, corner.z, self.size.z, self.direction.z),
        );
    }

    /// Step to the next cell; false once the walk is over
    ///
    /// The current cell stays on the last one visited once the walk is over.
    pub fn advance(&mut self) -> bool {
        if self.plotted >= self.limit {
            self.end();
            return false;
        }
        if self.plotted > 0 {
            let (mx, my, mz) = (self.max.x, self.max.y, self.max.z);
            if mx < my && mx < mz {
                self.max.x += self.delta.x;
                self.index.x += self.sign.x;
            } else if (mz < my && mz < mx) || (self.sign.y == 0 && mz < mx) {
                self.max.z += self.delta.z;
                self.index.z += self.sign.z;
            } else if self.sign.y == 0 {
                // x and z tie with no y motion
                self.max.x += self.delta.x;
                self.index.x += self.sign.x;
            } else {
                self.max.y += self.delta.y;
                self.index.y += self.sign.y;
            }
        }
        self.plotted += 1;
        true
    }

    /// Stop the walk; the next [`advance`](Self::advance) returns false
    pub fn end(&mut self) {
        self.plotted = self.limit.saturating_add(1);
    }

    /// Index of the current cell
    pub fn cell(&self) -> Vec3i {
        self.index
    }

    /// Minimum corner of the current cell in world space
    pub fn corner(&self) -> Vec3 {
        Vec3::new(
            self.index.x as f32 * self.size.x + self.offset.x,
            self.index.y as f32 * self.size.y + self.offset.y,
            self.index.z as f32 * self.size.z + self.offset.z,
        )
    }

    pub fn size(&self) -> Vec3 {
        self.size
    }

    pub fn set_size(&mut self, size: Vec3) {
        self.size = size;
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Vec3) {
        self.offset = offset;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Normalized walk direction
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Step direction on each axis: -1, 0 or 1
    pub fn sign(&self) -> Vec3i {
        self.sign
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Cells visited so far in this walk
    pub fn plotted(&self) -> u32 {
        self.plotted.min(self.limit)
    }
}

impl Iterator for PlotCell3 {
    type Item = Vec3i;

    fn next(&mut self) -> Option<Vec3i> {
        if self.advance() {
            Some(self.index)
        } else {
            None
        }
    }
}

#[inline]
fn axis_sign(d: f32) -> i32 {
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

#[inline]
fn cell_of(p: f32, offset: f32, size: f32) -> i32 {
    ((p - offset) / size).floor() as i32
}

#[inline]
fn crossing(size: f32, d: f32) -> f32 {
    if d == 0.0 {
        f32::INFINITY
    } else {
        (size / d).abs()
    }
}

/// Ray distance from `p` to the cell face it is heading for
#[inline]
fn face_distance(p: f32, corner: f32, size: f32, d: f32) -> f32 {
    if d > 0.0 {
        (corner + size - p) / d
    } else if d < 0.0 {
        (p - corner) / -d
    } else {
        f32::INFINITY
    }
}
