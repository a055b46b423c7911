//! Pixel layout of the grid and pointer picking.
//!
//! Hexes are drawn flat-top with odd columns offset half a hex downwards.
//! Pixel `y` grows downwards, so angles measured with `atan2` run clockwise
//! on screen starting from the east.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_PADDING: f64 = 0.03;

/// Largest padding fraction that still leaves a drawable area.
pub const MAX_PADDING: f64 = 0.49;

/// Pixel position `(x, y)`.
pub type Point = (f64, f64);

fn sqrt3() -> f64 {
    3f64.sqrt()
}

/// Physical drawing area supplied by the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenContext {
    pub width: f64,
    pub height: f64,
    /// Fraction of each dimension reserved as margin on either side.
    pub padding: f64,
}

impl ScreenContext {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: DEFAULT_PADDING,
        }
    }

    pub const fn with_padding(self, padding: f64) -> Self {
        Self { padding, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        let dimensions_ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        let padding_ok = (0.0..=MAX_PADDING).contains(&self.padding);

        if dimensions_ok && padding_ok {
            Ok(())
        } else {
            Err(GameError::InvalidScreen)
        }
    }

    fn padded_area(&self) -> (f64, f64) {
        let width = self.width - 2.0 * self.width * self.padding;
        let height = self.height - 2.0 * self.height * self.padding;
        (width, height)
    }
}

/// Largest whole hex radius that fits the padded area in both dimensions.
pub fn compute_radius(context: &ScreenContext, size: Coord2) -> u32 {
    let (width, height) = context.padded_area();
    let (cols, rows) = (f64::from(size.0), f64::from(size.1));

    let by_width = (0.5 * (width / (0.75 + 0.75 * cols))).floor();
    let by_height = (height / (sqrt3() * (0.5 + rows))).floor();

    // float to int casts saturate, negative or NaN becomes zero
    by_width.min(by_height) as u32
}

/// Pixel centre of hex `(col, row)` for the given radius and margins.
pub fn hex_center(coords: Coord2, radius: f64, padding: Point) -> Point {
    let (col, row) = (f64::from(coords.0), f64::from(coords.1));
    let height = radius * sqrt3();
    let column_offset = f64::from(coords.0 % 2) * (height / 2.0);

    let x = col * 2.0 * radius + radius - col * (radius / 2.0) + padding.0;
    let y = row * height + height / 2.0 + column_offset + padding.1;
    (x, y)
}

/// Angle in degrees from `center` to `pointer`, in `[0, 360]`. Tiny negative
/// angles round up to exactly 360.
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    let degrees = (pointer.1 - center.1).atan2(pointer.0 - center.0).to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

// 60 degree sectors starting at east, clockwise on screen
const SECTORS: [Direction; 6] = [
    Direction::SE,
    Direction::S,
    Direction::SW,
    Direction::NW,
    Direction::N,
    Direction::NE,
];

/// Border facing an angle; each sector is half-open, `[start, start + 60)`.
pub fn sector_direction(angle: f64) -> Direction {
    let sector = (angle / 60.0).floor() as usize;
    SECTORS[sector % SECTORS.len()]
}

/// Endpoints of the `direction` border of a hex centred at `center`.
pub fn edge_endpoints(center: Point, radius: f64, direction: Direction) -> [Point; 2] {
    let (cx, cy) = center;
    let half_width = radius;
    let quarter_width = radius / 2.0;
    let half_height = radius * sqrt3() / 2.0;

    match direction {
        Direction::NW => [(cx - quarter_width, cy - half_height), (cx - half_width, cy)],
        Direction::N => [
            (cx + quarter_width, cy - half_height),
            (cx - quarter_width, cy - half_height),
        ],
        Direction::NE => [(cx + half_width, cy), (cx + quarter_width, cy - half_height)],
        Direction::SE => [(cx + quarter_width, cy + half_height), (cx + half_width, cy)],
        Direction::S => [
            (cx - quarter_width, cy + half_height),
            (cx + quarter_width, cy + half_height),
        ],
        Direction::SW => [(cx - half_width, cy), (cx - quarter_width, cy + half_height)],
    }
}

/// Border under the pointer, seen from the nearest hex and, when it exists,
/// from the hex on the other side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCandidate {
    pub primary: (Coord2, Direction),
    pub secondary: Option<(Coord2, Direction)>,
}

/// Cached pixel layout for one grid size and one screen context.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenLayout {
    context: ScreenContext,
    size: Coord2,
    radius: u32,
    padding: Point,
    centers: Array2<Point>,
}

impl ScreenLayout {
    pub fn new(context: ScreenContext, size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyGrid);
        }
        context.validate()?;

        let radius = compute_radius(&context, size);
        if radius == 0 {
            log::warn!(
                "Screen {}x{} too small for a {}x{} grid",
                context.width,
                context.height,
                size.0,
                size.1
            );
            return Err(GameError::InvalidScreen);
        }

        // recentre, one dimension usually has slack left over from flooring
        let r = f64::from(radius);
        let tile_height = r * sqrt3();
        let grid_height = 0.5 * tile_height + f64::from(size.1) * tile_height;
        let grid_width = 0.5 * r + 1.5 * f64::from(size.0) * r;
        let padding = (
            (context.width - grid_width) / 2.0,
            (context.height - grid_height) / 2.0,
        );

        let centers = Array2::from_shape_fn(size.to_nd_index(), |(col, row)| {
            hex_center((col as Coord, row as Coord), r, padding)
        });

        log::debug!(
            "Laid out {}x{} grid with radius {} on {}x{} screen",
            size.0,
            size.1,
            radius,
            context.width,
            context.height
        );

        Ok(Self {
            context,
            size,
            radius,
            padding,
            centers,
        })
    }

    /// Rebuilds the layout when the screen changed. Returns whether it did.
    pub fn refresh(&mut self, context: ScreenContext) -> Result<bool> {
        if context == self.context {
            return Ok(false);
        }
        *self = Self::new(context, self.size)?;
        Ok(true)
    }

    pub fn context(&self) -> ScreenContext {
        self.context
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Horizontal and vertical margin around the centred grid.
    pub fn padding(&self) -> Point {
        self.padding
    }

    /// Panics when `coords` is outside the laid out grid.
    pub fn hex_center(&self, coords: Coord2) -> Point {
        self.centers[coords.to_nd_index()]
    }

    pub fn edge_endpoints(&self, coords: Coord2, direction: Direction) -> [Point; 2] {
        edge_endpoints(self.hex_center(coords), f64::from(self.radius), direction)
    }

    /// Hex whose centre is closest to the pointer; ties go to the first in
    /// column-major scan order.
    pub fn nearest_hex(&self, px: f64, py: f64) -> Coord2 {
        let mut nearest = (0, 0);
        let mut best = f64::INFINITY;

        let (x_end, y_end) = self.size;
        for col in 0..x_end {
            for row in 0..y_end {
                let (cx, cy) = self.hex_center((col, row));
                let distance = (px - cx).hypot(py - cy);
                if distance < best {
                    best = distance;
                    nearest = (col, row);
                }
            }
        }

        nearest
    }

    pub fn nearest_edge(&self, px: f64, py: f64) -> EdgeCandidate {
        let coords = self.nearest_hex(px, py);
        let angle = pointer_angle(self.hex_center(coords), (px, py));
        let direction = sector_direction(angle);
        let secondary = neighbor_hex(coords, direction, self.size)
            .map(|neighbor| (neighbor, direction.opposite()));

        log::trace!(
            "pointer ({px}, {py}) -> {coords:?} {direction:?} at {angle:.1} degrees"
        );

        EdgeCandidate {
            primary: (coords, direction),
            secondary,
        }
    }
}
