//! House slot geometry of the North Indian (diamond) chart.
//!
//! The chart is a square split by its diagonals and by a diamond joining
//! the edge midpoints, giving 4 kite-shaped houses (1, 4, 7, 10) and 8
//! triangles. House 1 is the top kite; numbering runs counter-clockwise.
//! Coordinates live in a 780 x 800 view box. Both chart kinds share this
//! layout unchanged.

use serde::Serialize;

/// View box width of the chart drawing.
pub const VIEW_WIDTH: f64 = 780.0;
/// View box height of the chart drawing.
pub const VIEW_HEIGHT: f64 = 800.0;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box containing all `points`. `None` for an empty slice.
    pub fn from_points(points: &[(f64, f64)]) -> Option<BBox> {
        let (&(x0, y0), rest) = points.split_first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (x0, y0, x0, y0);
        for &(x, y) in rest {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Some(BBox::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Geometric center `(x + w/2, y + h/2)`.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// One of the 12 fixed house regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseSlot {
    /// House number, 1-12.
    pub number: u8,
    /// Polygon vertices in drawing order.
    pub points: &'static [(f64, f64)],
}

impl HouseSlot {
    pub fn bbox(&self) -> BBox {
        // every slot in the static table has at least 3 vertices
        BBox::from_points(self.points).unwrap_or(BBox::new(0.0, 0.0, 0.0, 0.0))
    }

    /// Vertex average.
    pub fn centroid(&self) -> (f64, f64) {
        let n = self.points.len().max(1) as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
        (sx / n, sy / n)
    }

    /// SVG `points` attribute value, e.g. `"400,100 250,250 ..."`.
    pub fn svg_points(&self) -> String {
        self.points
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The 12 house polygons, index 0 = house 1.
pub const NORTH_INDIAN_HOUSES: [HouseSlot; 12] = [
    HouseSlot {
        number: 1,
        points: &[(400.0, 100.0), (250.0, 250.0), (400.0, 400.0), (550.0, 250.0)],
    },
    HouseSlot {
        number: 2,
        points: &[(100.0, 100.0), (250.0, 250.0), (400.0, 100.0)],
    },
    HouseSlot {
        number: 3,
        points: &[(100.0, 400.0), (250.0, 250.0), (100.0, 100.0)],
    },
    HouseSlot {
        number: 4,
        points: &[(250.0, 250.0), (100.0, 400.0), (250.0, 550.0), (400.0, 400.0)],
    },
    HouseSlot {
        number: 5,
        points: &[(100.0, 400.0), (250.0, 550.0), (100.0, 700.0)],
    },
    HouseSlot {
        number: 6,
        points: &[(100.0, 700.0), (250.0, 550.0), (400.0, 700.0)],
    },
    HouseSlot {
        number: 7,
        points: &[(400.0, 400.0), (250.0, 550.0), (400.0, 700.0), (550.0, 550.0)],
    },
    HouseSlot {
        number: 8,
        points: &[(400.0, 700.0), (550.0, 550.0), (700.0, 700.0)],
    },
    HouseSlot {
        number: 9,
        points: &[(700.0, 400.0), (550.0, 550.0), (700.0, 700.0)],
    },
    HouseSlot {
        number: 10,
        points: &[(550.0, 250.0), (700.0, 400.0), (550.0, 550.0), (400.0, 400.0)],
    },
    HouseSlot {
        number: 11,
        points: &[(700.0, 100.0), (550.0, 250.0), (700.0, 400.0)],
    },
    HouseSlot {
        number: 12,
        points: &[(400.0, 100.0), (550.0, 250.0), (700.0, 100.0)],
    },
];

/// Source of per-house bounding boxes.
///
/// Returning `None` means the house is not laid out yet; callers skip it.
pub trait HouseGeometry {
    fn house_bbox(&self, house: u8) -> Option<BBox>;
}

/// The static North Indian layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NorthIndianLayout;

impl NorthIndianLayout {
    pub fn slots(&self) -> &'static [HouseSlot; 12] {
        &NORTH_INDIAN_HOUSES
    }

    pub fn slot(&self, house: u8) -> Option<&'static HouseSlot> {
        match house {
            1..=12 => Some(&NORTH_INDIAN_HOUSES[(house - 1) as usize]),
            _ => None,
        }
    }
}

impl HouseGeometry for NorthIndianLayout {
    fn house_bbox(&self, house: u8) -> Option<BBox> {
        self.slot(house).map(HouseSlot::bbox)
    }
}
