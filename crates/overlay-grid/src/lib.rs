//! Regular grid arithmetic for raster-vector overlay.
//!
//! Models a rectangular extent subdivided into uniform cells and
//! provides the arithmetic needed to index into it, snap sub-regions
//! onto its lattice, and place grids of different resolution onto a
//! shared index space. This is the geometric foundation the overlay
//! engine iterates over: every per-cell coverage computation starts from
//! a [`Grid`] and a window produced by [`Grid::shrink_to_fit`], and
//! multi-raster aggregations align their inputs with
//! [`Grid::common_grid`].
//!
//! Input coordinates are typically the product of prior floating-point
//! arithmetic, so every boundary decision here (dimension rounding,
//! edge-inclusive lookup, lattice snapping, alignment checks) runs
//! through one shared relative-tolerance policy rather than exact
//! comparison. Snapped bounds are biased outward so a window never loses
//! containment of the box it was derived from.
//!
//! # Example
//!
//! ```
//! use overlay_grid::{BoundingBox, Grid};
//!
//! let grid = Grid::new(-180.0, -90.0, 180.0, 90.0, 0.5, 0.5)?;
//! assert_eq!(grid.rows(), 360);
//! assert_eq!(grid.cols(), 720);
//!
//! // Limit iteration to one feature's bounding region.
//! let window = grid.shrink_to_fit(&BoundingBox::new(-44.3, -21.4, 18.3, 88.2))?;
//! assert!(window.extent().contains_point(-44.3, -21.4));
//! assert_eq!(window.dx, grid.dx);
//! # Ok::<(), overlay_grid::GridError>(())
//! ```

pub mod bbox;
pub mod error;
pub mod grid;
mod snap;

pub use bbox::BoundingBox;
pub use error::{GridError, Result};
pub use grid::Grid;
