//! Overlap is a small library for axis-aligned rectangle overlap tests. It
//! was built for Collider, a service that records which candidate rectangles
//! intersect a reference rectangle.
//!
//! Overlap exposes a single type, [`Rect`][Rect]: an anchor point plus a
//! width and height. Rectangles that merely share an edge are not considered
//! overlapping.
//!
//! ## Example
//! ```
//! use overlap::Rect;
//!
//! let reference = Rect::new(0, 0, 10, 10);
//!
//! assert!(reference.intersects(&Rect::new(5, 5, 2, 2)));
//! assert!(!reference.intersects(&Rect::new(20, 20, 2, 2)));
//! ```
//!
//! [Rect]: struct.Rect.html

mod rect;

pub use rect::*;
