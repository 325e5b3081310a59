//! Layout geometry for photo tools: framing on a fixed-ratio canvas,
//! resolving resize targets, and planning favicons.
//!
//! The core is pure arithmetic. No pixel operations, no allocations,
//! `no_std` compatible. Pixel work lives behind the `raster` feature.
//!
//! # Modules
//!
//! - [`frame`]: canvas size and content placement for the frame designer
//! - [`resize`]: output dimensions from a percentage or width/height with an aspect lock
//! - [`aspect`], [`color`], [`geometry`]: value types shared by the tools
//! - [`orientation`]: EXIF orientation and display size
//! - [`favicon`]: square cover crop for 128×128 icons
//! - `export` (`alloc`): output formats and download file names
//! - `metadata` (`alloc`): EXIF tag map, shutter-count report, viewer summary
//! - `raster` (`raster`): decode, draw, encode with the `image` crate
//!
//! # Example
//!
//! ```
//! use framefit::{AspectRatio, FrameSpec, ImageDimensions, InsetSpec, Rect, Size};
//!
//! let layout = FrameSpec::new(AspectRatio::PORTRAIT_4_5)
//!     .inset(InsetSpec::NONE)
//!     .compute(ImageDimensions::new(3000, 3000).unwrap())
//!     .unwrap();
//! assert_eq!(layout.canvas, Size::new(2400, 3000));
//! assert_eq!(layout.content_pixels(), Rect::new(0, 300, 2400, 2400));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod aspect;
pub mod color;
pub mod error;
pub mod favicon;
pub mod frame;
pub mod geometry;
pub mod orientation;
pub mod resize;

#[cfg(feature = "alloc")]
pub mod export;
#[cfg(feature = "alloc")]
pub mod metadata;
#[cfg(feature = "raster")]
pub mod raster;

pub use aspect::AspectRatio;
pub use color::{CanvasColor, UnknownColor};
pub use error::{ErrorKind, LayoutError};
pub use favicon::{FAVICON_SIZE, FaviconPlan, cover_crop, favicon_plan};
pub use frame::{FrameLayout, FrameSpec, InsetSpec, compute_frame_layout};
pub use geometry::{ContentRect, ImageDimensions, Rect, Size};
pub use orientation::Orientation;
pub use resize::{Driving, ResizeResult, ResizeSpec, resolve_dimensions};

#[cfg(feature = "alloc")]
pub use export::ExportFormat;
