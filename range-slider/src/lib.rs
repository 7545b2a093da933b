//! A renderer-agnostic dual-thumb range slider.
//!
//! The crate models the value and geometry side of a horizontal slider with
//! one or two thumbs: mapping pointer coordinates to domain values, keeping
//! the thumbs from crossing, and projecting the state into render models a
//! host toolkit can draw.
//!
//! # Example
//!
//! ```
//! use range_slider::glam::Vec2;
//! use range_slider::{RangeSliderArgs, RangeSliderController, SliderMode, Viewport};
//!
//! let mut slider = RangeSliderController::new(
//!     RangeSliderArgs::default()
//!         .minimum(10.0)
//!         .maximum(100.0)
//!         .mode(SliderMode::SingleMin)
//!         .viewport(Viewport::new(200.0, 20.0))
//!         .on_change(|(lower, upper)| println!("selected {lower}..{upper}")),
//! );
//! assert_eq!(slider.upper(), 100.0);
//!
//! // Press on the lower thumb, then drag it to the right.
//! let x = slider.mapper().pixel_position(slider.lower(), false);
//! assert!(slider.begin_drag(Vec2::new(x, 10.0)));
//! slider.continue_drag(Vec2::new(x + 36.0, 10.0));
//! slider.end_drag();
//! assert!(slider.lower() > 10.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod controller;
pub mod geometry;
pub mod layout;
pub mod mapper;
pub mod model;
pub mod prop;
pub mod render;
pub mod testing;

pub use color::Color;
pub use controller::{
    ActiveThumb, DragState, RangeSliderArgs, RangeSliderController, SliderMode, SliderState,
};
pub use geometry::Rect;
pub use glam;
pub use layout::{SliderLayout, Viewport};
pub use mapper::ValueMapper;
pub use model::{SliderStyle, ThumbRenderModel, TrackRenderModel};
pub use prop::CallbackWith;
pub use render::{RenderBatch, RenderError, Renderer, ThumbRender, ThumbSide};
