//! [pcbdash]'s visualization library.
//!
//! The library binds the analytics payload served by the `/dashboard_data`
//! endpoint to dashboard widgets. Widgets are reached through two injected
//! capabilities: a [view::ViewPort], which owns text, list and canvas slots,
//! and a [registry::ChartBackend], which creates and disposes chart instances.
//! The [html] module implements both for a static Chart.js page.
//!
//! [pcbdash]: https://github.com/nelusnegur/pcbdash
//!
//! **WARNING**: This library is the pcbdash's internal visualization library and
//! there are no plans to stabilize it. The API may break at any time without notice.

#![warn(missing_docs)]

pub(crate) mod id;

pub mod binding;
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod html;
pub mod payload;
pub mod range;
pub mod registry;
pub mod sample;
pub mod view;

pub use id::ElementId;
