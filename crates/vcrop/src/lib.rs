// Library crate: exposes the crop pipeline and supporting modules for
// integration tests and the demo binary.

pub mod crop;
pub mod document;
pub mod extents;
pub mod fixtures;
pub mod geom;
pub mod harness;
pub mod modelline;
pub mod rectangle;
pub mod report;
pub mod selection;
pub mod validation;
