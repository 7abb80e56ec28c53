//! Domain models for reuse
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ReuseInfo`] - Licensing facts collected for one file
//! - [`SourceType`] - Which kind of source produced those facts
//! - [`SpdxExpression`] - Opaque license expression value
//! - [`Overrides`] - Named field replacements for [`ReuseInfo::copy`]

mod overrides;
mod reuse_info;
mod source_type;
mod spdx;

pub use overrides::{Field, FieldValue, Overrides};
pub use reuse_info::ReuseInfo;
pub use source_type::SourceType;
pub use spdx::SpdxExpression;
