//! CLI command implementations.

pub(crate) mod load;
pub(crate) mod toc;

pub(crate) use load::LoadArgs;
pub(crate) use toc::TocArgs;
