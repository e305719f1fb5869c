//! Feature modules (vertical slices)

pub mod join_closure;
