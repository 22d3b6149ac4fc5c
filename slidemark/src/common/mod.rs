//! Contains logic for mapping between the Slides run model and the IR.

pub mod consolidate;
pub mod segments_to_ir;
