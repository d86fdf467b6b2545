//! # Materials
//!
//! Section property sources: the JIS steel catalogue and concrete grades
//! with rectangular gross-section formulas. Both produce the
//! [`SectionProperties`](crate::model::SectionProperties) the solver
//! consumes, already converted to mm units.

pub mod concrete;
pub mod steel;

pub use concrete::{concrete_grade, rect_section, ConcreteGrade, CONCRETE_GRADES};
pub use steel::{
    profile_dims, section_properties, sections_of, steel_section, Axis, ProfileDims, SteelSection,
    SteelShape,
};
