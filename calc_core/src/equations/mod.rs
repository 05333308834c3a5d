//! # Formulas
//!
//! Every formula the engines use, in one place. Having equations in one
//! place enables:
//! - Easy verification against known values
//! - Documentation of assumptions and sign conventions
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`fraction`] - GCD, lowest terms, the four operations, mixed-number split
//! - [`triangle`] - Triangle inequality, Heron's formula, classification
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Conventions
//!
//! - **Fractions**: sign carried by the numerator, denominator positive
//! - **Triangles**: sides in any consistent length unit, angles in degrees

pub mod fraction;
pub mod registry;
pub mod triangle;

// Re-export commonly used items
pub use fraction::{add, divide, gcd, mixed_parts, multiply, simplify, subtract};

pub use triangle::{
    base_height_area,
    classify_by_angles,
    classify_by_sides,
    heron_area,
    interior_angles,
    is_right_angled,
    perimeter,
    semiperimeter,
    validate_sides,
    AngleClass,
    SideClass,
    RIGHT_ANGLE_TOLERANCE,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
