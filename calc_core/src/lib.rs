//! # calc_core - Fraction and Triangle Calculation Engine
//!
//! `calc_core` is the computational heart of Reckon: exact fraction
//! arithmetic and a plane-triangle solver behind a small, JSON-friendly API.
//! Calculator front ends collect text input, call these functions and render
//! whatever comes back.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Failures are values**: Every operation returns [`CalcResult`]
//! - **Exact where possible**: Fractions are integers, never floats
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::equations::fraction::{divide, simplify};
//! use calc_core::rational::to_mixed_number;
//! use calc_core::calculations::triangle::{calculate, TriangleInput};
//!
//! assert_eq!(simplify(1, -2).unwrap(), (-1, 2));
//! assert_eq!(divide(1, 2, 1, 4).unwrap(), (2, 1));
//! assert!(divide(1, 2, 0, 1).is_err());
//! assert_eq!(to_mixed_number(7, 2).unwrap(), "3 1/2");
//!
//! let triangle = calculate(&TriangleInput::from_sides(3.0, 4.0, 5.0)).unwrap();
//! assert!((triangle.area - 6.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`rational`] - The `Fraction` value type and mixed numbers
//! - [`calculations`] - Fraction and triangle calculation records
//! - [`equations`] - Underlying formulas and the equation registry
//! - [`settings`] - Tolerance and formatting settings
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod rational;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use rational::{to_mixed_number, Fraction, MixedNumber};
pub use settings::CalcSettings;
