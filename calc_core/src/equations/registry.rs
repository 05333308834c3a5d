//! # Equation Registry
//!
//! Central registry of every formula the fraction and triangle engines use.
//! Each equation carries metadata: formula, variables, source reference and
//! the function that implements it.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for audit trails and the generated reference document
//! - An [`EquationTracker`] that calculations fill in as they go
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::{Equation, EquationUsage};
//!
//! let usage = EquationUsage::new(Equation::HeronArea, "sides 3, 4, 5");
//!
//! let meta = Equation::HeronArea.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Euclid's Elements
    Euclid {
        book: &'static str,
        proposition: u16,
    },
    /// Heron of Alexandria, Metrica
    Heron {
        book: &'static str,
        section: u16,
    },
    /// Law of cosines (trigonometry)
    LawOfCosines,
    /// Elementary arithmetic (no specific reference needed)
    Arithmetic,
}

impl CodeReference {
    /// Full citation for the reference document
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Euclid { book, proposition } => {
                format!("Euclid, Elements {}.{}", book, proposition)
            }
            CodeReference::Heron { book, section } => {
                format!("Heron, Metrica {}.{}", book, section)
            }
            CodeReference::LawOfCosines => "Law of Cosines".to_string(),
            CodeReference::Arithmetic => "Elementary Arithmetic".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Euclid { .. } => "Euclid",
            CodeReference::Heron { .. } => "Heron",
            CodeReference::LawOfCosines => "Cosines",
            CodeReference::Arithmetic => "Arithmetic",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// GCD and lowest terms
    Reduction,
    /// The four fraction operations
    FractionArithmetic,
    /// Mixed-number rendering
    Representation,
    /// Triangle inequality
    TriangleValidity,
    /// Area and perimeter
    TriangleMeasures,
    /// Side and angle classification
    TriangleClassification,
}

impl EquationCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Reduction => "Reduction",
            EquationCategory::FractionArithmetic => "Fraction Arithmetic",
            EquationCategory::Representation => "Representation",
            EquationCategory::TriangleValidity => "Triangle Validity",
            EquationCategory::TriangleMeasures => "Triangle Measures",
            EquationCategory::TriangleClassification => "Triangle Classification",
        }
    }

    /// Sort order for the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Reduction => 1,
            EquationCategory::FractionArithmetic => 2,
            EquationCategory::Representation => 3,
            EquationCategory::TriangleValidity => 4,
            EquationCategory::TriangleMeasures => 5,
            EquationCategory::TriangleClassification => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    /// "-" for dimensionless quantities
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    pub name: &'static str,
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every formula used by calc_core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// gcd(a, b) = gcd(b, a mod b)
    GreatestCommonDivisor,
    /// n/d → (n/g)/(d/g)
    Simplification,
    /// (n1·d2 + n2·d1)/(d1·d2)
    FractionAddition,
    /// (n1·d2 − n2·d1)/(d1·d2)
    FractionSubtraction,
    /// (n1·n2)/(d1·d2)
    FractionMultiplication,
    /// (n1·d2)/(d1·n2)
    FractionDivision,
    /// whole = ⌊|n|/|d|⌋, remainder = |n| mod |d|
    MixedNumber,
    /// a + b > c on all permutations
    TriangleInequality,
    /// P = a + b + c
    Perimeter,
    /// A = √(s(s−a)(s−b)(s−c))
    HeronArea,
    /// A = b·h/2
    BaseHeightArea,
    /// Equilateral / Isosceles / Scalene
    SideClassification,
    /// |s0² + s1² − s2²| < ε
    PythagoreanTest,
    /// α = acos((b² + c² − a²)/2bc)
    InteriorAngles,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::GreatestCommonDivisor => EquationMetadata {
                name: "Greatest Common Divisor",
                description: "Largest integer dividing both operands, by repeated remainder",
                formula_plain: "gcd(a, 0) = a, gcd(a, b) = gcd(b, a mod b)",
                reference: CodeReference::Euclid { book: "VII", proposition: 2 },
                variables: vec![
                    Variable::new("a", "First operand (absolute value)", "-"),
                    Variable::new("b", "Second operand (absolute value)", "-"),
                ],
                assumptions: vec!["Operands are non-negative"],
                category: EquationCategory::Reduction,
                source_module: "equations/fraction.rs",
                source_function: "gcd",
            },

            Equation::Simplification => EquationMetadata {
                name: "Lowest Terms",
                description: "Divide numerator and denominator by their GCD, sign on the numerator",
                formula_plain: "n' = n/g, d' = d/g, g = gcd(|n|, |d|), d' > 0",
                reference: CodeReference::Arithmetic,
                variables: vec![
                    Variable::new("n", "Numerator", "-"),
                    Variable::new("d", "Denominator", "-"),
                    Variable::new("g", "Greatest common divisor", "-"),
                ],
                assumptions: vec!["d != 0"],
                category: EquationCategory::Reduction,
                source_module: "equations/fraction.rs",
                source_function: "simplify",
            },

            Equation::FractionAddition => EquationMetadata {
                name: "Fraction Addition",
                description: "Sum of two fractions over the product denominator",
                formula_plain: "n1/d1 + n2/d2 = (n1*d2 + n2*d1) / (d1*d2)",
                reference: CodeReference::Arithmetic,
                variables: fraction_operands(),
                assumptions: vec!["Result reduced to lowest terms"],
                category: EquationCategory::FractionArithmetic,
                source_module: "equations/fraction.rs",
                source_function: "add",
            },

            Equation::FractionSubtraction => EquationMetadata {
                name: "Fraction Subtraction",
                description: "Difference of two fractions over the product denominator",
                formula_plain: "n1/d1 - n2/d2 = (n1*d2 - n2*d1) / (d1*d2)",
                reference: CodeReference::Arithmetic,
                variables: fraction_operands(),
                assumptions: vec!["Result reduced to lowest terms"],
                category: EquationCategory::FractionArithmetic,
                source_module: "equations/fraction.rs",
                source_function: "subtract",
            },

            Equation::FractionMultiplication => EquationMetadata {
                name: "Fraction Multiplication",
                description: "Product of numerators over product of denominators",
                formula_plain: "n1/d1 * n2/d2 = (n1*n2) / (d1*d2)",
                reference: CodeReference::Arithmetic,
                variables: fraction_operands(),
                assumptions: vec!["Result reduced to lowest terms"],
                category: EquationCategory::FractionArithmetic,
                source_module: "equations/fraction.rs",
                source_function: "multiply",
            },

            Equation::FractionDivision => EquationMetadata {
                name: "Fraction Division",
                description: "Multiply by the reciprocal of the divisor",
                formula_plain: "n1/d1 / n2/d2 = (n1*d2) / (d1*n2)",
                reference: CodeReference::Arithmetic,
                variables: fraction_operands(),
                assumptions: vec!["n2 != 0 (otherwise undefined)", "Result reduced to lowest terms"],
                category: EquationCategory::FractionArithmetic,
                source_module: "equations/fraction.rs",
                source_function: "divide",
            },

            Equation::MixedNumber => EquationMetadata {
                name: "Mixed Number",
                description: "Whole part and proper remainder of an improper fraction",
                formula_plain: "whole = floor(|n|/|d|), remainder = |n| mod |d|",
                reference: CodeReference::Arithmetic,
                variables: vec![
                    Variable::new("n", "Numerator", "-"),
                    Variable::new("d", "Denominator", "-"),
                ],
                assumptions: vec!["Negative iff exactly one of n, d is negative"],
                category: EquationCategory::Representation,
                source_module: "equations/fraction.rs",
                source_function: "mixed_parts",
            },

            Equation::TriangleInequality => EquationMetadata {
                name: "Triangle Inequality",
                description: "Each side is strictly shorter than the sum of the other two",
                formula_plain: "a + b > c, a + c > b, b + c > a",
                reference: CodeReference::Euclid { book: "I", proposition: 20 },
                variables: triangle_sides(),
                assumptions: vec!["All sides positive and finite", "Equality is degenerate, not valid"],
                category: EquationCategory::TriangleValidity,
                source_module: "equations/triangle.rs",
                source_function: "validate_sides",
            },

            Equation::Perimeter => EquationMetadata {
                name: "Perimeter",
                description: "Sum of the three sides",
                formula_plain: "P = a + b + c",
                reference: CodeReference::Arithmetic,
                variables: triangle_sides(),
                assumptions: vec!["Requires all three sides"],
                category: EquationCategory::TriangleMeasures,
                source_module: "equations/triangle.rs",
                source_function: "perimeter",
            },

            Equation::HeronArea => EquationMetadata {
                name: "Heron's Formula",
                description: "Area from three sides via the semiperimeter",
                formula_plain: "A = sqrt(s(s-a)(s-b)(s-c)), s = (a+b+c)/2",
                reference: CodeReference::Heron { book: "I", section: 8 },
                variables: {
                    let mut vars = triangle_sides();
                    vars.push(Variable::new("s", "Semiperimeter", "length"));
                    vars.push(Variable::new("A", "Area", "length^2"));
                    vars
                },
                assumptions: vec![
                    "Sides satisfy the triangle inequality",
                    "Evaluated in Kahan's sorted arrangement, one root per factor",
                ],
                category: EquationCategory::TriangleMeasures,
                source_module: "equations/triangle.rs",
                source_function: "heron_area",
            },

            Equation::BaseHeightArea => EquationMetadata {
                name: "Base-Height Area",
                description: "Area from a base and its perpendicular height",
                formula_plain: "A = b*h/2",
                reference: CodeReference::Euclid { book: "I", proposition: 41 },
                variables: vec![
                    Variable::new("b", "Base", "length"),
                    Variable::new("h", "Perpendicular height", "length"),
                    Variable::new("A", "Area", "length^2"),
                ],
                assumptions: vec!["Does not determine the triangle, so no perimeter"],
                category: EquationCategory::TriangleMeasures,
                source_module: "equations/triangle.rs",
                source_function: "base_height_area",
            },

            Equation::SideClassification => EquationMetadata {
                name: "Side Classification",
                description: "Equilateral if all sides equal, Isosceles if exactly two, else Scalene",
                formula_plain: "a = b = c: Equilateral; a = b or b = c or a = c: Isosceles; else Scalene",
                reference: CodeReference::Euclid { book: "I", proposition: 1 },
                variables: triangle_sides(),
                assumptions: vec!["Equilateral checked first", "Exact comparison of side values"],
                category: EquationCategory::TriangleClassification,
                source_module: "equations/triangle.rs",
                source_function: "classify_by_sides",
            },

            Equation::PythagoreanTest => EquationMetadata {
                name: "Right-Angle Test",
                description: "Pythagorean identity on the sorted sides",
                formula_plain: "|s0^2 + s1^2 - s2^2| < eps, s0 <= s1 <= s2",
                reference: CodeReference::Euclid { book: "I", proposition: 48 },
                variables: vec![
                    Variable::new("s0, s1", "Two shorter sides", "length"),
                    Variable::new("s2", "Longest side", "length"),
                    Variable::new("eps", "Tolerance (default 1e-4)", "length^2"),
                ],
                assumptions: vec!["Independent of side classification"],
                category: EquationCategory::TriangleClassification,
                source_module: "equations/triangle.rs",
                source_function: "is_right_angled",
            },

            Equation::InteriorAngles => EquationMetadata {
                name: "Interior Angles",
                description: "Each angle from the three sides by the law of cosines",
                formula_plain: "alpha = acos((b^2 + c^2 - a^2) / (2bc))",
                reference: CodeReference::LawOfCosines,
                variables: {
                    let mut vars = triangle_sides();
                    vars.push(Variable::new("alpha", "Angle opposite a", "deg"));
                    vars
                },
                assumptions: vec!["Cosine clamped to [-1, 1]"],
                category: EquationCategory::TriangleClassification,
                source_module: "equations/triangle.rs",
                source_function: "interior_angles",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in sorted order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            Reduction,
            FractionArithmetic,
            Representation,
            TriangleValidity,
            TriangleMeasures,
            TriangleClassification,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

fn fraction_operands() -> Vec<Variable> {
    vec![
        Variable::new("n1/d1", "First operand", "-"),
        Variable::new("n2/d2", "Second operand", "-"),
    ]
}

fn triangle_sides() -> Vec<Variable> {
    vec![
        Variable::new("a", "Side a", "length"),
        Variable::new("b", "Side b", "length"),
        Variable::new("c", "Side c", "length"),
    ]
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Fractions
    Equation::GreatestCommonDivisor,
    Equation::Simplification,
    Equation::FractionAddition,
    Equation::FractionSubtraction,
    Equation::FractionMultiplication,
    Equation::FractionDivision,
    Equation::MixedNumber,
    // Triangles
    Equation::TriangleInequality,
    Equation::Perimeter,
    Equation::HeronArea,
    Equation::BaseHeightArea,
    Equation::SideClassification,
    Equation::PythagoreanTest,
    Equation::InteriorAngles,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    pub equation: Equation,
    /// Context describing where it was applied (e.g., "sides 3, 4, 5")
    pub context: String,
}

impl EquationUsage {
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Consume the tracker, keeping every usage in recording order
    pub fn into_usages(self) -> Vec<EquationUsage> {
        self.usages
    }
}

// ============================================================================
// Markdown Reference Generation
// ============================================================================

/// Generate the equations reference document (EQUATIONS.md).
///
/// # Example
///
/// ```rust
/// use calc_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Reckon Equations Reference"));
/// assert!(markdown.contains("Heron's Formula"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(12_000);

    output.push_str(
        r#"# Reckon Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used by the fraction and triangle engines.
Each equation includes its formula, reference, source location, and assumptions.

## Conventions

| Quantity | Convention |
|----------|------------|
| Fraction sign | Carried by the numerator, denominator > 0 |
| Fraction results | Always reduced to lowest terms |
| Zero denominator | Undefined (division by zero) |
| Triangle inequality | Strict; equality is degenerate |
| Right-angle tolerance | 1e-4 unless configured |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        let heron = Equation::HeronArea.metadata();
        assert!(heron.formula_plain.contains("s(s-a)(s-b)(s-c)"), "Heron formula wrong");
    }

    #[test]
    fn test_every_category_populated() {
        for category in Equation::all_categories() {
            assert!(!Equation::in_category(category).is_empty(), "{:?} is empty", category);
        }
    }

    #[test]
    fn test_code_reference_citation() {
        let euclid = CodeReference::Euclid { book: "I", proposition: 20 };
        assert_eq!(euclid.citation(), "Euclid, Elements I.20");

        let heron = CodeReference::Heron { book: "I", section: 8 };
        assert_eq!(heron.citation(), "Heron, Metrica I.8");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::FractionAddition, "1/2 + 1/4");
        tracker.record(Equation::Simplification, "4/8");
        tracker.record(Equation::FractionAddition, "1/3 + 1/3");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::FractionAddition, Equation::Simplification]
        );
    }

    #[test]
    fn test_into_usages_keeps_context() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::HeronArea, "sides 3, 4, 5");
        tracker.record(Equation::HeronArea, "sides 5, 5, 5");

        let usages = tracker.into_usages();
        assert_eq!(usages.len(), 2);
        assert_eq!(usages[0].context, "sides 3, 4, 5");
        assert_eq!(usages[1].equation, Equation::HeronArea);
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Reckon Equations Reference"), "Missing title");
        assert!(markdown.contains("Auto-generated from source code"), "Missing auto-gen notice");
        assert!(markdown.contains("## Fraction Arithmetic"));
        assert!(markdown.contains("## Triangle Classification"));
        assert!(markdown.contains("`A = b*h/2`"), "Missing base-height formula");
        assert!(markdown.contains("Euclid, Elements I.20"));
        assert!(markdown.contains("equations/triangle.rs"));
        assert!(markdown.contains("**Total Equations:** 14"), "Wrong equation count");
        assert!(markdown.contains("**Categories:** 6"), "Wrong category count");
    }
}
