//! Concrete grades and rectangular RC section properties.

use crate::errors::{EngineError, EngineResult};
use crate::model::SectionProperties;

/// A standard concrete strength grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcreteGrade {
    /// Grade label, e.g. "Fc24"
    pub label: &'static str,
    /// Design compressive strength (N/mm²)
    pub fc: f64,
    /// Elastic modulus (N/mm²)
    pub ec: f64,
}

/// Standard grades with their design moduli.
pub const CONCRETE_GRADES: [ConcreteGrade; 10] = [
    ConcreteGrade { label: "Fc18", fc: 18.0, ec: 20_500.0 },
    ConcreteGrade { label: "Fc21", fc: 21.0, ec: 21_800.0 },
    ConcreteGrade { label: "Fc24", fc: 24.0, ec: 22_700.0 },
    ConcreteGrade { label: "Fc27", fc: 27.0, ec: 23_500.0 },
    ConcreteGrade { label: "Fc30", fc: 30.0, ec: 24_300.0 },
    ConcreteGrade { label: "Fc36", fc: 36.0, ec: 25_000.0 },
    ConcreteGrade { label: "Fc40", fc: 40.0, ec: 26_500.0 },
    ConcreteGrade { label: "Fc42", fc: 42.0, ec: 27_000.0 },
    ConcreteGrade { label: "Fc45", fc: 45.0, ec: 28_000.0 },
    ConcreteGrade { label: "Fc50", fc: 50.0, ec: 30_000.0 },
];

/// Look up a grade by label.
pub fn concrete_grade(label: &str) -> EngineResult<ConcreteGrade> {
    CONCRETE_GRADES
        .iter()
        .find(|g| g.label == label)
        .copied()
        .ok_or_else(|| EngineError::section_not_found(label))
}

/// Gross rectangular section: `I = bD³/12`, `Z = bD²/6`.
pub fn rect_section(b_mm: f64, d_mm: f64, grade: ConcreteGrade) -> EngineResult<SectionProperties> {
    if b_mm <= 0.0 || d_mm <= 0.0 {
        return Err(EngineError::invalid_input(
            "rect_section",
            format!("{}x{}", b_mm, d_mm),
            "Width and depth must be positive",
        ));
    }
    Ok(SectionProperties::new(
        grade.ec,
        b_mm * d_mm.powi(3) / 12.0,
        b_mm * d_mm.powi(2) / 6.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_lookup() {
        let g = concrete_grade("Fc24").unwrap();
        assert_eq!(g.ec, 22_700.0);
        assert!(concrete_grade("Fc99").is_err());
    }

    #[test]
    fn test_rect_section_formulas() {
        let g = concrete_grade("Fc24").unwrap();
        let s = rect_section(300.0, 600.0, g).unwrap();
        assert_eq!(s.i_mm4, 300.0 * 600.0f64.powi(3) / 12.0);
        assert_eq!(s.z_mm3, 300.0 * 600.0f64.powi(2) / 6.0);
        assert_eq!(s.e_nmm2, 22_700.0);
    }

    #[test]
    fn test_rect_section_rejects_bad_dims() {
        let g = CONCRETE_GRADES[0];
        assert!(rect_section(0.0, 600.0, g).is_err());
        assert!(rect_section(300.0, -1.0, g).is_err());
    }
}
