// Vertical axis bounds with 10% headroom on each side
use crate::error::{EngineError, Result};
use shared::DataPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    pub min: u32,
    pub max: u32,
}

impl Domain {
    pub fn span(&self) -> u32 {
        self.max - self.min
    }
}

/// `ceil(0.1 * value)` in integer arithmetic, so 30 pads by 3 and not 4.
fn tenth_rounded_up(value: u32) -> u32 {
    value / 10 + u32::from(value % 10 != 0)
}

pub fn calculate_domain(points: &[DataPoint]) -> Result<Domain> {
    let min_hours = points.iter().map(|p| p.hours).min().ok_or(EngineError::EmptyDataset)?;
    let max_hours = points.iter().map(|p| p.hours).max().ok_or(EngineError::EmptyDataset)?;

    Ok(Domain {
        min: min_hours.saturating_sub(tenth_rounded_up(min_hours)),
        max: max_hours.saturating_add(tenth_rounded_up(max_hours)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[u32]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &h)| DataPoint::new(format!("Day {}", i + 1), h))
            .collect()
    }

    #[test]
    fn pads_both_ends_by_a_rounded_up_tenth() {
        // min 1 -> 1 - ceil(0.1) = 0; max 8 -> 8 + ceil(0.8) = 9
        assert_eq!(calculate_domain(&points(&[3, 1, 8, 5])).unwrap(), Domain { min: 0, max: 9 });
        // min 20 -> 20 - 2 = 18; max 69 -> 69 + 7 = 76
        assert_eq!(calculate_domain(&points(&[20, 45, 69])).unwrap(), Domain { min: 18, max: 76 });
        // min 55 -> 55 - 6 = 49; max 149 -> 149 + 15 = 164
        assert_eq!(calculate_domain(&points(&[149, 55, 100])).unwrap(), Domain { min: 49, max: 164 });
    }

    #[test]
    fn exact_tenths_are_not_over_padded() {
        assert_eq!(calculate_domain(&points(&[30, 100])).unwrap(), Domain { min: 27, max: 110 });
    }

    #[test]
    fn lower_bound_never_negative() {
        assert_eq!(calculate_domain(&points(&[0, 4])).unwrap(), Domain { min: 0, max: 5 });
    }

    #[test]
    fn single_point_domain() {
        let domain = calculate_domain(&points(&[8])).unwrap();
        assert_eq!(domain, Domain { min: 7, max: 9 });
        assert_eq!(domain.span(), 2);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        assert!(matches!(calculate_domain(&[]), Err(EngineError::EmptyDataset)));
    }
}
