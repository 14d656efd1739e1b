//! Top doctors showcase for the landing view

use crate::types::DoctorRecord;

/// Number of doctors shown on the landing view
pub const TOP_DOCTOR_COUNT: usize = 4;

/// Highest rated `count` doctors, best first
///
/// The sort is stable, so equal ratings keep source order.
pub fn top_doctors(doctors: &[DoctorRecord], count: usize) -> Vec<DoctorRecord> {
    let mut sorted = doctors.to_vec();
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    sorted.truncate(count);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DoctorId;

    fn rated(id: i64, rating: f64) -> DoctorRecord {
        DoctorRecord {
            id: DoctorId::Number(id),
            rating,
            ..Default::default()
        }
    }

    fn ids(doctors: &[DoctorRecord]) -> Vec<DoctorId> {
        doctors.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let doctors = vec![rated(1, 4.9), rated(2, 4.9), rated(3, 4.2), rated(4, 5.0)];
        let top = top_doctors(&doctors, TOP_DOCTOR_COUNT);
        assert_eq!(
            ids(&top),
            vec![DoctorId::Number(4), DoctorId::Number(1), DoctorId::Number(2), DoctorId::Number(3)]
        );
    }

    #[test]
    fn test_takes_only_count() {
        let doctors: Vec<DoctorRecord> = (0..10).map(|i| rated(i, i as f64 / 2.0)).collect();
        let top = top_doctors(&doctors, 4);
        assert_eq!(top.len(), 4);
        assert_eq!(top[0].rating, 4.5);
        assert_eq!(top[3].rating, 3.0);
    }

    #[test]
    fn test_fewer_records_than_count() {
        let top = top_doctors(&[rated(1, 3.0)], TOP_DOCTOR_COUNT);
        assert_eq!(top.len(), 1);
        assert!(top_doctors(&[], TOP_DOCTOR_COUNT).is_empty());
    }

    #[test]
    fn test_source_is_not_reordered() {
        let doctors = vec![rated(1, 3.0), rated(2, 5.0)];
        let _ = top_doctors(&doctors, 2);
        assert_eq!(doctors[0].id, DoctorId::Number(1));
    }
}
