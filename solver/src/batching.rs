use model::base_types::JourneyIdx;
use model::elements::Elements;
use model::vessels::DeckCapacity;
use solution::Journey;

use crate::error::SchedulingError;

/// Partition the ordered element list into the minimum number of journeys
/// such that no journey's cumulative footprint area or cargo mass exceeds the
/// deck capacity (equality is permitted).
///
/// The element order is fixed by the upstream installation sequence and must
/// not be changed, so this is a sequential prefix partition, not a general
/// bin-packing optimization: each journey takes the longest prefix of the
/// remaining elements that still fits.
pub fn batch_elements(
    elements: &Elements,
    capacity: DeckCapacity,
) -> Result<Vec<Journey>, SchedulingError> {
    let all: Vec<_> = elements.iter().collect();
    let mut journeys = Vec::new();
    let mut next = 0;

    while next < all.len() {
        let remaining = &all[next..];

        // the journey ends before the first element that would push the
        // cumulative area or mass over the capacity, whichever comes first
        let mut cumulative_area = 0.0;
        let mut cumulative_mass = 0.0;
        let mut taken = remaining.len();
        for (i, element) in remaining.iter().enumerate() {
            cumulative_area += element.area();
            cumulative_mass += element.dry_mass();
            if cumulative_area > capacity.area || cumulative_mass > capacity.cargo {
                taken = i;
                break;
            }
        }

        if taken == 0 {
            return Err(SchedulingError::NoElementFits {
                element: remaining[0].idx(),
            });
        }

        let batch = &remaining[..taken];
        journeys.push(Journey::new(
            JourneyIdx(journeys.len() as u16),
            batch.iter().map(|e| e.idx()).collect(),
            batch.iter().map(|e| e.area()).sum(),
            batch.iter().map(|e| e.dry_mass()).sum(),
        ));
        next += taken;
    }

    Ok(journeys)
}
