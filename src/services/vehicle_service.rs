/// Seats available per physical vehicle across the fleet.
pub const SEATS_PER_VEHICLE: u32 = 8;

/// How many physical vehicles a passenger count needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleRequirement {
    pub required: u32,
    pub needs_multiple: bool,
}

pub struct VehicleService;

impl VehicleService {
    /// Resolve the vehicle count for a passenger count at 8 seats per
    /// vehicle. Total over all positive counts; the form rejects counts
    /// below 1 before this is consulted.
    pub fn resolve_requirement(passenger_count: u32) -> VehicleRequirement {
        VehicleRequirement {
            required: passenger_count.div_ceil(SEATS_PER_VEHICLE),
            needs_multiple: passenger_count > SEATS_PER_VEHICLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_vehicle_up_to_eight_passengers() {
        for count in 1..=8 {
            let req = VehicleService::resolve_requirement(count);
            assert_eq!(req.required, 1);
            assert!(!req.needs_multiple);
        }
    }

    #[test]
    fn nine_passengers_need_two_vehicles() {
        let req = VehicleService::resolve_requirement(9);
        assert_eq!(req.required, 2);
        assert!(req.needs_multiple);
    }

    #[test]
    fn boundaries_at_full_vehicles() {
        assert_eq!(VehicleService::resolve_requirement(16).required, 2);
        assert_eq!(VehicleService::resolve_requirement(17).required, 3);
    }
}
