#[cfg(test)]
mod tests {
    use glam::IVec2;
    use proptest::prelude::*;

    use crate::enums::*;
    use crate::events::{Loss, LossReason, TickOutcome};
    use crate::fleet::Fleet;
    use crate::octant;
    use crate::plane::Plane;
    use crate::state::{describe, orders, PlaneSummary};
    use crate::types::{Course, Endpoint, PlaneId};

    fn plane(slot: u8) -> Plane {
        Plane {
            id: PlaneId::new(slot).unwrap(),
            kind: PlaneKind::Jet,
            status: PlaneStatus::Marked,
            flight: Flight::Airborne,
            origin: Endpoint::Exit(0),
            destination: Endpoint::Airport(1),
            altitude: 7,
            target_altitude: 7,
            dir: 2,
            course: Course::Heading(2),
            fuel: 30,
            pos: IVec2::new(5, 5),
            delay: None,
        }
    }

    // ---- Identity ----

    #[test]
    fn test_plane_names_follow_kind() {
        let id = PlaneId::new(2).unwrap();
        assert_eq!(id.name(PlaneKind::Prop), 'C');
        assert_eq!(id.name(PlaneKind::Jet), 'c');
        assert_eq!(PlaneId::new(26), None);
    }

    #[test]
    fn test_plane_selection_is_case_insensitive() {
        assert_eq!(PlaneId::from_letter('D'), PlaneId::new(3));
        assert_eq!(PlaneId::from_letter('d'), PlaneId::new(3));
        assert_eq!(PlaneId::from_letter('7'), None);
    }

    // ---- Fleet ----

    #[test]
    fn test_take_off_moves_plane_to_back() {
        let mut fleet = Fleet::new();
        let mut holding = plane(0);
        holding.flight = Flight::Grounded;
        holding.altitude = 0;
        fleet.insert(holding);
        fleet.insert(plane(1));
        fleet.insert(plane(2));

        assert_eq!(fleet.airborne_ids(), vec![PlaneId::new(1).unwrap(), PlaneId::new(2).unwrap()]);
        assert_eq!(fleet.grounded().count(), 1);

        fleet.take_off(PlaneId::new(0).unwrap());
        let order: Vec<u8> = fleet.airborne().map(|p| p.id.slot()).collect();
        assert_eq!(order, vec![1, 2, 0]);
        assert_eq!(fleet.grounded().count(), 0);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut fleet = Fleet::new();
        for slot in 0..4 {
            fleet.insert(plane(slot));
        }
        fleet.remove(PlaneId::new(1).unwrap());
        let order: Vec<u8> = fleet.iter().map(|p| p.id.slot()).collect();
        assert_eq!(order, vec![0, 2, 3]);
    }

    #[test]
    fn test_merge_prefers_course_over_altitude() {
        let mut fleet = Fleet::new();
        fleet.insert(plane(0));

        let mut edited = plane(0);
        edited.course = Course::Heading(4);
        edited.target_altitude = 3;
        edited.status = PlaneStatus::Ignored;
        edited.pos = IVec2::new(1, 1);
        assert!(fleet.merge_command(&edited));

        let live = fleet.get(edited.id).unwrap();
        assert_eq!(live.course, Course::Heading(4));
        assert_eq!(live.target_altitude, 7);
        assert_eq!(live.status, PlaneStatus::Marked);
        assert_eq!(live.pos, IVec2::new(5, 5));
    }

    #[test]
    fn test_merge_takes_status_when_nothing_else_changed() {
        let mut fleet = Fleet::new();
        fleet.insert(plane(0));
        let mut edited = plane(0);
        edited.status = PlaneStatus::Unmarked;
        fleet.merge_command(&edited);
        assert_eq!(fleet.get(edited.id).unwrap().status, PlaneStatus::Unmarked);
    }

    #[test]
    fn test_merge_carries_delay_with_course() {
        let mut fleet = Fleet::new();
        fleet.insert(plane(0));
        let mut edited = plane(0);
        edited.delay = Some(1);
        fleet.merge_command(&edited);
        assert_eq!(fleet.get(edited.id).unwrap().delay, Some(1));
    }

    #[test]
    fn test_merge_of_removed_plane_is_rejected() {
        let mut fleet = Fleet::new();
        assert!(!fleet.merge_command(&plane(3)));
    }

    // ---- Outcomes ----

    #[test]
    fn test_loss_messages_are_verbatim() {
        assert_eq!(LossReason::OutOfFuel.to_string(), "ran out of fuel.");
        assert_eq!(
            LossReason::ExitedWrongAltitude.to_string(),
            "exited at the wrong altitude"
        );
        assert_eq!(
            LossReason::LeftArena.to_string(),
            "illegally left the flight arena."
        );
        assert_eq!(
            LossReason::Collision { other: 'b' }.to_string(),
            "collided with plane 'b'"
        );
    }

    #[test]
    fn test_loss_summary() {
        let loss = Loss {
            plane: PlaneId::new(0).unwrap(),
            name: 'A',
            reason: LossReason::CrashedOnGround,
            clock: 12,
        };
        assert_eq!(
            loss.summary(),
            "You lost because plane 'A' crashed on the ground."
        );
    }

    #[test]
    fn test_tick_outcome_serde() {
        let outcomes = vec![
            TickOutcome::Success {
                clock: 4,
                safe_planes: 1,
            },
            TickOutcome::Loss(Loss {
                plane: PlaneId::new(5).unwrap(),
                name: 'f',
                reason: LossReason::Collision { other: 'G' },
                clock: 9,
            }),
        ];
        for outcome in &outcomes {
            let json = serde_json::to_string(outcome).unwrap();
            let back: TickOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(*outcome, back);
        }
    }

    // ---- Summaries ----

    #[test]
    fn test_orders_column() {
        let mut p = plane(0);
        assert_eq!(orders(&p), "");

        p.course = Course::Heading(4);
        p.delay = Some(2);
        assert_eq!(orders(&p), "180° @ B2");

        p.course = Course::Circling;
        p.delay = None;
        assert_eq!(orders(&p), "Circle");

        p.course = Course::Heading(p.dir);
        p.status = PlaneStatus::Ignored;
        assert_eq!(orders(&p), "---------");

        p.altitude = 0;
        p.origin = Endpoint::Airport(1);
        assert_eq!(orders(&p), "Holding @ A1");
    }

    #[test]
    fn test_describe_climbing_and_turning() {
        let mut p = plane(1);
        p.target_altitude = 9;
        p.course = Course::Heading(0);
        let lines = describe(&p);
        assert_eq!(lines[0], "Plane b");
        assert_eq!(lines[1], "Destination: airport #1");
        assert_eq!(lines[2], "Altitude: 7,000 feet, climbing to 9,000 feet");
        assert_eq!(lines[3], "Heading: 90°, turning to 0°");
    }

    #[test]
    fn test_summary_flags_low_fuel() {
        let mut p = plane(0);
        p.fuel = 15;
        let summary = PlaneSummary::from(&p);
        assert!(summary.low_fuel);
        assert_eq!(summary.destination, "A1");
        assert_eq!(summary.name, 'a');
    }

    // ---- Octant arithmetic ----

    proptest! {
        #[test]
        fn prop_left_then_right_restores_heading(dir in 0u8..8, amount in 0i32..8) {
            let left = octant::rotate(dir, -amount);
            prop_assert_eq!(octant::rotate(left, amount), dir);
        }

        #[test]
        fn prop_rotate_stays_in_range(dir in 0u8..8, delta in -100i32..100) {
            prop_assert!(octant::rotate(dir, delta) < 8);
        }

        #[test]
        fn prop_bearing_of_displacement_is_identity(dir in 0u8..8, scale in 1i32..20) {
            let step = octant::displacement(dir) * scale;
            prop_assert_eq!(octant::bearing(step.x, step.y), dir);
        }
    }
}
