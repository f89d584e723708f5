//! Properties that hold for every room configuration.

use proptest::prelude::*;
use rl_core::units::{as_degc, degc, m, m2};
use rl_engine::{
    AreaEstimation, FlowPair, OutputMode, RoomConfig, RoomType, VentilationMethod,
    VentilationSystem, aggregate, compute, estimate_areas, estimate_flows,
};

fn system() -> impl Strategy<Value = VentilationSystem> {
    prop_oneof![
        Just(VentilationSystem::ExhaustOnly),
        Just(VentilationSystem::BalancedWithRecovery),
    ]
}

fn room_type() -> impl Strategy<Value = RoomType> {
    prop::sample::select(RoomType::ALL.to_vec())
}

fn method() -> impl Strategy<Value = VentilationMethod> {
    prop_oneof![
        system().prop_map(|system| VentilationMethod::Simple { system }),
        (system(), room_type())
            .prop_map(|(system, room_type)| VentilationMethod::NbnD50001 { system, room_type }),
        Just(VentilationMethod::Unrecognized("other".to_string())),
    ]
}

prop_compose! {
    fn room()(
        floor_area in 1.0_f64..200.0,
        wall_height in 2.0_f64..4.0,
        u in (0.1_f64..3.0, 0.1_f64..3.0, 0.1_f64..3.0, 0.1_f64..3.0),
        airtightness in (0.0_f64..12.0, 0.0_f64..1.0),
        temps in (10.0_f64..26.0, -20.0_f64..10.0, 0.0_f64..30.0),
        perimeters in prop::option::of((0.0_f64..30.0, 0.0_f64..30.0)),
        flags in (any::<bool>(), any::<bool>(), any::<bool>()),
        ventilation in method(),
    ) -> RoomConfig {
        let (u_wall, u_roof, u_ground, u_neighbour) = u;
        let (t_in, t_out, t_neighbour) = temps;
        let (on_ground, under_roof, neighbours) = flags;

        let mut room = RoomConfig::new(m2(floor_area), u_wall, u_roof, u_ground, ventilation)
            .with_wall_height(m(wall_height))
            .with_u_neighbour(u_neighbour)
            .with_airtightness(airtightness.0, airtightness.1)
            .with_temperatures(degc(t_in), degc(t_out), degc(t_neighbour))
            .on_ground(on_ground)
            .under_roof(under_roof)
            .with_neighbour_losses(neighbours);
        if let Some((exposed, neighbour)) = perimeters {
            room = room.with_perimeters(m(exposed), m(neighbour));
        }
        room
    }
}

proptest! {
    #[test]
    fn exactly_one_floor_boundary(room in room()) {
        let areas = estimate_areas(&room);
        let ground = areas.ground.value != 0.0;
        let neighbour = areas.neighbour_floor.value != 0.0;
        prop_assert!(ground ^ neighbour);
    }

    #[test]
    fn transfer_air_never_heats_when_neighbour_is_warmer(
        room in room(),
        inside_flow in 0.0_f64..500.0,
    ) {
        let mut room = room;
        room.t_neighbour = degc(as_degc(room.t_in) + 1.0);
        let areas = estimate_areas(&room);
        let b = aggregate(&room, &areas, &FlowPair::from_m3ph(0.0, inside_flow));
        prop_assert_eq!(b.ventilation.value, 0.0);
    }

    #[test]
    fn simple_method_has_no_transfer_air(room in room(), system in system()) {
        let room = room.with_ventilation(VentilationMethod::Simple { system });
        prop_assert_eq!(estimate_flows(&room).from_inside.value, 0.0);
    }

    #[test]
    fn infiltration_ignores_ventilation_choice(room in room(), other in method()) {
        let a = compute(&room, OutputMode::Detailed);
        let b = compute(&room.clone().with_ventilation(other), OutputMode::Detailed);
        prop_assert_eq!(
            a.breakdown().unwrap().infiltration,
            b.breakdown().unwrap().infiltration
        );
    }

    #[test]
    fn total_is_sum_of_components(room in room()) {
        let loss = compute(&room, OutputMode::Detailed);
        let b = loss.breakdown().unwrap();
        let sum = b.transmission.value + b.ventilation.value + b.infiltration.value + b.neighbour.value;
        prop_assert_eq!(b.total.value, sum);
    }

    #[test]
    fn scalar_and_detailed_totals_agree(room in room()) {
        let total = compute(&room, OutputMode::Total).total();
        let detailed = compute(&room, OutputMode::Detailed);
        prop_assert_eq!(total, detailed.breakdown().unwrap().total);
    }

    #[test]
    fn neighbour_flag_only_touches_neighbour_term(room in room()) {
        let on = compute(&room.clone().with_neighbour_losses(true), OutputMode::Detailed);
        let off = compute(&room.with_neighbour_losses(false), OutputMode::Detailed);
        let (on, off) = (on.breakdown().unwrap(), off.breakdown().unwrap());
        prop_assert_eq!(off.neighbour.value, 0.0);
        prop_assert_eq!(on.transmission, off.transmission);
        prop_assert_eq!(on.ventilation, off.ventilation);
        prop_assert_eq!(on.infiltration, off.infiltration);
    }

    #[test]
    fn floor_area_mode_keeps_walls_symmetric(room in room()) {
        let room = room.with_area_estimation(AreaEstimation::FromFloorArea);
        let areas = estimate_areas(&room);
        prop_assert_eq!(areas.exterior_wall, areas.neighbour_wall);
    }
}
