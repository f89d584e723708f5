//! Reference rooms with expectations recomputed from the loss formulas.

use rl_core::units::{degc, m, m2};
use rl_core::Tolerance;
use rl_engine::{
    ConfigError, HeatLossBreakdown, OutputMode, RoomConfig, VentilationMethod, VentilationSystem,
    compute,
};

fn detailed(room: &RoomConfig) -> HeatLossBreakdown {
    *compute(room, OutputMode::Detailed)
        .breakdown()
        .expect("detailed mode returns a breakdown")
}

fn assert_breakdown(b: &HeatLossBreakdown, expected: [f64; 5]) {
    let [total, transmission, ventilation, infiltration, neighbour] = expected;
    assert!(
        Tolerance::FINE.close(b.transmission.value, transmission),
        "transmission {} != {transmission}",
        b.transmission.value
    );
    assert!(
        Tolerance::FINE.close(b.ventilation.value, ventilation),
        "ventilation {} != {ventilation}",
        b.ventilation.value
    );
    assert!(
        Tolerance::FINE.close(b.infiltration.value, infiltration),
        "infiltration {} != {infiltration}",
        b.infiltration.value
    );
    assert!(
        Tolerance::FINE.close(b.neighbour.value, neighbour),
        "neighbour {} != {neighbour}",
        b.neighbour.value
    );
    assert!(
        Tolerance::FINE.close(b.total.value, total),
        "total {} != {total}",
        b.total.value
    );
}

/// 10 m² room with light walls and roof, heavier ground floor.
fn base_room(method: VentilationMethod) -> RoomConfig {
    RoomConfig::new(m2(10.0), 0.24, 0.24, 0.7, method).with_airtightness(1.0, 0.2)
}

#[test]
fn ground_floor_room_exhaust_ventilation() {
    let room = base_room(VentilationMethod::resolve("simple", "C", None).unwrap()).on_ground(true);

    assert_breakdown(
        &detailed(&room),
        [
            597.226_505_518_585_3,
            299.654_419_884_611_9,
            247.86,
            49.712_085_633_973_39,
            0.0,
        ],
    );
}

#[test]
fn top_floor_room_with_neighbours_and_recovery() {
    // Simple method, so the room type key is never consulted
    let room = base_room(VentilationMethod::resolve("simple", "D", Some("Bathroom")).unwrap())
        .with_temperatures(degc(24.0), degc(-7.0), degc(18.0))
        .under_roof(true)
        .with_neighbour_losses(true);

    assert_breakdown(
        &detailed(&room),
        [
            506.356_302_525_609_07,
            201.447_667_274_924_84,
            85.374,
            57.076_839_061_228_7,
            162.457_796_189_455_5,
        ],
    );
}

#[test]
fn perimeter_room_with_misspelt_room_type_under_simple_method() {
    let method = VentilationMethod::resolve("simple", "D", Some("Bahtroom")).unwrap();
    let room = base_room(method)
        .with_perimeters(m(8.0), m(8.0))
        .with_temperatures(degc(24.0), degc(-7.0), degc(18.0))
        .under_roof(true)
        .with_neighbour_losses(true);

    assert_breakdown(
        &detailed(&room),
        [576.6908, 235.104, 85.374, 66.6128, 189.6],
    );
}

#[test]
fn misspelt_room_type_fails_under_table_method() {
    let err = VentilationMethod::resolve("NBN-D-50-001", "D", Some("Bahtroom")).unwrap_err();
    assert_eq!(err, ConfigError::UnknownRoomType("Bahtroom".to_string()));
}

#[test]
fn bathroom_under_table_method_uses_transfer_air() {
    let method = VentilationMethod::resolve("NBN-D-50-001", "D", Some("Bathroom")).unwrap();
    let room = base_room(method)
        .with_temperatures(degc(24.0), degc(-7.0), degc(18.0))
        .under_roof(true)
        .with_neighbour_losses(true);

    // 36 m³/h lifted to the bathroom minimum of 50 m³/h, heated from 18 to 24 °C
    assert_breakdown(
        &detailed(&room),
        [
            522.982_302_525_609,
            201.447_667_274_924_84,
            102.0,
            57.076_839_061_228_7,
            162.457_796_189_455_5,
        ],
    );
}

#[test]
fn living_room_under_table_method_with_recovery() {
    let method = VentilationMethod::NbnD50001 {
        system: VentilationSystem::BalancedWithRecovery,
        room_type: rl_engine::RoomType::Living,
    };
    let room = RoomConfig::new(m2(30.0), 0.24, 0.24, 0.7, method)
        .with_airtightness(1.0, 0.2)
        .on_ground(true);

    let b = detailed(&room);
    // 108 m³/h * 0.3 recovery * 0.34 * 27 K
    assert!(Tolerance::FINE.close(b.ventilation.value, 297.432));
    assert!(Tolerance::FINE.close(b.total.value, 1_165.474_482_563_499_8));
}

#[test]
fn unrecognized_method_drops_ventilation_only() {
    let method = VentilationMethod::resolve("bogus", "C", None).unwrap();
    let room = base_room(method).on_ground(true);

    assert_breakdown(
        &detailed(&room),
        [
            349.366_505_518_585_3,
            299.654_419_884_611_9,
            0.0,
            49.712_085_633_973_39,
            0.0,
        ],
    );
}

#[test]
fn scalar_mode_returns_the_same_total() {
    let room = base_room(VentilationMethod::default()).on_ground(true);
    let total = compute(&room, OutputMode::Total);
    assert!(total.breakdown().is_none());
    assert_eq!(total.total(), detailed(&room).total);
}
