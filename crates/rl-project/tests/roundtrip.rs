use rl_project::schema::*;
use rl_project::{LATEST_VERSION, ProjectError, load_json, load_yaml, resolve_rooms, save_json, save_yaml};

fn two_room_project() -> Project {
    let mut bathroom = RoomDef::new("bath", 6.0, 0.24, 0.24, 0.7, "D");
    bathroom.name = Some("Bathroom".to_string());
    bathroom.ventilation_calculation_method = "NBN-D-50-001".to_string();
    bathroom.room_type = Some("Bathroom".to_string());
    bathroom.under_roof = true;
    bathroom.add_neighbour_losses = true;
    bathroom.return_detail = true;

    let mut living = RoomDef::new("living", 28.0, 0.24, 0.24, 0.7, "D");
    living.on_ground = true;
    living.heat_loss_area_estimation = "fromExposedPerimeter".to_string();
    living.exposed_perimeter = 11.0;
    living.neighbour_perimeter = 10.0;

    Project {
        version: LATEST_VERSION,
        name: "Two rooms".to_string(),
        rooms: vec![bathroom, living],
    }
}

#[test]
fn roundtrip_yaml_empty_project() {
    let project = Project {
        version: LATEST_VERSION,
        name: "Empty Project".to_string(),
        rooms: vec![],
    };

    let path = std::env::temp_dir().join("rl_project_roundtrip_empty.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_yaml_two_rooms() {
    let project = two_room_project();

    let path = std::env::temp_dir().join("rl_project_roundtrip_two_rooms.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_two_rooms() {
    let project = two_room_project();

    let path = std::env::temp_dir().join("rl_project_roundtrip_two_rooms.json");
    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(project, loaded);
    assert_eq!(resolve_rooms(&loaded).unwrap().len(), 2);
}

#[test]
fn save_rejects_duplicate_rooms() {
    let mut project = two_room_project();
    project.rooms[1].id = "bath".to_string();

    let path = std::env::temp_dir().join("rl_project_duplicate_rooms.yaml");
    let err = save_yaml(&path, &project).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn resolve_reports_the_failing_room() {
    let mut project = two_room_project();
    project.rooms[0].room_type = Some("Bahtroom".to_string());

    match resolve_rooms(&project) {
        Err(ProjectError::Config { room, source }) => {
            assert_eq!(room, "bath");
            assert!(source.to_string().contains("Bahtroom"));
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}
