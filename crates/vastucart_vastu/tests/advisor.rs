use vastucart_vastu::{
    ALL_DIRECTIONS, ALL_ROOMS, Direction, RoomType, Suitability, advise_room, room_report,
    special_remedies,
};

#[test]
fn kitchen_north_east_is_avoided() {
    let room: RoomType = "kitchen".parse().unwrap();
    let dir: Direction = "north-east".parse().unwrap();
    let a = advise_room(room, dir);
    assert_eq!(a.suitability, Suitability::Avoid);
    assert_eq!(a.score, 30);
    assert!(!a.remedies.is_empty());
    let special = special_remedies(RoomType::Kitchen, Direction::NorthEast);
    assert!(special.iter().all(|r| a.remedies.contains(r)));
    assert_eq!(a.remedies[0], special[0]);
}

#[test]
fn bathroom_north_east_special_remedy() {
    let a = advise_room(RoomType::Bathroom, Direction::NorthEast);
    assert_eq!(a.suitability, Suitability::Avoid);
    assert!(a.remedies[0].en.starts_with("Bathroom in the north-east"));
}

#[test]
fn every_combination_resolves() {
    for room in ALL_ROOMS {
        for dir in ALL_DIRECTIONS {
            let a = advise_room(room, dir);
            assert_eq!(a.score, a.suitability.score());
            assert_eq!(a.remedies.is_empty(), !a.suitability.needs_remedy(), "{room}/{dir}");
            assert!(!a.summary.en.is_empty() && !a.summary.hi.is_empty());
        }
    }
}

#[test]
fn report_in_compass_order() {
    let report = room_report(RoomType::LivingRoom);
    assert_eq!(report.len(), 9);
    for (advice, dir) in report.iter().zip(ALL_DIRECTIONS) {
        assert_eq!(advice.direction, dir);
    }
    assert_eq!(
        report.iter().filter(|a| a.suitability == Suitability::Ideal).count(),
        3
    );
}

#[test]
fn serializes_kebab_enums() {
    let a = advise_room(RoomType::MasterBedroom, Direction::SouthWest);
    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["room"], "master-bedroom");
    assert_eq!(json["direction"], "south-west");
    assert_eq!(json["suitability"], "ideal");
    assert_eq!(json["score"], 95);
    assert!(json.get("idealDirections").is_some());
}
