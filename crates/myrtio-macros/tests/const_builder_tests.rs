//! Integration tests for the `ConstBuilder` derive macro.

use myrtio_macros::ConstBuilder;

// -----------------------------------------------------------------------------
// Required and optional fields
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, ConstBuilder)]
pub struct RobotInfo<'a> {
    pub id: &'a str,
    pub battery: u8,
    pub model: Option<&'a str>,
    pub firmware: Option<&'a str>,
}

#[test]
fn required_fields_are_set_in_const() {
    const ROBOT: RobotInfo<'static> = RobotInfo::builder().id("deebot_1").battery(80).build();

    assert_eq!(ROBOT.id, "deebot_1");
    assert_eq!(ROBOT.battery, 80);
    assert_eq!(ROBOT.model, None);
    assert_eq!(ROBOT.firmware, None);
}

#[test]
fn optional_fields_can_be_set() {
    const ROBOT: RobotInfo<'static> = RobotInfo::builder()
        .id("deebot_2")
        .battery(100)
        .model(Some("T8"))
        .firmware(Some("1.4.2"))
        .build();

    assert_eq!(ROBOT.model, Some("T8"));
    assert_eq!(ROBOT.firmware, Some("1.4.2"));
}

#[test]
fn setter_order_does_not_matter() {
    let robot = RobotInfo::builder()
        .model(None)
        .battery(5)
        .id("deebot_3")
        .build();

    assert_eq!(robot.id, "deebot_3");
    assert_eq!(robot.battery, 5);
    assert_eq!(robot.model, None);
}

#[test]
fn later_setter_wins() {
    let robot = RobotInfo::builder()
        .id("first")
        .id("second")
        .battery(1)
        .build();

    assert_eq!(robot.id, "second");
}

#[test]
#[should_panic(expected = "missing required field: battery")]
fn missing_required_field_panics_at_runtime() {
    let _ = RobotInfo::builder().id("deebot_4").build();
}

// -----------------------------------------------------------------------------
// Structs without lifetimes and slice fields
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, ConstBuilder)]
pub struct CleaningZone {
    pub rooms: &'static [&'static str],
    pub passes: u8,
    pub suction: Option<u8>,
}

#[test]
fn slice_fields_are_supported() {
    static ROOMS: [&str; 2] = ["Kitchen", "Hall"];
    const ZONE: CleaningZone = CleaningZone::builder().rooms(&ROOMS).passes(2).build();

    assert_eq!(ZONE.rooms, ["Kitchen", "Hall"]);
    assert_eq!(ZONE.passes, 2);
    assert_eq!(ZONE.suction, None);
}

#[test]
fn builder_types_are_public() {
    let _robot: RobotInfoBuilder<'static> = RobotInfo::builder();
    let _zone: CleaningZoneBuilder = CleaningZone::builder().clone();
}
