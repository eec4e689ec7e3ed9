use super::*;

#[test]
fn coordinates_format_with_six_decimals() {
    assert_eq!(
        format_coordinates(40.712776, -74.005974),
        "Location: 40.712776, -74.005974"
    );
}

#[test]
fn coordinates_pad_short_fractions() {
    assert_eq!(format_coordinates(40.5, -74.0), "Location: 40.500000, -74.000000");
}
