use super::*;

#[test]
fn parses_hex_with_or_without_hash() {
    assert_eq!(Rgb8::parse_hex("#C45D3A"), Some(Rgb8::new(0xc4, 0x5d, 0x3a)));
    assert_eq!(Rgb8::parse_hex("faf8f5"), Some(Rgb8::new(0xfa, 0xf8, 0xf5)));
}

#[test]
fn malformed_hex_becomes_black() {
    for bad in ["", "#fff", "#12345", "#1234567", "#gggggg", "red", "#c45d3aff"] {
        assert_eq!(Rgb8::from_hex_lossy(bad), Rgb8::BLACK, "{bad:?}");
    }
}

#[test]
fn hex_output_is_lowercase() {
    assert_eq!(Rgb8::new(0xC4, 0x5D, 0x3A).to_hex(), "#c45d3a");
    assert_eq!(Rgb8::from_hex_lossy("#E8E4DF").to_string(), "#e8e4df");
}

#[test]
fn blend_endpoints() {
    let fg = Rgb8::new(26, 26, 26);
    let bg = Rgb8::new(250, 248, 245);
    assert_eq!(blend_colors(fg, bg, 1.0), fg);
    assert_eq!(blend_colors(fg, bg, 0.0), bg);
}

#[test]
fn blend_rounds_per_channel() {
    let c = blend_colors(Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255), 0.5);
    assert_eq!(c, Rgb8::new(128, 128, 128));
}

#[test]
fn blend_clamps_out_of_range_opacity() {
    let c = blend_colors(Rgb8::new(255, 0, 0), Rgb8::new(0, 0, 255), 1.5);
    assert_eq!(c, Rgb8::new(255, 0, 0));
}

#[test]
fn serde_uses_hex_strings() {
    let json = serde_json::to_string(&Rgb8::new(1, 2, 3)).unwrap();
    assert_eq!(json, "\"#010203\"");
    let back: Rgb8 = serde_json::from_str("\"#0A0B0C\"").unwrap();
    assert_eq!(back, Rgb8::new(10, 11, 12));
    assert!(serde_json::from_str::<Rgb8>("\"#abc\"").is_err());
}
