mod common;

use pretty_assertions::assert_eq;
use rstest::rstest;
use verna::{ChannelUpdate, ChannelValue, Color, ColorError, Result};

fn set(color: &mut Color, channel: &str, value: ChannelValue) -> Result<()> {
    match channel {
        "alpha" => color.set_alpha(value),
        "red" => color.set_red(value),
        "green" => color.set_green(value),
        "blue" => color.set_blue(value),
        other => panic!("no channel named {other}"),
    }
}

#[rstest]
#[case("alpha", ChannelValue::Int(0x1ff))]
#[case("alpha", ChannelValue::Int(-1))]
#[case("alpha", ChannelValue::from("120%"))]
#[case("alpha", ChannelValue::from("120"))]
#[case("alpha", ChannelValue::Float(1.2))]
#[case("alpha", ChannelValue::Bool(true))]
#[case("red", ChannelValue::Int(0x3ed))]
#[case("red", ChannelValue::from("399%"))]
fn invalid_edit(#[case] channel: &str, #[case] value: ChannelValue) {
    common::init_tracing();
    let mut color = Color::new(0xeeff22aa);
    assert!(set(&mut color, channel, value).is_err());
    assert_eq!(color.value(), 0xeeff22aa);
}

#[rstest]
#[case("alpha", ChannelValue::Int(0xff), 0xffff22aa)]
#[case("alpha", ChannelValue::from("50%"), 0x80ff22aa)]
#[case("alpha", ChannelValue::Float(0.5), 0x80ff22aa)]
#[case("red", ChannelValue::Int(0xed), 0xeeed22aa)]
#[case("red", ChannelValue::from("99%"), 0xeefc22aa)]
#[case("green", ChannelValue::Int(0x58), 0xeeff58aa)]
#[case("green", ChannelValue::from("68%"), 0xeeffadaa)]
#[case("blue", ChannelValue::Int(0xbe), 0xeeff22be)]
#[case("blue", ChannelValue::from("59%"), 0xeeff2296)]
fn valid_edit(#[case] channel: &str, #[case] value: ChannelValue, #[case] expected: u32) {
    let mut color = Color::new(0xeeff22aa);
    set(&mut color, channel, value).unwrap();
    assert_eq!(color.value(), expected);
}

#[test]
fn with_leaves_original_untouched() {
    let color = Color::new(0xeeff22aa);
    let edited = color.with_red(0xed).unwrap();
    assert_eq!(edited.value(), 0xeeed22aa);
    assert_eq!(color.value(), 0xeeff22aa);

    assert_eq!(color.with_green("68%").unwrap().value(), 0xeeffadaa);
    assert_eq!(color.with_blue(0xbe).unwrap().value(), 0xeeff22be);
    assert_eq!(color.with_alpha(0.5).unwrap().value(), 0x80ff22aa);
    assert!(color.with_alpha(true).is_err());
}

#[rstest]
#[case(Color::new(0xeeff22aa), 0xff, 0x22, 0xaa)]
#[case(Color::new(0x80abcdef), 0xab, 0xcd, 0xef)]
#[case(Color::new(0xdcdcdc), 0xdc, 0xdc, 0xdc)]
fn rgb_access(#[case] color: Color, #[case] red: u8, #[case] green: u8, #[case] blue: u8) {
    assert_eq!((color.red(), color.green(), color.blue()), (red, green, blue));
}

#[test]
fn rgba_tuple() {
    let (red, green, blue, alpha) = Color::new(0x80abcdef).rgba();
    assert_eq!((red, green, blue), (0xab, 0xcd, 0xef));
    assert_eq!((alpha * 100.0).round() / 100.0, 0.5);
}

#[test]
fn from_rgba_with_alpha() {
    let color = Color::from_rgba(0xef, 0xa1, 0xde, 0.5).unwrap();
    assert_eq!(color.value(), 0x80efa1de);
}

#[test]
fn from_rgb_is_transparent() {
    let color = Color::from_rgb(0xef, 0xa1, 0xde).unwrap();
    assert_eq!(color.value(), 0x00efa1de);
    assert_eq!(color.alpha(), 0.0);
}

#[test]
fn from_rgba_mixed_forms() {
    let color = Color::from_rgba("100%", 0.0, 0x80, "50%").unwrap();
    assert_eq!(color.value(), 0x80ff0080);
}

#[rstest]
#[case(ChannelUpdate::new().red("50%").blue(234), 0x0180cdea)]
#[case(ChannelUpdate::new(), 0x01abcdef)]
#[case(ChannelUpdate::new().red(1).green("70%").blue(181).alpha(0), 0x0001b3b5)]
#[case(ChannelUpdate::new().red(1.0).green("70%").blue(181).alpha(0), 0x00ffb3b5)]
fn replace(#[case] update: ChannelUpdate, #[case] expected: u32) {
    let color = Color::new(0x01abcdef);
    assert_eq!(color.replace(update).unwrap().value(), expected);
}

#[test]
fn replace_alpha_percentage() {
    let color = Color::new(0xeeff22aa);
    let replaced = color.replace(ChannelUpdate::new().alpha("50%")).unwrap();
    assert_eq!(replaced.value(), 0x80ff22aa);
}

#[test]
fn replace_rejects_bool() {
    common::init_tracing();
    let color = Color::new(0x01abcdef);
    assert_eq!(
        color.replace(ChannelUpdate::new().red(true)),
        Err(ColorError::InvalidType("bool"))
    );
}

#[test]
fn replace_failure_in_any_channel_is_total() {
    let color = Color::new(0x01abcdef);
    let update = ChannelUpdate::new().red(0).green(0).blue(0).alpha(2.0);
    assert!(matches!(
        color.replace(update),
        Err(ColorError::InvalidValue(_))
    ));
}

#[test]
fn from_name() {
    common::init_tracing();
    assert_eq!(Color::from_name("gainsboro"), Ok(Color::new(0xdcdcdc)));
    assert_eq!(Color::from_name("GainsBoro"), Ok(Color::new(0xdcdcdc)));
    assert_eq!(
        Color::from_name("blurple"),
        Err(ColorError::UnknownName("blurple".into()))
    );
}

#[test]
fn integer_conversions() {
    let color = Color::new(0xeeff22aa);
    assert_eq!(u32::from(color), 0xeeff22aa);
    assert_eq!(Color::from(0xeeff22aa_u32), color);
    assert_eq!(Color::try_from(4009697962_i64), Ok(color));
    assert_eq!(Color::try_from(-1_i64), Err(ColorError::Range(-1)));
}

#[rstest]
#[case(0xeeff22aa, "eeff22aa")]
#[case(0xdcdcdc, "dcdcdc")]
#[case(0x0, "0")]
fn display_is_bare_hex(#[case] value: u32, #[case] expected: &str) {
    assert_eq!(Color::new(value).to_string(), expected);
}

#[test]
fn error_messages() {
    assert_eq!(
        ColorError::UnknownName("blurple".into()).to_string(),
        "unknown color name: \"blurple\""
    );
    assert_eq!(
        ColorError::InvalidType("bool").to_string(),
        "invalid value type: bool"
    );
}
