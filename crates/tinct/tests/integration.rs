use tinct::{
    ansi256_to_ansi16, decode, restyle, rgb_to_ansi256, strip_ansi, stylize, Attribute, Color,
    ColorTier, NamedColor, Restyle, Rgb, Style, StyleBuilder,
};

// ============================================================================
// Color reduction
// ============================================================================

#[test]
fn test_ansi256_to_ansi16_reference_table() {
    let expected: [[u8; 16]; 16] = [
        [30, 31, 32, 33, 34, 35, 36, 37, 90, 91, 92, 93, 94, 95, 96, 97],
        [30, 30, 30, 34, 34, 94, 30, 30, 30, 34, 34, 94, 30, 30, 30, 34],
        [34, 94, 32, 32, 32, 36, 36, 96, 32, 32, 32, 36, 36, 96, 92, 92],
        [92, 96, 96, 96, 30, 30, 30, 34, 34, 94, 30, 30, 30, 34, 34, 94],
        [30, 30, 30, 34, 34, 94, 32, 32, 32, 36, 36, 96, 32, 32, 32, 36],
        [36, 96, 92, 92, 92, 96, 96, 96, 30, 30, 30, 34, 34, 94, 30, 30],
        [30, 34, 34, 94, 30, 30, 30, 34, 34, 94, 32, 32, 32, 36, 36, 96],
        [32, 32, 32, 36, 36, 96, 92, 92, 92, 96, 96, 96, 31, 31, 31, 35],
        [35, 95, 31, 31, 31, 35, 35, 95, 31, 31, 31, 35, 35, 95, 33, 33],
        [33, 37, 37, 97, 33, 33, 33, 37, 37, 97, 93, 93, 93, 97, 97, 97],
        [31, 31, 31, 35, 35, 95, 31, 31, 31, 35, 35, 95, 31, 31, 31, 35],
        [35, 95, 33, 33, 33, 37, 37, 97, 33, 33, 33, 37, 37, 97, 93, 93],
        [93, 97, 97, 97, 91, 91, 91, 95, 95, 95, 91, 91, 91, 95, 95, 95],
        [91, 91, 91, 95, 95, 95, 93, 93, 93, 97, 97, 97, 93, 93, 93, 97],
        [97, 97, 93, 93, 93, 97, 97, 97, 30, 30, 30, 30, 30, 30, 30, 30],
        [30, 30, 30, 30, 37, 37, 37, 37, 37, 37, 37, 37, 37, 37, 37, 37],
    ];

    for (index, code) in expected.iter().flatten().enumerate() {
        let index = u8::try_from(index).unwrap();
        assert_eq!(ansi256_to_ansi16(index), *code, "index {}", index);
    }
}

#[test]
fn test_rgb_to_ansi256_reference_points() {
    let cases = [
        ((0, 0, 0), 16),
        ((255, 0, 0), 196),
        ((0, 255, 0), 46),
        ((0, 0, 255), 21),
        ((255, 255, 0), 226),
        ((255, 0, 255), 201),
        ((0, 255, 255), 51),
        ((255, 255, 255), 231),
        ((7, 7, 7), 16),
        ((8, 8, 8), 232),
        ((127, 127, 127), 244),
        ((191, 191, 191), 250),
        ((248, 248, 248), 255),
        ((249, 249, 249), 231),
        ((69, 173, 92), 72),
        ((201, 101, 240), 177),
        ((20, 40, 60), 23),
    ];
    for ((r, g, b), index) in cases {
        assert_eq!(rgb_to_ansi256(r, g, b), index, "rgb({}, {}, {})", r, g, b);
    }
}

// ============================================================================
// End-to-end styling
// ============================================================================

#[test]
fn test_stylize_examples() {
    let red = Some(Color::Named(NamedColor::Red));
    let teal = Some(Color::Rgb(Rgb(20, 40, 60)));

    assert_eq!(
        stylize("foo", ColorTier::Ansi16, red, None, &[]),
        "\x1b[31mfoo\x1b[39m"
    );
    assert_eq!(
        stylize("foo", ColorTier::TrueColor, teal, None, &[]),
        "\x1b[38;2;20;40;60mfoo\x1b[39m"
    );
    assert_eq!(
        stylize("foo", ColorTier::Extended256, teal, None, &[]),
        "\x1b[38;5;23mfoo\x1b[39m"
    );
}

#[test]
fn test_nested_builders() {
    let style = StyleBuilder::new().tier(ColorTier::Ansi16);
    let inner = style.clone().green().paint(" c ");
    let middle = style.clone().yellow().paint(format!(" b {} b ", inner));
    let outer = style.red().paint(format!(" a {} a ", middle));

    assert_eq!(
        outer,
        "\x1b[31m a \x1b[33m b \x1b[32m c \x1b[39m\x1b[31m\x1b[33m b \x1b[39m\x1b[31m a \x1b[39m"
    );
    assert_eq!(strip_ansi(&outer), " a  b  c  b  a ");
}

#[test]
fn test_styled_lines_stay_independent() {
    let out = StyleBuilder::new()
        .tier(ColorTier::Ansi16)
        .grey()
        .paint("hello\nworld");
    assert_eq!(out, "\x1b[90mhello\x1b[39m\n\x1b[90mworld\x1b[39m");

    for line in out.lines() {
        let (style, text) = decode(line);
        assert_eq!(style, Style::new().fg(NamedColor::BrightBlack));
        assert!(text == "hello" || text == "world");
    }
}

#[test]
fn test_merge_last_write_wins() {
    let red = Style::new().fg(NamedColor::Red);
    let blue = Style::new().fg(NamedColor::Blue);
    assert_eq!(red.merge(&blue).foreground(), Some(Color::Named(NamedColor::Blue)));
    assert_eq!(red.merge(&Style::new()).foreground(), Some(Color::Named(NamedColor::Red)));
}

#[test]
fn test_clamping() {
    assert_eq!(Color::rgb(-5, 300, 999), Color::Rgb(Rgb(0, 255, 255)));
}

// ============================================================================
// Decoding output from other tools
// ============================================================================

#[test]
fn test_decode_foreign_combined_sequence() {
    let (style, text) = decode("\x1b[1;38;5;208;48;2;0;0;0mwarn\x1b[0m");
    assert_eq!(text, "warn");
    assert_eq!(
        style,
        Style::new()
            .attribute(Attribute::Bold)
            .fg(Color::Indexed(208))
            .bg(Rgb(0, 0, 0))
    );
}

#[test]
fn test_restyle_foreign_output() {
    let out = restyle(
        "\x1b[4mlink\x1b[0m",
        &Style::new().fg(NamedColor::Blue),
        ColorTier::Ansi16,
    );
    assert_eq!(out, "\x1b[4m\x1b[34mlink\x1b[39m\x1b[24m");
    assert_eq!(
        out.with_attribute(Attribute::Underline, ColorTier::Ansi16),
        out
    );
}
