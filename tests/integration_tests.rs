//! Integration tests for chordmaster
//!
//! Tests the full pipeline from chord sheet text to transposed text and rendered sheets.

use chordmaster::lexer::tokenize;
use chordmaster::{
    get_transposed_content, is_chord_line, render_song, transpose_song, ChordError, Key,
};

const SHEET: &str = "\
Verse 1
C          G/B        Am7
Amazing grace how sweet the sound
F#dim      Bb/D   Csus4  C
That saved a wretch like me

|Dm7  |G7  |Cmaj7  |C
";

/// Root and bass pitch classes of every chord in the text, in order
fn chord_pitches(text: &str) -> Vec<(u8, Option<u8>)> {
    text.lines()
        .filter(|line| is_chord_line(line))
        .flat_map(|line| {
            tokenize(line)
                .into_iter()
                .filter_map(|t| {
                    t.chord()
                        .map(|c| (c.root_pitch().value(), c.bass_pitch().map(|b| b.value())))
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn test_root_chords_c_to_d() {
    assert_eq!(
        get_transposed_content("C       G       Am      F", Key::C, Key::D, false),
        "D       A       Bm      G"
    );
}

#[test]
fn test_identity_for_every_key() {
    for key in Key::ALL {
        assert_eq!(get_transposed_content(SHEET, key, key, false), SHEET);
    }
}

#[test]
fn test_lyric_lines_never_change() {
    let transposed = get_transposed_content(SHEET, Key::C, Key::AFlat, false);
    let original: Vec<&str> = SHEET.lines().collect();
    let result: Vec<&str> = transposed.lines().collect();
    assert_eq!(original.len(), result.len());
    for (before, after) in original.iter().zip(&result) {
        if !is_chord_line(before) {
            assert_eq!(before, after);
        }
    }
    assert!(transposed.ends_with('\n'));
}

#[test]
fn test_transposition_composes() {
    for k1 in [Key::C, Key::E, Key::BFlat] {
        for k2 in [Key::DFlat, Key::FSharp, Key::A] {
            for k3 in [Key::G, Key::EFlat, Key::B] {
                let two_step = get_transposed_content(
                    &get_transposed_content(SHEET, k1, k2, false),
                    k2,
                    k3,
                    false,
                );
                let direct = get_transposed_content(SHEET, k1, k3, false);
                assert_eq!(
                    chord_pitches(&two_step),
                    chord_pitches(&direct),
                    "{} -> {} -> {}",
                    k1,
                    k2,
                    k3
                );
            }
        }
    }
}

#[test]
fn test_transposition_shifts_every_chord() {
    let transposed = get_transposed_content(SHEET, Key::C, Key::F, false);
    let before = chord_pitches(SHEET);
    let after = chord_pitches(&transposed);
    assert_eq!(before.len(), after.len());
    for ((root, bass), (new_root, new_bass)) in before.into_iter().zip(after) {
        assert_eq!((root + 5) % 12, new_root);
        assert_eq!(bass.map(|b| (b + 5) % 12), new_bass);
    }
}

#[test]
fn test_full_sheet_to_e_flat() {
    let transposed = get_transposed_content(SHEET, Key::C, Key::EFlat, false);
    assert_eq!(
        transposed,
        "\
Verse 1
Eb          Bb/D        Cm7
Amazing grace how sweet the sound
Adim      Db/F   Ebsus4  Eb
That saved a wretch like me

|Fm7  |Bb7  |Ebmaj7  |Eb
"
    );
}

#[test]
fn test_nashville_sheet() {
    let transposed = get_transposed_content(SHEET, Key::C, Key::G, true);
    let lines: Vec<&str> = transposed.lines().collect();
    assert_eq!(lines[1], "1          5/7        6m7");
    assert_eq!(lines[3], "#4dim      #6/2   1sus4  1");
    assert_eq!(lines[6], "|2m7  |57  |1maj7  |1");
    assert_eq!(lines[2], "Amazing grace how sweet the sound");
}

#[test]
fn test_punctuated_and_six_nine_chords() {
    assert_eq!(
        get_transposed_content("C   G...   Am.  F", Key::C, Key::D, false),
        "D   A...   Bm.  G"
    );
    assert_eq!(get_transposed_content("C6/9  G", Key::C, Key::D, false), "D6/9  A");
}

#[test]
fn test_b_flat_nashville_in_c() {
    assert_eq!(get_transposed_content("Bb", Key::C, Key::C, true), "#6");
}

#[test]
fn test_malformed_chord_is_untouched() {
    assert_eq!(get_transposed_content("C/H", Key::C, Key::D, false), "C/H");
    assert_eq!(get_transposed_content("C/H  G", Key::C, Key::D, false), "C/H  A");
}

#[test]
fn test_classification_examples() {
    assert!(!is_chord_line(""));
    assert!(!is_chord_line("   "));
    assert!(is_chord_line("C G Am F"));
    assert!(!is_chord_line("Amazing grace how sweet the sound"));
}

#[test]
fn test_song_pipeline() {
    let source = "---\ntitle: Grace\nkey: G\n---\nG   C   G\nAmazing grace\n";
    assert_eq!(
        transpose_song(source, Some(Key::A), false).unwrap(),
        "A   D   A\nAmazing grace\n"
    );

    let sheet = render_song(source, Some(Key::BFlat), false).unwrap();
    assert_eq!(sheet.display_key, "Bb");
    assert_eq!(sheet.lines.len(), 3);
    assert_eq!(sheet.lines[0].text, "Bb   Eb   Bb");
    assert!(sheet.lines[0].is_chord_line);
    assert!(!sheet.lines[1].is_chord_line);
    assert_eq!(sheet.lines[2].text, "");

    let sheet = render_song(source, Some(Key::BFlat), true).unwrap();
    assert_eq!(sheet.display_key, "#");
    assert_eq!(sheet.lines[0].text, "1   4   1");
}

#[test]
fn test_song_errors() {
    assert_eq!(
        transpose_song("---\nkey: Fb\n---\nC", None, false),
        Err(ChordError::UnknownKey("Fb".to_string()))
    );
    assert!(matches!(
        render_song("---\nkey: C\n", None, false),
        Err(ChordError::MetadataError(_))
    ));
}
