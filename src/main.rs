use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use chordmaster::{classify_line, parse_song, Key, LineKind, Song};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "chordmaster")]
#[command(about = "Transpose chord sheets and render Nashville numbers.")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Transpose a song file and print (or write) the new body.
    Transpose {
        input: PathBuf,

        /// Key the song is written in; overrides the front matter.
        #[arg(long)]
        from: Option<Key>,

        /// Key to transpose to. Defaults to the song's key.
        #[arg(long)]
        to: Option<Key>,

        /// Write Nashville numbers relative to the song's key.
        #[arg(long)]
        nashville: bool,

        /// Output file. Prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a song sheet with chord lines marked.
    Render {
        input: PathBuf,

        #[arg(long)]
        to: Option<Key>,

        #[arg(long)]
        nashville: bool,

        /// Print an instrument part instead of the chord sheet.
        #[arg(long)]
        part: Option<String>,

        /// Emit the sheet as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show how each line of a song is classified (C = chords, L = lyrics).
    Classify { input: PathBuf },

    /// List the supported keys.
    Keys,
}

fn main() {
    let cli = Cli::parse();
    if let Err(message) = run(cli.cmd, &mut io::stdout()) {
        eprintln!("{}", message);
        process::exit(1);
    }
}

fn read_song(path: &Path) -> Result<Song, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Error reading file '{}': {}", path.display(), e))?;
    parse_song(&source).map_err(|e| format!("Error in '{}': {}", path.display(), e))
}

fn write_error(e: io::Error) -> String {
    format!("Error writing output: {}", e)
}

fn run(cmd: Command, out: &mut dyn Write) -> Result<(), String> {
    match cmd {
        Command::Transpose {
            input,
            from,
            to,
            nashville,
            output,
        } => {
            let mut song = read_song(&input)?;
            if let Some(key) = from {
                song.original_key = key;
            }
            let transposed = song.transposed(to, nashville);
            match output {
                Some(path) => {
                    fs::write(&path, &transposed)
                        .map_err(|e| format!("Error writing to '{}': {}", path.display(), e))?;
                    eprintln!("Wrote transposed song to {}", path.display());
                }
                None => write!(out, "{}", transposed).map_err(write_error)?,
            }
        }
        Command::Render {
            input,
            to,
            nashville,
            part,
            json,
        } => {
            let song = read_song(&input)?;
            if let Some(instrument) = part {
                let notes = song
                    .part(&instrument)
                    .ok_or_else(|| format!("No '{}' part in '{}'", instrument, input.display()))?;
                writeln!(out, "{}", notes).map_err(write_error)?;
                return Ok(());
            }

            let sheet = song.sheet(to, nashville);
            if json {
                let rendered = serde_json::to_string_pretty(&sheet)
                    .map_err(|e| format!("Error encoding sheet: {}", e))?;
                writeln!(out, "{}", rendered).map_err(write_error)?;
            } else {
                if let Some(title) = &song.title {
                    writeln!(out, "{}", title).map_err(write_error)?;
                }
                if let Some(artist) = &song.artist {
                    writeln!(out, "{}", artist).map_err(write_error)?;
                }
                writeln!(out, "Key: {}", sheet.display_key).map_err(write_error)?;
                writeln!(out).map_err(write_error)?;
                for line in &sheet.lines {
                    let marker = if line.is_chord_line { '>' } else { ' ' };
                    writeln!(out, "{} {}", marker, line.text).map_err(write_error)?;
                }
            }
        }
        Command::Classify { input } => {
            let song = read_song(&input)?;
            for line in song.content.lines() {
                let marker = match classify_line(line) {
                    LineKind::Chord => 'C',
                    LineKind::Lyric => 'L',
                };
                writeln!(out, "{} {}", marker, line).map_err(write_error)?;
            }
        }
        Command::Keys => {
            for key in Key::ALL {
                writeln!(out, "{:<3} {:?}", key, key.accidental_preference())
                    .map_err(write_error)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONG: &str = "\
---
title: Grace
key: G
parts:
  Bass: root notes
---
G   C   G
Amazing grace
";

    /// Write `source` to a file of its own under the system temp directory
    fn song_file(name: &str, source: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "chordmaster-{}-{}.song",
            process::id(),
            name
        ));
        fs::write(&path, source).unwrap();
        path
    }

    fn run_args(args: &[&str]) -> Result<String, String> {
        let cli = Cli::try_parse_from(args.iter().copied()).map_err(|e| e.to_string())?;
        let mut out = Vec::new();
        run(cli.cmd, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_transpose_to_target() {
        let path = song_file("to-target", SONG);
        let input = path.to_str().unwrap();
        let printed = run_args(&["chordmaster", "transpose", input, "--to", "A"]);
        assert_eq!(printed.unwrap(), "A   D   A\nAmazing grace\n");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_transpose_defaults_to_original_key() {
        let path = song_file("default-target", SONG);
        let printed = run_args(&["chordmaster", "transpose", path.to_str().unwrap()]);
        assert_eq!(printed.unwrap(), "G   C   G\nAmazing grace\n");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_from_overrides_front_matter() {
        let path = song_file("from", SONG);
        let input = path.to_str().unwrap();

        // Read as if written in C, the chords are 5, 1, 5
        let printed = run_args(&[
            "chordmaster",
            "transpose",
            input,
            "--from",
            "C",
            "--nashville",
        ]);
        assert_eq!(printed.unwrap(), "5   1   5\nAmazing grace\n");

        let printed = run_args(&["chordmaster", "transpose", input, "--from", "F", "--to", "G"]);
        assert_eq!(printed.unwrap(), "A   D   A\nAmazing grace\n");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_transpose_writes_output_file() {
        let path = song_file("output-in", SONG);
        let output = std::env::temp_dir().join(format!("chordmaster-{}.out", process::id()));
        let printed = run_args(&[
            "chordmaster",
            "transpose",
            path.to_str().unwrap(),
            "--to",
            "Bb",
            "-o",
            output.to_str().unwrap(),
        ]);
        assert_eq!(printed.unwrap(), "");
        assert_eq!(fs::read_to_string(&output).unwrap(), "Bb   Eb   Bb\nAmazing grace\n");
        fs::remove_file(path).unwrap();
        fs::remove_file(output).unwrap();
    }

    #[test]
    fn test_render_marks_chord_lines() {
        let path = song_file("render", SONG);
        let input = path.to_str().unwrap();

        let printed = run_args(&["chordmaster", "render", input, "--to", "A"]).unwrap();
        assert_eq!(printed, "Grace\nKey: A\n\n> A   D   A\n  Amazing grace\n  \n");

        let printed = run_args(&["chordmaster", "render", input, "--nashville"]).unwrap();
        assert!(printed.contains("Key: #\n"));
        assert!(printed.contains("  1   4   1\n"));

        let printed = run_args(&["chordmaster", "render", input, "--part", "Bass"]).unwrap();
        assert_eq!(printed, "root notes\n");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_render_json() {
        let path = song_file("json", SONG);
        let printed = run_args(&["chordmaster", "render", path.to_str().unwrap(), "--json"]);
        let json: serde_json::Value = serde_json::from_str(&printed.unwrap()).unwrap();
        assert_eq!(json["displayKey"], "G");
        assert_eq!(json["lines"][0]["isChordLine"], true);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_classify_and_keys() {
        let path = song_file("classify", SONG);
        let printed = run_args(&["chordmaster", "classify", path.to_str().unwrap()]).unwrap();
        assert_eq!(printed, "C G   C   G\nL Amazing grace\n");
        fs::remove_file(path).unwrap();

        let printed = run_args(&["chordmaster", "keys"]).unwrap();
        assert_eq!(printed.lines().count(), Key::ALL.len());
        assert!(printed.starts_with("C   Sharps\n"));
        assert!(printed.contains("Bb  Flats\n"));
    }

    #[test]
    fn test_errors() {
        let path = song_file("errors", SONG);
        let input = path.to_str().unwrap();

        let missing_part = run_args(&["chordmaster", "render", input, "--part", "Drums"]);
        assert!(missing_part.unwrap_err().contains("No 'Drums' part"));

        // Unknown keys are rejected while parsing the arguments
        assert!(Cli::try_parse_from(["chordmaster", "transpose", input, "--to", "H"]).is_err());
        fs::remove_file(path).unwrap();

        let missing_file = run_args(&["chordmaster", "transpose", "/nonexistent/song.txt"]);
        assert!(missing_file.unwrap_err().starts_with("Error reading file"));

        let bad_key = song_file("bad-key", "---\nkey: Fb\n---\nC\n");
        let result = run_args(&["chordmaster", "transpose", bad_key.to_str().unwrap()]);
        assert!(result.unwrap_err().contains("Unknown key: Fb"));
        fs::remove_file(bad_key).unwrap();
    }
}
