//! Font tooling for ASS subtitle scripts
//!
//! Three subcommands: `analyze` reports which characters each font must
//! render, `embed` writes already-subsetted font files into a script's
//! `[Fonts]` section, and `inspect` lists fonts a script already embeds.
//! Actual glyph subsetting is left to dedicated tools; `embed` takes the
//! font files as given.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use assfont_core::codec::{embed_font_files, inspect_embedded_fonts};
use assfont_core::utils::load_script;
use assfont_core::FontUsageAnalyzer;

/// Longest run of sample characters printed per font by `analyze`
const SAMPLE_LEN: usize = 50;

#[derive(Parser, Debug)]
#[command(name = "assfont", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show which fonts a script uses and the characters each must render
    Analyze {
        /// The ASS script to analyze
        script: PathBuf,
    },

    /// Embed font files into a script's [Fonts] section
    Embed {
        /// The ASS script to embed into
        script: PathBuf,

        /// Font file to embed; repeat for multiple fonts
        #[arg(short, long = "font", required = true)]
        fonts: Vec<PathBuf>,

        /// Output path (default: <script>.embedded.ass)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List fonts already embedded in a script, with approximate sizes
    Inspect {
        /// The ASS script to inspect
        script: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Command::Analyze { script } => analyze(&script),
        Command::Embed {
            script,
            fonts,
            output,
        } => embed(&script, &fonts, output),
        Command::Inspect { script } => inspect(&script),
    }
}

fn analyze(script: &Path) -> anyhow::Result<()> {
    let text = load_script(script).with_context(|| format!("reading {}", script.display()))?;
    let usage = FontUsageAnalyzer::new(&text).analyze();

    if usage.is_empty() {
        println!("No fonts referenced by {}", script.display());
        return Ok(());
    }

    let mut fonts: Vec<_> = usage.values().collect();
    fonts.sort_by_key(|entry| entry.font_name());

    println!("Fonts used by {}:", script.display());
    for entry in fonts {
        println!("  {} ({} characters)", entry.font_name(), entry.char_count());
        if entry.char_count() > 0 {
            let sample: String = entry.chars().iter().take(SAMPLE_LEN).collect();
            let ellipsis = if entry.char_count() > SAMPLE_LEN { "..." } else { "" };
            println!("    {sample}{ellipsis}");
        }
    }
    Ok(())
}

fn embed(script: &Path, fonts: &[PathBuf], output: Option<PathBuf>) -> anyhow::Result<()> {
    if fonts.is_empty() {
        bail!("no font files given");
    }

    let output = output.unwrap_or_else(|| default_output(script));
    embed_font_files(script, fonts, &output)
        .with_context(|| format!("embedding into {}", script.display()))?;

    println!(
        "Embedded {} font(s) into {}",
        fonts.len(),
        output.display()
    );
    Ok(())
}

fn inspect(script: &Path) -> anyhow::Result<()> {
    let text = load_script(script).with_context(|| format!("reading {}", script.display()))?;
    let embedded = inspect_embedded_fonts(&text);

    if embedded.is_empty() {
        println!("No embedded fonts in {}", script.display());
        return Ok(());
    }

    println!("Embedded fonts in {} (sizes approximate):", script.display());
    for info in embedded {
        println!("  {} (~{} bytes)", info.name, info.estimated_size);
    }
    Ok(())
}

/// Default embed output path: `<stem>.embedded.ass` next to the input
fn default_output(script: &Path) -> PathBuf {
    let stem = script
        .file_stem()
        .map_or_else(|| "output".to_owned(), |s| s.to_string_lossy().into_owned());
    script.with_file_name(format!("{stem}.embedded.ass"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_appends_embedded_suffix() {
        let out = default_output(&PathBuf::from("/subs/movie.ass"));
        assert_eq!(out, PathBuf::from("/subs/movie.embedded.ass"));
    }

    #[test]
    fn embed_refuses_empty_font_list() {
        let err = embed(&PathBuf::from("x.ass"), &[], None).expect_err("must fail");
        assert!(err.to_string().contains("no font files"));
    }

    #[test]
    fn cli_parses_embed_arguments() {
        let cli = Cli::try_parse_from([
            "assfont", "embed", "in.ass", "--font", "a.ttf", "-f", "b.ttf", "-o", "out.ass",
        ])
        .expect("valid args");
        match cli.command {
            Command::Embed {
                script,
                fonts,
                output,
            } => {
                assert_eq!(script, PathBuf::from("in.ass"));
                assert_eq!(fonts.len(), 2);
                assert_eq!(output, Some(PathBuf::from("out.ass")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_requires_at_least_one_font_for_embed() {
        assert!(Cli::try_parse_from(["assfont", "embed", "in.ass"]).is_err());
    }

    #[test]
    fn analyze_and_inspect_run_against_real_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let script_path = dir.path().join("movie.ass");
        let font_path = dir.path().join("face.ttf");
        std::fs::write(
            &script_path,
            "Style: Default,Arial,20\nDialogue: 0,a,b,Default,,0,0,0,,Hi\n",
        )
        .expect("write script");
        std::fs::write(&font_path, [0u8; 6]).expect("write font");

        analyze(&script_path).expect("analyze");

        let out = dir.path().join("movie.embedded.ass");
        embed(&script_path, &[font_path], Some(out.clone())).expect("embed");
        inspect(&out).expect("inspect");
    }
}
