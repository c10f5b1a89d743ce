use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use symrec::api::{
    circle_stroke, line_stroke, polygon_strokes, GestureCapture, PointerButton, PointerEvent,
    Recognizer, RecognizerCfg, StrokeCfg, StrokeReplay,
};
use symrec::Point;
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod gestures;
mod provenance;

use gestures::Gesture;

#[derive(Parser)]
#[command(name = "symrec")]
#[command(about = "Freehand symbol recognizer: replay gesture scripts, synthesize strokes")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Replay a gesture script and write the final symbol bank as JSON
    Recognize {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Line acceptance threshold (strict >)
        #[arg(long, default_value_t = RecognizerCfg::default().line_goodness_min)]
        line_min: f64,
        /// Circle acceptance threshold (strict >)
        #[arg(long, default_value_t = RecognizerCfg::default().circle_goodness_min)]
        circle_min: f64,
    },
    /// Write a synthetic gesture script for one shape
    Synth {
        #[arg(long, value_enum)]
        shape: Shape,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Line,
    Circle,
    Triangle,
    Rectangle,
    Snowman,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Recognize {
            input,
            out,
            line_min,
            circle_min,
        } => {
            let cfg = RecognizerCfg {
                line_goodness_min: line_min,
                circle_goodness_min: circle_min,
            };
            recognize(&input, &out, cfg, cmd.tag).map(|_| ())
        }
        Action::Synth { shape, seed, out } => synth(shape, seed, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Replays every gesture through pointer capture into one recognizer.
fn replay(gestures: &[Gesture], cfg: RecognizerCfg) -> Recognizer {
    let mut recognizer = Recognizer::with_cfg(cfg);
    let mut capture = GestureCapture::new();
    for gesture in gestures {
        for &position in gesture {
            let drag = PointerEvent::Drag {
                button: PointerButton::Primary,
                position,
            };
            capture.handle(drag, &mut recognizer);
        }
        let release = PointerEvent::Release {
            button: PointerButton::Primary,
        };
        capture.handle(release, &mut recognizer);
    }
    recognizer
}

fn recognize(input: &Path, out: &Path, cfg: RecognizerCfg, tag: Option<String>) -> Result<usize> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "recognize");
    let gestures = gestures::read_gestures(input)?;
    let recognizer = replay(&gestures, cfg);
    let symbols = recognizer.current_symbols();
    let kinds: Vec<String> = symbols.iter().map(|s| s.kind().to_string()).collect();
    tracing::info!(gestures = gestures.len(), symbols = symbols.len(), "bank");

    ensure_parent(out)?;
    let rows = export::rows(&symbols);
    std::fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(
        serde_json::json!({
            "input": input.to_string_lossy(),
            "line_min": cfg.line_goodness_min,
            "circle_min": cfg.circle_goodness_min,
        }),
        tag,
    )
    .with_summary(serde_json::json!({
        "gestures": gestures.len(),
        "symbols": symbols.len(),
        "kinds": kinds,
    }));
    provenance::write_sidecar(out, payload)?;
    Ok(symbols.len())
}

fn shape_gestures(shape: Shape, seed: u64) -> Vec<Gesture> {
    let cfg = StrokeCfg::default();
    let tok = StrokeReplay::new(seed, 0);
    let p = Point::new;
    match shape {
        Shape::Line => vec![line_stroke(p(40.0, 40.0), p(240.0, 120.0), cfg, tok)],
        Shape::Circle => vec![circle_stroke(p(150.0, 150.0), 60.0, cfg, tok)],
        Shape::Triangle => {
            polygon_strokes(&[p(100.0, 200.0), p(220.0, 200.0), p(160.0, 96.1)], cfg, tok)
        }
        Shape::Rectangle => polygon_strokes(
            &[p(60.0, 60.0), p(260.0, 60.0), p(260.0, 160.0), p(60.0, 160.0)],
            cfg,
            tok,
        ),
        // Centres step along (0.6, 0.8) by the sum of neighbouring radii.
        Shape::Snowman => [(100.0, 100.0), (136.0, 148.0), (196.0, 228.0)]
            .into_iter()
            .zip([20.0, 40.0, 60.0])
            .enumerate()
            .map(|(k, ((x, y), r))| circle_stroke(p(x, y), r, cfg, tok.child(k as u64)))
            .collect(),
    }
}

fn synth(shape: Shape, seed: u64, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(?shape, seed, out = %out.display(), "synth");
    let gestures = shape_gestures(shape, seed);
    gestures::write_gestures(out, &gestures)?;
    let payload = provenance::Payload::new(
        serde_json::json!({ "shape": format!("{shape:?}").to_lowercase(), "seed": seed }),
        tag,
    )
    .with_summary(serde_json::json!({ "gestures": gestures.len() }));
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::block(tag.as_deref());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
