//! dumpspans - Inspect span reconstruction and highlight geometry
//!
//! Reads a JSON page dump of positioned text items (the data a rendering
//! engine hands over after text extraction), rebuilds word-level spans, and
//! prints spans, reconstructed text, per-line highlight rectangles, or the
//! creation request a simulated selection would emit.

use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use spanmark_core::error::{EngineError, Result};
use spanmark_core::geom::Matrix;
use spanmark_core::highlight::{compile_rects, compile_text};
use spanmark_core::layout::{PageTextItem, Span};
use spanmark_core::measure::{GlyphWidthMeasure, TextMeasure};
use spanmark_core::page::PageSession;
use spanmark_core::params::EngineParams;

/// What to print for the page.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Word-level spans as JSON (default)
    #[default]
    Spans,
    /// Reconstructed reading-order text
    Text,
    /// Per-line highlight rectangles in native units, as JSON
    Rects,
}

/// A page dump: requested scale, optional page transform, and positioned
/// text items in emission order.
#[derive(Debug, Deserialize)]
struct PageDump {
    #[serde(default = "default_scale")]
    scale: f64,
    #[serde(default)]
    transform: Option<Matrix>,
    items: Vec<PageTextItem>,
}

fn default_scale() -> f64 {
    1.0
}

impl PageDump {
    fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(EngineError::InvalidDump(format!(
                "scale must be positive and finite, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    /// The page transform, defaulting to a plain scale matrix.
    fn page_transform(&self) -> Matrix {
        self.transform
            .unwrap_or((self.scale, 0.0, 0.0, self.scale, 0.0, 0.0))
    }
}

/// Inspect span reconstruction and highlight geometry for a page dump.
#[derive(Parser, Debug)]
#[command(name = "dumpspans")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON page dump
    file: PathBuf,

    /// What to print
    #[arg(short = 't', long = "output-type", value_enum, default_value = "spans")]
    output_type: OutputType,

    /// Page number used in emitted creation requests
    #[arg(short = 'p', long = "page-number", default_value = "1")]
    page_number: u32,

    /// Override the dump's scale
    #[arg(short = 's', long)]
    scale: Option<f64>,

    /// Skip text measurement (coarser whole-item spans)
    #[arg(long = "no-measure", action = ArgAction::SetTrue)]
    no_measure: bool,

    /// Simulate a drag between two points: X0,Y0,X1,Y1 in scaled units
    #[arg(long, value_name = "X0,Y0,X1,Y1", allow_hyphen_values = true)]
    drag: Option<String>,

    /// Replay a span range as a committed selection: START,END
    #[arg(long, value_name = "START,END")]
    select: Option<String>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn parse_pair(value: &str) -> Result<(u32, u32)> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [start, end] = parts.as_slice() else {
        return Err(EngineError::InvalidArgument(format!(
            "expected START,END, got {value:?}"
        )));
    };
    let parse = |v: &str| {
        v.parse::<u32>()
            .map_err(|_| EngineError::InvalidArgument(format!("bad span id {v:?} in {value:?}")))
    };
    Ok((parse(start)?, parse(end)?))
}

fn parse_quad(value: &str) -> Result<(f64, f64, f64, f64)> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [x0, y0, x1, y1] = parts.as_slice() else {
        return Err(EngineError::InvalidArgument(format!(
            "expected X0,Y0,X1,Y1, got {value:?}"
        )));
    };
    let parse = |v: &str| {
        v.parse::<f64>()
            .map_err(|_| EngineError::InvalidArgument(format!("bad coordinate {v:?} in {value:?}")))
    };
    Ok((parse(x0)?, parse(y0)?, parse(x1)?, parse(y1)?))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
    }

    let raw = fs::read_to_string(&args.file)?;
    let mut dump: PageDump = serde_json::from_str(&raw)?;
    if let Some(scale) = args.scale {
        dump.scale = scale;
    }
    dump.validate()?;

    let mut session = PageSession::new(args.page_number, EngineParams::default());
    let measure = GlyphWidthMeasure;
    let measure_ref: Option<&dyn TextMeasure> = if args.no_measure {
        None
    } else {
        Some(&measure)
    };
    session.rebuild(&dump.items, dump.page_transform(), dump.scale, measure_ref);

    if let Some(value) = &args.drag {
        let (x0, y0, x1, y1) = parse_quad(value)?;
        if !session.pointer_down(x0, y0) {
            println!("no selection");
            return Ok(());
        }
        session.pointer_move(x1, y1);
        return print_request(session.pointer_up());
    }

    if let Some(value) = &args.select {
        let (start, end) = parse_pair(value)?;
        return print_request(session.request_for_range(start, end));
    }

    match args.output_type {
        OutputType::Spans => {
            println!("{}", serde_json::to_string_pretty(session.spans())?);
        }
        OutputType::Text => {
            let refs: Vec<&Span> = session.spans().iter().collect();
            println!("{}", compile_text(&refs, session.params()));
        }
        OutputType::Rects => {
            let refs: Vec<&Span> = session.spans().iter().collect();
            let rects = compile_rects(&refs, session.scale(), session.params());
            println!("{}", serde_json::to_string_pretty(&rects)?);
        }
    }

    Ok(())
}

fn print_request(request: Option<spanmark_core::HighlightRequest>) -> Result<()> {
    match request {
        Some(req) => println!("{}", serde_json::to_string_pretty(&req)?),
        None => println!("no selection"),
    }
    Ok(())
}
