//! Line-oriented quiz session.
//!
//! Each step is rendered as a short prompt and one line of input is read
//! per action. The session drives a [`QuizEngine`]; it never changes the
//! step itself.
//!
//! Inputs understood on every step:
//!
//! - `b` go back
//! - `r` restart from the hub
//! - `q` quit
//!
//! Menus take the number of an entry or its tag (`style`, `teardrop`, ...).

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use shapefit_core::{QuizEngine, QuizState};
use shapefit_model::{BandFit, Measurement, Path, Shape, SizeChart, Step};
use tracing::debug;

enum Input<'a> {
    Back,
    Restart,
    Quit,
    Other(&'a str),
}

fn classify(line: &str) -> Input<'_> {
    match line.trim() {
        "b" | "back" => Input::Back,
        "r" | "restart" => Input::Restart,
        "q" | "quit" => Input::Quit,
        other => Input::Other(other),
    }
}

/// Run a quiz session until the user quits or input ends.
///
/// Returns the state the engine was left in.
pub fn run_session<R, W>(
    engine: &mut QuizEngine,
    chart: &SizeChart,
    mut input: R,
    output: &mut W,
) -> Result<QuizState>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        render(engine, chart, output)?;
        line.clear();
        let read = input.read_line(&mut line).context("read quiz input")?;
        if read == 0 {
            debug!(step = %engine.step(), "quiz input ended");
            break;
        }
        match classify(&line) {
            Input::Quit => break,
            Input::Restart => engine.restart(),
            Input::Back => {
                if let Err(error) = engine.go_back() {
                    writeln!(output, "! {error}")?;
                }
            }
            Input::Other(text) => {
                if let Err(message) = handle(engine, chart, text) {
                    writeln!(output, "! {message}")?;
                }
            }
        }
    }
    Ok(engine.state().clone())
}

fn handle(engine: &mut QuizEngine, chart: &SizeChart, text: &str) -> Result<(), String> {
    match engine.step() {
        Step::Hub => {
            let path = pick(text, Path::all(), Path::as_str)?;
            engine.choose_path(path).map_err(|e| e.to_string())?;
        }
        Step::SizeCalculator => {
            let (underband, overbust) = parse_measurement(text)?;
            let measurement =
                Measurement::new(underband, overbust, chart.unit).map_err(|e| e.to_string())?;
            engine
                .submit_measurement(measurement, chart)
                .map_err(|e| e.to_string())?;
        }
        Step::BandFit => {
            let fit = pick(text, BandFit::all(), BandFit::as_str)?;
            engine.answer_band_fit(fit).map_err(|e| e.to_string())?;
        }
        Step::SizeResult => match text {
            "c" | "continue" => engine.continue_to_style().map_err(|e| e.to_string())?,
            "s" | "start over" => {
                engine.start_over().map_err(|e| e.to_string())?;
            }
            _ => return Err(format!("unrecognised input: {text}")),
        },
        Step::ShapeSelect => {
            let shape = pick(text, Shape::all(), Shape::as_str)?;
            engine.select_shape(shape).map_err(|e| e.to_string())?;
        }
        Step::Results => match text {
            "s" | "start over" => {
                engine.start_over().map_err(|e| e.to_string())?;
            }
            _ => return Err(format!("unrecognised input: {text}")),
        },
        Step::Error => return Err("the quiz hit an error; enter r to restart".to_string()),
    }
    Ok(())
}

/// Resolve a menu entry by 1-based number or tag.
fn pick<T: Copy>(text: &str, items: &[T], tag: fn(&T) -> &'static str) -> Result<T, String> {
    if let Ok(number) = text.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| items.get(index))
            .copied()
            .ok_or_else(|| format!("choose a number between 1 and {}", items.len()));
    }
    items
        .iter()
        .find(|item| tag(*item).eq_ignore_ascii_case(text))
        .copied()
        .ok_or_else(|| format!("unrecognised choice: {text}"))
}

/// Parse `"<underband> <overbust>"`; a comma also separates the values.
fn parse_measurement(text: &str) -> Result<(f64, f64), String> {
    let values: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [underband, overbust] = values.as_slice() else {
        return Err("enter two numbers: underband overbust".to_string());
    };
    let parse = |value: &str, name: &str| {
        value
            .parse::<f64>()
            .map_err(|_| format!("{name} is not a number: {value}"))
    };
    Ok((parse(*underband, "underband")?, parse(*overbust, "overbust")?))
}

fn render<W: Write>(engine: &QuizEngine, chart: &SizeChart, out: &mut W) -> Result<()> {
    let step = engine.step();
    writeln!(out)?;
    writeln!(out, "== {} ==", step.title())?;
    match step {
        Step::Hub => {
            for (index, path) in Path::all().iter().enumerate() {
                writeln!(
                    out,
                    "  {}) {}: {}",
                    index + 1,
                    path.display_name(),
                    path.tagline()
                )?;
            }
        }
        Step::SizeCalculator => {
            writeln!(
                out,
                "  Enter underband and overbust in {}.",
                chart.unit.display_name()
            )?;
        }
        Step::BandFit => {
            for (index, fit) in BandFit::all().iter().enumerate() {
                writeln!(out, "  {}) {}", index + 1, fit.display_name())?;
            }
        }
        Step::SizeResult => {
            match engine.calculated_size() {
                Some(size) => writeln!(out, "  Your size: {size}")?,
                None => writeln!(out, "  We couldn't find a size for those measurements.")?,
            }
            if engine.available_targets().contains(&Step::ShapeSelect) {
                writeln!(out, "  c) Continue to Style Finder")?;
            }
            writeln!(out, "  s) Start over")?;
        }
        Step::ShapeSelect => {
            for (index, shape) in Shape::all().iter().enumerate() {
                writeln!(out, "  {}) {}", index + 1, shape.display_name())?;
            }
        }
        Step::Results => {
            if let Some(size) = engine.calculated_size() {
                writeln!(out, "  Size: {size}")?;
            }
            if let Some(shape) = engine.answers().shape() {
                writeln!(out, "  Shape: {}", shape.display_name())?;
            }
            if let Some(fit) = engine.answers().band_fit() {
                writeln!(out, "  Band fit: {}", fit.display_name())?;
            }
            writeln!(out, "  s) Start over")?;
        }
        Step::Error => {
            writeln!(out, "  Something went wrong. Enter r to restart.")?;
        }
    }
    out.flush()?;
    Ok(())
}
