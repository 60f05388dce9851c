//! Headless walkthrough of the spinner widget.
//!
//! Run with `RUST_LOG=debug` to see value changes and binding traffic, and
//! optionally pass a JSON file of spinner configs (see `configs/`).

use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use spindle_core::{FloatBinding, SharedFloat, SpinnerConfig, flush_notifications};
use spindle_ui::*;

#[derive(Deserialize)]
struct Entry {
    label: String,
    #[serde(flatten)]
    config: SpinnerConfig,
    #[serde(default)]
    bound: Option<f64>,
}

fn render(view: &View, out: &mut String) {
    match &view.kind {
        ViewKind::Spinner { enabled, invalid, .. } => {
            out.push_str(if *invalid {
                "!"
            } else if *enabled {
                ""
            } else {
                "~"
            });
        }
        ViewKind::Text { text, width_hint, .. } => {
            out.push_str(&format!("[{text:>w$}]", w = width_hint.chars().count()));
        }
        ViewKind::Button { icon, enabled, .. } => {
            let glyph = match icon {
                Icon::ArrowDropUp => '^',
                Icon::ArrowDropDown => 'v',
            };
            out.push(if *enabled { glyph } else { '.' });
        }
        ViewKind::Column => {}
    }
    for child in &view.children {
        render(child, out);
    }
}

fn show(label: &str, spinner: &mut Spinner) {
    spinner.sync();
    let mut line = String::new();
    render(&spinner.view(), &mut line);
    println!("{label:<12} {line}");
}

fn scripted() -> anyhow::Result<()> {
    let mut s1 = Spinner::new(
        0.0,
        100.0,
        1.0,
        0,
        Some(Arc::new(|v| log::info!("s1 changed to {v}"))),
    )
    .with_id(1);

    let shared = SharedFloat::new(0.0);
    let mut s2 = Spinner::with_data(-2.0, 16.0, 3.0, 0, Arc::new(shared.clone())).with_id(2);

    let mut s3 = Spinner::uninitialized(0).with_id(3);
    let mut s4 = Spinner::new(-1.0, 400.0, 10.3, 1, None).with_id(4);

    let shared5 = SharedFloat::new(0.0);
    let mut s5 = Spinner::with_data(0.0, 16.0, 3.215, 2, Arc::new(shared5.clone())).with_id(5);

    flush_notifications()?;
    println!("-- initial");
    show("s1", &mut s1);
    show("s2 (bound)", &mut s2);
    show("s3", &mut s3);
    show("s4", &mut s4);
    show("s5 (bound)", &mut s5);

    s3.set_bounds(1.0, 10.0, 1.0)?;
    s3.enable();
    s3.up_tapped();

    s1.disable();
    s1.set_value(50.0);
    s1.enable();
    s1.set_value(5.0);
    s1.handle_event(&InputEvent::Tap(SpinnerPart::Display));
    s1.handle_event(&InputEvent::Key(
        KeyEvent::new(Key::ArrowUp).with_modifiers(Modifiers::CTRL),
    ));
    s1.handle_event(&InputEvent::Key(KeyEvent::new(Key::PageDown)));

    shared.set(12.0)?;
    for _ in 0..3 {
        s4.up_tapped();
        s5.up_tapped();
    }
    flush_notifications()?;

    println!("-- after input");
    show("s1", &mut s1);
    show("s2 (bound)", &mut s2);
    show("s3", &mut s3);
    show("s4", &mut s4);
    show("s5 (bound)", &mut s5);
    println!("bound values: s2 = {}, s5 = {}", shared.get()?, shared5.get()?);

    if let Err(e) = s1.commit_text("250") {
        println!("s1 rejected \"250\": {e}");
    }
    Ok(())
}

fn from_file(path: &str) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let entries: Vec<Entry> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;

    let mut sources = Vec::new();
    let mut spinners = Vec::new();
    for (i, entry) in entries.into_iter().enumerate() {
        if let Err(e) = entry.config.validate() {
            log::warn!("{}: {e}", entry.label);
        }
        let mut spinner = Spinner::from_config(&entry.config).with_id(i as u64);
        if let Some(v) = entry.bound {
            let source = SharedFloat::new(v);
            spinner.bind(Arc::new(source.clone()));
            sources.push(source);
        }
        spinner.up_tapped();
        spinners.push((entry.label, spinner));
    }
    flush_notifications()?;
    for (label, spinner) in &mut spinners {
        show(label, spinner);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    match std::env::args().nth(1) {
        Some(path) => from_file(&path),
        None => scripted(),
    }
}
