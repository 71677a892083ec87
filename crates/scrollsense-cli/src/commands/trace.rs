use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tokio::time::Instant;

use scrollsense_core::{
    AppConfig, Error, HeadlessHost, HeaderAttributes, HeaderBehavior, HeaderConfig,
    ScrollHeaderController, ScrollState,
};

#[derive(Args, Debug)]
pub struct TraceArgs {
    /// Comma-separated scroll offsets, e.g. 0,50,120,80,2
    #[arg(short, long)]
    offsets: String,
    #[arg(short, long)]
    behavior: Option<HeaderBehavior>,
    #[arg(long)]
    hide_threshold: Option<f64>,
    #[arg(long)]
    show_threshold: Option<f64>,
    /// Sticky transition delay in milliseconds
    #[arg(long)]
    transition_ms: Option<u64>,
    /// Rendered header height
    #[arg(long, default_value_t = 64.0)]
    extent: f64,
    /// Simulated time between offsets in milliseconds
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,
    /// Emit one JSON object per line
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct TraceRow {
    tick: usize,
    offset: f64,
    state: ScrollState,
    /// `(is_sticky, is_hidden)` if the change listener fired on this tick
    notified: Option<(bool, bool)>,
    hints: String,
}

#[derive(Debug, Serialize)]
struct AttributesLine<'a> {
    attributes: &'a HeaderAttributes,
    style: String,
}

/// Header line printed once before the rows
fn attributes_line(attrs: &HeaderAttributes, json: bool) -> Result<String> {
    if json {
        let line = AttributesLine {
            attributes: attrs,
            style: attrs.style_string(),
        };
        return Ok(serde_json::to_string(&line)?);
    }
    Ok(format!(
        "class=\"{}\" style=\"{}\" {}",
        attrs.class_name,
        attrs.style_string(),
        attrs.data_attribute
    ))
}

pub fn parse_offsets(raw: &str) -> scrollsense_core::Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| Error::InvalidOffset(s.to_string()))
        })
        .collect()
}

fn header_config(config: &AppConfig, args: &TraceArgs) -> HeaderConfig {
    let mut header = config.header.clone();
    if let Some(behavior) = args.behavior {
        header.behavior = behavior;
    }
    if args.hide_threshold.is_some() {
        header.hide_threshold = args.hide_threshold;
    }
    if let Some(show) = args.show_threshold {
        header.show_threshold = show;
    }
    if let Some(ms) = args.transition_ms {
        header.transition_duration_ms = ms;
    }
    header
}

fn trace(header: HeaderConfig, extent: f64, offsets: &[f64], interval: Duration) -> Vec<TraceRow> {
    let mut controller = ScrollHeaderController::new(HeadlessHost::new(extent));
    let notified = Rc::new(Cell::new(None));
    let sink = notified.clone();
    controller.on_scroll_state_change(move |sticky, hidden| sink.set(Some((sticky, hidden))));
    controller.initialize(header);
    notified.set(None);

    let start = Instant::now();
    offsets
        .iter()
        .enumerate()
        .map(|(tick, &offset)| {
            let now = start + interval * tick as u32;
            controller.tick_at(now);
            controller.host_mut().set_offset(offset);
            controller.on_scroll_offset_changed_at(offset, now);
            TraceRow {
                tick,
                offset,
                state: controller.state(),
                notified: notified.take(),
                hints: controller.host().hint_classes(),
            }
        })
        .collect()
}

pub fn run(config: &AppConfig, args: TraceArgs) -> Result<()> {
    let offsets = parse_offsets(&args.offsets)?;
    let header = header_config(config, &args);
    tracing::debug!(?header, count = offsets.len(), "Replaying offsets");

    let attrs = HeaderAttributes::from_config(&header);
    println!("{}", attributes_line(&attrs, args.json)?);

    let rows = trace(
        header,
        args.extent,
        &offsets,
        Duration::from_millis(args.interval_ms),
    );

    for row in rows {
        if args.json {
            println!("{}", serde_json::to_string(&row)?);
        } else {
            let s = row.state;
            println!(
                "{:>4}  offset={:<8} sticky={:<5} hidden={:<5} transitioning={:<5} {}",
                row.tick,
                row.offset,
                s.is_sticky,
                s.is_hidden,
                s.is_transitioning,
                row.notified
                    .map(|(sticky, hidden)| format!("-> change({}, {})", sticky, hidden))
                    .unwrap_or_default(),
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offsets() {
        assert_eq!(parse_offsets("0, 50,120.5,,").unwrap(), vec![0.0, 50.0, 120.5]);
        assert!(matches!(parse_offsets("10,abc"), Err(Error::InvalidOffset(s)) if s == "abc"));
        assert!(parse_offsets("NaN").is_err());
    }

    #[test]
    fn test_trace_reports_changes() {
        let header = HeaderConfig {
            hide_threshold: Some(100.0),
            show_threshold: 5.0,
            ..Default::default()
        };
        let rows = trace(
            header,
            64.0,
            &[0.0, 50.0, 120.0, 80.0, 2.0],
            Duration::from_millis(100),
        );

        let notified: Vec<_> = rows.iter().map(|r| r.notified).collect();
        assert_eq!(
            notified,
            vec![None, None, Some((true, true)), Some((true, false)), Some((false, false))]
        );
        // the 300ms transition scheduled at 120 is still pending at 80
        assert!(!rows[3].state.is_transitioning);
        assert!(rows[2].hints.contains("scroll-sense-header--sticky"));
    }

    #[test]
    fn test_trace_transition_settles() {
        let header = HeaderConfig {
            hide_threshold: Some(100.0),
            transition_duration_ms: 150,
            ..Default::default()
        };
        let rows = trace(
            header,
            64.0,
            &[120.0, 130.0, 140.0],
            Duration::from_millis(100),
        );
        assert!(!rows[1].state.is_transitioning);
        assert!(rows[2].state.is_transitioning);
        assert!(rows[2].hints.contains("scroll-sense-header--sticky-transition"));
    }

    #[test]
    fn test_attributes_line() {
        let attrs = HeaderAttributes::from_config(&HeaderConfig::default());
        assert_eq!(
            attributes_line(&attrs, false).unwrap(),
            "class=\"scroll-sense-header scroll-sense-header--box-shadow-light\" \
             style=\"z-index: 1000; background-color: transparent; --transition-duration: 300ms\" \
             data-scroll-sense-header"
        );

        let json: serde_json::Value =
            serde_json::from_str(&attributes_line(&attrs, true).unwrap()).unwrap();
        assert_eq!(
            json["attributes"]["class_name"],
            "scroll-sense-header scroll-sense-header--box-shadow-light"
        );
        assert_eq!(json["attributes"]["data_attribute"], "data-scroll-sense-header");
        assert_eq!(
            json["style"],
            "z-index: 1000; background-color: transparent; --transition-duration: 300ms"
        );
    }

    #[test]
    fn test_attributes_follow_trace_overrides() {
        let config = AppConfig::default();
        let args = TraceArgs {
            offsets: "0".to_string(),
            behavior: None,
            hide_threshold: None,
            show_threshold: None,
            transition_ms: Some(0),
            extent: 64.0,
            interval_ms: 100,
            json: false,
        };
        let attrs = HeaderAttributes::from_config(&header_config(&config, &args));
        let line = attributes_line(&attrs, false).unwrap();
        assert!(!line.contains("--transition-duration"));
        assert!(line.ends_with("data-scroll-sense-header"));
    }
}
