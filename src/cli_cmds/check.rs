use anyhow::{Context, Result};
use serde::Serialize;
use vbc::config::Config;
use vbc::video::{self, ColorDepth, DisplaySignal, LinkFamily, LinkRow, Speed};

use crate::cli::CheckArgs;
use crate::ui::table::{Cell, Table};
use crate::ui::theme::Theme;

const LINK_HEADERS: [&str; 7] = ["VERSION", "MODE", "MAX", "EFFECTIVE", "USAGE", "HDR", "STATUS"];

#[derive(Serialize)]
struct CheckReport<'a> {
    signal: &'a DisplaySignal,
    required_bandwidth: Speed,
    dsc_bandwidth: Speed,
    displayport: &'a [LinkRow],
    hdmi: &'a [LinkRow],
}

pub fn cmd_check(args: &CheckArgs, config: &Config, theme: &Theme) -> Result<()> {
    let signal = resolve_signal(args, config)?;
    tracing::info!(%signal, bandwidth = %signal.required_bandwidth(), "evaluating signal");

    let dp_pin = args
        .dp
        .as_deref()
        .map(|v| LinkFamily::DisplayPort.version(v))
        .transpose()?;
    let hdmi_pin = args
        .hdmi
        .as_deref()
        .map(|v| LinkFamily::Hdmi.version(v))
        .transpose()?;

    let dp_rows = video::family_table(&signal, LinkFamily::DisplayPort, dp_pin)?;
    let hdmi_rows = video::family_table(&signal, LinkFamily::Hdmi, hdmi_pin)?;

    if args.json || config.output.json {
        let report = CheckReport {
            signal: &signal,
            required_bandwidth: signal.required_bandwidth(),
            dsc_bandwidth: signal.dsc_target_bandwidth(),
            displayport: &dp_rows,
            hdmi: &hdmi_rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", theme.paint("Signal", theme.accent));
    println!("  {}", signal);
    println!(
        "  {} {}",
        theme.paint("Bandwidth:", theme.muted),
        signal.required_bandwidth()
    );
    println!(
        "  {}       {}",
        theme.paint("DSC:", theme.muted),
        signal.dsc_target_bandwidth()
    );

    for (family, rows) in [
        (LinkFamily::DisplayPort, &dp_rows),
        (LinkFamily::Hdmi, &hdmi_rows),
    ] {
        println!();
        println!("{}", theme.paint(family.label(), theme.accent));
        print!("{}", link_table(rows, theme).render(theme));
    }

    Ok(())
}

/// Preset (or config defaults) overridden by whatever flags were given.
fn resolve_signal(args: &CheckArgs, config: &Config) -> Result<DisplaySignal> {
    let base = match &args.preset {
        Some(name) => {
            let presets = config.all_presets()?;
            video::find_preset(&presets, name)?.signal
        }
        None => config
            .defaults
            .to_signal()
            .context("Invalid [defaults] section in config")?,
    };

    let color_depth = match &args.depth {
        Some(depth) => depth.parse::<ColorDepth>()?,
        None => base.color_depth(),
    };
    let timing = match &args.timing {
        Some(name) => video::timing_by_name(name)?,
        None => base.timing(),
    };

    Ok(video::compute_signal(
        args.width.unwrap_or(base.width()),
        args.height.unwrap_or(base.height()),
        args.refresh.unwrap_or(base.refresh_rate()),
        color_depth,
        timing,
    )?)
}

fn link_table(rows: &[LinkRow], theme: &Theme) -> Table {
    let mut table = Table::new(LINK_HEADERS);
    for row in rows {
        let status_color = theme.verdict_color(row.feasibility.verdict);
        table.push(vec![
            Cell::new(row.version),
            Cell::new(row.mode),
            Cell::new(row.max_bandwidth.to_string()),
            Cell::new(row.effective_bandwidth.to_string()),
            Cell::new(row.usage_label()),
            Cell::new(row.hdr_label()),
            Cell::colored(row.feasibility.verdict.symbol(), status_color),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_signal_uses_config_defaults() {
        let signal = resolve_signal(&CheckArgs::default(), &Config::default()).unwrap();
        assert_eq!(signal.width(), 3840);
        assert_eq!(signal.refresh_rate(), 144);
    }

    #[test]
    fn test_resolve_signal_flags_override_preset() {
        let args = CheckArgs {
            preset: Some("1080p Gaming".into()),
            refresh: Some(120),
            depth: Some("8".into()),
            ..CheckArgs::default()
        };
        let signal = resolve_signal(&args, &Config::default()).unwrap();
        assert_eq!((signal.width(), signal.height()), (1920, 1080));
        assert_eq!(signal.refresh_rate(), 120);
        assert_eq!(signal.color_depth(), ColorDepth::Bit8);
        assert_eq!(signal.required_bandwidth().bits(), 6_589_440_000);
    }

    #[test]
    fn test_resolve_signal_rejects_zero() {
        let args = CheckArgs {
            width: Some(0),
            ..CheckArgs::default()
        };
        let err = resolve_signal(&args, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("invalid numeric input"));
    }

    #[test]
    fn test_link_table_has_row_per_version() {
        let signal = resolve_signal(&CheckArgs::default(), &Config::default()).unwrap();
        let rows = video::overview(&signal, LinkFamily::DisplayPort).unwrap();
        let rendered = link_table(&rows, &Theme::plain()).render(&Theme::plain());
        assert_eq!(rendered.lines().count(), 1 + rows.len());
        assert!(rendered.starts_with("VERSION"));
        assert!(rendered.contains("UHBR13.5"));
    }
}
