use anyhow::Result;
use vbc::config::Config;
use vbc::video::{self, LinkFamily};

use crate::ui::table::{Cell, Table};
use crate::ui::theme::Theme;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub fn cmd_presets(config: &Config, theme: &Theme) -> Result<()> {
    let presets = config.all_presets()?;
    let mut table = Table::new(["NAME", "SIGNAL", "COLOR DEPTH", "TIMING", "BANDWIDTH"]);
    for preset in &presets {
        let s = &preset.signal;
        table.push(vec![
            Cell::colored(preset.name.as_str(), theme.accent),
            Cell::new(format!("{}x{}@{}Hz", s.width(), s.height(), s.refresh_rate())),
            Cell::new(s.color_depth().to_string()),
            Cell::new(s.timing().name()),
            Cell::new(s.required_bandwidth().to_string()),
        ]);
    }
    print!("{}", table.render(theme));
    Ok(())
}

pub fn cmd_links(theme: &Theme) {
    for (family, versions) in [
        (LinkFamily::DisplayPort, video::displayport_versions()),
        (LinkFamily::Hdmi, video::hdmi_versions()),
    ] {
        println!("{}", theme.paint(family.label(), theme.accent));
        let mut table = Table::new(["VERSION", "DSC", "HDR", "MODE", "MAX", "EFFECTIVE"]);
        for link in versions {
            for mode in link.modes {
                table.push(vec![
                    Cell::new(link.version),
                    Cell::new(yes_no(link.dsc)),
                    Cell::new(yes_no(link.hdr)),
                    Cell::new(mode.name()),
                    Cell::new(mode.bandwidth().to_string()),
                    Cell::new(mode.effective_bandwidth().to_string()),
                ]);
            }
        }
        print!("{}", table.render(theme));
        println!();
    }
}

pub fn cmd_timings(theme: &Theme) {
    let mut table = Table::new(["NAME"]);
    for timing in video::timings() {
        table.push(vec![Cell::new(timing.name())]);
    }
    print!("{}", table.render(theme));
}

pub fn cmd_depths(theme: &Theme) {
    let mut table = Table::new(["NAME", "DESCRIPTION"]);
    for depth in video::color_depths() {
        table.push(vec![Cell::new(depth.title()), Cell::new(depth.to_string())]);
    }
    print!("{}", table.render(theme));
}
