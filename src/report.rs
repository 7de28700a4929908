use civil_offset::{Instant, OffsetDetails, Options};
use chrono::SecondsFormat;

mod ansi {
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    /// Wraps text in SGR escapes when color output is on.
    pub struct Palette(pub bool);

    impl Palette {
        pub fn paint(&self, s: impl AsRef<str>, sgr: &str) -> String {
            if self.0 { format!("{sgr}{}\x1b[0m", s.as_ref()) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

pub fn print_run(options: &Options, runs: &[OffsetDetails], verbose: bool, color: bool) {
    let palette = ansi::Palette(color);
    println!("\n{}", palette.bold(palette.paint(format!("⏱  Zone: {}", options.zone.iana_name().unwrap_or("unnamed")), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Offsets ━━━", ansi::GRAY));
    for (idx, details) in runs.iter().enumerate() {
        print_offset(idx, details, verbose, &palette);
    }

    let failed = runs.iter().filter(|d| d.offset.is_none()).count();
    if failed > 0 {
        println!("\n{}", palette.paint(format!("{failed} instant(s) without an offset"), ansi::YELLOW));
        println!("{}", palette.dim("  Tip: Set RUST_LOG=debug to see why each one was rejected"));
    }
    println!();
}

fn print_offset(idx: usize, details: &OffsetDetails, verbose: bool, palette: &ansi::Palette) {
    let value = match (&details.offset, &details.rejection) {
        (Some(offset), _) => {
            palette.bold(palette.paint(format!("{:+} min  ({})", offset.minutes(), offset), ansi::GREEN))
        }
        (None, Some(reason)) => palette.paint(format!("unknown: {reason}"), ansi::YELLOW),
        (None, None) => palette.paint("unknown", ansi::YELLOW),
    };

    println!(
        "  {} {} {} {}",
        palette.paint(format!("[{}]", idx), ansi::GRAY),
        palette.paint(fmt_instant(details.instant), ansi::BLUE),
        palette.dim("│"),
        value,
    );

    if verbose {
        println!(
            "      {} {}  {} {}  {} {}",
            palette.dim("text:"),
            palette.paint(details.rendered.as_deref().unwrap_or("-"), ansi::CYAN),
            palette.dim("│ designator:"),
            palette.paint(details.designator.as_deref().unwrap_or("-"), ansi::CYAN),
            palette.dim("│"),
            palette.dim(format!("{:?}", details.elapsed)),
        );
    }
}

fn fmt_instant(instant: Instant) -> String {
    match instant.to_utc() {
        Some(at) => at.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => format!("{} ms", instant.millis()),
    }
}
