use owo_colors::{OwoColorize, Stream, Style};

use crate::types::{Benchmark, Measurement};

/// The driver's result line, e.g. `Raw time: 0.104000`.
pub fn format_raw_time(user_time_secs: f64) -> String {
    format!("Raw time: {user_time_secs:.6}")
}

pub fn format_json(measurement: &Measurement) -> String {
    serde_json::to_string_pretty(measurement).unwrap_or_else(|_| "{}".to_string())
}

fn style_executable() -> Style {
    Style::new().cyan().bold()
}

/// One line per benchmark: executable name padded to a column, then label.
pub fn format_list(benchmarks: &[Benchmark]) -> String {
    let width = benchmarks
        .iter()
        .map(|b| b.executable.len())
        .max()
        .unwrap_or(0);
    let exe_style = style_executable();

    let mut out = String::new();
    for benchmark in benchmarks {
        let exe_padded = format!("{:<width$}", benchmark.executable, width = width);
        let exe_colored = exe_padded
            .if_supports_color(Stream::Stdout, |s| s.style(exe_style))
            .to_string();
        let label_colored = benchmark
            .label
            .if_supports_color(Stream::Stdout, |s| s.dimmed())
            .to_string();
        out.push_str(&format!("{exe_colored}  {label_colored}\n"));
    }
    out
}
