//! Colorful console output for optimizer events.
//!
//! Provides a custom `tracing` layer that formats optimizer events with
//! colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (optimization start/end, locked players, infeasibility)
//! - **DEBUG**: Each new best squad found by the search

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_DIRECTIVE: &str = "squadforge_solver=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect. Does
/// nothing further if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(OptimizerConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 ____                        _ _____
/ ___|  __ _ _   _  __ _  __| |  ___|__  _ __ __ _  ___
\___ \ / _` | | | |/ _` |/ _` | |_ / _ \| '__/ _` |/ _ \
 ___) | (_| | |_| | (_| | (_| |  _| (_) | | | (_| |  __/
|____/ \__, |\__,_|\__,_|\__,_|_|  \___/|_|  \__, |\___|
          |_|                                |___/
"#;

    let version_line = format!(
        "                   v{} - Fantasy Rugby Squad Optimizer\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats optimizer events with colors.
pub struct OptimizerConsoleLayer;

impl<S: Subscriber> Layer<S> for OptimizerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("squadforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    score: Option<String>,
    reason: Option<String>,
    budget: Option<String>,
    cost: Option<String>,
    pool_size: Option<u64>,
    eligible: Option<u64>,
    locked: Option<u64>,
    count: Option<u64>,
    bench: Option<u64>,
    max_per_country: Option<u64>,
    nodes: Option<u64>,
    leaves: Option<u64>,
    pruned: Option<u64>,
    duration_ms: Option<u64>,
    include_bench: Option<bool>,
    optimal: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.record_str(field, format!("{:?}", value).trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "pool_size" => &mut self.pool_size,
            "eligible" => &mut self.eligible,
            "locked" => &mut self.locked,
            "count" => &mut self.count,
            "bench" => &mut self.bench,
            "max_per_country" => &mut self.max_per_country,
            "nodes" => &mut self.nodes,
            "leaves" => &mut self.leaves,
            "pruned" => &mut self.pruned,
            "duration_ms" => &mut self.duration_ms,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "include_bench" => self.include_bench = Some(value),
            "optimal" => self.optimal = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "score" => &mut self.score,
            "reason" => &mut self.reason,
            "budget" => &mut self.budget,
            "cost" => &mut self.cost,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "optimize_start" => format_optimize_start(v),
        "locked_placed" => format_locked_placed(v),
        "new_best" => format_new_best(v),
        "optimize_end" => format_optimize_end(v),
        "optimize_infeasible" => format_infeasible(v),
        "optimize_cancelled" => format_cancelled(v),
        _ => String::new(),
    }
}

fn format_count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_optimize_start(v: &EventVisitor) -> String {
    let bench = if v.include_bench.unwrap_or(true) {
        "with bench"
    } else {
        "starting XV only"
    };

    format!(
        "{} Optimizing │ {} players │ {} eligible │ {} locked │ budget {} │ max {} per country │ {}",
        "▶".bright_green().bold(),
        format_count(v.pool_size).bright_yellow(),
        format_count(v.eligible).bright_yellow(),
        format_count(v.locked).bright_yellow(),
        v.budget.as_deref().unwrap_or("?").bright_magenta(),
        format_count(v.max_per_country).bright_yellow(),
        bench.white(),
    )
}

fn format_locked_placed(v: &EventVisitor) -> String {
    format!(
        "{} Locked {} players │ {} on bench │ cost {}",
        "🔒".bright_blue(),
        format_count(v.count).white().bold(),
        format_count(v.bench).white(),
        v.cost.as_deref().unwrap_or("?").bright_magenta(),
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "{} New best │ {} │ {:>12} nodes │ {:>12} pruned",
        "★".bright_yellow(),
        v.score.as_deref().unwrap_or("N/A").bright_green(),
        format_count(v.nodes).white(),
        format_count(v.pruned).bright_black(),
    )
}

fn format_optimize_end(v: &EventVisitor) -> String {
    let status = if v.optimal.unwrap_or(false) {
        "OPTIMAL".bright_green().bold().to_string()
    } else {
        "LIMIT REACHED".yellow().bold().to_string()
    };

    format!(
        "{} Optimization complete │ {} │ {} │ {} nodes │ {} leaves │ {} pruned │ {}",
        "■".bright_cyan().bold(),
        v.score.as_deref().unwrap_or("N/A").bright_green(),
        status,
        format_count(v.nodes).white(),
        format_count(v.leaves).white(),
        format_count(v.pruned).bright_black(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_infeasible(v: &EventVisitor) -> String {
    format!(
        "{} {} │ {} │ {} nodes │ {}",
        "■".bright_red().bold(),
        "INFEASIBLE".bright_red().bold(),
        v.reason.as_deref().unwrap_or("unknown reason"),
        format_count(v.nodes).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_cancelled(v: &EventVisitor) -> String {
    format!(
        "{} Cancelled │ {} nodes │ {}",
        "✗".bright_red(),
        format_count(v.nodes).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
