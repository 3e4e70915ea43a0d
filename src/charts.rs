//! Comparison charts for aggregated player stats.
//!
//! Rendering sits on top of the aggregation engine: it receives the finished
//! summaries and hands back one image per metric. A failed render never
//! fails the request that asked for it.

use std::{
    collections::BTreeMap,
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use crate::{error::StatsError, pubg::types::PlayerSummary, Result};


/// Metrics charted for every comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMetric {
    Kd,
    Adr,
    Wins,
    Kpr,
    Kills,
}

impl ChartMetric {
    pub const ALL: [ChartMetric; 5] = [
        ChartMetric::Kd,
        ChartMetric::Adr,
        ChartMetric::Wins,
        ChartMetric::Kpr,
        ChartMetric::Kills,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ChartMetric::Kd => "kd",
            ChartMetric::Adr => "adr",
            ChartMetric::Wins => "wins",
            ChartMetric::Kpr => "kpr",
            ChartMetric::Kills => "kills",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartMetric::Kd => "K/D Ratio Comparison",
            ChartMetric::Adr => "ADR Comparison",
            ChartMetric::Wins => "Wins Comparison",
            ChartMetric::Kpr => "Kills per Round Comparison",
            ChartMetric::Kills => "Kills Comparison",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            ChartMetric::Kd => "K/D Ratio",
            ChartMetric::Adr => "Average Damage per Round (ADR)",
            ChartMetric::Wins => "Wins",
            ChartMetric::Kpr => "Kills per Round (KPR)",
            ChartMetric::Kills => "Kills",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            ChartMetric::Kd => "#87CEEB",
            ChartMetric::Adr => "#90EE90",
            ChartMetric::Wins => "#FFD700",
            ChartMetric::Kpr => "#F08080",
            ChartMetric::Kills => "#FF9999",
        }
    }

    pub fn value(&self, player: &PlayerSummary) -> f64 {
        let s = &player.summary_stats;
        match self {
            ChartMetric::Kd => s.kd,
            ChartMetric::Adr => s.adr,
            ChartMetric::Wins => s.wins as f64,
            ChartMetric::Kpr => s.kpr,
            ChartMetric::Kills => s.kills as f64,
        }
    }
}

/// Turns summaries into image bytes keyed by metric name.
pub trait ChartRenderer: Send + Sync {
    /// File extension of the produced images.
    fn extension(&self) -> &'static str;

    fn render(&self, players: &[PlayerSummary]) -> Result<BTreeMap<String, Vec<u8>>>;
}

/// Bar charts as standalone SVG documents.
#[derive(Debug, Clone)]
pub struct SvgChartRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        Self {
            width: 400,
            height: 240,
        }
    }
}

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 28.0;
const MARGIN_BOTTOM: f64 = 44.0;

impl SvgChartRenderer {
    pub fn render_metric(&self, metric: ChartMetric, players: &[PlayerSummary]) -> String {
        let width = self.width as f64;
        let height = self.height as f64;
        let plot_w = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_h = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let baseline = MARGIN_TOP + plot_h;

        let values: Vec<f64> = players.iter().map(|p| metric.value(p)).collect();
        let max = values.iter().cloned().fold(0.0_f64, f64::max);
        let scale = if max > 0.0 { plot_h / max } else { 0.0 };
        let slot = plot_w / players.len().max(1) as f64;
        let bar_w = slot * 0.7;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(svg, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="18" font-size="13" text-anchor="middle" font-family="sans-serif">{}</text>"#,
            width / 2.0,
            metric.title()
        );
        let _ = writeln!(
            svg,
            r#"<text x="12" y="{:.1}" font-size="10" text-anchor="middle" font-family="sans-serif" transform="rotate(-90 12 {:.1})">{}</text>"#,
            MARGIN_TOP + plot_h / 2.0,
            MARGIN_TOP + plot_h / 2.0,
            metric.axis_label()
        );
        let _ = writeln!(
            svg,
            r##"<line x1="{MARGIN_LEFT}" y1="{baseline:.1}" x2="{:.1}" y2="{baseline:.1}" stroke="#333333"/>"##,
            MARGIN_LEFT + plot_w
        );

        for (i, (player, &value)) in players.iter().zip(&values).enumerate() {
            let bar_h = value.max(0.0) * scale;
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
            let center = x + bar_w / 2.0;
            let _ = writeln!(
                svg,
                r#"<rect x="{x:.1}" y="{:.1}" width="{bar_w:.1}" height="{bar_h:.1}" fill="{}"><title>{}: {value:.2}</title></rect>"#,
                baseline - bar_h,
                metric.color(),
                escape_xml(&player.name)
            );
            let _ = writeln!(
                svg,
                r#"<text x="{center:.1}" y="{:.1}" font-size="9" text-anchor="middle" font-family="sans-serif">{value:.2}</text>"#,
                (baseline - bar_h - 3.0).max(MARGIN_TOP - 2.0)
            );
            let _ = writeln!(
                svg,
                r#"<text x="{center:.1}" y="{:.1}" font-size="10" text-anchor="end" font-family="sans-serif" transform="rotate(-45 {center:.1} {:.1})">{}</text>"#,
                baseline + 14.0,
                baseline + 14.0,
                escape_xml(&player.name)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, players: &[PlayerSummary]) -> Result<BTreeMap<String, Vec<u8>>> {
        if players.is_empty() {
            return Err(StatsError::Chart {
                message: "no players to chart".to_string(),
            });
        }

        Ok(ChartMetric::ALL
            .iter()
            .map(|&metric| {
                (
                    metric.key().to_string(),
                    self.render_metric(metric, players).into_bytes(),
                )
            })
            .collect())
    }
}

/// Path: ~/.cache/pubg-stats/charts
pub fn default_charts_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("pubg-stats").join("charts")
}

/// Write each chart as `{metric}_chart.{extension}` under `dir`.
pub fn write_charts(
    dir: &Path,
    extension: &str,
    charts: &BTreeMap<String, Vec<u8>>,
) -> Result<BTreeMap<String, PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = BTreeMap::new();
    for (metric, bytes) in charts {
        let path = dir.join(format!("{metric}_chart.{extension}"));
        fs::write(&path, bytes)?;
        written.insert(metric.clone(), path);
    }
    Ok(written)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
