use anyhow::{Context, Result};
use marketlens::payload::SectionView;
use marketlens::persistence::SettingsStore;
use marketlens::render::{KvRow, RenderedTable};
use marketlens::{Config, render_payload};
use tracing::info;

fn print_kv(rows: &[KvRow]) {
    let width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    for row in rows {
        println!("  {:<width$}  {}", row.label, row.cell.text);
    }
}

fn print_table(table: &RenderedTable) {
    let label_width = table
        .rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);
    let mut col_widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.cells.iter().enumerate() {
            let w = cell.text.chars().count();
            if i < col_widths.len() {
                col_widths[i] = col_widths[i].max(w);
            } else {
                col_widths.push(w);
            }
        }
    }

    if !table.columns.is_empty() {
        print!("  {:<label_width$}", "");
        for (i, column) in table.columns.iter().enumerate() {
            print!("  {:>width$}", column, width = col_widths[i]);
        }
        println!();
    }
    for row in &table.rows {
        print!("  {:<label_width$}", row.label);
        for (i, cell) in row.cells.iter().enumerate() {
            let width = col_widths.get(i).copied().unwrap_or(0);
            print!("  {:>width$}", cell.text);
        }
        println!();
    }
}

fn print_sections(sections: &[SectionView]) {
    for section in sections {
        match section {
            SectionView::Kv { title, rows } => {
                println!("{title}");
                print_kv(rows);
            }
            SectionView::Table { title, table } => {
                println!("{title}");
                print_table(table);
            }
        }
        println!();
    }
}

fn main() -> Result<()> {
    // Usage: marketlens [--config <path>] <payload.json>
    let mut config_path: Option<String> = None;
    let mut payload_path: Option<String> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = args.next();
        } else {
            payload_path = Some(arg);
        }
    }
    let payload_path = payload_path.context("usage: marketlens [--config <path>] <payload.json>")?;

    let config = match &config_path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => Config::load().context("Failed to load configuration")?,
    };
    config.validate().context("Invalid configuration")?;
    marketlens::logging::init_logging(&config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Marketlens {} starting up", env!("APP_VERSION"));

    let payload = marketlens::payload::load_payload(&payload_path)
        .map_err(|e| anyhow::anyhow!("Failed to load payload from {payload_path}: {e}"))?;

    let sections = render_payload(&payload);
    print_sections(&sections);

    // Remember the ticker so the dashboard search box can offer it again
    let mut store =
        SettingsStore::open_file(&config.settings.file, config.settings.max_search_history);
    if let Err(e) = store.load() {
        info!("Could not load UI settings: {}", e);
    }
    if let Some(ticker) = payload
        .get("metadata")
        .and_then(|m| m.get("ticker"))
        .and_then(|t| t.as_str())
    {
        store.record_search(ticker);
        if let Err(e) = store.save() {
            info!("Could not save UI settings: {}", e);
        }
    }

    Ok(())
}
