use std::env;
use std::fs;
use std::path::PathBuf;

use foundation::Measure;
use geodata::{MapItem, MapPage, to_feature_collection};
use palette::{aqi_swatch, co2_swatch, pm25_swatch};
use quality::{AqiLevel, classify_co2, classify_pm25, pm25_to_aqi};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "geojson" => cmd_geojson(args),
        "classify" => cmd_classify(args),
        "aqi" => cmd_aqi(args),
        _ => Err(usage()),
    }
}

fn cmd_geojson(args: Vec<String>) -> Result<(), String> {
    // airmap geojson <input.json> [--out FILE]
    if args.is_empty() {
        return Err(usage());
    }

    let input = PathBuf::from(&args[0]);
    let mut out: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                i += 1;
                if i >= args.len() {
                    return Err("--out requires a value".to_string());
                }
                out = Some(PathBuf::from(&args[i]));
            }
            s => return Err(format!("unknown arg: {s}\n\n{}", usage())),
        }
        i += 1;
    }

    let raw = fs::read_to_string(&input).map_err(|e| format!("read {input:?}: {e}"))?;
    let items = parse_items(&raw)?;
    info!("loaded {} map records from {:?}", items.len(), input);

    let fc = to_feature_collection(&items);
    let json = serde_json::to_string_pretty(&fc).map_err(|e| e.to_string())?;

    match out {
        Some(path) => {
            fs::write(&path, json).map_err(|e| format!("write {path:?}: {e}"))?;
            info!("wrote {} features to {:?}", fc.features.len(), path);
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Accepts either a bare record array or the paged fetch envelope.
fn parse_items(raw: &str) -> Result<Vec<MapItem>, String> {
    if let Ok(items) = serde_json::from_str::<Vec<MapItem>>(raw) {
        return Ok(items);
    }
    serde_json::from_str::<MapPage>(raw)
        .map(|page| page.data)
        .map_err(|e| format!("input is neither a record array nor a page envelope: {e}"))
}

fn cmd_classify(args: Vec<String>) -> Result<(), String> {
    // airmap classify <pm25|co2> <value...>
    if args.len() < 2 {
        return Err(usage());
    }

    let measure = Measure::parse(&args[0])
        .ok_or_else(|| format!("unknown measure: {}\n\n{}", args[0], usage()))?;

    for raw in &args[1..] {
        let value: f64 = raw
            .parse()
            .map_err(|_| format!("not a number: {raw}"))?;
        let (key, light, dark) = match measure {
            Measure::Pm25 => (
                classify_pm25(value),
                pm25_swatch(value, false),
                pm25_swatch(value, true),
            ),
            Measure::Co2 => (
                classify_co2(value),
                co2_swatch(value, false),
                co2_swatch(value, true),
            ),
        };
        println!(
            "{value}\t{key}\tlight {} {}\tdark {} {}",
            light.background, light.text_class, dark.background, dark.text_class
        );
    }
    Ok(())
}

fn cmd_aqi(args: Vec<String>) -> Result<(), String> {
    // airmap aqi <pm25...>
    if args.is_empty() {
        return Err(usage());
    }

    for raw in &args {
        let value: f64 = raw
            .parse()
            .map_err(|_| format!("not a number: {raw}"))?;
        let aqi = pm25_to_aqi(Some(value)).expect("Some in, Some out");
        let level = AqiLevel::from_aqi(aqi);
        let swatch = aqi_swatch(aqi);
        println!("{value}\t{aqi}\t{}\t{}", level.as_str(), swatch.background);
    }
    Ok(())
}

fn usage() -> String {
    let exe = env::args().next().unwrap_or_else(|| "airmap".to_string());
    format!(
        "Usage:\n  {exe} geojson <input.json> [--out FILE]\n  {exe} classify <pm25|co2> <value...>\n  {exe} aqi <pm25-value...>\n\nNotes:\n- `geojson` accepts a bare record array or a paged {{data, page, pagesize, total}} envelope.\n- `classify` prints the category key plus light/dark backgrounds and text class.\n- `aqi` converts PM2.5 (μg/m³) to the 0-500 US AQI index and its level color.\n"
    )
}
