use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use terrain_editor::{EditorConfig, EditorError, MapEngine, MapSeed, MarkerSeeding, TerrainCategory};

#[derive(Parser, Debug)]
#[command(name = "terrain_editor")]
#[command(about = "Generate and edit seeded terrain maps with dungeon door markers")]
struct Args {
    /// JSON config file (unset fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid rows
    #[arg(short = 'R', long)]
    rows: Option<usize>,

    /// Grid columns
    #[arg(short = 'C', long)]
    cols: Option<usize>,

    /// Map seed, 0-999999 (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Number of dungeon doors to place
    #[arg(short, long)]
    markers: Option<usize>,

    /// Derive door placement from the map seed instead of fresh entropy
    #[arg(long)]
    reproducible_markers: bool,

    /// Terrain selected for painting
    #[arg(short, long)]
    terrain: Option<TerrainCategory>,

    /// Paint a cell after generation: ROW,COL[,TERRAIN] (repeatable)
    #[arg(short, long = "paint", value_name = "ROW,COL[,TERRAIN]")]
    paint: Vec<PaintOp>,

    /// Print the final map snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Log generation details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Debug)]
struct PaintOp {
    row: isize,
    col: isize,
    terrain: Option<TerrainCategory>,
}

impl FromStr for PaintOp {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let coord = |text: &str| {
            text.parse::<isize>()
                .map_err(|_| EditorError::Config(format!("bad paint coordinate '{}' in '{}'", text, s)))
        };
        match parts.as_slice() {
            [row, col] => Ok(PaintOp { row: coord(*row)?, col: coord(*col)?, terrain: None }),
            [row, col, terrain] => Ok(PaintOp {
                row: coord(*row)?,
                col: coord(*col)?,
                terrain: Some(terrain.parse()?),
            }),
            _ => Err(EditorError::Config(format!("expected ROW,COL[,TERRAIN], got '{}'", s))),
        }
    }
}

fn build_config(args: &Args) -> Result<EditorConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => EditorConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => EditorConfig::default(),
    };
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(markers) = args.markers {
        config.marker_count = markers;
    }
    if args.reproducible_markers {
        config.marker_seeding = MarkerSeeding::FromMapSeed;
    }
    if let Some(terrain) = args.terrain {
        config.default_terrain = terrain;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&args)?;
    let mut engine = MapEngine::new(config)?;

    // Progress goes to stderr when stdout carries JSON
    let report = |line: String| {
        if args.json {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    };

    let (rows, cols) = engine.dimensions();
    report(format!("Map size: {}x{}", rows, cols));

    let seed = match args.seed {
        Some(value) => {
            let seed = MapSeed::new(value)?;
            engine.generate_with_seed(seed);
            seed
        }
        None => engine.generate(),
    };
    report(format!("Generated map with seed: {}", seed));
    report(format!("Placed {} dungeon doors", engine.markers().len()));

    let mut changed = 0;
    for op in &args.paint {
        if let Some(terrain) = op.terrain {
            engine.select_terrain(terrain);
        }
        let outcome = engine.paint_cell(op.row, op.col);
        if outcome.changed() {
            changed += 1;
        }
    }
    if !args.paint.is_empty() {
        report(format!("Painted {} of {} requested cells", changed, args.paint.len()));
    }

    report(engine.seed_label());
    report(format!("{}", engine.summary()));
    for (r, c) in engine.markers().iter() {
        report(format!("  Door at ({}, {})", r, c));
    }

    if args.json {
        println!("{}", engine.snapshot().to_json_pretty()?);
    }

    Ok(())
}
