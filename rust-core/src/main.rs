use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use laue_ops::analysis::{
    find_twins, misorientation_maps, neighbor_misorientations, HistogramKind, KernelParams,
    OrientationField, TextureHistogram, TwinParams, VoxelGrid,
};
use laue_ops::orientations::{
    euler_to_quat, quat_to_rodrigues, random_quaternion, EulerAngles, Quat,
};
use laue_ops::symmetries::CrystalStructure;

#[derive(Parser)]
#[command(name = "laue-ops")]
#[command(about = "Crystal orientation symmetry operators, disorientation and orientation binning")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,

    /// JSON file with analysis parameters ("kernel" and "twins" sections)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Disorientation between two orientations given as Bunge Euler angles in degrees
    Misorientation {
        /// Laue class: name, Laue symbol or numeric tag
        #[arg(short, long, default_value = "cubic")]
        structure: CrystalStructure,

        /// First orientation, "phi1,Phi,phi2"
        #[arg(long, value_parser = parse_triplet, allow_hyphen_values = true)]
        euler1: [f32; 3],

        /// Second orientation, "phi1,Phi,phi2"
        #[arg(long, value_parser = parse_triplet, allow_hyphen_values = true)]
        euler2: [f32; 3],
    },
    /// ODF bin of an orientation, or MDF bin with --mdf
    Bin {
        #[arg(short, long, default_value = "cubic")]
        structure: CrystalStructure,

        /// Orientation (or misorientation), "phi1,Phi,phi2" in degrees
        #[arg(long, value_parser = parse_triplet, allow_hyphen_values = true)]
        euler: [f32; 3],

        /// Bin into the misorientation zone instead of the orientation zone
        #[arg(long)]
        mdf: bool,
    },
    /// Print the symmetry operators of a Laue class
    Operators {
        #[arg(short, long, default_value = "cubic")]
        structure: CrystalStructure,

        #[arg(short, long, value_enum, default_value_t = OperatorFormat::Quaternion)]
        format: OperatorFormat,
    },
    /// Run timing benchmarks on random orientations
    Benchmark {
        #[arg(short, long, default_value = "cubic")]
        structure: CrystalStructure,

        /// Edge length of the synthetic voxel cube
        #[arg(short = 'n', long, default_value = "32")]
        size: usize,

        /// Seed of the orientation generator
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OperatorFormat {
    Quaternion,
    Rodrigues,
    Matrix,
}

/// Analysis parameters loaded with --config.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct AnalysisConfig {
    kernel: KernelParams,
    twins: TwinParams,
}

fn parse_triplet(s: &str) -> std::result::Result<[f32; 3], String> {
    let values: Vec<f32> = s
        .split(',')
        .map(|v| v.trim().parse::<f32>().map_err(|e| format!("'{}': {}", v.trim(), e)))
        .collect::<std::result::Result<_, _>>()?;
    match values.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(format!("expected three comma-separated values, got {}", values.len())),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: AnalysisConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.kernel.validate()?;
    config.twins.validate()?;
    debug!("Loaded {:?} from {}", config, path.display());
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count specified but parallel feature not enabled. Ignoring {}.", threads);
        }
    }

    debug!("Starting laue-ops v{}", laue_ops::VERSION);
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Misorientation {
            structure,
            euler1,
            euler2,
        } => print_misorientation(structure, euler1, euler2),
        Commands::Bin {
            structure,
            euler,
            mdf,
        } => print_bin(structure, euler, mdf),
        Commands::Operators { structure, format } => {
            print_operators(structure, format);
            Ok(())
        }
        Commands::Benchmark {
            structure,
            size,
            seed,
        } => {
            info!("Running benchmarks on a {}^3 {} grid", size, structure);
            run_benchmarks(structure, size, seed, &config)
        }
    }
}

fn euler_degrees(e: [f32; 3]) -> Quat {
    euler_to_quat(&EulerAngles::from_degrees(e[0], e[1], e[2]))
}

fn print_misorientation(structure: CrystalStructure, euler1: [f32; 3], euler2: [f32; 3]) -> Result<()> {
    let d = structure
        .ops()
        .misorientation(&euler_degrees(euler1), &euler_degrees(euler2));
    println!("structure: {}", structure);
    println!("angle:     {:.4}°", d.angle_degrees());
    println!("axis:      [{:.5}, {:.5}, {:.5}]", d.axis.x, d.axis.y, d.axis.z);
    Ok(())
}

fn print_bin(structure: CrystalStructure, euler: [f32; 3], mdf: bool) -> Result<()> {
    let ops = structure.ops();
    let r = quat_to_rodrigues(&euler_degrees(euler));
    let bin = if mdf { ops.mdf_bin(&r) } else { ops.odf_bin(&r) };
    println!("structure:  {}", structure);
    println!("zone:       {}", if mdf { "MDF" } else { "ODF" });
    println!("bin:        {} of {}", bin, ops.total_bins());
    if mdf {
        warn!("Bin centres are reported in the ODF zone only");
    } else {
        let [phi1, phi, phi2] = ops.bin_euler_angles(bin)?.to_degrees();
        println!("bin centre: ({:.3}, {:.3}, {:.3})°", phi1, phi, phi2);
    }
    Ok(())
}

fn print_operators(structure: CrystalStructure, format: OperatorFormat) {
    let ops = structure.ops();
    println!("{}: {} operators", structure, ops.operator_count());
    for i in 0..ops.operator_count() {
        match format {
            OperatorFormat::Quaternion => {
                let q = ops.quaternion_operator(i);
                println!("{:>2}: ({:>9.6}, {:>9.6}, {:>9.6}, {:>9.6})", i, q.w, q.i, q.j, q.k);
            }
            OperatorFormat::Rodrigues => {
                let r = ops.rodrigues_operator(i);
                println!("{:>2}: ({:>9.6e}, {:>9.6e}, {:>9.6e})", i, r.x, r.y, r.z);
            }
            OperatorFormat::Matrix => {
                let m = ops.matrix_operator(i);
                println!("{:>2}:", i);
                for row in m.row_iter() {
                    println!("    [{:>9.6}, {:>9.6}, {:>9.6}]", row[0], row[1], row[2]);
                }
            }
        }
    }
}

fn run_benchmarks(
    structure: CrystalStructure,
    size: usize,
    seed: u64,
    config: &AnalysisConfig,
) -> Result<()> {
    if size == 0 {
        bail!("Benchmark grid size must be at least 1");
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = VoxelGrid::new(size, size, size);
    let structures = [structure];

    // One feature per z slice, each voxel oriented at random
    let quats: Vec<Quat> = (0..grid.len()).map(|_| random_quaternion(&mut rng)).collect();
    let phases = vec![1usize; grid.len()];
    let voxels = OrientationField::new(&quats, &phases, &structures)?;
    let feature_ids: Vec<usize> = (0..grid.len()).map(|i| grid.coords(i)[2] + 1).collect();

    let mut feature_quats = vec![Quat::identity()];
    feature_quats.extend((0..size).map(|_| random_quaternion(&mut rng)));
    let mut feature_phases = vec![1usize; size + 1];
    feature_phases[0] = 0;
    let features = OrientationField::new(&feature_quats, &feature_phases, &structures)?;
    let neighbors: Vec<Vec<usize>> = (0..=size)
        .map(|f| match f {
            0 => vec![],
            f => [f - 1, f + 1]
                .into_iter()
                .filter(|&n| n >= 1 && n <= size)
                .collect(),
        })
        .collect();

    let start = Instant::now();
    let ops = structure.ops();
    let mut sum = 0.0f32;
    for pair in quats.windows(2) {
        sum += ops.misorientation(&pair[0], &pair[1]).angle_degrees();
    }
    let elapsed = start.elapsed();
    let pair_count = quats.len().saturating_sub(1);
    println!(
        "misorientation: {} pairs in {:?} (mean {:.3}°)",
        pair_count,
        elapsed,
        if pair_count == 0 { 0.0 } else { sum / pair_count as f32 }
    );

    let start = Instant::now();
    let mut odf = TextureHistogram::new(structure, HistogramKind::Odf);
    odf.accumulate_orientations(&quats)?;
    println!("ODF histogram: {} orientations in {:?}", odf.total(), start.elapsed());

    let start = Instant::now();
    let maps = misorientation_maps(&grid, &voxels, &feature_ids, &features, &config.kernel)?;
    println!(
        "kernel maps: {} voxels in {:?} (kernel size {})",
        maps.kernel_average.len(),
        start.elapsed(),
        config.kernel.kernel_size
    );

    let start = Instant::now();
    let pairs = neighbor_misorientations(&features, &neighbors)?;
    let twins = find_twins(&features, &neighbors, &config.twins)?;
    println!(
        "neighbors: {} lists, {} twins merged in {:?}",
        pairs.len(),
        twins.twin_count,
        start.elapsed()
    );

    let mut mdf = TextureHistogram::new(structure, HistogramKind::Mdf);
    mdf.accumulate_misorientations(&features, &neighbors)?;
    if let Some((bin, count)) = mdf.peak() {
        debug!("MDF peak bin {} holds {} of {} pairs", bin, count, mdf.total());
    }
    Ok(())
}
