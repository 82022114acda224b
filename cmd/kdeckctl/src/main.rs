use clap::{Parser, Subcommand, ValueEnum};
use pkg_console::ConsoleSettings;
use pkg_constants::paths::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use pkg_state::{ClusterRepository, MemoryStore, seed};
use pkg_types::cluster::Cluster;
use pkg_types::config::{ConsoleConfigFile, load_config_file};
use pkg_types::quota::{UsageReading, format_amount, format_percent};
use pkg_types::release::ReleaseNote;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kdeckctl", about = "Inspect kdeck clusters and release notes")]
struct Cli {
    /// Path to YAML config file
    #[arg(long, short)]
    config: Option<String>,

    /// Cluster snapshot (YAML) to read instead of the built-in demo data
    #[arg(long)]
    data: Option<String>,

    /// Output format
    #[arg(long, short, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect clusters
    Cluster {
        #[command(subcommand)]
        action: ClusterAction,
    },
    /// List the project catalog and the clusters each project is assigned to
    Projects,
    /// Print the release notes timeline
    ReleaseNotes,
}

#[derive(Subcommand)]
enum ClusterAction {
    /// List all clusters with their average usage
    List,
    /// Show one cluster with per-resource usage
    Show {
        /// Cluster ID
        id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    fn parse(s: &str) -> anyhow::Result<Self> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| anyhow::anyhow!("unknown output format '{}' (table, json, yaml)", s))
    }
}

fn default_config_path() -> Option<String> {
    let dir = dirs::config_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
    Some(dir.to_string_lossy().into_owned())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    // Load config file (returns defaults if file not found)
    let file_cfg: ConsoleConfigFile = match cli.config.clone().or_else(default_config_path) {
        Some(path) => {
            debug!("Config file: {}", path);
            load_config_file(&path)?
        }
        None => ConsoleConfigFile::default(),
    };

    // Merge: CLI args > config file > defaults
    let output = match (cli.output, file_cfg.output.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => OutputFormat::parse(name)?,
        (None, None) => OutputFormat::Table,
    };
    let store = match cli.data.or(file_cfg.data.clone()) {
        Some(path) => MemoryStore::load(&path)?,
        None => {
            info!("Using built-in demo clusters");
            MemoryStore::seeded()?
        }
    };

    match cli.command {
        Commands::Cluster { action } => match action {
            ClusterAction::List => print_clusters(&store.list(), output)?,
            ClusterAction::Show { id } => {
                let cluster = match store.get(&id) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                };
                print_cluster(&cluster, output)?;
            }
        },
        Commands::Projects => {
            let settings = ConsoleSettings::from_config(&file_cfg);
            print_projects(&settings.projects, &store.list(), output)?;
        }
        Commands::ReleaseNotes => print_release_notes(&seed::release_notes()?, output)?,
    }

    Ok(())
}

fn print_structured<T: serde::Serialize>(value: &T, output: OutputFormat) -> anyhow::Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        OutputFormat::Table => anyhow::bail!("table output has no structured form"),
    }
    Ok(())
}

fn usage_cell(reading: &UsageReading) -> String {
    match reading {
        UsageReading::Measured { percent, level } => {
            format!("{} ({})", format_percent(*percent), level)
        }
        UsageReading::Invalid => "n/a (invalid quota)".to_string(),
    }
}

fn print_clusters(clusters: &[Cluster], output: OutputFormat) -> anyhow::Result<()> {
    if output != OutputFormat::Table {
        return print_structured(&clusters, output);
    }

    println!(
        "{:<6} {:<22} {:<12} {:<8} {:<12} {:<18} {}",
        "ID", "NAME", "NAMESPACE", "TYPE", "CREATED BY", "USAGE", "PROJECTS"
    );
    for cluster in clusters {
        println!(
            "{:<6} {:<22} {:<12} {:<8} {:<12} {:<18} {}",
            cluster.id,
            cluster.name,
            cluster.namespace,
            cluster.cluster_type,
            cluster.created_by,
            usage_cell(&cluster.quota.average_reading()),
            cluster.assigned_projects.len()
        );
    }

    if clusters.is_empty() {
        println!("(no clusters)");
    }
    Ok(())
}

fn print_cluster(cluster: &Cluster, output: OutputFormat) -> anyhow::Result<()> {
    if output != OutputFormat::Table {
        return print_structured(cluster, output);
    }

    println!("ID:           {}", cluster.id);
    println!("Name:         {}", cluster.name);
    println!("Namespace:    {}", cluster.namespace);
    println!("Type:         {}", cluster.cluster_type.label());
    println!("Created by:   {}", cluster.created_by);
    println!(
        "Created at:   {}",
        cluster.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    let projects: Vec<&str> = cluster.assigned_projects.iter().map(String::as_str).collect();
    if projects.is_empty() {
        println!("Projects:     (none)");
    } else {
        println!("Projects:     {}", projects.join(", "));
    }
    println!();

    println!(
        "{:<18} {:>10} {:>10} {:>10} {}",
        "RESOURCE", "USED", "MAX", "AVAILABLE", "USAGE"
    );
    for record in cluster.quota.iter() {
        let unit = record.dimension.unit();
        println!(
            "{:<18} {:>10} {:>10} {:>10} {}",
            record.dimension.title(),
            format!("{}{}", format_amount(record.used), unit),
            format!("{}{}", format_amount(record.max), unit),
            format!("{}{}", format_amount(record.available()), unit),
            usage_cell(&record.reading())
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ProjectRow {
    project: String,
    clusters: Vec<String>,
}

/// Catalog projects first, then any assigned project the catalog does not list.
fn project_assignments(catalog: &[String], clusters: &[Cluster]) -> Vec<ProjectRow> {
    let mut projects: Vec<String> = catalog.to_vec();
    for cluster in clusters {
        for project in &cluster.assigned_projects {
            if !projects.contains(project) {
                projects.push(project.clone());
            }
        }
    }
    projects
        .into_iter()
        .map(|project| {
            let names = clusters
                .iter()
                .filter(|c| c.assigned_projects.contains(&project))
                .map(|c| c.name.clone())
                .collect();
            ProjectRow {
                project,
                clusters: names,
            }
        })
        .collect()
}

fn print_projects(catalog: &[String], clusters: &[Cluster], output: OutputFormat) -> anyhow::Result<()> {
    let rows = project_assignments(catalog, clusters);
    if output != OutputFormat::Table {
        return print_structured(&rows, output);
    }

    println!("{:<20} {}", "PROJECT", "CLUSTERS");
    for row in &rows {
        let names = if row.clusters.is_empty() {
            "-".to_string()
        } else {
            row.clusters.join(", ")
        };
        println!("{:<20} {}", row.project, names);
    }
    Ok(())
}

fn print_release_notes(notes: &[ReleaseNote], output: OutputFormat) -> anyhow::Result<()> {
    if output != OutputFormat::Table {
        return print_structured(&notes, output);
    }

    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Version {} ({})", note.version, note.date);
        for (section, entries) in note.sections() {
            println!("  {}", section.title());
            for entry in entries {
                println!("    - {}", entry);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkg_types::quota::UsageLevel;

    #[test]
    fn output_format_from_config() {
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("YAML").unwrap(), OutputFormat::Yaml);
        assert!(OutputFormat::parse("xml").is_err());
    }

    #[test]
    fn usage_cell_marks_invalid_quota() {
        assert_eq!(usage_cell(&UsageReading::Invalid), "n/a (invalid quota)");
        let reading = UsageReading::Measured {
            percent: 71.9,
            level: UsageLevel::Warning,
        };
        assert_eq!(usage_cell(&reading), "71.9% (warning)");
    }

    #[test]
    fn unlisted_projects_are_appended() {
        let store = MemoryStore::seeded().unwrap();
        let catalog = vec!["Project C".to_string(), "Project Z".to_string()];
        let rows = project_assignments(&catalog, &store.list());
        let names: Vec<&str> = rows.iter().map(|r| r.project.as_str()).collect();
        assert_eq!(
            names,
            vec!["Project C", "Project Z", "Project A", "Project B", "Project D", "Project E"]
        );
        assert_eq!(rows[0].clusters, vec!["Private Cluster 1".to_string()]);
        assert!(rows[1].clusters.is_empty());
    }

    #[test]
    fn structured_projects_keep_catalog_order() {
        let store = MemoryStore::seeded().unwrap();
        let catalog = vec!["Project Z".to_string(), "Project A".to_string()];
        let rows = project_assignments(&catalog, &store.list());
        let json = serde_json::to_value(&rows).unwrap();
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["project"].as_str().unwrap())
            .collect();
        assert_eq!(names[..3], ["Project Z", "Project A", "Project B"]);
        assert_eq!(json[1]["clusters"][0], "Public Cluster 1");
    }

    #[test]
    fn cli_parses_cluster_show() {
        let cli = Cli::try_parse_from(["kdeckctl", "-o", "json", "cluster", "show", "2"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::Cluster {
                action: ClusterAction::Show { ref id }
            } if id == "2"
        ));
    }
}
