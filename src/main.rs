use clap::{Args, Parser, Subcommand};
use noticeboard::client::{BoardClient, DETAIL_ROOT, REQUIRED_ELEMENTS, TABLE_ROOT};
use noticeboard::config::{self, BoardConfig};
use noticeboard::dom::Document;
use noticeboard::fetch::{DirFetcher, Fetch, HttpFetcher};
use noticeboard::paths::PathResolver;
use noticeboard::{index, logging, markdown, output};
use std::path::{Path, PathBuf};
use url::Url;

fn version_string() -> &'static str {
    let hash = env!("NOTICEBOARD_GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{}+{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "noticeboard")]
#[command(about = "Bulletin board index builder and viewer for static sites")]
#[command(long_about = "\
Bulletin board index builder and viewer for static sites

Posts are plain files in the posts directory. An optional YAML front matter
block supplies the listing fields:

  data/
  ├── posts.json                   # Generated index (do not edit by hand)
  ├── posts/
  │   ├── 2024-opening.md          # Markdown body
  │   ├── 2024-timetable.html      # HTML fragment body
  │   └── ...
  └── files/                       # Attachments referenced by posts

  ---
  title: 개학 안내
  author: 교무실
  notice: 공지                     # pinned above normal posts
  date: 2024-03-02                 # falls back to the file's mtime
  fileAttachment:
    - data/files/학사일정.pdf
    - { name: 시간표, url: https://example.org/t.pdf }
  ---

Run with no command to rebuild the index. Run 'noticeboard gen-config' to
generate a documented board.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file (default: <root>/board.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Where the board page is served from.
#[derive(Args, Clone)]
struct SiteArgs {
    /// Deployed page URL to read from instead of the local site root
    #[arg(long)]
    site: Option<Url>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the posts directory and write the index (default)
    Build,
    /// Scan the posts directory without writing anything
    Check,
    /// Show the board list as the page renders it
    List {
        #[command(flatten)]
        site: SiteArgs,
        /// Print the rendered list HTML instead of a summary
        #[arg(long)]
        html: bool,
    },
    /// Show one post as the page renders it
    Show {
        /// Post id (the file name stem)
        id: String,
        #[command(flatten)]
        site: SiteArgs,
    },
    /// Print a stock board.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let command = cli.command.unwrap_or(Command::Build);
    let load = || match &cli.config {
        Some(path) => config::load_config_file(path),
        None => config::load_config(&cli.root),
    };

    match command {
        Command::Build => {
            let board_config = load()?;
            let report = index::build(&cli.root, &board_config)?;
            output::print_build_output(&report, &cli.root, &board_config.posts_dir);
        }
        Command::Check => {
            let board_config = load()?;
            let scan = index::scan(&cli.root, &board_config)?;
            output::print_check_output(&scan, &board_config.posts_dir);
        }
        Command::List { site, html } => {
            run_view(&cli.root, &load()?, site.site, &View::List { html })?;
        }
        Command::Show { id, site } => {
            run_view(&cli.root, &load()?, site.site, &View::Show { id })?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

enum View {
    List { html: bool },
    Show { id: String },
}

/// Render a view against a deployed site or the local site root.
fn run_view(
    root: &Path,
    config: &BoardConfig,
    site: Option<Url>,
    view: &View,
) -> Result<(), Box<dyn std::error::Error>> {
    match site {
        Some(location) => {
            let resolver = PathResolver::from_location(&location, &config.hosting).with_layout(config);
            render(HttpFetcher::new(location), resolver, config, view)
        }
        None => {
            let resolver = PathResolver::with_base("").with_layout(config);
            render(DirFetcher::new(root, ""), resolver, config, view)
        }
    }
}

fn render<F: Fetch>(
    fetcher: F,
    resolver: PathResolver,
    config: &BoardConfig,
    view: &View,
) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = markdown::default_renderer(config.render.markdown);
    let document = Document::with_elements(REQUIRED_ELEMENTS);
    let mut client = BoardClient::mount(document, fetcher, renderer, resolver)?;
    client.load_index()?;

    match view {
        View::List { html: true } => {
            if let Some(table) = client.document().get(TABLE_ROOT) {
                println!("{}", table.html);
            }
        }
        View::List { html: false } => {
            output::print_board_listing(&client.board().ordered());
        }
        View::Show { id } => {
            if !client.select(id) {
                return Err(format!("no post with id '{id}'").into());
            }
            let record = client.board().find(id);
            let detail = client.document().get(DETAIL_ROOT);
            if let (Some(record), Some(detail)) = (record, detail) {
                output::print_detail_output(record, &detail.html);
            }
            if let Some(err) = client.detail_error() {
                return Err(err.clone().into());
            }
        }
    }
    Ok(())
}
