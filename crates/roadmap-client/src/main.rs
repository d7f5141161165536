use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use roadmap_client::render::{render_notice, render_roadmap, submit_label};
use roadmap_client::{FormController, HttpRoadmapApi, RoadmapApi, SubmitOutcome};

#[derive(Parser)]
#[command(name = "roadmap-cli")]
#[command(about = "Generate a personalized 5-6 month learning roadmap")]
#[command(version)]
struct Cli {
    #[arg(long, env = "ROADMAP_SERVER_URL", default_value = "http://localhost:8081")]
    server_url: String,

    /// Enable debug mode
    #[arg(long, short, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single roadmap
    Generate {
        /// What you want to learn
        #[arg(long)]
        topic: String,
        /// What you already know
        #[arg(long, default_value = "")]
        knowledge: String,
    },
    /// Prompt for topic and knowledge until EOF or "quit"
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();

    if cli.debug {
        eprintln!("{}", "[DEBUG] Debug mode enabled".dimmed());
        eprintln!(
            "{}",
            format!("[DEBUG] Server URL: {}", cli.server_url).dimmed()
        );
    }

    let controller = FormController::new(HttpRoadmapApi::new(cli.server_url.clone()));

    match cli.command {
        Commands::Generate { topic, knowledge } => {
            controller.set_topic(topic).await;
            controller.set_current_knowledge(knowledge).await;
            submit_and_render(&controller, cli.debug).await;
        }
        Commands::Interactive => run_interactive(&controller, cli.debug).await?,
    }

    Ok(())
}

async fn run_interactive<A: RoadmapApi>(
    controller: &FormController<A>,
    debug: bool,
) -> anyhow::Result<()> {
    println!("{}", "AI-Powered Roadmap Generator".bold().cyan());
    println!("{}", "Type 'quit' to exit.".dimmed());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(topic) = prompt_line(&mut lines, "What do you want to learn?")? else {
            break;
        };
        if matches!(topic.trim(), "quit" | "exit") {
            break;
        }

        let knowledge =
            prompt_line(&mut lines, "What do you already know? (Optional)")?.unwrap_or_default();

        controller.set_topic(topic).await;
        controller.set_current_knowledge(knowledge).await;
        submit_and_render(controller, debug).await;
        println!();
    }

    println!("{}", "👋 Goodbye!".cyan());
    Ok(())
}

fn prompt_line<B: BufRead>(
    lines: &mut io::Lines<B>,
    label: &str,
) -> io::Result<Option<String>> {
    print!("{} ", label.bold());
    io::stdout().flush()?;
    lines.next().transpose()
}

async fn submit_and_render<A: RoadmapApi>(controller: &FormController<A>, debug: bool) {
    let start = Instant::now();

    let submit = controller.submit();
    tokio::pin!(submit);

    // The first poll either resolves (validation) or leaves the request in flight.
    let outcome = tokio::select! {
        biased;
        outcome = &mut submit => outcome,
        _ = std::future::ready(()) => {
            let state = controller.state().await;
            println!("{}", format!("⏳ {}", submit_label(&state)).yellow());
            submit.await
        }
    };

    if debug {
        eprintln!(
            "{}",
            format!("[DEBUG] Submission resolved in {:?}", start.elapsed()).dimmed()
        );
    }

    render_outcome(controller, outcome).await;
}

async fn render_outcome<A: RoadmapApi>(controller: &FormController<A>, outcome: SubmitOutcome) {
    if let Some(notice) = outcome.notice() {
        println!("{}", render_notice(notice));
    }

    if let Some(roadmap) = render_roadmap(&controller.state().await) {
        println!();
        println!("{}", roadmap);
    }
}
